//! # Actor Framework
//!
//! Building blocks for type-safe, concurrent resource actors on Tokio: each resource
//! type (users, products, carts) lives in one actor task that owns its store and
//! processes requests one at a time.
//!
//! ## Why actors for resources?
//!
//! - **Isolated state**: a resource's store is owned by one task. No shared memory, no locks.
//! - **Serialized mutation**: requests to one actor never interleave, so a
//!   read-modify-write inside a hook (add an item to a cart, debit a wallet) cannot
//!   lose an update to a concurrent request.
//! - **Uniform API**: every resource gets Create / Get / List / Update / Delete plus
//!   resource-specific `Action`s, driven by the same generic loop.
//!
//! Further reading: [Actors with Tokio](https://ryhl.io/blog/actors-with-tokio/).
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]) - business rules and domain state
//! 2. **Runtime** ([`ResourceActor`]) - message loop, keys, staging, logging
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]) - typed request/response calls
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Account {
//!     id: u32,
//!     balance: u64,
//! }
//!
//! #[derive(Debug)] struct AccountCreate { balance: u64 }
//! #[derive(Debug)] enum AccountAction { Debit(u64) }
//! #[derive(Debug, thiserror::Error)]
//! #[error("Insufficient balance")]
//! struct InsufficientBalance;
//!
//! #[async_trait]
//! impl ActorEntity for Account {
//!     type Id = u32;
//!     type Create = AccountCreate;
//!     type Update = ();
//!     type Action = AccountAction;
//!     type ActionResult = u64;
//!     type Context = ();
//!     type Error = InsufficientBalance;
//!
//!     fn from_create_params(id: u32, params: AccountCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, balance: params.balance })
//!     }
//!
//!     async fn on_update(&mut self, _: (), _: &()) -> Result<(), Self::Error> { Ok(()) }
//!
//!     async fn handle_action(&mut self, action: AccountAction, _: &()) -> Result<u64, Self::Error> {
//!         match action {
//!             AccountAction::Debit(amount) => {
//!                 self.balance = self.balance.checked_sub(amount).ok_or(InsufficientBalance)?;
//!                 Ok(self.balance)
//!             }
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Account>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create(AccountCreate { balance: 300 }).await.unwrap();
//!     assert_eq!(client.perform_action(id, AccountAction::Debit(200)).await.unwrap(), 100);
//!
//!     let overdraft = client.perform_action(id, AccountAction::Debit(200)).await.unwrap_err();
//!     assert!(overdraft.entity_error::<InsufficientBalance>().is_ok());
//! }
//! ```
//!
//! ## Context Injection
//!
//! Dependencies are injected at **runtime** via `run(context)`, not at construction. A cart
//! actor that debits wallets during checkout is started with the user client as its
//! context:
//!
//! ```rust,ignore
//! let (user_actor, user_client) = user_actor::new(32);
//! let (cart_actor, cart_client) = cart_actor::new(32);
//! tokio::spawn(user_actor.run(()));
//! tokio::spawn(cart_actor.run(user_client.clone()));
//! ```
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real `ResourceClient` from scripted expectations, so an
//! actor can be tested against faked dependencies. See the [`mock`] module.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
