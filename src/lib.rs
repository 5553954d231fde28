//! # Cart & Checkout
//!
//! > **A shopping-cart backend built from resource actors.**
//!
//! Users, products and carts each live in their own actor (a Tokio task that owns its
//! store and handles requests one at a time). The [`CartService`](cart_service::CartService)
//! turns those actors into the five shopper operations: get cart, add product, update
//! quantity, remove product and checkout.
//!
//! ## Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! Each actor defines its own error type (`UserError`, `ProductError`, `CartError`).
//! Errors raised inside an actor cross the channel boxed and are recovered with
//! [`FrameworkError::entity_error`](actor_framework::FrameworkError::entity_error), so
//! callers match on the original variant. `CartError::kind()` classifies every cart
//! failure as `NotFound`, `InvalidRequest` or `InternalError`.
//!
//! ### 2. Per-Cart Serialization
//! Add, update, remove and checkout are cart *actions*. The cart actor runs one at a time,
//! so a duplicate check and the append that follows it cannot be split by another request.
//! Checkout debits the wallet through the user actor, which re-checks the balance before
//! subtracting, and only then clears the cart.
//!
//! ### 3. Stable Cart Keys
//! A cart is stored under its owner's [`UserId`](model::UserId); the email on the cart is
//! display data only.
//!
//! ### 4. Observability
//! `tracing` spans and structured fields throughout. See [`lifecycle::tracing`].
//!
//! ## Module Tour
//!
//! - [`model`] - `User`, `Product`, `Cart` and their DTOs
//! - [`user_actor`], [`product_actor`], [`cart_actor`] - the `ActorEntity` implementations
//! - [`clients`] - typed wrappers around `ResourceClient`
//! - [`cart_service`] - the shopper-facing operations
//! - [`config`] - environment configuration
//! - [`lifecycle`] - [`ShopSystem`](lifecycle::ShopSystem) startup/shutdown and tracing setup
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod cart_actor;
pub mod cart_service;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
pub mod user_actor;
