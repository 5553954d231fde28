//! # Cart Actor
//!
//! Stores one cart per user and executes every cart mutation, including checkout.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Cart`]
//! - [`actions`] - [`CartAction`] and [`CartActionResult`]
//! - [`error`] - [`CartError`] and its [`ErrorKind`] classification
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Dependencies
//!
//! The actor depends on the user actor (`Context = UserClient`), injected at `run`:
//!
//! ```rust,ignore
//! let (cart_actor, cart_client) = cart_actor::new(32);
//! tokio::spawn(cart_actor.run(user_client.clone()));
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::CartClient;
use crate::model::Cart;
use actor_framework::ResourceActor;

/// Creates a new Cart actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Cart>, CartClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    let client = CartClient::new(generic_client);

    (actor, client)
}
