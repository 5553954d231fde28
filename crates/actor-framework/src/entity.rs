//! # ActorEntity Trait
//!
//! The contract every resource (User, Product, Cart, …) implements to be managed by the
//! generic [`ResourceActor`](crate::ResourceActor). It names the associated types for IDs,
//! DTOs, actions, context and errors, and provides the lifecycle hooks the actor loop calls.
//!
//! # Keys
//! Most resources get a sequential ID generated by the actor (`T::Id: From<u32>`).
//! Resources that are owned by another resource (a cart belongs to exactly one user)
//! return their key from [`ActorEntity::natural_key`] instead, and the actor refuses to
//! create a second entity under the same key.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::natural_key`] - `None` by default (generated IDs)
//! - [`ActorEntity::conflicts_with`] - `false` by default (no uniqueness rules)
//! - [`ActorEntity::on_create`] / [`ActorEntity::on_delete`] - `Ok(())` by default

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are `async` so an entity can call other actors while handling a request
/// (a cart calls the user actor to debit the wallet during checkout). The `Context`
/// type carries those dependencies and is injected through `ResourceActor::run`.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation, and ordered so
    /// listings come back in a stable order.
    type Id: Eq + Ord + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g., `AddItem`, `DebitWallet`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum per actor rather than one per message: `CartError` is the union of
    /// everything any cart action can fail with. Errors cross the channel boxed inside
    /// [`FrameworkError::EntityError`](crate::FrameworkError::EntityError) and can be
    /// recovered with [`FrameworkError::entity_error`](crate::FrameworkError::entity_error).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Key to store the new entity under, derived from the create payload.
    ///
    /// Returning `None` lets the actor generate the next sequential ID.
    fn natural_key(_params: &Self::Create) -> Option<Self::Id> {
        None
    }

    /// Construct the full Entity from the ID and Payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Whether this (not yet stored) entity collides with an existing one.
    ///
    /// Checked against every stored entity before `on_create`; a collision fails the
    /// create with [`FrameworkError::AlreadyExists`](crate::FrameworkError::AlreadyExists).
    fn conflicts_with(&self, _existing: &Self) -> bool {
        false
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is constructed, before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the system.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    ///
    /// The actor processes one message at a time, so everything done here on `self`
    /// is a single atomic read-modify-write from the point of view of other callers.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
