//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the shop's actors.
//!
//! ## Dependency Injection via Context
//!
//! Actors are constructed without dependencies and receive them at `run(context)`:
//!
//! ```rust,ignore
//! impl ActorEntity for User { type Context = (); }
//! impl ActorEntity for Cart { type Context = UserClient; }
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the channels
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - wait for every actor task to finish
//!
//! The cart actor holds a `UserClient` clone, so the user actor only stops after the
//! cart actor has. The dependency graph is acyclic, so this always terminates.

pub mod shop_system;
pub mod tracing;

pub use shop_system::*;
pub use tracing::*;
