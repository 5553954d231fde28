//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global `tracing` subscriber once per process.
//!
//! ## Configuration
//!
//! Log levels come from `RUST_LOG`. The format is compact and hides the module
//! prefix (`with_target(false)`); actor logs carry an `entity_type` field instead.
//!
//! ```bash
//! RUST_LOG=info cargo run     # lifecycle and outcomes
//! RUST_LOG=debug cargo run    # full payloads and every request
//! RUST_LOG=cart_checkout=debug,actor_framework=info cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup and shutdown with the final store size
//! - **Entity Operations**: Create, Get, List, Update, Delete and Actions, keyed by id
//! - **Service Calls**: one span per cart operation with the `user_id`
//!
//! ## Checkout Trace
//!
//! With `RUST_LOG=info`, a successful checkout reads:
//!
//! ```text
//! INFO Action ok entity_type="User" id=user_1
//! INFO Checked out user_id=user_1 total=200
//! INFO Action ok entity_type="Cart" id=user_1
//! INFO checkout{user_id=user_1}: Checkout complete total=200 wallet=100
//! ```
//!
//! A rejected checkout logs the guard that stopped it:
//!
//! ```text
//! WARN Action failed entity_type="Cart" id=user_1 error=Address is not set
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type replaces the module path
        .compact()
        .init();
}
