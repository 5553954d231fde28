//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).

pub mod cart_client;
pub mod product_client;
pub mod user_client;

pub use cart_client::*;
pub use product_client::*;
pub use user_client::*;
