use crate::cart_service::CartService;
use crate::clients::{CartClient, ProductClient, UserClient};
use crate::config::ShopConfig;
use tracing::{error, info};

/// The runtime orchestrator for the shop.
///
/// `ShopSystem` starts the user, product and cart actors, wires the cart actor to the
/// user actor and exposes the clients plus the [`CartService`] built on top of them.
///
/// # Architecture
///
/// - **User Actor**: accounts, shipping addresses and wallets
/// - **Product Actor**: the catalog
/// - **Cart Actor**: one cart per user; its context is a `UserClient` for checkout
///
/// # Example
///
/// ```rust
/// use cart_checkout::config::ShopConfig;
/// use cart_checkout::lifecycle::ShopSystem;
/// use cart_checkout::model::{ProductCreate, UserCreate};
/// use rust_decimal::Decimal;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = ShopSystem::new(&ShopConfig::default());
///
///     let lamp = system
///         .product_client
///         .create_product(ProductCreate::new("Lamp", Decimal::from(40)))
///         .await?;
///     let user_id = system
///         .user_client
///         .create_user(UserCreate::new("Alice", "alice@example.com"))
///         .await?;
///     let user = system.user_client.get_user_by_id(user_id).await?;
///
///     let cart = system.cart_service.add_product_to_cart(&user, lamp, 2).await?;
///     assert_eq!(cart.items.len(), 1);
///
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct ShopSystem {
    /// The cart operations exposed to shoppers
    pub cart_service: CartService,

    /// Client for interacting with the Cart actor
    pub cart_client: CartClient,

    /// Client for interacting with the User actor
    pub user_client: UserClient,

    /// Client for interacting with the Product actor
    pub product_client: ProductClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ShopSystem {
    /// Creates the actors, injects their dependencies and spawns each one in its own
    /// Tokio task. Must be called inside a Tokio runtime.
    pub fn new(config: &ShopConfig) -> Self {
        let buffer_size = config.channel_buffer_size;

        // 1. Create actors (no dependencies yet)
        let (user_actor, user_client) = crate::user_actor::new(buffer_size);
        let (product_actor, product_client) = crate::product_actor::new(buffer_size);
        let (cart_actor, cart_client) = crate::cart_actor::new(buffer_size);

        // 2. Start actors with injected context
        let user_handle = tokio::spawn(user_actor.run(()));
        let product_handle = tokio::spawn(product_actor.run(()));
        let cart_handle = tokio::spawn(cart_actor.run(user_client.clone()));

        let cart_service = CartService::new(
            cart_client.clone(),
            product_client.clone(),
            config.default_payment_option.clone(),
        );

        Self {
            cart_service,
            cart_client,
            user_client,
            product_client,
            handles: vec![cart_handle, user_handle, product_handle],
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes the actors' channels. The cart actor stops first and
    /// releases its `UserClient`, which lets the user actor stop as well. Every clone of
    /// the clients handed out earlier must be dropped too, or this waits forever.
    ///
    /// # Errors
    ///
    /// Returns an error if any actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.cart_service);
        drop(self.cart_client);
        drop(self.user_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
