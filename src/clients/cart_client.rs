//! # Cart Client
//!
//! Provides a high‑level API for interacting with the `Cart` actor. Carts are
//! addressed by their owner's [`UserId`].
use crate::cart_actor::{CartAction, CartActionResult, CartError};
use crate::model::{Cart, CartCreate, CartItem, CheckoutReceipt, ProductId, UserId};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<Cart>,
}

impl CartClient {
    pub fn new(inner: ResourceClient<Cart>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Cart> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<Cart> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CartError::from(e)
    }
}

impl CartClient {
    /// The user's cart, or `None` if they have never added anything.
    pub async fn get_cart(&self, user_id: UserId) -> Result<Option<Cart>, CartError> {
        self.get(user_id).await
    }

    /// Creates the user's cart around its first item and returns it.
    ///
    /// Fails with `CartAlreadyExists` if the user already has a cart.
    #[instrument(skip(self, params), fields(user_id = %params.user_id))]
    pub async fn create_cart(&self, params: CartCreate) -> Result<Cart, CartError> {
        debug!(?params, "create_cart called");
        let user_id = self.inner.create(params).await.map_err(Self::map_error)?;
        self.get(user_id).await?.ok_or(CartError::CartNotFound)
    }

    #[instrument(skip(self, item), fields(product_id = %item.product.id))]
    pub async fn add_item(&self, user_id: UserId, item: CartItem) -> Result<Cart, CartError> {
        debug!("Sending request");
        match self.act(user_id, CartAction::AddItem(item)).await? {
            CartActionResult::AddItem(cart) => Ok(cart),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn set_quantity(
        &self,
        user_id: UserId,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<Cart, CartError> {
        debug!("Sending request");
        let action = CartAction::SetQuantity {
            product_id,
            quantity,
        };
        match self.act(user_id, action).await? {
            CartActionResult::SetQuantity(cart) => Ok(cart),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn remove_item(
        &self,
        user_id: UserId,
        product_id: ProductId,
    ) -> Result<Cart, CartError> {
        debug!("Sending request");
        match self.act(user_id, CartAction::RemoveItem(product_id)).await? {
            CartActionResult::RemoveItem(cart) => Ok(cart),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn checkout(&self, user_id: UserId) -> Result<CheckoutReceipt, CartError> {
        debug!("Sending request");
        match self.act(user_id, CartAction::Checkout).await? {
            CartActionResult::Checkout(receipt) => Ok(receipt),
            other => Err(unexpected(other)),
        }
    }

    async fn act(
        &self,
        user_id: UserId,
        action: CartAction,
    ) -> Result<CartActionResult, CartError> {
        self.inner
            .perform_action(user_id, action)
            .await
            .map_err(Self::map_error)
    }
}

fn unexpected(result: CartActionResult) -> CartError {
    CartError::ActorCommunicationError(format!("Unexpected action result: {result:?}"))
}
