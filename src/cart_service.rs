//! # Cart Service
//!
//! The five shopper-facing cart operations. Each one takes the already
//! authenticated [`User`] and returns the resulting [`Cart`] (or a
//! [`CheckoutReceipt`]) or a [`CartError`] whose `Display` is the message to show.
//!
//! Every cart mutation is a single action on the cart actor, so the "look for the
//! product, then change the cart" steps of one request never interleave with
//! another request for the same cart.

use crate::cart_actor::CartError;
use crate::clients::{CartClient, ProductClient};
use crate::model::{Cart, CartCreate, CartItem, CheckoutReceipt, Product, ProductId, User};
use tracing::{debug, error, info, instrument};

/// Orchestrates cart mutation and checkout on top of the cart and product actors.
#[derive(Clone)]
pub struct CartService {
    carts: CartClient,
    products: ProductClient,
    default_payment_option: String,
}

impl CartService {
    pub fn new(
        carts: CartClient,
        products: ProductClient,
        default_payment_option: impl Into<String>,
    ) -> Self {
        Self {
            carts,
            products,
            default_payment_option: default_payment_option.into(),
        }
    }

    /// Returns the user's cart.
    ///
    /// # Errors
    /// `CartNotFound` if the user has no cart.
    #[instrument(skip_all, fields(user_id = %user.id))]
    pub async fn get_cart_by_user(&self, user: &User) -> Result<Cart, CartError> {
        self.carts
            .get_cart(user.id.clone())
            .await?
            .ok_or(CartError::CartNotFound)
    }

    /// Adds a product to the user's cart, creating the cart on first use.
    ///
    /// # Errors
    /// - `ProductNotFound` if the catalog has no such product
    /// - `ProductAlreadyInCart` if the cart already holds it (quantities are never merged)
    /// - `CreateFailed` if a new cart could not be stored
    #[instrument(skip(self, user), fields(user_id = %user.id))]
    pub async fn add_product_to_cart(
        &self,
        user: &User,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<Cart, CartError> {
        let product = self.find_product(product_id).await?;
        let item = CartItem::new(product, quantity);

        match self.carts.add_item(user.id.clone(), item.clone()).await {
            Err(CartError::CartNotFound) => debug!("No cart yet, creating one"),
            result => return result,
        }

        let params = CartCreate {
            user_id: user.id.clone(),
            email: user.email.clone(),
            item: item.clone(),
            payment_option: self.default_payment_option.clone(),
        };
        match self.carts.create_cart(params).await {
            Ok(cart) => {
                info!("Cart created");
                Ok(cart)
            }
            // Another request created the cart after our append missed it.
            Err(CartError::CartAlreadyExists(_)) => {
                debug!("Cart appeared concurrently, appending");
                self.carts.add_item(user.id.clone(), item).await
            }
            Err(e) => {
                error!(error = %e, "Cart creation failed");
                Err(CartError::CreateFailed(e.to_string()))
            }
        }
    }

    /// Sets the quantity of a product already in the cart. A quantity of `0`
    /// behaves exactly like [`delete_product_from_cart`](Self::delete_product_from_cart).
    ///
    /// # Errors
    /// `NoCartToUpdate`, `ProductNotFound` or `ProductNotInCart`, checked in that order.
    #[instrument(skip(self, user), fields(user_id = %user.id))]
    pub async fn update_product_in_cart(
        &self,
        user: &User,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<Cart, CartError> {
        if quantity == 0 {
            return self.delete_product_from_cart(user, product_id).await;
        }

        if self.carts.get_cart(user.id.clone()).await?.is_none() {
            return Err(CartError::NoCartToUpdate);
        }
        self.find_product(product_id.clone()).await?;

        self.carts
            .set_quantity(user.id.clone(), product_id, quantity)
            .await
            .map_err(|e| match e {
                CartError::CartNotFound => CartError::NoCartToUpdate,
                other => other,
            })
    }

    /// Removes a product from the cart.
    ///
    /// # Errors
    /// `NoCartToDelete` or `ProductNotInCart`; the cart is left unchanged on error.
    #[instrument(skip(self, user), fields(user_id = %user.id))]
    pub async fn delete_product_from_cart(
        &self,
        user: &User,
        product_id: ProductId,
    ) -> Result<Cart, CartError> {
        self.carts
            .remove_item(user.id.clone(), product_id)
            .await
            .map_err(|e| match e {
                CartError::CartNotFound => CartError::NoCartToDelete,
                other => other,
            })
    }

    /// Charges the user's wallet for the cart total and empties the cart.
    ///
    /// Guards run in order and the first failure wins; on any error neither the
    /// wallet nor the cart changes.
    ///
    /// # Errors
    /// `CartNotFound`, `EmptyCart`, `AddressNotSet`, `TotalOverflow` or
    /// `InsufficientBalance`.
    #[instrument(skip_all, fields(user_id = %user.id))]
    pub async fn checkout(&self, user: &User) -> Result<CheckoutReceipt, CartError> {
        let receipt = self.carts.checkout(user.id.clone()).await?;
        info!(total = %receipt.total, wallet = %receipt.wallet_money, "Checkout complete");
        Ok(receipt)
    }

    async fn find_product(&self, product_id: ProductId) -> Result<Product, CartError> {
        self.products
            .get_product(product_id)
            .await
            .map_err(|e| CartError::ActorCommunicationError(e.to_string()))?
            .ok_or(CartError::ProductNotFound)
    }
}
