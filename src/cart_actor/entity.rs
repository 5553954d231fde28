//! ActorEntity trait implementation for the Cart domain type.
//!
//! A cart is stored under its owner's [`UserId`](crate::model::UserId). The actor is
//! started with a [`UserClient`] as context so checkout can read the owner's address
//! and debit their wallet.

use super::actions::{CartAction, CartActionResult};
use super::error::CartError;
use crate::clients::UserClient;
use crate::model::{Cart, CartCreate, CheckoutReceipt, ProductId, UserId};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl ActorEntity for Cart {
    type Id = UserId;
    type Create = CartCreate;
    type Update = ();
    type Action = CartAction;
    type ActionResult = CartActionResult;
    type Context = UserClient;
    type Error = CartError;

    fn natural_key(params: &CartCreate) -> Option<UserId> {
        Some(params.user_id.clone())
    }

    /// Creates a cart holding exactly its first item.
    fn from_create_params(id: UserId, params: CartCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: id,
            email: params.email,
            items: vec![params.item],
            payment_option: params.payment_option,
        })
    }

    async fn on_update(&mut self, _update: (), _ctx: &UserClient) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: CartAction,
        users: &UserClient,
    ) -> Result<CartActionResult, Self::Error> {
        match action {
            CartAction::AddItem(item) => {
                if self.contains(&item.product.id) {
                    return Err(CartError::ProductAlreadyInCart);
                }
                self.items.push(item);
                Ok(CartActionResult::AddItem(self.clone()))
            }
            CartAction::SetQuantity {
                product_id,
                quantity: 0,
            } => {
                self.remove_item(&product_id)?;
                Ok(CartActionResult::SetQuantity(self.clone()))
            }
            CartAction::SetQuantity {
                product_id,
                quantity,
            } => {
                let item = self
                    .items
                    .iter_mut()
                    .find(|item| item.product.id == product_id)
                    .ok_or(CartError::ProductNotInCart)?;
                item.quantity = quantity;
                Ok(CartActionResult::SetQuantity(self.clone()))
            }
            CartAction::RemoveItem(product_id) => {
                self.remove_item(&product_id)?;
                Ok(CartActionResult::RemoveItem(self.clone()))
            }
            CartAction::Checkout => self.checkout(users).await.map(CartActionResult::Checkout),
        }
    }
}

impl Cart {
    fn remove_item(&mut self, product_id: &ProductId) -> Result<(), CartError> {
        let before = self.items.len();
        self.items.retain(|item| &item.product.id != product_id);
        if self.items.len() == before {
            return Err(CartError::ProductNotInCart);
        }
        Ok(())
    }

    async fn checkout(&mut self, users: &UserClient) -> Result<CheckoutReceipt, CartError> {
        if self.is_empty() {
            return Err(CartError::EmptyCart);
        }

        let user = users
            .get_user_by_id(self.user_id.clone())
            .await
            .map_err(|e| CartError::from_user_error(&self.user_id, e))?;
        if !user.has_shipping_address() {
            return Err(CartError::AddressNotSet);
        }

        let total = self.total().ok_or(CartError::TotalOverflow)?;
        if user.wallet_money < total {
            debug!(
                user_id = %self.user_id,
                %total,
                wallet = %user.wallet_money,
                "Balance too low"
            );
            return Err(CartError::InsufficientBalance);
        }

        // The user actor re-checks the balance, so a concurrent debit cannot overdraw.
        let wallet_money = users
            .debit_wallet(self.user_id.clone(), total)
            .await
            .map_err(|e| CartError::from_user_error(&self.user_id, e))?;

        let items = std::mem::take(&mut self.items);
        info!(user_id = %self.user_id, %total, "Checked out");
        Ok(CheckoutReceipt {
            user_id: self.user_id.clone(),
            total,
            wallet_money,
            items,
        })
    }
}
