//! ActorEntity trait implementation for the User domain type.
//!
//! Users get sequential IDs and are unique by email (case-insensitive). Wallet debits
//! are compare-and-debit inside the actor, so two concurrent checkouts can never
//! overdraw the same wallet.

use super::actions::{UserAction, UserActionResult};
use super::error::UserError;
use crate::model::{User, UserCreate, UserId, DEFAULT_ADDRESS};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use rust_decimal::Decimal;

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = ();
    type Action = UserAction;
    type ActionResult = UserActionResult;
    type Context = ();
    type Error = UserError;

    /// Creates a new User with the placeholder address.
    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, Self::Error> {
        if params.wallet_money < Decimal::ZERO {
            return Err(UserError::InvalidAmount(params.wallet_money));
        }
        Ok(Self {
            id,
            name: params.name,
            email: params.email,
            wallet_money: params.wallet_money,
            address: DEFAULT_ADDRESS.to_string(),
        })
    }

    fn conflicts_with(&self, existing: &Self) -> bool {
        self.email.eq_ignore_ascii_case(&existing.email)
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: UserAction,
        _ctx: &(),
    ) -> Result<UserActionResult, Self::Error> {
        match action {
            UserAction::SetAddress(address) => {
                if address.trim().is_empty() {
                    return Err(UserError::BlankAddress);
                }
                self.address = address;
                Ok(UserActionResult::SetAddress(self.address.clone()))
            }
            UserAction::DebitWallet(amount) => {
                if amount < Decimal::ZERO {
                    return Err(UserError::InvalidAmount(amount));
                }
                if self.wallet_money < amount {
                    return Err(UserError::InsufficientBalance {
                        requested: amount,
                        available: self.wallet_money,
                    });
                }
                self.wallet_money -= amount;
                Ok(UserActionResult::DebitWallet(self.wallet_money))
            }
        }
    }
}
