//! ActorEntity trait implementation for the Product domain type.
//!
//! The catalog has no updates and no custom actions: products are seeded through
//! `Create` and read through `Get` / `List`.

use super::error::ProductError;
use crate::model::{Product, ProductCreate, ProductId};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Products support no custom actions.
#[derive(Debug, Clone)]
pub enum ProductAction {}

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ();
    type Action = ProductAction;
    type ActionResult = ();
    type Context = ();
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        if params.cost < Decimal::ZERO {
            return Err(ProductError::InvalidCost(params.cost));
        }
        Ok(Self {
            id,
            name: params.name,
            category: params.category,
            cost: params.cost,
            rating: params.rating,
            image: params.image,
        })
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(&mut self, action: ProductAction, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }
}
