use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// Accepts both the bare number (`"7"`) and the display form (`"product_7"`).
impl FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let raw = raw.strip_prefix("product_").unwrap_or(raw);
        raw.parse().map(ProductId)
    }
}

/// Represents a product in the catalog.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// The catalog is read-only once seeded (`Update = ()`). Carts copy the whole product
/// into each line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub cost: Decimal,
    pub rating: u8,
    pub image: String,
}

/// DTO for Product creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub name: String,
    pub category: String,
    pub cost: Decimal,
    pub rating: u8,
    pub image: String,
}

impl ProductCreate {
    /// Minimal payload: a named product at `cost`, everything else left blank.
    pub fn new(name: impl Into<String>, cost: Decimal) -> Self {
        Self {
            name: name.into(),
            category: String::new(),
            cost,
            rating: 0,
            image: String::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_parses_both_forms() {
        assert_eq!("7".parse::<ProductId>().unwrap(), ProductId(7));
        assert_eq!("product_7".parse::<ProductId>().unwrap(), ProductId(7));
        assert!("product_x".parse::<ProductId>().is_err());
        assert!("".parse::<ProductId>().is_err());
    }

    #[test]
    fn test_product_id_display_round_trips() {
        let id = ProductId(42);
        assert_eq!(id.to_string().parse::<ProductId>().unwrap(), id);
    }
}
