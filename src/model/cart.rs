use super::{Product, ProductId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payment option assigned to new carts unless configured otherwise.
pub const DEFAULT_PAYMENT_OPTION: &str = "PAYMENT_OPTION_DEFAULT";

/// One line of a cart: a snapshot of the product taken when it was added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    pub fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    /// `quantity × cost` for this line, `None` on overflow.
    pub fn subtotal(&self) -> Option<Decimal> {
        self.product.cost.checked_mul(Decimal::from(self.quantity))
    }
}

/// A user's shopping cart.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait.
/// It is stored under the owner's [`UserId`] (a natural key), so a user has at most
/// one cart. All mutations are [`CartAction`](crate::cart_actor::CartAction)s executed
/// inside the cart actor.
///
/// # Invariants
/// - No two items share a product id.
/// - Every item has `quantity >= 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub user_id: UserId,
    pub email: String,
    #[serde(rename = "cartItems")]
    pub items: Vec<CartItem>,
    pub payment_option: String,
}

impl Cart {
    /// Sum of `quantity × cost` over all items, `None` if it does not fit a `Decimal`.
    pub fn total(&self) -> Option<Decimal> {
        self.items
            .iter()
            .try_fold(Decimal::ZERO, |total, item| total.checked_add(item.subtotal()?))
    }

    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.items.iter().any(|item| &item.product.id == product_id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Payload for creating a cart around its first item.
#[derive(Debug, Clone)]
pub struct CartCreate {
    pub user_id: UserId,
    pub email: String,
    pub item: CartItem,
    pub payment_option: String,
}

/// What a successful checkout charged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutReceipt {
    pub user_id: UserId,
    pub total: Decimal,
    /// Wallet balance after the debit.
    pub wallet_money: Decimal,
    pub items: Vec<CartItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32, cost: i64) -> Product {
        Product {
            id: ProductId(id),
            name: format!("Product {id}"),
            category: "Misc".into(),
            cost: Decimal::from(cost),
            rating: 4,
            image: String::new(),
        }
    }

    #[test]
    fn test_total_sums_quantity_times_cost() {
        let cart = Cart {
            user_id: UserId(1),
            email: "alice@example.com".into(),
            items: vec![
                CartItem::new(product(1, 100), 2),
                CartItem::new(product(2, 15), 3),
            ],
            payment_option: DEFAULT_PAYMENT_OPTION.into(),
        };
        assert_eq!(cart.total(), Some(Decimal::from(245)));
        assert!(cart.contains(&ProductId(2)));
        assert!(!cart.contains(&ProductId(3)));
    }

    #[test]
    fn test_empty_cart_total_is_zero() {
        let cart = Cart {
            user_id: UserId(1),
            email: String::new(),
            items: vec![],
            payment_option: DEFAULT_PAYMENT_OPTION.into(),
        };
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Some(Decimal::ZERO));
    }

    #[test]
    fn test_total_overflow_is_none() {
        let mut huge = product(1, 0);
        huge.cost = Decimal::MAX;
        let cart = Cart {
            user_id: UserId(1),
            email: String::new(),
            items: vec![CartItem::new(huge.clone(), 2)],
            payment_option: DEFAULT_PAYMENT_OPTION.into(),
        };
        assert_eq!(cart.items[0].subtotal(), None);
        assert_eq!(cart.total(), None);

        let mut second = huge;
        second.id = ProductId(2);
        let cart = Cart {
            items: vec![CartItem::new(product(1, 1), 1), CartItem::new(second, 1)],
            ..cart
        };
        assert_eq!(cart.total(), None);
    }

    #[test]
    fn test_cart_wire_shape() {
        let cart = Cart {
            user_id: UserId(3),
            email: "carol@example.com".into(),
            items: vec![CartItem::new(product(1, 100), 1)],
            payment_option: DEFAULT_PAYMENT_OPTION.into(),
        };
        let json = serde_json::to_value(&cart).unwrap();
        assert_eq!(json["paymentOption"], DEFAULT_PAYMENT_OPTION);
        assert_eq!(json["cartItems"][0]["quantity"], 1);
        assert_eq!(json["cartItems"][0]["product"]["cost"], "100");
    }
}
