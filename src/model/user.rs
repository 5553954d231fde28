use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Placeholder stored in [`User::address`] until the user sets a shipping address.
pub const DEFAULT_ADDRESS: &str = "ADDRESS_NOT_SET";

/// Wallet balance granted at registration.
pub fn default_wallet_money() -> Decimal {
    Decimal::from(500)
}

/// Type-safe identifier for Users.
///
/// Carts are keyed by this ID, never by email.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub u32);

impl From<u32> for UserId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user_{}", self.0)
    }
}

/// Represents a registered user in the system.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`impl ActorEntity for User`](#impl-ActorEntity-for-User) for details on:
/// - Creation parameters ([`UserCreate`])
/// - Custom actions ([`UserAction`](crate::user_actor::UserAction))
///
/// There are no generic updates (`Update = ()`): the email is checked for uniqueness
/// on registration only, so it never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub wallet_money: Decimal,
    pub address: String,
}

impl User {
    /// Whether the user has replaced the placeholder with a real shipping address.
    ///
    /// Both a blank address and [`DEFAULT_ADDRESS`] count as "not set".
    pub fn has_shipping_address(&self) -> bool {
        let address = self.address.trim();
        !address.is_empty() && address != DEFAULT_ADDRESS
    }
}

/// Payload for registering a new user.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
    pub wallet_money: Decimal,
}

impl UserCreate {
    /// Registration payload with the default starting balance.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            wallet_money: default_wallet_money(),
        }
    }

    pub fn with_wallet_money(mut self, wallet_money: Decimal) -> Self {
        self.wallet_money = wallet_money;
        self
    }
}

/// The subset of a user needed to ship an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAddress {
    pub id: UserId,
    pub email: String,
    pub address: String,
}

impl From<User> for UserAddress {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            address: user.address,
        }
    }
}
