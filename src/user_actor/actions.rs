//! Custom actions for the User actor.
//!
//! These are the operations on a [`User`](crate::model::User) that go beyond CRUD and
//! must be atomic with respect to other requests for the same user, such as
//! charging the wallet at checkout.

use rust_decimal::Decimal;

/// Custom actions for User entities.
#[derive(Debug, Clone)]
pub enum UserAction {
    /// Replaces the shipping address.
    ///
    /// # Errors
    /// Fails with `BlankAddress` if the address is empty or whitespace.
    SetAddress(String),
    /// Subtracts an amount from the wallet if, and only if, the balance covers it.
    ///
    /// # Errors
    /// Fails with `InsufficientBalance` (wallet untouched) or `InvalidAmount`.
    DebitWallet(Decimal),
}

/// Results from UserActions - variants match 1:1 with UserAction
#[derive(Debug, Clone, PartialEq)]
pub enum UserActionResult {
    /// The stored address.
    SetAddress(String),
    /// The wallet balance after the debit.
    DebitWallet(Decimal),
}
