//! Error types for the User actor.

use crate::model::UserId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// The requested user was not found.
    #[error("User not found: {0}")]
    NotFound(UserId),

    /// Another user is already registered with this email.
    #[error("Email already taken")]
    EmailTaken,

    /// A shipping address must contain something other than whitespace.
    #[error("Address must not be blank")]
    BlankAddress,

    /// Debits must be non-negative.
    #[error("Invalid debit amount: {0}")]
    InvalidAmount(Decimal),

    /// The wallet holds less than the requested debit. Nothing was charged.
    #[error("Insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance {
        requested: Decimal,
        available: Decimal,
    },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for UserError {
    fn from(msg: String) -> Self {
        UserError::ActorCommunicationError(msg)
    }
}
