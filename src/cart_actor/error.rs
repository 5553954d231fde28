//! Error types for the Cart actor and the cart service.
//!
//! The `Display` text of each variant is the message shown to the shopper.

use crate::model::UserId;
use crate::user_actor::UserError;
use actor_framework::FrameworkError;
use thiserror::Error;

/// Error classification used to pick a response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidRequest,
    InternalError,
}

impl ErrorKind {
    /// HTTP status code for this kind.
    pub fn status_code(self) -> u16 {
        match self {
            ErrorKind::NotFound => 404,
            ErrorKind::InvalidRequest => 400,
            ErrorKind::InternalError => 500,
        }
    }
}

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("User does not have a cart")]
    CartNotFound,

    #[error("Product doesn't exist in database")]
    ProductNotFound,

    #[error("Product already in cart. Use the cart sidebar to update or remove product from cart")]
    ProductAlreadyInCart,

    #[error("User does not have a cart. Use POST to create cart and add a product")]
    NoCartToUpdate,

    #[error("User does not have a cart.")]
    NoCartToDelete,

    #[error("Product not in cart")]
    ProductNotInCart,

    #[error("User does not have any product in cart")]
    EmptyCart,

    #[error("Address is not set")]
    AddressNotSet,

    #[error("Insufficient balance in wallet")]
    InsufficientBalance,

    /// The cart total does not fit a `Decimal`.
    #[error("Cart total is too large")]
    TotalOverflow,

    /// Cart creation failed; the cause is kept for logs only.
    #[error("500 Internal Server Error")]
    CreateFailed(String),

    /// A cart is already stored under this user.
    #[error("Cart already exists: {0}")]
    CartAlreadyExists(String),

    /// The cart's owner has no user record.
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl CartError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CartError::CartNotFound => ErrorKind::NotFound,
            CartError::ProductNotFound
            | CartError::ProductAlreadyInCart
            | CartError::NoCartToUpdate
            | CartError::NoCartToDelete
            | CartError::ProductNotInCart
            | CartError::EmptyCart
            | CartError::AddressNotSet
            | CartError::InsufficientBalance
            | CartError::TotalOverflow => ErrorKind::InvalidRequest,
            CartError::CreateFailed(_)
            | CartError::CartAlreadyExists(_)
            | CartError::UserNotFound(_)
            | CartError::ActorCommunicationError(_) => ErrorKind::InternalError,
        }
    }

    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }
}

impl From<String> for CartError {
    fn from(msg: String) -> Self {
        CartError::ActorCommunicationError(msg)
    }
}

/// Recovers the typed `CartError` an action failed with; plumbing failures become
/// `CartNotFound`, `CartAlreadyExists` or `ActorCommunicationError`.
impl From<FrameworkError> for CartError {
    fn from(e: FrameworkError) -> Self {
        match e.entity_error::<CartError>() {
            Ok(cart_error) => cart_error,
            Err(FrameworkError::NotFound(_)) => CartError::CartNotFound,
            Err(FrameworkError::AlreadyExists(key)) => CartError::CartAlreadyExists(key),
            Err(other) => CartError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl CartError {
    /// Maps failures of the user actor seen during checkout.
    pub(crate) fn from_user_error(user_id: &UserId, e: UserError) -> Self {
        match e {
            UserError::NotFound(_) => CartError::UserNotFound(user_id.clone()),
            UserError::InsufficientBalance { .. } => CartError::InsufficientBalance,
            other => CartError::ActorCommunicationError(other.to_string()),
        }
    }
}
