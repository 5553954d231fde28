//! # Framework Errors
//!
//! Errors produced by the actor plumbing itself, plus the boxed wrapper that carries
//! an entity's own error type back to the caller.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Item already exists: {0}")]
    AlreadyExists(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the typed entity error carried by [`FrameworkError::EntityError`].
    ///
    /// Returns `Err(self)` unchanged when this is a plumbing error or when the boxed
    /// error is of a different type.
    ///
    /// ```rust
    /// use actor_framework::FrameworkError;
    ///
    /// #[derive(Debug, PartialEq, thiserror::Error)]
    /// #[error("Product not in cart")]
    /// struct NotInCart;
    ///
    /// let err = FrameworkError::EntityError(Box::new(NotInCart));
    /// assert_eq!(err.entity_error::<NotInCart>().unwrap(), NotInCart);
    ///
    /// let err = FrameworkError::ActorClosed;
    /// assert!(err.entity_error::<NotInCart>().is_err());
    /// ```
    pub fn entity_error<E>(self) -> Result<E, Self>
    where
        E: std::error::Error + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => inner
                .downcast::<E>()
                .map(|typed| *typed)
                .map_err(FrameworkError::EntityError),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, thiserror::Error)]
    #[error("wallet empty")]
    struct WalletEmpty;

    #[derive(Debug, thiserror::Error)]
    #[error("other")]
    struct Other;

    #[test]
    fn entity_error_recovers_matching_type() {
        let err = FrameworkError::EntityError(Box::new(WalletEmpty));
        assert_eq!(err.entity_error::<WalletEmpty>().unwrap(), WalletEmpty);
    }

    #[test]
    fn entity_error_keeps_mismatched_type_boxed() {
        let err = FrameworkError::EntityError(Box::new(Other));
        match err.entity_error::<WalletEmpty>() {
            Err(FrameworkError::EntityError(inner)) => assert_eq!(inner.to_string(), "other"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn entity_error_passes_plumbing_errors_through() {
        let err = FrameworkError::NotFound("user_9".into());
        assert!(matches!(
            err.entity_error::<WalletEmpty>(),
            Err(FrameworkError::NotFound(id)) if id == "user_9"
        ));
    }
}
