//! # User Client
//!
//! Provides a high‑level API for interacting with the `User` actor.
//! It wraps a `ResourceClient<User>` and exposes domain‑specific methods.
use crate::model::{User, UserAddress, UserCreate, UserId};
use crate::user_actor::{UserAction, UserActionResult, UserError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.entity_error::<UserError>() {
            Ok(user_error) => user_error,
            // Users only conflict on email.
            Err(FrameworkError::AlreadyExists(_)) => UserError::EmailTaken,
            Err(other) => UserError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl UserClient {
    /// Registers a user. Fails with `EmailTaken` if the email is already in use.
    #[instrument(skip(self))]
    pub async fn create_user(&self, params: UserCreate) -> Result<UserId, UserError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Fetches a user, treating absence as `UserError::NotFound`.
    #[instrument(skip(self))]
    pub async fn get_user_by_id(&self, id: UserId) -> Result<User, UserError> {
        debug!("Sending request");
        self.get(id.clone()).await?.ok_or(UserError::NotFound(id))
    }

    /// Finds the user registered with `email` (case-insensitive).
    #[instrument(skip(self))]
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        debug!("Sending request");
        let users = self.list().await?;
        Ok(users
            .into_iter()
            .find(|user| user.email.eq_ignore_ascii_case(email)))
    }

    #[instrument(skip(self))]
    pub async fn get_user_address(&self, id: UserId) -> Result<UserAddress, UserError> {
        self.get_user_by_id(id).await.map(UserAddress::from)
    }

    /// Replaces the shipping address and returns the stored value.
    #[instrument(skip(self))]
    pub async fn set_address(&self, id: UserId, address: String) -> Result<String, UserError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id.clone(), UserAction::SetAddress(address))
            .await
        {
            Ok(UserActionResult::SetAddress(address)) => Ok(address),
            Ok(other) => Err(unexpected(other)),
            Err(e) => Err(map_missing(e, id)),
        }
    }

    /// Debits the wallet if the balance covers `amount`; returns the new balance.
    #[instrument(skip(self))]
    pub async fn debit_wallet(&self, id: UserId, amount: Decimal) -> Result<Decimal, UserError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id.clone(), UserAction::DebitWallet(amount))
            .await
        {
            Ok(UserActionResult::DebitWallet(balance)) => Ok(balance),
            Ok(other) => Err(unexpected(other)),
            Err(e) => Err(map_missing(e, id)),
        }
    }
}

fn map_missing(e: FrameworkError, id: UserId) -> UserError {
    match e {
        FrameworkError::NotFound(_) => UserError::NotFound(id),
        other => UserClient::map_error(other),
    }
}

fn unexpected(result: UserActionResult) -> UserError {
    UserError::ActorCommunicationError(format!("Unexpected action result: {result:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::{create_mock_client, expect_action, MockClient};

    #[tokio::test]
    async fn test_debit_wallet_sends_amount() {
        let (client, mut receiver) = create_mock_client::<User>(10);
        let user_client = UserClient::new(client);

        let debit_task = tokio::spawn(async move {
            user_client
                .debit_wallet(UserId(1), Decimal::from(200))
                .await
        });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, UserId(1));
        match action {
            UserAction::DebitWallet(amount) => assert_eq!(amount, Decimal::from(200)),
            other => panic!("Expected DebitWallet action, got {other:?}"),
        }
        responder
            .send(Ok(UserActionResult::DebitWallet(Decimal::from(100))))
            .unwrap();

        assert_eq!(debit_task.await.unwrap().unwrap(), Decimal::from(100));
    }

    #[tokio::test]
    async fn test_debit_wallet_recovers_typed_error() {
        let mut mock = MockClient::<User>::new();
        let overdraft = UserError::InsufficientBalance {
            requested: Decimal::from(200),
            available: Decimal::from(150),
        };
        mock.expect_action(UserId(1))
            .return_err(FrameworkError::EntityError(Box::new(overdraft.clone())));

        let user_client = UserClient::new(mock.client());
        let result = user_client.debit_wallet(UserId(1), Decimal::from(200)).await;
        assert_eq!(result.unwrap_err(), overdraft);
        mock.verify();
    }

    #[tokio::test]
    async fn test_missing_user_maps_to_not_found() {
        let mut mock = MockClient::<User>::new();
        mock.expect_get(UserId(5)).return_ok(None);
        mock.expect_action(UserId(5))
            .return_err(FrameworkError::NotFound("user_5".into()));

        let user_client = UserClient::new(mock.client());
        assert_eq!(
            user_client.get_user_by_id(UserId(5)).await.unwrap_err(),
            UserError::NotFound(UserId(5))
        );
        assert_eq!(
            user_client
                .set_address(UserId(5), "1 Elm St".into())
                .await
                .unwrap_err(),
            UserError::NotFound(UserId(5))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_duplicate_email_maps_to_email_taken() {
        let mut mock = MockClient::<User>::new();
        mock.expect_create()
            .return_err(FrameworkError::AlreadyExists("user_1".into()));

        let user_client = UserClient::new(mock.client());
        let result = user_client
            .create_user(UserCreate::new("Alice", "alice@example.com"))
            .await;
        assert_eq!(result.unwrap_err(), UserError::EmailTaken);
        assert_eq!(UserError::EmailTaken.to_string(), "Email already taken");
    }
}
