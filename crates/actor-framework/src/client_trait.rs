//! # ActorClient Trait
//!
//! Common interface for resource-specific clients (`UserClient`, `CartClient`, …):
//! provided `get`, `list` and `delete` built on top of the generic `ResourceClient`,
//! with framework errors mapped into the resource's own error type.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard read/delete operations.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Product { id: u32 }
/// #[derive(Debug)] struct ProductCreate;
/// #[derive(Debug)] enum ProductAction {}
/// #[derive(Debug, thiserror::Error)]
/// #[error("{0}")]
/// struct ProductError(String);
///
/// impl From<String> for ProductError {
///     fn from(s: String) -> Self { ProductError(s) }
/// }
///
/// #[async_trait]
/// impl ActorEntity for Product {
///     type Id = u32;
///     type Create = ProductCreate;
///     type Update = ();
///     type Action = ProductAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = ProductError;
///
///     fn from_create_params(id: u32, _: ProductCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id })
///     }
///     async fn on_update(&mut self, _: (), _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, action: ProductAction, _: &()) -> Result<(), Self::Error> {
///         match action {}
///     }
/// }
///
/// struct ProductClient {
///     inner: ResourceClient<Product>,
/// }
///
/// #[async_trait]
/// impl ActorClient<Product> for ProductClient {
///     type Error = ProductError;
///
///     fn inner(&self) -> &ResourceClient<Product> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         ProductError(e.to_string())
///     }
/// }
///
/// async fn usage(client: ProductClient) {
///     // get(), list() and delete() are provided
///     let _ = client.get(1).await;
///     let _ = client.list().await;
///     let _ = client.delete(1).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity, in ID order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
