//! # ActorClient Trait
//!
//! Common read surface for registry-specific clients: `get`, `list` and `count` built on top of
//! a generic `ResourceClient`.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for registry-specific clients to inherit the standard read operations.
///
/// Implementors provide access to the inner [`ResourceClient`] and a mapping from
/// [`FrameworkError`] to their own error type; lookups, enumeration and counting come for free.
///
/// ```rust,ignore
/// #[async_trait]
/// impl ActorClient<Course> for CourseClient {
///     type Error = CourseError;
///     fn inner(&self) -> &ResourceClient<Course> { &self.inner }
///     fn map_error(e: FrameworkError) -> CourseError { CourseError::from_framework(e) }
/// }
///
/// let course = client.get(CourseId::from("C001")).await?;   // Option<Course>
/// let total = client.count().await?;
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The registry-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the registry-specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID. Unknown IDs yield `Ok(None)`.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Every entity of the registry, in insertion order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Number of entities in the registry.
    #[tracing::instrument(skip(self))]
    async fn count(&self) -> Result<usize, Self::Error> {
        self.inner().count().await.map_err(Self::map_error)
    }
}
