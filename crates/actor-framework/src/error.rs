//! # Framework Errors
//!
//! Errors raised by the engine itself, independent of any entity type.

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
    /// Recovers the entity's own error type from an [`FrameworkError::EntityError`].
    ///
    /// Returns the original error unchanged when it is not an entity error of type `E`.
    pub fn downcast_entity<E>(self) -> Result<E, Self>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(boxed) => match boxed.downcast::<E>() {
                Ok(inner) => Ok(*inner),
                Err(other) => Err(FrameworkError::EntityError(other)),
            },
            other => Err(other),
        }
    }
}
