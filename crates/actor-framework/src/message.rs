//! # Generic Messages
//!
//! Message types exchanged between a `ResourceClient` and its `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to a registry actor.
///
/// The variants cover the registry surface every entity kind shares: **Create**, **Get**,
/// **List** (enumeration in insertion order), **Count**, **Update**, **Delete**, plus a typed
/// **Action** for entity-specific operations such as enrolling a student.
///
/// Being generic over `T: ActorEntity`, a course payload can never reach the room registry.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Count {
        respond_to: Response<usize>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
