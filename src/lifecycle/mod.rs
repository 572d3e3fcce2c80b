//! # System Lifecycle & Orchestration
//!
//! [`School`] and [`Hospital`] create every registry actor, start each one with the clients it
//! depends on, expose the clients, and shut everything down again.
//!
//! ## Wiring
//!
//! Actors are created first and receive their dependencies in `run(context)`, so construction
//! order never matters. Dependencies must stay acyclic:
//!
//! ```text
//! courses      -> students, teachers
//! rooms        -> patients -> doctors
//! appointments -> patients, doctors
//! ```
//!
//! ## Shutdown
//!
//! Dropping the facade's clients closes the channels of the top-level actors. Once they exit,
//! the client clones held in their contexts are dropped too, which closes the next layer. Every
//! task therefore finishes without an explicit shutdown message.

mod error;
mod hospital;
mod school;

pub use error::*;
pub use hospital::*;
pub use school::*;

use tokio::task::JoinHandle;
use tracing::error;

async fn join_all(handles: Vec<JoinHandle<()>>) -> Result<(), SystemError> {
    for handle in handles {
        if let Err(e) = handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(SystemError::ActorTask(e.to_string()));
        }
    }
    Ok(())
}
