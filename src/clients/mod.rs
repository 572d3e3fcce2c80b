//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient), one per registry.

pub mod appointment_client;
pub mod course_client;
pub mod department_client;
pub mod party_client;
pub mod room_client;

pub use appointment_client::*;
pub use course_client::*;
pub use department_client::*;
pub use party_client::*;
pub use room_client::*;
