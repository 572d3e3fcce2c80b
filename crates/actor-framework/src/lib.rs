//! # Actor Framework
//!
//! Building blocks for registries that live inside actors: each registry owns the
//! identifier → entity map for one entity kind, runs in its own Tokio task, and is reached only
//! through a cloneable, typed client.
//!
//! ## Layers
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - the domain record and its behaviour
//! 2. **Runtime Layer** ([`ResourceActor`]) - message loop, storage, duplicate rejection
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - typed requests
//!
//! ## Registry semantics
//!
//! - Identifiers come from the caller (inside the create payload) and are unique per registry.
//!   A second create with a known identifier fails with [`FrameworkError::AlreadyExists`] and
//!   leaves the stored entity untouched.
//! - Lookups of unknown identifiers return `Ok(None)`; updates and actions on them fail with
//!   [`FrameworkError::NotFound`].
//! - `list` enumerates in insertion order.
//!
//! ## Context Injection
//!
//! Dependencies are handed to [`ResourceActor::run`], not to [`ResourceActor::new`]. All actors
//! are created first, then each one is started with the clients it needs:
//!
//! ```rust,ignore
//! let (students, student_client) = ResourceActor::<Party>::new(32);
//! let (courses, course_client) = ResourceActor::<Course>::new(32);
//!
//! tokio::spawn(students.run(PartyContext::standalone(RoleKind::Student)));
//! tokio::spawn(courses.run(CourseContext::new(student_client.clone(), teacher_client.clone())));
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task and handles one message at a time
//! - A hook that awaits another actor keeps its own actor on the current message, so the hook's
//!   check-then-act is atomic for every other caller
//! - Actors that call each other must form an acyclic graph
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers requests from scripted expectations, which lets a real actor run
//! against mocked dependencies.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
