//! Data structures managed by the registries, their creation/update payloads and summaries.

pub mod appointment;
pub mod course;
pub mod department;
pub mod ids;
pub mod party;
pub mod report;
pub mod room;

pub use appointment::*;
pub use course::*;
pub use department::*;
pub use ids::*;
pub use party::*;
pub use report::*;
pub use room::*;

/// Calendar dates in summaries.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Timestamps in summaries and history lines.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
