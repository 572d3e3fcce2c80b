//! # Observability & Tracing
//!
//! Every actor logs through `tracing` with an `entity_type` field (`Party`, `Course`, …) and the
//! entity `id`, so the module path is redundant and hidden from the output.
//!
//! ```bash
//! RUST_LOG=info cargo run      # lifecycle, creates, applied associations
//! RUST_LOG=debug cargo run     # full payloads and rejected (no-op) associations
//! ```
//!
//! With `RUST_LOG=info` an enrollment reads:
//!
//! ```text
//! INFO Linked course_id=C001 party_id=S001 occupants=1 capacity=25
//! INFO Action ok entity_type="Party" id=S001
//! INFO Action ok entity_type="Course" id=C001
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber, filtering with `RUST_LOG`.
pub fn setup_tracing() {
    setup_tracing_with_default("info");
}

/// Installs the global subscriber, filtering with `RUST_LOG` or `default_filter` when unset.
///
/// Calling it a second time is a no-op, which keeps test binaries that initialise logging from
/// several tests working.
pub fn setup_tracing_with_default(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type already names the source
        .compact()
        .try_init();
}
