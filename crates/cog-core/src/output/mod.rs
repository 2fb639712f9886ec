//! Output
//!
//! Snapshot persistence and append-only event logging.

pub mod events;
pub mod snapshot;

pub use events::EventLogger;
pub use snapshot::{load_snapshot, save_snapshot, SnapshotError};
