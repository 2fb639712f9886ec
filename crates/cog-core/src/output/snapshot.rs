//! Snapshot Persistence
//!
//! Writes and reads simulation snapshots as pretty-printed JSON. A
//! saved snapshot re-loads into a run that continues the tick sequence
//! with no discontinuity.

use std::fs;
use std::path::Path;

use thiserror::Error;

use cog_events::SimulationSnapshot;

/// Errors from snapshot persistence.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Writes a snapshot to a JSON file.
pub fn save_snapshot(
    snapshot: &SimulationSnapshot,
    path: impl AsRef<Path>,
) -> Result<(), SnapshotError> {
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(path.as_ref(), json)?;
    tracing::info!(path = %path.as_ref().display(), tick = snapshot.tick, "snapshot saved");
    Ok(())
}

/// Reads a snapshot back from a JSON file.
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<SimulationSnapshot, SnapshotError> {
    let json = fs::read_to_string(path.as_ref())?;
    Ok(serde_json::from_str(&json)?)
}
