//! Error types for engine operations.

use thiserror::Error;
use tiretime_database::DatabaseError;

/// Errors that can escape the engine's entry points.
///
/// Per-candidate forecast failures and per-notification delivery failures
/// are recovered inside the cycle and reported via
/// [`crate::CycleReport`]; only store failures propagate.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Alert record store failure.
    #[error("database error: {0}")]
    Database(#[from] DatabaseError),
}
