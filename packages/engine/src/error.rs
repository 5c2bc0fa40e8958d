//! Error types for the engine.
//!
//! - `PhysicsError` - transient, scoped to a single cell's rules for one tick.
//!   The orchestrator logs it and moves on to the next cell.
//! - `SnapshotError` - a rejected snapshot import; the grid is left untouched.

use std::fmt;

use crate::elements::ElementId;

#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    OutOfBounds { x: i32, y: i32 },
    UnknownElement { id: ElementId },
    CorruptTemperature { x: i32, y: i32 },
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::OutOfBounds { x, y } => write!(f, "cell ({x}, {y}) is outside the grid"),
            PhysicsError::UnknownElement { id } => write!(f, "unknown element id {id}"),
            PhysicsError::CorruptTemperature { x, y } => {
                write!(f, "cell ({x}, {y}) holds a non-finite temperature")
            }
        }
    }
}

impl std::error::Error for PhysicsError {}

#[derive(Debug, Clone, PartialEq)]
pub enum SnapshotError {
    /// The document is not valid snapshot JSON.
    Malformed(String),
    MissingGrid,
    DimensionMismatch { expected: (u32, u32), found: (u32, u32) },
    /// Row `row` has a different length than the first row.
    RaggedRow { row: usize },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::Malformed(msg) => write!(f, "malformed snapshot: {msg}"),
            SnapshotError::MissingGrid => write!(f, "snapshot has no grid"),
            SnapshotError::DimensionMismatch { expected, found } => write!(
                f,
                "snapshot is {}x{} but the world is {}x{}",
                found.0, found.1, expected.0, expected.1
            ),
            SnapshotError::RaggedRow { row } => write!(f, "snapshot row {row} has the wrong length"),
        }
    }
}

impl std::error::Error for SnapshotError {}

impl From<serde_json::Error> for SnapshotError {
    fn from(err: serde_json::Error) -> Self {
        SnapshotError::Malformed(err.to_string())
    }
}
