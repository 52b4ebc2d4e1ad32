//! Error taxonomy for the heap, the LPA* engine and the grid harness.
//!
//! Each piece has its own error enum rather than one crate-wide error: a
//! `HeapError` never needs to carry a CSV path and a `GridError` never needs
//! a heap handle, and keeping them apart lets callers match narrowly.

use thiserror::Error;

/// Errors raised by [`crate::heap::FibHeap`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeapError {
    #[error("extract_min/peek_min called on an empty heap")]
    EmptyHeap,
    #[error("decrease_key called with a key that does not decrease the current key")]
    KeyNotDecreasing,
    #[error("handle does not refer to a live heap entry")]
    InvalidHandle,
}

/// Result of a completed [`crate::engine::LpaStar::compute_shortest_path`] call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("no path exists from start to goal")]
    NoPath,
}

/// Errors from the grid/CSV harness. Never produced by the core.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("failed to open grid file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed CSV grid: {0}")]
    Csv(#[from] csv::Error),
    #[error("grid has no rows")]
    Empty,
    #[error("row {row} has {actual} columns, expected {expected}")]
    Dimensions {
        row: usize,
        actual: usize,
        expected: usize,
    },
}
