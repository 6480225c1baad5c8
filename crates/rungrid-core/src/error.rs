//! Error types for grid construction and access.

use thiserror::Error;

use crate::geom::Point;

/// Errors produced by [`CostGrid`](crate::CostGrid) construction and access.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid input is empty")]
    Empty,

    #[error("row {row} has {got} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("non-digit character {ch:?} in row {row}")]
    NonDigit { row: usize, ch: char },

    #[error("coordinate {pos} is outside the {width}x{height} grid")]
    OutOfBounds {
        pos: Point,
        width: i32,
        height: i32,
    },
}
