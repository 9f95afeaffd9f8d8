use crate::vacuum::Position;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WorldError {
    #[error("the grid must have at least one cell, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },
    #[error("position {position} lies outside the {width}x{height} grid")]
    OutOfBounds {
        position: Position,
        width: usize,
        height: usize,
    },
    #[error("there is already {kind} at {position}")]
    Occupied {
        kind: &'static str,
        position: Position,
    },
}
