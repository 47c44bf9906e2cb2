use itertools::Itertools;
use thiserror::Error;

use crate::Coordinate;

/// Reasons a [`crate::Universe`] cannot be created.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum UniverseError {
    #[error("the minimum grid size is {minimum}")]
    MinimumSize { minimum: usize },
    #[error("the maximum grid size is {maximum}")]
    MaximumSize { maximum: usize },
    #[error("there are no alive cells in the initial state")]
    NoAliveCells,
    #[error(
        "the following coordinates are out of bounds: [{}]",
        .coordinates.iter().join(", ")
    )]
    OutOfBounds { coordinates: Vec<Coordinate> },
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("unexpected character {character:?} at ({x}, {y})")]
    UnexpectedCharacter { character: char, x: isize, y: isize },
}
