//! Conway's Game of Life on a square grid whose edges wrap around (a torus).
//!
//! A [`Universe`] is an immutable snapshot of one generation. Only live cells
//! are stored, so the cost of [`Universe::tick`] follows the population rather
//! than the area of the grid.

mod coordinate;
mod error;
mod factory;
mod pattern;
mod universe;


pub use crate::{
    coordinate::Coordinate,
    error::{PatternError, UniverseError},
    factory::{DEFAULT_GRID_SIZE, UniverseFactory},
    pattern::parse_pattern,
    universe::{MAXIMUM_GRID_SIZE, MINIMUM_GRID_SIZE, Universe},
};
