use std::{
    collections::{HashMap, HashSet},
    fmt::{Display, Write},
};

use itertools::Itertools;
use log::{debug, trace};
use rand::Rng;

use crate::{Coordinate, UniverseError};

/// Smallest grid whose eight neighbours of a cell are all distinct cells.
pub const MINIMUM_GRID_SIZE: usize = 3;

/// Largest grid whose every cell, and the wrapped neighbour of every edge cell,
/// is addressable by a [`Coordinate`].
pub const MAXIMUM_GRID_SIZE: usize = isize::MAX as usize;

/// One generation of a square, edge-wrapping grid.
///
/// Only live cells are stored. A universe never changes once created;
/// [`Universe::tick`] hands back the next generation as a new value, so older
/// generations can be kept around and compared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Universe {
    grid_size: usize,
    cells: HashSet<Coordinate>,
}

impl Universe {
    /// Validates `grid_size` and `alive_cells` and builds the first generation.
    ///
    /// Checks run in a fixed order and the first failure is returned: the grid
    /// size (too small, then too large), then the population, then the bounds
    /// of every cell. Out of bounds coordinates are reported in the order they
    /// were supplied.
    pub fn create(
        grid_size: usize,
        alive_cells: impl IntoIterator<Item = Coordinate>,
    ) -> Result<Self, UniverseError> {
        if grid_size < MINIMUM_GRID_SIZE {
            return Err(UniverseError::MinimumSize {
                minimum: MINIMUM_GRID_SIZE,
            });
        }
        if grid_size > MAXIMUM_GRID_SIZE {
            return Err(UniverseError::MaximumSize {
                maximum: MAXIMUM_GRID_SIZE,
            });
        }
        let supplied = alive_cells.into_iter().unique().collect_vec();
        if supplied.is_empty() {
            return Err(UniverseError::NoAliveCells);
        }
        let coordinates = supplied
            .iter()
            .filter(|cell| !cell.within(grid_size))
            .copied()
            .collect_vec();
        if !coordinates.is_empty() {
            return Err(UniverseError::OutOfBounds { coordinates });
        }
        debug!(
            "created {grid_size}x{grid_size} universe with {} alive cells",
            supplied.len()
        );
        Ok(Self {
            grid_size,
            cells: supplied.into_iter().collect(),
        })
    }

    /// Builds a first generation where every cell is alive with probability 1/2.
    ///
    /// The draw goes through the same validation as [`Universe::create`], so an
    /// unlucky all-dead draw is reported as [`UniverseError::NoAliveCells`].
    pub fn create_random<R: Rng + ?Sized>(
        grid_size: usize,
        rng: &mut R,
    ) -> Result<Self, UniverseError> {
        if !(MINIMUM_GRID_SIZE..=MAXIMUM_GRID_SIZE).contains(&grid_size) {
            return Self::create(grid_size, []);
        }
        let size = grid_size as isize;
        let cells = (0..size)
            .cartesian_product(0..size)
            .filter(|_| rng.random_bool(0.5))
            .map(|(y, x)| Coordinate::new(x, y))
            .collect_vec();
        Self::create(grid_size, cells)
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Whether the cell is alive. Coordinates off the grid are never alive;
    /// they are not wrapped.
    pub fn is_alive(&self, coordinate: impl Into<Coordinate>) -> bool {
        self.cells.contains(&coordinate.into())
    }

    pub fn population(&self) -> usize {
        self.cells.len()
    }

    pub fn is_extinct(&self) -> bool {
        self.cells.is_empty()
    }

    /// Live cells in row-major order.
    pub fn alive_cells(&self) -> impl Iterator<Item = Coordinate> {
        self.cells.iter().copied().sorted()
    }

    /// Computes the next generation under B3/S23.
    ///
    /// Only live cells and their neighbours can change state, so those are the
    /// only cells visited: every live cell adds one to the count of each of its
    /// eight neighbours, and the cells with a count are the candidates.
    pub fn tick(&self) -> Self {
        let mut counts: HashMap<Coordinate, u8> = HashMap::new();
        for &cell in &self.cells {
            for neighbour in self.neighbours(cell) {
                *counts.entry(neighbour).or_default() += 1;
            }
        }
        let cells: HashSet<Coordinate> = counts
            .into_iter()
            .filter(|&(cell, count)| {
                let alive = self.cells.contains(&cell);
                matches!((count, alive), (2 | 3, true) | (3, false))
            })
            .map(|(cell, _)| cell)
            .collect();
        trace!("population {} -> {}", self.cells.len(), cells.len());
        Self {
            grid_size: self.grid_size,
            cells,
        }
    }

    /// This generation followed by every generation after it.
    pub fn generations(self) -> impl Iterator<Item = Universe> {
        std::iter::successors(Some(self), |universe| Some(universe.tick()))
    }
}

impl Universe {
    fn neighbours(&self, Coordinate { x, y }: Coordinate) -> impl Iterator<Item = Coordinate> {
        // `c + d` lies in [-1, size], which fits in `isize`; `rem_euclid` takes
        // -1 to `size - 1` the same way adding `size` before `%` would.
        let size = self.grid_size as isize;
        let wrap = move |c: isize| c.rem_euclid(size);
        (-1..=1)
            .cartesian_product(-1..=1)
            .filter(|&d| d != (0, 0))
            .map(move |(dy, dx)| Coordinate::new(wrap(x + dx), wrap(y + dy)))
    }
}

impl Display for Universe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let size = self.grid_size as isize;
        for y in 0..size {
            if y > 0 {
                f.write_char('\n')?;
            }
            for x in 0..size {
                f.write_str(if self.is_alive((x, y)) { " #" } else { " ." })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbours_wrap_from_corner() {
        let universe = Universe::create(4, [Coordinate::new(0, 0)]).unwrap();
        let neighbours = universe
            .neighbours(Coordinate::new(0, 0))
            .sorted()
            .collect_vec();
        let expected = [(0, 1), (1, 1), (3, 1), (1, 0), (3, 0), (0, 3), (1, 3), (3, 3)]
            .map(Coordinate::from)
            .into_iter()
            .sorted()
            .collect_vec();
        assert_eq!(neighbours, expected);
    }

    #[test]
    fn test_neighbours_distinct_on_smallest_grid() {
        let universe = Universe::create(MINIMUM_GRID_SIZE, [Coordinate::new(1, 1)]).unwrap();
        for cell in [(0, 0), (1, 1), (2, 2)].map(Coordinate::from) {
            let neighbours = universe.neighbours(cell).unique().collect_vec();
            assert_eq!(neighbours.len(), 8);
            assert!(!neighbours.contains(&cell));
        }
    }
}
