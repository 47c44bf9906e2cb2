use log::debug;
use rand::{SeedableRng, rngs::StdRng};

use crate::{Coordinate, Universe, UniverseError};

pub const DEFAULT_GRID_SIZE: usize = 64;

/// The way in for callers that need a first generation.
///
/// Owns the random source used for seeded universes so that a run can be
/// reproduced from its seed.
#[derive(Clone, Debug)]
pub struct UniverseFactory {
    rng: StdRng,
}

impl UniverseFactory {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn create(
        &self,
        grid_size: usize,
        alive_cells: impl IntoIterator<Item = Coordinate>,
    ) -> Result<Universe, UniverseError> {
        Universe::create(grid_size, alive_cells)
            .inspect_err(|err| debug!("rejected universe: {err}"))
    }

    pub fn create_random(&mut self, grid_size: usize) -> Result<Universe, UniverseError> {
        Universe::create_random(grid_size, &mut self.rng)
            .inspect_err(|err| debug!("rejected random universe: {err}"))
    }

    pub fn create_default(&mut self) -> Result<Universe, UniverseError> {
        self.create_random(DEFAULT_GRID_SIZE)
    }
}

impl Default for UniverseFactory {
    fn default() -> Self {
        Self::new()
    }
}
