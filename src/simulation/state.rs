//! Simulation state - the grid plus its generation counter

use rand::Rng;

use crate::core::config::RunConfig;
use crate::core::error::Result;
use crate::core::types::Generation;
use crate::patterns;
use crate::simulation::grid::Grid;

/// Owns the current grid and a scratch buffer for the next generation
#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    scratch: Grid,
    generation: Generation,
}

impl Simulation {
    pub fn new(grid: Grid) -> Self {
        Self {
            scratch: grid.clone(),
            grid,
            generation: 0,
        }
    }

    /// Build the initial grid from the configured pattern
    pub fn from_config<R: Rng + ?Sized>(config: &RunConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let alive = patterns::generate(
            config.pattern,
            config.width,
            config.height,
            config.density,
            rng,
        )?;
        let grid = Grid::new(config.width, config.height, alive)?;
        Ok(Self::new(grid))
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of steps applied so far
    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn is_extinct(&self) -> bool {
        self.grid.count_live() == 0
    }

    /// Apply one step, swapping the scratch buffer in as the current grid
    pub fn advance(&mut self) {
        self.grid.step_into(&mut self.scratch);
        std::mem::swap(&mut self.grid, &mut self.scratch);
        self.generation += 1;
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }
}
