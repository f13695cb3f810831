//! Random fill

use rand::Rng;

use crate::core::config::check_density;
use crate::core::error::Result;
use crate::core::types::{Cell, CellSet};

/// Each cell is alive independently with probability `density`
///
/// Cells are sampled in row-major order, so a seeded `rng` always yields
/// the same set for the same grid size.
pub fn random_cells<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    density: f64,
    rng: &mut R,
) -> Result<CellSet> {
    check_density(density)?;

    let mut alive = CellSet::default();
    for y in 0..height {
        for x in 0..width {
            if rng.gen_bool(density) {
                alive.insert(Cell::new(x, y));
            }
        }
    }
    Ok(alive)
}
