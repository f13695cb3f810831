//! Core type definitions used throughout the codebase

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// Generation counter (simulation time unit)
pub type Generation = u64;

/// Grid coordinate; `x` is the column, `y` the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Shift by an offset, as used when placing a pattern on a grid
    pub fn offset(&self, dx: usize, dy: usize) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl From<(usize, usize)> for Cell {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

/// Set of live coordinates, as produced by the pattern generators
pub type CellSet = AHashSet<Cell>;
