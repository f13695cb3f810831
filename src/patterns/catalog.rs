//! Canonical coordinate tables for the fixed patterns
//!
//! Coordinates are `(x, y)` relative to the top-left corner of each
//! pattern's bounding box.

use crate::core::error::{LifeError, Result};
use crate::core::types::{Cell, CellSet};

/// Where a pattern's bounding box is placed on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Top-left corner at `(0, 0)`
    Origin,
    /// Offset by `((width - w) / 2, (height - h) / 2)`
    Center,
}

/// A hard-coded pattern
#[derive(Debug)]
pub struct FixedPattern {
    pub name: &'static str,
    /// Bounding box width
    pub width: usize,
    /// Bounding box height
    pub height: usize,
    /// Smallest grid the pattern may be placed on
    pub min_width: usize,
    pub min_height: usize,
    pub anchor: Anchor,
    pub cells: &'static [(usize, usize)],
}

impl FixedPattern {
    /// Top-left corner of the bounding box on a grid of the given size
    pub fn offset(&self, width: usize, height: usize) -> (usize, usize) {
        match self.anchor {
            Anchor::Origin => (0, 0),
            Anchor::Center => (
                width.saturating_sub(self.width) / 2,
                height.saturating_sub(self.height) / 2,
            ),
        }
    }

    /// Live cells of this pattern placed on a `width` x `height` grid
    pub fn place(&self, width: usize, height: usize) -> Result<CellSet> {
        if width < self.min_width || height < self.min_height {
            return Err(LifeError::GridTooSmall {
                pattern: self.name,
                min_width: self.min_width,
                min_height: self.min_height,
                width,
                height,
            });
        }

        let (dx, dy) = self.offset(width, height);
        Ok(self
            .cells
            .iter()
            .map(|&c| Cell::from(c).offset(dx, dy))
            .collect())
    }
}

/// Moves one cell down and right every 4 generations
pub const GLIDER: FixedPattern = FixedPattern {
    name: "glider",
    width: 3,
    height: 3,
    min_width: 3,
    min_height: 3,
    anchor: Anchor::Origin,
    cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
};

/// Period 2; horizontal phase
///
/// Any grid at least 3 wide holds the line. The vertical phase only
/// appears once the grid is 3 high.
pub const BLINKER: FixedPattern = FixedPattern {
    name: "blinker",
    width: 3,
    height: 1,
    min_width: 3,
    min_height: 1,
    anchor: Anchor::Center,
    cells: &[(0, 0), (1, 0), (2, 0)],
};

/// Period 2; two diagonal blocks
pub const BEACON: FixedPattern = FixedPattern {
    name: "beacon",
    width: 4,
    height: 4,
    min_width: 6,
    min_height: 6,
    anchor: Anchor::Center,
    cells: &[
        (0, 0), (1, 0),
        (0, 1), (1, 1),
        (2, 2), (3, 2),
        (2, 3), (3, 3),
    ],
};

/// Period 2
pub const TOAD: FixedPattern = FixedPattern {
    name: "toad",
    width: 4,
    height: 2,
    min_width: 6,
    min_height: 6,
    anchor: Anchor::Center,
    cells: &[
        (1, 0), (2, 0), (3, 0),
        (0, 1), (1, 1), (2, 1),
    ],
};

/// Period 3
pub const PULSAR: FixedPattern = FixedPattern {
    name: "pulsar",
    width: 13,
    height: 13,
    min_width: 13,
    min_height: 13,
    anchor: Anchor::Center,
    cells: &[
        (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
        (0, 2), (5, 2), (7, 2), (12, 2),
        (0, 3), (5, 3), (7, 3), (12, 3),
        (0, 4), (5, 4), (7, 4), (12, 4),
        (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
        (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
        (0, 8), (5, 8), (7, 8), (12, 8),
        (0, 9), (5, 9), (7, 9), (12, 9),
        (0, 10), (5, 10), (7, 10), (12, 10),
        (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
    ],
};

/// Gosper glider gun; emits a glider every 30 generations
pub const GLIDER_GUN: FixedPattern = FixedPattern {
    name: "glider_gun",
    width: 36,
    height: 9,
    min_width: 36,
    min_height: 9,
    anchor: Anchor::Center,
    cells: &[
        (24, 0),
        (22, 1), (24, 1),
        (12, 2), (13, 2), (20, 2), (21, 2), (34, 2), (35, 2),
        (11, 3), (15, 3), (20, 3), (21, 3), (34, 3), (35, 3),
        (0, 4), (1, 4), (10, 4), (16, 4), (20, 4), (21, 4),
        (0, 5), (1, 5), (10, 5), (14, 5), (16, 5), (17, 5), (22, 5), (24, 5),
        (10, 6), (16, 6), (24, 6),
        (11, 7), (15, 7),
        (12, 8), (13, 8),
    ],
};
