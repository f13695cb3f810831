//! Toroidal cell grid and the Game of Life step rule

use std::fmt;

use crate::core::error::{LifeError, Result};
use crate::core::types::{Cell, CellSet};
use crate::render::{DEAD_GLYPH, LIVE_GLYPH};

/// Fixed-size grid of boolean cells, stored row-major
///
/// Dimensions are fixed at construction. Neighbor lookups wrap around the
/// edges, so the grid behaves like the surface of a torus.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Build a grid with the given cells alive
    pub fn new(width: usize, height: usize, alive: impl IntoIterator<Item = Cell>) -> Result<Self> {
        let mut grid = Self::empty(width, height)?;
        for cell in alive {
            if cell.x >= width || cell.y >= height {
                return Err(LifeError::OutOfBounds {
                    x: cell.x,
                    y: cell.y,
                    width,
                    height,
                });
            }
            let idx = grid.index(cell.x, cell.y);
            grid.cells[idx] = true;
        }
        Ok(grid)
    }

    /// Build an all-dead grid
    pub fn empty(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(LifeError::InvalidDimension {
                width: width as i64,
                height: height as i64,
            });
        }
        Ok(Self {
            width,
            height,
            cells: vec![false; width * height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Whether the cell at `(x, y)` is alive; out-of-range coordinates are dead
    #[inline]
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.cells[self.index(x, y)]
    }

    /// Number of live cells
    pub fn count_live(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Coordinates of every live cell
    pub fn live_cells(&self) -> CellSet {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(|(i, _)| Cell::new(i % self.width, i / self.width))
            .collect()
    }

    /// Count live neighbors of `(x, y)` with toroidal wraparound
    ///
    /// On grids narrower or shorter than 3 cells several offsets wrap onto
    /// the same position; each distinct position is counted once, including
    /// the cell's own position when an offset wraps back onto it.
    pub fn live_neighbors(&self, x: usize, y: usize) -> usize {
        let w = self.width;
        let h = self.height;
        let xs = [(x + w - 1) % w, x, (x + 1) % w];
        let ys = [(y + h - 1) % h, y, (y + 1) % h];

        if w >= 3 && h >= 3 {
            let mut count = 0;
            for (j, &ny) in ys.iter().enumerate() {
                for (i, &nx) in xs.iter().enumerate() {
                    if (i, j) != (1, 1) && self.cells[self.index(nx, ny)] {
                        count += 1;
                    }
                }
            }
            return count;
        }

        let mut seen: Vec<(usize, usize)> = Vec::with_capacity(8);
        for (j, &ny) in ys.iter().enumerate() {
            for (i, &nx) in xs.iter().enumerate() {
                if (i, j) != (1, 1) && !seen.contains(&(nx, ny)) {
                    seen.push((nx, ny));
                }
            }
        }
        seen.iter()
            .filter(|&&(nx, ny)| self.cells[self.index(nx, ny)])
            .count()
    }

    /// Compute the next generation into `next`, reusing its allocation
    ///
    /// Every cell is derived from `self` alone, so no update can observe
    /// another cell's new state. `next` is resized to match `self`.
    pub fn step_into(&self, next: &mut Grid) {
        next.width = self.width;
        next.height = self.height;
        next.cells.clear();
        next.cells.reserve(self.cells.len());

        for y in 0..self.height {
            for x in 0..self.width {
                let alive = self.cells[self.index(x, y)];
                let next_state = match (alive, self.live_neighbors(x, y)) {
                    (true, 2) | (true, 3) => true, // Survival
                    (false, 3) => true,            // Birth
                    _ => false,
                };
                next.cells.push(next_state);
            }
        }
    }

    /// Compute the next generation as a new grid
    pub fn step(&self) -> Grid {
        let mut next = Grid {
            width: self.width,
            height: self.height,
            cells: Vec::with_capacity(self.cells.len()),
        };
        self.step_into(&mut next);
        next
    }

    /// Text form of the grid: one line per row, `LIVE_GLYPH` for live cells
    /// and `DEAD_GLYPH` for dead ones, rows separated by `\n`
    pub fn render(&self) -> String {
        self.render_lines().join("\n")
    }

    /// Rendered rows, top to bottom
    pub fn render_lines(&self) -> Vec<String> {
        self.cells
            .chunks(self.width)
            .map(|row| {
                row.iter()
                    .map(|&alive| if alive { LIVE_GLYPH } else { DEAD_GLYPH })
                    .collect()
            })
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn cells(coords: &[(usize, usize)]) -> Vec<Cell> {
        coords.iter().map(|&c| Cell::from(c)).collect()
    }

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert!(matches!(
            Grid::new(0, 5, Vec::<Cell>::new()),
            Err(LifeError::InvalidDimension { width: 0, height: 5 })
        ));
        assert!(matches!(
            Grid::empty(5, 0),
            Err(LifeError::InvalidDimension { width: 5, height: 0 })
        ));
    }

    #[test]
    fn test_new_rejects_out_of_bounds_cell() {
        let result = Grid::new(4, 4, cells(&[(1, 1), (4, 0)]));
        assert!(matches!(
            result,
            Err(LifeError::OutOfBounds { x: 4, y: 0, width: 4, height: 4 })
        ));
    }

    #[test]
    fn test_initial_cells_are_alive() {
        let grid = Grid::new(5, 3, cells(&[(0, 0), (4, 2)])).unwrap();
        assert!(grid.is_alive(0, 0));
        assert!(grid.is_alive(4, 2));
        assert!(!grid.is_alive(1, 1));
        assert!(!grid.is_alive(9, 9));
        assert_eq!(grid.count_live(), 2);
    }

    #[test]
    fn test_neighbors_wrap_at_corners() {
        // Opposite corners of a torus are neighbors
        let grid = Grid::new(5, 5, cells(&[(4, 4), (4, 0), (0, 4)])).unwrap();
        assert_eq!(grid.live_neighbors(0, 0), 3);
    }

    #[test]
    fn test_narrow_grid_counts_each_position_once() {
        // On a 1-wide column every horizontal offset wraps back onto x = 0,
        // so the cell's own position is one of its neighbors
        let grid = Grid::new(1, 5, cells(&[(0, 1), (0, 2), (0, 3)])).unwrap();
        assert_eq!(grid.live_neighbors(0, 2), 3);
        assert_eq!(grid.live_neighbors(0, 0), 1);
    }

    #[test]
    fn test_lonely_cell_dies() {
        let grid = Grid::new(5, 5, cells(&[(2, 2)])).unwrap();
        assert_eq!(grid.step().count_live(), 0);
    }

    #[test]
    fn test_block_is_still_life() {
        let grid = Grid::new(6, 6, cells(&[(2, 2), (3, 2), (2, 3), (3, 3)])).unwrap();
        assert_eq!(grid.step(), grid);
    }

    #[test]
    fn test_birth_with_three_neighbors() {
        let grid = Grid::new(5, 5, cells(&[(1, 1), (2, 1), (3, 1)])).unwrap();
        let next = grid.step();
        assert!(next.is_alive(2, 0));
        assert!(next.is_alive(2, 2));
        assert!(!next.is_alive(1, 1));
    }

    #[test]
    fn test_step_into_reuses_buffer() {
        let grid = Grid::new(5, 5, cells(&[(1, 2), (2, 2), (3, 2)])).unwrap();
        let mut next = Grid::empty(2, 2).unwrap();
        grid.step_into(&mut next);
        assert_eq!(next.width(), 5);
        assert_eq!(next.height(), 5);
        assert_eq!(next, grid.step());
    }

    #[test]
    fn test_render_layout() {
        let grid = Grid::new(3, 2, cells(&[(0, 0), (2, 1)])).unwrap();
        let expected = format!(
            "{}{}{}\n{}{}{}",
            LIVE_GLYPH, DEAD_GLYPH, DEAD_GLYPH, DEAD_GLYPH, DEAD_GLYPH, LIVE_GLYPH
        );
        assert_eq!(grid.render(), expected);
        assert_eq!(grid.to_string(), expected);
    }

    #[test]
    fn test_live_cells_round_trip() {
        let coords = cells(&[(0, 0), (3, 1), (2, 2)]);
        let grid = Grid::new(4, 3, coords.clone()).unwrap();
        let live = grid.live_cells();
        assert_eq!(live.len(), 3);
        for cell in coords {
            assert!(live.contains(&cell));
        }
    }

    fn arb_grid() -> impl Strategy<Value = Grid> {
        (1usize..12, 1usize..12).prop_flat_map(|(w, h)| {
            proptest::collection::vec(any::<bool>(), w * h).prop_map(move |bits| {
                let alive = bits
                    .iter()
                    .enumerate()
                    .filter(|&(_, &b)| b)
                    .map(|(i, _)| Cell::new(i % w, i / w))
                    .collect::<Vec<_>>();
                Grid::new(w, h, alive).unwrap()
            })
        })
    }

    proptest! {
        #[test]
        fn step_is_deterministic(grid in arb_grid()) {
            prop_assert_eq!(grid.step(), grid.step());
        }

        #[test]
        fn dead_neighborhood_stays_dead(grid in arb_grid()) {
            let next = grid.step();
            for y in 0..grid.height() {
                for x in 0..grid.width() {
                    if !grid.is_alive(x, y) && grid.live_neighbors(x, y) == 0 {
                        prop_assert!(!next.is_alive(x, y));
                    }
                }
            }
        }

        #[test]
        fn step_preserves_dimensions(grid in arb_grid()) {
            let next = grid.step();
            prop_assert_eq!(next.width(), grid.width());
            prop_assert_eq!(next.height(), grid.height());
        }
    }
}
