//! Text rendering of simulation state
//!
//! The grid engine only produces strings. Everything that touches the
//! terminal sits behind the [`Screen`] trait so the driver loop can be run
//! against an in-memory screen in tests.

pub mod terminal;

use std::time::Duration;

use crate::core::error::Result;
use crate::core::types::Generation;
use crate::simulation::Simulation;

pub use terminal::{CrosstermKeys, KeySource, TerminalScreen};

/// Glyph for a live cell (full block)
pub const LIVE_GLYPH: char = '\u{2588}';
/// Glyph for a dead cell
pub const DEAD_GLYPH: char = ' ';

pub const FOOTER: &str = "Press Ctrl+C to stop";
pub const EXTINCT_MESSAGE: &str = "All cells have died. Simulation ended.";
pub const INTERRUPTED_MESSAGE: &str = "Simulation stopped by user.";

/// One screenful: status header, the grid rows and a footer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub header: Vec<String>,
    pub rows: Vec<String>,
    pub footer: Vec<String>,
}

impl Frame {
    /// Snapshot the simulation for display as frame `index` of `total`
    pub fn capture(sim: &Simulation, index: Generation, total: Generation) -> Self {
        Self {
            header: vec![
                format!("Conway's Game of Life - Generation {}/{}", index, total),
                format!("Alive cells: {}", sim.grid().count_live()),
            ],
            rows: sim.grid().render_lines(),
            footer: vec![String::new(), FOOTER.to_string()],
        }
    }

    /// All lines in display order
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.header
            .iter()
            .chain(self.rows.iter())
            .chain(self.footer.iter())
            .map(String::as_str)
    }
}

/// What the driver should do after a pause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Stop,
}

/// Output surface for the driver loop
pub trait Screen {
    /// Replace whatever is shown with `frame`; a frame is never partially written
    fn draw(&mut self, frame: &Frame) -> Result<()>;

    /// Block for `delay`, returning early with `Control::Stop` on user interrupt
    fn pause(&mut self, delay: Duration) -> Result<Control>;

    /// Show a one-line status message below the last frame
    fn message(&mut self, text: &str) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Cell;
    use crate::simulation::grid::Grid;

    #[test]
    fn test_frame_layout() {
        let grid = Grid::new(3, 2, vec![Cell::new(1, 0)]).unwrap();
        let sim = Simulation::new(grid);
        let frame = Frame::capture(&sim, 1, 10);

        let lines: Vec<&str> = frame.lines().collect();
        assert_eq!(lines[0], "Conway's Game of Life - Generation 1/10");
        assert_eq!(lines[1], "Alive cells: 1");
        assert_eq!(lines[2], " \u{2588} ");
        assert_eq!(lines[3], "   ");
        assert_eq!(lines[5], FOOTER);
        assert_eq!(frame.rows.len(), 2);
    }
}
