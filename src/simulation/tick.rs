//! Generation tick - advances the simulation by one step

use crate::core::types::Generation;
use crate::simulation::Simulation;

/// Events produced by a single generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationEvent {
    /// The grid advanced and still has live cells
    Advanced {
        generation: Generation,
        live_cells: usize,
    },
    /// The step left no live cells
    Extinction { generation: Generation },
}

/// Run a single generation
pub fn run_generation(sim: &mut Simulation) -> SimulationEvent {
    sim.advance();

    let generation = sim.generation();
    let live_cells = sim.grid().count_live();
    tracing::debug!(generation, live_cells, "Generation advanced");

    if live_cells == 0 {
        SimulationEvent::Extinction { generation }
    } else {
        SimulationEvent::Advanced {
            generation,
            live_cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Cell;
    use crate::simulation::grid::Grid;

    #[test]
    fn test_blinker_generation_event() {
        let grid = Grid::new(5, 5, vec![Cell::new(1, 2), Cell::new(2, 2), Cell::new(3, 2)]).unwrap();
        let mut sim = Simulation::new(grid);
        assert_eq!(
            run_generation(&mut sim),
            SimulationEvent::Advanced {
                generation: 1,
                live_cells: 3
            }
        );
    }

    #[test]
    fn test_lonely_cell_extinction_event() {
        let grid = Grid::new(5, 5, vec![Cell::new(2, 2)]).unwrap();
        let mut sim = Simulation::new(grid);
        assert_eq!(
            run_generation(&mut sim),
            SimulationEvent::Extinction { generation: 1 }
        );
        assert!(sim.is_extinct());
    }
}
