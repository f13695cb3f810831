pub mod grid;
pub mod runner;
pub mod state;
pub mod tick;

pub use grid::Grid;
pub use runner::{run, RunOutcome};
pub use state::Simulation;
pub use tick::{run_generation, SimulationEvent};
