//! Driver loop: draw, check for extinction, pause, step

use crate::core::config::RunConfig;
use crate::core::error::Result;
use crate::core::types::Generation;
use crate::render::{Control, Frame, Screen, EXTINCT_MESSAGE, INTERRUPTED_MESSAGE};
use crate::simulation::tick::{run_generation, SimulationEvent};
use crate::simulation::Simulation;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every configured generation was shown
    Completed { generations: Generation },
    /// A frame had no live cells
    Extinct { generation: Generation },
    /// The user interrupted during a pause
    Interrupted { generation: Generation },
}

/// Run the simulation for `config.generations` frames
///
/// Each frame is drawn, then the loop pauses for `config.delay` and
/// applies one step. Interrupts are only observed during the pause, so a
/// frame is always either fully drawn or not drawn at all.
pub fn run<S: Screen + ?Sized>(
    sim: &mut Simulation,
    config: &RunConfig,
    screen: &mut S,
) -> Result<RunOutcome> {
    tracing::info!(
        width = sim.grid().width(),
        height = sim.grid().height(),
        generations = config.generations,
        "Simulation starting"
    );

    for frame in 1..=config.generations {
        screen.draw(&Frame::capture(sim, frame, config.generations))?;

        if sim.is_extinct() {
            screen.message(EXTINCT_MESSAGE)?;
            tracing::info!(generation = sim.generation(), "All cells died");
            return Ok(RunOutcome::Extinct {
                generation: sim.generation(),
            });
        }

        if screen.pause(config.delay)? == Control::Stop {
            screen.message(INTERRUPTED_MESSAGE)?;
            tracing::info!(generation = sim.generation(), "Interrupted by user");
            return Ok(RunOutcome::Interrupted {
                generation: sim.generation(),
            });
        }

        if let SimulationEvent::Extinction { generation } = run_generation(sim) {
            tracing::debug!(generation, "Grid became empty");
        }
    }

    Ok(RunOutcome::Completed {
        generations: sim.generation(),
    })
}
