//! Terminal Life - Entry Point
//!
//! Parses the command line, builds the starting grid from the chosen
//! pattern and runs the generation loop on the terminal.

use std::process::ExitCode;

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use terminal_life::core::config::{self, RunConfig};
use terminal_life::core::error::Result;
use terminal_life::patterns::PatternKind;
use terminal_life::render::TerminalScreen;
use terminal_life::simulation::{run, RunOutcome, Simulation};

/// Conway's Game of Life in the terminal
#[derive(Parser, Debug)]
#[command(name = "terminal-life")]
#[command(about = "Conway's Game of Life")]
struct Args {
    /// Grid width
    #[arg(short = 'w', long, default_value_t = 40, allow_negative_numbers = true)]
    width: i64,

    /// Grid height
    #[arg(short = 'H', long, default_value_t = 20, allow_negative_numbers = true)]
    height: i64,

    /// Number of generations
    #[arg(short = 'g', long, default_value_t = 200)]
    generations: u64,

    /// Delay between generations in seconds
    #[arg(short = 'd', long, default_value_t = 0.1, allow_negative_numbers = true)]
    delay: f64,

    /// Starting pattern
    #[arg(short = 'p', long, value_enum, default_value_t = PatternKind::Random)]
    pattern: PatternKind,

    /// Cell density for the random pattern
    #[arg(long, default_value_t = 0.3, allow_negative_numbers = true)]
    density: f64,

    /// Random seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    fn into_config(self) -> Result<RunConfig> {
        let (width, height) = config::dimensions(self.width, self.height)?;
        let config = RunConfig {
            width,
            height,
            generations: self.generations,
            delay: config::delay_from_secs(self.delay)?,
            pattern: self.pattern,
            density: self.density,
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}

fn main() -> ExitCode {
    // Logs go to stderr so they never interleave with frames
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("terminal_life=warn")),
        )
        .init();

    match try_main(Args::parse()) {
        Ok(outcome) => {
            tracing::info!("Run finished: {:?}", outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn try_main(args: Args) -> Result<RunOutcome> {
    let config = args.into_config()?;

    // Determine seed
    let seed = config.seed.unwrap_or_else(|| rand::random());
    tracing::info!(
        seed,
        pattern = %config.pattern,
        width = config.width,
        height = config.height,
        "Configured run"
    );
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    // Every setup error is reported before the terminal is touched
    let mut sim = Simulation::from_config(&config, &mut rng)?;

    let mut screen = TerminalScreen::stdout();
    run(&mut sim, &config, &mut screen)
}
