//! Run configuration with documented defaults
//!
//! Every option the binary accepts is collected here. Values coming from the
//! command line are checked once, before any generation is computed.

use std::time::Duration;

use crate::core::error::{LifeError, Result};
use crate::patterns::PatternKind;

/// Default grid width in cells
pub const DEFAULT_WIDTH: usize = 40;
/// Default grid height in cells
pub const DEFAULT_HEIGHT: usize = 20;
/// Default number of generations to run
pub const DEFAULT_GENERATIONS: u64 = 200;
/// Default pause between generations, in seconds
pub const DEFAULT_DELAY_SECS: f64 = 0.1;
/// Default probability that a cell starts alive for the `random` pattern
pub const DEFAULT_DENSITY: f64 = 0.3;

/// Configuration for a single run of the simulation
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Grid width in cells (columns)
    pub width: usize,

    /// Grid height in cells (rows)
    pub height: usize,

    /// Number of frames to show before the run completes
    ///
    /// Each frame after the first is preceded by one step, so a run of N
    /// generations applies at most N steps.
    pub generations: u64,

    /// Blocking pause between frames
    pub delay: Duration,

    /// Seed pattern used to build the initial grid
    pub pattern: PatternKind,

    /// Probability in `[0, 1]` that each cell starts alive
    ///
    /// Only consulted by the `random` pattern.
    pub density: f64,

    /// Seed for the pseudo-random source
    ///
    /// `None` draws a fresh seed at startup; the chosen seed is logged so the
    /// run can be reproduced.
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            generations: DEFAULT_GENERATIONS,
            delay: Duration::from_secs_f64(DEFAULT_DELAY_SECS),
            pattern: PatternKind::Random,
            density: DEFAULT_DENSITY,
            seed: None,
        }
    }
}

impl RunConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(LifeError::InvalidDimension {
                width: self.width as i64,
                height: self.height as i64,
            });
        }

        check_density(self.density)?;

        Ok(())
    }
}

/// Convert signed dimensions from the command line, rejecting non-positive values
pub fn dimensions(width: i64, height: i64) -> Result<(usize, usize)> {
    match (usize::try_from(width), usize::try_from(height)) {
        (Ok(w), Ok(h)) if w > 0 && h > 0 => Ok((w, h)),
        _ => Err(LifeError::InvalidDimension { width, height }),
    }
}

/// Convert a delay in seconds into a `Duration`
pub fn delay_from_secs(secs: f64) -> Result<Duration> {
    Duration::try_from_secs_f64(secs).map_err(|_| {
        LifeError::InvalidParameter(format!(
            "delay must be a non-negative number of seconds, got {}",
            secs
        ))
    })
}

/// Density must lie in `[0, 1]`; NaN is rejected as well
pub fn check_density(density: f64) -> Result<()> {
    if (0.0..=1.0).contains(&density) {
        Ok(())
    } else {
        Err(LifeError::InvalidParameter(format!(
            "density must be between 0 and 1, got {}",
            density
        )))
    }
}
