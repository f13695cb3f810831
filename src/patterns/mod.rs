//! Seed pattern generators
//!
//! Each generator is a pure function of the grid size (plus density and an
//! explicitly passed random source for `random`) that returns the set of
//! initially live cells.

pub mod catalog;
pub mod random;

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::error::{LifeError, Result};
use crate::core::types::CellSet;

pub use catalog::{Anchor, FixedPattern};
pub use random::random_cells;

/// Named starting patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    Random,
    Glider,
    Blinker,
    Beacon,
    Toad,
    Pulsar,
    #[value(name = "glider_gun")]
    GliderGun,
}

impl PatternKind {
    pub const ALL: [PatternKind; 7] = [
        PatternKind::Random,
        PatternKind::Glider,
        PatternKind::Blinker,
        PatternKind::Beacon,
        PatternKind::Toad,
        PatternKind::Pulsar,
        PatternKind::GliderGun,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PatternKind::Random => "random",
            PatternKind::Glider => "glider",
            PatternKind::Blinker => "blinker",
            PatternKind::Beacon => "beacon",
            PatternKind::Toad => "toad",
            PatternKind::Pulsar => "pulsar",
            PatternKind::GliderGun => "glider_gun",
        }
    }

    /// Hard-coded coordinates for every pattern except `random`
    pub fn fixed(&self) -> Option<&'static FixedPattern> {
        match self {
            PatternKind::Random => None,
            PatternKind::Glider => Some(&catalog::GLIDER),
            PatternKind::Blinker => Some(&catalog::BLINKER),
            PatternKind::Beacon => Some(&catalog::BEACON),
            PatternKind::Toad => Some(&catalog::TOAD),
            PatternKind::Pulsar => Some(&catalog::PULSAR),
            PatternKind::GliderGun => Some(&catalog::GLIDER_GUN),
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PatternKind {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self> {
        PatternKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = PatternKind::ALL.iter().map(|k| k.name()).collect();
                LifeError::InvalidParameter(format!(
                    "unknown pattern '{}' (expected one of: {})",
                    s,
                    known.join(", ")
                ))
            })
    }
}

/// Produce the live cells for `kind` on a `width` x `height` grid
///
/// `density` and `rng` are only consulted by `random`.
pub fn generate<R: Rng + ?Sized>(
    kind: PatternKind,
    width: usize,
    height: usize,
    density: f64,
    rng: &mut R,
) -> Result<CellSet> {
    if width == 0 || height == 0 {
        return Err(LifeError::InvalidDimension {
            width: width as i64,
            height: height as i64,
        });
    }

    match kind.fixed() {
        Some(pattern) => pattern.place(width, height),
        None => random_cells(width, height, density, rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_names_round_trip() {
        for kind in PatternKind::ALL {
            assert_eq!(kind.name().parse::<PatternKind>().unwrap(), kind);
            assert_eq!(kind.to_string(), kind.name());
        }
    }

    #[test]
    fn test_unknown_name_is_invalid_parameter() {
        assert!(matches!(
            "spaceship".parse::<PatternKind>(),
            Err(LifeError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_value_enum_uses_snake_case_names() {
        let value = PatternKind::GliderGun.to_possible_value().unwrap();
        assert_eq!(value.get_name(), "glider_gun");
        assert_eq!(
            "glider_gun".parse::<PatternKind>().unwrap(),
            PatternKind::GliderGun
        );
    }

    #[test]
    fn test_serde_names_match_cli_names() {
        for kind in PatternKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.name()));
            assert_eq!(serde_json::from_str::<PatternKind>(&json).unwrap(), kind);
        }
        assert!(serde_json::from_str::<PatternKind>("\"GliderGun\"").is_err());
    }

    #[test]
    fn test_only_random_is_not_fixed() {
        for kind in PatternKind::ALL {
            assert_eq!(kind.fixed().is_none(), kind == PatternKind::Random);
        }
    }

    #[test]
    fn test_generate_rejects_zero_size() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(matches!(
            generate(PatternKind::Random, 0, 4, 0.5, &mut rng),
            Err(LifeError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_generate_dispatches_fixed_patterns() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let glider = generate(PatternKind::Glider, 10, 10, 0.3, &mut rng).unwrap();
        assert_eq!(glider.len(), 5);
        let gun = generate(PatternKind::GliderGun, 40, 20, 0.3, &mut rng).unwrap();
        assert_eq!(gun.len(), 36);
    }
}
