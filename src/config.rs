//! Rule set configuration.
//!
//! One engine covers both historical rule sets. The defaults are the later
//! "super" rules: rank-based starbase attacks and linear navigation cost.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_RANK: u8 = 1;
pub const MAX_RANK: u8 = 12;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid rule set: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("rank {0} outside 1-12")]
    RankOutOfRange(u8),
}

/// Energy charged for a warp move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavEnergyModel {
    /// `sectors + 10`
    Linear,
    /// `floor(warp^3 * 10 + 10)`
    Cubic,
}

impl NavEnergyModel {
    pub fn required_energy(&self, warp: f64, sectors: i32) -> f64 {
        match self {
            NavEnergyModel::Linear => sectors as f64 + 10.0,
            NavEnergyModel::Cubic => (warp.powi(3) * 10.0 + 10.0).floor(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ruleset {
    /// Difficulty, 1 to 12.
    pub rank: u8,
    pub starbase_attacks: bool,
    pub nav_energy: NavEnergyModel,
}

impl Default for Ruleset {
    fn default() -> Self {
        Ruleset::super_trek()
    }
}

impl Ruleset {
    pub fn super_trek() -> Self {
        Ruleset {
            rank: 5,
            starbase_attacks: true,
            nav_energy: NavEnergyModel::Linear,
        }
    }

    /// Static galaxy, no starbase attacks, cubic warp cost.
    pub fn classic() -> Self {
        Ruleset {
            rank: 5,
            starbase_attacks: false,
            nav_energy: NavEnergyModel::Cubic,
        }
    }

    pub fn with_rank(mut self, rank: u8) -> Result<Self, ConfigError> {
        self.rank = rank;
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_RANK..=MAX_RANK).contains(&self.rank) {
            return Err(ConfigError::RankOutOfRange(self.rank));
        }
        Ok(())
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let ruleset: Ruleset = toml::from_str(contents)?;
        ruleset.validate()?;
        Ok(ruleset)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }
}
