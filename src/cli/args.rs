use std::path::PathBuf;

use clap::Parser;

use super_startrek::config::{ConfigError, Ruleset};

#[derive(Parser, Debug)]
#[command(name = "super_startrek", about = "Super Star Trek on the terminal")]
pub struct Args {
    /// Seed for the random number generator (random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Difficulty from 1 to 12
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=12))]
    pub rank: Option<u8>,

    /// Static galaxy: no starbase attacks, cubic warp energy
    #[arg(long)]
    pub classic: bool,

    /// TOML rule set file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the final mission stats as JSON when the game ends
    #[arg(long)]
    pub stats_json: bool,
}

impl Args {
    /// Rules in order of precedence: `--rank`, then `--classic`, then the
    /// config file, then the defaults.
    pub fn ruleset(&self) -> Result<Ruleset, ConfigError> {
        let mut ruleset = match &self.config {
            Some(path) => Ruleset::load(path)?,
            None => Ruleset::default(),
        };
        if self.classic {
            ruleset = Ruleset {
                rank: ruleset.rank,
                ..Ruleset::classic()
            };
        }
        match self.rank {
            Some(rank) => ruleset.with_rank(rank),
            None => Ok(ruleset),
        }
    }
}
