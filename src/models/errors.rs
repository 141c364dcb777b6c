use thiserror::Error;

use crate::config::ConfigError;
use crate::models::constants::Device;

/// Game-specific error types
#[derive(Debug, Error)]
pub enum GameError {
    /// Failed to parse user input
    #[error("parse error: {0}")]
    ParseError(String),
    /// Invalid input provided by user
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Attempted to use a damaged device
    #[error("{} is damaged and cannot be used", .0.name())]
    DeviceDamaged(Device),
    /// Insufficient resources (energy, torpedoes, etc.)
    #[error("insufficient resources: required {required}, available {available}")]
    InsufficientResources { required: f64, available: f64 },
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not encode mission stats: {0}")]
    Stats(#[from] serde_json::Error),
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;

impl From<std::num::ParseFloatError> for GameError {
    fn from(err: std::num::ParseFloatError) -> Self {
        GameError::ParseError(err.to_string())
    }
}

impl From<std::num::ParseIntError> for GameError {
    fn from(err: std::num::ParseIntError) -> Self {
        GameError::ParseError(err.to_string())
    }
}

/// Parse a player-typed number. Whitespace is ignored; anything else that
/// is not a finite number is a `ParseError`.
pub fn parse_number(input: &str) -> GameResult<f64> {
    let value: f64 = input.trim().parse()?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GameError::ParseError(format!("not a finite number: {}", input.trim())))
    }
}

/// Parse an `X,Y` pair of 1-based coordinates into 0-based values in `[0, 7]`.
pub fn parse_coordinates(input: &str) -> GameResult<(i32, i32)> {
    let mut parts = input.split(',');
    let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(GameError::InvalidInput(format!("expected X,Y but got '{}'", input.trim())));
    };
    let x: i32 = x.trim().parse()?;
    let y: i32 = y.trim().parse()?;
    if !(1..=8).contains(&x) || !(1..=8).contains(&y) {
        return Err(GameError::InvalidInput(format!("{},{} is off the chart", x, y)));
    }
    Ok((x - 1, y - 1))
}
