//! Super Star Trek simulation engine
//!
//! A turn-based space combat simulation: the Enterprise crosses an 8x8 galaxy
//! of 8x8 sectors hunting Klingon battle cruisers before the mission deadline,
//! managing energy, shields, torpedoes and damaged equipment on the way.
//!
//! The engine renders nothing. It keeps the game state, writes narrative
//! lines to an event log and answers snapshot queries; front-ends feed it
//! command tokens.
//!
//! # Modules
//!
//! - [`game_engine`] - The `GameEngine` aggregate, its state machine and snapshots
//! - [`models`] - Domain models (Galaxy, Enterprise, Klingon, etc.)
//! - [`services`] - Game services (navigation, combat, damage, mission clock, etc.)
//! - [`config`] - Rule sets
//! - [`random`] - The injectable random source
//! - [`io`] - Output abstractions and the event log
//! - [`ui`] - Narrative formatting
//!
//! # Example
//!
//! ```rust
//! use super_startrek::{GameEngine, Ruleset};
//!
//! let mut engine = GameEngine::new(42, Ruleset::default());
//! engine.process_input("SRS");
//! for line in engine.take_output() {
//!     println!("{}", line.text);
//! }
//! ```

pub mod config;
pub mod game_engine;
pub mod io;
pub mod models;
pub mod random;
pub mod services;
pub mod ui;

pub use config::Ruleset;
pub use game_engine::{GameEngine, GameState};
pub use models::outcome::{DefeatReason, Outcome};
