//! Combat system
//!
//! Phaser fire, torpedo launch, shield control and Klingon return fire.

mod klingon_attack;
mod phasers;
mod shields;
mod torpedoes;

pub use klingon_attack::klingons_fire;
pub use phasers::fire_phasers;
pub use shields::set_shields;
pub use torpedoes::{fire_torpedo, torpedo_ready};
