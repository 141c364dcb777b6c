//! Navigation system
//!
//! Warp travel through the global sector grid, quadrant entry and the
//! course/distance arithmetic shared with the computer and torpedoes.

mod course;
mod movement;
mod quadrant;

pub use course::{
    calculate_direction, calculate_distance, clamp_global, from_global, max_warp, to_global,
};
pub use movement::execute_nav;
pub use quadrant::{announce_quadrant, enter_quadrant};
