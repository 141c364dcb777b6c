//! Domain models
//!
//! This module contains all domain models representing game entities
//! and concepts. Models are pure data structures with minimal logic.

pub mod constants;
pub mod position;
pub mod enterprise;
pub mod klingon;
pub mod quadrant;
pub mod sector_map;
pub mod galaxy;
pub mod errors;
pub mod navigation_types;
pub mod outcome;
