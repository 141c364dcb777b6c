//! Game services
//!
//! Behaviour that mutates the galaxy: navigation, combat, damage, the mission
//! clock, sensors, the library computer and the command dispatcher. Every
//! operation reports through an `OutputWriter`.

pub mod combat;
pub mod computer;
pub mod damage;
pub mod dispatcher;
pub mod mission;
pub mod navigation;
pub mod scan;
