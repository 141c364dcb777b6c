//! User interface and presentation
//!
//! This module contains presenters that handle formatting and displaying
//! game information to the player, separating presentation from business logic.

pub mod presenters;
