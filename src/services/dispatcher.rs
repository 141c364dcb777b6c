//! Command dispatcher
//!
//! Turns one line of player input into engine operations. Commands that need
//! arguments leave a [`Prompt`] behind; the next line answers it.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::io::OutputWriter;
use crate::models::constants::Device;
use crate::models::errors::{parse_coordinates, parse_number};
use crate::models::galaxy::Galaxy;
use crate::ui::presenters::{format_number, CombatPresenter, MissionPresenter};

use super::combat::{fire_phasers, fire_torpedo, set_shields, torpedo_ready};
use super::computer::{execute_computer, show_direction_distance, show_menu};
use super::damage::{damage_report, repair_order};
use super::mission::resign;
use super::navigation::{execute_nav, max_warp};
use super::scan::{long_range_scan, short_range_scan};

/// A question the engine has asked and is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Prompt {
    AwaitingCourse,
    AwaitingWarp { course: f64 },
    AwaitingPhaserEnergy,
    AwaitingTorpedoCourse,
    AwaitingShieldEnergy,
    AwaitingRepairAuthorization,
    AwaitingComputerCommand,
    AwaitingCoordA,
    /// `from` is `None` when the first pair did not parse; the calculator
    /// still asks for the second before reporting.
    AwaitingCoordB { from: Option<(i32, i32)> },
}

impl Prompt {
    /// The line shown to the player when this prompt is issued.
    pub fn text(&self, galaxy: &Galaxy) -> String {
        match self {
            Prompt::AwaitingCourse => "COURSE (1-9)".to_string(),
            Prompt::AwaitingWarp { .. } => format!(
                "WARP FACTOR (0-{})",
                format_number(max_warp(galaxy.enterprise()))
            ),
            Prompt::AwaitingPhaserEnergy => "NUMBER OF UNITS TO FIRE".to_string(),
            Prompt::AwaitingTorpedoCourse => "PHOTON TORPEDO COURSE (1-9)".to_string(),
            Prompt::AwaitingShieldEnergy => "NUMBER OF UNITS TO SHIELDS".to_string(),
            Prompt::AwaitingRepairAuthorization => "AUTHORIZE REPAIR ORDER (Y/N)?".to_string(),
            Prompt::AwaitingComputerCommand => "COMPUTER ACTIVE AND AWAITING COMMAND".to_string(),
            Prompt::AwaitingCoordA => "PLEASE ENTER INITIAL COORDINATES (X,Y)".to_string(),
            Prompt::AwaitingCoordB { .. } => "PLEASE ENTER FINAL COORDINATES (X,Y)".to_string(),
        }
    }
}

/// Handle one line of input. `pending` is consumed; the returned prompt, if
/// any, has already been shown and must answer the next line.
pub fn dispatch(
    galaxy: &mut Galaxy,
    pending: Option<Prompt>,
    input: &str,
    output: &mut dyn OutputWriter,
) -> Option<Prompt> {
    if galaxy.is_ended() {
        output.writeln("THE MISSION IS OVER. START A NEW GAME TO PLAY AGAIN.");
        return None;
    }

    let input = input.trim().to_uppercase();
    trace!(input = %input, ?pending, "dispatching");

    let next = match pending {
        Some(prompt) => answer_prompt(galaxy, prompt, &input, output),
        None => run_command(galaxy, &input, output),
    };
    if let Some(prompt) = next {
        output.writeln(&prompt.text(galaxy));
    }
    next
}

/// Unparseable numbers become NaN, which every operation rejects the same way
/// it rejects an out-of-range value.
fn number(input: &str) -> f64 {
    parse_number(input).unwrap_or(f64::NAN)
}

fn answer_prompt(
    galaxy: &mut Galaxy,
    prompt: Prompt,
    input: &str,
    output: &mut dyn OutputWriter,
) -> Option<Prompt> {
    match prompt {
        Prompt::AwaitingCourse => {
            return Some(Prompt::AwaitingWarp {
                course: number(input),
            })
        }
        Prompt::AwaitingWarp { course } => execute_nav(galaxy, course, number(input), false, output),
        Prompt::AwaitingPhaserEnergy => {
            fire_phasers(galaxy, number(input).trunc(), output);
        }
        Prompt::AwaitingTorpedoCourse => {
            fire_torpedo(galaxy, number(input), output);
        }
        Prompt::AwaitingShieldEnergy => set_shields(galaxy, number(input).trunc(), output),
        Prompt::AwaitingRepairAuthorization => {
            if input == "Y" {
                repair_order(galaxy, output);
            }
        }
        Prompt::AwaitingComputerCommand => {
            if execute_computer(galaxy, input, output) {
                return Some(Prompt::AwaitingCoordA);
            }
        }
        Prompt::AwaitingCoordA => {
            return Some(Prompt::AwaitingCoordB {
                from: parse_coordinates(input).ok(),
            })
        }
        Prompt::AwaitingCoordB { from } => match (from, parse_coordinates(input).ok()) {
            (Some(from), Some(to)) => show_direction_distance(from, to, output),
            _ => output.writeln("INVALID COORDINATES"),
        },
    }
    None
}

fn run_command(galaxy: &mut Galaxy, command: &str, output: &mut dyn OutputWriter) -> Option<Prompt> {
    match command {
        "NAV" => return Some(Prompt::AwaitingCourse),
        "SRS" => short_range_scan(galaxy, output, false),
        "LRS" => long_range_scan(galaxy, output),
        "PHA" => {
            if galaxy.enterprise().is_damaged(Device::PhaserControl) {
                output.writeln("PHASERS INOPERATIVE");
            } else if galaxy.sector_map().klingons.is_empty() {
                CombatPresenter::show_no_enemies(output);
            } else {
                output.writeln(&format!(
                    "PHASERS LOCKED ON TARGET;  ENERGY AVAILABLE = {}",
                    format_number(galaxy.enterprise().energy())
                ));
                return Some(Prompt::AwaitingPhaserEnergy);
            }
        }
        "TOR" => {
            if torpedo_ready(galaxy, output) {
                return Some(Prompt::AwaitingTorpedoCourse);
            }
        }
        "SHE" => {
            if galaxy.enterprise().is_damaged(Device::ShieldControl) {
                output.writeln("SHIELD CONTROL INOPERABLE");
            } else {
                let enterprise = galaxy.enterprise();
                output.writeln(&format!(
                    "ENERGY AVAILABLE = {}",
                    format_number(enterprise.energy() + enterprise.shields())
                ));
                return Some(Prompt::AwaitingShieldEnergy);
            }
        }
        "DAM" => {
            if damage_report(galaxy, output) {
                return Some(Prompt::AwaitingRepairAuthorization);
            }
        }
        "COM" => {
            if show_menu(galaxy, output) {
                return Some(Prompt::AwaitingComputerCommand);
            }
        }
        "XXX" => resign(galaxy, output),
        "HELP" => MissionPresenter::show_commands(output),
        _ => {
            output.writeln("ENTER ONE OF THE FOLLOWING:");
            MissionPresenter::show_commands(output);
        }
    }
    None
}
