//! Mission clock, starbase sieges and end-of-game handling.

use tracing::debug;

use crate::io::OutputWriter;
use crate::models::galaxy::{Galaxy, StarbaseAttack};
use crate::models::outcome::{DefeatReason, Outcome};
use crate::models::position::QuadrantPosition;
use crate::ui::presenters::{CombatPresenter, MissionPresenter};

use super::combat::klingons_fire;
use super::damage::repair_system;
use super::scan::refresh_sensors;

pub fn show_briefing(galaxy: &Galaxy, output: &mut dyn OutputWriter) {
    MissionPresenter::show_briefing(galaxy, output);
}

/// Advance the stardate by `time`. Passing the deadline loses the game;
/// otherwise any starbase siege is progressed or a new one may begin.
pub fn advance_time(galaxy: &mut Galaxy, time: f64, output: &mut dyn OutputWriter) {
    if galaxy.is_ended() {
        return;
    }
    galaxy.advance_stardate(time);
    if galaxy.stardate() > galaxy.stardate_end() {
        game_over(galaxy, DefeatReason::TimeExpired, output);
        return;
    }
    if galaxy.ruleset().starbase_attacks {
        check_starbase_attack(galaxy, output);
    }
}

fn check_starbase_attack(galaxy: &mut Galaxy, output: &mut dyn OutputWriter) {
    if let Some(attack) = galaxy.starbase_attack() {
        if galaxy.stardate() > attack.deadline {
            output.writeln("TOO LATE! STARBASE DESTROYED.");
            galaxy.set_starbase_attack(None);
            galaxy.lose_starbase(attack.quadrant);
            debug!(
                quadrant_x = attack.quadrant.x,
                quadrant_y = attack.quadrant.y,
                "besieged starbase lost"
            );

            if galaxy.total_starbases() == 0 {
                output.writeln("THE FEDERATION HAS LOST ALL STARBASES.");
                output.writeln("THE EMPIRE CANNOT SURVIVE.");
                game_over(galaxy, DefeatReason::StarbasesLost, output);
            }
        } else {
            output.writeln(&format!(
                "{:.1} STARDATES LEFT TO SAVE STARBASE.",
                attack.deadline - galaxy.stardate()
            ));
        }
        return;
    }

    let rank = galaxy.ruleset().rank as f64;
    if galaxy.random() > 0.01 * rank || galaxy.total_starbases() == 0 {
        return;
    }

    let bases: Vec<QuadrantPosition> = (0..8)
        .flat_map(|x| (0..8).map(move |y| QuadrantPosition::new(x, y)))
        .filter(|q| galaxy.quadrant_data(*q).starbases > 0)
        .collect();
    if bases.is_empty() {
        return;
    }

    let target = bases[galaxy.random_index(bases.len())];
    let distance = galaxy.enterprise().quadrant().distance_to(target);
    let time_to_save = 0.09 * distance * (10.0 - rank) + 1.0;
    galaxy.set_starbase_attack(Some(StarbaseAttack {
        quadrant: target,
        deadline: galaxy.stardate() + time_to_save,
    }));
    debug!(
        quadrant_x = target.x,
        quadrant_y = target.y,
        time_to_save,
        "starbase under attack"
    );

    output.writeln(&format!(
        "!!! STARBASE IN QUADRANT {},{} IS UNDER ATTACK!!",
        target.x + 1,
        target.y + 1
    ));
    output.writeln(&format!("YOU HAVE {:.1} STARDATES TO SAVE IT!", time_to_save));
}

/// Arriving in a besieged quadrant lifts the siege.
pub fn check_rescue(galaxy: &mut Galaxy, output: &mut dyn OutputWriter) {
    if let Some(attack) = galaxy.starbase_attack() {
        if attack.quadrant == galaxy.enterprise().quadrant() {
            output.writeln("YOU ARRIVED IN TIME! STARBASE SAVED!");
            galaxy.set_starbase_attack(None);
            debug!("starbase rescued");
        }
    }
}

/// The mission is lost. Every defeat except a relief of command ends with the
/// same epitaph.
pub fn game_over(galaxy: &mut Galaxy, reason: DefeatReason, output: &mut dyn OutputWriter) {
    if galaxy.is_ended() {
        return;
    }
    if reason == DefeatReason::RelievedOfCommand {
        CombatPresenter::show_relieved_of_command(output);
    } else {
        CombatPresenter::show_defeat(galaxy.stardate(), galaxy.total_klingons(), output);
    }
    galaxy.end_mission(Outcome::Defeat(reason));
}

pub fn win_game(galaxy: &mut Galaxy, output: &mut dyn OutputWriter) {
    if galaxy.is_ended() {
        return;
    }
    let rating = galaxy.efficiency_rating();
    CombatPresenter::show_victory(rating, output);
    galaxy.end_mission(Outcome::Victory { rating });
}

pub fn resign(galaxy: &mut Galaxy, output: &mut dyn OutputWriter) {
    output.writeln("COMMAND RESIGNED.");
    galaxy.end_mission(Outcome::Resigned);
}

/// Sit still for `days`, letting repairs progress. Non-positive or
/// non-numeric requests are ignored.
pub fn rest(galaxy: &mut Galaxy, days: f64, output: &mut dyn OutputWriter) {
    if galaxy.is_ended() || days.is_nan() || days <= 0.0 {
        return;
    }
    advance_time(galaxy, days, output);
    if galaxy.is_ended() {
        return;
    }
    repair_system(galaxy, days, output);
    klingons_fire(galaxy, output);
    output.writeln(&format!("--- RESTING FOR {:.1} STARDATES ---", days));
    refresh_sensors(galaxy, output);
}
