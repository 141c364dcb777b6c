use crate::io::OutputWriter;
use crate::models::constants::{
    Device, SectorContent, COMBAT_TICK, TORPEDO_ENERGY_COST, TORPEDO_RANGE,
};
use crate::models::galaxy::Galaxy;
use crate::models::navigation_types::Course;
use crate::models::outcome::DefeatReason;
use crate::models::position::SectorPosition;
use crate::services::mission::{advance_time, game_over, win_game};
use crate::ui::presenters::CombatPresenter;

use super::klingon_attack::klingons_fire;

/// Check that a torpedo can be launched at all. Prints the reason when not.
pub fn torpedo_ready(galaxy: &Galaxy, output: &mut dyn OutputWriter) -> bool {
    if galaxy.enterprise().torpedoes() <= 0 {
        output.writeln("ALL PHOTON TORPEDOES EXPENDED");
        return false;
    }
    if galaxy.enterprise().is_damaged(Device::PhotonTubes) {
        output.writeln("PHOTON TUBES ARE NOT OPERATIONAL");
        return false;
    }
    true
}

/// Launch a photon torpedo on `course` (1 up to, but not including, 9).
///
/// Returns `None` when the launch is refused. Otherwise the torpedo and its
/// energy are spent whatever it hits, and the returned list holds every
/// in-quadrant sector the torpedo crossed, ending at whatever stopped it.
pub fn fire_torpedo(galaxy: &mut Galaxy, course: f64, output: &mut dyn OutputWriter) -> Option<Vec<SectorPosition>> {
    if galaxy.is_ended() || !torpedo_ready(galaxy, output) {
        return None;
    }
    let course = match Course::new(course) {
        Ok(c) if course < 9.0 => c,
        _ => {
            output.writeln("ENSIGN CHEKOV REPORTS,  'INCORRECT COURSE DATA, SIR!'");
            return None;
        }
    };
    if galaxy.enterprise().energy() < TORPEDO_ENERGY_COST {
        output.writeln("INSUFFICIENT ENERGY TO LAUNCH TORPEDO");
        return None;
    }

    galaxy.enterprise_mut().consume_torpedo().ok()?;
    galaxy.enterprise_mut().subtract_energy(TORPEDO_ENERGY_COST);

    advance_time(galaxy, COMBAT_TICK, output);
    if galaxy.is_ended() {
        return Some(Vec::new());
    }

    let path = track_torpedo(galaxy, course, output);
    klingons_fire(galaxy, output);
    Some(path)
}

fn track_torpedo(galaxy: &mut Galaxy, course: Course, output: &mut dyn OutputWriter) -> Vec<SectorPosition> {
    let heading = course.heading_radians();
    let (dx, dy) = (heading.cos(), heading.sin());
    let start = galaxy.enterprise().sector();
    let (mut tx, mut ty) = (start.x as f64, start.y as f64);
    let mut path = Vec::new();

    output.writeln("TORPEDO TRACK:");
    for _ in 0..TORPEDO_RANGE {
        tx += dx;
        ty += dy;
        let pos = SectorPosition::new((tx + 0.5).floor() as i32, (ty + 0.5).floor() as i32);
        if !pos.in_bounds() {
            output.writeln("TORPEDO MISSED");
            break;
        }

        path.push(pos);
        output.writeln(&format!("               {},{}", pos.x + 1, pos.y + 1));

        match galaxy.sector_map().get(pos) {
            SectorContent::Klingon => {
                CombatPresenter::show_klingon_destroyed(output);
                galaxy.destroy_klingon(pos);
                if galaxy.total_klingons() <= 0 {
                    win_game(galaxy, output);
                }
                break;
            }
            SectorContent::Star => {
                output.writeln(&format!(
                    "STAR AT {},{} ABSORBED TORPEDO ENERGY.",
                    pos.x + 1,
                    pos.y + 1
                ));
                break;
            }
            SectorContent::Starbase => {
                output.writeln("*** STARBASE DESTROYED ***");
                galaxy.destroy_starbase(pos);
                game_over(galaxy, DefeatReason::RelievedOfCommand, output);
                break;
            }
            SectorContent::Empty | SectorContent::Enterprise => {}
        }
    }
    path
}
