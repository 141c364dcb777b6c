use crate::io::OutputWriter;
use crate::models::constants::MAX_WARP;
use crate::models::galaxy::Galaxy;
use crate::models::navigation_types::{Course, WarpFactor};
use crate::services::combat::klingons_fire;
use crate::services::damage::repair_system;
use crate::services::mission::advance_time;
use crate::services::scan::short_range_scan;
use crate::ui::presenters::format_number;

use super::course::{clamp_global, from_global, max_warp, to_global};
use super::quadrant::enter_quadrant;

/// Engages warp engines to move the Enterprise.
///
/// The course is validated first, then the warp factor against the engines'
/// current limit, then the energy bill; any failure is reported and leaves
/// the ship untouched. A successful move draws Klingon fire, runs repairs
/// scaled by the warp factor and spends time before the ship steps through
/// space one sector at a time.
///
/// `suppress` skips drawing the short range scan at the destination. State
/// changes are the same either way.
pub fn execute_nav(
    galaxy: &mut Galaxy,
    course: f64,
    warp: f64,
    suppress: bool,
    output: &mut dyn OutputWriter,
) {
    if galaxy.is_ended() {
        return;
    }

    let course = match Course::new(course) {
        Ok(c) => c,
        Err(_) => {
            output.writeln("   LT. SULU REPORTS, 'INCORRECT COURSE DATA, SIR!'");
            return;
        }
    };

    let limit = max_warp(galaxy.enterprise());
    let warp = match WarpFactor::new(warp, limit) {
        Ok(w) => w,
        Err(_) => {
            if limit < MAX_WARP {
                output.writeln("WARP ENGINES ARE DAMAGED. MAXIMUM SPEED = WARP 0.2");
            } else {
                output.writeln(&format!(
                    "   CHIEF ENGINEER SCOTT REPORTS 'THE ENGINES WON'T TAKE WARP {}!'",
                    format_number(warp)
                ));
            }
            return;
        }
    };
    if warp.value() == 0.0 {
        return;
    }

    let sectors = warp.sectors();
    let required = galaxy
        .ruleset()
        .nav_energy
        .required_energy(warp.value(), sectors);
    if galaxy.enterprise().energy() < required {
        output.writeln("ENGINEERING REPORTS   'INSUFFICIENT ENERGY AVAILABLE");
        output.writeln(&format!(
            "                       FOR MANEUVERING AT WARP {}!'",
            warp
        ));
        return;
    }

    galaxy.enterprise_mut().subtract_energy(required);
    klingons_fire(galaxy, output);
    repair_system(galaxy, warp.value(), output);
    advance_time(galaxy, warp.time_cost(), output);
    if galaxy.is_ended() {
        return;
    }

    move_ship(galaxy, course, sectors, suppress, output);
}

/// Step the ship `sectors` times along `course`. Obstacles only matter inside
/// the starting quadrant, the only one whose contents are known.
fn move_ship(
    galaxy: &mut Galaxy,
    course: Course,
    sectors: i32,
    suppress: bool,
    output: &mut dyn OutputWriter,
) {
    let (dx, dy) = course.step_vector();
    let start_quadrant = galaxy.enterprise().quadrant();
    let start_sector = galaxy.enterprise().sector();
    let (mut gx, mut gy) = to_global(start_quadrant, start_sector);
    let mut last_sector = start_sector;

    for _ in 0..sectors {
        gx += dx;
        gy += dy;

        let (quadrant, sector) = from_global(gx, gy);
        if quadrant != start_quadrant || sector == last_sector {
            continue;
        }
        if galaxy.sector_map().get(sector).is_obstacle() {
            output.writeln(&format!(
                "WARP ENGINES SHUT DOWN AT SECTOR {},{} DUE TO BAD NAVIGATION",
                sector.x + 1,
                sector.y + 1
            ));
            gx -= dx;
            gy -= dy;
            break;
        }
        last_sector = sector;
    }

    let (quadrant, sector) = from_global(gx, gy);
    if quadrant.in_bounds() {
        galaxy.enterprise_mut().move_to(quadrant, sector);
        if quadrant != start_quadrant {
            enter_quadrant(galaxy, output, suppress);
        } else {
            short_range_scan(galaxy, output, suppress);
        }
        return;
    }

    output.writeln("LT. UHURA REPORTS MESSAGE FROM STARFLEET COMMAND:");
    output.writeln("  'PERMISSION TO ATTEMPT CROSSING OF GALACTIC PERIMETER");
    output.writeln("  IS HEREBY *DENIED*.  SHUT DOWN YOUR ENGINES.'");

    let (cx, cy) = clamp_global(gx, gy);
    let (quadrant, mut sector) = from_global(cx, cy);
    if quadrant != start_quadrant {
        galaxy.enterprise_mut().move_to(quadrant, sector);
        enter_quadrant(galaxy, output, suppress);
        return;
    }
    if galaxy.sector_map().get(sector).is_obstacle() {
        sector = last_sector;
    }
    galaxy.enterprise_mut().move_to(quadrant, sector);
    short_range_scan(galaxy, output, suppress);
}
