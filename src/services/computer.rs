//! Library computer: galactic records, status and targeting data.

use crate::io::OutputWriter;
use crate::models::constants::{region_name, Device, GALAXY_SIZE};
use crate::models::galaxy::Galaxy;
use crate::models::position::{QuadrantPosition, SectorPosition};
use crate::ui::presenters::{CombatPresenter, EnterprisePresenter};

use super::navigation::{calculate_direction, calculate_distance};

const COLUMN_HEADER: &str = "       1     2     3     4     5     6     7     8";
const COLUMN_RULE: &str = "     ----- ----- ----- ----- ----- ----- ----- -----";

/// Print the function menu. Returns false when the computer is down and no
/// choice should be requested.
pub fn show_menu(galaxy: &Galaxy, output: &mut dyn OutputWriter) -> bool {
    if galaxy.enterprise().is_damaged(Device::Computer) {
        output.writeln("COMPUTER DISABLED");
        return false;
    }
    output.writeln("FUNCTIONS AVAILABLE FROM LIBRARY-COMPUTER:");
    output.writeln("   0 = CUMULATIVE GALACTIC RECORD");
    output.writeln("   1 = STATUS REPORT");
    output.writeln("   2 = PHOTON TORPEDO DATA");
    output.writeln("   3 = STARBASE NAV DATA");
    output.writeln("   4 = DIRECTION/DISTANCE CALCULATOR");
    output.writeln("   5 = GALAXY 'REGION NAME' MAP");
    true
}

/// Run computer function `choice`. Returns true when the direction/distance
/// calculator has started and needs its two coordinate pairs.
pub fn execute_computer(galaxy: &Galaxy, choice: &str, output: &mut dyn OutputWriter) -> bool {
    if galaxy.enterprise().is_damaged(Device::Computer) {
        output.writeln("COMPUTER DISABLED");
        return false;
    }
    match choice.trim() {
        "0" => galactic_record(galaxy, output),
        "1" => status_report(galaxy, output),
        "2" => torpedo_data(galaxy, output),
        "3" => starbase_data(galaxy, output),
        "4" => {
            let q = galaxy.enterprise().quadrant();
            let s = galaxy.enterprise().sector();
            output.writeln("DIRECTION/DISTANCE CALCULATOR:");
            output.writeln(&format!(
                "YOU ARE AT QUADRANT {},{} SECTOR {},{}",
                q.x + 1,
                q.y + 1,
                s.x + 1,
                s.y + 1
            ));
            return true;
        }
        "5" => region_map(output),
        _ => {
            show_menu(galaxy, output);
        }
    }
    false
}

/// Course and distance between two 0-based points.
pub fn show_direction_distance(from: (i32, i32), to: (i32, i32), output: &mut dyn OutputWriter) {
    let (fx, fy) = (from.0 as f64, from.1 as f64);
    let (tx, ty) = (to.0 as f64, to.1 as f64);
    output.writeln(&format!("DIRECTION = {:.2}", calculate_direction(fx, fy, tx, ty)));
    output.writeln(&format!("DISTANCE = {:.2}", calculate_distance(fx, fy, tx, ty)));
}

fn galactic_record(galaxy: &Galaxy, output: &mut dyn OutputWriter) {
    output.writeln("COMPUTER RECORD OF GALAXY");
    output.writeln(COLUMN_HEADER);
    output.writeln(COLUMN_RULE);
    for y in 0..GALAXY_SIZE as i32 {
        let mut line = format!("{}  ", y + 1);
        for x in 0..GALAXY_SIZE as i32 {
            match galaxy.known(QuadrantPosition::new(x, y)) {
                Some(data) => line.push_str(&format!("   {:03}", data.encoded())),
                None => line.push_str("   ***"),
            }
        }
        output.writeln(&line);
    }
}

fn status_report(galaxy: &Galaxy, output: &mut dyn OutputWriter) {
    output.writeln("   STATUS REPORT:");
    output.writeln(&format!("KLINGONS LEFT: {}", galaxy.total_klingons()));
    output.writeln(&format!(
        "MISSION MUST BE COMPLETED IN {:.1} STARDATES",
        galaxy.days_left()
    ));
    output.writeln(&format!(
        "THE FEDERATION IS MAINTAINING {} STARBASES IN THE GALAXY",
        galaxy.total_starbases()
    ));
    EnterprisePresenter::show_damage_table(galaxy.enterprise(), output);
}

fn torpedo_data(galaxy: &Galaxy, output: &mut dyn OutputWriter) {
    let targets: Vec<SectorPosition> = galaxy.sector_map().klingons.iter().map(|k| k.sector).collect();
    if targets.is_empty() {
        CombatPresenter::show_no_enemies(output);
        return;
    }
    output.writeln("FROM ENTERPRISE TO KLINGON BATTLE CRUISER(S)");
    print_targets(galaxy.enterprise().sector(), &targets, output);
}

fn starbase_data(galaxy: &Galaxy, output: &mut dyn OutputWriter) {
    let bases = &galaxy.sector_map().starbases;
    if bases.is_empty() {
        output.writeln("MR. SPOCK REPORTS,  'SENSORS SHOW NO STARBASES IN THIS");
        output.writeln(" QUADRANT.'");
        return;
    }
    output.writeln("FROM ENTERPRISE TO STARBASE:");
    print_targets(galaxy.enterprise().sector(), bases, output);
}

fn print_targets(ship: SectorPosition, targets: &[SectorPosition], output: &mut dyn OutputWriter) {
    for target in targets {
        show_direction_distance((ship.x, ship.y), (target.x, target.y), output);
    }
}

fn region_map(output: &mut dyn OutputWriter) {
    output.writeln("                        THE GALAXY");
    output.writeln(COLUMN_HEADER);
    output.writeln(COLUMN_RULE);
    for y in 0..GALAXY_SIZE as i32 {
        let mut line = format!("{}  ", y + 1);
        for x in 0..GALAXY_SIZE as i32 {
            let name = region_name(x, y, false);
            let short: String = name.chars().take(3).collect();
            line.push_str(&format!("   {:<3}", short));
        }
        output.writeln(&line);
    }
}
