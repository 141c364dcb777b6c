use crate::io::OutputWriter;
use crate::models::constants::{region_name, LOW_SHIELDS_WARNING};
use crate::models::galaxy::Galaxy;
use crate::services::mission::check_rescue;
use crate::services::scan::short_range_scan;

/// Enter the ship's current quadrant: repopulate it, then announce arrival.
pub fn enter_quadrant(galaxy: &mut Galaxy, output: &mut dyn OutputWriter, suppress: bool) {
    galaxy.populate_quadrant();
    announce_quadrant(galaxy, output, suppress);
}

/// Arrival narrative for an already populated quadrant.
pub fn announce_quadrant(galaxy: &mut Galaxy, output: &mut dyn OutputWriter, suppress: bool) {
    check_rescue(galaxy, output);

    let q = galaxy.enterprise().quadrant();
    let region = region_name(q.x, q.y, true);
    output.writeln("");
    if galaxy.stardate() == galaxy.stardate_start() {
        output.writeln("YOUR MISSION BEGINS WITH YOUR STARSHIP LOCATED");
        output.writeln(&format!("IN THE GALACTIC QUADRANT, '{}'.", region));
    } else {
        output.writeln(&format!("NOW ENTERING {} QUADRANT . . .", region));
    }

    if !galaxy.sector_map().klingons.is_empty() {
        output.writeln("");
        output.writeln("COMBAT AREA      CONDITION RED");
        if galaxy.enterprise().shields() <= LOW_SHIELDS_WARNING {
            output.writeln("   SHIELDS DANGEROUSLY LOW");
        }
    }

    short_range_scan(galaxy, output, suppress);
}
