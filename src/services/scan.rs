use crate::io::OutputWriter;
use crate::models::constants::Device;
use crate::models::galaxy::Galaxy;
use crate::models::position::QuadrantPosition;
use crate::ui::presenters::EnterprisePresenter;

/// Sensor refresh: dock when next to a starbase, undock otherwise.
/// Runs even when the short range sensors are out.
pub fn refresh_sensors(galaxy: &mut Galaxy, output: &mut dyn OutputWriter) {
    if galaxy.starbase_adjacent() {
        if galaxy.enterprise_mut().dock() {
            EnterprisePresenter::show_docking(output);
        }
    } else {
        galaxy.enterprise_mut().undock();
    }
}

/// Short Range Sensor Scan. `suppress` refreshes docking state without
/// drawing the scan.
pub fn short_range_scan(galaxy: &mut Galaxy, output: &mut dyn OutputWriter, suppress: bool) {
    refresh_sensors(galaxy, output);
    if suppress {
        return;
    }
    if galaxy.enterprise().is_damaged(Device::ShortRangeSensors) {
        output.writeln("SHORT RANGE SENSORS ARE OUT");
        return;
    }
    EnterprisePresenter::show_short_range_scan(galaxy, output);
}

/// The 3x3 block of quadrants centred on the ship. `None` marks cells
/// beyond the galactic perimeter.
pub fn scan_neighbourhood(galaxy: &Galaxy) -> [[Option<QuadrantPosition>; 3]; 3] {
    let centre = galaxy.enterprise().quadrant();
    let mut cells = [[None; 3]; 3];
    for (row, dy) in (-1..=1).enumerate() {
        for (col, dx) in (-1..=1).enumerate() {
            let pos = QuadrantPosition::new(centre.x + dx, centre.y + dy);
            if pos.in_bounds() {
                cells[row][col] = Some(pos);
            }
        }
    }
    cells
}

/// Long Range Sensor Scan. Every in-range quadrant is added to the
/// computer's record.
pub fn long_range_scan(galaxy: &mut Galaxy, output: &mut dyn OutputWriter) {
    if galaxy.enterprise().is_damaged(Device::LongRangeSensors) {
        output.writeln("LONG RANGE SENSORS ARE INOPERABLE");
        return;
    }

    let q = galaxy.enterprise().quadrant();
    output.writeln(&format!("LONG RANGE SCAN FOR QUADRANT {},{}", q.x + 1, q.y + 1));
    output.writeln("-------------------");
    for row in scan_neighbourhood(galaxy) {
        let mut line = String::new();
        for cell in row {
            match cell {
                Some(pos) => {
                    galaxy.record_known(pos);
                    line.push_str(&format!(": {:03} ", galaxy.quadrant_data(pos).encoded()));
                }
                None => line.push_str(": *** "),
            }
        }
        output.writeln(&format!("{}:", line));
        output.writeln("-------------------");
    }
}
