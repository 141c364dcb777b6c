use std::f64::consts::PI;

use crate::models::constants::{Device, DAMAGED_MAX_WARP, GALAXY_SIZE, MAX_WARP, SECTOR_SIZE};
use crate::models::enterprise::Enterprise;
use crate::models::position::{QuadrantPosition, SectorPosition};

/// Largest global coordinate a clamped ship may occupy.
const GLOBAL_LIMIT: f64 = (GALAXY_SIZE * SECTOR_SIZE) as f64 - 0.1;

/// Highest warp the engines accept in their current state.
pub fn max_warp(enterprise: &Enterprise) -> f64 {
    if enterprise.is_damaged(Device::WarpEngines) {
        DAMAGED_MAX_WARP
    } else {
        MAX_WARP
    }
}

/// Galaxy-wide sector coordinates of a quadrant/sector pair.
pub fn to_global(quadrant: QuadrantPosition, sector: SectorPosition) -> (f64, f64) {
    (
        (quadrant.x * SECTOR_SIZE as i32 + sector.x) as f64,
        (quadrant.y * SECTOR_SIZE as i32 + sector.y) as f64,
    )
}

/// Split global coordinates into quadrant and sector. The quadrant may lie
/// outside the galaxy; the sector is always in range.
pub fn from_global(gx: f64, gy: f64) -> (QuadrantPosition, SectorPosition) {
    let size = SECTOR_SIZE as f64;
    (
        QuadrantPosition::new((gx / size).floor() as i32, (gy / size).floor() as i32),
        SectorPosition::new(gx.rem_euclid(size).floor() as i32, gy.rem_euclid(size).floor() as i32),
    )
}

/// Pull global coordinates back inside the galactic perimeter.
pub fn clamp_global(gx: f64, gy: f64) -> (f64, f64) {
    (gx.clamp(0.0, GLOBAL_LIMIT), gy.clamp(0.0, GLOBAL_LIMIT))
}

/// Course from one point to another, in `[1, 9)`. Y grows downward, so a
/// target above has a course near 3.
pub fn calculate_direction(from_x: f64, from_y: f64, to_x: f64, to_y: f64) -> f64 {
    let angle = (to_y - from_y).atan2(to_x - from_x);
    let course = 1.0 - angle / (PI / 4.0);
    if course < 1.0 {
        course + 8.0
    } else {
        course
    }
}

pub fn calculate_distance(from_x: f64, from_y: f64, to_x: f64, to_y: f64) -> f64 {
    let dx = to_x - from_x;
    let dy = to_y - from_y;
    (dx * dx + dy * dy).sqrt()
}
