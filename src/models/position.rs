use serde::{Deserialize, Serialize};

use super::constants::{GALAXY_SIZE, SECTOR_SIZE};

/// A position within the 8x8 galaxy (quadrant coordinates).
/// Values range 0-7. (0,0) is upper-left, (7,7) is lower-right.
/// X increases left-to-right, Y increases top-to-bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuadrantPosition {
    pub x: i32,
    pub y: i32,
}

/// A position within an 8x8 sector grid. Same orientation as quadrants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SectorPosition {
    pub x: i32,
    pub y: i32,
}

impl QuadrantPosition {
    pub fn new(x: i32, y: i32) -> Self {
        QuadrantPosition { x, y }
    }

    pub fn in_bounds(&self) -> bool {
        (0..GALAXY_SIZE as i32).contains(&self.x) && (0..GALAXY_SIZE as i32).contains(&self.y)
    }

    pub fn distance_to(&self, other: QuadrantPosition) -> f64 {
        let dx = (other.x - self.x) as f64;
        let dy = (other.y - self.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

impl SectorPosition {
    pub fn new(x: i32, y: i32) -> Self {
        SectorPosition { x, y }
    }

    pub fn in_bounds(&self) -> bool {
        (0..SECTOR_SIZE as i32).contains(&self.x) && (0..SECTOR_SIZE as i32).contains(&self.y)
    }

    /// Euclidean distance in sectors.
    pub fn distance_to(&self, other: SectorPosition) -> f64 {
        let dx = (other.x - self.x) as f64;
        let dy = (other.y - self.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }

    /// True when `other` is in the 8-neighbourhood of this sector (or equal).
    pub fn is_adjacent(&self, other: SectorPosition) -> bool {
        (self.x - other.x).abs() <= 1 && (self.y - other.y).abs() <= 1
    }
}
