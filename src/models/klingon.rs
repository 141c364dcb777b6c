use serde::{Deserialize, Serialize};

use super::position::SectorPosition;

/// A Klingon warship within a quadrant's sector grid.
/// Up to 3 per quadrant; rebuilt on every quadrant entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Klingon {
    pub sector: SectorPosition,
    pub energy: f64,
}

impl Klingon {
    pub fn new(sector: SectorPosition, energy: f64) -> Self {
        Klingon { sector, energy }
    }
}
