use tracing::debug;

use super::Galaxy;
use crate::models::constants::{KLINGON_BASE_ENERGY, SECTOR_SIZE};
use crate::models::klingon::Klingon;
use crate::models::position::SectorPosition;
use crate::models::sector_map::SectorMap;

/// Random probes before falling back to a scan for a free sector.
const MAX_PLACEMENT_ATTEMPTS: usize = 100;

impl Galaxy {
    /// Rebuild the local entities of the ship's quadrant from its counts and
    /// record the quadrant as known. Positions from earlier visits are not kept.
    pub fn populate_quadrant(&mut self) {
        let q = self.enterprise.quadrant();
        let data = self.quadrant_data(q);
        self.sector_map = SectorMap::new();

        for _ in 0..data.klingons {
            if let Some(pos) = self.find_empty_sector() {
                let energy = KLINGON_BASE_ENERGY * (0.5 + self.random());
                self.sector_map.klingons.push(Klingon::new(pos, energy));
            }
        }
        for _ in 0..data.starbases {
            if let Some(pos) = self.find_empty_sector() {
                self.sector_map.starbases.push(pos);
            }
        }
        for _ in 0..data.stars {
            if let Some(pos) = self.find_empty_sector() {
                self.sector_map.stars.push(pos);
            }
        }

        self.record_known(q);
        debug!(
            quadrant_x = q.x,
            quadrant_y = q.y,
            klingons = data.klingons,
            starbases = data.starbases,
            stars = data.stars,
            "quadrant populated"
        );
    }

    fn is_free(&self, pos: SectorPosition) -> bool {
        pos != self.enterprise.sector() && self.sector_map.is_empty(pos)
    }

    /// Rejection-sample a free sector. After a bounded number of misses the
    /// first free sector in column order is used instead.
    fn find_empty_sector(&mut self) -> Option<SectorPosition> {
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let x = self.random_index(SECTOR_SIZE) as i32;
            let y = self.random_index(SECTOR_SIZE) as i32;
            let pos = SectorPosition::new(x, y);
            if self.is_free(pos) {
                return Some(pos);
            }
        }
        (0..SECTOR_SIZE as i32)
            .flat_map(|x| (0..SECTOR_SIZE as i32).map(move |y| SectorPosition::new(x, y)))
            .find(|pos| self.is_free(*pos))
    }
}
