use super::constants::{SectorContent, MAX_KLINGONS_PER_QUADRANT, SECTOR_SIZE};
use super::klingon::Klingon;
use super::position::SectorPosition;

/// Local entities of the quadrant the Enterprise is in.
/// Rebuilt from the quadrant's counts every time the Enterprise enters it.
/// The ship itself is not stored here; see `Galaxy::sector_content`.
#[derive(Debug, Clone, Default)]
pub struct SectorMap {
    pub klingons: Vec<Klingon>,
    pub starbases: Vec<SectorPosition>,
    pub stars: Vec<SectorPosition>,
}

impl SectorMap {
    pub fn new() -> Self {
        SectorMap {
            klingons: Vec::with_capacity(MAX_KLINGONS_PER_QUADRANT),
            starbases: Vec::new(),
            stars: Vec::new(),
        }
    }

    /// What occupies `pos`, ignoring the ship.
    pub fn get(&self, pos: SectorPosition) -> SectorContent {
        if self.klingons.iter().any(|k| k.sector == pos) {
            SectorContent::Klingon
        } else if self.starbases.contains(&pos) {
            SectorContent::Starbase
        } else if self.stars.contains(&pos) {
            SectorContent::Star
        } else {
            SectorContent::Empty
        }
    }

    pub fn is_empty(&self, pos: SectorPosition) -> bool {
        self.get(pos) == SectorContent::Empty
    }

    pub fn remove_klingon(&mut self, pos: SectorPosition) -> Option<Klingon> {
        let idx = self.klingons.iter().position(|k| k.sector == pos)?;
        Some(self.klingons.remove(idx))
    }

    pub fn remove_starbase(&mut self, pos: SectorPosition) -> bool {
        let before = self.starbases.len();
        self.starbases.retain(|s| *s != pos);
        self.starbases.len() != before
    }

    /// Render one row (0-based `y`) as a 24-character string, with the ship
    /// drawn at `ship`.
    pub fn render_row(&self, y: i32, ship: SectorPosition) -> String {
        (0..SECTOR_SIZE as i32)
            .map(|x| {
                let pos = SectorPosition { x, y };
                if pos == ship {
                    SectorContent::Enterprise.symbol()
                } else {
                    self.get(pos).symbol()
                }
            })
            .collect()
    }
}
