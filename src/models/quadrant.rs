use serde::{Deserialize, Serialize};

/// Persistent data about a single quadrant in the galaxy.
/// Stores only counts; sector positions are not preserved between visits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuadrantData {
    pub klingons: i32,
    pub starbases: i32,
    pub stars: i32,
}

impl QuadrantData {
    pub fn new(klingons: i32, starbases: i32, stars: i32) -> Self {
        QuadrantData {
            klingons,
            starbases,
            stars,
        }
    }

    /// The 3-digit encoded value: klingons*100 + starbases*10 + stars.
    pub fn encoded(&self) -> i32 {
        self.klingons * 100 + self.starbases * 10 + self.stars
    }

    pub fn decode(value: i32) -> Self {
        QuadrantData {
            klingons: value / 100,
            starbases: (value % 100) / 10,
            stars: value % 10,
        }
    }
}
