//! Read-only views of the running game for front-ends.

use serde::Serialize;

use super::GameEngine;
use crate::models::constants::{Device, GALAXY_SIZE};
use crate::models::galaxy::StarbaseAttack;
use crate::models::klingon::Klingon;
use crate::models::position::{QuadrantPosition, SectorPosition};
use crate::services::scan::scan_neighbourhood;

/// The ship and everything around it in the current quadrant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectorSnapshot {
    pub quadrant: QuadrantPosition,
    pub ship: SectorPosition,
    pub klingons: Vec<Klingon>,
    pub starbases: Vec<SectorPosition>,
    pub stars: Vec<SectorPosition>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DamageReportItem {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissionStats {
    pub stardate: f64,
    pub stardate_end: f64,
    pub days_left: f64,
    pub klingons_left: i32,
    pub klingons_start: i32,
    pub starbases: i32,
    pub docked: bool,
    /// GREEN, YELLOW, *RED* or DOCKED.
    pub condition: String,
}

impl GameEngine {
    pub fn sector_data(&self) -> SectorSnapshot {
        let map = self.galaxy.sector_map();
        SectorSnapshot {
            quadrant: self.galaxy.enterprise().quadrant(),
            ship: self.galaxy.enterprise().sector(),
            klingons: map.klingons.clone(),
            starbases: map.starbases.clone(),
            stars: map.stars.clone(),
        }
    }

    pub fn damage_report(&self) -> Vec<DamageReportItem> {
        Device::ALL
            .iter()
            .map(|d| DamageReportItem {
                name: d.name().to_string(),
                value: self.galaxy.enterprise().device_state(*d),
            })
            .collect()
    }

    pub fn mission_stats(&self) -> MissionStats {
        let galaxy = &self.galaxy;
        MissionStats {
            stardate: galaxy.stardate(),
            stardate_end: galaxy.stardate_end(),
            days_left: galaxy.days_left(),
            klingons_left: galaxy.total_klingons(),
            klingons_start: galaxy.initial_klingons(),
            starbases: galaxy.total_starbases(),
            docked: galaxy.enterprise().is_docked(),
            condition: galaxy.condition().label().to_string(),
        }
    }

    /// Encoded counts of the 3x3 block around the ship, `-1` beyond the
    /// perimeter. `None` while the long range sensors are damaged. Unlike the
    /// LRS command this does not update the player's record.
    pub fn lrs_grid(&self) -> Option<[[i32; 3]; 3]> {
        if self.galaxy.enterprise().is_damaged(Device::LongRangeSensors) {
            return None;
        }
        let mut grid = [[-1; 3]; 3];
        for (row, cells) in scan_neighbourhood(&self.galaxy).iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if let Some(pos) = cell {
                    grid[row][col] = self.galaxy.quadrant_data(*pos).encoded();
                }
            }
        }
        Some(grid)
    }

    /// The player's record of the galaxy as `[y][x]` in quadrant encoding.
    /// Unseen cells read 0; a recorded quadrant always has at least one star.
    pub fn galaxy_map(&self) -> [[i32; GALAXY_SIZE]; GALAXY_SIZE] {
        let mut map = [[0; GALAXY_SIZE]; GALAXY_SIZE];
        for (y, row) in map.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                if let Some(data) = self.galaxy.known(QuadrantPosition::new(x as i32, y as i32)) {
                    *cell = data.encoded();
                }
            }
        }
        map
    }

    pub fn active_starbase_attack(&self) -> Option<StarbaseAttack> {
        self.galaxy.starbase_attack()
    }
}
