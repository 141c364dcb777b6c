//! Galaxy model
//!
//! The single mutable aggregate of a game: the 8x8 quadrant grid, the
//! player's record of it, the Enterprise, the local entities of the current
//! quadrant, the mission clock and the random source.

mod generation;
mod quadrant_ops;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::constants::{Condition, SectorContent, GALAXY_SIZE};
use super::enterprise::Enterprise;
use super::outcome::Outcome;
use super::position::{QuadrantPosition, SectorPosition};
use super::quadrant::QuadrantData;
use super::sector_map::SectorMap;
use crate::config::Ruleset;
use crate::random::{self, RandomSource};

use generation::generate_galaxy;

/// Energy below which the ship reports condition YELLOW.
const LOW_ENERGY_CONDITION: f64 = 300.0;

/// A starbase under siege that the Enterprise can save by entering its quadrant
/// before `deadline`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StarbaseAttack {
    pub quadrant: QuadrantPosition,
    pub deadline: f64,
}

/// Top-level game state container.
pub struct Galaxy {
    stardate: f64,
    stardate_start: f64,
    stardate_end: f64,
    /// 8x8 grid of quadrant data. Internal 0-based: quadrants[y][x].
    quadrants: [[QuadrantData; GALAXY_SIZE]; GALAXY_SIZE],
    /// What the player has seen. None = never scanned or visited.
    known: [[Option<QuadrantData>; GALAXY_SIZE]; GALAXY_SIZE],
    total_klingons: i32,
    initial_klingons: i32,
    total_starbases: i32,
    enterprise: Enterprise,
    sector_map: SectorMap,
    starbase_attack: Option<StarbaseAttack>,
    outcome: Option<Outcome>,
    ruleset: Ruleset,
    random: Box<dyn RandomSource>,
}

impl Galaxy {
    /// Create and initialize a new game from a seed.
    pub fn new(seed: u64, ruleset: Ruleset) -> Self {
        Self::with_random(random::seeded(seed), ruleset)
    }

    /// Create a game drawing every roll from `random`.
    pub fn with_random(mut random: Box<dyn RandomSource>, ruleset: Ruleset) -> Self {
        let generated = generate_galaxy(random.as_mut());

        let mut galaxy = Galaxy {
            stardate: generated.stardate,
            stardate_start: generated.stardate,
            stardate_end: generated.stardate_end,
            quadrants: generated.quadrants,
            known: [[None; GALAXY_SIZE]; GALAXY_SIZE],
            total_klingons: generated.total_klingons,
            initial_klingons: generated.total_klingons,
            total_starbases: generated.total_starbases,
            enterprise: Enterprise::new(generated.ship_quadrant, generated.ship_sector),
            sector_map: SectorMap::new(),
            starbase_attack: None,
            outcome: None,
            ruleset,
            random,
        };

        galaxy.populate_quadrant();
        galaxy
    }

    // ========== Accessor Methods ==========

    pub fn stardate(&self) -> f64 {
        self.stardate
    }

    pub fn stardate_start(&self) -> f64 {
        self.stardate_start
    }

    pub fn stardate_end(&self) -> f64 {
        self.stardate_end
    }

    pub fn days_left(&self) -> f64 {
        self.stardate_end - self.stardate
    }

    pub fn total_klingons(&self) -> i32 {
        self.total_klingons
    }

    pub fn initial_klingons(&self) -> i32 {
        self.initial_klingons
    }

    pub fn total_starbases(&self) -> i32 {
        self.total_starbases
    }

    pub fn enterprise(&self) -> &Enterprise {
        &self.enterprise
    }

    pub fn enterprise_mut(&mut self) -> &mut Enterprise {
        &mut self.enterprise
    }

    pub fn sector_map(&self) -> &SectorMap {
        &self.sector_map
    }

    /// Direct access to local entities. Callers adding or removing Klingons or
    /// starbases here must keep the quadrant counts in step via
    /// `set_quadrant_data`.
    pub fn sector_map_mut(&mut self) -> &mut SectorMap {
        &mut self.sector_map
    }

    pub fn ruleset(&self) -> &Ruleset {
        &self.ruleset
    }

    pub fn set_ruleset(&mut self, ruleset: Ruleset) {
        self.ruleset = ruleset;
    }

    pub fn quadrant_data(&self, pos: QuadrantPosition) -> QuadrantData {
        self.quadrants[pos.y as usize][pos.x as usize]
    }

    /// Overwrite a cell, keeping the global counters equal to the grid sums.
    pub fn set_quadrant_data(&mut self, pos: QuadrantPosition, data: QuadrantData) {
        let old = self.quadrants[pos.y as usize][pos.x as usize];
        self.total_klingons += data.klingons - old.klingons;
        self.total_starbases += data.starbases - old.starbases;
        self.quadrants[pos.y as usize][pos.x as usize] = data;
    }

    pub fn known(&self, pos: QuadrantPosition) -> Option<QuadrantData> {
        self.known[pos.y as usize][pos.x as usize]
    }

    /// Copy a cell into the player's record. Out-of-range positions are ignored.
    pub fn record_known(&mut self, pos: QuadrantPosition) {
        if pos.in_bounds() {
            self.known[pos.y as usize][pos.x as usize] = Some(self.quadrant_data(pos));
        }
    }

    pub fn starbase_attack(&self) -> Option<StarbaseAttack> {
        self.starbase_attack
    }

    pub fn set_starbase_attack(&mut self, attack: Option<StarbaseAttack>) {
        self.starbase_attack = attack;
    }

    /// Next uniform roll in `[0, 1)`.
    pub fn random(&mut self) -> f64 {
        self.random.next_f64()
    }

    pub fn random_index(&mut self, len: usize) -> usize {
        self.random.next_index(len)
    }

    pub fn set_random(&mut self, random: Box<dyn RandomSource>) {
        self.random = random;
    }

    /// Hand the random source over to a successor game. This galaxy is left
    /// with an inert source and should be dropped.
    pub(crate) fn take_random(&mut self) -> Box<dyn RandomSource> {
        std::mem::replace(&mut self.random, Box::new(random::SequenceRandom::new(Vec::new())))
    }

    pub fn set_stardate(&mut self, stardate: f64) {
        self.stardate = stardate;
    }

    pub fn advance_stardate(&mut self, delta: f64) {
        self.stardate += delta;
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_ended(&self) -> bool {
        self.outcome.is_some()
    }

    /// Record how the mission ended. The first outcome recorded stands.
    pub fn end_mission(&mut self, outcome: Outcome) {
        if self.outcome.is_none() {
            info!(
                ?outcome,
                victory = outcome.is_victory(),
                stardate = self.stardate,
                "mission ended"
            );
            self.outcome = Some(outcome);
        }
    }

    // ========== End Accessor Methods ==========

    // ========== Atomic Update Methods ==========

    /// Move the ship without repopulating. Used to set up scenarios.
    pub fn place_enterprise(&mut self, quadrant: QuadrantPosition, sector: SectorPosition) {
        self.enterprise.move_to(quadrant, sector);
    }

    /// Atomically destroy a local Klingon, updating all tracking locations.
    /// Returns false if no Klingon sits at `pos`.
    pub fn destroy_klingon(&mut self, pos: SectorPosition) -> bool {
        if self.sector_map.remove_klingon(pos).is_none() {
            return false;
        }
        self.total_klingons -= 1;
        let q = self.enterprise.quadrant();
        self.quadrants[q.y as usize][q.x as usize].klingons -= 1;
        true
    }

    /// Atomically destroy a local starbase, updating all tracking locations.
    pub fn destroy_starbase(&mut self, pos: SectorPosition) -> bool {
        if !self.sector_map.remove_starbase(pos) {
            return false;
        }
        self.total_starbases -= 1;
        let q = self.enterprise.quadrant();
        self.quadrants[q.y as usize][q.x as usize].starbases -= 1;
        true
    }

    /// A starbase in `quadrant` fell to a siege. The player's record is
    /// corrected only if that quadrant has been seen.
    pub fn lose_starbase(&mut self, quadrant: QuadrantPosition) {
        let cell = &mut self.quadrants[quadrant.y as usize][quadrant.x as usize];
        if cell.starbases <= 0 {
            return;
        }
        cell.starbases -= 1;
        self.total_starbases -= 1;

        if let Some(known) = self.known[quadrant.y as usize][quadrant.x as usize].as_mut() {
            known.starbases = (known.starbases - 1).max(0);
        }

        if quadrant == self.enterprise.quadrant() && !self.sector_map.starbases.is_empty() {
            self.sector_map.starbases.remove(0);
        }
    }

    // ========== End Atomic Update Methods ==========

    /// What occupies `pos` in the current quadrant, the ship included.
    pub fn sector_content(&self, pos: SectorPosition) -> SectorContent {
        if pos == self.enterprise.sector() {
            SectorContent::Enterprise
        } else {
            self.sector_map.get(pos)
        }
    }

    pub fn starbase_adjacent(&self) -> bool {
        let ship = self.enterprise.sector();
        self.sector_map.starbases.iter().any(|b| ship.is_adjacent(*b))
    }

    pub fn condition(&self) -> Condition {
        if self.enterprise.is_docked() {
            Condition::Docked
        } else if !self.sector_map.klingons.is_empty() {
            Condition::Red
        } else if self.enterprise.energy() < LOW_ENERGY_CONDITION {
            Condition::Yellow
        } else {
            Condition::Green
        }
    }

    /// `floor(1000 * (initial / elapsed)^2)`.
    pub fn efficiency_rating(&self) -> i32 {
        let elapsed = self.stardate - self.stardate_start;
        let ratio = self.initial_klingons as f64 / elapsed;
        (1000.0 * ratio * ratio).floor().min(i32::MAX as f64) as i32
    }
}

// Custom Debug that doesn't expose RNG internals
impl fmt::Debug for Galaxy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Galaxy")
            .field("stardate", &self.stardate)
            .field("total_klingons", &self.total_klingons)
            .field("starbases", &self.total_starbases)
            .field("outcome", &self.outcome)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::klingon::Klingon;
    use crate::random::SequenceRandom;

    fn grid_sum(galaxy: &Galaxy) -> (i32, i32) {
        let mut k = 0;
        let mut b = 0;
        for x in 0..8 {
            for y in 0..8 {
                let q = galaxy.quadrant_data(QuadrantPosition::new(x, y));
                k += q.klingons;
                b += q.starbases;
            }
        }
        (k, b)
    }

    // ========== Galaxy initialization tests ==========

    #[test]
    fn counters_match_grid_after_creation() {
        for seed in 0..20 {
            let galaxy = Galaxy::new(seed, Ruleset::default());
            assert_eq!(
                grid_sum(&galaxy),
                (galaxy.total_klingons(), galaxy.total_starbases()),
                "seed {}",
                seed
            );
            assert!(galaxy.total_starbases() >= 1);
            assert_eq!(galaxy.initial_klingons(), galaxy.total_klingons());
        }
    }

    #[test]
    fn starting_quadrant_is_populated_and_known() {
        for seed in 0..20 {
            let galaxy = Galaxy::new(seed, Ruleset::default());
            let q = galaxy.enterprise().quadrant();
            let data = galaxy.quadrant_data(q);
            assert_eq!(galaxy.sector_map().klingons.len() as i32, data.klingons);
            assert_eq!(galaxy.sector_map().starbases.len() as i32, data.starbases);
            assert_eq!(galaxy.sector_map().stars.len() as i32, data.stars);
            assert_eq!(galaxy.known(q), Some(data));
        }
    }

    #[test]
    fn galaxy_starts_undocked_with_full_stores() {
        let galaxy = Galaxy::new(3, Ruleset::default());
        assert_eq!(galaxy.stardate(), galaxy.stardate_start());
        assert!(galaxy.enterprise().energy() > 0.0);
        assert!(galaxy.outcome().is_none());
        assert!(galaxy.starbase_attack().is_none());
    }

    // ========== Atomic update tests ==========

    #[test]
    fn set_quadrant_data_keeps_totals() {
        let mut galaxy = Galaxy::new(1, Ruleset::default());
        let pos = QuadrantPosition::new(2, 5);
        galaxy.set_quadrant_data(pos, QuadrantData::new(3, 1, 2));
        assert_eq!(grid_sum(&galaxy), (galaxy.total_klingons(), galaxy.total_starbases()));
    }

    #[test]
    fn destroy_klingon_updates_everything() {
        let mut galaxy = Galaxy::new(5, Ruleset::default());
        let q = galaxy.enterprise().quadrant();
        let ship = galaxy.enterprise().sector();
        let target = SectorPosition::new((ship.x + 2) % 8, ship.y);

        *galaxy.sector_map_mut() = SectorMap::new();
        galaxy.sector_map_mut().klingons.push(Klingon::new(target, 200.0));
        galaxy.set_quadrant_data(q, QuadrantData::new(1, 0, 0));
        let before = galaxy.total_klingons();

        assert!(galaxy.destroy_klingon(target));
        assert_eq!(galaxy.total_klingons(), before - 1);
        assert_eq!(galaxy.quadrant_data(q).klingons, 0);
        assert!(galaxy.sector_map().klingons.is_empty());
        assert!(!galaxy.destroy_klingon(target));
    }

    #[test]
    fn lost_starbase_adjusts_known_record() {
        let mut galaxy = Galaxy::new(9, Ruleset::default());
        let pos = QuadrantPosition::new(0, 0);
        galaxy.set_quadrant_data(pos, QuadrantData::new(0, 1, 4));
        galaxy.record_known(pos);
        let before = galaxy.total_starbases();

        galaxy.lose_starbase(pos);
        assert_eq!(galaxy.total_starbases(), before - 1);
        assert_eq!(galaxy.quadrant_data(pos), QuadrantData::new(0, 0, 4));
        assert_eq!(galaxy.known(pos), Some(QuadrantData::new(0, 0, 4)));
    }

    #[test]
    fn first_outcome_stands() {
        let mut galaxy = Galaxy::new(2, Ruleset::default());
        galaxy.end_mission(Outcome::Resigned);
        galaxy.end_mission(Outcome::Victory { rating: 10 });
        assert_eq!(galaxy.outcome(), Some(Outcome::Resigned));
    }

    #[test]
    fn condition_priorities() {
        let mut galaxy = Galaxy::with_random(Box::new(SequenceRandom::new(vec![0.5])), Ruleset::default());
        *galaxy.sector_map_mut() = SectorMap::new();
        assert_eq!(galaxy.condition(), Condition::Green);
        galaxy.enterprise_mut().set_energy(100.0);
        assert_eq!(galaxy.condition(), Condition::Yellow);
        galaxy
            .sector_map_mut()
            .klingons
            .push(Klingon::new(SectorPosition::new(0, 0), 150.0));
        assert_eq!(galaxy.condition(), Condition::Red);
    }

    #[test]
    fn efficiency_rating_squares_kill_rate() {
        let mut galaxy = Galaxy::new(4, Ruleset::default());
        let start = galaxy.stardate_start();
        galaxy.set_stardate(start + galaxy.initial_klingons() as f64);
        assert_eq!(galaxy.efficiency_rating(), 1000);
    }
}
