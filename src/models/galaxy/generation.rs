use crate::models::constants::{GALAXY_SIZE, MIN_MISSION_DAYS, MISSION_DAYS_SPREAD};
use crate::models::position::{QuadrantPosition, SectorPosition};
use crate::models::quadrant::QuadrantData;
use crate::random::RandomSource;

/// Everything `Galaxy::new` needs from the opening rolls.
pub(super) struct GeneratedGalaxy {
    pub stardate: f64,
    pub stardate_end: f64,
    pub ship_quadrant: QuadrantPosition,
    pub ship_sector: SectorPosition,
    /// Indexed `[y][x]`.
    pub quadrants: [[QuadrantData; GALAXY_SIZE]; GALAXY_SIZE],
    pub total_klingons: i32,
    pub total_starbases: i32,
}

fn roll_klingons(f: f64) -> i32 {
    if f > 0.98 {
        3
    } else if f > 0.95 {
        2
    } else if f > 0.80 {
        1
    } else {
        0
    }
}

fn random_coordinate(random: &mut dyn RandomSource) -> i32 {
    random.next_index(GALAXY_SIZE) as i32
}

/// Roll the mission window, the ship's start and every quadrant's contents.
///
/// The draw order is fixed (stardate, duration, ship position, then cells
/// column by column) so that a scripted source reproduces a known galaxy.
pub(super) fn generate_galaxy(random: &mut dyn RandomSource) -> GeneratedGalaxy {
    let stardate = (random.next_f64() * 20.0 + 20.0).floor() * 100.0;
    let duration = MIN_MISSION_DAYS + (random.next_f64() * MISSION_DAYS_SPREAD).floor();

    let ship_quadrant = QuadrantPosition::new(random_coordinate(random), random_coordinate(random));
    let ship_sector = SectorPosition::new(random_coordinate(random), random_coordinate(random));

    let mut quadrants = [[QuadrantData::default(); GALAXY_SIZE]; GALAXY_SIZE];
    let mut total_klingons = 0;
    let mut total_starbases = 0;

    // Columns outer, rows inner
    for x in 0..GALAXY_SIZE {
        for y in 0..GALAXY_SIZE {
            let klingons = roll_klingons(random.next_f64());
            let starbases = if random.next_f64() > 0.96 { 1 } else { 0 };
            let stars = (random.next_f64() * 8.0).floor() as i32 + 1;

            quadrants[y][x] = QuadrantData::new(klingons, starbases, stars);
            total_klingons += klingons;
            total_starbases += starbases;
        }
    }

    let mut stardate_end = stardate + duration;
    if total_klingons as f64 > duration {
        stardate_end = stardate + total_klingons as f64 + 1.0;
    }

    if total_starbases == 0 {
        let x = random_coordinate(random) as usize;
        let y = random_coordinate(random) as usize;
        quadrants[y][x].starbases += 1;
        total_starbases += 1;
    }

    if total_klingons == 0 {
        let x = random_coordinate(random) as usize;
        let y = random_coordinate(random) as usize;
        quadrants[y][x].klingons += 1;
        total_klingons += 1;
    }

    GeneratedGalaxy {
        stardate,
        stardate_end,
        ship_quadrant,
        ship_sector,
        quadrants,
        total_klingons,
        total_starbases,
    }
}
