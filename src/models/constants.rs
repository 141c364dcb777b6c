use serde::{Deserialize, Serialize};

pub const GALAXY_SIZE: usize = 8;
pub const SECTOR_SIZE: usize = 8;
pub const MAX_KLINGONS_PER_QUADRANT: usize = 3;

pub const INITIAL_ENERGY: f64 = 3000.0;
pub const INITIAL_TORPEDOES: i32 = 10;
pub const INITIAL_SHIELDS: f64 = 0.0;

/// Klingon energy is `KLINGON_BASE_ENERGY * (0.5 + rand())`, i.e. 100..300.
pub const KLINGON_BASE_ENERGY: f64 = 200.0;

pub const MIN_MISSION_DAYS: f64 = 25.0;
pub const MISSION_DAYS_SPREAD: f64 = 10.0;

pub const MAX_WARP: f64 = 8.0;
pub const DAMAGED_MAX_WARP: f64 = 0.2;

/// Clock tick charged for a phaser or torpedo shot.
pub const COMBAT_TICK: f64 = 0.05;
pub const TORPEDO_ENERGY_COST: f64 = 2.0;
pub const TORPEDO_RANGE: usize = 10;

/// A hit must exceed this fraction of the target's energy to register.
pub const PHASER_HIT_THRESHOLD: f64 = 0.15;

pub const LOW_SHIELDS_WARNING: f64 = 200.0;

pub const NUM_DEVICES: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Device {
    WarpEngines = 0,
    ShortRangeSensors = 1,
    LongRangeSensors = 2,
    PhaserControl = 3,
    PhotonTubes = 4,
    DamageControl = 5,
    ShieldControl = 6,
    Computer = 7,
}

impl Device {
    pub fn name(&self) -> &'static str {
        match self {
            Device::WarpEngines => "WARP ENGINES",
            Device::ShortRangeSensors => "SHORT RANGE SENSORS",
            Device::LongRangeSensors => "LONG RANGE SENSORS",
            Device::PhaserControl => "PHASER CONTROL",
            Device::PhotonTubes => "PHOTON TUBES",
            Device::DamageControl => "DAMAGE CONTROL",
            Device::ShieldControl => "SHIELD CONTROL",
            Device::Computer => "LIBRARY-COMPUTER",
        }
    }

    pub const ALL: [Device; NUM_DEVICES] = [
        Device::WarpEngines,
        Device::ShortRangeSensors,
        Device::LongRangeSensors,
        Device::PhaserControl,
        Device::PhotonTubes,
        Device::DamageControl,
        Device::ShieldControl,
        Device::Computer,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectorContent {
    Empty,
    Enterprise,
    Klingon,
    Starbase,
    Star,
}

impl SectorContent {
    pub fn symbol(&self) -> &'static str {
        match self {
            SectorContent::Empty => "   ",
            SectorContent::Enterprise => "<*>",
            SectorContent::Klingon => "+K+",
            SectorContent::Starbase => ">!<",
            SectorContent::Star => " * ",
        }
    }

    /// Stars, starbases and Klingons block movement and stop torpedoes.
    pub fn is_obstacle(&self) -> bool {
        matches!(
            self,
            SectorContent::Klingon | SectorContent::Starbase | SectorContent::Star
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    Green,
    Yellow,
    Red,
    Docked,
}

impl Condition {
    pub fn label(&self) -> &'static str {
        match self {
            Condition::Green => "GREEN",
            Condition::Yellow => "YELLOW",
            Condition::Red => "*RED*",
            Condition::Docked => "DOCKED",
        }
    }
}

/// Compass table for courses 1-9 as (delta_x, delta_y). Index 0 is unused and
/// course 9 repeats course 1 so fractional courses can interpolate up to it.
/// Y grows downward, so course 3 (north) has delta_y = -1.
pub const COURSE_VECTORS: [(f64, f64); 10] = [
    (0.0, 0.0),   // index 0: unused
    (1.0, 0.0),   // course 1
    (1.0, -1.0),  // course 2
    (0.0, -1.0),  // course 3
    (-1.0, -1.0), // course 4
    (-1.0, 0.0),  // course 5
    (-1.0, 1.0),  // course 6
    (0.0, 1.0),   // course 7
    (1.0, 1.0),   // course 8
    (1.0, 0.0),   // course 9 (same as 1, for interpolation)
];

const LEFT_REGIONS: [&str; GALAXY_SIZE] = [
    "ANTARES",
    "RIGEL",
    "PROCYON",
    "VEGA",
    "CANOPUS",
    "ALTAIR",
    "SAGITTARIUS",
    "POLLUX",
];

const RIGHT_REGIONS: [&str; GALAXY_SIZE] = [
    "SIRIUS",
    "DENEB",
    "CAPELLA",
    "BETELGEUSE",
    "ALDEBARAN",
    "REGULUS",
    "ARCTURUS",
    "SPICA",
];

const REGION_NUMERALS: [&str; 4] = ["I", "II", "III", "IV"];

/// Name of the galactic region containing quadrant (x, y), 0-based.
/// The western half of each row shares one name, the eastern half another;
/// `with_numeral` appends the I..IV column suffix.
pub fn region_name(x: i32, y: i32, with_numeral: bool) -> String {
    let row = y.clamp(0, GALAXY_SIZE as i32 - 1) as usize;
    let col = x.clamp(0, GALAXY_SIZE as i32 - 1) as usize;
    let base = if col < GALAXY_SIZE / 2 {
        LEFT_REGIONS[row]
    } else {
        RIGHT_REGIONS[row]
    };
    if with_numeral {
        format!("{} {}", base, REGION_NUMERALS[col % 4])
    } else {
        base.to_string()
    }
}
