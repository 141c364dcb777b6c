use super::constants::{Device, INITIAL_ENERGY, INITIAL_SHIELDS, INITIAL_TORPEDOES, NUM_DEVICES};
use super::errors::{GameError, GameResult};
use super::position::{QuadrantPosition, SectorPosition};

/// The player's starship.
#[derive(Debug, Clone)]
pub struct Enterprise {
    quadrant: QuadrantPosition,
    sector: SectorPosition,
    energy: f64,
    energy_max: f64,
    torpedoes: i32,
    shields: f64,
    docked: bool,
    /// Damage state for each of the 8 devices.
    /// 0 = operational, negative = days until repaired.
    devices: [f64; NUM_DEVICES],
}

impl Enterprise {
    pub fn new(quadrant: QuadrantPosition, sector: SectorPosition) -> Self {
        Enterprise {
            quadrant,
            sector,
            energy: INITIAL_ENERGY,
            energy_max: INITIAL_ENERGY,
            torpedoes: INITIAL_TORPEDOES,
            shields: INITIAL_SHIELDS,
            docked: false,
            devices: [0.0; NUM_DEVICES],
        }
    }

    pub fn quadrant(&self) -> QuadrantPosition {
        self.quadrant
    }

    pub fn sector(&self) -> SectorPosition {
        self.sector
    }

    pub fn energy(&self) -> f64 {
        self.energy
    }

    pub fn energy_max(&self) -> f64 {
        self.energy_max
    }

    pub fn shields(&self) -> f64 {
        self.shields
    }

    pub fn torpedoes(&self) -> i32 {
        self.torpedoes
    }

    pub fn is_docked(&self) -> bool {
        self.docked
    }

    pub fn devices(&self) -> &[f64; NUM_DEVICES] {
        &self.devices
    }

    pub fn device_state(&self, device: Device) -> f64 {
        self.devices[device as usize]
    }

    pub fn move_to(&mut self, quadrant: QuadrantPosition, sector: SectorPosition) {
        self.quadrant = quadrant;
        self.sector = sector;
    }

    pub fn set_energy(&mut self, energy: f64) {
        self.energy = energy;
    }

    pub fn set_shields(&mut self, shields: f64) {
        self.shields = shields;
    }

    pub fn set_torpedoes(&mut self, torpedoes: i32) {
        self.torpedoes = torpedoes;
    }

    pub fn set_device_state(&mut self, device: Device, value: f64) {
        self.devices[device as usize] = value;
    }

    pub fn subtract_energy(&mut self, amount: f64) {
        self.energy -= amount;
    }

    /// Shields may go negative here; a negative value means the ship is lost.
    pub fn subtract_shields(&mut self, amount: f64) {
        self.shields -= amount;
    }

    pub fn consume_torpedo(&mut self) -> GameResult<()> {
        if self.torpedoes <= 0 {
            return Err(GameError::InsufficientResources {
                required: 1.0,
                available: 0.0,
            });
        }
        self.torpedoes -= 1;
        Ok(())
    }

    pub fn is_damaged(&self, device: Device) -> bool {
        self.devices[device as usize] < 0.0
    }

    pub fn any_damage(&self) -> bool {
        self.devices.iter().any(|d| *d < 0.0)
    }

    pub fn damaged_count(&self) -> usize {
        self.devices.iter().filter(|d| **d < 0.0).count()
    }

    pub fn damage_device(&mut self, device: Device, amount: f64) {
        self.devices[device as usize] -= amount;
    }

    pub fn repair_all(&mut self) {
        self.devices = [0.0; NUM_DEVICES];
    }

    /// Move `amount` units into the shields, drawing on the combined pool of
    /// energy and current shields.
    pub fn shield_control(&mut self, amount: f64) -> GameResult<()> {
        if self.is_damaged(Device::ShieldControl) {
            return Err(GameError::DeviceDamaged(Device::ShieldControl));
        }
        if amount.is_nan() || amount < 0.0 {
            return Err(GameError::InvalidInput(format!("{} units", amount)));
        }
        let pool = self.energy + self.shields;
        if amount > pool {
            return Err(GameError::InsufficientResources {
                required: amount,
                available: pool,
            });
        }
        self.energy = pool - amount;
        self.shields = amount;
        Ok(())
    }

    /// Refit at a starbase. Returns true only on the transition into docked state.
    pub fn dock(&mut self) -> bool {
        if self.docked {
            return false;
        }
        self.docked = true;
        self.shields = INITIAL_SHIELDS;
        self.energy = self.energy_max;
        self.torpedoes = INITIAL_TORPEDOES;
        true
    }

    pub fn undock(&mut self) {
        self.docked = false;
    }
}
