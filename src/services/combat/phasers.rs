use crate::io::OutputWriter;
use crate::models::constants::{Device, COMBAT_TICK, PHASER_HIT_THRESHOLD};
use crate::models::galaxy::Galaxy;
use crate::models::position::SectorPosition;
use crate::services::mission::{advance_time, win_game};
use crate::ui::presenters::{format_number, CombatPresenter};

use super::klingon_attack::klingons_fire;

/// Fire `amount` units of phaser energy, split evenly over every Klingon in
/// the quadrant.
///
/// Returns the sectors targeted, in quadrant order, for callers that animate
/// the shot. A rejected shot returns an empty list and changes nothing.
pub fn fire_phasers(galaxy: &mut Galaxy, amount: f64, output: &mut dyn OutputWriter) -> Vec<SectorPosition> {
    if galaxy.is_ended() {
        return Vec::new();
    }
    if galaxy.enterprise().is_damaged(Device::PhaserControl) {
        output.writeln("PHASERS INOPERATIVE");
        return Vec::new();
    }
    if galaxy.sector_map().klingons.is_empty() {
        CombatPresenter::show_no_enemies(output);
        return Vec::new();
    }
    if amount.is_nan() || amount <= 0.0 {
        return Vec::new();
    }
    if amount > galaxy.enterprise().energy() {
        output.writeln("ENERGY AVAILABLE EXCEEDED.");
        return Vec::new();
    }

    let targets: Vec<SectorPosition> = galaxy.sector_map().klingons.iter().map(|k| k.sector).collect();

    advance_time(galaxy, COMBAT_TICK, output);
    if galaxy.is_ended() {
        return targets;
    }

    galaxy.enterprise_mut().subtract_energy(amount);
    output.writeln(&format!("PHASERS FIRED: {} UNITS.", format_number(amount)));

    let ship = galaxy.enterprise().sector();
    let per_klingon = amount / galaxy.sector_map().klingons.len() as f64;

    for i in (0..galaxy.sector_map().klingons.len()).rev() {
        let klingon = galaxy.sector_map().klingons[i];
        let distance = ship.distance_to(klingon.sector);
        let damage = (per_klingon / distance * (galaxy.random() + 2.0)).floor();

        if damage <= PHASER_HIT_THRESHOLD * klingon.energy {
            output.writeln(&format!(
                "SENSORS SHOW NO DAMAGE TO ENEMY AT {},{}",
                klingon.sector.x + 1,
                klingon.sector.y + 1
            ));
            continue;
        }

        let remaining = klingon.energy - damage;
        CombatPresenter::show_klingon_hit(damage, klingon.sector, remaining, output);
        if remaining > 0.0 {
            galaxy.sector_map_mut().klingons[i].energy = remaining;
            continue;
        }

        CombatPresenter::show_klingon_destroyed(output);
        galaxy.destroy_klingon(klingon.sector);
        if galaxy.total_klingons() <= 0 {
            win_game(galaxy, output);
            return targets;
        }
    }

    klingons_fire(galaxy, output);
    targets
}
