use crate::io::OutputWriter;
use crate::models::galaxy::Galaxy;
use crate::models::outcome::DefeatReason;
use crate::services::mission::game_over;
use crate::ui::presenters::CombatPresenter;

/// Every Klingon in the quadrant fires on the Enterprise, spending part of its
/// own energy. Shields below zero destroy the ship and silence the remaining
/// Klingons.
pub fn klingons_fire(galaxy: &mut Galaxy, output: &mut dyn OutputWriter) {
    if galaxy.is_ended() {
        return;
    }

    let ship = galaxy.enterprise().sector();
    for i in 0..galaxy.sector_map().klingons.len() {
        let klingon = galaxy.sector_map().klingons[i];
        let distance = ship.distance_to(klingon.sector);
        let hit = (klingon.energy / distance * (2.0 + galaxy.random())).floor();
        galaxy.enterprise_mut().subtract_shields(hit);
        let spent = 3.0 + galaxy.random();
        galaxy.sector_map_mut().klingons[i].energy = klingon.energy / spent;

        let shields = galaxy.enterprise().shields();
        CombatPresenter::show_enterprise_hit(hit, klingon.sector, shields, output);
        if shields < 0.0 {
            game_over(galaxy, DefeatReason::ShipDestroyed, output);
            break;
        }
    }
}
