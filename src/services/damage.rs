//! Device damage model: repair over time, random failures and starbase
//! repair orders.

use tracing::debug;

use crate::io::OutputWriter;
use crate::models::constants::{Device, NUM_DEVICES};
use crate::models::galaxy::Galaxy;
use crate::ui::presenters::EnterprisePresenter;

use super::mission::advance_time;

/// Damaged devices never read closer to repaired than this until fixed.
const MIN_REMAINING_DAMAGE: f64 = -0.1;
const RANDOM_FAILURE_CHANCE: f64 = 0.9;

/// Progress every damaged device by `time`, then roll for a random failure.
pub fn repair_system(galaxy: &mut Galaxy, time: f64, output: &mut dyn OutputWriter) {
    if galaxy.is_ended() {
        return;
    }

    for device in Device::ALL.iter() {
        let state = galaxy.enterprise().device_state(*device);
        if state >= 0.0 {
            continue;
        }
        let mut repaired = state + time;
        if repaired > MIN_REMAINING_DAMAGE && repaired < 0.0 {
            repaired = MIN_REMAINING_DAMAGE;
        }
        if repaired >= 0.0 {
            repaired = 0.0;
            output.writeln(&format!(
                "DAMAGE CONTROL REPORT: {} REPAIR COMPLETED.",
                device.name()
            ));
        }
        galaxy.enterprise_mut().set_device_state(*device, repaired);
    }

    if galaxy.random() > RANDOM_FAILURE_CHANCE {
        let device = Device::ALL[galaxy.random_index(NUM_DEVICES)];
        let amount = galaxy.random() * 5.0 + 1.0;
        galaxy.enterprise_mut().damage_device(device, amount);
        debug!(device = device.name(), amount, "random system failure");
        output.writeln("--- RANDOM SYSTEM FAILURE ---");
        output.writeln(&format!("DAMAGE CONTROL REPORT: {} DAMAGED", device.name()));
    }
}

/// Time quoted by the dock technicians.
pub fn repair_estimate(galaxy: &Galaxy) -> f64 {
    0.1 * galaxy.enterprise().damaged_count() as f64 + 0.2
}

/// Print the damage report. Returns true when docked technicians offer a
/// repair order and the caller should ask for authorization.
pub fn damage_report(galaxy: &Galaxy, output: &mut dyn OutputWriter) -> bool {
    let enterprise = galaxy.enterprise();
    if enterprise.is_damaged(Device::DamageControl) {
        output.writeln("DAMAGE CONTROL REPORT IS NOT AVAILABLE");
        return false;
    }
    EnterprisePresenter::show_damage_table(enterprise, output);

    if enterprise.is_docked() && enterprise.any_damage() {
        output.writeln("");
        output.writeln("TECHNICIANS STANDING BY TO EFFECT REPAIRS;");
        output.writeln(&format!(
            "ESTIMATED TIME: {:.2} STARDATES",
            repair_estimate(galaxy)
        ));
        return true;
    }
    false
}

/// Repair everything while docked. Does nothing when undocked or undamaged.
pub fn repair_order(galaxy: &mut Galaxy, output: &mut dyn OutputWriter) {
    if galaxy.is_ended() || !galaxy.enterprise().is_docked() {
        return;
    }
    let damaged = galaxy.enterprise().damaged_count();
    if damaged == 0 {
        return;
    }

    let mut repair_time = 0.1 * damaged as f64 + 0.5 * galaxy.random();
    if repair_time >= 1.0 {
        repair_time = 0.9;
    }

    galaxy.enterprise_mut().repair_all();
    advance_time(galaxy, repair_time + 0.1, output);
    if galaxy.is_ended() {
        return;
    }
    output.writeln("TECHNICIANS HAVE COMPLETED REPAIRS.");
    output.writeln(&format!("STARDATE IS NOW {:.1}", galaxy.stardate()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Ruleset;
    use crate::io::test_utils::MockOutput;
    use crate::models::outcome::{DefeatReason, Outcome};
    use crate::random::SequenceRandom;

    /// Helper: galaxy whose rolls never trigger failures or sieges.
    fn quiet_galaxy() -> Galaxy {
        let mut galaxy = Galaxy::new(13, Ruleset::classic());
        galaxy.set_random(Box::new(SequenceRandom::new(vec![0.5])));
        galaxy
    }

    // ========== Repair over time ==========

    #[test]
    fn small_damage_converges_with_one_report() {
        let mut galaxy = quiet_galaxy();
        galaxy
            .enterprise_mut()
            .set_device_state(Device::LongRangeSensors, -0.05);
        let mut output = MockOutput::new();
        for _ in 0..3 {
            repair_system(&mut galaxy, 0.1, &mut output);
        }
        assert_eq!(galaxy.enterprise().device_state(Device::LongRangeSensors), 0.0);
        assert_eq!(
            output.count("DAMAGE CONTROL REPORT: LONG RANGE SENSORS REPAIR COMPLETED."),
            1
        );
    }

    #[test]
    fn partial_repair_floors_at_minus_point_one() {
        let mut galaxy = quiet_galaxy();
        galaxy.enterprise_mut().set_device_state(Device::WarpEngines, -1.0);
        let mut output = MockOutput::new();
        repair_system(&mut galaxy, 0.95, &mut output);
        assert_eq!(galaxy.enterprise().device_state(Device::WarpEngines), -0.1);
        assert!(output.messages.is_empty());
    }

    #[test]
    fn operational_devices_untouched() {
        let mut galaxy = quiet_galaxy();
        repair_system(&mut galaxy, 5.0, &mut MockOutput::new());
        assert!(galaxy.enterprise().devices().iter().all(|d| *d == 0.0));
    }

    #[test]
    fn high_roll_damages_random_device() {
        let mut galaxy = quiet_galaxy();
        // 0.95 triggers, 0.0 picks warp engines, 0.5 gives 3.5 units.
        galaxy.set_random(Box::new(SequenceRandom::new(vec![0.95, 0.0, 0.5])));
        let mut output = MockOutput::new();
        repair_system(&mut galaxy, 0.0, &mut output);
        assert_eq!(galaxy.enterprise().device_state(Device::WarpEngines), -3.5);
        assert!(output.contains("--- RANDOM SYSTEM FAILURE ---"));
        assert!(output.contains("DAMAGE CONTROL REPORT: WARP ENGINES DAMAGED"));
    }

    // ========== Damage report & repair order ==========

    #[test]
    fn report_unavailable_when_damage_control_down() {
        let mut galaxy = quiet_galaxy();
        galaxy.enterprise_mut().damage_device(Device::DamageControl, 1.0);
        let mut output = MockOutput::new();
        assert!(!damage_report(&galaxy, &mut output));
        assert_eq!(output.lines(), vec!["DAMAGE CONTROL REPORT IS NOT AVAILABLE"]);
    }

    #[test]
    fn docked_report_offers_repairs() {
        let mut galaxy = quiet_galaxy();
        galaxy.enterprise_mut().dock();
        galaxy.enterprise_mut().damage_device(Device::PhotonTubes, 2.0);
        galaxy.enterprise_mut().damage_device(Device::Computer, 2.0);
        let mut output = MockOutput::new();
        assert!(damage_report(&galaxy, &mut output));
        assert!(output.contains("ESTIMATED TIME: 0.40 STARDATES"));
    }

    #[test]
    fn undocked_report_offers_nothing() {
        let mut galaxy = quiet_galaxy();
        galaxy.enterprise_mut().damage_device(Device::PhotonTubes, 2.0);
        assert!(!damage_report(&galaxy, &mut MockOutput::new()));
    }

    #[test]
    fn repair_order_fixes_everything_while_docked() {
        let mut galaxy = quiet_galaxy();
        galaxy.enterprise_mut().dock();
        galaxy.enterprise_mut().damage_device(Device::PhotonTubes, 2.0);
        let before = galaxy.stardate();
        let mut output = MockOutput::new();
        repair_order(&mut galaxy, &mut output);
        assert!(!galaxy.enterprise().any_damage());
        // 0.1 per device + 0.5 * 0.5, plus 0.1 overhead
        assert!((galaxy.stardate() - before - 0.45).abs() < 1e-9);
        assert!(output.contains("TECHNICIANS HAVE COMPLETED REPAIRS."));
    }

    #[test]
    fn repair_order_requires_dock() {
        let mut galaxy = quiet_galaxy();
        galaxy.enterprise_mut().damage_device(Device::PhotonTubes, 2.0);
        repair_order(&mut galaxy, &mut MockOutput::new());
        assert!(galaxy.enterprise().is_damaged(Device::PhotonTubes));
    }

    #[test]
    fn repair_order_past_deadline_stops_at_defeat() {
        let mut galaxy = quiet_galaxy();
        galaxy.enterprise_mut().dock();
        galaxy.enterprise_mut().damage_device(Device::PhotonTubes, 2.0);
        let almost_out = galaxy.stardate_end() - 0.1;
        galaxy.set_stardate(almost_out);
        let mut output = MockOutput::new();
        repair_order(&mut galaxy, &mut output);

        assert_eq!(
            galaxy.outcome(),
            Some(Outcome::Defeat(DefeatReason::TimeExpired))
        );
        assert!(!output.contains("TECHNICIANS HAVE COMPLETED REPAIRS."));
        assert!(!output.contains("STARDATE IS NOW"));
    }
}
