use crate::io::OutputWriter;
use crate::models::constants::{region_name, Device, SECTOR_SIZE};
use crate::models::enterprise::Enterprise;
use crate::models::galaxy::Galaxy;
use crate::models::position::SectorPosition;

const SCAN_BORDER: &str = "---------------------------------";

/// Format a number the way the console always has: integers without a
/// fractional part, never a negative zero.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{}", value)
    }
}

pub struct EnterprisePresenter;

impl EnterprisePresenter {
    pub fn show_damage_table(enterprise: &Enterprise, output: &mut dyn OutputWriter) {
        output.writeln("DEVICE             STATE OF REPAIR");
        for device in Device::ALL.iter() {
            let state = (enterprise.device_state(*device) * 100.0).floor() / 100.0;
            output.writeln(&format!("{:<25} {}", device.name(), format_number(state)));
        }
    }

    pub fn show_short_range_scan(galaxy: &Galaxy, output: &mut dyn OutputWriter) {
        let e = galaxy.enterprise();
        let q = e.quadrant();
        let s = e.sector();

        output.writeln(SCAN_BORDER);
        for y in 0..=SECTOR_SIZE as i32 {
            let row = if y < SECTOR_SIZE as i32 {
                galaxy.sector_map().render_row(y, s)
            } else {
                " ".repeat(SECTOR_SIZE * 3)
            };
            let status = match y {
                0 => format!("        STARDATE          {:.1}", galaxy.stardate()),
                1 => format!("        CONDITION         {}", galaxy.condition().label()),
                2 => format!("        QUADRANT          {},{}", q.x + 1, q.y + 1),
                3 => format!("        REGION            {}", region_name(q.x, q.y, true)),
                4 => format!("        SECTOR            {},{}", s.x + 1, s.y + 1),
                5 => format!("        PHOTON TORPEDOES  {}", e.torpedoes()),
                6 => format!(
                    "        TOTAL ENERGY      {}",
                    (e.energy() + e.shields()).floor()
                ),
                7 => format!("        SHIELDS           {}", e.shields().floor()),
                _ => format!("        KLINGONS REMAINING {}", galaxy.total_klingons()),
            };
            output.writeln(&format!("{}{}", row, status));
        }
        output.writeln(SCAN_BORDER);
    }

    pub fn show_docking(output: &mut dyn OutputWriter) {
        output.writeln("SHIELDS DROPPED FOR DOCKING PURPOSES");
    }
}

pub struct CombatPresenter;

impl CombatPresenter {
    pub fn show_no_enemies(output: &mut dyn OutputWriter) {
        output.writeln("SCIENCE OFFICER SPOCK REPORTS  'SENSORS SHOW NO ENEMY SHIPS");
        output.writeln("                                IN THIS QUADRANT'");
    }

    pub fn show_klingon_hit(hit: f64, pos: SectorPosition, remaining: f64, output: &mut dyn OutputWriter) {
        output.writeln(&format!(
            "{} UNIT HIT ON KLINGON AT SECTOR {},{}",
            format_number(hit),
            pos.x + 1,
            pos.y + 1
        ));
        if remaining > 0.0 {
            output.writeln(&format!(
                "   (SENSORS SHOW {} UNITS REMAINING)",
                remaining.floor()
            ));
        }
    }

    pub fn show_klingon_destroyed(output: &mut dyn OutputWriter) {
        output.writeln("*** KLINGON DESTROYED ***");
    }

    pub fn show_enterprise_hit(hit: f64, from: SectorPosition, shields: f64, output: &mut dyn OutputWriter) {
        output.writeln(&format!(
            "{} UNIT HIT ON ENTERPRISE FROM SECTOR {},{}",
            format_number(hit),
            from.x + 1,
            from.y + 1
        ));
        output.writeln(&format!(
            "      <SHIELDS DOWN TO {} UNITS>",
            format_number(shields.max(0.0).floor())
        ));
    }

    pub fn show_victory(rating: i32, output: &mut dyn OutputWriter) {
        output.writeln("");
        output.writeln("CONGRATULATION, CAPTAIN!  THE LAST KLINGON BATTLE CRUISER");
        output.writeln("MENACING THE FEDERATION HAS BEEN DESTROYED.");
        output.writeln(&format!("YOUR EFFICIENCY RATING IS {}", rating));
    }

    pub fn show_defeat(stardate: f64, klingons_left: i32, output: &mut dyn OutputWriter) {
        output.writeln("");
        output.writeln(&format!("IT IS STARDATE {:.1}", stardate));
        output.writeln("THE ENTERPRISE HAS BEEN DESTROYED. THE FEDERATION WILL BE CONQUERED.");
        output.writeln(&format!(
            "THERE WERE {} KLINGON BATTLE CRUISERS LEFT.",
            klingons_left
        ));
    }

    pub fn show_relieved_of_command(output: &mut dyn OutputWriter) {
        output.writeln("THAT DOES IT, CAPTAIN!!  YOU ARE HEREBY RELIEVED OF COMMAND");
        output.writeln("AND SENTENCED TO 99 STARDATES AT HARD LABOR ON CYGNUS 12!!");
    }
}

pub struct MissionPresenter;

impl MissionPresenter {
    pub fn show_briefing(galaxy: &Galaxy, output: &mut dyn OutputWriter) {
        let bases = galaxy.total_starbases();
        let (verb, plural) = if bases == 1 { ("IS", "") } else { ("ARE", "S") };
        output.writeln("--- SUPER STAR TREK ---");
        output.writeln("YOUR ORDERS ARE AS FOLLOWS:");
        output.writeln(&format!(
            "     DESTROY THE {} KLINGON WARSHIPS WHICH HAVE INVADED",
            galaxy.total_klingons()
        ));
        output.writeln("   THE GALAXY BEFORE THEY CAN ATTACK FEDERATION HEADQUARTERS");
        output.writeln(&format!(
            "   ON STARDATE {:.1}   THIS GIVES YOU {:.1} DAYS.",
            galaxy.stardate_end(),
            galaxy.stardate_end() - galaxy.stardate_start()
        ));
        output.writeln(&format!(
            "   THERE {} {} STARBASE{} IN THE GALAXY FOR RESUPPLYING YOUR SHIP",
            verb, bases, plural
        ));
        output.writeln("");
    }

    pub fn show_commands(output: &mut dyn OutputWriter) {
        output.writeln("  NAV  (TO SET COURSE)");
        output.writeln("  SRS  (FOR SHORT RANGE SENSOR SCAN)");
        output.writeln("  LRS  (FOR LONG RANGE SENSOR SCAN)");
        output.writeln("  PHA  (TO FIRE PHASERS)");
        output.writeln("  TOR  (TO FIRE PHOTON TORPEDOES)");
        output.writeln("  SHE  (TO RAISE OR LOWER SHIELDS)");
        output.writeln("  DAM  (FOR DAMAGE CONTROL REPORTS)");
        output.writeln("  COM  (TO CALL ON LIBRARY-COMPUTER)");
        output.writeln("  XXX  (TO RESIGN YOUR COMMAND)");
    }
}
