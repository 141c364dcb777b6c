use super_startrek::game_engine::GameEngine;
use super_startrek::io::{EventLog, LogLine};
use super_startrek::models::constants::Device;
use super_startrek::models::galaxy::StarbaseAttack;
use super_startrek::models::klingon::Klingon;
use super_startrek::models::position::{QuadrantPosition, SectorPosition};
use super_startrek::models::quadrant::QuadrantData;
use super_startrek::models::sector_map::SectorMap;
use super_startrek::random::SequenceRandom;
use super_startrek::services::damage::repair_system;
use super_startrek::{DefeatReason, GameState, Outcome, Ruleset};

/// Helper: an engine whose galaxy holds nothing but the ship at sector (3,3)
/// of quadrant (0,0) and one Klingon parked in quadrant (7,0). Every roll
/// returns 0.5 and the opening narrative has been drained.
fn staged_engine(ruleset: Ruleset) -> GameEngine {
    let mut engine = GameEngine::new(11, ruleset);
    engine.take_output();
    let galaxy = engine.galaxy_mut();
    for x in 0..8 {
        for y in 0..8 {
            galaxy.set_quadrant_data(QuadrantPosition::new(x, y), QuadrantData::default());
        }
    }
    galaxy.set_quadrant_data(QuadrantPosition::new(7, 0), QuadrantData::new(1, 0, 0));
    galaxy.place_enterprise(QuadrantPosition::new(0, 0), SectorPosition::new(3, 3));
    *galaxy.sector_map_mut() = SectorMap::new();
    galaxy.enterprise_mut().undock();
    galaxy.set_random(Box::new(SequenceRandom::new(vec![0.5])));
    engine
}

fn texts(lines: &[LogLine]) -> Vec<String> {
    lines.iter().map(|l| l.text.clone()).collect()
}

fn has_line(lines: &[String], needle: &str) -> bool {
    lines.iter().any(|l| l.contains(needle))
}

// ========== Game lifecycle tests ==========

#[test]
fn game_engine_initialization() {
    let engine = GameEngine::new(42, Ruleset::default());
    assert_eq!(engine.state(), GameState::Command);

    let galaxy = engine.galaxy();
    assert!(galaxy.total_klingons() > 0);
    assert!(galaxy.total_starbases() > 0);
    assert_eq!(galaxy.enterprise().energy(), 3000.0);
    assert_eq!(galaxy.enterprise().torpedoes(), 10);
}

#[test]
fn deterministic_gameplay_same_seed() {
    let mut engine1 = GameEngine::new(100, Ruleset::default());
    let mut engine2 = GameEngine::new(100, Ruleset::default());
    for input in ["SRS", "NAV", "2", "1.5", "LRS", "SHE", "400", "NAV", "6.5", "0.75"] {
        engine1.process_input(input);
        engine2.process_input(input);
    }

    assert_eq!(texts(engine1.full_log()), texts(engine2.full_log()));
    assert_eq!(engine1.mission_stats(), engine2.mission_stats());
    assert_eq!(engine1.sector_data(), engine2.sector_data());
}

#[test]
fn different_seeds_produce_different_galaxies() {
    let engine1 = GameEngine::new(1, Ruleset::default());
    let engine2 = GameEngine::new(2, Ruleset::default());
    let grid = |engine: &GameEngine| -> Vec<i32> {
        (0..8)
            .flat_map(|x| (0..8).map(move |y| QuadrantPosition::new(x, y)))
            .map(|q| engine.galaxy().quadrant_data(q).encoded())
            .collect()
    };
    assert_ne!(grid(&engine1), grid(&engine2));
}

#[test]
fn ended_game_only_reminds() {
    let mut engine = staged_engine(Ruleset::default());
    engine.process_input("XXX");
    assert_eq!(engine.state(), GameState::Ended(Outcome::Resigned));
    engine.take_output();

    engine.process_input("NAV");
    let lines = texts(&engine.take_output());
    assert_eq!(lines.len(), 1);
    assert!(engine.prompt().is_none());
}

// ========== Navigation scenarios ==========

/// Four sector steps east from (3,3) land on (7,3). Warp 0.5 is used on
/// purpose: warp 1 is eight steps and leaves the quadrant (see the warp 1
/// decision in DESIGN.md and `full_warp_east_enters_next_quadrant`).
#[test]
fn east_within_quadrant_has_no_collision() {
    let mut engine = staged_engine(Ruleset::default());
    engine.execute_nav(1.0, 0.5, false);

    let lines = texts(&engine.take_output());
    assert!(!has_line(&lines, "BAD NAVIGATION"));
    let snapshot = engine.sector_data();
    assert_eq!(snapshot.quadrant, QuadrantPosition::new(0, 0));
    assert_eq!(snapshot.ship, SectorPosition::new(7, 3));
}

#[test]
fn full_warp_east_enters_next_quadrant() {
    let mut engine = staged_engine(Ruleset::default());
    engine.execute_nav(1.0, 1.0, false);

    let snapshot = engine.sector_data();
    assert_eq!(snapshot.quadrant, QuadrantPosition::new(1, 0));
    assert_eq!(snapshot.ship, SectorPosition::new(3, 3));
    assert!(has_line(&texts(&engine.take_output()), "NOW ENTERING ANTARES II QUADRANT . . ."));
}

#[test]
fn course_nine_wraps_to_one() {
    let mut a = staged_engine(Ruleset::default());
    let mut b = staged_engine(Ruleset::default());
    a.execute_nav(1.0, 0.375, true);
    b.execute_nav(9.0, 0.375, true);
    assert_eq!(a.sector_data(), b.sector_data());
    assert_eq!(a.mission_stats(), b.mission_stats());
}

#[test]
fn damaged_engines_refuse_full_warp() {
    let mut engine = staged_engine(Ruleset::default());
    engine
        .galaxy_mut()
        .enterprise_mut()
        .damage_device(Device::WarpEngines, 3.0);
    engine.execute_nav(1.0, 1.0, false);

    let lines = texts(&engine.take_output());
    assert_eq!(lines, vec!["WARP ENGINES ARE DAMAGED. MAXIMUM SPEED = WARP 0.2"]);
    assert_eq!(engine.galaxy().enterprise().energy(), 3000.0);
}

#[test]
fn low_energy_blocks_navigation() {
    let mut engine = staged_engine(Ruleset::default());
    engine.galaxy_mut().enterprise_mut().set_energy(17.0);
    let before = engine.sector_data();
    engine.execute_nav(1.0, 1.0, false);
    assert_eq!(engine.sector_data(), before);
    assert_eq!(engine.galaxy().enterprise().energy(), 17.0);
}

#[test]
fn suppressed_navigation_matches_visible() {
    let mut quiet = staged_engine(Ruleset::default());
    let mut loud = staged_engine(Ruleset::default());
    quiet.execute_nav(7.0, 1.0, true);
    loud.execute_nav(7.0, 1.0, false);

    assert_eq!(quiet.sector_data(), loud.sector_data());
    assert_eq!(quiet.mission_stats(), loud.mission_stats());
    assert!(quiet.take_output().len() < loud.take_output().len());
}

#[test]
fn prompt_and_direct_calls_agree() {
    let mut prompted = staged_engine(Ruleset::default());
    let mut direct = staged_engine(Ruleset::default());
    for input in ["NAV", "1", "0.5"] {
        prompted.process_input(input);
    }
    direct.execute_nav(1.0, 0.5, false);

    assert_eq!(prompted.sector_data(), direct.sector_data());
    assert_eq!(prompted.mission_stats(), direct.mission_stats());
    let prompted_lines = texts(&prompted.take_output());
    let direct_lines = texts(&direct.take_output());
    assert!(prompted_lines.ends_with(&direct_lines));
}

// ========== Combat scenarios ==========

#[test]
fn overdrawn_phasers_change_nothing() {
    let mut engine = staged_engine(Ruleset::default());
    engine
        .galaxy_mut()
        .sector_map_mut()
        .klingons
        .push(Klingon::new(SectorPosition::new(6, 6), 180.0));
    engine.galaxy_mut().enterprise_mut().set_shields(250.0);

    let targets = engine.execute_phasers(4000.0);
    assert!(targets.is_empty());
    assert_eq!(engine.galaxy().enterprise().energy(), 3000.0);
    assert_eq!(engine.galaxy().enterprise().shields(), 250.0);
    assert_eq!(engine.sector_data().klingons[0].energy, 180.0);
}

#[test]
fn destroying_last_klingon_wins() {
    let mut engine = staged_engine(Ruleset::default());
    let galaxy = engine.galaxy_mut();
    galaxy.set_quadrant_data(QuadrantPosition::new(7, 0), QuadrantData::default());
    galaxy.set_quadrant_data(QuadrantPosition::new(0, 0), QuadrantData::new(1, 0, 0));
    galaxy
        .sector_map_mut()
        .klingons
        .push(Klingon::new(SectorPosition::new(3, 5), 150.0));
    galaxy.advance_stardate(3.0);

    let targets = engine.execute_phasers(500.0);
    assert_eq!(targets, vec![SectorPosition::new(3, 5)]);
    assert!(matches!(engine.state(), GameState::Ended(Outcome::Victory { .. })));
    assert_eq!(engine.mission_stats().klingons_left, 0);
}

#[test]
fn torpedo_costs_same_on_hit_or_miss() {
    let mut engine = staged_engine(Ruleset::default());
    engine
        .galaxy_mut()
        .set_quadrant_data(QuadrantPosition::new(0, 0), QuadrantData::new(1, 0, 0));
    engine
        .galaxy_mut()
        .sector_map_mut()
        .klingons
        .push(Klingon::new(SectorPosition::new(6, 3), 150.0));
    engine.galaxy_mut().enterprise_mut().set_shields(1000.0);

    let miss = engine.execute_torpedo(5.0);
    assert!(miss.is_some());
    assert_eq!(engine.galaxy().enterprise().torpedoes(), 9);
    assert_eq!(engine.galaxy().enterprise().energy(), 2998.0);

    let hit = engine.execute_torpedo(1.0);
    assert_eq!(
        hit,
        Some(vec![
            SectorPosition::new(4, 3),
            SectorPosition::new(5, 3),
            SectorPosition::new(6, 3),
        ])
    );
    assert_eq!(engine.galaxy().enterprise().torpedoes(), 8);
    assert_eq!(engine.galaxy().enterprise().energy(), 2996.0);
}

#[test]
fn torpedoing_a_starbase_ends_the_game() {
    let mut engine = staged_engine(Ruleset::default());
    engine
        .galaxy_mut()
        .set_quadrant_data(QuadrantPosition::new(0, 0), QuadrantData::new(0, 1, 0));
    engine
        .galaxy_mut()
        .sector_map_mut()
        .starbases
        .push(SectorPosition::new(3, 6));

    engine.execute_torpedo(7.0);
    assert_eq!(
        engine.state(),
        GameState::Ended(Outcome::Defeat(DefeatReason::RelievedOfCommand))
    );
    assert!(engine.galaxy().total_klingons() > 0);
    let lines = texts(&engine.take_output());
    assert!(has_line(&lines, "*** STARBASE DESTROYED ***"));
    assert!(has_line(&lines, "RELIEVED OF COMMAND"));
}

// ========== Mission clock scenarios ==========

#[test]
fn expired_siege_of_last_starbase_ends_game() {
    let mut engine = staged_engine(Ruleset::default());
    let galaxy = engine.galaxy_mut();
    let besieged = QuadrantPosition::new(5, 5);
    galaxy.set_quadrant_data(besieged, QuadrantData::new(0, 1, 2));
    let deadline = galaxy.stardate() + 0.5;
    galaxy.set_starbase_attack(Some(StarbaseAttack {
        quadrant: besieged,
        deadline,
    }));

    engine.execute_rest(1.0);
    let lines = texts(&engine.take_output());
    assert!(has_line(&lines, "TOO LATE! STARBASE DESTROYED."));
    assert!(has_line(&lines, "THE FEDERATION HAS LOST ALL STARBASES."));
    assert_eq!(
        engine.state(),
        GameState::Ended(Outcome::Defeat(DefeatReason::StarbasesLost))
    );
    assert!(engine.active_starbase_attack().is_none());
}

#[test]
fn arriving_in_time_saves_starbase() {
    let mut engine = staged_engine(Ruleset::default());
    let galaxy = engine.galaxy_mut();
    let besieged = QuadrantPosition::new(1, 0);
    galaxy.set_quadrant_data(besieged, QuadrantData::new(0, 1, 0));
    let deadline = galaxy.stardate() + 5.0;
    galaxy.set_starbase_attack(Some(StarbaseAttack {
        quadrant: besieged,
        deadline,
    }));

    engine.execute_nav(1.0, 1.0, true);
    let lines = texts(&engine.take_output());
    assert!(has_line(&lines, "STARDATES LEFT TO SAVE STARBASE."));
    assert!(has_line(&lines, "YOU ARRIVED IN TIME! STARBASE SAVED!"));
    assert!(engine.active_starbase_attack().is_none());
    assert_eq!(engine.mission_stats().starbases, 1);
}

#[test]
fn repair_converges_with_one_report() {
    let mut engine = staged_engine(Ruleset::default());
    let mut log = EventLog::new();
    let galaxy = engine.galaxy_mut();
    galaxy
        .enterprise_mut()
        .set_device_state(Device::PhotonTubes, -0.05);

    for _ in 0..5 {
        repair_system(galaxy, 0.1, &mut log);
    }
    assert_eq!(galaxy.enterprise().device_state(Device::PhotonTubes), 0.0);
    let completions = log
        .full_log()
        .iter()
        .filter(|l| l.text == "DAMAGE CONTROL REPORT: PHOTON TUBES REPAIR COMPLETED.")
        .count();
    assert_eq!(completions, 1);
}

#[test]
fn docked_repair_order_through_commands() {
    let mut engine = staged_engine(Ruleset::classic());
    let galaxy = engine.galaxy_mut();
    galaxy.set_quadrant_data(QuadrantPosition::new(0, 0), QuadrantData::new(0, 1, 0));
    galaxy.sector_map_mut().starbases.push(SectorPosition::new(4, 4));
    galaxy.enterprise_mut().damage_device(Device::Computer, 2.0);
    galaxy.enterprise_mut().damage_device(Device::ShortRangeSensors, 1.0);

    engine.process_input("SRS");
    assert!(engine.mission_stats().docked);
    engine.process_input("DAM");
    let lines = texts(&engine.take_output());
    assert!(has_line(&lines, "ESTIMATED TIME: 0.40 STARDATES"));
    assert!(has_line(&lines, "AUTHORIZE REPAIR ORDER (Y/N)?"));

    let before = engine.mission_stats().stardate;
    engine.process_input("Y");
    assert!(engine.damage_report().iter().all(|d| d.value == 0.0));
    assert!((engine.mission_stats().stardate - before - 0.55).abs() < 1e-9);
}

// ========== Sensor and computer scenarios ==========

#[test]
fn long_range_scan_records_neighbours() {
    let mut engine = staged_engine(Ruleset::default());
    engine
        .galaxy_mut()
        .set_quadrant_data(QuadrantPosition::new(1, 1), QuadrantData::new(2, 1, 7));
    engine.process_input("LRS");

    let lines = texts(&engine.take_output());
    assert!(has_line(&lines, ": *** : *** : *** :"));
    assert!(has_line(&lines, ": 217 "));
    assert_eq!(engine.galaxy_map()[1][1], 217);
    assert_eq!(engine.lrs_grid().map(|g| g[2][2]), Some(217));
}

#[test]
fn subscribers_follow_the_log() {
    let mut engine = staged_engine(Ruleset::default());
    let already = engine.full_log().len();
    let (id, rx) = engine.subscribe();
    engine.process_input("COM");
    engine.process_input("5");

    let received: Vec<LogLine> = rx.try_iter().collect();
    assert_eq!(received[0].text, "> COM");
    assert_eq!(received[0].color.as_deref(), Some("inherit"));
    assert!(received.iter().any(|l| l.text == "                        THE GALAXY"));
    assert_eq!(received.as_slice(), &engine.full_log()[already..]);

    engine.unsubscribe(id);
    engine.process_input("SRS");
    assert_eq!(rx.try_iter().count(), 0);
}

#[test]
fn repair_order_entry_point() {
    let mut engine = staged_engine(Ruleset::classic());
    let galaxy = engine.galaxy_mut();
    galaxy.set_quadrant_data(QuadrantPosition::new(0, 0), QuadrantData::new(0, 1, 0));
    galaxy.sector_map_mut().starbases.push(SectorPosition::new(2, 2));
    galaxy.enterprise_mut().damage_device(Device::LongRangeSensors, 4.0);

    engine.execute_repair_order();
    assert!(engine.galaxy().enterprise().any_damage(), "not docked yet");

    engine.process_input("SRS");
    engine.execute_repair_order();
    assert!(!engine.galaxy().enterprise().any_damage());
    assert!(has_line(&texts(&engine.take_output()), "TECHNICIANS HAVE COMPLETED REPAIRS."));
}
