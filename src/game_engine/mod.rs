//! Game state machine
//!
//! `GameEngine` owns one game: the galaxy, the narrative log and any prompt
//! waiting on the player. Every command runs to completion before the next
//! is accepted, and the engine moves `Init -> Command -> Ended` as it goes.

mod snapshot;

pub use snapshot::{DamageReportItem, MissionStats, SectorSnapshot};

use std::sync::mpsc::Receiver;

use serde::Serialize;
use tracing::trace;

use crate::config::Ruleset;
use crate::io::{EventLog, LogLine, OutputWriter, SubscriberId};
use crate::models::galaxy::Galaxy;
use crate::models::outcome::Outcome;
use crate::models::position::SectorPosition;
use crate::random::{self, RandomSource};
use crate::services::dispatcher::{dispatch, Prompt};
use crate::services::{combat, computer, damage, mission, navigation};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum GameState {
    Init,
    Command,
    Ended(Outcome),
}

/// Core game engine: command entry points, log access and snapshots.
pub struct GameEngine {
    galaxy: Galaxy,
    log: EventLog,
    prompt: Option<Prompt>,
    state: GameState,
}

impl GameEngine {
    /// Start a new game from `seed`. The briefing and the first quadrant
    /// report are already in the log when this returns.
    pub fn new(seed: u64, ruleset: Ruleset) -> Self {
        Self::with_random(random::seeded(seed), ruleset)
    }

    /// Start a new game drawing every roll from `random`.
    pub fn with_random(random: Box<dyn RandomSource>, ruleset: Ruleset) -> Self {
        let mut engine = GameEngine {
            galaxy: Galaxy::with_random(random, ruleset),
            log: EventLog::new(),
            prompt: None,
            state: GameState::Init,
        };
        engine.start();
        engine
    }

    /// Throw the current game away and start another with the same rules.
    /// Log subscribers stay attached.
    pub fn init(&mut self, seed: u64) {
        self.init_with_random(random::seeded(seed));
    }

    /// Like [`GameEngine::init`], drawing the new game from `random`.
    pub fn init_with_random(&mut self, random: Box<dyn RandomSource>) {
        let ruleset = self.galaxy.ruleset().clone();
        self.galaxy = Galaxy::with_random(random, ruleset);
        self.log.clear();
        self.prompt = None;
        self.state = GameState::Init;
        self.start();
    }

    /// Start another game from the source the current one draws on.
    pub fn restart(&mut self) {
        let random = self.galaxy.take_random();
        self.init_with_random(random);
    }

    fn start(&mut self) {
        mission::show_briefing(&self.galaxy, &mut self.log);
        navigation::announce_quadrant(&mut self.galaxy, &mut self.log, false);
        self.sync_state();
    }

    fn sync_state(&mut self) {
        self.state = match self.galaxy.outcome() {
            Some(outcome) => GameState::Ended(outcome),
            None => GameState::Command,
        };
    }

    pub fn galaxy(&self) -> &Galaxy {
        &self.galaxy
    }

    /// Direct access for harnesses that stage scenarios.
    pub fn galaxy_mut(&mut self) -> &mut Galaxy {
        &mut self.galaxy
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.galaxy.outcome()
    }

    pub fn is_ended(&self) -> bool {
        matches!(self.state, GameState::Ended(_))
    }

    /// The prompt the next `process_input` line will answer, if any.
    pub fn prompt(&self) -> Option<Prompt> {
        self.prompt
    }

    // ========== Command entry points ==========

    /// Feed one line of player input: a command token or the answer to the
    /// pending prompt.
    pub fn process_input(&mut self, input: &str) {
        trace!(input, "process_input");
        self.log.echo(input);
        let pending = self.prompt.take();
        self.prompt = dispatch(&mut self.galaxy, pending, input, &mut self.log);
        self.sync_state();
    }

    pub fn execute_nav(&mut self, course: f64, warp: f64, suppress: bool) {
        if self.is_ended() {
            return;
        }
        navigation::execute_nav(&mut self.galaxy, course, warp, suppress, &mut self.log);
        self.sync_state();
    }

    /// Returns the sectors targeted.
    pub fn execute_phasers(&mut self, amount: f64) -> Vec<SectorPosition> {
        if self.is_ended() {
            return Vec::new();
        }
        let targets = combat::fire_phasers(&mut self.galaxy, amount, &mut self.log);
        self.sync_state();
        targets
    }

    /// Returns the torpedo's track, or `None` when the launch was refused.
    pub fn execute_torpedo(&mut self, course: f64) -> Option<Vec<SectorPosition>> {
        if self.is_ended() {
            return None;
        }
        let path = combat::fire_torpedo(&mut self.galaxy, course, &mut self.log);
        self.sync_state();
        path
    }

    pub fn execute_shields(&mut self, amount: f64) {
        if self.is_ended() {
            return;
        }
        combat::set_shields(&mut self.galaxy, amount, &mut self.log);
    }

    /// Run a library computer function. Choosing the calculator leaves its
    /// first coordinate prompt pending, exactly as the `COM` command does.
    pub fn execute_computer(&mut self, choice: &str) {
        if self.is_ended() {
            return;
        }
        if computer::execute_computer(&self.galaxy, choice, &mut self.log) {
            let prompt = Prompt::AwaitingCoordA;
            self.log.writeln(&prompt.text(&self.galaxy));
            self.prompt = Some(prompt);
        }
    }

    pub fn execute_repair_order(&mut self) {
        if self.is_ended() {
            return;
        }
        damage::repair_order(&mut self.galaxy, &mut self.log);
        self.sync_state();
    }

    pub fn execute_rest(&mut self, days: f64) {
        if self.is_ended() {
            return;
        }
        mission::rest(&mut self.galaxy, days, &mut self.log);
        self.sync_state();
    }

    // ========== Log access ==========

    /// Drain the lines produced since the last call.
    pub fn take_output(&mut self) -> Vec<LogLine> {
        self.log.take_pending()
    }

    pub fn full_log(&self) -> &[LogLine] {
        self.log.full_log()
    }

    /// Receive every line appended from now on, echoes included.
    pub fn subscribe(&mut self) -> (SubscriberId, Receiver<LogLine>) {
        self.log.subscribe()
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.log.unsubscribe(id);
    }
}
