//! Real-time shell around a [`Session`].
//!
//! Owns the RNG and the two timer deadlines and paces the simulation on a
//! wall clock; every rule lives in the library. The demo scripts a short
//! input sequence so an unattended run still exercises movement.
#![cfg_attr(coverage_nightly, coverage(off))]

use std::time::Instant;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::constants::{BONUS_PERIOD, RAW_BOARD, TICK_PERIOD};
use crate::direction::Direction;
use crate::error::GameResult;
use crate::session::{Session, Stage};

/// Ticks the demo runs before giving up (two minutes of game time).
const TICK_BUDGET: u32 = 2400;

/// Ticks between frame summaries in the log (one per second).
const LOG_INTERVAL: u32 = 20;

/// Scripted direction intents, applied when the demo reaches their tick.
const INPUT_SCRIPT: [(u32, Direction); 6] = [
    (0, Direction::Left),
    (30, Direction::Up),
    (60, Direction::Right),
    (120, Direction::Down),
    (180, Direction::Right),
    (240, Direction::Up),
];

/// The demo driver: a session, its RNG, and the two timer deadlines.
pub struct App {
    pub session: Session,
    rng: SmallRng,
    ticks: u32,
    next_tick: Instant,
    next_bonus: Instant,
}

impl App {
    /// Builds a session on the reference board from the given seed.
    pub fn new(seed: u64) -> GameResult<App> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let session = Session::new(&RAW_BOARD, &mut rng)?;

        let now = Instant::now();
        Ok(App {
            session,
            rng,
            ticks: 0,
            next_tick: now + TICK_PERIOD,
            next_bonus: now + BONUS_PERIOD,
        })
    }

    /// Runs the loop until game over or the tick budget expires.
    pub fn run(&mut self) {
        info!(budget = TICK_BUDGET, period = ?TICK_PERIOD, "Starting game loop");
        while self.step() {}
        info!(
            score = self.session.score,
            lives = self.session.lives,
            ticks = self.ticks,
            "Game loop finished"
        );
    }

    /// Executes a single tick with consistent pacing.
    ///
    /// Sleeps out the remainder of the tick period, fires the bonus respawn
    /// timer when its deadline has passed, applies any scripted input, and
    /// advances the session. Returns `true` if the loop should continue.
    fn step(&mut self) -> bool {
        let now = Instant::now();
        if now < self.next_tick {
            spin_sleep::sleep(self.next_tick - now);
        }
        let now = Instant::now();
        self.next_tick += TICK_PERIOD;

        // Both timers post into this single context; the respawn request
        // runs to completion between ticks, never inside one.
        if now >= self.next_bonus {
            self.session.spawn_bonus(&mut self.rng);
            self.next_bonus += BONUS_PERIOD;
        }

        if let Some(&(_, direction)) = INPUT_SCRIPT.iter().find(|&&(tick, _)| tick == self.ticks) {
            self.session.set_direction(direction);
        }

        self.session.tick(now, &mut self.rng);
        self.ticks += 1;

        if self.ticks % LOG_INTERVAL == 0 {
            let frame = self.session.frame();
            debug!(
                tick = self.ticks,
                score = self.session.score,
                lives = self.session.lives,
                pellets = frame.pellets.len(),
                bonus = frame.bonus_indicator,
                "Frame"
            );
        }

        self.session.stage == Stage::Playing && self.ticks < TICK_BUDGET
    }
}
