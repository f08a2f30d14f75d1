#![allow(dead_code)]

use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::SeedableRng;

use muncher::constants::{RAW_BOARD, TICK_PERIOD};
use muncher::direction::Direction;
use muncher::session::Session;

/// A walled arena with no enemies: a corridor along row 9 plus a short
/// column at cell 5, ten pellets total. Everything the actor can reach is
/// known exactly, so tick outcomes are fully deterministic.
pub const ARENA: [&str; 21] = [
    "XXXXXXXXXXXXXXXXXXX",
    "XXXXXXXXXXXXXXXXXXX",
    "XXXXXXXXXXXXXXXXXXX",
    "XXXXXXXXXXXXXXXXXXX",
    "XXXXXXXXXXXXXXXXXXX",
    "XXXXXXXXXXXXXXXXXXX",
    "XXXXXXXXXXXXXXXXXXX",
    "XXXXXXXXXXXXXXXXXXX",
    "XXXXX XXXXXXXXXXXXX",
    "XM        XXXXXXXXX",
    "XXXXX XXXXXXXXXXXXX",
    "XXXXXXXXXXXXXXXXXXX",
    "XXXXXXXXXXXXXXXXXXX",
    "XXXXXXXXXXXXXXXXXXX",
    "XXXXXXXXXXXXXXXXXXX",
    "XXXXXXXXXXXXXXXXXXX",
    "XXXXXXXXXXXXXXXXXXX",
    "XXXXXXXXXXXXXXXXXXX",
    "XXXXXXXXXXXXXXXXXXX",
    "XXXXXXXXXXXXXXXXXXX",
    "XXXXXXXXXXXXXXXXXXX",
];

pub const ARENA_PELLETS: usize = 10;

pub fn seeded_rng() -> SmallRng {
    SmallRng::seed_from_u64(42)
}

pub fn reference_session() -> (Session, SmallRng) {
    let mut rng = seeded_rng();
    let session = Session::new(&RAW_BOARD, &mut rng).unwrap();
    (session, rng)
}

pub fn arena_session() -> (Session, SmallRng) {
    let mut rng = seeded_rng();
    let session = Session::new(&ARENA, &mut rng).unwrap();
    (session, rng)
}

/// The reference board with one row swapped out, for negative parse tests.
pub fn board_with_row(index: usize, row: &'static str) -> [&'static str; 21] {
    let mut board = RAW_BOARD;
    board[index] = row;
    board
}

/// A manually advanced tick clock for injecting timestamps.
pub struct Clock {
    now: Instant,
}

impl Clock {
    pub fn new() -> Clock {
        Clock { now: Instant::now() }
    }

    pub fn now(&self) -> Instant {
        self.now
    }

    /// Advances by one tick period and returns the new timestamp.
    pub fn next_tick(&mut self) -> Instant {
        self.advance(TICK_PERIOD)
    }

    pub fn advance(&mut self, by: Duration) -> Instant {
        self.now += by;
        self.now
    }
}

/// Requests a direction and then runs `ticks` simulation steps on the tick
/// cadence. The intent is consumed by the first step, as by a real input
/// event landing between ticks.
pub fn drive(session: &mut Session, rng: &mut SmallRng, clock: &mut Clock, direction: Direction, ticks: u32) {
    session.set_direction(direction);
    for _ in 0..ticks {
        session.tick(clock.next_tick(), rng);
    }
}
