//! The session state machine.
//!
//! [`Session`] owns the board, the entities, and every counter the rules
//! touch, and advances them one fixed tick at a time. Time and randomness
//! are injected by the caller, so a session is fully deterministic given a
//! seed and a schedule.

use std::time::Instant;

use glam::{IVec2, UVec2};
use rand::Rng;
use smallvec::SmallVec;
use tracing::{debug, info, warn};

use crate::collision::{Collidable, Rect};
use crate::constants::{
    BONUS_POINTS, BONUS_SIZE, BOOST_DURATION, BOOST_SPEED, NORMAL_SPEED, PELLET_POINTS, STARTING_LIVES, TILE_SIZE,
};
use crate::direction::Direction;
use crate::entity::{Entity, EntityKind};
use crate::error::{DegenerateMapError, GameResult};
use crate::frame::{Frame, SpriteCommand, SpriteId, StatusLine};
use crate::map::Map;
use crate::movement;
use crate::wander;

/// The two stages of a session. `GameOver` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    #[default]
    Playing,
    GameOver,
}

/// The bonus item, while one sits on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BonusItem {
    pub pos: IVec2,
}

impl Collidable for BonusItem {
    fn bounds(&self) -> Rect {
        Rect::new(self.pos, UVec2::splat(BONUS_SIZE))
    }
}

/// A full game session.
///
/// All rule-driven mutation happens through [`Session::tick`],
/// [`Session::set_direction`], and [`Session::spawn_bonus`].
#[derive(Debug, Clone)]
pub struct Session {
    pub map: Map,
    pub actor: Entity,
    pub enemies: SmallVec<[Entity; 4]>,
    pub bonus: Option<BonusItem>,
    pub score: u32,
    pub lives: u32,
    pub stage: Stage,
    /// While `Some`, the boost tier applies; cleared at the end of the tick
    /// that reaches the expiry timestamp.
    boost_expires_at: Option<Instant>,
    /// Latest direction intent, consumed at the start of the next tick.
    pending: Option<Direction>,
}

impl Session {
    /// Builds a session from board rows: parses the map, places every
    /// entity, and gives each enemy a random starting direction.
    pub fn new<S: AsRef<str>>(rows: &[S], rng: &mut impl Rng) -> GameResult<Session> {
        let map = Map::parse(rows)?;
        if map.bonus_cells().is_empty() {
            return Err(DegenerateMapError.into());
        }

        let mut session = Session {
            actor: Entity::new(EntityKind::Actor, map.actor_spawn()),
            enemies: SmallVec::new(),
            map,
            bonus: None,
            score: 0,
            lives: STARTING_LIVES,
            stage: Stage::Playing,
            boost_expires_at: None,
            pending: None,
        };
        session.place_entities(rng);

        info!(
            lives = session.lives,
            pellets = session.map.pellets().len(),
            enemies = session.enemies.len(),
            "Session started"
        );
        Ok(session)
    }

    /// Stores a direction intent for the actor. The latest request wins;
    /// it is consumed at the start of the next tick.
    pub fn set_direction(&mut self, direction: Direction) {
        self.pending = Some(direction);
    }

    /// The current speed tier, in pixels per tick.
    pub fn speed(&self) -> i32 {
        if self.boost_expires_at.is_some() {
            BOOST_SPEED
        } else {
            NORMAL_SPEED
        }
    }

    /// Whether the speed boost is currently active.
    pub fn boost_active(&self) -> bool {
        self.boost_expires_at.is_some()
    }

    /// Advances the simulation one tick.
    ///
    /// `now` is the tick's timestamp; the boost window is measured against
    /// it. A tick received after game over does nothing.
    pub fn tick(&mut self, now: Instant, rng: &mut impl Rng) {
        if self.stage == Stage::GameOver {
            return;
        }

        let speed = self.speed();

        if let Some(direction) = self.pending.take() {
            movement::request_direction(&mut self.actor, direction, speed, self.map.walls());
        }
        movement::step(&mut self.actor, speed, self.map.walls());

        if self.resolve_enemy_contacts() {
            return;
        }

        for enemy in &mut self.enemies {
            wander::wander(enemy, speed, self.map.walls(), rng);
        }

        self.resolve_bonus(now, rng);
        self.resolve_pellets();

        if self.map.pellets().is_empty() {
            self.reload(rng);
        }

        if self.boost_expires_at.is_some_and(|expiry| now >= expiry) {
            self.boost_expires_at = None;
            debug!("Speed boost expired");
        }
    }

    /// Places a bonus item at a uniformly random bonus-eligible cell,
    /// replacing any item already on the board.
    ///
    /// Driven by the slow respawn timer; also called directly when a
    /// collected item is replaced within the same tick.
    pub fn spawn_bonus(&mut self, rng: &mut impl Rng) {
        // Construction rejects boards without eligible cells, but the map
        // is replaceable from outside; refuse rather than panic.
        let cells = self.map.bonus_cells();
        if cells.is_empty() {
            warn!("No bonus-eligible cells, item not placed");
            return;
        }
        let cell = cells[rng.random_range(0..cells.len())];

        let offset = ((TILE_SIZE - BONUS_SIZE) / 2) as i32;
        let pos = Map::cell_origin(cell) + IVec2::splat(offset);
        self.bonus = Some(BonusItem { pos });
        debug!(x = cell.x, y = cell.y, "Bonus item placed");
    }

    /// Produces the draw-command list for the current state.
    pub fn frame(&self) -> Frame {
        let mut sprites = Vec::with_capacity(self.map.walls().len() + self.enemies.len() + 2);

        sprites.extend(self.map.walls().iter().map(|wall| SpriteCommand {
            sprite: SpriteId::Wall,
            dest: wall.bounds(),
        }));
        sprites.extend(self.enemies.iter().map(|enemy| SpriteCommand {
            sprite: enemy.sprite(),
            dest: enemy.bounds(),
        }));
        sprites.push(SpriteCommand {
            sprite: self.actor.sprite(),
            dest: self.actor.bounds(),
        });
        if let Some(bonus) = self.bonus {
            sprites.push(SpriteCommand {
                sprite: SpriteId::BonusItem,
                dest: bonus.bounds(),
            });
        }

        Frame {
            sprites,
            pellets: self.map.pellets().iter().map(|pellet| pellet.bounds()).collect(),
            status: match self.stage {
                Stage::Playing => StatusLine::Playing {
                    score: self.score,
                    lives: self.lives,
                },
                Stage::GameOver => StatusLine::GameOver { score: self.score },
            },
            bonus_indicator: self.bonus.is_some(),
        }
    }

    /// Recreates the actor and the enemies from the spawn records and gives
    /// each enemy a random starting direction.
    fn place_entities(&mut self, rng: &mut impl Rng) {
        self.actor = Entity::new(EntityKind::Actor, self.map.actor_spawn());
        self.enemies = self
            .map
            .enemy_spawns()
            .map(|(kind, spawn)| Entity::new(EntityKind::Enemy(kind), spawn))
            .collect();

        let speed = self.speed();
        for enemy in &mut self.enemies {
            wander::randomize_direction(enemy, speed, self.map.walls(), rng);
        }
    }

    /// Scans for actor-enemy contact. Each overlapped enemy costs one life;
    /// on the last life the session ends mid-scan. Returns true if the
    /// session ended.
    fn resolve_enemy_contacts(&mut self) -> bool {
        for index in 0..self.enemies.len() {
            if !self.actor.collides_with(&self.enemies[index]) {
                continue;
            }

            self.lives -= 1;
            info!(lives = self.lives, "Enemy contact");

            if self.lives == 0 {
                self.stage = Stage::GameOver;
                info!(score = self.score, "Game over");
                return true;
            }

            self.reset_positions();
        }
        false
    }

    /// Puts the actor and every enemy back on spawn. Directions are kept.
    fn reset_positions(&mut self) {
        self.actor.reset();
        for enemy in &mut self.enemies {
            enemy.reset();
        }
    }

    fn resolve_bonus(&mut self, now: Instant, rng: &mut impl Rng) {
        let Some(bonus) = self.bonus else { return };
        if !self.actor.collides_with(&bonus) {
            return;
        }

        self.score += BONUS_POINTS;
        self.boost_expires_at = Some(now + BOOST_DURATION);
        debug!(score = self.score, "Bonus item collected, boost active");

        // The replacement appears within the same tick
        self.bonus = None;
        self.spawn_bonus(rng);
    }

    /// Every pellet overlapped this tick is credited and removed.
    fn resolve_pellets(&mut self) {
        let eaten = self.map.remove_overlapping(self.actor.bounds());
        if eaten > 0 {
            self.score += PELLET_POINTS * eaten as u32;
            debug!(
                eaten,
                score = self.score,
                remaining = self.map.pellets().len(),
                "Pellets consumed"
            );
        }
    }

    /// Rebuilds the pellet set and recreates every entity, exactly as at
    /// session start. Score, lives, and the boost window carry over.
    fn reload(&mut self, rng: &mut impl Rng) {
        self.map.reset_pellets();
        self.place_entities(rng);
        info!(pellets = self.map.pellets().len(), "Board cleared, reloaded");
    }
}
