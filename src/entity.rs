//! The moving pieces of a session: the actor and the enemies.

use glam::IVec2;
use strum_macros::AsRefStr;

use crate::collision::{Collidable, Rect};
use crate::constants::ENTITY_SIZE;
use crate::direction::Direction;
use crate::frame::SpriteId;

/// The enemy variants, keyed by their board spawn letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum EnemyKind {
    Blue,   // b
    Orange, // o
    Pink,   // p
    Red,    // r
}

impl EnemyKind {
    /// Maps a board spawn letter to its enemy variant.
    pub const fn from_letter(c: char) -> Option<EnemyKind> {
        match c {
            'b' => Some(EnemyKind::Blue),
            'o' => Some(EnemyKind::Orange),
            'p' => Some(EnemyKind::Pink),
            'r' => Some(EnemyKind::Red),
            _ => None,
        }
    }
}

/// What an entity is. The kind also fixes how it is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Actor,
    Enemy(EnemyKind),
}

/// A moving entity: the actor or one enemy.
///
/// Velocity is never stored; it is derived from the current direction and
/// the session's speed tier at the moment a step is taken, so the two can
/// never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entity {
    pub kind: EntityKind,
    /// Absolute position on the board, in pixels.
    pub pos: IVec2,
    /// Immutable reset target.
    spawn: IVec2,
    pub direction: Direction,
}

impl Entity {
    /// Creates an entity at its spawn point, facing up.
    pub fn new(kind: EntityKind, spawn: IVec2) -> Entity {
        Entity {
            kind,
            pos: spawn,
            spawn,
            direction: Direction::Up,
        }
    }

    /// Puts the entity back on its spawn point. The direction is kept.
    pub fn reset(&mut self) {
        self.pos = self.spawn;
    }

    /// The spawn point this entity resets to.
    pub fn spawn(&self) -> IVec2 {
        self.spawn
    }

    /// The sprite for this entity's current state. The actor's follows its
    /// facing direction; an enemy's is fixed by its variant.
    pub fn sprite(&self) -> SpriteId {
        match self.kind {
            EntityKind::Actor => match self.direction {
                Direction::Up => SpriteId::ActorUp,
                Direction::Down => SpriteId::ActorDown,
                Direction::Left => SpriteId::ActorLeft,
                Direction::Right => SpriteId::ActorRight,
            },
            EntityKind::Enemy(kind) => match kind {
                EnemyKind::Blue => SpriteId::EnemyBlue,
                EnemyKind::Orange => SpriteId::EnemyOrange,
                EnemyKind::Pink => SpriteId::EnemyPink,
                EnemyKind::Red => SpriteId::EnemyRed,
            },
        }
    }
}

impl Collidable for Entity {
    fn bounds(&self) -> Rect {
        Rect::new(self.pos, ENTITY_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entity_sits_on_spawn() {
        let spawn = IVec2::new(288, 480);
        let entity = Entity::new(EntityKind::Actor, spawn);
        assert_eq!(entity.pos, spawn);
        assert_eq!(entity.spawn(), spawn);
        assert_eq!(entity.direction, Direction::Up);
    }

    #[test]
    fn test_reset_restores_position_only() {
        let mut entity = Entity::new(EntityKind::Enemy(EnemyKind::Red), IVec2::new(64, 64));
        entity.pos = IVec2::new(128, 96);
        entity.direction = Direction::Left;

        entity.reset();

        assert_eq!(entity.pos, IVec2::new(64, 64));
        assert_eq!(entity.direction, Direction::Left);
    }

    #[test]
    fn test_actor_sprite_follows_direction() {
        let mut actor = Entity::new(EntityKind::Actor, IVec2::ZERO);
        assert_eq!(actor.sprite(), SpriteId::ActorUp);
        actor.direction = Direction::Left;
        assert_eq!(actor.sprite(), SpriteId::ActorLeft);
    }

    #[test]
    fn test_enemy_sprite_ignores_direction() {
        let mut enemy = Entity::new(EntityKind::Enemy(EnemyKind::Pink), IVec2::ZERO);
        assert_eq!(enemy.sprite(), SpriteId::EnemyPink);
        enemy.direction = Direction::Down;
        assert_eq!(enemy.sprite(), SpriteId::EnemyPink);
    }

    #[test]
    fn test_spawn_letters() {
        assert_eq!(EnemyKind::from_letter('b'), Some(EnemyKind::Blue));
        assert_eq!(EnemyKind::from_letter('o'), Some(EnemyKind::Orange));
        assert_eq!(EnemyKind::from_letter('p'), Some(EnemyKind::Pink));
        assert_eq!(EnemyKind::from_letter('r'), Some(EnemyKind::Red));
        assert_eq!(EnemyKind::from_letter('X'), None);
    }

    #[test]
    fn test_bounds_cover_one_tile() {
        let entity = Entity::new(EntityKind::Actor, IVec2::new(32, 64));
        let bounds = entity.bounds();
        assert_eq!(bounds.pos, IVec2::new(32, 64));
        assert_eq!(bounds.size, ENTITY_SIZE);
    }
}
