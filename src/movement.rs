//! Speculative movement with wall rollback.
//!
//! Every move is applied tentatively and undone on wall contact; entities
//! therefore never rest overlapping a wall. Turns and forward steps differ
//! only in what a rollback restores: a blocked turn also restores the
//! previous heading, a blocked step keeps it.

use tracing::trace;

use crate::collision::Collidable;
use crate::direction::Direction;
use crate::entity::Entity;
use crate::map::Wall;

/// Moves the entity one step along its current heading, rolling back the
/// position on wall contact. The heading is never changed. Returns true if
/// the step stood.
pub fn step(entity: &mut Entity, speed: i32, walls: &[Wall]) -> bool {
    let velocity = entity.direction.velocity(speed);
    entity.pos += velocity;

    if hits_wall(entity, walls) {
        entity.pos -= velocity;
        return false;
    }
    true
}

/// Attempts to turn the entity and advance one step in the new direction.
///
/// On wall contact both the position and the heading are reverted, so a
/// rejected turn leaves the entity exactly as it was. On success the
/// tentative advance stands. Returns true if the turn was accepted.
pub fn request_direction(entity: &mut Entity, requested: Direction, speed: i32, walls: &[Wall]) -> bool {
    let previous = entity.direction;
    entity.direction = requested;

    let velocity = requested.velocity(speed);
    entity.pos += velocity;

    if hits_wall(entity, walls) {
        entity.pos -= velocity;
        entity.direction = previous;
        trace!(
            requested = requested.as_ref(),
            kept = previous.as_ref(),
            "Turn rejected by wall"
        );
        return false;
    }
    true
}

/// Whether the entity's box currently overlaps any wall.
pub fn hits_wall(entity: &Entity, walls: &[Wall]) -> bool {
    let bounds = entity.bounds();
    walls.iter().any(|wall| bounds.overlaps(&wall.bounds()))
}
