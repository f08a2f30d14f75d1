//! Random enemy wandering with a choke-row override.

use rand::Rng;
use strum::EnumCount;
use tracing::trace;

use crate::constants::{BOARD_PIXEL_SIZE, CHOKE_ROW, ENTITY_SIZE, TILE_SIZE};
use crate::direction::Direction;
use crate::entity::Entity;
use crate::map::Wall;
use crate::movement;

/// Advances one enemy for one tick.
///
/// An enemy crossing the choke row horizontally is forced upward that tick,
/// regardless of wall state; this funnels enemies out of the holding pen and
/// is deliberately map-specific. Otherwise the enemy steps along its heading
/// and, on wall contact or on reaching the horizontal board edge, the step
/// is undone and a uniformly random replacement direction is requested. A
/// replacement that the walls or the board edge reject is undone the same
/// way, leaving the enemy motionless until a later tick resolves it.
pub fn wander(enemy: &mut Entity, speed: i32, walls: &[Wall], rng: &mut impl Rng) {
    if enemy.pos.y == (CHOKE_ROW * TILE_SIZE) as i32 && enemy.direction.is_horizontal() {
        enemy.direction = Direction::Up;
        return;
    }

    let velocity = enemy.direction.velocity(speed);
    enemy.pos += velocity;

    if movement::hits_wall(enemy, walls) || touches_horizontal_edge(enemy) {
        enemy.pos -= velocity;
        redirect(enemy, speed, walls, rng);
    }
}

/// Picks a random starting direction for an enemy, as at session start.
pub fn randomize_direction(enemy: &mut Entity, speed: i32, walls: &[Wall], rng: &mut impl Rng) {
    redirect(enemy, speed, walls, rng);
}

/// Requests a uniformly random replacement direction.
///
/// The turn goes through the movement resolver, so a wall rejection reverts
/// it whole; an accepted turn that carries the enemy past the board edge is
/// reverted here the same way.
fn redirect(enemy: &mut Entity, speed: i32, walls: &[Wall], rng: &mut impl Rng) {
    let previous = enemy.direction;
    let requested = Direction::DIRECTIONS[rng.random_range(0..Direction::COUNT)];

    let mut accepted = movement::request_direction(enemy, requested, speed, walls);
    if accepted && outside_horizontal_bounds(enemy) {
        enemy.pos -= requested.velocity(speed);
        enemy.direction = previous;
        accepted = false;
    }

    trace!(direction = requested.as_ref(), accepted, "Enemy redirected");
}

/// Whether the enemy's horizontal extent touches or exceeds the board edge.
fn touches_horizontal_edge(enemy: &Entity) -> bool {
    enemy.pos.x <= 0 || enemy.pos.x + ENTITY_SIZE.x as i32 >= BOARD_PIXEL_SIZE.x as i32
}

/// Whether the enemy's horizontal extent sticks out past the board edge.
/// Touching the edge exactly is still on the board.
fn outside_horizontal_bounds(enemy: &Entity) -> bool {
    enemy.pos.x < 0 || enemy.pos.x + ENTITY_SIZE.x as i32 > BOARD_PIXEL_SIZE.x as i32
}
