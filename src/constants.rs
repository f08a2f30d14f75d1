//! This module contains all the constants used in the game.

use std::time::Duration;

use glam::UVec2;

/// The period of one simulation tick.
pub const TICK_PERIOD: Duration = Duration::from_millis(50);
/// The period between bonus item respawn requests.
pub const BONUS_PERIOD: Duration = Duration::from_secs(60);
/// How long the speed boost lasts once a bonus item is collected.
pub const BOOST_DURATION: Duration = Duration::from_millis(5000);

/// The edge length of each board cell, in pixels.
pub const TILE_SIZE: u32 = 32;
/// The size of the game board, in cells.
pub const BOARD_CELL_SIZE: UVec2 = UVec2::new(19, 21);
/// The size of the game board, in pixels.
pub const BOARD_PIXEL_SIZE: UVec2 = UVec2::new(BOARD_CELL_SIZE.x * TILE_SIZE, BOARD_CELL_SIZE.y * TILE_SIZE);

/// The size of the actor and every enemy, in pixels.
pub const ENTITY_SIZE: UVec2 = UVec2::new(TILE_SIZE, TILE_SIZE);
/// The edge length of a regular pellet's box, in pixels.
pub const PELLET_SIZE: u32 = 4;
/// The edge length of a power pellet's box, in pixels.
pub const POWER_PELLET_SIZE: u32 = 8;
/// The edge length of the bonus item's box, in pixels.
pub const BONUS_SIZE: u32 = 4;

/// Pixels advanced per tick at the normal speed tier.
pub const NORMAL_SPEED: i32 = (TILE_SIZE / 4) as i32;
/// Pixels advanced per tick while the speed boost is active.
pub const BOOST_SPEED: i32 = (TILE_SIZE / 2) as i32;

/// Points awarded for eating a pellet of either kind.
pub const PELLET_POINTS: u32 = 10;
/// Points awarded for collecting the bonus item.
pub const BONUS_POINTS: u32 = 100;
/// Lives at session start.
pub const STARTING_LIVES: u32 = 3;

/// The board row where horizontally moving enemies are forced upward,
/// funneling them out of the holding pen.
pub const CHOKE_ROW: u32 = 9;

/// The raw layout of the game board, as rows of characters.
///
/// `X` is a wall, ` ` a pellet, `O` a power pellet, `M` the actor spawn,
/// and `b`/`o`/`p`/`r` one enemy spawn each.
pub const RAW_BOARD: [&str; BOARD_CELL_SIZE.y as usize] = [
    "XXXXXXXXXXXXXXXXXXX",
    "X        X        X",
    "X XX XXX X XXX XX X",
    "X                 X",
    "X XX X XXXXX X XX X",
    "X    X       X    X",
    "XXXX XXXX XXXX XXXX",
    "OOOX X       X XOOO",
    "XXXX X XXrXX X XXXX",
    "O       bpo       O",
    "XXXX X XXXXX X XXXX",
    "OOOX X       X XOOO",
    "XXXX X XXXXX X XXXX",
    "X        X        X",
    "X XX XXX X XXX XX X",
    "X  X     M     X  X",
    "XX X X XXXXX X X XX",
    "X    X   X   X    X",
    "X XXXXXX X XXXXXX X",
    "X                 X",
    "XXXXXXXXXXXXXXXXXXX",
];
