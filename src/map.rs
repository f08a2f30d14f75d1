//! The game board: wall geometry, the pellet set, spawn records, and reload.

use glam::{IVec2, UVec2};
use tracing::debug;

use crate::collision::{Collidable, Rect};
use crate::constants::{PELLET_SIZE, POWER_PELLET_SIZE, TILE_SIZE};
use crate::entity::EnemyKind;
use crate::error::MapFormatError;
use crate::map::parser::{BoardParser, ParsedBoard, TileKind};

pub mod parser;

/// A wall tile occupying one full cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wall {
    pub cell: UVec2,
}

impl Collidable for Wall {
    fn bounds(&self) -> Rect {
        Rect::new(Map::cell_origin(self.cell), UVec2::splat(TILE_SIZE))
    }
}

/// The two collectible pellet kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PelletKind {
    Regular,
    Power,
}

impl PelletKind {
    /// The edge length of this pellet's box, in pixels.
    pub const fn size(self) -> u32 {
        match self {
            PelletKind::Regular => PELLET_SIZE,
            PelletKind::Power => POWER_PELLET_SIZE,
        }
    }
}

/// A pellet centered in its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pellet {
    pub kind: PelletKind,
    pub cell: UVec2,
}

impl Collidable for Pellet {
    fn bounds(&self) -> Rect {
        let size = self.kind.size();
        let offset = ((TILE_SIZE - size) / 2) as i32;
        Rect::new(Map::cell_origin(self.cell) + IVec2::splat(offset), UVec2::splat(size))
    }
}

/// The parsed board plus its consumable state.
///
/// Walls and spawn records never change after parsing; the pellet set
/// shrinks as pellets are eaten and is rebuilt from the retained parse
/// result on reload.
#[derive(Debug, Clone)]
pub struct Map {
    parsed: ParsedBoard,
    walls: Vec<Wall>,
    pellets: Vec<Pellet>,
}

impl Map {
    /// Parses board rows into a ready map.
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Map, MapFormatError> {
        let parsed = BoardParser::parse_board(rows)?;

        let walls: Vec<Wall> = parsed
            .tiles
            .iter()
            .enumerate()
            .flat_map(|(y, row)| {
                row.iter().enumerate().filter_map(move |(x, &tile)| match tile {
                    TileKind::Wall => Some(Wall {
                        cell: UVec2::new(x as u32, y as u32),
                    }),
                    _ => None,
                })
            })
            .collect();

        let pellets = Self::full_pellet_set(&parsed);

        debug!(
            walls = walls.len(),
            pellets = pellets.len(),
            enemies = parsed.enemy_spawns.len(),
            "Board parsed"
        );

        Ok(Map { parsed, walls, pellets })
    }

    /// Restores the pellet set to the full original layout.
    pub fn reset_pellets(&mut self) {
        self.pellets = Self::full_pellet_set(&self.parsed);
    }

    fn full_pellet_set(parsed: &ParsedBoard) -> Vec<Pellet> {
        parsed
            .tiles
            .iter()
            .enumerate()
            .flat_map(|(y, row)| {
                row.iter().enumerate().filter_map(move |(x, &tile)| {
                    let kind = match tile {
                        TileKind::Pellet => PelletKind::Regular,
                        TileKind::PowerPellet => PelletKind::Power,
                        _ => return None,
                    };
                    Some(Pellet {
                        kind,
                        cell: UVec2::new(x as u32, y as u32),
                    })
                })
            })
            .collect()
    }

    /// The static wall set.
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    /// The remaining pellets.
    pub fn pellets(&self) -> &[Pellet] {
        &self.pellets
    }

    /// Removes every pellet the given box overlaps. Returns how many were
    /// removed.
    pub fn remove_overlapping(&mut self, bounds: Rect) -> usize {
        let before = self.pellets.len();
        self.pellets.retain(|pellet| !bounds.overlaps(&pellet.bounds()));
        before - self.pellets.len()
    }

    /// The actor's spawn point, in pixels.
    pub fn actor_spawn(&self) -> IVec2 {
        Self::cell_origin(self.parsed.actor_spawn)
    }

    /// Enemy spawn points with their variants, in board scan order, in
    /// pixels.
    pub fn enemy_spawns(&self) -> impl Iterator<Item = (EnemyKind, IVec2)> + '_ {
        self.parsed
            .enemy_spawns
            .iter()
            .map(|&(kind, cell)| (kind, Self::cell_origin(cell)))
    }

    /// Cells eligible to host the bonus item.
    pub fn bonus_cells(&self) -> &[UVec2] {
        &self.parsed.bonus_cells
    }

    /// The pixel origin of a cell.
    pub fn cell_origin(cell: UVec2) -> IVec2 {
        (cell * TILE_SIZE).as_ivec2()
    }
}
