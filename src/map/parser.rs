//! Board parsing for converting raw character rows into structured map data.

use glam::UVec2;

use crate::constants::BOARD_CELL_SIZE;
use crate::entity::EnemyKind;
use crate::error::MapFormatError;

/// An enum representing the different types of tiles on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    /// An empty tile.
    Empty,
    /// A wall tile.
    Wall,
    /// A regular pellet.
    Pellet,
    /// A power pellet.
    PowerPellet,
}

/// Represents the parsed data from a raw board layout.
///
/// This is the retained form of the board: immutable after parsing, and the
/// source from which consumable state (the pellet set, the entities) is
/// rebuilt on reload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedBoard {
    /// The tile layout, indexed by `[row][column]`.
    pub tiles: [[TileKind; BOARD_CELL_SIZE.x as usize]; BOARD_CELL_SIZE.y as usize],
    /// The actor's spawn cell.
    pub actor_spawn: UVec2,
    /// Enemy spawn cells with their variants, in board scan order.
    pub enemy_spawns: Vec<(EnemyKind, UVec2)>,
    /// Cells whose original character was a pellet of either kind, in board
    /// scan order. The bonus item may only ever be placed on one of these.
    pub bonus_cells: Vec<UVec2>,
}

/// Parser for converting raw board rows into structured map data.
pub struct BoardParser;

impl BoardParser {
    /// Parses a single character into a tile kind.
    ///
    /// Spawn letters parse as empty tiles; their positions are recorded
    /// separately by [`BoardParser::parse_board`].
    pub fn parse_character(c: char) -> Result<TileKind, MapFormatError> {
        match c {
            'X' => Ok(TileKind::Wall),
            ' ' => Ok(TileKind::Pellet),
            'O' => Ok(TileKind::PowerPellet),
            'M' => Ok(TileKind::Empty),
            c if EnemyKind::from_letter(c).is_some() => Ok(TileKind::Empty),
            _ => Err(MapFormatError::UnknownCharacter(c)),
        }
    }

    /// Parses raw board rows into structured map data.
    ///
    /// Parsing the same rows twice yields equal results; there is no hidden
    /// state.
    ///
    /// # Errors
    ///
    /// Returns a [`MapFormatError`] if the row count or any row length
    /// differs from the declared board size, if a character is outside the
    /// vocabulary, or if no actor spawn is present.
    pub fn parse_board<S: AsRef<str>>(rows: &[S]) -> Result<ParsedBoard, MapFormatError> {
        let expected_rows = BOARD_CELL_SIZE.y as usize;
        let expected_cols = BOARD_CELL_SIZE.x as usize;

        if rows.len() != expected_rows {
            return Err(MapFormatError::RowCount {
                expected: expected_rows,
                found: rows.len(),
            });
        }

        let mut tiles = [[TileKind::Empty; BOARD_CELL_SIZE.x as usize]; BOARD_CELL_SIZE.y as usize];
        let mut actor_spawn: Option<UVec2> = None;
        let mut enemy_spawns = Vec::new();
        let mut bonus_cells = Vec::new();

        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            if found != expected_cols {
                return Err(MapFormatError::RowLength {
                    row: y,
                    expected: expected_cols,
                    found,
                });
            }

            for (x, character) in row.chars().enumerate() {
                let tile = Self::parse_character(character)?;
                let cell = UVec2::new(x as u32, y as u32);

                if matches!(tile, TileKind::Pellet | TileKind::PowerPellet) {
                    bonus_cells.push(cell);
                }

                if character == 'M' {
                    // A duplicate spawn letter overwrites; the last one wins
                    actor_spawn = Some(cell);
                } else if let Some(kind) = EnemyKind::from_letter(character) {
                    enemy_spawns.push((kind, cell));
                }

                tiles[y][x] = tile;
            }
        }

        let actor_spawn = actor_spawn.ok_or(MapFormatError::MissingActorSpawn)?;

        Ok(ParsedBoard {
            tiles,
            actor_spawn,
            enemy_spawns,
            bonus_cells,
        })
    }
}
