//! Centralized error types for the game.
//!
//! This module defines all error types used throughout the crate,
//! providing a consistent error handling approach.

/// Main error type for the game.
///
/// This is the primary error type that should be used in public APIs.
/// It can represent any error that can occur while building or running
/// a session.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Map format error: {0}")]
    MapFormat(#[from] MapFormatError),

    #[error("Degenerate map: {0}")]
    DegenerateMap(#[from] DegenerateMapError),
}

/// Error type for board parsing operations.
#[derive(thiserror::Error, Debug)]
pub enum MapFormatError {
    #[error("Expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },

    #[error("Row {row} is {found} columns wide, expected {expected}")]
    RowLength { row: usize, expected: usize, found: usize },

    #[error("Unknown character in board: {0:?}")]
    UnknownCharacter(char),

    #[error("Board has no actor spawn")]
    MissingActorSpawn,
}

/// The board has no cell that can host the bonus item.
///
/// Placement samples from the cells whose original character was a pellet
/// or power pellet; a board without any such cell could never place one.
#[derive(thiserror::Error, Debug)]
#[error("no pellet or power pellet cell available for bonus item placement")]
pub struct DegenerateMapError;

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
