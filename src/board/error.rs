//! Error types for board setup and search configuration.

use std::fmt;

/// Error type for move and position-string failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Column index outside the board
    InvalidColumn { column: usize },
    /// Column has no empty cell left
    ColumnFull { column: usize },
    /// A side already has four in a row
    GameOver,
    /// Character that is not a 1-based column digit
    InvalidCharacter { char: char },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidColumn { column } => {
                write!(f, "Column {column} is outside the board")
            }
            MoveParseError::ColumnFull { column } => {
                write!(f, "Column {column} is full")
            }
            MoveParseError::GameOver => write!(f, "Game is already decided"),
            MoveParseError::InvalidCharacter { char } => {
                write!(f, "Invalid column character '{char}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for rejected `SearchConfig` values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A pruning margin below zero
    NegativeMargin { name: &'static str, value: i32 },
    /// `max_moves_to_search` must be at least one
    ZeroMoveCap,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NegativeMargin { name, value } => {
                write!(f, "Margin {name} must be non-negative, found {value}")
            }
            ConfigError::ZeroMoveCap => {
                write!(f, "max_moves_to_search must be at least 1")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
