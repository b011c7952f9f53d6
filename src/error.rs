//! Error types
//!
//! Every command failure is local to that command: the session state is left
//! exactly as it was and the error is reported back to the caller.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A rejected game command
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameError {
    /// Slot index outside `0..capacity`
    #[error("index {index} out of bounds, use index 0-{}", .capacity - 1)]
    IndexOutOfRange { index: i64, capacity: usize },

    /// Value is not a single decimal digit
    #[error("value {0} must be a digit 0-9")]
    InvalidDigit(i64),

    /// Every slot is occupied
    #[error("array is full, delete some elements first")]
    ArrayFull,

    /// Nothing to delete at this slot
    #[error("no element at index {0} to delete")]
    EmptySlot(usize),

    /// Search or target pattern is empty or malformed
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),

    /// Level was won or timed out, commands are locked until the next level
    #[error("game is not active")]
    GameNotActive,

    /// `next_level` before the current level has been won
    #[error("current level has not been cleared")]
    LevelNotCleared,

    /// Textual command could not be understood
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Index or digit argument that is not an integer
    #[error("'{0}' is not a number")]
    NotANumber(String),
}

/// Malformed settings or level table
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid level table: {0}")]
    InvalidLevels(String),
}
