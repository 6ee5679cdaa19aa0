//! Error types for board setup, move notation and move application.
//!
//! `validate` style queries never produce these; they are only returned by
//! operations that would otherwise change state.

use crate::core::Move;
use crate::games::reversi::Illegality;

/// Errors raised while checking a board configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board dimensions must be non-zero")]
    ZeroDimension,

    #[error("board {rows}x{cols} exceeds 65535 in one dimension")]
    TooLarge { rows: usize, cols: usize },

    #[error("mask has {actual} symbols, expected {expected}")]
    MaskLength { expected: usize, actual: usize },

    #[error("mask symbol {symbol:?} at index {index} is not one of 0, 1, 2")]
    MaskSymbol { index: usize, symbol: char },
}

/// Errors raised while parsing or encoding move notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveSyntaxError {
    #[error("empty move string")]
    Empty,

    #[error("move string has {0} characters, expected 3")]
    Length(usize),

    #[error("player digit {0:?} must be 0 or 1")]
    Player(char),

    #[error("coordinate {0:?} is not a base-36 digit")]
    Digit(char),

    #[error("coordinate ({row}, {col}) does not fit in one base-36 digit")]
    Unencodable { row: u16, col: u16 },
}

/// Top-level engine error.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("invalid board configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("illegal move {mv:?}: {reason}")]
    IllegalMove { mv: Move, reason: Illegality },

    #[error("bad move notation: {0}")]
    MoveSyntax(#[from] MoveSyntaxError),

    #[error("undo record for ply {found_ply} applied out of order (expected ply {expected_ply:?})")]
    UndoOutOfOrder {
        expected_ply: Option<u32>,
        found_ply: u32,
    },

    #[error("undo record for ply {ply} does not match the board")]
    UndoMismatch { ply: u32 },

    #[error("ply counter exhausted at {0}")]
    PlyOverflow(u32),

    #[error("no steps left to rewind")]
    EmptyLedger,

    #[error("ledger serialization failed: {0}")]
    Ledger(#[from] bincode::Error),
}
