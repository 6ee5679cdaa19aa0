//! Core board types: players, moves, configuration and the grid.
//!
//! These are plain data. The capture rules that tie them together live in
//! [`crate::games::reversi`].

pub mod player;
pub mod config;
pub mod action;
pub mod state;

pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use config::{BoardConfig, InitPayload, MAX_DIMENSION};
pub use action::{Coord, Move, NOTATION_RADIX, PASS_NOTATION};
pub use state::{Board, Cell};
