//! Move representation and the compact move notation.
//!
//! A move is either a placement of the mover's disc on a coordinate, or a
//! pass. On the wire moves travel as short strings:
//!
//! - `"p"`: pass
//! - `"<p><r><c>"`: player digit (`0` or `1`), then row and column as single
//!   base-36 digits (`0-9`, `a-z`, case-insensitive)
//!
//! One base-36 digit caps encodable coordinates at 35, so boards larger
//! than 36x36 can be played programmatically but not through notation.
//!
//! ```
//! use reversi_engine::core::{Coord, Move, PlayerId};
//!
//! let mv: Move = "01a".parse().unwrap();
//! assert_eq!(mv, Move::place(PlayerId::FIRST, Coord::new(1, 10)));
//! assert_eq!(mv.encode().unwrap(), "01a");
//!
//! assert_eq!("p".parse::<Move>().unwrap(), Move::Pass);
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::player::PlayerId;
use crate::error::MoveSyntaxError;

/// Radix of the row and column digits.
pub const NOTATION_RADIX: u32 = 36;

/// Notation for a pass.
pub const PASS_NOTATION: &str = "p";

/// A cell coordinate on the board, row first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: u16,
    pub col: u16,
}

impl Coord {
    /// Create a coordinate.
    #[must_use]
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }

    /// Step one cell in direction `(d_row, d_col)`.
    ///
    /// Returns `None` when the step would leave the non-negative quadrant;
    /// the upper bound is the board's business.
    #[must_use]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row.checked_add_signed(i16::from(d_row))?;
        let col = self.col.checked_add_signed(i16::from(d_col))?;
        Some(Self { row, col })
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A complete move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Put `player`'s disc on the empty cell `at`.
    Place { player: PlayerId, at: Coord },
    /// Hand the turn to the other player.
    Pass,
}

impl Move {
    /// Create a placement move.
    #[must_use]
    pub const fn place(player: PlayerId, at: Coord) -> Self {
        Self::Place { player, at }
    }

    /// Check if this move is a pass.
    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Encode into move notation.
    ///
    /// Fails with [`MoveSyntaxError::Unencodable`] when a coordinate does
    /// not fit in one base-36 digit.
    pub fn encode(&self) -> Result<String, MoveSyntaxError> {
        match *self {
            Move::Pass => Ok(PASS_NOTATION.to_string()),
            Move::Place { player, at } => {
                let unencodable = || MoveSyntaxError::Unencodable {
                    row: at.row,
                    col: at.col,
                };
                let row = std::char::from_digit(u32::from(at.row), NOTATION_RADIX)
                    .ok_or_else(unencodable)?;
                let col = std::char::from_digit(u32::from(at.col), NOTATION_RADIX)
                    .ok_or_else(unencodable)?;
                Ok([player.digit(), row, col].iter().collect())
            }
        }
    }
}

fn parse_coordinate(c: char) -> Result<u16, MoveSyntaxError> {
    c.to_digit(NOTATION_RADIX)
        .map(|d| d as u16)
        .ok_or(MoveSyntaxError::Digit(c))
}

/// Parse move notation: `"p"` or `[0-1][0-9a-zA-Z]{2}`.
impl FromStr for Move {
    type Err = MoveSyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(MoveSyntaxError::Empty);
        }
        if s == PASS_NOTATION {
            return Ok(Move::Pass);
        }

        let chars: Vec<char> = s.chars().collect();
        let &[p, r, c] = chars.as_slice() else {
            return Err(MoveSyntaxError::Length(chars.len()));
        };

        let player = match p {
            '0' => PlayerId::FIRST,
            '1' => PlayerId::SECOND,
            other => return Err(MoveSyntaxError::Player(other)),
        };
        let row = parse_coordinate(r)?;
        let col = parse_coordinate(c)?;

        Ok(Move::place(player, Coord::new(row, col)))
    }
}
