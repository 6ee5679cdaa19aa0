//! Board configuration.
//!
//! A match starts from a `BoardConfig`: the board dimensions, a row-major
//! mask describing every starting cell, and the seat that moves first.
//!
//! ## Mask symbols
//!
//! - `0`: disc owned by player 0
//! - `1`: disc owned by player 1
//! - `2`: empty cell
//!
//! ## Host payload
//!
//! Hosts ship the dimensions packed into a single integer, columns in the
//! low 16 bits and rows above them. [`InitPayload`] carries that packed
//! form; [`BoardConfig::from_payload`] unpacks it.
//!
//! ```
//! use reversi_engine::core::{BoardConfig, InitPayload};
//!
//! let payload = InitPayload::new(4, 4, "2222201221022222");
//! assert_eq!(payload.rc, (4 << 16) | 4);
//!
//! let config = BoardConfig::from_payload(&payload).unwrap();
//! assert_eq!((config.rows, config.cols), (4, 4));
//! assert_eq!(config, BoardConfig::standard(4, 4));
//! ```

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::error::ConfigError;

/// Largest supported board dimension. Columns must fit the low 16 bits of
/// the packed payload.
pub const MAX_DIMENSION: usize = u16::MAX as usize;

/// Mask symbol for an empty cell.
pub const EMPTY_SYMBOL: char = '2';

/// Packed initialization payload as produced by a host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitPayload {
    /// `(rows << 16) | cols`.
    pub rc: u32,

    /// Row-major mask of `rows * cols` symbols.
    pub mask: String,
}

impl InitPayload {
    /// Pack dimensions and mask into a payload.
    pub fn new(rows: u16, cols: u16, mask: impl Into<String>) -> Self {
        Self {
            rc: Self::pack(rows, cols),
            mask: mask.into(),
        }
    }

    /// Pack rows and columns into one integer.
    #[must_use]
    pub const fn pack(rows: u16, cols: u16) -> u32 {
        ((rows as u32) << 16) | cols as u32
    }

    /// Split a packed integer into `(rows, cols)`.
    #[must_use]
    pub const fn unpack(rc: u32) -> (usize, usize) {
        let cols = (rc & 0xFFFF) as usize;
        let rows = (rc >> 16) as usize;
        (rows, cols)
    }
}

/// Complete board configuration for one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of rows.
    pub rows: usize,

    /// Number of columns.
    pub cols: usize,

    /// Row-major mask of `rows * cols` symbols from `{0, 1, 2}`.
    pub mask: String,

    /// Seat that moves first.
    #[serde(default)]
    pub first_player: PlayerId,
}

impl BoardConfig {
    /// Create a configuration from explicit dimensions and mask.
    ///
    /// The configuration is checked when the engine is initialized, or
    /// earlier via [`validate`](Self::validate).
    pub fn new(rows: usize, cols: usize, mask: impl Into<String>) -> Self {
        Self {
            rows,
            cols,
            mask: mask.into(),
            first_player: PlayerId::default(),
        }
    }

    /// Create an all-empty board.
    pub fn empty(rows: usize, cols: usize) -> Self {
        let mask = std::iter::repeat(EMPTY_SYMBOL)
            .take(rows.saturating_mul(cols))
            .collect::<String>();
        Self::new(rows, cols, mask)
    }

    /// Create a board with the classic four-disc opening in the centre.
    ///
    /// For even dimensions the discs sit on the exact centre; odd
    /// dimensions round toward the top-left. Boards smaller than 2x2 have
    /// no centre square and come back empty.
    pub fn standard(rows: usize, cols: usize) -> Self {
        let mut config = Self::empty(rows, cols);
        if rows < 2 || cols < 2 {
            return config;
        }

        let (r, c) = (rows / 2, cols / 2);
        let mut cells: Vec<char> = config.mask.chars().collect();
        cells[(r - 1) * cols + (c - 1)] = '0';
        cells[(r - 1) * cols + c] = '1';
        cells[r * cols + (c - 1)] = '1';
        cells[r * cols + c] = '0';
        config.mask = cells.into_iter().collect();
        config
    }

    /// Unpack a host payload.
    ///
    /// Fails if the unpacked configuration is invalid.
    pub fn from_payload(payload: &InitPayload) -> Result<Self, ConfigError> {
        let (rows, cols) = InitPayload::unpack(payload.rc);
        let config = Self::new(rows, cols, payload.mask.clone());
        config.validate()?;
        Ok(config)
    }

    /// Pack this configuration into a host payload.
    pub fn to_payload(&self) -> Result<InitPayload, ConfigError> {
        self.validate()?;
        Ok(InitPayload::new(self.rows as u16, self.cols as u16, self.mask.clone()))
    }

    /// Set the seat that moves first.
    #[must_use]
    pub fn with_first_player(mut self, player: PlayerId) -> Self {
        self.first_player = player;
        self
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    /// Check dimensions and mask.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::ZeroDimension);
        }
        if self.rows > MAX_DIMENSION || self.cols > MAX_DIMENSION {
            return Err(ConfigError::TooLarge {
                rows: self.rows,
                cols: self.cols,
            });
        }

        let actual = self.mask.chars().count();
        if actual != self.cell_count() {
            return Err(ConfigError::MaskLength {
                expected: self.cell_count(),
                actual,
            });
        }

        if let Some((index, symbol)) = self
            .mask
            .chars()
            .enumerate()
            .find(|(_, symbol)| !matches!(symbol, '0' | '1' | '2'))
        {
            return Err(ConfigError::MaskSymbol { index, symbol });
        }

        Ok(())
    }
}
