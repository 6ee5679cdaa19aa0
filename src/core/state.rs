//! Board state: the grid of cells.
//!
//! ## Cell
//!
//! Every cell is exactly one of `Empty`, `Owned(0)` or `Owned(1)`.
//!
//! ## Board
//!
//! A rectangular, row-major grid whose dimensions are fixed at
//! construction. The board is plain data: it knows nothing about turns or
//! legality, which live in the rules engine.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

use super::action::Coord;
use super::config::{BoardConfig, MAX_DIMENSION};
use super::player::{PlayerId, PlayerMap};
use crate::error::ConfigError;

/// Contents of one board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Owned(PlayerId),
}

impl Cell {
    /// Decode a mask symbol.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '0' => Some(Cell::Owned(PlayerId::FIRST)),
            '1' => Some(Cell::Owned(PlayerId::SECOND)),
            '2' => Some(Cell::Empty),
            _ => None,
        }
    }

    /// Encode as a mask symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => '2',
            Cell::Owned(player) => player.digit(),
        }
    }

    /// Owner of the disc in this cell, if any.
    #[must_use]
    pub const fn owner(self) -> Option<PlayerId> {
        match self {
            Cell::Empty => None,
            Cell::Owned(player) => Some(player),
        }
    }

    /// Check if the cell is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Owned(PlayerId::FIRST) => 'X',
            Cell::Owned(_) => 'O',
        }
    }
}

/// Rectangular game board.
///
/// Deserialization goes through [`RawBoard`] so the cell count always
/// matches the dimensions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

/// Unchecked wire form of a [`Board`].
#[derive(Deserialize)]
struct RawBoard {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl TryFrom<RawBoard> for Board {
    type Error = ConfigError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let RawBoard { rows, cols, cells } = raw;
        if rows > MAX_DIMENSION || cols > MAX_DIMENSION {
            return Err(ConfigError::TooLarge { rows, cols });
        }
        if cells.len() != rows * cols {
            return Err(ConfigError::MaskLength {
                expected: rows * cols,
                actual: cells.len(),
            });
        }
        Ok(Self { rows, cols, cells })
    }
}

impl Board {
    /// Build a board from a configuration.
    ///
    /// Fails if the configuration does not validate.
    pub fn from_config(config: &BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let cells = config
            .mask
            .chars()
            .enumerate()
            .map(|(index, symbol)| Cell::from_symbol(symbol).ok_or(ConfigError::MaskSymbol { index, symbol }))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            rows: config.rows,
            cols: config.cols,
            cells,
        })
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Check if a coordinate lies on the board.
    #[must_use]
    pub fn contains(&self, at: Coord) -> bool {
        usize::from(at.row) < self.rows && usize::from(at.col) < self.cols
    }

    /// Get a cell, or `None` if off-board.
    #[must_use]
    pub fn get(&self, at: Coord) -> Option<Cell> {
        self.index(at).map(|i| self.cells[i])
    }

    /// Overwrite a cell. Off-board coordinates are ignored.
    pub(crate) fn set(&mut self, at: Coord, cell: Cell) {
        if let Some(i) = self.index(at) {
            self.cells[i] = cell;
        }
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// One row of cells, or `None` if `row` is off-board.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    /// Iterate over every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |r| (0..cols).map(move |c| Coord::new(r as u16, c as u16)))
    }

    /// Number of discs owned by `player`.
    #[must_use]
    pub fn count(&self, player: PlayerId) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.owner() == Some(player))
            .count()
    }

    /// Disc counts for both players.
    #[must_use]
    pub fn counts(&self) -> PlayerMap<usize> {
        let mut counts = PlayerMap::with_value(0);
        for player in self.cells.iter().filter_map(|cell| cell.owner()) {
            counts[player] += 1;
        }
        counts
    }

    /// Number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    /// Encode the board back into mask notation.
    #[must_use]
    pub fn to_mask(&self) -> String {
        self.cells.iter().map(|cell| cell.symbol()).collect()
    }

    fn index(&self, at: Coord) -> Option<usize> {
        self.contains(at)
            .then(|| usize::from(at.row) * self.cols + usize::from(at.col))
    }
}

/// Plain-text rendering, one line per row: `X` for player 0, `O` for
/// player 1, `.` for empty.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols.max(1)) {
            for cell in row {
                f.write_char(cell.glyph())?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opening() -> Board {
        Board::from_config(&BoardConfig::standard(4, 4)).unwrap()
    }

    #[test]
    fn test_cell_symbols() {
        assert_eq!(Cell::from_symbol('0'), Some(Cell::Owned(PlayerId::FIRST)));
        assert_eq!(Cell::from_symbol('1'), Some(Cell::Owned(PlayerId::SECOND)));
        assert_eq!(Cell::from_symbol('2'), Some(Cell::Empty));
        assert_eq!(Cell::from_symbol('3'), None);

        for symbol in ['0', '1', '2'] {
            assert_eq!(Cell::from_symbol(symbol).unwrap().symbol(), symbol);
        }
    }

    #[test]
    fn test_from_config() {
        let board = opening();
        assert_eq!(board.rows(), 4);
        assert_eq!(board.cols(), 4);
        assert_eq!(board.get(Coord::new(1, 1)), Some(Cell::Owned(PlayerId::FIRST)));
        assert_eq!(board.get(Coord::new(1, 2)), Some(Cell::Owned(PlayerId::SECOND)));
        assert_eq!(board.get(Coord::new(0, 0)), Some(Cell::Empty));
        assert_eq!(board.get(Coord::new(4, 0)), None);
        assert_eq!(board.get(Coord::new(0, 4)), None);
    }

    #[test]
    fn test_from_config_rejects_invalid() {
        let config = BoardConfig::new(2, 2, "22");
        assert!(matches!(
            Board::from_config(&config),
            Err(ConfigError::MaskLength { .. })
        ));
    }

    #[test]
    fn test_counts() {
        let board = opening();
        assert_eq!(board.count(PlayerId::FIRST), 2);
        assert_eq!(board.count(PlayerId::SECOND), 2);
        assert_eq!(board.empty_count(), 12);

        let counts = board.counts();
        assert_eq!(counts[PlayerId::FIRST], 2);
        assert_eq!(counts[PlayerId::SECOND], 2);
    }

    #[test]
    fn test_set_and_mask() {
        let mut board = opening();
        board.set(Coord::new(0, 0), Cell::Owned(PlayerId::SECOND));
        board.set(Coord::new(9, 9), Cell::Owned(PlayerId::SECOND));
        assert_eq!(board.to_mask(), "1222201221022222");
    }

    #[test]
    fn test_row_access() {
        let board = opening();
        let row = board.row(1).unwrap();
        assert_eq!(row.len(), 4);
        assert_eq!(row[1], Cell::Owned(PlayerId::FIRST));
        assert!(board.row(4).is_none());
    }

    #[test]
    fn test_coords_row_major() {
        let board = Board::from_config(&BoardConfig::empty(2, 3)).unwrap();
        let coords: Vec<_> = board.coords().collect();
        assert_eq!(coords.len(), 6);
        assert_eq!(coords[0], Coord::new(0, 0));
        assert_eq!(coords[3], Coord::new(1, 0));
        assert_eq!(coords[5], Coord::new(1, 2));
    }

    #[test]
    fn test_display() {
        assert_eq!(opening().to_string(), "....\n.XO.\n.OX.\n....\n");
    }

    #[test]
    fn test_default_board_is_empty() {
        let board = Board::default();
        assert_eq!(board.rows(), 0);
        assert!(board.cells().is_empty());
        assert!(!board.contains(Coord::new(0, 0)));
        assert_eq!(board.to_string(), "");
    }

    #[test]
    fn test_board_serialization() {
        let board = opening();
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }

    #[test]
    fn test_inconsistent_board_fails_to_deserialize() {
        let short = serde_json::from_str::<Board>(r#"{"rows":2,"cols":2,"cells":[]}"#);
        assert!(short.is_err());

        let wide = serde_json::from_str::<Board>(r#"{"rows":1,"cols":70000,"cells":[]}"#);
        assert!(wide.is_err());

        let empty: Board = serde_json::from_str(r#"{"rows":0,"cols":0,"cells":[]}"#).unwrap();
        assert_eq!(empty, Board::default());
    }
}
