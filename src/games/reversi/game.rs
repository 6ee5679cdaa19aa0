//! Reversi engine implementation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Board, BoardConfig, Cell, Coord, Move, PlayerId};
use crate::error::EngineError;
use crate::history::{Step, StepRecorder};
use crate::rules::RulesEngine;

/// The eight compass directions as `(d_row, d_col)`, clockwise from
/// north-west.
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
];

/// Why a placement was rejected.
///
/// Checks run in declaration order; the first failure wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
pub enum Illegality {
    #[error("it is not this player's turn")]
    WrongPlayer,

    #[error("coordinate is off the board")]
    OutOfBounds,

    #[error("target cell is occupied")]
    Occupied,

    #[error("placement captures nothing")]
    NoCapture,
}

/// Receives the board dimensions when a match is initialized.
///
/// Arguments are `(cols, rows)`, width first, the way screens size
/// themselves.
pub trait Viewport {
    fn configure(&mut self, cols: usize, rows: usize);
}

impl Viewport for () {
    fn configure(&mut self, _cols: usize, _rows: usize) {}
}

/// One cell touched by a move, with the value it held before.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellChange {
    pub at: Coord,
    pub prior: Cell,
}

/// Everything needed to take back one applied move.
///
/// ## Layout
///
/// - `changes[0]` is the placed cell (prior value `Empty`), followed by
///   every captured cell in direction order, nearest first
/// - A pass has no changes
///
/// Records are consumed by [`RulesEngine::undo`] and only accepted for the
/// most recent un-undone ply.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoRecord {
    /// The move that was applied.
    pub mv: Move,

    /// Player who made the move.
    pub mover: PlayerId,

    /// Ply index the move was applied at (0-based).
    pub ply: u32,

    /// Cells changed by the move and their prior contents.
    /// Most placements flip only a handful of discs.
    changes: SmallVec<[CellChange; 8]>,
}

impl UndoRecord {
    /// Cells changed by the move, in the order they were written.
    #[must_use]
    pub fn changes(&self) -> &[CellChange] {
        &self.changes
    }

    /// Coordinates of the captured (flipped) discs.
    pub fn captured(&self) -> impl Iterator<Item = Coord> + '_ {
        self.changes.iter().skip(1).map(|change| change.at)
    }

    /// Number of captured discs.
    #[must_use]
    pub fn captured_count(&self) -> usize {
        self.changes.len().saturating_sub(1)
    }
}

/// Two-player Reversi rules over a rectangular board.
///
/// ## Lifecycle
///
/// 1. Construct with `ReversiEngine::default()` (0x0 board) and call
///    [`initialize`](Self::initialize), or use [`new`](Self::new)
/// 2. Per turn: [`validate`](RulesEngine::validate), then
///    [`apply`](RulesEngine::apply) (or [`step`](Self::step) with notation)
/// 3. [`undo`](RulesEngine::undo) records in reverse order to take moves back
///
/// The engine never decides that a match is over.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ReversiEngine {
    board: Board,
    turn: PlayerId,
    ply: u32,
}

impl ReversiEngine {
    /// Create an engine initialized from `config`.
    pub fn new(config: &BoardConfig) -> Result<Self, EngineError> {
        let mut engine = Self::default();
        engine.initialize(config, &mut ())?;
        Ok(engine)
    }

    /// Set up a fresh match.
    ///
    /// Replaces the board, resets the turn to `config.first_player` and the
    /// ply counter to zero, then reports the dimensions to `viewport`. On
    /// error nothing changes and the viewport is not called.
    pub fn initialize<V>(&mut self, config: &BoardConfig, viewport: &mut V) -> Result<(), EngineError>
    where
        V: Viewport + ?Sized,
    {
        let board = Board::from_config(config)?;
        viewport.configure(board.cols(), board.rows());

        self.board = board;
        self.turn = config.first_player;
        self.ply = 0;
        Ok(())
    }

    /// Read-only view of the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of moves applied and not undone since initialization.
    #[must_use]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// Explain why `mv` is illegal, if it is.
    pub fn check(&self, mv: &Move) -> Result<(), Illegality> {
        let (player, at) = match *mv {
            Move::Pass => return Ok(()),
            Move::Place { player, at } => (player, at),
        };

        if player != self.turn {
            return Err(Illegality::WrongPlayer);
        }
        match self.board.get(at) {
            None => Err(Illegality::OutOfBounds),
            Some(Cell::Owned(_)) => Err(Illegality::Occupied),
            Some(Cell::Empty) => {
                if DIRECTIONS
                    .iter()
                    .any(|&direction| self.capture_len(at, player, direction) > 0)
                {
                    Ok(())
                } else {
                    Err(Illegality::NoCapture)
                }
            }
        }
    }

    /// Parse and validate move notation. Malformed notation is invalid.
    #[must_use]
    pub fn validate_notation(&self, notation: &str) -> bool {
        notation
            .parse::<Move>()
            .map_or(false, |mv| self.validate(&mv))
    }

    /// Discs the current player would capture by placing at `at`.
    ///
    /// Empty for occupied, off-board or non-capturing cells. Does not
    /// mutate the board.
    #[must_use]
    pub fn captures_for(&self, at: Coord) -> Vec<Coord> {
        if self.board.get(at) != Some(Cell::Empty) {
            return Vec::new();
        }

        let mut captured = Vec::new();
        for &(d_row, d_col) in &DIRECTIONS {
            let len = self.capture_len(at, self.turn, (d_row, d_col));
            let mut cursor = at;
            for _ in 0..len {
                let Some(next) = cursor.offset(d_row, d_col) else {
                    break;
                };
                captured.push(next);
                cursor = next;
            }
        }
        captured
    }

    /// Check whether the current player can place anywhere.
    #[must_use]
    pub fn has_legal_placement(&self) -> bool {
        self.board
            .coords()
            .any(|at| self.check(&Move::place(self.turn, at)).is_ok())
    }

    /// Parse `notation`, apply it, and register the step with `recorder`.
    ///
    /// The notation is recorded exactly as given.
    pub fn step<R>(&mut self, notation: &str, recorder: &mut R) -> Result<(), EngineError>
    where
        R: StepRecorder + ?Sized,
    {
        let mv: Move = notation.parse()?;
        let undo = self.apply(&mv)?;
        recorder.record(Step::new(notation, undo));
        Ok(())
    }

    /// Check that the board holds the position `record` left behind: the
    /// placed disc and every flipped disc belong to the mover.
    fn matches_board(&self, record: &UndoRecord) -> bool {
        let placed = match record.mv {
            Move::Pass => return record.changes.is_empty(),
            Move::Place { player, at } => {
                player == record.mover
                    && record.changes.first().map(|change| (change.at, change.prior))
                        == Some((at, Cell::Empty))
            }
        };
        let opponent = Cell::Owned(record.mover.opponent());

        placed
            && record.changes.iter().skip(1).all(|change| change.prior == opponent)
            && record
                .changes
                .iter()
                .all(|change| self.board.get(change.at) == Some(Cell::Owned(record.mover)))
    }

    /// Length of the capture line from `from` in `direction`, or 0 if the
    /// direction does not capture.
    ///
    /// Walks over opponent discs; the line counts only if at least one was
    /// crossed and the walk stops on the mover's own disc. Running into an
    /// empty cell or off the board voids the line.
    fn capture_len(&self, from: Coord, mover: PlayerId, (d_row, d_col): (i8, i8)) -> usize {
        let opponent = mover.opponent();
        let mut crossed = 0;
        let mut cursor = from.offset(d_row, d_col);

        while let Some(at) = cursor {
            match self.board.get(at) {
                Some(Cell::Owned(owner)) if owner == opponent => {
                    crossed += 1;
                    cursor = at.offset(d_row, d_col);
                }
                Some(Cell::Owned(_)) => return crossed,
                Some(Cell::Empty) | None => return 0,
            }
        }
        0
    }
}

impl RulesEngine for ReversiEngine {
    type Move = Move;
    type Undo = UndoRecord;

    fn current_player(&self) -> PlayerId {
        self.turn
    }

    fn validate(&self, mv: &Move) -> bool {
        self.check(mv).is_ok()
    }

    fn apply(&mut self, mv: &Move) -> Result<UndoRecord, EngineError> {
        self.check(mv)
            .map_err(|reason| EngineError::IllegalMove { mv: *mv, reason })?;
        let next_ply = self
            .ply
            .checked_add(1)
            .ok_or(EngineError::PlyOverflow(self.ply))?;

        let mover = self.turn;
        let mut changes = SmallVec::new();

        if let Move::Place { at, .. } = *mv {
            changes.push(CellChange {
                at,
                prior: Cell::Empty,
            });
            self.board.set(at, Cell::Owned(mover));

            // Rays from one origin are disjoint, so flipping one direction
            // cannot change another direction's scan.
            for &(d_row, d_col) in &DIRECTIONS {
                let len = self.capture_len(at, mover, (d_row, d_col));
                let mut cursor = at;
                for _ in 0..len {
                    let Some(next) = cursor.offset(d_row, d_col) else {
                        break;
                    };
                    self.board.set(next, Cell::Owned(mover));
                    changes.push(CellChange {
                        at: next,
                        prior: Cell::Owned(mover.opponent()),
                    });
                    cursor = next;
                }
            }
        }

        let record = UndoRecord {
            mv: *mv,
            mover,
            ply: self.ply,
            changes,
        };
        self.turn = !mover;
        self.ply = next_ply;
        Ok(record)
    }

    fn undo(&mut self, record: UndoRecord) -> Result<(), EngineError> {
        let expected_ply = self.ply.checked_sub(1);
        if expected_ply != Some(record.ply) || record.mover != !self.turn {
            return Err(EngineError::UndoOutOfOrder {
                expected_ply,
                found_ply: record.ply,
            });
        }

        if !self.matches_board(&record) {
            return Err(EngineError::UndoMismatch { ply: record.ply });
        }

        for change in record.changes.iter().rev() {
            self.board.set(change.at, change.prior);
        }
        self.turn = record.mover;
        self.ply = record.ply;
        Ok(())
    }

    fn legal_moves(&self) -> Vec<Move> {
        self.board
            .coords()
            .map(|at| Move::place(self.turn, at))
            .filter(|mv| self.check(mv).is_ok())
            .collect()
    }

    fn has_legal_move(&self) -> bool {
        self.has_legal_placement()
    }
}
