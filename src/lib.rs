//! # reversi-engine
//!
//! A two-player Reversi (Othello) rule engine with reversible moves.
//!
//! ## Design Principles
//!
//! 1. **Rules Only**: The engine validates and applies moves. Match setup,
//!    rendering and end-of-game decisions belong to the host.
//!
//! 2. **Validate, Then Apply**: `validate` is a pure predicate. `apply`
//!    re-checks legality and refuses illegal moves instead of corrupting
//!    the board.
//!
//! 3. **Data, Not Closures**: Every applied move yields an `UndoRecord`, a
//!    plain serializable diff that `undo` consumes exactly once.
//!
//! ## Modules
//!
//! - `core`: Players, moves and notation, board configuration, the grid
//! - `rules`: `RulesEngine` trait
//! - `games`: The Reversi engine
//! - `history`: Step ledger with LIFO rewind and persistence
//! - `error`: Error types
//!
//! ## Example
//!
//! ```
//! use reversi_engine::{BoardConfig, ReversiEngine, RulesEngine, StepLedger};
//!
//! let mut engine = ReversiEngine::new(&BoardConfig::standard(8, 8)).unwrap();
//! let mut ledger = StepLedger::new();
//!
//! assert!(engine.validate_notation("024"));
//! engine.step("024", &mut ledger).unwrap();
//! assert_eq!(engine.board().count(reversi_engine::PlayerId::FIRST), 4);
//!
//! ledger.rewind(&mut engine).unwrap();
//! assert_eq!(engine.ply(), 0);
//! ```

pub mod core;
pub mod error;
pub mod rules;
pub mod games;
pub mod history;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardConfig, Cell, Coord, InitPayload, Move, PlayerId, PlayerMap,
};

pub use crate::error::{ConfigError, EngineError, MoveSyntaxError};

pub use crate::rules::RulesEngine;

pub use crate::games::reversi::{Illegality, ReversiEngine, UndoRecord, Viewport};

pub use crate::history::{Step, StepLedger, StepRecorder};
