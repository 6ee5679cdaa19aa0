//! Reversi (Othello) capture rules on a rectangular board.
//!
//! A placement is legal when, in at least one of the eight compass
//! directions, it brackets a contiguous run of opponent discs against one
//! of the mover's own discs. Every bracketed run flips to the mover.
//!
//! ```
//! use reversi_engine::core::{BoardConfig, Coord, Move, PlayerId};
//! use reversi_engine::games::reversi::ReversiEngine;
//! use reversi_engine::rules::RulesEngine;
//!
//! let mut engine = ReversiEngine::new(&BoardConfig::standard(4, 4)).unwrap();
//! let mv = Move::place(PlayerId::FIRST, Coord::new(1, 3));
//!
//! assert!(engine.validate(&mv));
//! let record = engine.apply(&mv).unwrap();
//! assert_eq!(engine.current_player(), PlayerId::SECOND);
//! assert_eq!(record.captured().collect::<Vec<_>>(), vec![Coord::new(1, 2)]);
//!
//! engine.undo(record).unwrap();
//! assert_eq!(engine.board().to_mask(), "2222201221022222");
//! ```

mod game;

pub use game::{CellChange, Illegality, ReversiEngine, UndoRecord, Viewport, DIRECTIONS};
