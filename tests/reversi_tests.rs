//! Reversi rule scenarios through the public API.
//!
//! These tests drive the engine the way a host does: initialize once, then
//! validate and apply moves received in notation.

use reversi_engine::core::{BoardConfig, Cell, Coord, InitPayload, Move, PlayerId};
use reversi_engine::error::{ConfigError, EngineError, MoveSyntaxError};
use reversi_engine::games::reversi::{Illegality, ReversiEngine, Viewport};
use reversi_engine::rules::RulesEngine;

const CLASSIC_4X4: &str = "2222201221022222";
const MIRRORED_4X4: &str = "2222210220122222";

fn engine_from(mask: &str) -> ReversiEngine {
    let payload = InitPayload::new(4, 4, mask);
    let config = BoardConfig::from_payload(&payload).unwrap();
    ReversiEngine::new(&config).unwrap()
}

fn owned(player: PlayerId) -> Option<Cell> {
    Some(Cell::Owned(player))
}

/// Classic opening: player 0 at (1,3) brackets (1,2) against (1,1).
#[test]
fn test_classic_opening_capture() {
    let mut engine = engine_from(CLASSIC_4X4);
    let mv: Move = "013".parse().unwrap();

    assert!(engine.validate(&mv));
    let record = engine.apply(&mv).unwrap();

    assert_eq!(engine.board().get(Coord::new(1, 3)), owned(PlayerId::FIRST));
    assert_eq!(engine.board().get(Coord::new(1, 2)), owned(PlayerId::FIRST));
    assert_eq!(record.captured_count(), 1);
    assert_eq!(engine.current_player(), PlayerId::SECOND);
}

/// With (1,1) held by player 1 and (1,2) by player 0, "010" captures (1,1).
#[test]
fn test_placement_at_row_one_col_zero() {
    let mut engine = engine_from(MIRRORED_4X4);
    assert_eq!(engine.board().get(Coord::new(1, 1)), owned(PlayerId::SECOND));

    assert!(engine.validate_notation("010"));
    let record = engine.apply(&"010".parse().unwrap()).unwrap();

    assert_eq!(engine.board().get(Coord::new(1, 0)), owned(PlayerId::FIRST));
    assert_eq!(engine.board().get(Coord::new(1, 1)), owned(PlayerId::FIRST));
    assert_eq!(record.captured().collect::<Vec<_>>(), vec![Coord::new(1, 1)]);
    assert_eq!(engine.current_player(), PlayerId::SECOND);
}

/// On the classic centre (1,1) is player 0's own disc, so "010" has no line.
#[test]
fn test_row_one_col_zero_illegal_on_classic_centre() {
    let engine = engine_from(CLASSIC_4X4);
    assert!(!engine.validate_notation("010"));
    assert_eq!(
        engine.check(&"010".parse().unwrap()),
        Err(Illegality::NoCapture)
    );
}

#[test]
fn test_pass_always_valid_and_toggles() {
    for mask in [CLASSIC_4X4, MIRRORED_4X4, "0000000000000000", "2222222222222222"] {
        let mut engine = engine_from(mask);
        let board = engine.board().clone();

        assert!(engine.validate_notation("p"));
        engine.apply(&Move::Pass).unwrap();
        assert_eq!(engine.current_player(), PlayerId::SECOND);
        assert_eq!(engine.board(), &board);

        engine.apply(&Move::Pass).unwrap();
        assert_eq!(engine.current_player(), PlayerId::FIRST);
    }
}

#[test]
fn test_bad_player_digit_is_syntax_error() {
    let engine = engine_from(CLASSIC_4X4);

    assert_eq!("9aa".parse::<Move>(), Err(MoveSyntaxError::Player('9')));
    assert!(!engine.validate_notation("9aa"));
}

#[test]
fn test_validate_rejects_basic_violations() {
    let engine = engine_from(CLASSIC_4X4);

    // Occupied
    assert!(!engine.validate(&Move::place(PlayerId::FIRST, Coord::new(1, 2))));
    // Not this player's turn, even though the cell would capture for them
    assert!(!engine.validate(&Move::place(PlayerId::SECOND, Coord::new(0, 1))));
    // Off the board
    assert!(!engine.validate(&Move::place(PlayerId::FIRST, Coord::new(4, 1))));
    assert!(!engine.validate(&Move::place(PlayerId::FIRST, Coord::new(1, 4))));
    assert!(!engine.validate_notation("0zz"));
}

#[test]
fn test_apply_rejects_illegal_move() {
    let mut engine = engine_from(CLASSIC_4X4);
    let before = engine.clone();

    let err = engine
        .apply(&Move::place(PlayerId::SECOND, Coord::new(0, 1)))
        .unwrap_err();
    assert!(matches!(
        err,
        EngineError::IllegalMove {
            reason: Illegality::WrongPlayer,
            ..
        }
    ));
    assert_eq!(engine, before);
}

#[test]
fn test_initialize_rejects_malformed_payloads() {
    let mut engine = ReversiEngine::default();

    let err = engine
        .initialize(&BoardConfig::new(4, 4, "222"), &mut ())
        .unwrap_err();
    assert!(matches!(
        err,
        EngineError::InvalidConfig(ConfigError::MaskLength {
            expected: 16,
            actual: 3
        })
    ));

    let err = engine
        .initialize(&BoardConfig::new(1, 3, "2a2"), &mut ())
        .unwrap_err();
    assert!(matches!(
        err,
        EngineError::InvalidConfig(ConfigError::MaskSymbol {
            index: 1,
            symbol: 'a'
        })
    ));

    assert!(matches!(
        BoardConfig::from_payload(&InitPayload { rc: 4, mask: String::new() }),
        Err(ConfigError::ZeroDimension)
    ));
}

struct Screen {
    size: Option<(usize, usize)>,
}

impl Viewport for Screen {
    fn configure(&mut self, cols: usize, rows: usize) {
        self.size = Some((cols, rows));
    }
}

#[test]
fn test_viewport_receives_unpacked_dimensions() {
    let payload = InitPayload {
        rc: (3 << 16) | 5,
        mask: "222222012222222".to_string(),
    };
    let config = BoardConfig::from_payload(&payload).unwrap();

    let mut screen = Screen { size: None };
    let mut engine = ReversiEngine::default();
    engine.initialize(&config, &mut screen).unwrap();

    assert_eq!(screen.size, Some((5, 3)));
    assert_eq!(engine.board().rows(), 3);
    assert_eq!(engine.board().cols(), 5);
}

#[test]
fn test_viewport_as_trait_object() {
    let mut screen = Screen { size: None };
    let viewport: &mut dyn Viewport = &mut screen;

    let mut engine = ReversiEngine::default();
    engine
        .initialize(&BoardConfig::standard(6, 6), viewport)
        .unwrap();
    assert_eq!(screen.size, Some((6, 6)));
}

/// Boards wider than one base-36 digit are playable programmatically.
#[test]
fn test_large_board_beyond_notation() {
    let mut engine = ReversiEngine::new(&BoardConfig::standard(40, 40)).unwrap();
    let mv = Move::place(PlayerId::FIRST, Coord::new(19, 21));

    assert!(engine.validate(&mv));
    assert!(mv.encode().is_ok());

    let far = Move::place(PlayerId::FIRST, Coord::new(36, 0));
    assert!(matches!(
        far.encode(),
        Err(MoveSyntaxError::Unencodable { row: 36, col: 0 })
    ));

    engine.apply(&mv).unwrap();
    assert_eq!(engine.board().count(PlayerId::FIRST), 4);
}

/// Host-style loop: both players pick their first legal move (or pass)
/// until neither can place.
#[test]
fn test_full_match_until_both_pass() {
    let mut engine = ReversiEngine::new(&BoardConfig::standard(6, 6)).unwrap();
    let mut records = Vec::new();
    let mut consecutive_passes = 0;

    while consecutive_passes < 2 {
        let mv = engine.legal_moves().first().copied().unwrap_or(Move::Pass);
        consecutive_passes = if mv.is_pass() { consecutive_passes + 1 } else { 0 };
        records.push(engine.apply(&mv).unwrap());
        assert!(records.len() < 200, "match did not terminate");
    }

    let counts = engine.board().counts();
    assert_eq!(
        counts[PlayerId::FIRST] + counts[PlayerId::SECOND] + engine.board().empty_count(),
        36
    );

    while let Some(record) = records.pop() {
        engine.undo(record).unwrap();
    }
    assert_eq!(engine, ReversiEngine::new(&BoardConfig::standard(6, 6)).unwrap());
}
