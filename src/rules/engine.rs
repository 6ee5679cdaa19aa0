//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define their rules:
//! - What moves are legal
//! - How moves modify state, and how to take them back
//!
//! Deciding when a match is over is left to the host.

use crate::core::PlayerId;
use crate::error::EngineError;

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `validate`: Pure query, never mutates and never errors
/// - `apply`: Must re-check legality and leave state untouched on failure
/// - `undo`: Accepts only the most recent un-undone record (LIFO)
/// - `legal_moves`: Moves other than "pass" available to the current player
pub trait RulesEngine {
    /// A move understood by this game.
    type Move;

    /// Data needed to reverse one applied move.
    type Undo;

    /// Player whose turn it is.
    fn current_player(&self) -> PlayerId;

    /// Check whether `mv` is legal in the current state.
    fn validate(&self, mv: &Self::Move) -> bool;

    /// Apply a legal move, returning the record that reverses it.
    fn apply(&mut self, mv: &Self::Move) -> Result<Self::Undo, EngineError>;

    /// Reverse the most recently applied move.
    fn undo(&mut self, record: Self::Undo) -> Result<(), EngineError>;

    /// Enumerate the current player's legal non-pass moves.
    fn legal_moves(&self) -> Vec<Self::Move>;

    // === Convenience Methods ===

    /// Check whether the current player has any non-pass move.
    ///
    /// Default implementation enumerates `legal_moves`; implementations
    /// can short-circuit.
    fn has_legal_move(&self) -> bool {
        !self.legal_moves().is_empty()
    }
}
