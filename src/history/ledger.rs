//! Step ledger: the ordered record of applied moves.
//!
//! Every applied move is registered as a [`Step`]: the notation exactly as
//! the player sent it, plus the engine's undo record. The ledger never
//! touches the board itself; rewinding hands the newest record back to the
//! engine, so steps can only be taken back newest-first.
//!
//! Backed by `im::Vector` so snapshots of a long match clone in O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::BoardConfig;
use crate::error::EngineError;
use crate::games::reversi::{ReversiEngine, UndoRecord};
use crate::rules::RulesEngine;

/// One applied move: its notation and how to reverse it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Move notation as received.
    pub notation: String,

    /// Record that reverses the move.
    pub undo: UndoRecord,
}

impl Step {
    /// Create a new step.
    #[must_use]
    pub fn new(notation: impl Into<String>, undo: UndoRecord) -> Self {
        Self {
            notation: notation.into(),
            undo,
        }
    }
}

/// Sink for steps produced by [`ReversiEngine::step`].
pub trait StepRecorder {
    fn record(&mut self, step: Step);
}

impl StepRecorder for Vec<Step> {
    fn record(&mut self, step: Step) {
        self.push(step);
    }
}

/// Ordered, rewindable history of one match.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepLedger {
    steps: Vector<Step>,
}

impl StepLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a match by stepping through `notations` from `config`.
    ///
    /// Stops at the first notation that fails to parse or apply.
    pub fn replay<I>(config: &BoardConfig, notations: I) -> Result<(ReversiEngine, Self), EngineError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut engine = ReversiEngine::new(config)?;
        let mut ledger = Self::new();
        for notation in notations {
            engine.step(notation.as_ref(), &mut ledger)?;
        }
        Ok((engine, ledger))
    }

    /// Get the number of recorded steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Get the most recent step.
    #[must_use]
    pub fn last(&self) -> Option<&Step> {
        self.steps.back()
    }

    /// Iterate over steps, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter()
    }

    /// Notations of every step, oldest first.
    #[must_use]
    pub fn notations(&self) -> Vec<String> {
        self.steps.iter().map(|step| step.notation.clone()).collect()
    }

    /// Take back the newest step on `engine`.
    ///
    /// On failure the step stays in the ledger.
    pub fn rewind<E>(&mut self, engine: &mut E) -> Result<Step, EngineError>
    where
        E: RulesEngine<Undo = UndoRecord>,
    {
        let step = self.steps.pop_back().ok_or(EngineError::EmptyLedger)?;
        if let Err(err) = engine.undo(step.undo.clone()) {
            self.steps.push_back(step);
            return Err(err);
        }
        Ok(step)
    }

    /// Take back every step, newest first. Returns how many were undone.
    pub fn rewind_all<E>(&mut self, engine: &mut E) -> Result<usize, EngineError>
    where
        E: RulesEngine<Undo = UndoRecord>,
    {
        let mut undone = 0;
        while !self.is_empty() {
            self.rewind(engine)?;
            undone += 1;
        }
        Ok(undone)
    }

    /// Serialize the ledger with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EngineError> {
        Ok(bincode::serialize(self)?)
    }

    /// Deserialize a ledger written by [`to_bytes`](Self::to_bytes).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EngineError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl StepRecorder for StepLedger {
    fn record(&mut self, step: Step) {
        self.steps.push_back(step);
    }
}
