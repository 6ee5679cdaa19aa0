//! Move history.
//!
//! The engine reports each applied move to a [`StepRecorder`]; the
//! [`StepLedger`] is the stock recorder and can rewind a match newest-first
//! or persist it.

mod ledger;

pub use ledger::{Step, StepLedger, StepRecorder};
