//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define:
//! - Legal moves for the current state
//! - How moves modify state
//! - How an applied move is reversed
//!
//! Hosts and the step ledger are written against this trait and never
//! touch the board directly.

pub mod engine;

pub use engine::RulesEngine;
