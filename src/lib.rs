//! tourney - interactive single-elimination bracket runner
//!
//! Runs a single-elimination tournament (with one consolation re-entry slot
//! per bye) from the terminal, persisting bracket state to a plain-text file
//! between invocations. Each `run` invocation resolves exactly one match.

pub mod core;
pub mod error;
pub mod game;
pub mod loader;

pub use error::{Result, TourneyError};
