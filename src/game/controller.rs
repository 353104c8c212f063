//! Decision provider trait and match view
//!
//! This module defines the interface between the round advancer and whatever
//! supplies match decisions (interactive terminal, scripted input, tests).
//! The advancer calls the provider exactly once per invocation, handing it a
//! read-only view of the match being resolved.

use crate::core::Side;
use crate::Result;

/// Read-only view of the match awaiting a decision
///
/// Providers inspect this view to build their prompt; they never see or
/// mutate the underlying round list.
#[derive(Debug, Clone, Copy)]
pub struct MatchView<'a> {
    /// Tournament title from the description file
    pub title: &'a str,
    /// Zero-based round number
    pub round_index: usize,
    /// Zero-based position within the round, in pairing order
    pub match_index: usize,
    pub left: &'a str,
    pub right: &'a str,
}

/// Decision provider trait
///
/// Implement this to connect a UI, a script, or a test harness. The round
/// advancer calls `choose_winner` when a match needs resolving.
pub trait DecisionProvider {
    /// Pick the winning side of the presented match.
    ///
    /// Returning an error (`InvalidSelection` for garbage input) aborts the
    /// invocation before any state is persisted.
    fn choose_winner(&mut self, view: &MatchView) -> Result<Side>;

    /// Called when a loser-pool candidate fills a bye slot, before the
    /// decision prompt. `pool` is the full shuffled pool; `entrant` is the
    /// candidate that was drawn from it.
    fn on_reentry(&mut self, _entrant: &str, _pool: &[String]) {}
}
