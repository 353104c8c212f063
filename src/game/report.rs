//! Status reporter: pure presentation over the bracket state
//!
//! Builds a serializable snapshot of the tournament and renders it either
//! as the original terminal listing or as JSON. Never mutates anything.

use crate::core::{Phase, BYE};
use crate::game::state::TourneyState;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// One match as presented in the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchReport {
    pub left: String,
    pub right: String,
    /// None renders as "not decided yet"
    pub winner: Option<String>,
    /// Participant had already lost a match earlier in the listing
    pub left_was_loser: bool,
    pub right_was_loser: bool,
}

/// One round as presented in the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundReport {
    pub index: usize,
    pub match_count: usize,
    pub matches: Vec<MatchReport>,
}

/// Full tournament snapshot for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub title: String,
    pub candidates: Vec<String>,
    pub phase: Phase,
    pub rounds: Vec<RoundReport>,
}

impl StatusReport {
    /// Build a report from the current state.
    ///
    /// The "(was a loser)" marker tracks losses in listing order: a
    /// re-entered candidate is annotated from the round after their first
    /// elimination onward.
    pub fn build(state: &TourneyState) -> Self {
        let mut losers: HashSet<String> = HashSet::new();
        let mut rounds = Vec::with_capacity(state.rounds.len());

        for (index, round) in state.rounds.iter().enumerate() {
            let mut matches = Vec::with_capacity(round.len());
            for m in &round.matches {
                // A fully empty pairing carries no information
                if m.left == BYE && m.right == BYE {
                    break;
                }
                matches.push(MatchReport {
                    left: m.left.clone(),
                    right: m.right.clone(),
                    winner: m.winner.clone(),
                    left_was_loser: losers.contains(&m.left),
                    right_was_loser: losers.contains(&m.right),
                });
                if let Some(loser) = m.loser() {
                    losers.insert(loser.to_string());
                }
            }
            rounds.push(RoundReport {
                index,
                match_count: round.len(),
                matches,
            });
        }

        StatusReport {
            title: state.title.clone(),
            candidates: state.candidates.clone(),
            phase: state.phase(),
            rounds,
        }
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "candidates: {}", self.candidates.join(", "))?;
        for round in &self.rounds {
            writeln!(f, "{} round ({} matches)", round.index, round.match_count)?;
            for m in &round.matches {
                let left_marker = if m.left_was_loser { " (was a loser)" } else { "" };
                let right_marker = if m.right_was_loser { " (was a loser)" } else { "" };
                let winner = m.winner.as_deref().unwrap_or("not decided yet");
                writeln!(
                    f,
                    "{}{} vs {}{} (winner: {})",
                    m.left, left_marker, m.right, right_marker, winner
                )?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
