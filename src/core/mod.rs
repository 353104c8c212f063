//! Core bracket data model
//!
//! A tournament is a chronological list of rounds; a round is an ordered
//! list of matches. Match order within a round is the pairing order and is
//! load-bearing: the advancer always resolves the first undecided match.

use serde::{Deserialize, Serialize};

/// Sentinel opponent name marking a bye slot.
///
/// A real candidate is never allowed to carry this name; the description
/// loader rejects it at load time.
pub const BYE: &str = "None";

/// Which side of a match a decision picked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// A single match between two candidates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub left: String,
    pub right: String,
    /// Set once decided; must byte-equal `left` or `right`
    pub winner: Option<String>,
}

impl Match {
    /// Create an undecided match
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Match {
            left: left.into(),
            right: right.into(),
            winner: None,
        }
    }

    pub fn is_decided(&self) -> bool {
        self.winner.is_some()
    }

    /// True while the right slot still holds the bye sentinel
    pub fn is_open_bye(&self) -> bool {
        self.right == BYE
    }

    /// The losing side's name, if the match is decided.
    ///
    /// Follows the original pairing rule: whichever side is not the winner.
    pub fn loser(&self) -> Option<&str> {
        let winner = self.winner.as_deref()?;
        if winner == self.right {
            Some(&self.left)
        } else {
            Some(&self.right)
        }
    }

    /// Record the winner by side
    pub fn decide(&mut self, side: Side) {
        self.winner = Some(match side {
            Side::Left => self.left.clone(),
            Side::Right => self.right.clone(),
        });
    }

    /// The candidate name on the given side
    pub fn side_name(&self, side: Side) -> &str {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}

/// One full layer of the bracket
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Round {
    pub matches: Vec<Match>,
}

impl Round {
    pub fn new(matches: Vec<Match>) -> Self {
        Round { matches }
    }

    /// True once every match in the round has a winner
    pub fn is_complete(&self) -> bool {
        self.matches.iter().all(Match::is_decided)
    }

    /// Index of the first undecided match in pairing order
    pub fn first_undecided(&self) -> Option<usize> {
        self.matches.iter().position(|m| !m.is_decided())
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Lifecycle phase of the tournament, derived from the round list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No rounds built yet
    NotStarted,
    /// Current round has at least one undecided match
    InProgress,
    /// Current round fully decided with more than one match
    RoundComplete,
    /// Current round is a decided final, or nothing left to decide
    Finished,
}
