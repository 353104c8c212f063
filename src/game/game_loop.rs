//! Round advancer: resolves exactly one match per invocation
//!
//! Scans the current round linearly for the first undecided match, fills a
//! bye slot from the loser pool when needed, asks the decision provider for
//! a winner, and appends the next round once the current one is decided.
//! The linear first-undecided scan order is a contract; match resolution is
//! never reordered.

use crate::core::{Phase, Side};
use crate::game::controller::{DecisionProvider, MatchView};
use crate::game::state::TourneyState;
use crate::{Result, TourneyError};
use serde::{Deserialize, Serialize};

/// Verbosity level for advancer output
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
)]
pub enum VerbosityLevel {
    /// No incidental output
    Silent = 0,
    /// Key events only (default)
    #[default]
    Normal = 1,
    /// Round construction and bookkeeping detail
    Verbose = 2,
}

/// Result of consuming one decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// One match was resolved
    Decided {
        left: String,
        right: String,
        winner: String,
        /// True when this decision settled the final
        tournament_over: bool,
    },
    /// No undecided match remained; nothing was consumed
    AlreadyFinished,
}

/// Round advancer over a mutable tournament state
pub struct GameLoop<'a> {
    state: &'a mut TourneyState,
    verbosity: VerbosityLevel,
}

impl<'a> GameLoop<'a> {
    pub fn new(state: &'a mut TourneyState) -> Self {
        GameLoop {
            state,
            verbosity: VerbosityLevel::default(),
        }
    }

    pub fn with_verbosity(state: &'a mut TourneyState, verbosity: VerbosityLevel) -> Self {
        GameLoop { state, verbosity }
    }

    /// Consume one decision from the provider and advance the bracket.
    ///
    /// Builds the first round on a fresh tournament. Exactly one match is
    /// decided per call; the caller re-invokes to progress further. State is
    /// only mutated on the success path, so an error leaves the persisted
    /// file untouched when the caller skips the write.
    pub fn run_next_match(&mut self, provider: &mut dyn DecisionProvider) -> Result<AdvanceOutcome> {
        if self.state.phase() == Phase::NotStarted {
            self.state.build_first_round();
            if self.verbosity >= VerbosityLevel::Verbose {
                println!(
                    "built first round with {} matches",
                    self.state.rounds[0].len()
                );
            }
        }

        let round_index = self.state.rounds.len() - 1;
        let match_index = match self.state.rounds[round_index].first_undecided() {
            Some(idx) => idx,
            None => return Ok(AdvanceOutcome::AlreadyFinished),
        };

        // Fill an open bye from the loser pool before prompting
        if self.state.rounds[round_index].matches[match_index].is_open_bye() {
            let left = self.state.rounds[round_index].matches[match_index].left.clone();
            let pool = self.state.loser_pool(&left);
            let entrant = match pool.first() {
                Some(entrant) => entrant.clone(),
                None => return Err(TourneyError::NoLosersAvailable(left)),
            };
            provider.on_reentry(&entrant, &pool);
            self.state.rounds[round_index].matches[match_index].right = entrant;
        }

        let (left, right) = {
            let m = &self.state.rounds[round_index].matches[match_index];
            (m.left.clone(), m.right.clone())
        };
        let view = MatchView {
            title: &self.state.title,
            round_index,
            match_index,
            left: &left,
            right: &right,
        };
        let side = provider.choose_winner(&view)?;

        let round_len = self.state.rounds[round_index].len();
        self.state.rounds[round_index].matches[match_index].decide(side);
        let winner = match side {
            Side::Left => left.clone(),
            Side::Right => right.clone(),
        };

        let tournament_over = round_len == 1;
        if !tournament_over && match_index == round_len - 1 {
            // Last match of a multi-match round: derive the next round
            let next = TourneyState::build_next_round(&self.state.rounds[round_index]);
            if self.verbosity >= VerbosityLevel::Verbose {
                println!(
                    "round {} complete; building round {} with {} matches",
                    round_index,
                    round_index + 1,
                    next.len()
                );
            }
            self.state.rounds.push(next);
        }

        Ok(AdvanceOutcome::Decided {
            left,
            right,
            winner,
            tournament_over,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Match, Round, BYE};
    use crate::game::scripted_controller::ScriptedController;

    fn fresh(candidates: &[&str]) -> TourneyState {
        let mut state = TourneyState::new(
            "Cup".to_string(),
            candidates.iter().map(|c| c.to_string()).collect(),
            Vec::new(),
        );
        state.seed_rng(7);
        state
    }

    fn run_one(state: &mut TourneyState, side: Side) -> Result<AdvanceOutcome> {
        let mut provider = ScriptedController::new([side]);
        GameLoop::with_verbosity(state, VerbosityLevel::Silent).run_next_match(&mut provider)
    }

    #[test]
    fn test_three_candidates_full_tournament() {
        let mut state = fresh(&["A", "B", "C"]);

        // Decision 1: the real pairing of round 0
        let outcome = run_one(&mut state, Side::Left).unwrap();
        assert!(matches!(
            outcome,
            AdvanceOutcome::Decided {
                tournament_over: false,
                ..
            }
        ));
        assert_eq!(state.rounds.len(), 1);
        assert_eq!(state.rounds[0].len(), 2);

        // Decision 2: the bye match, filled by the first loser
        let loser_before = {
            let m = &state.rounds[0].matches[0];
            m.loser().unwrap().to_string()
        };
        let outcome = run_one(&mut state, Side::Left).unwrap();
        let AdvanceOutcome::Decided {
            right,
            tournament_over,
            ..
        } = outcome
        else {
            panic!("expected a decided match");
        };
        assert_eq!(right, loser_before);
        assert!(!tournament_over);
        // Round 0 was the last match, so the final got built
        assert_eq!(state.rounds.len(), 2);
        assert_eq!(state.rounds[1].len(), 1);

        // Decision 3: the final
        let outcome = run_one(&mut state, Side::Right).unwrap();
        assert!(matches!(
            outcome,
            AdvanceOutcome::Decided {
                tournament_over: true,
                ..
            }
        ));
        assert_eq!(state.phase(), Phase::Finished);

        // Further invocations consume nothing
        let outcome = run_one(&mut state, Side::Left).unwrap();
        assert_eq!(outcome, AdvanceOutcome::AlreadyFinished);
    }

    #[test]
    fn test_bye_with_empty_pool_is_reported() {
        let mut state = fresh(&["A"]);
        let err = run_one(&mut state, Side::Left).unwrap_err();
        assert!(matches!(err, TourneyError::NoLosersAvailable(_)));
    }

    #[test]
    fn test_resolves_first_undecided_in_pairing_order() {
        let mut state = fresh(&["A", "B", "C", "D"]);
        state.rounds.push(Round::new(vec![
            Match::new("A", "B"),
            Match::new("C", "D"),
        ]));

        let outcome = run_one(&mut state, Side::Left).unwrap();
        let AdvanceOutcome::Decided { left, right, .. } = outcome else {
            panic!("expected a decided match");
        };
        assert_eq!((left.as_str(), right.as_str()), ("A", "B"));
        assert_eq!(state.rounds[0].matches[0].winner.as_deref(), Some("A"));
        assert!(!state.rounds[0].matches[1].is_decided());
        // Next round only appears once the whole round is decided
        assert_eq!(state.rounds.len(), 1);
    }

    #[test]
    fn test_provider_error_leaves_state_undecided() {
        let mut state = fresh(&["A", "B", "C", "D"]);
        state.rounds.push(Round::new(vec![
            Match::new("A", "B"),
            Match::new("C", "D"),
        ]));

        let mut exhausted = ScriptedController::new(Vec::<Side>::new());
        let err = GameLoop::new(&mut state).run_next_match(&mut exhausted);
        assert!(err.is_err());
        assert!(!state.rounds[0].matches[0].is_decided());
    }

    #[test]
    fn test_reentry_fills_bye_before_prompt() {
        let mut state = fresh(&["A", "B", "C"]);
        let mut r0 = Round::new(vec![Match::new("A", "B"), Match::new("C", BYE)]);
        r0.matches[0].decide(Side::Left); // B eliminated
        state.rounds.push(r0);

        let outcome = run_one(&mut state, Side::Right).unwrap();
        let AdvanceOutcome::Decided { left, right, winner, .. } = outcome else {
            panic!("expected a decided match");
        };
        assert_eq!(left, "C");
        assert_eq!(right, "B");
        assert_eq!(winner, "B");
        assert_eq!(state.rounds[0].matches[1].right, "B");
    }
}
