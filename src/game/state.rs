//! Tournament state: rounds played so far plus the RNG driving shuffles
//!
//! All randomness (initial seeding, loser-pool ordering) flows through the
//! state's ChaCha12 RNG so a fixed seed reproduces an entire tournament.

use crate::core::{Match, Phase, Round, BYE};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

/// Full tournament state for one invocation
///
/// `title` and `candidates` come from the description file and are never
/// mutated; `rounds` is what the status file persists.
#[derive(Debug)]
pub struct TourneyState {
    pub title: String,
    pub candidates: Vec<String>,
    pub rounds: Vec<Round>,
    rng: ChaCha12Rng,
}

impl TourneyState {
    pub fn new(title: String, candidates: Vec<String>, rounds: Vec<Round>) -> Self {
        TourneyState {
            title,
            candidates,
            rounds,
            rng: ChaCha12Rng::from_entropy(),
        }
    }

    /// Re-seed the RNG for deterministic runs
    pub fn seed_rng(&mut self, seed: u64) {
        self.rng = ChaCha12Rng::seed_from_u64(seed);
    }

    /// Lifecycle phase derived from the round list
    pub fn phase(&self) -> Phase {
        match self.rounds.last() {
            None => Phase::NotStarted,
            Some(last) if !last.is_complete() => Phase::InProgress,
            Some(last) if last.len() == 1 => Phase::Finished,
            Some(_) => Phase::RoundComplete,
        }
    }

    /// The round currently being played (the last one)
    pub fn current_round(&self) -> Option<&Round> {
        self.rounds.last()
    }

    /// Build round 0: shuffle the candidate list, pad an odd count with a
    /// bye slot, pair consecutive entries.
    pub fn build_first_round(&mut self) {
        let mut seeding = self.candidates.clone();
        seeding.shuffle(&mut self.rng);
        if seeding.len() % 2 != 0 {
            seeding.push(BYE.to_string());
        }
        let matches = seeding
            .chunks(2)
            .map(|pair| Match::new(pair[0].as_str(), pair[1].as_str()))
            .collect();
        self.rounds.push(Round::new(matches));
    }

    /// Derive the next round from a fully-decided round by pairing
    /// consecutive winners. An odd match count leaves the final winner
    /// against a bye slot, to be filled from the loser pool.
    pub fn build_next_round(previous: &Round) -> Round {
        debug_assert!(previous.is_complete());
        let winners: Vec<&str> = previous
            .matches
            .iter()
            .filter_map(|m| m.winner.as_deref())
            .collect();
        let matches = winners
            .chunks(2)
            .map(|pair| {
                let left = pair[0];
                let right = pair.get(1).copied().unwrap_or(BYE);
                Match::new(left, right)
            })
            .collect();
        Round::new(matches)
    }

    /// Eliminated candidates eligible to fill a bye slot, shuffled.
    ///
    /// Only the first recorded loss counts: the traversal dedupes, so a
    /// candidate appears at most once no matter how many matches they lost.
    /// `exception` (the bye match's own left side) and the bye sentinel are
    /// never included. The advancer always takes element 0, so the shuffle
    /// is what makes the re-entry pick uniform.
    pub fn loser_pool(&mut self, exception: &str) -> Vec<String> {
        let mut pool: Vec<String> = Vec::new();
        for round in &self.rounds {
            for m in &round.matches {
                let Some(loser) = m.loser() else { continue };
                if loser == exception || loser == BYE {
                    continue;
                }
                if pool.iter().any(|p| p == loser) {
                    continue;
                }
                pool.push(loser.to_string());
            }
        }
        pool.shuffle(&mut self.rng);
        pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Side;

    fn state_with(candidates: &[&str]) -> TourneyState {
        let mut state = TourneyState::new(
            "Test Cup".to_string(),
            candidates.iter().map(|c| c.to_string()).collect(),
            Vec::new(),
        );
        state.seed_rng(42);
        state
    }

    #[test]
    fn test_first_round_even_count() {
        let mut state = state_with(&["A", "B", "C", "D"]);
        state.build_first_round();
        let round = state.current_round().unwrap();
        assert_eq!(round.len(), 2);

        let mut seen: Vec<&str> = round
            .matches
            .iter()
            .flat_map(|m| [m.left.as_str(), m.right.as_str()])
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, ["A", "B", "C", "D"]);
        assert!(round.matches.iter().all(|m| !m.is_decided()));
    }

    #[test]
    fn test_first_round_odd_count_pads_with_bye() {
        let mut state = state_with(&["A", "B", "C"]);
        state.build_first_round();
        let round = state.current_round().unwrap();
        assert_eq!(round.len(), 2);

        let byes = round.matches.iter().filter(|m| m.right == BYE).count();
        assert_eq!(byes, 1);
        // The bye is always the padded final entry
        assert_eq!(round.matches[1].right, BYE);
    }

    #[test]
    fn test_first_round_is_seed_deterministic() {
        let mut a = state_with(&["A", "B", "C", "D", "E"]);
        let mut b = state_with(&["A", "B", "C", "D", "E"]);
        a.build_first_round();
        b.build_first_round();
        assert_eq!(a.rounds, b.rounds);
    }

    #[test]
    fn test_next_round_even_pairs_winners_in_order() {
        let mut round = Round::new(vec![
            Match::new("A", "B"),
            Match::new("C", "D"),
            Match::new("E", "F"),
            Match::new("G", "H"),
        ]);
        for m in &mut round.matches {
            m.decide(Side::Left);
        }
        let next = TourneyState::build_next_round(&round);
        assert_eq!(next.len(), 2);
        assert_eq!(next.matches[0], Match::new("A", "C"));
        assert_eq!(next.matches[1], Match::new("E", "G"));
    }

    #[test]
    fn test_next_round_odd_leaves_trailing_bye() {
        let mut round = Round::new(vec![
            Match::new("A", "B"),
            Match::new("C", "D"),
            Match::new("E", "F"),
        ]);
        for m in &mut round.matches {
            m.decide(Side::Right);
        }
        let next = TourneyState::build_next_round(&round);
        assert_eq!(next.len(), 2);
        assert_eq!(next.matches[0], Match::new("B", "D"));
        assert_eq!(next.matches[1], Match::new("F", BYE));
    }

    #[test]
    fn test_loser_pool_excludes_exception_and_bye() {
        let mut state = state_with(&["A", "B", "C"]);
        let mut r0 = Round::new(vec![Match::new("A", "B"), Match::new("C", BYE)]);
        r0.matches[0].decide(Side::Left); // B loses
        state.rounds.push(r0);

        let pool = state.loser_pool("C");
        assert_eq!(pool, ["B"]);
        // B drawn as C's opponent must not offer C to itself
        assert!(!pool.contains(&"C".to_string()));
        assert!(!pool.contains(&BYE.to_string()));
    }

    #[test]
    fn test_loser_pool_counts_first_loss_only() {
        let mut state = state_with(&["A", "B", "C", "D"]);
        let mut r0 = Round::new(vec![Match::new("A", "B"), Match::new("C", "D")]);
        r0.matches[0].decide(Side::Left); // B loses
        r0.matches[1].decide(Side::Left); // D loses
        let mut r1 = Round::new(vec![Match::new("A", "B")]); // B re-entered
        r1.matches[0].decide(Side::Left); // B loses again
        state.rounds.push(r0);
        state.rounds.push(r1);

        let mut pool = state.loser_pool("");
        pool.sort_unstable();
        assert_eq!(pool, ["B", "D"]);
    }

    #[test]
    fn test_loser_pool_empty_before_any_decision() {
        let mut state = state_with(&["A", "B", "C"]);
        state.build_first_round();
        assert!(state.loser_pool("A").is_empty());
    }

    #[test]
    fn test_phase_transitions() {
        let mut state = state_with(&["A", "B", "C", "D"]);
        assert_eq!(state.phase(), Phase::NotStarted);

        state.build_first_round();
        assert_eq!(state.phase(), Phase::InProgress);

        for m in &mut state.rounds.last_mut().unwrap().matches {
            m.decide(Side::Left);
        }
        assert_eq!(state.phase(), Phase::RoundComplete);

        let next = TourneyState::build_next_round(state.current_round().unwrap());
        state.rounds.push(next);
        assert_eq!(state.phase(), Phase::InProgress);

        state.rounds.last_mut().unwrap().matches[0].decide(Side::Right);
        assert_eq!(state.phase(), Phase::Finished);
    }
}
