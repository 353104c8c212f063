//! Scripted controller with predetermined choices
//!
//! Answers each decision from a fixed list of sides. Used by tests and by
//! the CLI's non-interactive `--choose` flag. Running out of scripted
//! choices is an `InvalidSelection`, not a silent default.

use crate::core::Side;
use crate::game::controller::{DecisionProvider, MatchView};
use crate::{Result, TourneyError};
use std::collections::VecDeque;

/// A controller that replays a predetermined choice sequence
pub struct ScriptedController {
    choices: VecDeque<Side>,
}

impl ScriptedController {
    pub fn new(choices: impl IntoIterator<Item = Side>) -> Self {
        ScriptedController {
            choices: choices.into_iter().collect(),
        }
    }

    /// Choices not yet consumed
    pub fn remaining(&self) -> usize {
        self.choices.len()
    }
}

impl DecisionProvider for ScriptedController {
    fn choose_winner(&mut self, _view: &MatchView) -> Result<Side> {
        self.choices
            .pop_front()
            .ok_or_else(|| TourneyError::InvalidSelection("script exhausted".to_string()))
    }
}
