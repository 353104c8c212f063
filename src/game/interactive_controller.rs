//! Interactive controller for terminal play
//!
//! Prompts on stdout with a `1`/`2` menu and reads the decision from stdin.
//! Anything other than a valid side is a fatal `InvalidSelection`: the
//! invocation aborts and the status file is left untouched.

use crate::core::Side;
use crate::game::controller::{DecisionProvider, MatchView};
use crate::game::preview;
use crate::{Result, TourneyError};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// A controller that prompts a human for decisions via stdin
pub struct InteractiveController {
    /// Directory with per-candidate images for the optional match preview
    images_dir: Option<PathBuf>,
}

impl InteractiveController {
    pub fn new() -> Self {
        InteractiveController { images_dir: None }
    }

    pub fn with_images(images_dir: Option<PathBuf>) -> Self {
        InteractiveController { images_dir }
    }
}

impl Default for InteractiveController {
    fn default() -> Self {
        Self::new()
    }
}

impl DecisionProvider for InteractiveController {
    fn choose_winner(&mut self, view: &MatchView) -> Result<Side> {
        if let Some(dir) = &self.images_dir {
            // Cosmetic; silently skipped when images or the tool are absent
            if let Some(path) = preview::compose_preview(dir, view.left, view.right) {
                println!("match preview: {}", path.display());
            }
        }

        print!(
            "{}\n1. {}\n2. {}\nPlease select: ",
            view.title, view.left, view.right
        );
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().lock().read_line(&mut input)?;

        parse_selection(input.trim())
    }

    fn on_reentry(&mut self, entrant: &str, pool: &[String]) {
        println!("{} comes up from the losers ({})\n", entrant, pool.join(", "));
    }
}

/// Parse a terminal selection: `1`/`2` menu numbers, with `left`/`right`
/// accepted as spelled-out aliases.
pub fn parse_selection(input: &str) -> Result<Side> {
    match input {
        "1" | "left" => Ok(Side::Left),
        "2" | "right" => Ok(Side::Right),
        other => Err(TourneyError::InvalidSelection(other.to_string())),
    }
}
