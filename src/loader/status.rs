//! Text codec for the persisted status file
//!
//! Format: one stanza of 2-3 lines per match (`left`, `right`, optional
//! `winner`); a single blank line between stanzas; two blank lines between
//! round blocks. `#` lines are comments and are dropped before stanza
//! validation, so a hand-edited file can carry notes. The format round-trips
//! losslessly for any name without a newline or a leading `#`.

use crate::core::{Match, Round};
use crate::{Result, TourneyError};
use std::fs;
use std::path::Path;

const ROUND_SEPARATOR: &str = "\n\n\n";
const STANZA_SEPARATOR: &str = "\n\n";

/// How to treat a stanza whose recorded winner is neither side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeMode {
    /// Fail the whole decode (default)
    #[default]
    Strict,
    /// Warn and keep the stanza as written. Useful for salvaging a
    /// hand-edited file.
    Lenient,
}

/// Codec for the status file
pub struct StatusFile;

impl StatusFile {
    /// Load rounds from a status file.
    ///
    /// A missing file is not an error: the tournament simply has not
    /// started. A whitespace-only file decodes the same way.
    pub fn load_from_file(path: &Path, mode: DecodeMode) -> Result<Vec<Round>> {
        if !path.is_file() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(path).map_err(TourneyError::IoError)?;
        Self::parse(&content, mode)
    }

    /// Decode rounds from text content
    pub fn parse(content: &str, mode: DecodeMode) -> Result<Vec<Round>> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(Vec::new());
        }
        trimmed
            .split(ROUND_SEPARATOR)
            .map(|block| Self::parse_round(block, mode))
            .collect()
    }

    fn parse_round(block: &str, mode: DecodeMode) -> Result<Round> {
        let matches = block
            .split(STANZA_SEPARATOR)
            .map(|stanza| Self::parse_match(stanza, mode))
            .collect::<Result<Vec<Match>>>()?;
        Ok(Round::new(matches))
    }

    fn parse_match(stanza: &str, mode: DecodeMode) -> Result<Match> {
        let lines: Vec<&str> = stanza.lines().filter(|l| !l.starts_with('#')).collect();

        if lines.len() < 2 || lines.len() > 3 {
            return Err(TourneyError::CorruptState(format!(
                "expected 2 or 3 lines per match, got {} in:\n{}",
                lines.len(),
                stanza
            )));
        }

        let mut m = Match::new(lines[0], lines[1]);
        if lines.len() == 3 {
            let winner = lines[2];
            if winner != m.left && winner != m.right {
                match mode {
                    DecodeMode::Strict => {
                        return Err(TourneyError::InvalidWinner {
                            left: m.left,
                            right: m.right,
                            winner: winner.to_string(),
                        });
                    }
                    DecodeMode::Lenient => {
                        eprintln!(
                            "warning: winner '{}' is neither '{}' nor '{}'",
                            winner, m.left, m.right
                        );
                    }
                }
            }
            m.winner = Some(winner.to_string());
        }
        Ok(m)
    }

    /// Encode rounds back to text
    pub fn serialize(rounds: &[Round]) -> String {
        let blocks: Vec<String> = rounds
            .iter()
            .map(|round| {
                let stanzas: Vec<String> = round
                    .matches
                    .iter()
                    .map(|m| {
                        let mut lines = vec![m.left.as_str(), m.right.as_str()];
                        if let Some(winner) = m.winner.as_deref() {
                            lines.push(winner);
                        }
                        lines.join("\n")
                    })
                    .collect();
                stanzas.join(STANZA_SEPARATOR)
            })
            .collect();
        let mut out = blocks.join(ROUND_SEPARATOR);
        out.push('\n');
        out
    }

    /// Write the full state in one shot.
    ///
    /// Called exactly once per invocation, after the decision has fully
    /// applied; an aborted run never reaches this point.
    pub fn save_to_file(rounds: &[Round], path: &Path) -> Result<()> {
        fs::write(path, Self::serialize(rounds)).map_err(TourneyError::IoError)
    }
}
