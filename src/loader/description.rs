//! Description file loader
//!
//! The description is the read-only input defining the tournament: first
//! surviving line is the title, every further line a candidate name. Blank
//! lines and `#` comments are dropped.

use crate::core::BYE;
use crate::{Result, TourneyError};
use std::fs;
use std::path::Path;

/// Parsed tournament description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description {
    pub title: String,
    pub candidates: Vec<String>,
}

/// Loader for description files
pub struct DescriptionLoader;

impl DescriptionLoader {
    /// Load a description from a file
    pub fn load_from_file(path: &Path) -> Result<Description> {
        let content = fs::read_to_string(path).map_err(TourneyError::IoError)?;
        Self::parse(&content)
    }

    /// Parse a description from its text content
    pub fn parse(content: &str) -> Result<Description> {
        let lines: Vec<&str> = content
            .lines()
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect();

        if lines.len() < 2 {
            return Err(TourneyError::InvalidDescription(
                "expected a title line and at least one candidate".to_string(),
            ));
        }

        let title = lines[0].to_string();
        let candidates: Vec<String> = lines[1..].iter().map(|s| s.to_string()).collect();

        // The bye sentinel must never collide with a real candidate
        if let Some(reserved) = candidates.iter().find(|c| c.as_str() == BYE) {
            return Err(TourneyError::ReservedNameConflict(reserved.clone()));
        }

        Ok(Description { title, candidates })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_description() {
        let content = "Best Album\nKind of Blue\nA Love Supreme\nMingus Ah Um\n";
        let desc = DescriptionLoader::parse(content).unwrap();
        assert_eq!(desc.title, "Best Album");
        assert_eq!(
            desc.candidates,
            ["Kind of Blue", "A Love Supreme", "Mingus Ah Um"]
        );
    }

    #[test]
    fn test_parse_drops_comments_and_blanks() {
        let content = "# tournament of records\nBest Album\n\n# contenders\nA\nB\n";
        let desc = DescriptionLoader::parse(content).unwrap();
        assert_eq!(desc.title, "Best Album");
        assert_eq!(desc.candidates, ["A", "B"]);
    }

    #[test]
    fn test_too_short_description() {
        assert!(matches!(
            DescriptionLoader::parse("Only a title\n"),
            Err(TourneyError::InvalidDescription(_))
        ));
        assert!(matches!(
            DescriptionLoader::parse(""),
            Err(TourneyError::InvalidDescription(_))
        ));
    }

    #[test]
    fn test_reserved_candidate_name() {
        let content = "Title\nA\nNone\nB\n";
        assert!(matches!(
            DescriptionLoader::parse(content),
            Err(TourneyError::ReservedNameConflict(name)) if name == "None"
        ));
    }
}
