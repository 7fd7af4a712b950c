//! Resume text validation and cleanup
//!
//! Validation rejects input before the analysis pipeline runs: text must be
//! at least 50 characters and match at least 2 of 4 resume indicators.

use crate::error::{Result, ResumeInsightError};
use regex::Regex;

const MIN_RESUME_CHARS: usize = 50;
const MIN_INDICATOR_MATCHES: usize = 2;

const INDICATOR_PATTERNS: &[&str] = &[
    r"(?i)\b(?:experience|education|skills|projects|work)\b",
    r"\b\d{4}\b",
    r"@",
    r"(?i)\b(?:university|college|institute|school)\b",
];

/// Normalize extracted text: collapse whitespace runs, drop control
/// characters, unify line breaks.
pub fn clean_text(text: &str) -> String {
    let without_controls: String = text
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\r' || *c == '\t')
        .collect();

    let normalized = without_controls.replace("\r\n", "\n").replace('\r', "\n");

    normalized
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

/// Check that text plausibly is a resume.
pub fn validate_resume(text: &str) -> Result<()> {
    if text.chars().count() < MIN_RESUME_CHARS {
        return Err(ResumeInsightError::ValidationFailed(
            "Text too short to be a valid resume".to_string(),
        ));
    }

    let matches = INDICATOR_PATTERNS
        .iter()
        .filter(|pattern| {
            Regex::new(pattern)
                .map(|re| re.is_match(text))
                .unwrap_or(false)
        })
        .count();

    if matches < MIN_INDICATOR_MATCHES {
        return Err(ResumeInsightError::ValidationFailed(
            "Content doesn't appear to be a resume. Please provide a valid resume file."
                .to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_fails_validation() {
        // A 20-word text under 50 characters must be rejected
        let err = validate_resume("a b c d e f g h i j").unwrap_err();
        assert!(matches!(
            err,
            ResumeInsightError::ValidationFailed(_)
        ));
    }

    #[test]
    fn non_resume_text_fails_indicator_check() {
        let text = "The quick brown fox jumps over the lazy dog again and again and again.";
        assert!(validate_resume(text).is_err());
    }

    #[test]
    fn resume_like_text_passes() {
        let text = "Work experience since 2019 at Acme Corp. Contact: jane@example.com. \
                    Education at State University.";
        assert!(validate_resume(text).is_ok());
    }

    #[test]
    fn two_indicators_are_enough() {
        // "experience" keyword + a 4-digit year
        let text = "Ten years of experience in data engineering, starting back in 2014, \
                    with plenty more detail to pass the length bar.";
        assert!(validate_resume(text).is_ok());
    }

    #[test]
    fn clean_text_collapses_whitespace_and_controls() {
        let cleaned = clean_text("line one\r\n\r\n\r\n   line\ttwo\x07");
        assert_eq!(cleaned, "line one line two");
    }
}
