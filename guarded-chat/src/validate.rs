//! Answer validation: minimum length and citation presence.

use regex::Regex;

use crate::prompt::SENTINEL;

/// Pattern of a citation marker: `[<text-without-]>#<digits>]`.
const CITE_PATTERN: &str = r"\[[^\]]+#\d+\]";

/// One validation issue tag, in the order issues are checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Issue {
    /// The trimmed answer has fewer than 5 characters.
    EmptyOrTooShort,
    /// A non-sentinel answer carries no citation marker.
    MissingCitations,
}

impl Issue {
    /// Stable tag used in responses and log rows.
    pub fn as_str(&self) -> &'static str {
        match self {
            Issue::EmptyOrTooShort => "empty_or_too_short",
            Issue::MissingCitations => "missing_citations",
        }
    }
}

/// Outcome of validating one answer.
#[derive(Clone, Debug)]
pub struct ValidationResult {
    pub valid: bool,
    pub issues: Vec<Issue>,
}

impl ValidationResult {
    /// The trivially-valid marker used for blocked requests, where no
    /// generation occurred.
    pub fn ok() -> Self {
        Self {
            valid: true,
            issues: Vec::new(),
        }
    }

    /// Comma-joined wire form of the issue tags (`""` when valid).
    pub fn issues_string(&self) -> String {
        self.issues
            .iter()
            .map(Issue::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Validates a generated answer.
///
/// Citations are required unless the answer is exactly the canonical
/// no-information sentinel.
pub fn validate_answer(answer: &str) -> ValidationResult {
    let mut issues = Vec::new();

    if answer.trim().chars().count() < 5 {
        issues.push(Issue::EmptyOrTooShort);
    }

    if answer.trim() != SENTINEL && !has_citation(answer) {
        issues.push(Issue::MissingCitations);
    }

    ValidationResult {
        valid: issues.is_empty(),
        issues,
    }
}

fn has_citation(answer: &str) -> bool {
    let re = Regex::new(CITE_PATTERN).unwrap();
    re.is_match(answer)
}
