//! Personal data screening of column names.
//!
//! Exports from quiz tools often carry roster columns (names, emails) next to
//! the scores. The guard inspects column *names* only and rejects the upload
//! if any of them looks like personal data, unless the column is one of the
//! allowed student identifier spellings.
//!
//! Names are normalized before matching: trimmed, lowercased, underscores
//! turned into spaces and whitespace runs collapsed. `"Student_Assessment_ID"`
//! therefore reads as `"student assessment id"`.

use std::sync::LazyLock;

use assess_model::PiiVerdict;
use regex::Regex;

/// Student identifier spellings that are never flagged.
static ALLOW_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\bstudent id\b",
        r"(?i)\bstudent assessment id\b",
        r"(?i)\bstudentid\b",
        r"(?i)\bsid\b",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("Invalid allow pattern"))
    .collect()
});

/// Block rules in evaluation order.
static BLOCK_RULES: LazyLock<Vec<BlockRule>> = LazyLock::new(|| {
    vec![
        BlockRule::new("email", r"(?i)\b(email|e mail|e-mail)\b"),
        BlockRule::new("phone", r"(?i)\b(phone|mobile|cell)\b"),
        BlockRule::new(
            "ssn",
            r"(?i)\b(ssn|social security|social security number)\b",
        ),
        BlockRule::new(
            "address",
            r"(?i)\b(address|street|st|ave|road|rd|apartment|apt|unit)\b",
        ),
        BlockRule::new(
            "name",
            r"(?i)\b(first name|last name|full name|student name|guardian)\b",
        ),
        BlockRule::new(
            "date_of_birth",
            r"(?i)\b(dob|date of birth|birth date)\b",
        ),
    ]
});

struct BlockRule {
    name: &'static str,
    regex: Regex,
}

impl BlockRule {
    fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            regex: Regex::new(pattern).expect("Invalid block pattern"),
        }
    }
}

/// Column-name screen against the built-in allow and block rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct PiiGuard;

impl PiiGuard {
    pub fn new() -> Self {
        Self
    }

    /// Screens every column and lists the flagged ones.
    pub fn check<S: AsRef<str>>(&self, columns: &[S]) -> PiiVerdict {
        let mut offending = Vec::new();
        for column in columns {
            let column = column.as_ref();
            if let Some(rule) = self.flag_reason(column) {
                tracing::debug!(column, rule, "column flagged as personal data");
                offending.push(column.to_string());
            }
        }
        PiiVerdict::from_offending(offending)
    }

    /// Name of the first block rule matching `column`, or `None` when the
    /// column is allowed or matches nothing.
    pub fn flag_reason(&self, column: &str) -> Option<&'static str> {
        let normalized = normalize_column_name(column);
        if is_allowed(&normalized) {
            return None;
        }
        BLOCK_RULES
            .iter()
            .find(|rule| rule.regex.is_match(&normalized))
            .map(|rule| rule.name)
    }
}

/// Screens column names with the default guard.
pub fn check<S: AsRef<str>>(columns: &[S]) -> PiiVerdict {
    PiiGuard::new().check(columns)
}

fn is_allowed(normalized: &str) -> bool {
    ALLOW_PATTERNS.iter().any(|regex| regex.is_match(normalized))
}

/// Lowercases, maps underscores to spaces and collapses whitespace.
fn normalize_column_name(raw: &str) -> String {
    raw.to_lowercase()
        .replace('_', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
