//! Outcome classification into stable error buckets.

use crate::types::{AbsenceReason, ResolutionOutcome};

/// Categorical error label for one resolution outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorLabel {
    /// Provider failure that looks like an unhandled crash.
    Crash,
    /// Provider failure bucketed by its short message (the text before the
    /// first colon).
    ShortMessage(String),
    /// No candidate came back at all.
    NoneReturned,
    /// The candidate was not a structured field set.
    WrongFormat,
    /// A candidate came back with at least one of the four fields absent.
    MissingFields,
    NoError,
}

impl std::fmt::Display for ErrorLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Crash => write!(f, "Crash"),
            Self::ShortMessage(message) => write!(f, "{message}"),
            Self::NoneReturned => write!(f, "None returned"),
            Self::WrongFormat => write!(f, "Wrong format"),
            Self::MissingFields => write!(f, "Missing fields"),
            Self::NoError => write!(f, "No error"),
        }
    }
}

/// Classify one outcome. First match wins:
///
/// 1. Provider failures: `Crash` when the description smells like an
///    unhandled error, otherwise the short message. The truncation rule
///    (text before the first colon, whole text when there is none) is kept
///    as-is so existing report buckets stay stable.
/// 2. Any other absence is `None returned`.
/// 3. A candidate missing any of the four fields is `Missing fields`.
/// 4. Everything else is `No error`.
pub fn classify(outcome: &ResolutionOutcome) -> ErrorLabel {
    match outcome {
        ResolutionOutcome::Absent(AbsenceReason::Failure(description)) => {
            if description.contains("Traceback") || mentions_error_word(description) {
                ErrorLabel::Crash
            } else {
                let short = description
                    .split(':')
                    .next()
                    .unwrap_or(description)
                    .to_string();
                ErrorLabel::ShortMessage(short)
            }
        }
        ResolutionOutcome::Absent(_) => ErrorLabel::NoneReturned,
        ResolutionOutcome::Resolved(candidate) => {
            if candidate.missing_fields().is_empty() {
                ErrorLabel::NoError
            } else {
                ErrorLabel::MissingFields
            }
        }
    }
}

/// "Error" as a standalone word marks an unhandled crash; typed failure
/// names like `ConnectionError` must keep their own bucket instead.
fn mentions_error_word(description: &str) -> bool {
    description
        .split(|c: char| !c.is_alphanumeric())
        .any(|word| word == "Error")
}
