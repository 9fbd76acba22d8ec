//! Error taxonomy for parsing, formulation, solving, and validation

use thiserror::Error;

/// Everything that can go wrong between a raw puzzle line and a validated
/// press count. None of these are recovered from: the first error aborts the
/// whole batch, since a partially summed answer would be silently wrong.
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("no {{...}} target section in line: {line}")]
    MissingTarget { line: String },

    #[error("unmatched '(' in line: {line}")]
    UnmatchedParen { line: String },

    #[error("unmatched '[' in line: {line}")]
    UnmatchedBracket { line: String },

    #[error("invalid pattern character {found:?}, expected '.' or '#'")]
    BadPatternChar { found: char },

    #[error("invalid integer {token:?}")]
    BadInteger { token: String },

    #[error("empty {section} section in line: {line}")]
    EmptySection { section: &'static str, line: String },

    #[error("line has no [...] pattern section, required in parity mode")]
    MissingPattern,

    #[error("counter index {index} out of range, machine has {counters} counters")]
    IndexOutOfRange { index: usize, counters: usize },

    #[error("solver did not reach an optimal solution: {0}")]
    SolverFailure(String),

    #[error("solver returned non-integral value {value} for button {button}")]
    NonIntegral { button: usize, value: f64 },

    #[error("rounded solution misses counter {counter}: got {actual}, target {expected}")]
    TargetMismatch {
        counter: usize,
        expected: i64,
        actual: i64,
    },
}
