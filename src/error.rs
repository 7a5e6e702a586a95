//! Error types

use thiserror::Error;

/// Errors raised while sorting
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// Two elements had no defined ordering (e.g. a float NaN).
    ///
    /// `left` and `right` are positions in the working buffer at the time
    /// of the failed comparison, not in the caller's input.
    #[error("elements at positions {left} and {right} are not comparable (pass {pass})")]
    Incomparable {
        pass: usize,
        left: usize,
        right: usize,
    },
}

/// Errors raised while loading benchmark configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {var}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

pub type Result<T, E = SortError> = std::result::Result<T, E>;
