//! Library error types.

use thiserror::Error;

/// Errors raised while constructing a filter registry.
///
/// Query rendering itself never fails: values that do not constrain results
/// degrade to a no-op clause instead of an error.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("filter '{0}' is registered twice")]
    DuplicateFilter(String),

    #[error("filter '{0}' can render neither a search clause nor a relational predicate")]
    UnrenderableSpec(String),
}

/// Result type alias using FilterError.
pub type FilterResult<T> = Result<T, FilterError>;
