//! Error types for the search engine.

use thiserror::Error;

/// Errors produced by a search invocation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The frontier drained without reaching the goal: no feasible path
    /// exists under the given run constraints.
    #[error("no feasible path under the given run constraints")]
    NoPath,

    /// Rejected parameter pair (`min_run` must not exceed `max_run`).
    #[error("invalid search parameters: min_run {min_run} exceeds max_run {max_run}")]
    InvalidParams { min_run: u32, max_run: u32 },
}
