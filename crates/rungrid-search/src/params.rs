//! Run-length constraint parameters.

use crate::error::SearchError;

/// Run-length constraints for one search.
///
/// `min_run` is the number of consecutive same-direction moves required
/// before a turn is allowed (and before the goal may be accepted); `max_run`
/// is the number allowed before a turn is forced. The first move from the
/// origin is exempt from `min_run`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchParams {
    min_run: u32,
    max_run: u32,
}

impl SearchParams {
    /// Standard run cap: no minimum commitment, at most three straight moves.
    pub const STANDARD: Self = Self {
        min_run: 0,
        max_run: 3,
    };

    /// Committed runs: at least four straight moves before a turn, at most
    /// ten.
    pub const COMMITTED: Self = Self {
        min_run: 4,
        max_run: 10,
    };

    /// Create a parameter pair, rejecting `min_run > max_run`.
    pub fn new(min_run: u32, max_run: u32) -> Result<Self, SearchError> {
        if min_run > max_run {
            return Err(SearchError::InvalidParams { min_run, max_run });
        }
        Ok(Self { min_run, max_run })
    }

    /// Minimum run length before a turn or the goal is permitted.
    #[inline]
    pub fn min_run(&self) -> u32 {
        self.min_run
    }

    /// Maximum run length before a turn is forced.
    #[inline]
    pub fn max_run(&self) -> u32 {
        self.max_run
    }
}
