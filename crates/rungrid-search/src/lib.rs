//! Best-first shortest-path search on weighted grids with run-length
//! constraints.
//!
//! The engine finds the minimum total cost of a path from the top-left cell
//! of a [`CostGrid`](rungrid_core::CostGrid) to the bottom-right cell, where
//! every move is one cardinal step and runs of consecutive same-direction
//! moves are constrained by a [`SearchParams`] pair:
//!
//! - a move may never exactly reverse the previous one;
//! - after `max_run` straight moves the path **must** turn;
//! - before `min_run` straight moves the path **may not** turn (the first
//!   move from the origin is exempt), and the goal only counts once the
//!   current run has reached `min_run`.
//!
//! Searches run through [`RunRange`], which owns and reuses the settled-state
//! cache so repeated queries incur no allocations after warm-up, or through
//! the one-shot [`min_run_cost`] convenience function.
//!
//! ```
//! use rungrid_core::CostGrid;
//! use rungrid_search::{SearchParams, min_run_cost};
//!
//! let grid = CostGrid::parse("11\n11").unwrap();
//! let params = SearchParams::new(0, 1).unwrap();
//! assert_eq!(min_run_cost(&grid, params), Ok(2));
//! ```

mod error;
mod params;
mod runrange;
mod state;
mod transitions;

pub use error::SearchError;
pub use params::SearchParams;
pub use runrange::{RunRange, min_run_cost};
pub use state::RunState;
pub use transitions::{successors, try_step};
