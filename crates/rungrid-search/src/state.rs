//! The search-node representation.

use rungrid_core::{Direction, Point};

/// A search node: position, direction of the last move, current run length,
/// and accumulated path cost.
///
/// Invariants: `heading` is `None` and `run` is `0` only for the origin
/// state; every other state carries the direction of the move that produced
/// it and a run length of at least 1. `cost` includes the entry cost of
/// `pos` (the origin cell is never charged).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RunState {
    pub pos: Point,
    pub heading: Option<Direction>,
    pub run: u32,
    pub cost: u32,
}

impl RunState {
    /// The initial state at the top-left cell: no move taken yet, cost 0.
    pub const fn origin() -> Self {
        Self {
            pos: Point::ZERO,
            heading: None,
            run: 0,
            cost: 0,
        }
    }
}

/// Frontier entry, ordered by `cost` for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct OpenState {
    pub(crate) state: RunState,
}

impl Ord for OpenState {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the lowest cost first.
        other.state.cost.cmp(&self.state.cost)
    }
}

impl PartialOrd for OpenState {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
