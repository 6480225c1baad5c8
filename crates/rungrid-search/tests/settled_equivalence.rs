//! Randomized equivalence check for the batch settled-range optimization.
//!
//! The engine retires the whole remaining run span `[run, max_run]` whenever
//! it settles a state with `run >= min_run`. This test pits that engine
//! against a reference search that settles exact keys only, on randomized
//! small grids and parameter pairs: both must agree on the minimal cost (or
//! on the absence of a path). The reference loop also asserts that popped
//! costs are non-decreasing.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use proptest::prelude::*;

use rungrid_core::{CostGrid, Direction, Point};
use rungrid_search::{RunState, SearchParams, min_run_cost, try_step};

#[derive(PartialEq, Eq)]
struct Open(RunState);

impl Ord for Open {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.cost.cmp(&self.0.cost)
    }
}

impl PartialOrd for Open {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Best-first search identical to the engine except that it settles only the
/// exact `(cell, direction, run)` key of each popped state.
fn exact_settle_min_cost(grid: &CostGrid, params: SearchParams) -> Option<u32> {
    let goal = Point::new(grid.width() - 1, grid.height() - 1);
    if goal == Point::ZERO {
        return Some(0);
    }

    let mut settled: HashSet<(Point, Direction, u32)> = HashSet::new();
    let mut open = BinaryHeap::new();
    open.push(Open(RunState::origin()));

    let mut last_cost = 0u32;
    while let Some(Open(cur)) = open.pop() {
        assert!(cur.cost >= last_cost, "popped costs must be non-decreasing");
        last_cost = cur.cost;

        if let Some(dir) = cur.heading {
            if !settled.insert((cur.pos, dir, cur.run)) {
                continue;
            }
        }

        if cur.pos == goal && cur.run >= params.min_run() {
            return Some(cur.cost);
        }

        for dir in Direction::ALL {
            if let Some(next) = try_step(grid, &cur, dir, params) {
                open.push(Open(next));
            }
        }
    }

    None
}

fn arb_grid() -> impl Strategy<Value = CostGrid> {
    (1usize..6, 1usize..6)
        .prop_flat_map(|(w, h)| prop::collection::vec(prop::collection::vec(0u32..10, w), h))
        .prop_map(|rows| CostGrid::from_rows(rows).unwrap())
}

fn arb_params() -> impl Strategy<Value = SearchParams> {
    (0u32..4, 0u32..4).prop_map(|(min_run, extra)| {
        SearchParams::new(min_run, (min_run + extra).max(1)).unwrap()
    })
}

proptest! {
    #[test]
    fn batch_settling_matches_exact_settling(grid in arb_grid(), params in arb_params()) {
        let batch = min_run_cost(&grid, params).ok();
        let exact = exact_settle_min_cost(&grid, params);
        prop_assert_eq!(batch, exact);
    }
}
