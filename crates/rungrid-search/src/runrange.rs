//! The best-first search driver and its settled-state cache.

use std::collections::BinaryHeap;

use rungrid_core::{CostGrid, Direction, Point};

use crate::error::SearchError;
use crate::params::SearchParams;
use crate::state::{OpenState, RunState};
use crate::transitions;

/// Coordinator for run-constrained searches.
///
/// `RunRange` owns the settled-key cache so that repeated searches reuse its
/// allocation: a generation counter invalidates every stale entry in O(1)
/// between runs, and the backing vector is only reallocated when a larger
/// grid or run span arrives. Results never leak from one search into the
/// next.
pub struct RunRange {
    width: usize,
    height: usize,
    // settled keys per (cell, direction): the run span of the last search
    run_span: usize,
    // generation stamps indexed by key(); equal to `generation` = settled
    settled: Vec<u32>,
    generation: u32,
    // shared scratch buffer for successor queries
    sbuf: Vec<RunState>,
}

impl Default for RunRange {
    fn default() -> Self {
        Self::new()
    }
}

impl RunRange {
    /// Create an empty `RunRange`; the settled cache is sized on first use.
    pub fn new() -> Self {
        Self {
            width: 0,
            height: 0,
            run_span: 0,
            settled: Vec::new(),
            generation: 0,
            sbuf: Vec::with_capacity(4),
        }
    }

    /// Size the settled cache for `grid` and `params`, invalidating any
    /// stale entries from a previous search.
    fn reset(&mut self, grid: &CostGrid, params: SearchParams) {
        self.width = grid.width() as usize;
        self.height = grid.height() as usize;
        self.run_span = (params.max_run() as usize).max(1);
        let len = self.width * self.height * 4 * self.run_span;

        if len <= self.settled.len() {
            // Fits within existing capacity — bump the generation so stale
            // entries are ignored, no reallocation needed.
            self.generation = self.generation.wrapping_add(1);
            if self.generation == 0 {
                // Wrapped: stamps from 2^32 searches ago could alias.
                self.settled.fill(0);
                self.generation = 1;
            }
        } else {
            self.settled.clear();
            self.settled.resize(len, 0);
            self.generation = 1;
        }
    }

    // -----------------------------------------------------------------------
    // Settled-key bookkeeping
    // -----------------------------------------------------------------------

    /// Flat index of the `(cell, direction, run)` dominance key. `run` is in
    /// `1..=max_run`; the origin state has no key.
    #[inline]
    fn key(&self, pos: Point, dir: Direction, run: u32) -> usize {
        let cell = (pos.y as usize) * self.width + pos.x as usize;
        (cell * 4 + dir.index()) * self.run_span + (run as usize - 1)
    }

    #[inline]
    fn is_settled(&self, pos: Point, dir: Direction, run: u32) -> bool {
        self.settled[self.key(pos, dir, run)] == self.generation
    }

    #[inline]
    fn mark_settled(&mut self, pos: Point, dir: Direction, run: u32) {
        let k = self.key(pos, dir, run);
        self.settled[k] = self.generation;
    }

    fn mark_settled_span(&mut self, pos: Point, dir: Direction, from: u32, to: u32) {
        for run in from..=to {
            self.mark_settled(pos, dir, run);
        }
    }

    // -----------------------------------------------------------------------
    // Driver
    // -----------------------------------------------------------------------

    /// Minimum total cost of a valid path from the top-left cell to the
    /// bottom-right cell of `grid` under `params`.
    ///
    /// The cost of a path is the sum of the entry costs of every cell it
    /// moves into; the origin cell is never charged. A 1×1 grid returns
    /// `Ok(0)`: the goal is the origin, no move is needed, and the run
    /// constraint binds nothing.
    ///
    /// Errors with [`SearchError::NoPath`] if the frontier drains without
    /// reaching the goal at a run length of at least `min_run`.
    pub fn min_cost(&mut self, grid: &CostGrid, params: SearchParams) -> Result<u32, SearchError> {
        let goal = Point::new(grid.width() - 1, grid.height() - 1);
        if goal == Point::ZERO {
            return Ok(0);
        }

        self.reset(grid, params);
        log::debug!(
            "run search start: {}x{} grid, min_run={}, max_run={}",
            grid.width(),
            grid.height(),
            params.min_run(),
            params.max_run(),
        );

        let mut open: BinaryHeap<OpenState> = BinaryHeap::new();
        open.push(OpenState {
            state: RunState::origin(),
        });

        let mut sbuf = std::mem::take(&mut self.sbuf);
        let mut expanded = 0usize;

        while let Some(OpenState { state: cur }) = open.pop() {
            if let Some(dir) = cur.heading {
                if self.is_settled(cur.pos, dir, cur.run) {
                    continue;
                }
                self.mark_settled(cur.pos, dir, cur.run);
                if cur.run >= params.min_run() {
                    // A pop at run length r >= min_run also fixes the minimal
                    // cost for every longer run at this cell and direction:
                    // a longer run only removes move options.
                    self.mark_settled_span(cur.pos, dir, cur.run + 1, params.max_run());
                }
            }

            if cur.pos == goal && cur.run >= params.min_run() {
                self.sbuf = sbuf;
                log::debug!(
                    "goal reached: cost={} after {} expansions",
                    cur.cost,
                    expanded
                );
                return Ok(cur.cost);
            }

            expanded += 1;
            sbuf.clear();
            transitions::successors(grid, &cur, params, &mut sbuf);
            for &next in sbuf.iter() {
                open.push(OpenState { state: next });
            }
        }

        self.sbuf = sbuf;
        log::debug!("frontier drained after {} expansions: no path", expanded);
        Err(SearchError::NoPath)
    }
}

/// One-shot search with a fresh [`RunRange`].
pub fn min_run_cost(grid: &CostGrid, params: SearchParams) -> Result<u32, SearchError> {
    RunRange::new().min_cost(grid, params)
}

#[cfg(test)]
mod tests {
    use super::*;

    // 13x13 sample grid exercising both parameter presets.
    const SAMPLE: &str = "\
2413432311323
3215453535623
3255245654254
3446585845452
4546657867536
1438598798454
4457876987766
3637877979653
4654967986887
4564679986453
1224686865563
2546548887735
4322674655533";

    #[test]
    fn standard_run_cap_on_the_sample_grid() {
        let grid = CostGrid::parse(SAMPLE).unwrap();
        assert_eq!(min_run_cost(&grid, SearchParams::STANDARD), Ok(102));
    }

    #[test]
    fn committed_runs_on_the_sample_grid() {
        let grid = CostGrid::parse(SAMPLE).unwrap();
        assert_eq!(min_run_cost(&grid, SearchParams::COMMITTED), Ok(94));
    }

    #[test]
    fn forced_alternation_on_a_two_by_two() {
        // max_run = 1 forces a turn after every move: one right + one down,
        // entry costs only.
        let grid = CostGrid::parse("11\n11").unwrap();
        let params = SearchParams::new(0, 1).unwrap();
        assert_eq!(min_run_cost(&grid, params), Ok(2));
    }

    #[test]
    fn single_cell_grid_costs_nothing() {
        let grid = CostGrid::parse("5").unwrap();
        assert_eq!(min_run_cost(&grid, SearchParams::STANDARD), Ok(0));
        assert_eq!(min_run_cost(&grid, SearchParams::COMMITTED), Ok(0));
    }

    #[test]
    fn unsatisfiable_floor_reports_no_path() {
        // The goal is one step away, so every path reaches it with run 1,
        // below the committed floor of 4.
        let grid = CostGrid::parse("11").unwrap();
        assert_eq!(
            min_run_cost(&grid, SearchParams::COMMITTED),
            Err(SearchError::NoPath)
        );
    }

    #[test]
    fn goal_requires_the_minimum_run() {
        // 5x1 strip: with min_run 4 the only valid path is four straight
        // moves to the right.
        let grid = CostGrid::parse("12345").unwrap();
        let params = SearchParams::new(4, 10).unwrap();
        assert_eq!(min_run_cost(&grid, params), Ok(2 + 3 + 4 + 5));
        // A 4x1 strip reaches the goal at run 3 only.
        let short = CostGrid::parse("1234").unwrap();
        assert_eq!(min_run_cost(&short, params), Err(SearchError::NoPath));
    }

    #[test]
    fn straight_line_beats_a_detour() {
        // Cheap top row, expensive elsewhere.
        let grid = CostGrid::parse("1119\n9991\n9991").unwrap();
        assert_eq!(min_run_cost(&grid, SearchParams::STANDARD), Ok(1 + 1 + 9 + 1 + 1));
    }

    #[test]
    fn run_range_is_reusable_across_searches() {
        let grid = CostGrid::parse(SAMPLE).unwrap();
        let mut range = RunRange::new();
        assert_eq!(range.min_cost(&grid, SearchParams::STANDARD), Ok(102));
        assert_eq!(range.min_cost(&grid, SearchParams::COMMITTED), Ok(94));
        // Back to the first configuration on the warm cache.
        assert_eq!(range.min_cost(&grid, SearchParams::STANDARD), Ok(102));

        // And across grids of different sizes.
        let small = CostGrid::parse("11\n11").unwrap();
        let params = SearchParams::new(0, 1).unwrap();
        assert_eq!(range.min_cost(&small, params), Ok(2));
        assert_eq!(range.min_cost(&grid, SearchParams::STANDARD), Ok(102));
    }

    #[test]
    fn zero_cost_cells_are_handled() {
        let grid = CostGrid::from_rows(vec![vec![3, 0, 0], vec![5, 9, 0], vec![5, 9, 0]]).unwrap();
        assert_eq!(min_run_cost(&grid, SearchParams::STANDARD), Ok(0));
    }
}
