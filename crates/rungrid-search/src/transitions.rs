//! Legal-move generation under run-length constraints.

use rungrid_core::{CostGrid, Direction, Point};

use crate::params::SearchParams;
use crate::state::RunState;

/// Attempt a single move from `cur` in direction `dir`.
///
/// Returns the successor state, or `None` if the move is illegal. The rules,
/// checked in order:
///
/// 1. the destination must lie within the grid;
/// 2. the move may not reverse the previous one;
/// 3. a straight move is illegal once the run has reached `max_run`;
/// 4. a turn is illegal while the run is below `min_run`, except from the
///    origin cell.
pub fn try_step(
    grid: &CostGrid,
    cur: &RunState,
    dir: Direction,
    params: SearchParams,
) -> Option<RunState> {
    let next = cur.pos.step(dir);
    let entry_cost = grid.get(next)?;

    if cur.heading == Some(dir.opposite()) {
        return None;
    }

    let straight = cur.heading == Some(dir);
    if straight && cur.run >= params.max_run() {
        return None;
    }
    if !straight && cur.run < params.min_run() && cur.pos != Point::ZERO {
        return None;
    }

    Some(RunState {
        pos: next,
        heading: Some(dir),
        run: if straight { cur.run + 1 } else { 1 },
        cost: cur.cost + entry_cost,
    })
}

/// Append every legal successor of `cur` to `buf`. The caller clears `buf`
/// before calling.
pub fn successors(grid: &CostGrid, cur: &RunState, params: SearchParams, buf: &mut Vec<RunState>) {
    for dir in Direction::ALL {
        if let Some(next) = try_step(grid, cur, dir, params) {
            buf.push(next);
        }
    }
}
