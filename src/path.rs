//! Backtracking path reconstruction from `g`-values. Not part of the LPA*
//! core's correctness contract (§1): a snapshot walk from the goal towards
//! the start, always stepping to the neighbor with the smallest `g`.

use crate::engine::{LpaStar, Topology};
use crate::grid::{Cell, Grid};

/// Walks backwards from `goal` to `start` following the steepest `g`
/// descent at each step. Returns `None` if the goal is unreachable or the
/// walk exceeds the grid's cell count (a defensive bound against cycles
/// that should not occur once the plan is consistent).
pub fn reconstruct_path(engine: &LpaStar<Grid, crate::heuristic::Manhattan>) -> Option<Vec<Cell>> {
    if !engine.path_cost().is_finite() {
        return None;
    }

    let start = engine.start();
    let goal = engine.goal();
    let max_steps = engine.topology().rows() * engine.topology().cols();

    let mut path = vec![goal];
    let mut current = goal;
    let mut steps = 0;

    while current != start && steps < max_steps {
        let mut best: Option<Cell> = None;
        let mut best_g = f64::INFINITY;
        for pred in engine.topology().neighbors(current) {
            let g = engine.g(pred);
            if g < best_g {
                best_g = g;
                best = Some(pred);
            }
        }
        let next = best?;
        path.push(next);
        current = next;
        steps += 1;
    }

    if current != start {
        return None;
    }
    Some(path)
}
