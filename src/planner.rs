//! `GridPlanner`: the grid-specific facade over the generic [`LpaStar`]
//! engine, tying it to a [`Grid`] and a [`Manhattan`] heuristic.

use crate::engine::LpaStar;
use crate::error::PlanError;
use crate::grid::{Cell, Grid};
use crate::heuristic::Manhattan;
use crate::path;

/// LPA* planning on a [`Grid`], with Manhattan distance as the heuristic.
pub struct GridPlanner {
    engine: LpaStar<Grid, Manhattan>,
}

impl GridPlanner {
    /// Builds a planner over a fresh uniform-cost `rows x cols` grid.
    pub fn new(rows: usize, cols: usize, start: Cell, goal: Cell) -> Self {
        Self::from_grid(Grid::new(rows, cols), start, goal)
    }

    /// Builds a planner over a caller-supplied grid (e.g. one loaded from CSV).
    pub fn from_grid(grid: Grid, start: Cell, goal: Cell) -> Self {
        let heuristic = Manhattan::new(goal);
        GridPlanner {
            engine: LpaStar::new(grid, start, goal, heuristic),
        }
    }

    pub fn grid(&self) -> &Grid {
        self.engine.topology()
    }

    pub fn start(&self) -> Cell {
        self.engine.start()
    }

    pub fn goal(&self) -> Cell {
        self.engine.goal()
    }

    pub fn g(&self, v: Cell) -> f64 {
        self.engine.g(v)
    }

    pub fn rhs(&self, v: Cell) -> f64 {
        self.engine.rhs(v)
    }

    pub fn path_cost(&self) -> f64 {
        self.engine.path_cost()
    }

    pub fn compute_shortest_path(&mut self) -> Result<(), PlanError> {
        self.engine.compute_shortest_path()
    }

    pub fn notify_edge_cost_changed(&mut self, u: Cell, v: Cell) {
        self.engine.notify_edge_cost_changed(u, v);
    }

    /// Sets the cost of `cell` and notifies the engine that every edge
    /// ending at `cell` changed: `cell` itself, plus each of its neighbors
    /// (a change at `v` affects `rhs` of every successor of `v` too, since
    /// the grid is undirected).
    pub fn set_cost_and_notify(&mut self, cell: Cell, cost: f64) {
        self.engine.topology_mut().set_cost(cell, cost);
        self.engine.notify_edge_cost_changed(cell, cell);
        for neighbor in self.engine.topology().neighbors(cell) {
            self.engine.notify_edge_cost_changed(cell, neighbor);
        }
    }

    /// Backtracking reconstruction from `goal` to `start`, or `None` if
    /// unreachable. See [`path::reconstruct_path`].
    pub fn reconstruct_path(&self) -> Option<Vec<Cell>> {
        path::reconstruct_path(&self.engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_line_five_cells() {
        let mut planner = GridPlanner::new(1, 5, (0, 0), (0, 4));
        planner.compute_shortest_path().unwrap();
        assert_eq!(planner.path_cost(), 4.0);
    }

    #[test]
    fn detour_after_obstacle_same_cost() {
        let mut planner = GridPlanner::new(20, 20, (0, 0), (10, 10));
        planner.compute_shortest_path().unwrap();
        assert_eq!(planner.path_cost(), 20.0);

        planner.set_cost_and_notify((5, 5), 100.0);
        planner.compute_shortest_path().unwrap();
        assert_eq!(planner.path_cost(), 20.0);
    }

    #[test]
    fn unreachable_goal_reports_no_path() {
        let mut planner = GridPlanner::new(3, 3, (0, 0), (2, 2));
        for neighbor in [(1, 2), (2, 1)] {
            planner.set_cost_and_notify(neighbor, f64::INFINITY);
        }
        let result = planner.compute_shortest_path();
        assert_eq!(result, Err(PlanError::NoPath));
        assert_eq!(planner.g((2, 2)), f64::INFINITY);
    }
}
