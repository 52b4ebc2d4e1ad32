//! A four-connected weighted grid: the concrete [`crate::engine::Topology`]
//! and [`crate::engine::CostFn`] collaborator used by [`crate::planner::GridPlanner`].
//!
//! Deliberately dumb: a flat `Vec<f64>` of per-cell costs, CSV loading, and
//! neighbor enumeration. None of this is part of the LPA* core's
//! correctness contract (see the crate's top-level docs).

use std::path::Path;

use crate::engine::{CostFn, Topology};
use crate::error::GridError;

/// A grid cell identified by `(row, col)`.
pub type Cell = (usize, usize);

/// Cost at or above this value marks a cell as an obstacle for rendering
/// purposes. The cost oracle still returns the literal value; very
/// large-but-finite costs and `+inf` both work as "effectively blocked."
pub const DEFAULT_OBSTACLE_THRESHOLD: f64 = 100.0;

/// A rectangular grid of per-cell costs with four-connected neighbors.
pub struct Grid {
    rows: usize,
    cols: usize,
    costs: Vec<f64>,
    pub obstacle_threshold: f64,
}

impl Grid {
    /// A `rows x cols` grid with every cell at cost 1.
    pub fn new(rows: usize, cols: usize) -> Self {
        Grid {
            rows,
            cols,
            costs: vec![1.0; rows * cols],
            obstacle_threshold: DEFAULT_OBSTACLE_THRESHOLD,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, cell: Cell) -> usize {
        cell.0 * self.cols + cell.1
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.0 < self.rows && cell.1 < self.cols
    }

    /// The live cost stored at `cell`.
    pub fn cost_at(&self, cell: Cell) -> f64 {
        self.costs[self.index(cell)]
    }

    /// Overwrites the cost at `cell`. The caller is responsible for calling
    /// `notify_edge_cost_changed` afterwards so the engine re-synchronises.
    pub fn set_cost(&mut self, cell: Cell, cost: f64) {
        let idx = self.index(cell);
        self.costs[idx] = cost;
    }

    pub fn is_obstacle(&self, cell: Cell) -> bool {
        self.cost_at(cell) >= self.obstacle_threshold
    }

    /// Loads an `R x C` grid from a headerless CSV of numeric per-cell
    /// costs. Missing or non-positive values default to 1, matching the
    /// reference loader. Every row must have exactly `cols` columns;
    /// a row that doesn't is a `GridError::Dimensions`, not a silent
    /// pad/truncate.
    pub fn from_csv<P: AsRef<Path>>(path: P, cols: usize) -> Result<Self, GridError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)?;

        let mut costs = Vec::new();
        let mut row_count = 0usize;
        for result in reader.records() {
            let record = result?;
            let actual_cols = record.len();
            if actual_cols != cols {
                return Err(GridError::Dimensions {
                    row: row_count,
                    actual: actual_cols,
                    expected: cols,
                });
            }
            for col in 0..cols {
                let value = record
                    .get(col)
                    .and_then(|s| s.trim().parse::<f64>().ok())
                    .unwrap_or(0.0);
                costs.push(if value <= 0.0 { 1.0 } else { value });
            }
            row_count += 1;
        }

        if row_count == 0 {
            return Err(GridError::Empty);
        }

        let obstacle_count = costs
            .iter()
            .filter(|&&c| c >= DEFAULT_OBSTACLE_THRESHOLD)
            .count();
        log::info!(
            "grid: loaded {row_count}x{cols} grid, {obstacle_count} obstacle cells"
        );

        Ok(Grid {
            rows: row_count,
            cols,
            costs,
            obstacle_threshold: DEFAULT_OBSTACLE_THRESHOLD,
        })
    }
}

impl Topology for Grid {
    type Vertex = Cell;

    fn vertices(&self) -> Vec<Cell> {
        let mut out = Vec::with_capacity(self.rows * self.cols);
        for r in 0..self.rows {
            for c in 0..self.cols {
                out.push((r, c));
            }
        }
        out
    }

    fn neighbors(&self, v: Cell) -> Vec<Cell> {
        let (r, c) = v;
        let deltas: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
        deltas
            .iter()
            .filter_map(|(dr, dc)| {
                let nr = r as isize + dr;
                let nc = c as isize + dc;
                if nr >= 0 && nc >= 0 {
                    let cell = (nr as usize, nc as usize);
                    self.in_bounds(cell).then_some(cell)
                } else {
                    None
                }
            })
            .collect()
    }
}

impl CostFn<Cell> for Grid {
    /// The cost of entering `v`, read live from the grid. The grid stores
    /// costs per target cell, so `u` is unused here; `notify_edge_cost_changed`
    /// still takes both endpoints to keep the engine's interface
    /// edge-indexed-cost-agnostic.
    fn cost(&self, _u: Cell, v: Cell) -> f64 {
        self.cost_at(v)
    }
}
