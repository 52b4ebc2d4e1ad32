//! ASCII visualization of a grid and, optionally, a path across it. Purely a
//! convenience for the CLI binary; not part of the LPA* core.

use std::collections::HashSet;
use std::fmt::Write as _;

use crate::grid::{Cell, Grid};

/// Renders `grid`'s costs as a fixed-width ASCII matrix, marking obstacle
/// cells with `#` and, when `path` is given, path cells with `*`.
pub fn render(grid: &Grid, path: Option<&[Cell]>) -> String {
    let on_path: HashSet<Cell> = path.map(|p| p.iter().copied().collect()).unwrap_or_default();

    let mut out = String::new();
    for r in 0..grid.rows() {
        for c in 0..grid.cols() {
            let cell = (r, c);
            if grid.is_obstacle(cell) {
                out.push_str("[ # ] ");
            } else if on_path.contains(&cell) {
                out.push_str("[ * ] ");
            } else {
                let _ = write!(out, "[{:3.0}] ", grid.cost_at(cell));
            }
        }
        out.push('\n');
    }
    out
}
