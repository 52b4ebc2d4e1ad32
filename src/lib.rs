//! Incremental shortest-path replanning on a weighted grid.
//!
//! The core is a coupled pair: a [`heap::FibHeap`] mergeable priority queue
//! keyed on a lexicographic `(k1, k2)` pair, and an [`engine::LpaStar`]
//! search engine (Lifelong Planning A*) that drains it to compute and then
//! incrementally repair a shortest path after edge-cost changes, without
//! recomputing from scratch.
//!
//! Everything else in this crate — [`grid`], [`heuristic`], [`path`],
//! [`render`], and the [`planner::GridPlanner`] facade — is a harness
//! collaborator around that core; none of it is required for the core's
//! correctness, and any of it may be swapped for a different graph,
//! heuristic, or presentation layer without touching `engine` or `heap`.

pub mod engine;
pub mod error;
pub mod grid;
pub mod heap;
pub mod heuristic;
pub mod path;
pub mod planner;
pub mod render;

pub use engine::{CostFn, HeuristicFn, LpaStar, Topology};
pub use error::{GridError, HeapError, PlanError};
pub use grid::{Cell, Grid};
pub use heap::{FibHeap, Handle};
pub use heuristic::Manhattan;
pub use planner::GridPlanner;
