//! Lifelong Planning A* (LPA*) engine.
//!
//! Maintains per-vertex `(g, rhs)` state over a finite graph and repairs a
//! shortest path from `start` to `goal` after edge-cost changes without
//! recomputing from scratch. The engine is generic over the vertex type and
//! over the [`Topology`] (and therefore cost) and [`HeuristicFn`]
//! collaborators; [`crate::planner::GridPlanner`] is the grid-specific
//! facade over it.

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::PlanError;
use crate::heap::{key_lt, FibHeap, Handle};

/// Supplies the finite vertex set and, for each vertex, the neighbor list
/// used as both predecessors and successors (the grid is undirected).
pub trait Topology {
    type Vertex: Copy + Eq + Hash + std::fmt::Debug;

    fn vertices(&self) -> Vec<Self::Vertex>;
    fn neighbors(&self, v: Self::Vertex) -> Vec<Self::Vertex>;
}

/// Reads the live cost of the directed edge `(u, v)`. On a grid that stores
/// costs per target cell, `cost(u, v)` depends only on `v`; the engine
/// never assumes that, it always passes both endpoints.
pub trait CostFn<V> {
    fn cost(&self, u: V, v: V) -> f64;
}

impl<V, F: Fn(V, V) -> f64> CostFn<V> for F {
    fn cost(&self, u: V, v: V) -> f64 {
        self(u, v)
    }
}

/// A non-negative, admissible-and-consistent lower bound on the cost to
/// reach the goal. Held constant for the lifetime of a search.
pub trait HeuristicFn<V> {
    fn h(&self, v: V) -> f64;
}

impl<V, F: Fn(V) -> f64> HeuristicFn<V> for F {
    fn h(&self, v: V) -> f64 {
        self(v)
    }
}

struct VertexState {
    g: f64,
    rhs: f64,
    h: f64,
    handle: Option<Handle>,
}

/// The coupled `(g, rhs)` LPA* search engine, backed by [`FibHeap`].
pub struct LpaStar<T, H>
where
    T: Topology,
{
    topology: T,
    heuristic: H,
    start: T::Vertex,
    goal: T::Vertex,
    state: HashMap<T::Vertex, VertexState>,
    heap: FibHeap<T::Vertex>,
}

impl<T, H> LpaStar<T, H>
where
    T: Topology + CostFn<T::Vertex>,
    H: HeuristicFn<T::Vertex>,
{
    /// Builds the engine and runs `initialize(start, goal)`: every vertex
    /// starts at `g = rhs = +inf` except `rhs(start) = 0`, and `start` is
    /// seeded into the priority queue.
    pub fn new(topology: T, start: T::Vertex, goal: T::Vertex, heuristic: H) -> Self {
        let mut state = HashMap::new();
        for v in topology.vertices() {
            let h = heuristic.h(v);
            state.insert(
                v,
                VertexState {
                    g: f64::INFINITY,
                    rhs: f64::INFINITY,
                    h,
                    handle: None,
                },
            );
        }

        let mut engine = LpaStar {
            topology,
            heuristic,
            start,
            goal,
            state,
            heap: FibHeap::new(),
        };

        engine.state.get_mut(&start).expect("start is a vertex").rhs = 0.0;
        let key = engine.key(start);
        let handle = engine.heap.insert(key.0, key.1, start);
        engine.state.get_mut(&start).expect("start is a vertex").handle = Some(handle);

        engine
    }

    pub fn start(&self) -> T::Vertex {
        self.start
    }

    pub fn goal(&self) -> T::Vertex {
        self.goal
    }

    pub fn topology(&self) -> &T {
        &self.topology
    }

    pub fn topology_mut(&mut self) -> &mut T {
        &mut self.topology
    }

    pub fn g(&self, v: T::Vertex) -> f64 {
        self.state.get(&v).map_or(f64::INFINITY, |s| s.g)
    }

    pub fn rhs(&self, v: T::Vertex) -> f64 {
        self.state.get(&v).map_or(f64::INFINITY, |s| s.rhs)
    }

    /// `g(goal)`; `+inf` when no path has been found.
    pub fn path_cost(&self) -> f64 {
        self.g(self.goal)
    }

    /// `key(v) = (min(g, rhs) + h(v), min(g, rhs))`, compared lexicographically.
    fn key(&self, v: T::Vertex) -> (f64, f64) {
        let s = &self.state[&v];
        let min_g_rhs = s.g.min(s.rhs);
        (min_g_rhs + s.h, min_g_rhs)
    }

    fn is_consistent(&self, v: T::Vertex) -> bool {
        let s = &self.state[&v];
        s.g == s.rhs
    }

    /// Recomputes `rhs(v)` from its predecessors' live costs, re-synchronises
    /// its priority-queue membership, and re-inserts it if inconsistent.
    pub fn update_vertex(&mut self, v: T::Vertex) {
        if v != self.start {
            let mut min_val = f64::INFINITY;
            for pred in self.topology.neighbors(v) {
                let cost = self.topology.cost(pred, v);
                let candidate = self.g(pred) + cost;
                if candidate < min_val {
                    min_val = candidate;
                }
            }
            self.state.get_mut(&v).expect("vertex exists").rhs = min_val;
        }

        if let Some(handle) = self.state.get_mut(&v).expect("vertex exists").handle.take() {
            let result = self.heap.delete(handle);
            debug_assert!(
                result.is_ok(),
                "engine never holds a stale heap handle: {result:?}"
            );
        }

        if !self.is_consistent(v) {
            let key = self.key(v);
            let handle = self.heap.insert(key.0, key.1, v);
            self.state.get_mut(&v).expect("vertex exists").handle = Some(handle);
        }

        log::debug!(
            "update_vertex({v:?}): g={:.3} rhs={:.3}",
            self.g(v),
            self.rhs(v)
        );
    }

    /// Drains the priority queue, expanding vertices until the goal is
    /// locally consistent and no queued key can still improve it.
    ///
    /// Follows the published Koenig & Likhachev stopping predicate: continue
    /// looping while `k_top < key(goal) OR rhs(goal) != g(goal)`.
    pub fn compute_shortest_path(&mut self) -> Result<(), PlanError> {
        let mut expanded = 0usize;
        while let Some(k_top) = self.heap.peek_min() {
            let key_goal = self.key(self.goal);
            let keep_going = key_lt(k_top, key_goal) || self.rhs(self.goal) != self.g(self.goal);
            if !keep_going {
                break;
            }

            let u = self
                .heap
                .extract_min()
                .expect("peek_min just confirmed the heap is non-empty");
            self.state.get_mut(&u).expect("vertex exists").handle = None;
            expanded += 1;

            if self.g(u) > self.rhs(u) {
                self.state.get_mut(&u).expect("vertex exists").g = self.rhs(u);
                for s in self.topology.neighbors(u) {
                    self.update_vertex(s);
                }
            } else {
                self.state.get_mut(&u).expect("vertex exists").g = f64::INFINITY;
                self.update_vertex(u);
                for s in self.topology.neighbors(u) {
                    self.update_vertex(s);
                }
            }
        }

        let cost = self.path_cost();
        if cost.is_finite() {
            log::info!("compute_shortest_path: expanded {expanded} vertices, path_cost={cost:.3}");
            Ok(())
        } else {
            log::info!("compute_shortest_path: expanded {expanded} vertices, no path");
            Err(PlanError::NoPath)
        }
    }

    /// Notifies the engine that `cost(u, v)` changed. Per the grid's
    /// per-target cost storage this only needs to re-synchronise `v`; the
    /// caller is responsible for calling this for every changed edge and for
    /// re-running `compute_shortest_path` afterwards.
    pub fn notify_edge_cost_changed(&mut self, _u: T::Vertex, v: T::Vertex) {
        self.update_vertex(v);
    }
}
