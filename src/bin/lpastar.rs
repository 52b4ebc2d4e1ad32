//! CLI harness exercising [`lpa_star::GridPlanner`] against a CSV-backed (or
//! default) grid: load, plan, mutate edge costs at one or more cells,
//! replan, and print both paths. Mirrors the reference program's `main()`.

use std::path::PathBuf;

use clap::Parser;

use lpa_star::render::render;
use lpa_star::{Cell, Grid, GridPlanner, PlanError};

const DEFAULT_ROWS: usize = 32;
const DEFAULT_COLS: usize = 32;

/// LPA* shortest-path planning and replanning on a weighted grid.
#[derive(Parser, Debug)]
#[command(name = "lpastar", about, long_about = None)]
struct Args {
    /// Path to a headerless CSV cost grid. Falls back to a built-in
    /// 32x32 uniform-cost grid when omitted or unreadable.
    #[arg(long)]
    grid: Option<PathBuf>,

    /// Start cell as "row,col". Defaults to (0,0).
    #[arg(long, value_parser = parse_cell)]
    start: Option<Cell>,

    /// Goal cell as "row,col". Defaults to the grid's center.
    #[arg(long, value_parser = parse_cell)]
    goal: Option<Cell>,

    /// Cell to block after the first plan, as "row,col". Repeatable.
    /// Defaults to a single cell near the grid's center.
    #[arg(long = "block", value_parser = parse_cell)]
    blocks: Vec<Cell>,

    /// Cost written at blocked cells.
    #[arg(long, default_value_t = 100.0)]
    obstacle_cost: f64,
}

fn parse_cell(s: &str) -> Result<Cell, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected \"row,col\", got {s:?}"))?;
    let row = row
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid row in {s:?}: {e}"))?;
    let col = col
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid col in {s:?}: {e}"))?;
    Ok((row, col))
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let grid = match &args.grid {
        Some(path) => Grid::from_csv(path, DEFAULT_COLS).unwrap_or_else(|e| {
            log::warn!("failed to load grid from {path:?} ({e}), using default grid");
            Grid::new(DEFAULT_ROWS, DEFAULT_COLS)
        }),
        None => {
            log::info!("no --grid given, using default {DEFAULT_ROWS}x{DEFAULT_COLS} grid");
            Grid::new(DEFAULT_ROWS, DEFAULT_COLS)
        }
    };

    let start = args.start.unwrap_or((0, 0));
    let goal = args
        .goal
        .unwrap_or((grid.rows() / 2, grid.cols() / 2));

    let blocks = if args.blocks.is_empty() {
        vec![(goal.0.saturating_sub(2), goal.1.saturating_sub(2))]
    } else {
        args.blocks
    };

    let mut planner = GridPlanner::from_grid(grid, start, goal);

    log::info!("computing initial path from {start:?} to {goal:?}");
    let initial = planner.compute_shortest_path();
    report("initial plan", &planner, initial);

    log::info!(
        "applying {} obstacle(s) at cost {}, replanning",
        blocks.len(),
        args.obstacle_cost
    );
    for block in &blocks {
        planner.set_cost_and_notify(*block, args.obstacle_cost);
    }
    let replanned = planner.compute_shortest_path();
    report("after obstacle", &planner, replanned);
}

fn report(label: &str, planner: &GridPlanner, result: Result<(), PlanError>) {
    println!("--- {label} ---");
    let path = planner.reconstruct_path();
    println!("{}", render(planner.grid(), path.as_deref()));
    match result {
        Ok(()) => println!("path cost: {:.1}", planner.path_cost()),
        Err(PlanError::NoPath) => println!("no path found"),
    }
    if let Some(path) = path {
        let steps: Vec<String> = path.iter().map(|(r, c)| format!("({r},{c})")).collect();
        println!("path (goal <- start): {}", steps.join(" <- "));
    }
    println!();
}
