//! `trace` — print the frontier after every expansion.

use anyhow::Result;
use clap::Args;
use knightpath_core::{Board, Point};
use knightpath_paths::{AstarSearch, HeuristicKind, KnightOracle, Step};

use crate::heuristic_arg::HeuristicArg;
use crate::render;

#[derive(Args, Debug, Clone)]
pub struct TraceArgs {
    /// Start cell as x,y
    #[arg(long, default_value = "1,1")]
    pub from: Point,

    /// Goal cell as x,y
    #[arg(long, default_value = "6,6")]
    pub to: Point,

    #[arg(long, value_enum, default_value_t = HeuristicArg::Knight)]
    pub heuristic: HeuristicArg,

    /// Stop after this many expansions
    #[arg(long)]
    pub max_steps: Option<usize>,
}

pub fn run(args: &TraceArgs, board: &Board, oracle: &KnightOracle) -> Result<()> {
    let kind = HeuristicKind::from(args.heuristic);
    let heuristic = kind.build(oracle);
    let mut search = AstarSearch::new(board, args.from, args.to, &heuristic)?;
    let limit = args.max_steps.unwrap_or(usize::MAX);

    println!(
        "legend: {} start, {} goal, {} expanded now, {} closed, {} open, {} path",
        render::START,
        render::GOAL,
        render::CURRENT,
        render::CLOSED,
        render::OPEN,
        render::PATH
    );
    let mut step = 0;
    loop {
        if step == limit {
            println!("stopped after {step} steps");
            return Ok(());
        }
        match search.advance() {
            Step::Progress(snap) => {
                step += 1;
                println!(
                    "\nstep {step}: expanded {} (open {}, closed {})",
                    snap.current,
                    snap.open.len(),
                    snap.closed.len()
                );
                println!("{}", render::frontier(board, &snap, args.from, args.to));
            }
            Step::Finished(result) => {
                println!();
                print!("{}", render::summary(kind.name(), &result));
                if result.is_success() {
                    println!("{}", render::path(board, &result, args.from, args.to));
                }
                return Ok(());
            }
        }
    }
}
