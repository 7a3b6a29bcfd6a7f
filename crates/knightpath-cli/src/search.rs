//! `search` — one A* run with a chosen heuristic.

use anyhow::Result;
use clap::Args;
use knightpath_core::{Board, Point};
use knightpath_paths::{HeuristicKind, KnightOracle, astar};

use crate::heuristic_arg::HeuristicArg;
use crate::render;

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Start cell as x,y
    #[arg(long, default_value = "1,1")]
    pub from: Point,

    /// Goal cell as x,y
    #[arg(long, default_value = "6,6")]
    pub to: Point,

    #[arg(long, value_enum, default_value_t = HeuristicArg::Knight)]
    pub heuristic: HeuristicArg,
}

pub fn run(args: &SearchArgs, board: &Board, oracle: &KnightOracle) -> Result<()> {
    let kind = HeuristicKind::from(args.heuristic);
    let heuristic = kind.build(oracle);
    let result = astar(board, args.from, args.to, &heuristic)?;
    tracing::info!(heuristic = %kind, expanded = result.nodes_expanded, "search finished");

    print!("{}", render::summary(kind.name(), &result));
    if result.is_success() {
        println!();
        println!("{}", render::path(board, &result, args.from, args.to));
    }
    Ok(())
}
