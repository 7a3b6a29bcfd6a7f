//! `compare` — race two heuristics side by side.

use anyhow::Result;
use clap::Args;
use knightpath_core::{Board, Point};
use knightpath_paths::{HeuristicKind, KnightOracle, SearchResult, SideBySide, Snapshot};

use crate::heuristic_arg::HeuristicArg;
use crate::render;

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    /// Start cell as x,y
    #[arg(long, default_value = "1,1")]
    pub from: Point,

    /// Goal cell as x,y
    #[arg(long, default_value = "6,6")]
    pub to: Point,

    #[arg(long, value_enum, default_value_t = HeuristicArg::Zero)]
    pub left: HeuristicArg,

    #[arg(long, value_enum, default_value_t = HeuristicArg::Knight)]
    pub right: HeuristicArg,

    /// Print both frontiers after every round
    #[arg(long)]
    pub trace: bool,
}

pub fn run(args: &CompareArgs, board: &Board, oracle: &KnightOracle) -> Result<()> {
    let (lk, rk) = (HeuristicKind::from(args.left), HeuristicKind::from(args.right));
    let (lh, rh) = (lk.build(oracle), rk.build(oracle));
    let mut race = SideBySide::new(board, args.from, args.to, &lh, &rh)?;

    while let Some(round) = race.advance() {
        if !args.trace {
            continue;
        }
        let draw = |snap: &Option<Snapshot>| match snap {
            Some(s) => render::frontier(board, s, args.from, args.to),
            None => String::new(),
        };
        println!("round {}", race.rounds());
        println!("{}", render::side_by_side(&draw(&round.left), &draw(&round.right), 4));
    }

    let (left, right) = race.run();
    print!("{}", render::summary(lk.name(), &left));
    print!("{}", render::summary(rk.name(), &right));
    println!("{}", verdict(lk.name(), &left, rk.name(), &right));
    Ok(())
}

/// One-line comparison of expansion counts and path costs.
pub fn verdict(ln: &str, left: &SearchResult, rn: &str, right: &SearchResult) -> String {
    let (le, re) = (left.nodes_expanded, right.nodes_expanded);
    let costs = match (left.cost(), right.cost()) {
        (Some(a), Some(b)) if (a - b).abs() < 1e-9 => "same path cost".to_string(),
        (Some(a), Some(b)) => format!("path costs differ ({a:.4} vs {b:.4})"),
        _ => "no path".to_string(),
    };
    if le == re {
        return format!("{ln} and {rn} both expanded {le} nodes; {costs}");
    }
    let (winner, fewer, more) = if re < le { (rn, re, le) } else { (ln, le, re) };
    let saved = 100.0 * (more - fewer) as f64 / more as f64;
    format!("{winner} expanded {fewer} vs {more} nodes ({saved:.1}% fewer); {costs}")
}
