//! `knightpath` — knight-move A* on weighted terrain.

mod admissibility;
mod board_args;
mod compare;
mod heuristic_arg;
mod render;
mod search;
mod trace;

use anyhow::Result;
use clap::{Parser, Subcommand};
use knightpath_core::Point;
use knightpath_paths::KnightOracle;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use tracing_subscriber::EnvFilter;

use crate::admissibility::AdmissibilityArgs;
use crate::board_args::BoardArgs;
use crate::compare::CompareArgs;
use crate::search::SearchArgs;
use crate::trace::TraceArgs;

#[derive(Parser, Debug)]
#[command(name = "knightpath", version, about = "Knight-move A* search on weighted terrain")]
struct Cli {
    #[command(flatten)]
    board: BoardArgs,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find the cheapest knight path between two cells
    Search(SearchArgs),
    /// Step through a search, printing the frontier after each expansion
    Trace(TraceArgs),
    /// Run two heuristics in lockstep and compare their work
    Compare(CompareArgs),
    /// Check heuristics against optimal costs on sampled pairs
    Admissibility(AdmissibilityArgs),
}

impl Command {
    /// Cells that must stay passable when the board is randomized.
    fn endpoints(&self) -> Vec<Point> {
        match self {
            Command::Search(a) => vec![a.from, a.to],
            Command::Trace(a) => vec![a.from, a.to],
            Command::Compare(a) => vec![a.from, a.to],
            Command::Admissibility(_) => Vec::new(),
        }
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let seed = cli.board.seed.unwrap_or_else(|| rand::rng().random());
    tracing::info!(seed, "rng seeded");
    let mut rng = StdRng::seed_from_u64(seed);

    let board = cli.board.load(&mut rng, &cli.command.endpoints())?;
    let oracle = KnightOracle::new(board.bounds());

    match &cli.command {
        Command::Search(args) => search::run(args, &board, &oracle),
        Command::Trace(args) => trace::run(args, &board, &oracle),
        Command::Compare(args) => compare::run(args, &board, &oracle),
        Command::Admissibility(args) => admissibility::run(args, &board, &oracle, &mut rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use crate::heuristic_arg::HeuristicArg;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn search_defaults() {
        let cli = Cli::try_parse_from(["knightpath", "search"]).unwrap();
        let Command::Search(args) = cli.command else {
            panic!("expected search");
        };
        assert_eq!(args.from, Point::new(1, 1));
        assert_eq!(args.to, Point::new(6, 6));
        assert_eq!(args.heuristic, HeuristicArg::Knight);
        assert!(!cli.board.random);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn board_flags_before_subcommand() {
        let cli = Cli::try_parse_from([
            "knightpath", "--random", "--seed", "7", "-vv", "compare", "--left", "knight-bound", "--from", "0,0",
        ])
        .unwrap();
        assert!(cli.board.random);
        assert_eq!(cli.board.seed, Some(7));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.command.endpoints(), vec![Point::new(0, 0), Point::new(6, 6)]);
        let Command::Compare(args) = cli.command else {
            panic!("expected compare");
        };
        assert_eq!(args.left, HeuristicArg::KnightBound);
        assert_eq!(args.right, HeuristicArg::Knight);
    }

    #[test]
    fn map_conflicts_with_random() {
        let err = Cli::try_parse_from(["knightpath", "--map", "m.txt", "--random", "search"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn bad_point_is_rejected() {
        assert!(Cli::try_parse_from(["knightpath", "search", "--from", "1;1"]).is_err());
    }

    #[test]
    fn admissibility_flags() {
        let cli = Cli::try_parse_from(["knightpath", "admissibility", "--samples", "25", "--json"]).unwrap();
        let Command::Admissibility(args) = cli.command else {
            panic!("expected admissibility");
        };
        assert_eq!(args.samples, 25);
        assert!(args.json);
    }
}
