use clap::ValueEnum;
use knightpath_paths::HeuristicKind;

/// Heuristic selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HeuristicArg {
    /// h = 0 (Dijkstra order)
    Zero,
    /// Manhattan distance × min cost (not admissible)
    Manhattan,
    /// Chebyshev distance × min cost (not admissible)
    Chebyshev,
    /// Closed-form knight hop lower bound × min cost
    KnightBound,
    /// Exact open-board knight distance × min cost
    Knight,
}

impl From<HeuristicArg> for HeuristicKind {
    fn from(arg: HeuristicArg) -> Self {
        match arg {
            HeuristicArg::Zero => HeuristicKind::Zero,
            HeuristicArg::Manhattan => HeuristicKind::Manhattan,
            HeuristicArg::Chebyshev => HeuristicKind::Chebyshev,
            HeuristicArg::KnightBound => HeuristicKind::KnightBound,
            HeuristicArg::Knight => HeuristicKind::Knight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_names_match_library_names() {
        for arg in HeuristicArg::value_variants() {
            let name = arg.to_possible_value().unwrap();
            assert_eq!(name.get_name(), HeuristicKind::from(*arg).name());
        }
    }
}
