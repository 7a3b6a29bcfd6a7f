//! `admissibility` — sample pairs and check every built-in heuristic.

use anyhow::Result;
use clap::Args;
use knightpath_core::Board;
use knightpath_paths::{
    AdmissibilityConfig, AdmissibilityReport, Heuristic, HeuristicKind, KnightOracle, check_admissibility,
};
use rand::Rng;

#[derive(Args, Debug, Clone)]
pub struct AdmissibilityArgs {
    /// Number of (start, goal) pairs to sample
    #[arg(long, default_value_t = 10)]
    pub samples: usize,

    /// Print the full report as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn run<R: Rng>(args: &AdmissibilityArgs, board: &Board, oracle: &KnightOracle, rng: &mut R) -> Result<()> {
    let built: Vec<Box<dyn Heuristic + '_>> = HeuristicKind::ALL.iter().map(|k| k.build(oracle)).collect();
    let candidates: Vec<&dyn Heuristic> = built.iter().map(|h| &**h).collect();
    let config = AdmissibilityConfig {
        samples: args.samples,
        ..Default::default()
    };
    let report = check_admissibility(board, &candidates, &config, rng)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", format_report(&report));
    }
    Ok(())
}

/// Plain-text rendering: one block per pair, then one line per heuristic.
pub fn format_report(report: &AdmissibilityReport) -> String {
    let mut out = String::new();
    for (i, pair) in report.pairs.iter().enumerate() {
        let optimal = match pair.optimal_cost {
            Some(c) => format!("{c:.4}"),
            None => "unreachable".to_string(),
        };
        out.push_str(&format!(
            "pair {}: {} -> {}  optimal {optimal}  ({} expanded)\n",
            i + 1,
            pair.start,
            pair.goal,
            pair.nodes_expanded
        ));
        for e in &pair.estimates {
            let verdict = match e.admissible {
                Some(true) => "ok",
                Some(false) => "OVERESTIMATE",
                None => "-",
            };
            let value = e.value.map_or("inf".to_string(), |v| format!("{v:.4}"));
            out.push_str(&format!("  {:<13} h = {value:>8}  {verdict}\n", e.heuristic));
        }
    }

    out.push_str("\nsummary");
    if report.unreachable > 0 {
        out.push_str(&format!(" ({} unreachable pairs skipped)", report.unreachable));
    }
    out.push('\n');
    for t in &report.tallies {
        let rate = t.pass_rate().map_or("n/a".to_string(), |r| format!("{:.0}%", r * 100.0));
        let claim = if t.declared_admissible { "admissible" } else { "not admissible" };
        let flag = if t.declared_admissible && !t.all_passed() { "  !! claim violated" } else { "" };
        out.push_str(&format!(
            "  {:<13} {}/{} passed ({rate}), declared {claim}{flag}\n",
            t.heuristic, t.passed, t.checked
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use knightpath_core::Point;
    use knightpath_paths::{Estimate, HeuristicTally, PairOutcome};

    fn report() -> AdmissibilityReport {
        AdmissibilityReport {
            pairs: vec![PairOutcome {
                start: Point::new(0, 0),
                goal: Point::new(2, 1),
                optimal_cost: Some(1.0),
                nodes_expanded: 3,
                estimates: vec![
                    Estimate {
                        heuristic: "zero".into(),
                        value: Some(0.0),
                        admissible: Some(true),
                    },
                    Estimate {
                        heuristic: "manhattan".into(),
                        value: Some(3.0),
                        admissible: Some(false),
                    },
                ],
            }],
            tallies: vec![
                HeuristicTally {
                    heuristic: "zero".into(),
                    declared_admissible: true,
                    passed: 1,
                    checked: 1,
                    unbounded: 0,
                    worst_excess: Some(-1.0),
                },
                HeuristicTally {
                    heuristic: "manhattan".into(),
                    declared_admissible: false,
                    passed: 0,
                    checked: 1,
                    unbounded: 0,
                    worst_excess: Some(2.0),
                },
            ],
            unreachable: 0,
        }
    }

    #[test]
    fn text_report() {
        let text = format_report(&report());
        assert!(text.starts_with("pair 1: (0, 0) -> (2, 1)  optimal 1.0000  (3 expanded)\n"));
        assert!(text.contains("  manhattan     h =   3.0000  OVERESTIMATE\n"));
        assert!(text.contains("  zero          1/1 passed (100%), declared admissible\n"));
        assert!(text.contains("  manhattan     0/1 passed (0%), declared not admissible\n"));
        assert!(!text.contains("claim violated"));
    }

    #[test]
    fn violated_claim_is_flagged() {
        let mut r = report();
        r.tallies[0].passed = 0;
        r.unreachable = 2;
        r.pairs[0].estimates[0].value = None;
        r.pairs[0].estimates[0].admissible = Some(false);
        let text = format_report(&r);
        assert!(text.contains("  zero          h =      inf  OVERESTIMATE\n"));
        assert!(text.contains("summary (2 unreachable pairs skipped)\n"));
        assert!(text.contains("declared admissible  !! claim violated"));
    }

    #[test]
    fn json_report_has_tallies() {
        let json = serde_json::to_value(report()).unwrap();
        assert_eq!(json["tallies"][1]["heuristic"], "manhattan");
        assert_eq!(json["pairs"][0]["start"]["x"], 0);
        assert_eq!(json["unreachable"], 0);
    }
}
