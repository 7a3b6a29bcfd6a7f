//! Plain-text rendering of boards, frontiers and results.

use std::fmt::Write as _;

use knightpath_core::{Board, Point};
use knightpath_paths::{SearchResult, Snapshot};

/// Glyphs drawn over terrain.
pub const START: char = 'S';
pub const GOAL: char = 'G';
pub const CURRENT: char = '@';
pub const CLOSED: char = 'x';
pub const OPEN: char = 'o';
pub const PATH: char = '*';

/// The board with one step's frontier drawn over it.
pub fn frontier(board: &Board, snap: &Snapshot, start: Point, goal: Point) -> String {
    board.render(|p, terrain| {
        if p == snap.current {
            CURRENT
        } else if p == start {
            START
        } else if p == goal {
            GOAL
        } else if snap.closed.contains(&p) {
            CLOSED
        } else if snap.open.contains(&p) {
            OPEN
        } else {
            terrain.glyph()
        }
    })
}

/// The board with a result's path drawn over it.
pub fn path(board: &Board, result: &SearchResult, start: Point, goal: Point) -> String {
    let cells = result.path.as_deref().unwrap_or_default();
    board.render(|p, terrain| {
        if p == start {
            START
        } else if p == goal {
            GOAL
        } else if cells.contains(&p) {
            PATH
        } else {
            terrain.glyph()
        }
    })
}

/// Place two multi-line blocks next to each other.
pub fn side_by_side(left: &str, right: &str, gap: usize) -> String {
    let width = left.lines().map(|l| l.chars().count()).max().unwrap_or(0);
    let mut l = left.lines();
    let mut r = right.lines();
    let mut out = String::new();
    loop {
        let (a, b) = (l.next(), r.next());
        if a.is_none() && b.is_none() {
            break;
        }
        let a = a.unwrap_or("");
        let pad = width - a.chars().count() + gap;
        let _ = writeln!(out, "{a}{:pad$}{}", "", b.unwrap_or(""));
    }
    out
}

/// `(1, 1) -> (2, 3) -> ...`
pub fn path_list(path: &[Point]) -> String {
    path.iter().map(Point::to_string).collect::<Vec<_>>().join(" -> ")
}

/// Multi-line summary: expansions, cost, length and path.
pub fn summary(label: &str, result: &SearchResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[{label}]");
    let _ = writeln!(out, "  nodes expanded:    {}", result.nodes_expanded);
    let _ = writeln!(out, "  initial estimate:  {:.4}", result.initial_heuristic);
    match (&result.path, result.cost()) {
        (Some(path), Some(cost)) => {
            let _ = writeln!(out, "  path cost:         {cost:.4}");
            let _ = writeln!(out, "  path length:       {} moves", path.len() - 1);
            let _ = writeln!(out, "  path:              {}", path_list(path));
        }
        _ => {
            let _ = writeln!(out, "  no path");
        }
    }
    out
}
