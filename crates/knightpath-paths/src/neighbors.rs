use knightpath_core::Point;

/// The eight knight-move offsets, in expansion order.
pub const KNIGHT_OFFSETS: [Point; 8] = [
    Point::new(1, 2),
    Point::new(1, -2),
    Point::new(-1, 2),
    Point::new(-1, -2),
    Point::new(2, 1),
    Point::new(2, -1),
    Point::new(-2, 1),
    Point::new(-2, -1),
];

/// Whether `a` and `b` are exactly one knight move apart.
#[inline]
pub fn is_knight_move(a: Point, b: Point) -> bool {
    let d = (b - a).abs();
    (d.x == 1 && d.y == 2) || (d.x == 2 && d.y == 1)
}

/// Reusable buffer for knight-neighbor enumeration.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(KNIGHT_OFFSETS.len()),
        }
    }

    /// Return the knight-move neighbors of `p`, keeping only those for which
    /// `keep` returns `true`. Order follows [`KNIGHT_OFFSETS`].
    pub fn knight(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        for d in KNIGHT_OFFSETS {
            let n = p + d;
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}
