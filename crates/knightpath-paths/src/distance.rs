use knightpath_core::Point;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Closed-form lower bound on the knight hop count between two points.
///
/// One knight move changes the Chebyshev distance by at most 2 and the
/// Manhattan distance by at most 3, so `max(⌈cheb/2⌉, ⌈manh/3⌉)` never
/// exceeds the true hop count on any board.
#[inline]
pub fn knight_lower_bound(a: Point, b: Point) -> i32 {
    let by_cheb = (chebyshev(a, b) + 1) / 2;
    let by_manh = (manhattan(a, b) + 2) / 3;
    by_cheb.max(by_manh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics() {
        let a = Point::new(1, 1);
        let b = Point::new(6, 3);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(chebyshev(a, b), 5);
        assert_eq!(manhattan(b, a), 7);
        assert_eq!(chebyshev(a, a), 0);
    }

    #[test]
    fn lower_bound_small_cases() {
        let o = Point::ZERO;
        assert_eq!(knight_lower_bound(o, o), 0);
        assert_eq!(knight_lower_bound(o, Point::new(2, 1)), 1);
        assert_eq!(knight_lower_bound(o, Point::new(1, 0)), 1);
        assert_eq!(knight_lower_bound(o, Point::new(4, 4)), 3);
        assert_eq!(knight_lower_bound(o, Point::new(7, 7)), 5);
    }

    #[test]
    fn plain_metrics_overcount_a_single_hop() {
        let o = Point::ZERO;
        let hop = Point::new(2, 1);
        assert!(manhattan(o, hop) > 1);
        assert!(chebyshev(o, hop) > 1);
        assert_eq!(knight_lower_bound(o, hop), 1);
    }
}
