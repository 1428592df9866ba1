use wayfind_core::Point;

/// Manhattan (L1) distance: the fewest 4-connected steps between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance: the fewest 8-connected steps between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances_are_symmetric() {
        let a = Point::new(1, 4);
        let b = Point::new(5, 2);
        assert_eq!(manhattan(a, b), 6);
        assert_eq!(manhattan(b, a), 6);
        assert_eq!(chebyshev(a, b), 4);
        assert_eq!(chebyshev(a, a), 0);
    }
}
