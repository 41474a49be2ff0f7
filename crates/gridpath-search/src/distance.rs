use gridpath_core::Point;

/// Manhattan (L1) distance between two points.
///
/// Never overestimates the number of 4-directional unit steps between `a`
/// and `b`, so it is an admissible and consistent A* heuristic on grids
/// without diagonal moves.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Point::new(0, 0);
        let b = Point::new(10, 5);
        assert_eq!(manhattan(a, b), 15);
        assert_eq!(manhattan(b, a), 15);
        assert_eq!(manhattan(a, a), 0);
    }

    #[test]
    fn manhattan_handles_negative_coordinates() {
        assert_eq!(manhattan(Point::new(-2, 3), Point::new(1, -1)), 7);
    }
}
