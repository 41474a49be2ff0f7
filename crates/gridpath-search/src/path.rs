use std::fmt;

use gridpath_core::{Point, TextGrid};

/// A single cardinal move between two adjacent path points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Direction of the step from `from` to `to`, or `None` if the two points
    /// are not cardinally adjacent.
    pub fn between(from: Point, to: Point) -> Option<Self> {
        match (to.x - from.x, to.y - from.y) {
            (0, -1) => Some(Self::Up),
            (0, 1) => Some(Self::Down),
            (-1, 0) => Some(Self::Left),
            (1, 0) => Some(Self::Right),
            _ => None,
        }
    }

    /// One-letter form: `U`, `D`, `L` or `R`.
    pub const fn letter(self) -> char {
        match self {
            Self::Up => 'U',
            Self::Down => 'D',
            Self::Left => 'L',
            Self::Right => 'R',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Result of a search: the route from start to goal plus a private copy of
/// the grid it was found on.
///
/// An empty point list means no path exists. The grid copy is independent of
/// the grid that was searched, so [`mark`](Self::mark) never touches the
/// caller's map.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    points: Vec<Point>,
    map: TextGrid,
}

impl Path {
    pub(crate) fn new(points: Vec<Point>, map: TextGrid) -> Self {
        Self { points, map }
    }

    /// The "no path" outcome.
    pub(crate) fn not_found(map: TextGrid) -> Self {
        Self {
            points: Vec::new(),
            map,
        }
    }

    /// Points from start to goal, both included.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The grid snapshot, with marks if [`mark`](Self::mark) was called.
    #[inline]
    pub fn map(&self) -> &TextGrid {
        &self.map
    }

    /// Consume the path and keep only its grid snapshot.
    pub fn into_map(self) -> TextGrid {
        self.map
    }

    /// Whether a route was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        !self.points.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of moves (`len - 1`), or 0 when nothing was found.
    #[inline]
    pub fn steps(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn goal(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// One direction per move, in path order.
    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        self.points
            .windows(2)
            .filter_map(|w| Direction::between(w[0], w[1]))
    }

    /// Write `ch` on every path cell strictly between start and goal.
    ///
    /// Start and goal cells keep their markers. Returns how many cells were
    /// written.
    pub fn mark(&mut self, ch: char) -> usize {
        let n = self.points.len();
        if n < 3 {
            return 0;
        }
        let mut written = 0;
        for &p in &self.points[1..n - 1] {
            if self.map.set(p, ch) {
                written += 1;
            }
        }
        written
    }
}
