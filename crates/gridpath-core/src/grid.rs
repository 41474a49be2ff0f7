//! The [`TextGrid`] type: a rectangular grid of characters parsed from text
//! rows.
//!
//! Each character is one cell. Which characters are start, goal, passable or
//! obstacle is decided by the caller; the grid only stores them and answers
//! bounds, lookup and traversability queries.

use std::fmt;
use std::str::FromStr;

use crate::geom::{Point, Range};

// ---------------------------------------------------------------------------
// TextGrid
// ---------------------------------------------------------------------------

/// A rectangular grid of `char` cells stored row-major in a flat buffer.
///
/// Construction rejects ragged input, so every row has the same width. A grid
/// with no rows or with zero-width rows is *empty*.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextGrid {
    cells: Vec<char>,
    bounds: Range,
}

impl TextGrid {
    /// Build a grid from rows of text.
    ///
    /// Widths are counted in `char`s. Fails with
    /// [`GridError::MalformedGrid`] on the first row whose width differs from
    /// the first row's.
    pub fn from_rows<I, S>(rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cells = Vec::new();
        let mut width: Option<usize> = None;
        let mut height = 0usize;

        for (y, row) in rows.into_iter().enumerate() {
            let before = cells.len();
            cells.extend(row.as_ref().chars());
            let found = cells.len() - before;
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(GridError::MalformedGrid {
                        row: y,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        let width = width.unwrap_or(0);
        Ok(Self {
            cells,
            bounds: Range::new(0, 0, width as i32, height as i32),
        })
    }

    /// The bounding range of the grid, anchored at (0, 0).
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Size of the grid as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height in rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Convert a `Point` to a flat row-major index. Returns `None` if out of
    /// bounds.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width() as usize + p.x as usize)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let w = self.width() as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// Read the cell at `p`, or `None` if `p` is outside the grid.
    #[inline]
    pub fn at(&self, p: Point) -> Option<char> {
        self.idx(p).map(|i| self.cells[i])
    }

    /// Whether a mover heading for `goal` may step onto `p`: it must be in
    /// bounds and hold either the passable marker or the goal marker.
    #[inline]
    pub fn is_traversable(&self, p: Point, goal: char, passable: char) -> bool {
        matches!(self.at(p), Some(c) if c == passable || c == goal)
    }

    /// Locate `marker`, scanning rows top to bottom and each row left to
    /// right. Returns the first match.
    pub fn find(&self, marker: char) -> Result<Point, GridError> {
        self.cells
            .iter()
            .position(|&c| c == marker)
            .map(|i| self.point(i))
            .ok_or(GridError::MarkerNotFound(marker))
    }

    /// Overwrite the cell at `p`. Returns `false` (and does nothing) if `p`
    /// is outside the grid.
    pub fn set(&mut self, p: Point, ch: char) -> bool {
        match self.idx(p) {
            Some(i) => {
                self.cells[i] = ch;
                true
            }
            None => false,
        }
    }

    /// Iterate over rows as character slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> + '_ {
        let w = self.width() as usize;
        (0..self.height() as usize).map(move |y| &self.cells[y * w..(y + 1) * w])
    }

    /// Row-major iterator over `(Point, char)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, char)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }
}

impl FromStr for TextGrid {
    type Err = GridError;

    /// Parse newline-separated rows. `"\r\n"` line endings are accepted and a
    /// trailing newline does not add a row.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_rows(s.lines())
    }
}

impl fmt::Display for TextGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for ch in row {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TextGrid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let rows: Vec<String> = self.rows().map(|r| r.iter().collect()).collect();
        rows.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TextGrid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<String>::deserialize(deserializer)?;
        TextGrid::from_rows(rows).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// GridError
// ---------------------------------------------------------------------------

/// Errors raised while building or querying a [`TextGrid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Rows have inconsistent widths.
    MalformedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The requested marker does not occur anywhere in the grid.
    MarkerNotFound(char),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedGrid {
                row,
                expected,
                found,
            } => write!(
                f,
                "malformed grid: row {row} is {found} cells wide, expected {expected}"
            ),
            Self::MarkerNotFound(ch) => {
                write!(f, "marker \u{201c}{ch}\u{201d} not found in grid")
            }
        }
    }
}

impl std::error::Error for GridError {}
