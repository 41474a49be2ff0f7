//! Text output: maps, point listings and the "no path" notice.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use gridpath_core::{Point, TextGrid};
use gridpath_search::{Markers, Path};

const PATH_COLOR: Color = Color::Yellow;

/// Print `grid` row by row. With `color`, cells listed in `highlight` are
/// drawn in [`PATH_COLOR`].
pub fn write_map<W: Write>(
    out: &mut W,
    grid: &TextGrid,
    highlight: &[Point],
    color: bool,
) -> io::Result<()> {
    let mut lit = vec![false; grid.len()];
    if color {
        for &p in highlight {
            if let Some(i) = grid.idx(p) {
                lit[i] = true;
            }
        }
    }
    for (y, row) in grid.rows().enumerate() {
        for (x, &ch) in row.iter().enumerate() {
            if lit[y * row.len() + x] {
                queue!(out, SetForegroundColor(PATH_COLOR), Print(ch), ResetColor)?;
            } else {
                queue!(out, Print(ch))?;
            }
        }
        queue!(out, Print('\n'))?;
    }
    out.flush()
}

/// Heading for a found path, e.g. `Path from A to B (X, Y) required 3 steps:`.
pub fn heading(path: &Path, markers: &Markers) -> String {
    let steps = path.steps();
    format!(
        "Path from {} to {} (X, Y) required {steps} step{}:",
        markers.start,
        markers.goal,
        if steps > 1 { "s" } else { "" }
    )
}

/// One line per point with the direction of the move that leaves it. The
/// goal line has no direction.
pub fn write_listing<W: Write>(out: &mut W, path: &Path) -> io::Result<()> {
    let mut dirs = path.directions();
    for p in path.points() {
        match dirs.next() {
            Some(d) => writeln!(out, "{p} {d}")?,
            None => writeln!(out, "{p}")?,
        }
    }
    Ok(())
}

/// Everything printed after the initial map: either the listing and the
/// marked map, or the "no path" notice.
pub fn write_outcome<W: Write>(
    out: &mut W,
    path: &mut Path,
    markers: &Markers,
    color: bool,
) -> io::Result<()> {
    writeln!(out)?;
    if !path.is_found() {
        return writeln!(out, "No path found!");
    }
    writeln!(out, "{}", heading(path, markers))?;
    write_listing(out, path)?;
    writeln!(out)?;
    writeln!(out, "Map:")?;
    path.mark(markers.mark);
    let interior = match path.points() {
        [_, inner @ .., _] => inner,
        _ => &[][..],
    };
    write_map(out, path.map(), interior, color)
}
