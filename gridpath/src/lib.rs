//! gridpath: load a text map, find the shortest route between its start and
//! goal markers, and print the route and the marked map.

pub mod args;
pub mod load;
pub mod report;

use std::error::Error;
use std::io::Write;

use gridpath_search::find_path;

pub use args::{Command, Options, parse_args};

/// Load the map named by `opts`, print it, search it and print the outcome.
///
/// Returns whether a path was found. An unreachable goal is not an error.
pub fn run<W: Write>(opts: &Options, out: &mut W) -> Result<bool, Box<dyn Error>> {
    let grid = load::load_or_default(opts.map_file.as_deref())?;

    writeln!(out)?;
    writeln!(out, "Initial Map:")?;
    report::write_map(out, &grid, &[], false)?;

    let mut path = find_path(&grid, &opts.markers)?;
    report::write_outcome(out, &mut path, &opts.markers, opts.color)?;
    Ok(path.is_found())
}
