//! Command-line parsing.

use std::fmt;
use std::path::PathBuf;

use gridpath_search::Markers;

pub const USAGE: &str = "\
gridpath - shortest path between two markers on a text map

USAGE:
    gridpath [OPTIONS] [MAP_FILE]

Reads MAP_FILE line by line, or uses a built-in map when none is given.

OPTIONS:
        --start <CHAR>      Start marker (default: A)
        --goal <CHAR>       Goal marker (default: B)
        --passable <CHAR>   Open floor (default: space)
        --mark <CHAR>       Drawn over the path (default: *)
        --no-color          Print the marked map without colors
    -h, --help              Print help information

Set RUST_LOG=debug to see search statistics.";

/// Settings for one run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Options {
    pub map_file: Option<PathBuf>,
    pub markers: Markers,
    pub color: bool,
}

/// What the command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Options),
    Help,
}

/// Errors in the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgsError {
    /// An option that takes a value was last on the line.
    MissingValue(String),
    /// A marker option got something other than exactly one character.
    NotAChar { flag: String, value: String },
    UnknownOption(String),
    /// More than one map file was given.
    ExtraArgument(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingValue(flag) => write!(f, "{flag} needs a value"),
            Self::NotAChar { flag, value } => {
                write!(f, "{flag} expects a single character, got {value:?}")
            }
            Self::UnknownOption(arg) => write!(f, "unknown option: {arg}"),
            Self::ExtraArgument(arg) => write!(f, "unexpected argument: {arg}"),
        }
    }
}

impl std::error::Error for ArgsError {}

/// Parse arguments, not including the program name.
pub fn parse_args<I>(args: I) -> Result<Command, ArgsError>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = Options {
        color: true,
        ..Options::default()
    };
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let slot = match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--no-color" => {
                opts.color = false;
                continue;
            }
            "--start" => &mut opts.markers.start,
            "--goal" => &mut opts.markers.goal,
            "--passable" => &mut opts.markers.passable,
            "--mark" => &mut opts.markers.mark,
            s if s.starts_with('-') && s.len() > 1 => {
                return Err(ArgsError::UnknownOption(s.to_string()));
            }
            s => {
                if opts.map_file.is_some() {
                    return Err(ArgsError::ExtraArgument(s.to_string()));
                }
                opts.map_file = Some(PathBuf::from(s));
                continue;
            }
        };
        let value = args
            .next()
            .ok_or_else(|| ArgsError::MissingValue(arg.clone()))?;
        *slot = single_char(&value).ok_or(ArgsError::NotAChar { flag: arg, value })?;
    }

    Ok(Command::Run(opts))
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
