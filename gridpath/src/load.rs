//! Map sources: a text file or the built-in demo map.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use gridpath_core::{GridError, TextGrid};

/// Map used when no file is given. `A` has to go through the gap in the
/// second row and around the box to reach `B`.
pub const DEFAULT_MAP: [&str; 6] = [
    "A          ",
    "--| |------",
    "           ",
    "   |-----| ",
    "   |     | ",
    "---|     |B",
];

/// Errors while loading a map.
#[derive(Debug)]
pub enum LoadError {
    Io { path: PathBuf, source: io::Error },
    Grid { path: PathBuf, source: GridError },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::Grid { path, source } => write!(f, "{}: {source}", path.display()),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Grid { source, .. } => Some(source),
        }
    }
}

/// The built-in map.
pub fn default_map() -> TextGrid {
    TextGrid::from_rows(DEFAULT_MAP).unwrap_or_default()
}

/// Read a map from `path`, one row per line.
pub fn load_map(path: &Path) -> Result<TextGrid, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let grid = text.parse::<TextGrid>().map_err(|source| LoadError::Grid {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!(
        "loaded {}x{} map from {}",
        grid.width(),
        grid.height(),
        path.display()
    );
    Ok(grid)
}

/// Load `path` if given, otherwise the built-in map.
pub fn load_or_default(path: Option<&Path>) -> Result<TextGrid, LoadError> {
    match path {
        Some(p) => load_map(p),
        None => {
            log::info!("no map file given, using the built-in map");
            Ok(default_map())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_core::Point;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("gridpath-{}-{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn default_map_is_rectangular() {
        let g = default_map();
        assert_eq!(g.size(), Point::new(11, 6));
        assert_eq!(g.find('A').unwrap(), Point::new(0, 0));
        assert_eq!(g.find('B').unwrap(), Point::new(10, 5));
    }

    #[test]
    fn loads_file_rows() {
        let path = temp_file("ok.txt", "A  \n # \n  B\n");
        let g = load_or_default(Some(&path)).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(g.size(), Point::new(3, 3));
        assert_eq!(g.at(Point::new(1, 1)), Some('#'));
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = std::env::temp_dir().join("gridpath-definitely-missing.txt");
        let err = load_map(&path).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("cannot read"));
    }

    #[test]
    fn ragged_file_is_grid_error() {
        let path = temp_file("ragged.txt", "A  \nB\n");
        let err = load_map(&path).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert!(matches!(
            err,
            LoadError::Grid {
                source: GridError::MalformedGrid { row: 1, .. },
                ..
            }
        ));
    }
}
