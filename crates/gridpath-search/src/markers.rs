/// Which characters of a [`TextGrid`](gridpath_core::TextGrid) mean what.
///
/// Any character that is not the start, goal or passable marker is an
/// obstacle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Markers {
    /// Cell the search starts from.
    pub start: char,
    /// Cell the search is looking for.
    pub goal: char,
    /// Open floor.
    pub passable: char,
    /// Written over interior path cells by [`Path::mark`](crate::Path::mark).
    pub mark: char,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            start: 'A',
            goal: 'B',
            passable: ' ',
            mark: '*',
        }
    }
}
