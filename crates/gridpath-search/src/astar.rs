use gridpath_core::{GridError, Point, TextGrid};

use crate::distance::manhattan;
use crate::frontier::{Frontier, Offer};
use crate::markers::Markers;
use crate::neighbors::Neighbors;
use crate::node::{NodeId, NodePool, SearchNode};
use crate::path::Path;

/// Where a [`Search`] stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// Frontier non-empty and the goal has not been popped yet.
    Running,
    /// The goal was popped; the path is optimal.
    Found,
    /// The frontier ran dry before the goal was reached.
    Exhausted,
}

impl SearchState {
    /// Whether no further [`Search::step`] will change anything.
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Running)
    }
}

/// Find a shortest 4-directional path from the start marker to the goal
/// marker of `grid` using A*.
///
/// An empty grid yields an empty [`Path`]. So does an unreachable goal; only
/// a missing marker is an error.
pub fn find_path(grid: &TextGrid, markers: &Markers) -> Result<Path, GridError> {
    Ok(Search::new(grid, markers)?.run())
}

/// An in-progress A* search over a borrowed grid.
///
/// Each [`step`](Self::step) expands at most one node, so a caller that needs
/// to cancel or budget a long search can stop between steps. Every node
/// created lives in a private pool until the `Search` is dropped.
pub struct Search<'g> {
    grid: &'g TextGrid,
    goal: Point,
    goal_marker: char,
    passable: char,
    pool: NodePool,
    frontier: Frontier,
    visited: Vec<bool>,
    neighbors: Neighbors,
    state: SearchState,
    found: Option<NodeId>,
    expanded: usize,
}

impl<'g> Search<'g> {
    /// Locate the start and goal markers and seed the frontier with the start
    /// node.
    ///
    /// Fails with [`GridError::MarkerNotFound`] if either marker is missing
    /// (the start marker is checked first). On an empty grid the search is
    /// created already [`Exhausted`](SearchState::Exhausted).
    pub fn new(grid: &'g TextGrid, markers: &Markers) -> Result<Self, GridError> {
        let cells = grid.len();
        let mut search = Self {
            grid,
            goal: Point::ZERO,
            goal_marker: markers.goal,
            passable: markers.passable,
            pool: NodePool::new(),
            frontier: Frontier::new(cells),
            visited: vec![false; cells],
            neighbors: Neighbors::new(),
            state: SearchState::Exhausted,
            found: None,
            expanded: 0,
        };
        if grid.is_empty() {
            log::debug!("astar: empty grid, nothing to search");
            return Ok(search);
        }

        let start = grid.find(markers.start)?;
        let goal = grid.find(markers.goal)?;
        log::debug!(
            "astar: {} -> {} on {}x{} grid",
            start,
            goal,
            grid.width(),
            grid.height()
        );

        let node = SearchNode::start(start, manhattan(start, goal));
        let id = search.pool.push(node);
        // Marker cells are always in bounds.
        if let Some(cell) = grid.idx(start) {
            search.frontier.insert(cell, id, node.total());
        }
        search.goal = goal;
        search.state = SearchState::Running;
        Ok(search)
    }

    #[inline]
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Number of nodes expanded so far.
    #[inline]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Number of nodes created so far, including the start node.
    #[inline]
    pub fn nodes(&self) -> usize {
        self.pool.len()
    }

    /// Live entries waiting in the open list.
    #[inline]
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Run one iteration: pop the best open node, test it against the goal,
    /// then close it and queue its successors.
    pub fn step(&mut self) -> SearchState {
        if self.state.is_terminal() {
            return self.state;
        }

        let Some((cell, id)) = self.frontier.pop() else {
            self.state = SearchState::Exhausted;
            log::debug!(
                "astar: exhausted after {} expansions, {} nodes",
                self.expanded,
                self.pool.len()
            );
            return self.state;
        };

        let current = *self.pool.get(id);
        if current.pos == self.goal {
            self.found = Some(id);
            self.state = SearchState::Found;
            log::debug!(
                "astar: reached {} in {} steps after {} expansions, {} nodes",
                current.pos,
                current.cost,
                self.expanded,
                self.pool.len()
            );
            return self.state;
        }

        self.visited[cell] = true;
        self.expanded += 1;
        log::trace!(
            "astar: expand {} g={} h={}",
            current.pos,
            current.cost,
            current.heuristic
        );

        let successors = self.neighbors.expand(
            self.grid,
            id,
            &current,
            self.goal,
            self.goal_marker,
            self.passable,
        );
        for &next in successors {
            let Some(ni) = self.grid.idx(next.pos) else {
                continue;
            };
            if self.visited[ni] || !self.frontier.admits(ni, next.total()) {
                continue;
            }
            let nid = self.pool.push(next);
            if self.frontier.insert(ni, nid, next.total()) == Offer::Replaced {
                log::trace!("astar: better route to {} (f={})", next.pos, next.total());
            }
        }

        if self.frontier.is_empty() {
            self.state = SearchState::Exhausted;
            log::debug!(
                "astar: exhausted after {} expansions, {} nodes",
                self.expanded,
                self.pool.len()
            );
        }
        self.state
    }

    /// Step until the search is [`Found`](SearchState::Found) or
    /// [`Exhausted`](SearchState::Exhausted), then build the path.
    pub fn run(mut self) -> Path {
        while !self.step().is_terminal() {}
        self.into_path()
    }

    /// Build the result from the current state.
    ///
    /// Anything other than [`Found`](SearchState::Found) yields an empty path.
    pub fn into_path(self) -> Path {
        let map = self.grid.clone();
        match self.found {
            Some(id) => Path::new(self.pool.chain(id), map),
            None => Path::not_found(map),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn grid(rows: &[&str]) -> TextGrid {
        TextGrid::from_rows(rows).unwrap()
    }

    fn search(rows: &[&str]) -> Path {
        find_path(&grid(rows), &Markers::default()).unwrap()
    }

    /// Plain breadth-first search over the same traversability rule.
    fn bfs_steps(g: &TextGrid, m: &Markers) -> Option<usize> {
        let start = g.find(m.start).ok()?;
        let goal = g.find(m.goal).ok()?;
        let mut dist = vec![usize::MAX; g.len()];
        let mut queue = VecDeque::new();
        dist[g.idx(start)?] = 0;
        queue.push_back(start);
        while let Some(p) = queue.pop_front() {
            let d = dist[g.idx(p)?];
            if p == goal {
                return Some(d);
            }
            for n in [p.shift(0, -1), p.shift(0, 1), p.shift(-1, 0), p.shift(1, 0)] {
                if !g.is_traversable(n, m.goal, m.passable) {
                    continue;
                }
                let ni = g.idx(n)?;
                if dist[ni] == usize::MAX {
                    dist[ni] = d + 1;
                    queue.push_back(n);
                }
            }
        }
        None
    }

    fn assert_valid_route(g: &TextGrid, path: &Path, m: &Markers) {
        let pts = path.points();
        assert_eq!(pts.first().copied(), g.find(m.start).ok());
        assert_eq!(pts.last().copied(), g.find(m.goal).ok());
        for w in pts.windows(2) {
            assert!(w[0].is_adjacent(w[1]), "{} -> {} is not a step", w[0], w[1]);
            assert!(g.is_traversable(w[1], m.goal, m.passable));
        }
    }

    fn random_grid(rng: &mut StdRng) -> TextGrid {
        let w = rng.random_range(2..12);
        let h = rng.random_range(1..9);
        let mut cells: Vec<Vec<char>> = (0..h)
            .map(|_| {
                (0..w)
                    .map(|_| if rng.random_bool(0.3) { '#' } else { ' ' })
                    .collect()
            })
            .collect();
        let s = (rng.random_range(0..w), rng.random_range(0..h));
        let mut t = (rng.random_range(0..w), rng.random_range(0..h));
        while t == s {
            t = (rng.random_range(0..w), rng.random_range(0..h));
        }
        cells[s.1][s.0] = 'A';
        cells[t.1][t.0] = 'B';
        let rows: Vec<String> = cells.into_iter().map(|r| r.into_iter().collect()).collect();
        TextGrid::from_rows(rows).unwrap()
    }

    #[test]
    fn two_by_two_takes_two_steps_down_first() {
        let path = search(&["A ", " B"]);
        assert_eq!(path.steps(), 2);
        assert_eq!(
            path.points(),
            &[Point::new(0, 0), Point::new(0, 1), Point::new(1, 1)]
        );
    }

    #[test]
    fn walled_off_goal_is_not_found() {
        let path = search(&["A   ", "----", "   B"]);
        assert!(!path.is_found());
        assert!(path.points().is_empty());
    }

    #[test]
    fn enclosed_goal_is_not_found() {
        let path = search(&["A    ", "  ###", "  #B#", "  ###"]);
        assert!(!path.is_found());
    }

    #[test]
    fn start_equal_to_goal_is_a_single_point() {
        let g = grid(&["  ", " X"]);
        let markers = Markers {
            start: 'X',
            goal: 'X',
            ..Markers::default()
        };
        let mut path = find_path(&g, &markers).unwrap();
        assert_eq!(path.points(), &[Point::new(1, 1)]);
        assert_eq!(path.steps(), 0);
        assert_eq!(path.mark('*'), 0);
        assert_eq!(path.map(), &g);
    }

    #[test]
    fn missing_markers_are_errors() {
        let g = grid(&["A  ", "   "]);
        let err = find_path(&g, &Markers::default()).unwrap_err();
        assert_eq!(err, GridError::MarkerNotFound('B'));

        let g = grid(&["   ", "  B"]);
        let err = find_path(&g, &Markers::default()).unwrap_err();
        assert_eq!(err, GridError::MarkerNotFound('A'));
    }

    #[test]
    fn empty_grid_is_no_path_not_error() {
        let none: [&str; 0] = [];
        let g = TextGrid::from_rows(none).unwrap();
        let path = find_path(&g, &Markers::default()).unwrap();
        assert!(!path.is_found());

        let s = Search::new(&g, &Markers::default()).unwrap();
        assert_eq!(s.state(), SearchState::Exhausted);
    }

    #[test]
    fn detour_around_wall_is_shortest() {
        let rows = [
            "A          ",
            "--| |------",
            "           ",
            "   |-----| ",
            "   |     | ",
            "---|     |B",
        ];
        let g = grid(&rows);
        let m = Markers::default();
        let path = find_path(&g, &m).unwrap();
        assert_eq!(path.steps(), 15);
        assert_valid_route(&g, &path, &m);
    }

    #[test]
    fn custom_markers() {
        let g = grid(&["S..#", ".#..", "...G"]);
        let m = Markers {
            start: 'S',
            goal: 'G',
            passable: '.',
            mark: 'o',
        };
        let path = find_path(&g, &m).unwrap();
        assert_eq!(path.steps(), 5);
        assert_valid_route(&g, &path, &m);
    }

    #[test]
    fn repeated_searches_are_identical() {
        let g = grid(&["A      ", " ## ## ", "      B"]);
        let m = Markers::default();
        let first = find_path(&g, &m).unwrap();
        let second = find_path(&g, &m).unwrap();
        assert_eq!(first.points(), second.points());
    }

    #[test]
    fn marking_leaves_endpoints_and_source_grid() {
        let g = grid(&["A   ", "    ", "   B"]);
        let mut path = find_path(&g, &Markers::default()).unwrap();
        let written = path.mark('*');
        assert_eq!(written, path.len() - 2);
        assert_eq!(path.map().at(Point::new(0, 0)), Some('A'));
        assert_eq!(path.map().at(Point::new(3, 2)), Some('B'));
        // The searched grid is untouched.
        assert!(g.iter().all(|(_, c)| c != '*'));
    }

    #[test]
    fn stepping_reports_states() {
        let g = grid(&["A B"]);
        let mut s = Search::new(&g, &Markers::default()).unwrap();
        assert_eq!(s.state(), SearchState::Running);
        assert_eq!(s.frontier_len(), 1);
        assert_eq!(s.step(), SearchState::Running);
        assert_eq!(s.expanded(), 1);
        assert_eq!(s.step(), SearchState::Running);
        assert_eq!(s.step(), SearchState::Found);
        // Further steps are no-ops.
        assert_eq!(s.step(), SearchState::Found);
        assert_eq!(s.nodes(), 3);
        let path = s.into_path();
        assert_eq!(path.steps(), 2);
    }

    #[test]
    fn abandoned_search_yields_empty_path() {
        let g = grid(&["A     B"]);
        let mut s = Search::new(&g, &Markers::default()).unwrap();
        s.step();
        assert!(!s.state().is_terminal());
        assert!(!s.into_path().is_found());
    }

    #[test]
    fn exhausts_after_expanding_each_cell_once() {
        let g = grid(&["A   #", "    #", "#####", "   B "]);
        let mut s = Search::new(&g, &Markers::default()).unwrap();
        while !s.step().is_terminal() {}
        assert_eq!(s.state(), SearchState::Exhausted);
        // The start plus seven open cells above the wall.
        assert_eq!(s.expanded(), 8);
    }

    #[test]
    fn matches_breadth_first_search_on_random_grids() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let m = Markers::default();
        for _ in 0..500 {
            let g = random_grid(&mut rng);
            let path = find_path(&g, &m).unwrap();
            match bfs_steps(&g, &m) {
                Some(d) => {
                    assert_eq!(path.steps(), d, "grid:\n{g}");
                    assert_valid_route(&g, &path, &m);
                }
                None => assert!(!path.is_found(), "grid:\n{g}"),
            }
        }
    }
}
