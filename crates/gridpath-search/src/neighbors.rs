use gridpath_core::{Point, TextGrid};

use crate::distance::manhattan;
use crate::node::{NodeId, SearchNode};

/// Cardinal step offsets in expansion order: up, down, left, right.
///
/// The order is observable: among equally good candidates the one generated
/// first is kept, so changing it changes which shortest path is returned.
pub const CARDINAL_ORDER: [Point; 4] = [
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(-1, 0),
    Point::new(1, 0),
];

/// Cached successor generation helper.
///
/// Reuses one buffer across expansions so the search loop does not allocate
/// per node.
pub struct Neighbors {
    buf: Vec<SearchNode>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(CARDINAL_ORDER.len()),
        }
    }

    /// Return the traversable successors of `current` (stored as `parent` in
    /// the pool), in [`CARDINAL_ORDER`].
    ///
    /// A cell qualifies if it is inside the grid and holds either
    /// `passable` or `goal_marker`. Each successor costs one more step than
    /// `current` and is scored against `goal`.
    pub fn expand(
        &mut self,
        grid: &TextGrid,
        parent: NodeId,
        current: &SearchNode,
        goal: Point,
        goal_marker: char,
        passable: char,
    ) -> &[SearchNode] {
        self.buf.clear();
        for d in CARDINAL_ORDER {
            let n = current.pos + d;
            if grid.is_traversable(n, goal_marker, passable) {
                self.buf.push(SearchNode {
                    pos: n,
                    cost: current.cost + 1,
                    heuristic: manhattan(n, goal),
                    parent: Some(parent),
                });
            }
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodePool;

    fn expand_at(rows: &[&str], at: Point) -> Vec<SearchNode> {
        let grid = TextGrid::from_rows(rows).unwrap();
        let goal = grid.find('B').unwrap();
        let mut pool = NodePool::new();
        let start = SearchNode::start(at, manhattan(at, goal));
        let id = pool.push(start);
        let mut nb = Neighbors::new();
        nb.expand(&grid, id, &start, goal, 'B', ' ').to_vec()
    }

    #[test]
    fn order_is_up_down_left_right() {
        let got = expand_at(&["   ", " A ", "  B"], Point::new(1, 1));
        let pos: Vec<_> = got.iter().map(|n| n.pos).collect();
        assert_eq!(
            pos,
            vec![
                Point::new(1, 0),
                Point::new(1, 2),
                Point::new(0, 1),
                Point::new(2, 1)
            ]
        );
    }

    #[test]
    fn successors_carry_cost_heuristic_and_parent() {
        let got = expand_at(&["   ", " A ", "  B"], Point::new(1, 1));
        for n in &got {
            assert_eq!(n.cost, 1);
            assert_eq!(n.heuristic, manhattan(n.pos, Point::new(2, 2)));
            assert_eq!(n.parent.map(NodeId::index), Some(0));
        }
    }

    #[test]
    fn walls_bounds_and_start_marker_are_skipped() {
        // Corner start: up and left fall off the grid, right is a wall.
        let got = expand_at(&["A#", " B"], Point::new(0, 0));
        let pos: Vec<_> = got.iter().map(|n| n.pos).collect();
        assert_eq!(pos, vec![Point::new(0, 1)]);

        // The goal cell is enterable even though it is not passable floor.
        let got = expand_at(&["A#", " B"], Point::new(0, 1));
        let pos: Vec<_> = got.iter().map(|n| n.pos).collect();
        assert_eq!(pos, vec![Point::new(1, 1)]);
    }
}
