use gridpath_core::Point;

/// Stable handle to a [`SearchNode`] inside a [`NodePool`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in its pool.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// One discovered way of reaching a grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    pub pos: Point,
    /// Steps taken from the start to reach `pos` along this node's chain.
    pub cost: i32,
    /// Heuristic estimate of the remaining steps to the goal.
    pub heuristic: i32,
    /// Predecessor on the chain back to the start; `None` for the start.
    pub parent: Option<NodeId>,
}

impl SearchNode {
    /// The node for the start position.
    pub fn start(pos: Point, heuristic: i32) -> Self {
        Self {
            pos,
            cost: 0,
            heuristic,
            parent: None,
        }
    }

    /// A\* priority key: `cost + heuristic`.
    #[inline]
    pub fn total(&self) -> i32 {
        self.cost + self.heuristic
    }
}

/// Append-only arena of search nodes.
///
/// Nodes are never removed while a search runs, so a parent handle stays
/// valid for as long as any of its descendants.
#[derive(Debug, Default)]
pub struct NodePool {
    nodes: Vec<SearchNode>,
}

impl NodePool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty pool with room for `cap` nodes.
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(cap),
        }
    }

    /// Store `node` and return its handle.
    pub fn push(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Positions from the root of `id`'s chain to `id` itself, inclusive.
    pub fn chain(&self, id: NodeId) -> Vec<Point> {
        let mut points = Vec::with_capacity(self.get(id).cost as usize + 1);
        let mut cur = Some(id);
        while let Some(ci) = cur {
            let node = self.get(ci);
            points.push(node.pos);
            cur = node.parent;
        }
        points.reverse();
        points
    }
}
