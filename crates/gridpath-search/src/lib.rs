//! A\* shortest-path search over character grids.
//!
//! Given a [`TextGrid`](gridpath_core::TextGrid) holding a start marker, a
//! goal marker and passable floor, [`find_path`] returns a minimum-step
//! 4-directional route as a [`Path`], or an empty `Path` when the goal is
//! unreachable.
//!
//! - Successors are generated up, down, left, right ([`CARDINAL_ORDER`]).
//! - The open list pops the lowest `cost + heuristic`, earliest inserted
//!   first, so results are reproducible.
//! - The heuristic is [`manhattan`] distance.
//! - Nodes live in an append-only [`NodePool`] and point at their parents by
//!   [`NodeId`].
//!
//! For incremental control use [`Search`] directly and drive it with
//! [`Search::step`].

mod astar;
mod distance;
mod frontier;
mod markers;
mod neighbors;
mod node;
mod path;

pub use astar::{Search, SearchState, find_path};
pub use distance::manhattan;
pub use frontier::{Frontier, Offer};
pub use markers::Markers;
pub use neighbors::{CARDINAL_ORDER, Neighbors};
pub use node::{NodeId, NodePool, SearchNode};
pub use path::{Direction, Path};
