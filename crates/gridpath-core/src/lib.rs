//! **gridpath-core**: core types for grid pathfinding.
//!
//! This crate provides the types shared across the *gridpath* workspace:
//! integer geometry ([`Point`], [`Range`]) and the character grid
//! ([`TextGrid`]) that searches run over.

pub mod geom;
pub mod grid;

pub use geom::{Point, Range};
pub use grid::{GridError, TextGrid};
