//! Vertices, branches and moves.
//!
//! ## ID Layout
//!
//! - `Vertex(0)` is the Ground. It always exists and is never removed.
//! - Every other vertex exists only as an endpoint of a surviving branch.
//! - `Move(n)` names the n-th branch of a position, 1-based. Move numbers
//!   are only meaningful within the position they were read from: after a
//!   cut the survivors are renumbered.
//!
//! ```
//! use hackenbush::core::{Branch, Color, Move, Vertex};
//!
//! let stalk = Branch::new(Vertex::GROUND, Vertex(1), Color::Blue);
//! assert!(stalk.touches_ground());
//! assert_eq!(stalk.opposite(Vertex(1)), Vertex::GROUND);
//!
//! let first = Move::new(1);
//! assert_eq!(first.slot(), Some(0));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use super::color::Color;

/// Vertex identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Vertex(pub u32);

impl Vertex {
    /// The Ground vertex that anchors connectivity.
    pub const GROUND: Vertex = Vertex(0);

    #[must_use]
    pub const fn is_ground(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An undirected colored edge.
///
/// Inside a `Position` the branch is oriented from the endpoint that the
/// breadth-first walk reached first, which is the order drivers render it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Branch {
    pub from: Vertex,
    pub to: Vertex,
    pub color: Color,
}

impl Branch {
    #[must_use]
    pub const fn new(from: Vertex, to: Vertex, color: Color) -> Self {
        Self { from, to, color }
    }

    /// Check if either endpoint is the Ground.
    #[must_use]
    pub const fn touches_ground(&self) -> bool {
        self.from.is_ground() || self.to.is_ground()
    }

    /// Check if both endpoints are the same vertex.
    #[must_use]
    pub fn is_loop(&self) -> bool {
        self.from == self.to
    }

    /// The endpoint across the branch from `vertex`.
    ///
    /// For a loop this is `vertex` itself.
    #[must_use]
    pub fn opposite(&self, vertex: Vertex) -> Vertex {
        if self.from == vertex {
            self.to
        } else {
            self.from
        }
    }
}

/// A branch index within one position, 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move(pub u32);

impl Move {
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Zero-based slot into a branch list, or `None` for the invalid move 0.
    #[must_use]
    pub const fn slot(self) -> Option<usize> {
        match self.0 {
            0 => None,
            n => Some(n as usize - 1),
        }
    }

    #[must_use]
    pub const fn from_slot(slot: usize) -> Self {
        Self(slot as u32 + 1)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Move {
    fn from(index: u32) -> Self {
        Self(index)
    }
}
