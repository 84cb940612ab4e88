//! Core engine types: colors, branches, positions, levels, errors.
//!
//! Everything here is pure data plus the cut transition. Positions are
//! derived, never mutated, so search can hold as many as it likes.

pub mod branch;
pub mod color;
pub mod error;
pub mod level;
pub mod position;

pub use branch::{Branch, Move, Vertex};
pub use color::{Color, ColorMap};
pub use error::{Error, Result};
pub use level::{Level, LevelBuilder};
pub use position::Position;
