//! # hackenbush
//!
//! Game engine and solver for Hackenbush, the game of cutting colored
//! branches off a grounded graph.
//!
//! ## Rules
//!
//! Players alternate; Blue cuts blue branches and Red cuts red ones. After a
//! cut every branch no longer connected to the Ground (vertex 0) falls. A
//! player with nothing left to cut loses.
//!
//! ## Design Principles
//!
//! 1. **Immutable positions**: a cut derives a new `Position`; nothing is
//!    edited in place, so search can keep any number of positions alive.
//!
//! 2. **Stable numbering**: branches are numbered 1..N by a breadth-first
//!    walk from Ground, the numbering a human driver sees and types back.
//!
//! 3. **Explicit driver state**: the engine holds no global state. Whoever
//!    drives the game owns a `Game`.
//!
//! ## Modules
//!
//! - `core`: colors, branches, positions, levels, errors
//! - `search`: minimax with alpha-beta pruning
//! - `game`: driver state and history

pub mod core;
pub mod game;
pub mod search;

// Re-export commonly used types
pub use crate::core::{
    Branch, Color, ColorMap, Error, Level, LevelBuilder, Move, Position, Result, Vertex,
};

pub use crate::game::{Game, GameResult, MoveRecord};

pub use crate::search::{AlphaBeta, Line, SearchConfig, SearchResult, SearchStats, Value};
