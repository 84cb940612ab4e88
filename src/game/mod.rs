//! Game driver state.
//!
//! The engine holds no process-wide state; a `Game` is the explicit state
//! a driver (terminal loop, UI, test) owns between turns:
//! - The current position
//! - Whose turn it is
//! - What has been played, and how much fell each time

mod game;

pub use game::{Game, GameResult, MoveRecord};
