//! Adversarial search for Hackenbush positions.
//!
//! ## Overview
//!
//! Depth-first minimax with alpha-beta pruning. Blue maximizes and Red
//! minimizes; a terminal loss scores `±win_value` and each ply shaves one
//! unit off the magnitude, so quick wins and slow losses are preferred.
//! The tree is finite because every cut removes at least one branch.
//!
//! ## Usage
//!
//! ```rust
//! use hackenbush::core::{Color, Level};
//! use hackenbush::search::{AlphaBeta, SearchConfig};
//!
//! let position = Level::sample().into_position().unwrap();
//! let mut search = AlphaBeta::new(SearchConfig::default());
//!
//! let result = search.solve(&position, Color::Blue).unwrap();
//! assert_eq!(result.winner(), Some(Color::Blue));
//! println!("play branch {:?}", result.best_move());
//! ```

pub mod alphabeta;
pub mod config;
#[cfg(feature = "parallel")]
mod parallel;
pub mod result;
pub mod stats;

pub use alphabeta::AlphaBeta;
pub use config::SearchConfig;
pub use result::{Line, SearchResult, Value, NEG_INF, POS_INF};
pub use stats::SearchStats;
