//! Search values and principal lines.
//!
//! ## Value Encoding
//!
//! Positive values favor Blue, negative values favor Red. A terminal loss
//! for the mover scores `±win_value`, and every ply between the root and
//! that terminal moves the value one step toward zero. A larger magnitude
//! therefore means a quicker win for the side the sign favors.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Color, Move};

/// Minimax value from Blue's point of view.
pub type Value = i32;

/// Lower end of the initial window.
pub const NEG_INF: Value = Value::MIN;

/// Upper end of the initial window.
pub const POS_INF: Value = Value::MAX;

/// Principal move sequence, furthest future move first.
pub type Line = SmallVec<[Move; 16]>;

/// Value of the position where `loser` has no branch to cut.
///
/// Only the magnitude of `win_value` is used.
#[must_use]
pub const fn terminal_value(loser: Color, win_value: Value) -> Value {
    let magnitude = win_value.saturating_abs();
    match loser {
        Color::Red => magnitude,
        Color::Blue => -magnitude,
    }
}

/// Move a child value one ply toward zero.
///
/// A win further away is worth one unit less than the same win one ply
/// sooner.
#[must_use]
pub const fn decay(value: Value) -> Value {
    if value > 0 {
        value - 1
    } else if value < 0 {
        value + 1
    } else {
        0
    }
}

/// Outcome of a search: the value and the line that realizes it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchResult {
    pub value: Value,

    /// Moves under optimal play by both sides.
    /// The move to play now is the last element.
    pub line: Line,
}

impl SearchResult {
    /// A result with no moves left to play.
    #[must_use]
    pub fn terminal(value: Value) -> Self {
        Self {
            value,
            line: Line::new(),
        }
    }

    /// The move to play now, if the mover has any.
    #[must_use]
    pub fn best_move(&self) -> Option<Move> {
        self.line.last().copied()
    }

    /// The side the value favors.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        match self.value {
            v if v > 0 => Some(Color::Blue),
            v if v < 0 => Some(Color::Red),
            _ => None,
        }
    }

    /// Number of moves in the principal line.
    #[must_use]
    pub fn plies(&self) -> usize {
        self.line.len()
    }

    /// Moves in playing order, the move to play now first.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.line.iter().rev().copied()
    }

    /// Extend a child's result by the move that led to it.
    pub(crate) fn through(mut self, mv: Move) -> Self {
        self.value = decay(self.value);
        self.line.push(mv);
        self
    }
}
