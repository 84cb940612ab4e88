//! Level definitions: the raw branch lists positions are built from.
//!
//! A `Level` keeps the branches in authoring order with whatever orientation
//! they were given. Converting it into a `Position` validates it and assigns
//! the breadth-first numbering players see.
//!
//! ```
//! use hackenbush::core::{Color, Level, LevelBuilder};
//!
//! let level = LevelBuilder::new()
//!     .branch(0, 1, Color::Blue)
//!     .branch(1, 2, Color::Red)
//!     .build()
//!     .unwrap();
//! let position = level.into_position().unwrap();
//! assert_eq!(position.len(), 2);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::branch::{Branch, Vertex};
use super::color::Color;
use super::error::{Error, Result};
use super::position::Position;

/// Raw, ordered branch list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub branches: Vec<Branch>,
}

impl Level {
    /// Create a level from (from, to, color) tuples.
    pub fn from_tuples(tuples: &[(u32, u32, Color)]) -> Self {
        Self {
            branches: tuples
                .iter()
                .map(|&(a, b, color)| Branch::new(Vertex(a), Vertex(b), color))
                .collect(),
        }
    }

    /// The premade six-branch level.
    ///
    /// Two stalks rise from Ground: a Blue trunk at vertex 1 carrying a Red
    /// twig and a Blue-then-Red limb, and a Red trunk at vertex 5 carrying a
    /// Blue twig.
    #[must_use]
    pub fn sample() -> Self {
        Self::from_tuples(&[
            (0, 1, Color::Blue),
            (1, 2, Color::Red),
            (1, 3, Color::Blue),
            (3, 4, Color::Red),
            (0, 5, Color::Red),
            (5, 6, Color::Blue),
        ])
    }

    /// Generate a random tree level.
    ///
    /// Starting from Ground alone, alternately adds a Blue and a Red branch
    /// while that color has branches left. Each branch joins a uniformly
    /// chosen existing vertex to a fresh vertex. The same seed always gives
    /// the same level.
    #[must_use]
    pub fn random(red: usize, blue: usize, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut remaining = [(Color::Blue, blue), (Color::Red, red)];
        let mut branches = Vec::with_capacity(red + blue);
        let mut newest = 0u32;

        while remaining.iter().any(|&(_, left)| left > 0) {
            for (color, left) in remaining.iter_mut() {
                if *left == 0 {
                    continue;
                }
                *left -= 1;
                let anchor = rng.gen_range(0..=newest);
                newest += 1;
                branches.push(Branch::new(Vertex(anchor), Vertex(newest), *color));
            }
        }

        Self { branches }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.branches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    /// Validate and number the level.
    pub fn into_position(self) -> Result<Position> {
        Position::new(self.branches)
    }
}

impl TryFrom<Level> for Position {
    type Error = Error;

    fn try_from(level: Level) -> Result<Self> {
        level.into_position()
    }
}

/// Incremental level construction.
///
/// Validation is deferred to `build`, so branches may be added in any order.
#[derive(Clone, Debug, Default)]
pub struct LevelBuilder {
    branches: Vec<Branch>,
}

impl LevelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a branch between two vertices.
    pub fn branch(mut self, from: u32, to: u32, color: Color) -> Self {
        self.branches.push(Branch::new(Vertex(from), Vertex(to), color));
        self
    }

    /// Hang a branch off `anchor` that ends in a fresh vertex.
    pub fn sprout(mut self, anchor: u32, color: Color) -> Self {
        let fresh = self
            .branches
            .iter()
            .map(|b| b.from.0.max(b.to.0))
            .max()
            .map_or(1, |top| top + 1);
        self.branches.push(Branch::new(Vertex(anchor), Vertex(fresh), color));
        self
    }

    /// Validate the branches and produce the level.
    pub fn build(self) -> Result<Level> {
        let level = Level {
            branches: self.branches,
        };
        Position::new(level.branches.iter().copied())?;
        Ok(level)
    }
}
