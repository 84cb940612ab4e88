//! Branch colors and per-color data storage.
//!
//! ## Color
//!
//! Each branch is Red or Blue, and each player owns one color. Blue is the
//! maximizing side in search, Red the minimizing side.
//!
//! ## ColorMap
//!
//! Fixed two-slot storage indexable by `Color`, used wherever the engine
//! keeps one value per side (adjacency lists, branch counts).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use super::error::Error;

/// Branch color, which doubles as the player identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
}

impl Color {
    /// Both colors in numbering order: Red first, then Blue.
    ///
    /// ```
    /// use hackenbush::core::Color;
    ///
    /// let colors: Vec<_> = Color::all().collect();
    /// assert_eq!(colors, vec![Color::Red, Color::Blue]);
    /// ```
    pub fn all() -> impl Iterator<Item = Color> {
        [Color::Red, Color::Blue].into_iter()
    }

    /// The opposing color.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Color::Red => Color::Blue,
            Color::Blue => Color::Red,
        }
    }

    /// Blue seeks the most positive value, Red the most negative.
    #[must_use]
    pub const fn is_maximizer(self) -> bool {
        matches!(self, Color::Blue)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Blue => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "red"),
            Color::Blue => write!(f, "blue"),
        }
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "r" | "red" => Ok(Color::Red),
            "b" | "blue" => Ok(Color::Blue),
            other => Err(Error::MalformedLevel(format!("unknown color '{}'", other))),
        }
    }
}

/// One value per color with O(1) access.
///
/// ```
/// use hackenbush::core::{Color, ColorMap};
///
/// let mut counts: ColorMap<u32> = ColorMap::default();
/// counts[Color::Blue] += 2;
/// assert_eq!(counts[Color::Blue], 2);
/// assert_eq!(counts[Color::Red], 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    data: [T; 2],
}

impl<T> ColorMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(mut factory: impl FnMut(Color) -> T) -> Self {
        Self {
            data: [factory(Color::Red), factory(Color::Blue)],
        }
    }

    /// Iterate over (Color, &T) pairs in `Color::all()` order.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        Color::all().zip(self.data.iter())
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        &self.data[color.index()]
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        &mut self.data[color.index()]
    }
}
