//! Board state and the cut transition.
//!
//! A `Position` is the ordered list of surviving branches. It is never
//! mutated: `apply` derives a fresh position, removing the cut branch and
//! every branch that fell because it lost its connection to Ground.
//!
//! ## Numbering
//!
//! Branch indices come from a breadth-first walk starting at Ground. For
//! each dequeued vertex the walk visits colors in `Color::all()` order, and
//! within a color the incident branches not yet numbered by neighbor vertex
//! ascending (ties by previous index). Each branch gets the next index when
//! first reached. Branches the walk never reaches are exactly those that
//! fell.

use im::Vector;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::collections::{BTreeSet, VecDeque};
use std::fmt;

use super::branch::{Branch, Move, Vertex};
use super::color::{Color, ColorMap};
use super::error::{Error, Result};

/// Immutable snapshot of the surviving branches.
///
/// Uses an `im` persistent vector so clones taken during search are O(1).
/// Deserialized positions are re-walked and rejected unless every branch is
/// grounded and already in breadth-first order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    branches: Vector<Branch>,
}

impl Position {
    /// Build a position from a raw branch list.
    ///
    /// Fails with `MalformedLevel` if Ground is not an endpoint of any branch,
    /// if the vertex ids used are not contiguous from 0, or if some branch
    /// cannot be reached from Ground.
    pub fn new(raw: impl IntoIterator<Item = Branch>) -> Result<Self> {
        let raw: Vec<Branch> = raw.into_iter().collect();

        if !raw.iter().any(Branch::touches_ground) {
            return Err(Error::MalformedLevel(
                "ground vertex 0 is not an endpoint of any branch".to_string(),
            ));
        }

        let vertices: BTreeSet<Vertex> = raw.iter().flat_map(|b| [b.from, b.to]).collect();
        if let Some(missing) = (0..).map(Vertex).zip(&vertices).find(|(want, got)| want != *got) {
            return Err(Error::MalformedLevel(format!(
                "vertex ids must be contiguous, vertex {} is missing",
                missing.0
            )));
        }

        let position = walk(&raw);
        if position.len() < raw.len() {
            let reached = position.vertices();
            let floating = raw
                .iter()
                .find(|b| !reached.contains(&b.from))
                .copied()
                .unwrap_or(raw[0]);
            return Err(Error::MalformedLevel(format!(
                "branch {}-{} is not connected to ground",
                floating.from, floating.to
            )));
        }

        Ok(position)
    }

    /// A position with no branches: whoever moves next loses.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.branches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    /// Look up a branch by move index.
    #[must_use]
    pub fn branch(&self, mv: Move) -> Option<&Branch> {
        mv.slot().and_then(|slot| self.branches.get(slot))
    }

    /// Iterate over (Move, &Branch) pairs in index order.
    pub fn branches(&self) -> impl Iterator<Item = (Move, &Branch)> {
        self.branches
            .iter()
            .enumerate()
            .map(|(slot, branch)| (Move::from_slot(slot), branch))
    }

    /// Number of branches of a color.
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.branches.iter().filter(|b| b.color == color).count()
    }

    /// Branch counts for both colors.
    #[must_use]
    pub fn counts(&self) -> ColorMap<usize> {
        ColorMap::new(|color| self.count(color))
    }

    /// Ground plus every branch endpoint.
    #[must_use]
    pub fn vertices(&self) -> BTreeSet<Vertex> {
        std::iter::once(Vertex::GROUND)
            .chain(self.branches.iter().flat_map(|b| [b.from, b.to]))
            .collect()
    }

    /// Indices of every branch `player` may cut, ascending.
    #[must_use]
    pub fn legal_moves(&self, player: Color) -> Vec<Move> {
        self.branches()
            .filter(|(_, branch)| branch.color == player)
            .map(|(mv, _)| mv)
            .collect()
    }

    /// Check if `player` has at least one branch to cut.
    #[must_use]
    pub fn has_move(&self, player: Color) -> bool {
        self.branches.iter().any(|b| b.color == player)
    }

    /// Cut a branch and let everything disconnected from Ground fall.
    ///
    /// Only checks that the index exists. Use `play` to also check the color.
    pub fn apply(&self, mv: Move) -> Result<Position> {
        let slot = mv
            .slot()
            .filter(|&slot| slot < self.branches.len())
            .ok_or_else(|| Error::InvalidMove {
                branch: mv,
                reason: format!("position has branches 1..={}", self.branches.len()),
            })?;

        let remaining: Vec<Branch> = self
            .branches
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != slot)
            .map(|(_, branch)| *branch)
            .collect();

        Ok(walk(&remaining))
    }

    /// Cut a branch on behalf of `player`, who must own its color.
    pub fn play(&self, player: Color, mv: Move) -> Result<Position> {
        match self.branch(mv) {
            Some(branch) if branch.color != player => Err(Error::InvalidMove {
                branch: mv,
                reason: format!("branch is {}, {} cannot cut it", branch.color, player),
            }),
            _ => self.apply(mv),
        }
    }
}

/// Wire form of a `Position`: the branch list as numbered.
#[derive(Deserialize)]
struct Numbered {
    branches: Vec<Branch>,
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let numbered = Numbered::deserialize(deserializer)?;
        Position::from_numbered(numbered.branches).map_err(de::Error::custom)
    }
}

impl Position {
    /// Check a branch list that claims to be a numbered position.
    ///
    /// Unlike `Position::new`, vertex gaps are allowed: positions derived by
    /// `apply` keep the ids of the vertices that survived.
    fn from_numbered(raw: Vec<Branch>) -> Result<Self> {
        let position = walk(&raw);
        if position.len() < raw.len() {
            let reached = position.vertices();
            let floating = raw
                .iter()
                .find(|b| !reached.contains(&b.from) && !reached.contains(&b.to))
                .copied()
                .unwrap_or(raw[0]);
            return Err(Error::MalformedLevel(format!(
                "branch {}-{} is not connected to ground",
                floating.from, floating.to
            )));
        }
        if position.branches.iter().ne(raw.iter()) {
            return Err(Error::MalformedLevel(
                "branches are not in breadth-first order".to_string(),
            ));
        }
        Ok(position)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (mv, branch) in self.branches() {
            writeln!(f, "{}: {}-{} {}", mv, branch.from, branch.to, branch.color)?;
        }
        Ok(())
    }
}

/// Breadth-first walk from Ground that numbers every reachable branch.
fn walk(raw: &[Branch]) -> Position {
    let mut incident: FxHashMap<Vertex, ColorMap<Vec<(Vertex, usize)>>> = FxHashMap::default();
    for (i, branch) in raw.iter().enumerate() {
        incident.entry(branch.from).or_default()[branch.color].push((branch.to, i));
        if !branch.is_loop() {
            incident.entry(branch.to).or_default()[branch.color].push((branch.from, i));
        }
    }
    for lists in incident.values_mut() {
        for color in Color::all() {
            lists[color].sort_unstable();
        }
    }

    let mut numbered = vec![false; raw.len()];
    let mut seen = FxHashSet::default();
    seen.insert(Vertex::GROUND);
    let mut queue = VecDeque::from([Vertex::GROUND]);
    let mut branches = Vector::new();

    while let Some(current) = queue.pop_front() {
        let Some(lists) = incident.get(&current) else {
            continue;
        };
        for color in Color::all() {
            for &(neighbor, i) in &lists[color] {
                if numbered[i] {
                    continue;
                }
                numbered[i] = true;
                branches.push_back(Branch::new(current, neighbor, color));
                if seen.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }
    }

    Position { branches }
}
