//! Shared level strategies for property tests.

#![allow(dead_code)]

use hackenbush::core::{Branch, Color, Level, Position, Vertex};
use proptest::prelude::*;
use proptest::sample::Index;
use std::collections::{BTreeSet, VecDeque};

/// Grounded levels of up to `max` branches, cycles and loops included.
///
/// Each step either hangs a branch to a fresh vertex or joins two existing
/// vertices, so every level is connected with contiguous vertex ids.
pub fn arb_level(max: usize) -> impl Strategy<Value = Level> {
    prop::collection::vec(
        (any::<Index>(), any::<Index>(), any::<bool>(), any::<bool>()),
        1..=max,
    )
    .prop_map(|steps| {
        let mut branches = Vec::new();
        let mut newest = 0u32;
        for (from, to, join, blue) in steps {
            let color = if blue { Color::Blue } else { Color::Red };
            let from = from.index(newest as usize + 1) as u32;
            let to = if join && newest > 0 {
                to.index(newest as usize + 1) as u32
            } else {
                newest += 1;
                newest
            };
            branches.push(Branch::new(Vertex(from), Vertex(to), color));
        }
        Level { branches }
    })
}

/// Grounded positions of up to `max` branches.
pub fn arb_position(max: usize) -> impl Strategy<Value = Position> {
    arb_level(max).prop_map(|level| level.into_position().expect("generated levels are grounded"))
}

/// Orientation-free key for comparing branch multisets.
pub fn key(branch: &Branch) -> (u32, u32, Color) {
    let (a, b) = (branch.from.0, branch.to.0);
    (a.min(b), a.max(b), branch.color)
}

/// Sorted keys of the branches that survive when vertices reachable from
/// Ground are computed from scratch.
pub fn reachable_survivors(branches: &[Branch]) -> Vec<(u32, u32, Color)> {
    let mut seen = BTreeSet::from([Vertex::GROUND]);
    let mut queue = VecDeque::from([Vertex::GROUND]);
    while let Some(current) = queue.pop_front() {
        for branch in branches {
            let next = if branch.from == current {
                branch.to
            } else if branch.to == current {
                branch.from
            } else {
                continue;
            };
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }

    let mut survivors: Vec<_> = branches
        .iter()
        .filter(|b| seen.contains(&b.from) || seen.contains(&b.to))
        .map(key)
        .collect();
    survivors.sort();
    survivors
}
