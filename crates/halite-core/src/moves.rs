use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Direction, Location};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub loc: Location,
    pub dir: Direction,
}

impl Move {
    pub const fn new(loc: Location, dir: Direction) -> Self {
        Self { loc, dir }
    }
}

/// One directive per source location for a single turn.
///
/// Keyed by location, so a cell can never carry two moves. Iteration is
/// row-major but consumers must not depend on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "Vec<Move>", into = "Vec<Move>")
)]
pub struct MoveSet {
    moves: BTreeMap<Location, Direction>,
}

impl MoveSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a directive, returning the one it replaced.
    pub fn insert(&mut self, loc: Location, dir: Direction) -> Option<Direction> {
        self.moves.insert(loc, dir)
    }

    pub fn get(&self, loc: Location) -> Option<Direction> {
        self.moves.get(&loc).copied()
    }

    pub fn contains(&self, loc: Location) -> bool {
        self.moves.contains_key(&loc)
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = Move> + '_ {
        self.moves.iter().map(|(&loc, &dir)| Move::new(loc, dir))
    }
}

impl FromIterator<Move> for MoveSet {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        let mut set = MoveSet::new();
        for mv in iter {
            set.insert(mv.loc, mv.dir);
        }
        set
    }
}

impl From<Vec<Move>> for MoveSet {
    fn from(value: Vec<Move>) -> Self {
        value.into_iter().collect()
    }
}

impl From<MoveSet> for Vec<Move> {
    fn from(value: MoveSet) -> Self {
        value.iter().collect()
    }
}
