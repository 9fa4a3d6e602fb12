use core::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A cell coordinate on the torus.
///
/// Ordering is row-major (`y`, then `x`) so ordered collections keyed by
/// `Location` iterate in the same order the planner scans the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    pub x: u16,
    pub y: u16,
}

impl Location {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

impl PartialOrd for Location {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Location {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

/// Movement directive for a single cell. Discriminants are the wire codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Direction {
    Still = 0,
    North = 1,
    East = 2,
    South = 3,
    West = 4,
}

impl Direction {
    /// Fixed order for determinism: N, E, S, W.
    pub const CARDINALS: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub const fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Direction::Still),
            1 => Some(Direction::North),
            2 => Some(Direction::East),
            3 => Some(Direction::South),
            4 => Some(Direction::West),
            _ => None,
        }
    }

    pub fn is_still(self) -> bool {
        self == Direction::Still
    }
}
