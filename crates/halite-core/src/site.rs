#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Player identifier as assigned by the game harness.
pub type PlayerId = u8;

/// Owner id of unclaimed land.
pub const NEUTRAL: PlayerId = 0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Site {
    pub owner: PlayerId,
    pub strength: u8,
    pub production: u8,
}

impl Site {
    pub const fn new(owner: PlayerId, strength: u8, production: u8) -> Self {
        Self {
            owner,
            strength,
            production,
        }
    }

    pub fn is_neutral(&self) -> bool {
        self.owner == NEUTRAL
    }

    pub fn is_owned_by(&self, player: PlayerId) -> bool {
        self.owner == player
    }

    /// Owned by another player (neither neutral nor `player`).
    pub fn is_hostile_to(&self, player: PlayerId) -> bool {
        self.owner != NEUTRAL && self.owner != player
    }

    /// Production gained per unit of strength spent to take the site.
    ///
    /// Zero-strength sites are free, so their raw production is used.
    pub fn yield_efficiency(&self) -> f32 {
        if self.strength > 0 {
            f32::from(self.production) / f32::from(self.strength)
        } else {
            f32::from(self.production)
        }
    }
}
