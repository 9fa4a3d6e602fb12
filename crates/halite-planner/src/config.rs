use std::time::Duration;

use halite_core::Site;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const OWN_CAP: i32 = 265;
pub const ENEMY_CAP: i32 = 255;
pub const EPSILON: f32 = 0.01;
pub const WEAK_FACTOR: u32 = 5;
pub const THINK_THRESHOLD_MS: u64 = 900;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct PlannerConfig {
    /// Reinforcing moves are admitted only while `reserved_own[dest] + strength` stays below this.
    pub own_cap: i32,

    /// Attacks are admitted only while `reserved_enemy[target] + strength` stays below this.
    pub enemy_cap: i32,

    /// Tolerance for "the goal is adjacent" distance checks.
    pub epsilon: f32,

    /// A cell with `strength < weak_factor * production` holds still to keep growing.
    pub weak_factor: u32,

    /// Think time after which interior cells switch from the force field to decongestion.
    ///
    /// Sized against a ~1000ms per-turn allowance.
    pub think_threshold_ms: u64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            own_cap: OWN_CAP,
            enemy_cap: ENEMY_CAP,
            epsilon: EPSILON,
            weak_factor: WEAK_FACTOR,
            think_threshold_ms: THINK_THRESHOLD_MS,
        }
    }
}

impl PlannerConfig {
    pub fn think_threshold(&self) -> Duration {
        Duration::from_millis(self.think_threshold_ms)
    }

    pub fn is_weak(&self, site: &Site) -> bool {
        u32::from(site.strength) < self.weak_factor * u32::from(site.production)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weakness_threshold_is_strict() {
        let config = PlannerConfig::default();
        assert!(config.is_weak(&Site::new(1, 14, 3)));
        assert!(!config.is_weak(&Site::new(1, 15, 3)));
        assert!(!config.is_weak(&Site::new(1, 0, 0)));
    }
}
