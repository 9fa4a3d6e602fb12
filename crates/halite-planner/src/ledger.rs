use std::collections::BTreeMap;

use halite_core::{GridView, Location, PlayerId};

use crate::PlannerConfig;

/// Strength predicted to land on each cell once every move decided so far this turn resolves.
///
/// `own` tracks friendly cells (reinforcement), `enemy` tracks cells under attack. Rebuilt from
/// the snapshot at the start of each turn and mutated in scan order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationLedger {
    own_cap: i32,
    enemy_cap: i32,
    own: BTreeMap<Location, i32>,
    enemy: BTreeMap<Location, i32>,
}

impl ReservationLedger {
    pub fn new(own_cap: i32, enemy_cap: i32) -> Self {
        Self {
            own_cap,
            enemy_cap,
            own: BTreeMap::new(),
            enemy: BTreeMap::new(),
        }
    }

    pub fn from_config(config: &PlannerConfig) -> Self {
        Self::new(config.own_cap, config.enemy_cap)
    }

    /// Seeds `own` with each owned cell's strength and `enemy` with zero everywhere else.
    pub fn rebuild<G: GridView + ?Sized>(&mut self, grid: &G, player: PlayerId) {
        self.own.clear();
        self.enemy.clear();
        for loc in halite_core::scan_order(grid.width(), grid.height()) {
            let site = grid.site(loc);
            if site.is_owned_by(player) {
                self.own.insert(loc, i32::from(site.strength));
            } else {
                self.enemy.insert(loc, 0);
            }
        }
    }

    pub fn own(&self, loc: Location) -> i32 {
        self.own.get(&loc).copied().unwrap_or(0)
    }

    pub fn enemy(&self, loc: Location) -> i32 {
        self.enemy.get(&loc).copied().unwrap_or(0)
    }

    pub fn own_cap(&self) -> i32 {
        self.own_cap
    }

    pub fn enemy_cap(&self) -> i32 {
        self.enemy_cap
    }

    pub fn can_reinforce(&self, dest: Location, strength: i32) -> bool {
        self.own(dest) + strength < self.own_cap
    }

    pub fn can_attack(&self, target: Location, strength: i32) -> bool {
        self.enemy(target) + strength < self.enemy_cap
    }

    /// Moves `strength` of friendly reservation from `from` onto `to`.
    pub fn transfer(&mut self, from: Location, to: Location, strength: i32) {
        *self.own.entry(from).or_insert(0) -= strength;
        *self.own.entry(to).or_insert(0) += strength;
    }

    /// Undoes a [`transfer`](Self::transfer).
    pub fn revert(&mut self, from: Location, to: Location, strength: i32) {
        self.transfer(to, from, strength);
    }

    /// Source vacates and commits its strength against `target`.
    pub fn commit_attack(&mut self, source: Location, target: Location, strength: i32) {
        *self.enemy.entry(target).or_insert(0) += strength;
        self.own.insert(source, 0);
    }

    /// Source vacates onto a friendly cell; an unseen destination starts from its own strength.
    pub fn commit_advance(
        &mut self,
        source: Location,
        dest: Location,
        dest_strength: i32,
        strength: i32,
    ) {
        self.own.insert(source, 0);
        *self.own.entry(dest).or_insert(dest_strength) += strength;
    }

    pub fn own_entries(&self) -> impl Iterator<Item = (Location, i32)> + '_ {
        self.own.iter().map(|(&loc, &v)| (loc, v))
    }

    pub fn enemy_entries(&self) -> impl Iterator<Item = (Location, i32)> + '_ {
        self.enemy.iter().map(|(&loc, &v)| (loc, v))
    }
}
