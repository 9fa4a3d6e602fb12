use halite_core::{Direction, GridView, Location, PlayerId};

use crate::border::is_border;
use crate::ReservationLedger;

/// Moves border cells that cannot capture anything along the border toward the turn's target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderRouter {
    player: PlayerId,
    epsilon: f32,
}

impl BorderRouter {
    pub fn new(player: PlayerId, epsilon: f32) -> Self {
        Self { player, epsilon }
    }

    /// One step of `start` toward `goal`, committing the move into `ledger`.
    ///
    /// Next to the goal the cell attacks it when strong enough and `enemy_cap` allows. Further
    /// away it steps onto the owned border neighbour that gets closest to the goal, subject to
    /// `own_cap`; the first of N, E, S, W wins ties. Anything else is `Still`.
    pub fn route<G: GridView + ?Sized>(
        &self,
        grid: &G,
        ledger: &mut ReservationLedger,
        start: Location,
        goal: Option<Location>,
    ) -> Direction {
        let Some(goal) = goal else {
            return Direction::Still;
        };
        let start_site = grid.site(start);
        let strength = i32::from(start_site.strength);
        let distance = grid.distance(start, goal);

        if (distance - 1.0).abs() < self.epsilon {
            if start_site.strength <= grid.site(goal).strength {
                return Direction::Still;
            }
            let toward = Direction::CARDINALS
                .into_iter()
                .find(|&dir| grid.neighbor(start, dir) == goal);
            return match toward {
                Some(dir) if ledger.can_attack(goal, strength) => {
                    ledger.commit_attack(start, goal, strength);
                    dir
                }
                _ => Direction::Still,
            };
        }

        let mut best: Option<(Direction, Location, f32)> = None;
        for dir in Direction::CARDINALS {
            let candidate = grid.neighbor(start, dir);
            let on_border = grid.site(candidate).is_owned_by(self.player)
                && is_border(grid, self.player, candidate);
            if !on_border {
                continue;
            }
            let remaining = grid.distance(candidate, goal);
            if remaining >= distance || !ledger.can_reinforce(candidate, strength) {
                continue;
            }
            if best.map_or(true, |(_, _, d)| remaining < d) {
                best = Some((dir, candidate, remaining));
            }
        }

        match best {
            Some((dir, dest, _)) => {
                let dest_strength = i32::from(grid.site(dest).strength);
                ledger.commit_advance(start, dest, dest_strength, strength);
                dir
            }
            None => Direction::Still,
        }
    }
}
