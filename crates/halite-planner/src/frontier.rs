use halite_core::{scan_order, Direction, GridView, Location, PlayerId};

use crate::heuristic::score;

/// Highest-scoring non-owned neighbour of `player`'s territory.
///
/// Scans owned cells row-major and their neighbours N, E, S, W; the first strict maximum wins.
/// `None` when no owned cell has a non-owned neighbour.
pub fn select_target<G: GridView + ?Sized>(grid: &G, player: PlayerId) -> Option<Location> {
    let mut best: Option<Location> = None;
    let mut best_score = -1.0_f32;

    for loc in scan_order(grid.width(), grid.height()) {
        if !grid.site(loc).is_owned_by(player) {
            continue;
        }
        for dir in Direction::CARDINALS {
            let candidate = grid.neighbor(loc, dir);
            if grid.site(candidate).is_owned_by(player) {
                continue;
            }
            let value = score(grid, player, candidate);
            if value > best_score {
                best_score = value;
                best = Some(candidate);
            }
        }
    }

    best
}
