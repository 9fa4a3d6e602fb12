use halite_core::{scan_order, Direction, GridView, Location, PlayerId};

/// True iff any cardinal neighbour of `loc` is not owned by `player`.
pub fn is_border<G: GridView + ?Sized>(grid: &G, player: PlayerId, loc: Location) -> bool {
    Direction::CARDINALS
        .iter()
        .any(|&dir| !grid.site_toward(loc, dir).is_owned_by(player))
}

/// Non-owned cells touching `player`'s territory, in row-major order.
///
/// This is the set the force field pulls toward: every capture opportunity one step away from
/// some owned cell.
pub fn frontier_cells<G: GridView + ?Sized>(grid: &G, player: PlayerId) -> Vec<Location> {
    scan_order(grid.width(), grid.height())
        .filter(|&loc| {
            !grid.site(loc).is_owned_by(player)
                && Direction::CARDINALS
                    .iter()
                    .any(|&dir| grid.site_toward(loc, dir).is_owned_by(player))
        })
        .collect()
}
