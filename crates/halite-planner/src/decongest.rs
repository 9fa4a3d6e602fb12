use halite_core::{Direction, GridView, Location, PlayerId};

/// Direction with the shortest run of owned cells from `loc` to the edge of the territory.
///
/// Runs are capped at `min(width, height) / 2`; when no direction beats the cap the answer is
/// `North`. The first of N, E, S, W wins ties.
pub fn nearest_edge_direction<G: GridView + ?Sized>(
    grid: &G,
    player: PlayerId,
    loc: Location,
) -> Direction {
    let mut max = grid.width().min(grid.height()) / 2;
    let mut best = Direction::North;

    for dir in Direction::CARDINALS {
        let mut current = loc;
        let mut steps = 0u16;
        while grid.site(current).is_owned_by(player) && steps < max {
            current = grid.neighbor(current, dir);
            steps += 1;
        }
        if steps < max {
            max = steps;
            best = dir;
        }
    }

    best
}
