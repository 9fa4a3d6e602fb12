use halite_core::{Direction, GridView, Location, PlayerId};

/// Capture desirability of the (non-owned) cell at `loc`.
///
/// Cheap neutral land scores its production per unit strength. Free neutral land and enemy
/// cells score by the hostile strength packed around them (plus the production of free land).
pub fn score<G: GridView + ?Sized>(grid: &G, player: PlayerId, loc: Location) -> f32 {
    let site = grid.site(loc);
    if site.is_neutral() && site.strength > 0 {
        return f32::from(site.production) / f32::from(site.strength);
    }

    let base = if site.is_neutral() {
        f32::from(site.production)
    } else {
        0.0
    };
    Direction::CARDINALS
        .iter()
        .map(|&dir| grid.site_toward(loc, dir))
        .filter(|neighbor| neighbor.is_hostile_to(player))
        .fold(base, |acc, neighbor| acc + f32::from(neighbor.strength))
}
