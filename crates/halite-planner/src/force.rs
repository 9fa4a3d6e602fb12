use halite_core::{Direction, GridView, Location, PlayerId};

/// Influence vector acting on an interior cell. `fy` grows southward.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Force {
    pub fx: f32,
    pub fy: f32,
}

impl Force {
    pub const ZERO: Force = Force { fx: 0.0, fy: 0.0 };

    pub fn new(fx: f32, fy: f32) -> Self {
        Self { fx, fy }
    }

    pub fn add_polar(&mut self, magnitude: f32, angle: f32) {
        self.fx += magnitude * angle.cos();
        self.fy += magnitude * angle.sin();
    }
}

fn cube(d: f32) -> f32 {
    d.powi(3)
}

/// Scalar pull exerted on `origin` by one frontier cell.
///
/// Neutral cells average their own yield efficiency with that of their non-owned neighbours;
/// enemy cells add their production to the strength of the hostile cells around them. Every
/// term is damped by the cube of its distance from `origin`.
pub fn frontier_pull<G: GridView + ?Sized>(
    grid: &G,
    player: PlayerId,
    origin: Location,
    cell: Location,
) -> f32 {
    let site = grid.site(cell);
    let d3 = cube(grid.distance(origin, cell));

    if site.is_neutral() {
        let mut count = 0u32;
        let mut neighbor_pull = 0.0_f32;
        for dir in Direction::CARDINALS {
            let loc = grid.neighbor(cell, dir);
            let neighbor = grid.site(loc);
            if neighbor.is_owned_by(player) {
                continue;
            }
            neighbor_pull += neighbor.yield_efficiency() / cube(grid.distance(origin, loc));
            count += 1;
        }
        (site.yield_efficiency() / d3 + neighbor_pull) / (count + 1) as f32
    } else {
        let mut pull = f32::from(site.production) / d3;
        for dir in Direction::CARDINALS {
            let loc = grid.neighbor(cell, dir);
            let neighbor = grid.site(loc);
            if neighbor.is_hostile_to(player) {
                pull += f32::from(neighbor.strength) / cube(grid.distance(loc, origin));
            }
        }
        pull
    }
}

/// Sum of the frontier pulls on `origin`, each projected along its bearing.
///
/// `frontier` must only hold non-owned cells, so no distance in the sum is zero.
pub fn compute_force<G: GridView + ?Sized>(
    grid: &G,
    player: PlayerId,
    origin: Location,
    frontier: &[Location],
) -> Force {
    let mut force = Force::ZERO;
    for &cell in frontier {
        let magnitude = frontier_pull(grid, player, origin, cell);
        force.add_polar(magnitude, grid.angle(origin, cell));
    }
    force
}

/// Maps a force onto a cardinal direction by the quadrant of `(fx + fy, fx - fy)`.
///
/// Returns `None` on the diagonals (including the zero force).
pub fn force_direction(force: Force) -> Option<Direction> {
    let sum = force.fx + force.fy;
    let diff = force.fx - force.fy;
    if sum > 0.0 && diff > 0.0 {
        Some(Direction::East)
    } else if sum > 0.0 && diff < 0.0 {
        Some(Direction::South)
    } else if sum < 0.0 && diff < 0.0 {
        Some(Direction::West)
    } else if sum < 0.0 && diff > 0.0 {
        Some(Direction::North)
    } else {
        None
    }
}
