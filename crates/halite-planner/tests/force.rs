use halite_core::{Direction, GameMap, Location, Site};
use halite_planner::{compute_force, force_direction, frontier_cells, frontier_pull, Force};

#[test]
fn quadrants_map_to_cardinals() {
    assert_eq!(force_direction(Force::new(1.0, 0.0)), Some(Direction::East));
    assert_eq!(force_direction(Force::new(0.0, 1.0)), Some(Direction::South));
    assert_eq!(force_direction(Force::new(-1.0, 0.0)), Some(Direction::West));
    assert_eq!(force_direction(Force::new(0.0, -1.0)), Some(Direction::North));
    assert_eq!(force_direction(Force::new(2.0, -0.5)), Some(Direction::East));
}

#[test]
fn diagonals_and_zero_have_no_direction() {
    assert_eq!(force_direction(Force::ZERO), None);
    assert_eq!(force_direction(Force::new(1.0, 1.0)), None);
    assert_eq!(force_direction(Force::new(-3.0, 3.0)), None);
}

#[test]
fn add_polar_projects_onto_axes() {
    let mut force = Force::ZERO;
    force.add_polar(2.0, core::f32::consts::FRAC_PI_2);
    assert!(force.fx.abs() < 1e-6);
    assert!((force.fy - 2.0).abs() < 1e-6);
}

#[test]
fn neutral_pull_averages_non_owned_neighbourhood() {
    let mut map = GameMap::filled(5, 5, Site::new(0, 10, 2)).unwrap();
    let origin = Location::new(2, 2);
    map.site_mut(origin).owner = 1;

    // Own term 0.2 / 1, three non-owned neighbours at distance 2: 3 * 0.2 / 8.
    let pull = frontier_pull(&map, 1, origin, Location::new(2, 1));
    assert!((pull - (0.2 + 0.075) / 4.0).abs() < 1e-6);
}

#[test]
fn enemy_pull_adds_hostile_neighbour_strength() {
    let mut map = GameMap::filled(5, 5, Site::new(0, 10, 2)).unwrap();
    let origin = Location::new(2, 2);
    map.site_mut(origin).owner = 1;
    map.set_site(Location::new(2, 1), Site::new(2, 50, 4));
    map.set_site(Location::new(2, 0), Site::new(3, 80, 1));
    map.set_site(Location::new(3, 1), Site::new(2, 16, 1));

    let pull = frontier_pull(&map, 1, origin, Location::new(2, 1));
    assert!((pull - 16.0).abs() < 1e-4);
}

#[test]
fn rich_column_pulls_interior_east() {
    let mut map = GameMap::filled(7, 7, Site::new(0, 10, 1)).unwrap();
    for y in 0..7 {
        map.set_site(Location::new(5, y), Site::new(0, 1, 10));
    }
    for y in 2..=4 {
        for x in 2..=4 {
            map.set_site(Location::new(x, y), Site::new(1, 50, 1));
        }
    }

    let origin = Location::new(3, 3);
    let frontier = frontier_cells(&map, 1);
    let force = compute_force(&map, 1, origin, &frontier);

    assert!(force.fx > 0.0);
    assert!(force.fx > 100.0 * force.fy.abs());
    assert_eq!(force_direction(force), Some(Direction::East));
}

#[test]
fn empty_frontier_exerts_no_force() {
    let map = GameMap::filled(4, 4, Site::new(1, 10, 1)).unwrap();
    let force = compute_force(&map, 1, Location::new(1, 1), &[]);
    assert_eq!(force, Force::ZERO);
}
