use std::time::Duration;

use halite_core::{Direction, GameMap, GridView, Location, Site};
use halite_planner::{
    pack_location, unpack_location, Decision, ManualClock, MovementPlanner, PlannerConfig,
};
use halite_tools::VecTraceSink;

fn neutral_map(width: u16, height: u16) -> GameMap {
    GameMap::filled(width, height, Site::new(0, 10, 1)).unwrap()
}

#[test]
fn strong_lone_cell_captures_north() {
    let mut map = neutral_map(5, 5);
    let home = Location::new(2, 2);
    map.set_site(home, Site::new(1, 50, 3));

    let mut planner = MovementPlanner::new(1, PlannerConfig::default());
    let plan = planner.plan_turn(&map);

    assert_eq!(plan.moves.len(), 1);
    assert_eq!(plan.moves.get(home), Some(Direction::North));
    assert_eq!(plan.ledger.enemy(Location::new(2, 1)), 50);
    assert_eq!(plan.ledger.own(home), 0);
    assert_eq!(plan.stats.captures, 1);
    assert_eq!(plan.stats.border, 1);
    assert_eq!(planner.turn(), 1);
}

#[test]
fn weak_lone_cell_stays_still() {
    let mut map = neutral_map(5, 5);
    let home = Location::new(2, 2);
    map.set_site(home, Site::new(1, 2, 1));

    let mut planner = MovementPlanner::new(1, PlannerConfig::default());
    let mut sink = VecTraceSink::default();
    let plan = planner.plan_turn_traced(&map, &mut sink);

    assert_eq!(plan.moves.get(home), Some(Direction::Still));
    assert_eq!(plan.stats.weak, 1);
    assert_eq!(plan.ledger.enemy(Location::new(2, 1)), 0);
    assert_eq!(sink.with_tag(Decision::Weak.tag()).count(), 1);
}

#[test]
fn weak_border_cell_still_captures_a_weaker_neighbour() {
    let mut map = GameMap::filled(5, 5, Site::new(0, 1, 1)).unwrap();
    let home = Location::new(2, 2);
    map.set_site(home, Site::new(1, 4, 1));
    assert!(PlannerConfig::default().is_weak(&map.site(home)));

    let mut planner = MovementPlanner::new(1, PlannerConfig::default());
    let plan = planner.plan_turn(&map);

    assert_eq!(plan.moves.get(home), Some(Direction::North));
    assert_eq!(plan.ledger.enemy(Location::new(2, 1)), 4);
    assert_eq!(plan.stats.captures, 1);
    assert_eq!(plan.stats.weak, 0);
}

/// Player 1 owns everything except a neutral hole at (2, 2), guarded by four 200-strength cells.
fn surrounded_hole() -> GameMap {
    let mut map = GameMap::filled(5, 5, Site::new(1, 1, 1)).unwrap();
    let hole = Location::new(2, 2);
    map.set_site(hole, Site::new(0, 10, 1));
    for loc in [
        Location::new(2, 1),
        Location::new(1, 2),
        Location::new(3, 2),
        Location::new(2, 3),
    ] {
        map.set_site(loc, Site::new(1, 200, 1));
    }
    map
}

#[test]
fn enemy_cap_blocks_the_second_attacker() {
    let map = surrounded_hole();
    let hole = Location::new(2, 2);

    let mut planner = MovementPlanner::new(1, PlannerConfig::default());
    let plan = planner.plan_turn(&map);

    assert_eq!(plan.target, Some(hole));
    assert_eq!(plan.moves.get(Location::new(2, 1)), Some(Direction::South));
    assert_eq!(plan.moves.get(Location::new(1, 2)), Some(Direction::Still));
    assert_eq!(plan.moves.get(Location::new(3, 2)), Some(Direction::Still));
    assert_eq!(plan.moves.get(Location::new(2, 3)), Some(Direction::Still));
    assert_eq!(plan.ledger.enemy(hole), 200);
    assert_eq!(plan.stats.captures, 1);
    assert_eq!(plan.stats.border, 4);
    assert_eq!(plan.stats.interior, 20);
    assert_eq!(plan.stats.weak, 20);
    assert_eq!(plan.stats.still, 3);
}

#[test]
fn weak_interior_cells_leave_the_ledger_untouched() {
    let map = surrounded_hole();
    let mut planner = MovementPlanner::new(1, PlannerConfig::default());
    let plan = planner.plan_turn(&map);

    for (loc, reserved) in plan.ledger.own_entries() {
        let expected = match loc {
            l if l == Location::new(2, 1) => 0,
            l if [Location::new(1, 2), Location::new(3, 2), Location::new(2, 3)].contains(&l) => 200,
            _ => 1,
        };
        assert_eq!(reserved, expected, "own reservation at {loc:?}");
    }
}

#[test]
fn interior_cells_follow_the_force_field() {
    let mut map = GameMap::filled(9, 9, Site::new(0, 10, 1)).unwrap();
    for y in 0..9 {
        map.set_site(Location::new(7, y), Site::new(0, 1, 10));
    }
    for y in 3..=5 {
        for x in 3..=5 {
            map.set_site(Location::new(x, y), Site::new(1, 60, 1));
        }
    }
    let center = Location::new(4, 4);

    let mut planner = MovementPlanner::new(1, PlannerConfig::default());
    let plan = planner.plan_turn(&map);

    assert_eq!(plan.stats.interior, 1);
    assert_eq!(plan.moves.get(center), Some(Direction::East));
    assert_eq!(plan.stats.forced, 1);
    assert_eq!(plan.ledger.own(center), 0);
}

/// 9x9 neutral map with a 5x5 block of player 1 in the middle: nine interior cells.
fn big_block() -> GameMap {
    let mut map = neutral_map(9, 9);
    for y in 2..=6 {
        for x in 2..=6 {
            map.set_site(Location::new(x, y), Site::new(1, 100, 1));
        }
    }
    map
}

#[test]
fn exhausted_budget_switches_interior_to_decongestion() {
    let map = big_block();
    let clock = ManualClock::stepping(Duration::from_secs(1));
    let mut planner = MovementPlanner::with_clock(1, PlannerConfig::default(), &clock);
    let mut sink = VecTraceSink::default();

    let plan = planner.plan_turn_traced(&map, &mut sink);

    assert!(plan.stats.budget_exhausted);
    assert_eq!(plan.stats.interior, 9);
    assert_eq!(plan.stats.forced, 0);
    assert!(plan.stats.decongested >= 1);
    assert_eq!(plan.stats.decongested + plan.stats.still, 9);
    assert_eq!(plan.stats.think_time, Duration::from_secs(25));
    assert_eq!(sink.with_tag("planner.force").count(), 0);
    assert_eq!(
        sink.with_tag("planner.decongest").count(),
        plan.stats.decongested
    );
}

#[test]
fn frozen_clock_never_exhausts_the_budget() {
    let map = big_block();
    let mut planner = MovementPlanner::with_clock(1, PlannerConfig::default(), ManualClock::new());

    let plan = planner.plan_turn(&map);

    assert!(!plan.stats.budget_exhausted);
    assert_eq!(plan.stats.decongested, 0);
    assert_eq!(plan.stats.think_time, Duration::ZERO);
}

#[test]
fn trace_carries_one_event_per_cell_and_the_target() {
    let map = big_block();
    let mut planner = MovementPlanner::with_clock(1, PlannerConfig::default(), ManualClock::new());
    let mut sink = VecTraceSink::default();

    let plan = planner.plan_turn_traced(&map, &mut sink);

    let target: Vec<_> = sink.with_tag("planner.target").collect();
    assert_eq!(target.len(), 1);
    assert_eq!(target[0].turn, 0);
    assert_eq!(Some(unpack_location(target[0].a)), plan.target);
    assert_eq!(target[0].b, 20);

    assert_eq!(sink.events.len(), 1 + plan.moves.len());
    for event in sink.events.iter().skip(1) {
        let loc = unpack_location(event.a);
        let dir = plan.moves.get(loc).map(Direction::code);
        assert_eq!(dir.map(u64::from), Some(event.b));
    }
}

#[test]
fn turn_counter_advances_per_plan() {
    let map = big_block();
    let mut planner = MovementPlanner::new(1, PlannerConfig::default());
    let mut sink = VecTraceSink::default();

    planner.plan_turn(&map);
    planner.plan_turn_traced(&map, &mut sink);

    assert_eq!(planner.turn(), 2);
    assert!(sink.events.iter().all(|e| e.turn == 1));
}

#[test]
fn missing_player_yields_empty_plan() {
    let map = neutral_map(4, 4);
    let mut planner = MovementPlanner::new(3, PlannerConfig::default());
    let mut sink = VecTraceSink::default();

    let plan = planner.plan_turn_traced(&map, &mut sink);

    assert!(plan.moves.is_empty());
    assert_eq!(plan.target, None);
    assert_eq!(sink.events[0].a, u64::MAX);
}

#[test]
fn packed_locations_round_trip() {
    let loc = Location::new(513, 77);
    assert_eq!(pack_location(loc), (77 << 16) | 513);
    assert_eq!(unpack_location(pack_location(loc)), loc);
}
