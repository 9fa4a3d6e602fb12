use std::time::Duration;

use halite_core::{scan_order, Direction, GridView, Location, MoveSet, PlayerId};
use halite_tools::{NullTraceSink, TraceEvent, TraceSink};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::border::{frontier_cells, is_border};
use crate::clock::{Clock, MonotonicClock, ThinkBudget};
use crate::decongest::nearest_edge_direction;
use crate::force::{compute_force, force_direction};
use crate::frontier::select_target;
use crate::heuristic::score;
use crate::{BorderRouter, PlannerConfig, ReservationLedger};

/// Packs a location into a trace payload: `(y << 16) | x`.
pub fn pack_location(loc: Location) -> u64 {
    (u64::from(loc.y) << 16) | u64::from(loc.x)
}

pub fn unpack_location(packed: u64) -> Location {
    Location::new((packed & 0xFFFF) as u16, ((packed >> 16) & 0xFFFF) as u16)
}

/// Why a cell received its directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Decision {
    /// Border cell took its cheapest admissible neighbour.
    Capture,
    /// Border cell advanced along the border, or attacked the turn's target.
    Route,
    /// Interior cell followed the force field.
    Force,
    /// Interior cell headed for the nearest territory edge after the think budget ran out.
    Decongest,
    /// Cell holds still to keep growing.
    Weak,
    /// No admissible move.
    Still,
}

impl Decision {
    pub fn tag(self) -> &'static str {
        match self {
            Decision::Capture => "planner.capture",
            Decision::Route => "planner.route",
            Decision::Force => "planner.force",
            Decision::Decongest => "planner.decongest",
            Decision::Weak => "planner.weak",
            Decision::Still => "planner.still",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TurnStats {
    pub owned: usize,
    pub border: usize,
    pub interior: usize,
    pub captures: usize,
    pub routed: usize,
    pub forced: usize,
    pub decongested: usize,
    pub weak: usize,
    pub still: usize,
    pub think_time: Duration,
    /// Interior cells were decided after the think budget ran out.
    pub budget_exhausted: bool,
}

impl TurnStats {
    fn record(&mut self, decision: Decision) {
        match decision {
            Decision::Capture => self.captures += 1,
            Decision::Route => self.routed += 1,
            Decision::Force => self.forced += 1,
            Decision::Decongest => self.decongested += 1,
            Decision::Weak => self.weak += 1,
            Decision::Still => self.still += 1,
        }
    }
}

/// Output of one planning pass.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnPlan {
    pub moves: MoveSet,
    /// Frontier target the border router steered toward this turn.
    pub target: Option<Location>,
    /// Reservations after every decision, for inspection.
    pub ledger: ReservationLedger,
    pub stats: TurnStats,
}

/// Produces one directive per owned cell per turn.
///
/// Cells are decided in row-major order against a shared [`ReservationLedger`], so earlier
/// cells get first claim on contested destinations. Interior cells switch from the force field
/// to the cheaper decongestion walk once the accumulated think time passes the threshold.
pub struct MovementPlanner<C: Clock = MonotonicClock> {
    player: PlayerId,
    config: PlannerConfig,
    clock: C,
    turn: u64,
}

impl MovementPlanner<MonotonicClock> {
    pub fn new(player: PlayerId, config: PlannerConfig) -> Self {
        Self::with_clock(player, config, MonotonicClock::new())
    }
}

impl<C: Clock> MovementPlanner<C> {
    pub fn with_clock(player: PlayerId, config: PlannerConfig, clock: C) -> Self {
        Self {
            player,
            config,
            clock,
            turn: 0,
        }
    }

    pub fn player(&self) -> PlayerId {
        self.player
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Number of turns planned so far.
    pub fn turn(&self) -> u64 {
        self.turn
    }

    pub fn plan_turn<G: GridView + ?Sized>(&mut self, grid: &G) -> TurnPlan {
        self.plan_turn_traced(grid, &mut NullTraceSink)
    }

    /// Like [`plan_turn`](Self::plan_turn), emitting one trace event per decision plus a
    /// `planner.target` event (`a` = packed target or `u64::MAX`, `b` = frontier size).
    pub fn plan_turn_traced<G, S>(&mut self, grid: &G, sink: &mut S) -> TurnPlan
    where
        G: GridView + ?Sized,
        S: TraceSink + ?Sized,
    {
        let turn = self.turn;
        self.turn += 1;

        let player = self.player;
        let mut ledger = ReservationLedger::from_config(&self.config);
        ledger.rebuild(grid, player);

        let target = select_target(grid, player);
        let frontier = frontier_cells(grid, player);
        sink.emit(
            TraceEvent::new(turn, "planner.target")
                .with_a(target.map_or(u64::MAX, pack_location))
                .with_b(frontier.len() as u64),
        );

        let router = BorderRouter::new(player, self.config.epsilon);
        let mut budget = ThinkBudget::new(self.config.think_threshold());
        let mut moves = MoveSet::new();
        let mut stats = TurnStats::default();

        for loc in scan_order(grid.width(), grid.height()) {
            if !grid.site(loc).is_owned_by(player) {
                continue;
            }
            stats.owned += 1;

            let started = self.clock.now();
            let (decision, dir) = if is_border(grid, player, loc) {
                stats.border += 1;
                self.decide_border(grid, &mut ledger, &router, loc, target)
            } else {
                stats.interior += 1;
                if budget.exhausted() && !stats.budget_exhausted {
                    stats.budget_exhausted = true;
                    warn!(
                        turn,
                        spent_ms = budget.spent().as_millis() as u64,
                        "think budget exhausted, decongesting remaining interior cells"
                    );
                }
                self.decide_interior(grid, &mut ledger, &frontier, loc, budget.exhausted())
            };
            budget.record(self.clock.now().saturating_sub(started));

            debug!(x = loc.x, y = loc.y, dir = dir.code(), reason = decision.tag(), "cell decided");
            sink.emit(
                TraceEvent::new(turn, decision.tag())
                    .with_a(pack_location(loc))
                    .with_b(u64::from(dir.code())),
            );
            stats.record(decision);
            moves.insert(loc, dir);
        }

        stats.think_time = budget.spent();
        info!(
            turn,
            owned = stats.owned,
            border = stats.border,
            captures = stats.captures,
            routed = stats.routed,
            forced = stats.forced,
            decongested = stats.decongested,
            weak = stats.weak,
            still = stats.still,
            think_ms = stats.think_time.as_millis() as u64,
            "turn planned"
        );

        TurnPlan {
            moves,
            target,
            ledger,
            stats,
        }
    }

    fn decide_interior<G: GridView + ?Sized>(
        &self,
        grid: &G,
        ledger: &mut ReservationLedger,
        frontier: &[Location],
        loc: Location,
        decongest: bool,
    ) -> (Decision, Direction) {
        let site = grid.site(loc);
        let strength = i32::from(site.strength);

        let (decision, dir) = if decongest {
            (
                Decision::Decongest,
                nearest_edge_direction(grid, self.player, loc),
            )
        } else {
            let force = compute_force(grid, self.player, loc, frontier);
            match force_direction(force) {
                Some(dir) => (Decision::Force, dir),
                None => (Decision::Still, Direction::Still),
            }
        };

        let mut committed = None;
        if !dir.is_still() {
            let dest = grid.neighbor(loc, dir);
            if ledger.can_reinforce(dest, strength) {
                ledger.transfer(loc, dest, strength);
                committed = Some(dest);
            }
        }

        if self.config.is_weak(&site) {
            if let Some(dest) = committed {
                ledger.revert(loc, dest, strength);
            }
            return (Decision::Weak, Direction::Still);
        }

        match committed {
            Some(_) => (decision, dir),
            None => (Decision::Still, Direction::Still),
        }
    }

    fn decide_border<G: GridView + ?Sized>(
        &self,
        grid: &G,
        ledger: &mut ReservationLedger,
        router: &BorderRouter,
        loc: Location,
        target: Option<Location>,
    ) -> (Decision, Direction) {
        let site = grid.site(loc);
        let strength = i32::from(site.strength);

        if let Some((dir, victim)) = self.weakest_target(grid, ledger, loc, strength) {
            if site.strength > grid.site(victim).strength {
                ledger.commit_attack(loc, victim, strength);
                return (Decision::Capture, dir);
            }
        }

        if self.config.is_weak(&site) {
            return (Decision::Weak, Direction::Still);
        }

        match router.route(grid, ledger, loc, target) {
            Direction::Still => (Decision::Still, Direction::Still),
            dir => (Decision::Route, dir),
        }
    }

    /// Lowest-scoring non-owned neighbour that can still absorb `strength` more attackers.
    fn weakest_target<G: GridView + ?Sized>(
        &self,
        grid: &G,
        ledger: &ReservationLedger,
        loc: Location,
        strength: i32,
    ) -> Option<(Direction, Location)> {
        let mut best: Option<(Direction, Location, f32)> = None;
        for dir in Direction::CARDINALS {
            let candidate = grid.neighbor(loc, dir);
            if grid.site(candidate).is_owned_by(self.player) {
                continue;
            }
            if !ledger.can_attack(candidate, strength) {
                continue;
            }
            let value = score(grid, self.player, candidate);
            if best.map_or(true, |(_, _, v)| value < v) {
                best = Some((dir, candidate, value));
            }
        }
        best.map(|(dir, candidate, _)| (dir, candidate))
    }
}
