//! Offline planning of a single JSON map snapshot.

use std::path::Path;

use anyhow::{Context, Result};
use halite_core::{GameMap, Location, MoveSet, PlayerId};
use halite_planner::{MovementPlanner, PlannerConfig, TurnStats};
use halite_tools::TraceLog;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotReport {
    pub player: PlayerId,
    pub target: Option<Location>,
    pub moves: MoveSet,
    pub stats: TurnStats,
    /// Per-cell decisions, `a` = packed location, `b` = direction code.
    pub trace: TraceLog,
}

pub fn plan_snapshot(
    path: &Path,
    player: PlayerId,
    config: PlannerConfig,
) -> Result<SnapshotReport> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot from {}", path.display()))?;
    let map: GameMap = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse snapshot from {}", path.display()))?;

    let mut trace = TraceLog::default();
    let plan = MovementPlanner::new(player, config).plan_turn_traced(&map, &mut trace);
    Ok(SnapshotReport {
        player,
        target: plan.target,
        moves: plan.moves,
        stats: plan.stats,
        trace,
    })
}
