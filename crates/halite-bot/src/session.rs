//! The harness loop: handshake, then one plan per frame until the stream closes.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use halite_core::{GridView, PlayerId};
use halite_planner::MovementPlanner;
use halite_protocol::{read_frame, read_init, send_frame, send_init};
use halite_tools::TracingSink;
use tracing::info;

use crate::BotConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub player: PlayerId,
    pub turns: u64,
}

pub fn play<R, W>(reader: &mut R, writer: &mut W, config: &BotConfig) -> Result<SessionSummary>
where
    R: BufRead,
    W: Write,
{
    let init = read_init(reader).context("Failed to read game init")?;
    let mut map = init.map;
    info!(
        player = init.player,
        width = map.width(),
        height = map.height(),
        name = %config.name,
        "game started"
    );

    let mut planner = MovementPlanner::new(init.player, config.planner);
    send_init(writer, &config.name).context("Failed to send bot name")?;

    let mut sink = TracingSink;
    while read_frame(reader, &mut map)
        .with_context(|| format!("Failed to read frame for turn {}", planner.turn()))?
    {
        let plan = planner.plan_turn_traced(&map, &mut sink);
        send_frame(writer, &plan.moves)
            .with_context(|| format!("Failed to send moves for turn {}", planner.turn() - 1))?;
    }

    info!(turns = planner.turn(), "harness closed the stream");
    Ok(SessionSummary {
        player: init.player,
        turns: planner.turn(),
    })
}
