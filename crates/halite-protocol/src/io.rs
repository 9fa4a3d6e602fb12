use std::io::{BufRead, Write};

use halite_core::{GameMap, MoveSet, PlayerId};
use tracing::trace;

use crate::codec::{format_moves, parse_dimensions, parse_frame_into, parse_player, parse_productions};
use crate::ProtocolError;

/// Everything the harness sends before the first turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Init {
    pub player: PlayerId,
    /// Map with productions and the opening frame applied.
    pub map: GameMap,
}

/// Reads one line, without its terminator. `None` at end of stream.
fn read_line<R: BufRead + ?Sized>(reader: &mut R) -> Result<Option<String>, ProtocolError> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

fn require_line<R: BufRead + ?Sized>(
    reader: &mut R,
    expected: &'static str,
) -> Result<String, ProtocolError> {
    read_line(reader)?.ok_or(ProtocolError::UnexpectedEof { expected })
}

pub fn read_init<R: BufRead + ?Sized>(reader: &mut R) -> Result<Init, ProtocolError> {
    let player = parse_player(&require_line(reader, "player id")?)?;
    let (width, height) = parse_dimensions(&require_line(reader, "map dimensions")?)?;
    let mut map = GameMap::new(width, height)?;
    parse_productions(&require_line(reader, "productions")?, &mut map)?;
    parse_frame_into(&require_line(reader, "initial frame")?, &mut map)?;
    trace!(player, width, height, "init received");
    Ok(Init { player, map })
}

pub fn send_init<W: Write + ?Sized>(writer: &mut W, name: &str) -> Result<(), ProtocolError> {
    writeln!(writer, "{name}")?;
    writer.flush()?;
    Ok(())
}

/// Applies the next frame to `map`.
///
/// Returns `Ok(false)` when the harness has closed the stream, which is how a game ends.
pub fn read_frame<R: BufRead + ?Sized>(
    reader: &mut R,
    map: &mut GameMap,
) -> Result<bool, ProtocolError> {
    let Some(line) = read_line(reader)? else {
        return Ok(false);
    };
    parse_frame_into(&line, map)?;
    trace!(bytes = line.len(), "frame received");
    Ok(true)
}

pub fn send_frame<W: Write + ?Sized>(writer: &mut W, moves: &MoveSet) -> Result<(), ProtocolError> {
    writeln!(writer, "{}", format_moves(moves))?;
    writer.flush()?;
    Ok(())
}
