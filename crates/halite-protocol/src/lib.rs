//! The game harness protocol.
//!
//! Everything travels as newline-terminated lines of space-separated integers:
//!
//! - init: the bot's player id, then `width height`, then `width * height` productions in
//!   row-major order, then one map frame. The bot answers with its name.
//! - frame: run-length encoded owners as `count owner` pairs covering every cell, followed by
//!   `width * height` strengths.
//! - moves: `x y direction` triples on a single line.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

mod codec;
mod error;
mod io;

pub use codec::{format_moves, parse_dimensions, parse_frame_into, parse_player, parse_productions};
pub use error::ProtocolError;
pub use io::{read_frame, read_init, send_frame, send_init, Init};
