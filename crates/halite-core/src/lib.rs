//! Toroidal grid primitives for the territory-capture planner.
//!
//! Everything here is read-only geometry and plain data. Planning logic lives in
//! `halite-planner`; wire formats live in `halite-protocol`.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod location;
pub mod moves;
pub mod site;

pub use error::GridError;
pub use grid::{scan_order, GameMap, GridView};
pub use location::{Direction, Location};
pub use moves::{Move, MoveSet};
pub use site::{PlayerId, Site, NEUTRAL};
