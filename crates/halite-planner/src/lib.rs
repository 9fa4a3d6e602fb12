//! Per-turn movement planning for a territory-capture bot on a toroidal grid.
//!
//! Every owned cell gets exactly one directive per turn. Interior cells follow an inverse-cube
//! force field toward the frontier; border cells greedily capture their cheapest neighbour or
//! route along the border toward a single frontier target chosen once per turn. A reservation
//! ledger, updated in row-major scan order, keeps any destination from being over-committed.
//! Earlier cells in scan order therefore have admission priority over later ones.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod border;
pub mod clock;
pub mod config;
pub mod decongest;
pub mod force;
pub mod frontier;
pub mod heuristic;
pub mod ledger;
pub mod planner;
pub mod router;

pub use border::{frontier_cells, is_border};
pub use clock::{Clock, ManualClock, MonotonicClock, ThinkBudget};
pub use config::PlannerConfig;
pub use decongest::nearest_edge_direction;
pub use force::{compute_force, force_direction, frontier_pull, Force};
pub use frontier::select_target;
pub use heuristic::score;
pub use ledger::ReservationLedger;
pub use planner::{pack_location, unpack_location, Decision, MovementPlanner, TurnPlan, TurnStats};
pub use router::BorderRouter;
