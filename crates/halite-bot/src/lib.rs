//! Bot runtime: configuration, the harness session loop and offline snapshot planning.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod config;
pub mod session;
pub mod snapshot;

pub use config::{BotConfig, LogConfig};
pub use session::{play, SessionSummary};
pub use snapshot::{plan_snapshot, SnapshotReport};
