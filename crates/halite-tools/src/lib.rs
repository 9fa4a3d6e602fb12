//! Tooling primitives for the territory planner.
//!
//! This crate is intentionally lightweight. It records what the planner decided and why, so tests
//! and debugging tools can inspect a turn without scraping log output.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod trace;

pub use trace::{NullTraceSink, TraceEvent, TraceLog, TraceSink, TracingSink, VecTraceSink};
