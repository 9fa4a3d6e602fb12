#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// One planner decision: which turn, what kind (`tag`), and two numeric payloads.
///
/// Static tags never allocate. The planner packs a cell location into `a` and a direction code
/// into `b`; other tags define their own payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceEvent {
    pub turn: u64,
    pub tag: Cow<'static, str>,
    pub a: u64,
    pub b: u64,
}

impl TraceEvent {
    pub fn new(turn: u64, tag: impl Into<Cow<'static, str>>) -> Self {
        Self {
            turn,
            tag: tag.into(),
            a: 0,
            b: 0,
        }
    }

    pub fn with_a(mut self, a: u64) -> Self {
        self.a = a;
        self
    }

    pub fn with_b(mut self, b: u64) -> Self {
        self.b = b;
        self
    }
}

/// Receives decisions as the planner makes them.
pub trait TraceSink {
    fn emit(&mut self, event: TraceEvent);
}

/// Discards everything; used when nobody is watching the turn.
#[derive(Debug, Default)]
pub struct NullTraceSink;

impl TraceSink for NullTraceSink {
    fn emit(&mut self, _event: TraceEvent) {}
}

/// Keeps a turn's decisions in memory for assertions.
#[derive(Debug, Default)]
pub struct VecTraceSink {
    pub events: Vec<TraceEvent>,
}

impl VecTraceSink {
    pub fn with_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a TraceEvent> + 'a {
        self.events.iter().filter(move |e| e.tag == tag)
    }
}

impl TraceSink for VecTraceSink {
    fn emit(&mut self, event: TraceEvent) {
        self.events.push(event);
    }
}

/// Forwards every event to the `tracing` subscriber at `TRACE` level.
#[derive(Debug, Default)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn emit(&mut self, event: TraceEvent) {
        tracing::trace!(
            turn = event.turn,
            tag = %event.tag,
            a = event.a,
            b = event.b,
            "decision"
        );
    }
}

impl<S: TraceSink + ?Sized> TraceSink for &mut S {
    fn emit(&mut self, event: TraceEvent) {
        (**self).emit(event);
    }
}

impl<S: TraceSink + ?Sized> TraceSink for Box<S> {
    fn emit(&mut self, event: TraceEvent) {
        (**self).emit(event);
    }
}

/// Events of one or more turns, kept for inspection after planning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceLog {
    pub events: Vec<TraceEvent>,
}

impl TraceLog {
    pub fn push(&mut self, event: TraceEvent) {
        self.events.push(event);
    }

    pub fn for_turn(&self, turn: u64) -> impl Iterator<Item = &TraceEvent> + '_ {
        self.events.iter().filter(move |e| e.turn == turn)
    }

    /// Event count per tag for one turn, ordered by tag.
    pub fn tally(&self, turn: u64) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for event in self.for_turn(turn) {
            *counts.entry(event.tag.as_ref()).or_insert(0) += 1;
        }
        counts
    }
}

impl TraceSink for TraceLog {
    fn emit(&mut self, event: TraceEvent) {
        self.push(event);
    }
}
