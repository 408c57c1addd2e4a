//! Observers notified of every move the bot commits to.
use std::fmt;

use maze_core::{Coordinate, Move};

/// Receives `(position, move)` after every successful tick.
///
/// The bot never reads anything back from a tracer.
pub trait Tracer {
    fn register(&mut self, position: Coordinate, mv: Move);
}

impl<T: Tracer + ?Sized> Tracer for &mut T {
    fn register(&mut self, position: Coordinate, mv: Move) {
        (**self).register(position, mv);
    }
}

impl<T: Tracer + ?Sized> Tracer for Box<T> {
    fn register(&mut self, position: Coordinate, mv: Move) {
        (**self).register(position, mv);
    }
}

/// One recorded decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceEntry {
    pub position: Coordinate,
    pub mv: Move,
}

impl fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (dr, dc) = self.mv.delta();
        write!(f, "current {}, step ({}, {})", self.position, dr, dc)
    }
}

/// Keeps the full move history in memory.
#[derive(Clone, Debug, Default)]
pub struct HistoryTracer {
    history: Vec<TraceEntry>,
}

impl HistoryTracer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[TraceEntry] {
        &self.history
    }

    /// History rendered one line per tick.
    pub fn lines(&self) -> Vec<String> {
        self.history.iter().map(ToString::to_string).collect()
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }
}

impl Tracer for HistoryTracer {
    fn register(&mut self, position: Coordinate, mv: Move) {
        self.history.push(TraceEntry { position, mv });
    }
}

/// Forwards every decision to `tracing` at debug level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogTracer;

impl Tracer for LogTracer {
    fn register(&mut self, position: Coordinate, mv: Move) {
        tracing::debug!(target: "pursuit_bot::trace", %position, %mv, "move registered");
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoopTracer;

impl Tracer for NoopTracer {
    fn register(&mut self, _position: Coordinate, _mv: Move) {}
}
