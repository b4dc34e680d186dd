use std::time::{Duration, Instant};

use crate::TimedEntry;

/// Wall-clock playback position that can be moved around by seeking.
#[derive(Debug, Clone)]
pub struct PlaybackClock {
    started_at: Instant,
    offset: Duration,
}

impl Default for PlaybackClock {
    fn default() -> Self {
        Self::start()
    }
}

impl PlaybackClock {
    /// Starts a clock at position zero.
    pub fn start() -> Self {
        Self {
            started_at: Instant::now(),
            offset: Duration::ZERO,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.offset.saturating_add(self.started_at.elapsed())
    }

    pub fn position_seconds(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }

    /// Jumps to `seconds`, forwards or backwards. Negative and non-finite
    /// positions land on zero; positions beyond `Duration::MAX` saturate.
    pub fn seek(&mut self, seconds: f64) {
        let seconds = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };
        self.offset = Duration::try_from_secs_f64(seconds).unwrap_or(Duration::MAX);
        self.started_at = Instant::now();
    }

    pub fn reset(&mut self) {
        self.seek(0.0);
    }
}

/// What the editor shows at one playback position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection<'a> {
    /// Entries at or before the current time, in timeline order.
    pub visible: &'a [TimedEntry],
    /// Index of the most recently passed entry, `None` before the first one.
    pub active: Option<usize>,
}

impl<'a> Projection<'a> {
    pub fn active_entry(&self) -> Option<&'a TimedEntry> {
        self.active.and_then(|index| self.visible.get(index))
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

/// Computes the visible prefix of `entries` at `current_time`.
///
/// `entries` must be sorted by time, as [`crate::lyrics::parse`] returns them.
/// The result depends only on the arguments, so any position can be projected
/// in any order, including after a backwards seek.
pub fn project(entries: &[TimedEntry], current_time: f64) -> Projection<'_> {
    // Written as `!(time > t)` so a NaN position reveals everything, the same
    // as a position past the final entry.
    let revealed = entries.partition_point(|entry| !(entry.time > current_time));
    Projection {
        visible: &entries[..revealed],
        active: revealed.checked_sub(1),
    }
}
