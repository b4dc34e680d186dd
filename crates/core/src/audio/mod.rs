use crate::PlaybackClock;

/// Anything that can report how far into the track playback is.
///
/// A real audio backend implements this by polling its output position; the
/// session only ever reads it when a time update arrives.
pub trait TimeSource {
    /// Current position in seconds.
    fn current_time(&self) -> f64;

    /// Total track length in seconds, when the source knows it.
    fn duration(&self) -> Option<f64>;
}

/// Silent playback driven by a wall clock.
#[derive(Debug, Clone, Default)]
pub struct ClockedPlayback {
    clock: PlaybackClock,
    duration: Option<f64>,
}

impl ClockedPlayback {
    /// Starts playing from zero.
    pub fn start(duration: Option<f64>) -> Self {
        Self {
            clock: PlaybackClock::start(),
            duration,
        }
    }

    pub fn seek(&mut self, seconds: f64) {
        tracing::debug!(seconds, "seeking playback");
        self.clock.seek(seconds);
    }

    /// Whether the clock has run past the known duration.
    pub fn finished(&self) -> bool {
        self.duration
            .is_some_and(|duration| self.current_time() >= duration)
    }
}

impl TimeSource for ClockedPlayback {
    fn current_time(&self) -> f64 {
        let position = self.clock.position_seconds();
        match self.duration {
            Some(duration) => position.min(duration),
            None => position,
        }
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_is_capped_at_duration() {
        let mut playback = ClockedPlayback::start(Some(10.0));
        playback.seek(25.0);

        assert_eq!(playback.current_time(), 10.0);
        assert!(playback.finished());
    }

    #[test]
    fn unknown_duration_never_finishes() {
        let mut playback = ClockedPlayback::start(None);
        playback.seek(1_000.0);

        assert!(playback.current_time() >= 1_000.0);
        assert!(!playback.finished());
        assert_eq!(playback.duration(), None);
    }

    #[test]
    fn seeking_back_rewinds_position() {
        let mut playback = ClockedPlayback::start(None);
        playback.seek(30.0);
        playback.seek(2.0);

        assert!(playback.current_time() < 30.0);
    }
}
