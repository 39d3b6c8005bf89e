//! Frame clock and run-time bookkeeping.

use crate::constants::MAX_FRAME_DELTA_MS;

/// How the per-frame delta is derived from two clock readings.
///
/// `Reversed` reproduces the historical `(previous - elapsed) * 1000`, which is
/// non-positive whenever time moves forward. Only the magnitude matters to the
/// shader clocks, so it stays the default until someone decides otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeltaMode {
    #[default]
    Reversed,
    Forward,
}

/// Clock readings owned by the animation loop. Run fields are written only by
/// the phase controller.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimeState {
    /// Seconds since the loop started.
    pub elapsed: f64,
    /// `elapsed` of the last committed frame.
    pub previous: f64,
    /// Milliseconds, clamped to at most 60.
    pub delta: f32,
    pub run_start: f64,
    pub accumulated_run_time: f64,
    pub current_run_time: f64,
}

impl TimeState {
    /// Record a new clock reading and return the frame delta in milliseconds.
    pub fn advance(&mut self, elapsed: f64, mode: DeltaMode) -> f32 {
        self.elapsed = elapsed;
        self.delta = frame_delta_ms(self.previous, elapsed, mode);
        self.delta
    }

    /// Forward wall-clock step in seconds, never negative.
    #[inline]
    pub fn forward_step_sec(&self) -> f64 {
        (self.elapsed - self.previous).max(0.0)
    }

    /// Close the frame: the current reading becomes the previous one.
    #[inline]
    pub fn commit(&mut self) {
        self.previous = self.elapsed;
    }

    /// Recompute the run time for the current frame. Callers only do this while
    /// running, which keeps the value frozen otherwise.
    #[inline]
    pub fn refresh_run_time(&mut self) {
        self.current_run_time = self.elapsed - self.run_start + self.accumulated_run_time;
    }
}

#[inline]
pub fn frame_delta_ms(previous: f64, elapsed: f64, mode: DeltaMode) -> f32 {
    let raw = match mode {
        DeltaMode::Reversed => (previous - elapsed) * 1000.0,
        DeltaMode::Forward => (elapsed - previous) * 1000.0,
    };
    raw.min(MAX_FRAME_DELTA_MS) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversed_delta_is_non_positive_going_forward() {
        let d = frame_delta_ms(1.0, 1.016, DeltaMode::Reversed);
        assert!(d <= 0.0);
        assert!((d + 16.0).abs() < 1e-3);
    }

    #[test]
    fn delta_is_clamped_above_only() {
        assert_eq!(frame_delta_ms(0.0, 1.0, DeltaMode::Forward), 60.0);
        assert_eq!(frame_delta_ms(1.0, 0.0, DeltaMode::Reversed), 60.0);
        assert!((frame_delta_ms(0.0, 2.0, DeltaMode::Reversed) + 2000.0).abs() < 1e-3);
    }

    #[test]
    fn commit_moves_previous() {
        let mut t = TimeState::default();
        t.advance(0.5, DeltaMode::Forward);
        assert!((t.forward_step_sec() - 0.5).abs() < 1e-12);
        t.commit();
        assert_eq!(t.previous, 0.5);
        assert_eq!(t.forward_step_sec(), 0.0);
    }
}
