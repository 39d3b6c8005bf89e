//! Playback phase tracking.
//!
//! The audio element's paused flag is the only source of truth: once a run is
//! underway, the first frame that reports "not playing" ends it, even if
//! "playing" was never observed in between.

use crate::clock::TimeState;
use crate::error::{StageError, StageResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlaybackPhase {
    #[default]
    Idle,
    Running,
    JustFinished,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PhaseTransition {
    Started { run_start: f64 },
    Finished { run_duration: f64 },
}

#[derive(Clone, Debug, Default)]
pub struct PlaybackPhaseController {
    phase: PlaybackPhase,
    runs_completed: u32,
}

impl PlaybackPhaseController {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn phase(&self) -> PlaybackPhase {
        self.phase
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == PlaybackPhase::Running
    }

    pub fn runs_completed(&self) -> u32 {
        self.runs_completed
    }

    /// Begin a run at the current elapsed time. Only valid from `Idle`.
    pub fn start(&mut self, time: &mut TimeState) -> StageResult<PhaseTransition> {
        if self.phase != PlaybackPhase::Idle {
            return Err(StageError::NotIdle(self.phase));
        }
        self.phase = PlaybackPhase::Running;
        time.run_start = time.elapsed;
        time.refresh_run_time();
        Ok(PhaseTransition::Started {
            run_start: time.run_start,
        })
    }

    /// Per-frame update. Returns `Finished` on the single frame where a run ends.
    pub fn tick(&mut self, time: &mut TimeState, external_is_playing: bool) -> Option<PhaseTransition> {
        if self.phase != PlaybackPhase::Running {
            return None;
        }
        time.refresh_run_time();
        if external_is_playing {
            return None;
        }
        let run_duration = time.elapsed - time.run_start;
        time.accumulated_run_time += run_duration;
        time.current_run_time = time.accumulated_run_time;
        self.phase = PlaybackPhase::JustFinished;
        self.runs_completed += 1;
        Some(PhaseTransition::Finished { run_duration })
    }

    /// Fold a processed `JustFinished` back to `Idle`.
    pub fn settle(&mut self) {
        if self.phase == PlaybackPhase::JustFinished {
            self.phase = PlaybackPhase::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(elapsed: f64, time: &mut TimeState) {
        time.elapsed = elapsed;
    }

    #[test]
    fn start_requires_idle() {
        let mut c = PlaybackPhaseController::new();
        let mut t = TimeState::default();
        assert!(c.start(&mut t).is_ok());
        assert_eq!(
            c.start(&mut t),
            Err(StageError::NotIdle(PlaybackPhase::Running))
        );
    }

    #[test]
    fn tick_while_idle_does_nothing() {
        let mut c = PlaybackPhaseController::new();
        let mut t = TimeState::default();
        assert_eq!(c.tick(&mut t, false), None);
        assert_eq!(c.phase(), PlaybackPhase::Idle);
    }

    #[test]
    fn run_time_accumulates_across_runs_and_freezes_between() {
        let mut c = PlaybackPhaseController::new();
        let mut t = TimeState::default();
        at(1.0, &mut t);
        c.start(&mut t).unwrap();
        at(3.0, &mut t);
        assert_eq!(c.tick(&mut t, true), None);
        assert!((t.current_run_time - 2.0).abs() < 1e-12);
        at(4.0, &mut t);
        assert_eq!(
            c.tick(&mut t, false),
            Some(PhaseTransition::Finished { run_duration: 3.0 })
        );
        c.settle();
        assert_eq!(c.phase(), PlaybackPhase::Idle);

        at(10.0, &mut t);
        assert_eq!(c.tick(&mut t, false), None);
        assert!((t.current_run_time - 3.0).abs() < 1e-12);

        c.start(&mut t).unwrap();
        at(11.5, &mut t);
        c.tick(&mut t, true);
        assert!((t.current_run_time - 4.5).abs() < 1e-12);
        assert_eq!(c.runs_completed(), 1);
    }
}
