//! Audio player controls on top of the playback element.

use crate::constants::LOOPS_BEFORE_PAUSE;
use crate::error::StageResult;

/// The audio element the stage plays through.
pub trait PlaybackElement {
    /// `true` while the element is not paused.
    fn is_playing(&self) -> StageResult<bool>;
    fn play(&mut self) -> StageResult<()>;
    fn pause(&mut self) -> StageResult<()>;
    fn volume(&self) -> f32;
    fn set_volume(&mut self, volume: f32);
    fn seek(&mut self, seconds: f64);
    fn current_time(&self) -> f64;
    fn duration(&self) -> f64;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransportCommand {
    TogglePlayPause,
    Stop,
    ToggleMute,
}

/// Percentage of the track played, floored; 0 before the first sample or
/// while the duration is unknown.
pub fn progress_percent(current_time: f64, duration: f64) -> u32 {
    if current_time <= 0.0 || !duration.is_finite() || duration <= 0.0 {
        return 0;
    }
    ((100.0 / duration) * current_time).floor().clamp(0.0, 100.0) as u32
}

#[derive(Clone, Debug, Default)]
pub struct Transport {
    loop_count: u32,
}

impl Transport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loop_count(&self) -> u32 {
        self.loop_count
    }

    pub fn apply(&mut self, cmd: TransportCommand, el: &mut dyn PlaybackElement) -> StageResult<()> {
        match cmd {
            TransportCommand::TogglePlayPause => {
                if el.is_playing().unwrap_or(false) {
                    el.pause()
                } else {
                    el.play()
                }
            }
            TransportCommand::Stop => {
                el.pause()?;
                el.seek(0.0);
                Ok(())
            }
            TransportCommand::ToggleMute => {
                let next = if el.volume() != 0.0 { 0.0 } else { 1.0 };
                el.set_volume(next);
                Ok(())
            }
        }
    }

    /// Media `timeupdate`. A report at time zero counts as the start of a pass
    /// through the track; the player holds paused while the second pass is
    /// current. Returns `true` when it paused the element.
    pub fn on_time_update(&mut self, current_time: f64, el: &mut dyn PlaybackElement) -> StageResult<bool> {
        if current_time == 0.0 {
            self.loop_count += 1;
        }
        if self.loop_count == LOOPS_BEFORE_PAUSE {
            el.pause()?;
            return Ok(true);
        }
        Ok(false)
    }
}
