//! Stage tuning parameters.
//!
//! Defaults mirror `constants.rs`; hosts override individual fields when they
//! need a different feel (tests do this to pick the forward delta convention).

use crate::clock::DeltaMode;
use crate::constants::*;

#[derive(Clone, Debug, PartialEq)]
pub struct OrbitParams {
    pub rate_x: f32,
    pub rate_z: f32,
    pub amplitude_x: f32,
    pub amplitude_z: f32,
    pub z_min: f32,
    pub z_max: f32,
}

impl Default for OrbitParams {
    fn default() -> Self {
        Self {
            rate_x: ORBIT_RATE_X,
            rate_z: ORBIT_RATE_Z,
            amplitude_x: ORBIT_AMPLITUDE_X,
            amplitude_z: ORBIT_AMPLITUDE_Z,
            z_min: ORBIT_Z_MIN,
            z_max: ORBIT_Z_MAX,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClockRates {
    pub heart: f32,
    pub heart_intensity_gain: f32,
    pub model_rotation: f32,
    pub snow: f32,
}

impl Default for ClockRates {
    fn default() -> Self {
        Self {
            heart: HEART_TIME_RATE,
            heart_intensity_gain: HEART_INTENSITY_GAIN,
            model_rotation: MODEL_ROTATION_RATE,
            snow: SNOW_TIME_RATE,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StageParams {
    pub delta_mode: DeltaMode,
    pub orbit: OrbitParams,
    pub clocks: ClockRates,
    pub intensity_divisor: f32,
    pub camera_rest: [f32; 3],
    pub fov_degrees: f32,
    pub return_duration_sec: f64,
    pub trigger_fade_sec: f64,
    pub parallax_duration_sec: f64,
    pub model_intro_sec: f64,
    /// Volume applied on the start gesture; `None` leaves the element alone.
    pub start_volume: Option<f32>,
    pub typewriter_step_sec: f64,
}

impl Default for StageParams {
    fn default() -> Self {
        Self {
            delta_mode: DeltaMode::default(),
            orbit: OrbitParams::default(),
            clocks: ClockRates::default(),
            intensity_divisor: INTENSITY_DIVISOR,
            camera_rest: CAMERA_REST,
            fov_degrees: CAMERA_FOV_DEGREES,
            return_duration_sec: RETURN_DURATION_SEC,
            trigger_fade_sec: TRIGGER_FADE_SEC,
            parallax_duration_sec: PARALLAX_DURATION_SEC,
            model_intro_sec: MODEL_INTRO_SEC,
            start_volume: Some(START_VOLUME),
            typewriter_step_sec: TYPEWRITER_STEP_SEC,
        }
    }
}
