// Shared animation tuning constants for the heart stage.

// Frame clock
pub const MAX_FRAME_DELTA_MS: f64 = 60.0; // upper clamp on the per-frame delta

// Intensity
pub const INTENSITY_DIVISOR: f32 = 2000.0; // intensity = avg^2 / divisor
pub const ANALYSER_FFT_SIZE: u32 = 32;

// Camera orbit (radians per millisecond)
pub const ORBIT_RATE_X: f32 = 0.001 * 0.63;
pub const ORBIT_RATE_Z: f32 = 0.001 * 0.39;
pub const ORBIT_AMPLITUDE_X: f32 = 2.0; // "a"
pub const ORBIT_AMPLITUDE_Z: f32 = 4.5; // "c"
pub const ORBIT_Z_MIN: f32 = 1.75;
pub const ORBIT_Z_MAX: f32 = 6.5;

// Camera rest pose and projection
pub const CAMERA_REST: [f32; 3] = [0.0, 0.0, 4.5];
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;

// Fire-and-forget timelines (seconds)
pub const RETURN_DURATION_SEC: f64 = 4.0;
pub const TRIGGER_FADE_SEC: f64 = 1.0;
pub const PARALLAX_DURATION_SEC: f64 = 0.5;
pub const MODEL_INTRO_SEC: f64 = 1.5;

// Pointer parallax: screen edge -> camera offset
pub const PARALLAX_RANGE: [f32; 2] = [0.2, -0.2];

// Shader clock rates (per millisecond)
pub const HEART_TIME_RATE: f32 = 0.0005;
pub const HEART_INTENSITY_GAIN: f32 = 0.2;
pub const MODEL_ROTATION_RATE: f32 = 0.0005;
pub const SNOW_TIME_RATE: f32 = 0.0004;

// Heart model scale
pub const MODEL_INITIAL_SCALE: f32 = 0.01;
pub const MODEL_TARGET_SCALE: f32 = 0.35;

// Playback
pub const START_VOLUME: f32 = 0.5;
pub const LOOPS_BEFORE_PAUSE: u32 = 2;

// Caption
pub const TYPEWRITER_STEP_SEC: f64 = 0.05;

// Particle fields
pub const HEART_PARTICLE_COUNT: usize = 1500;
pub const HEART_PARTICLE_MAX_SPEED: f32 = 12.5 * std::f32::consts::PI;
pub const SNOW_PARTICLE_COUNT: usize = 550;
pub const SNOW_PHI_SPAN: f32 = 10.0;
pub const PARTICLE_MAX_SCALE: f32 = 0.35;

pub const HEART_PALETTE: [[f32; 3]; 6] = [
    [1.0, 1.0, 1.0],         // white
    [1.0, 0.0, 0.0],         // red
    [1.0, 0.753, 0.796],     // pink
    [0.863, 0.078, 0.235],   // crimson
    [1.0, 0.412, 0.706],     // hotpink
    [0.0, 0.502, 0.0],       // green
];

pub const SNOW_PALETTE: [[f32; 3]; 4] = [
    [1.0, 0.0, 0.0],
    [1.0, 0.753, 0.796],
    [1.0, 0.412, 0.706],
    [0.0, 0.502, 0.0],
];
