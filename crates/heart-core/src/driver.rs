//! Per-frame driver for the heart stage.
//!
//! `AnimationLoop` owns every piece of mutable animation state. Hosts feed it
//! clock readings through `tick` and events through an `InputPort`; it talks
//! back through the collaborator traits in `StageIo`.

use std::sync::mpsc::{self, Receiver};

use glam::Vec3;

use crate::clock::TimeState;
use crate::config::StageParams;
use crate::constants::{MODEL_INITIAL_SCALE, MODEL_TARGET_SCALE};
use crate::error::{Asset, StageError, StageResult};
use crate::input::{self, parallax_offset, InputEvent, InputPort};
use crate::intensity::{FrequencySampler, IntensityTracker};
use crate::orbit::CameraOrbitDriver;
use crate::phase::{PhaseTransition, PlaybackPhase, PlaybackPhaseController};
use crate::state::{Camera, FrameState, FrameUniforms};
use crate::transport::{PlaybackElement, Transport};
use crate::tween::{Animated, Ease};
use crate::typewriter::{CaptionSink, Typewriter};
use crate::uniforms::{ShaderClocks, UniformTimeAdvancer};

/// The button that kicks off playback.
pub trait TriggerControl {
    fn set_enabled(&mut self, enabled: bool);
    fn set_opacity(&mut self, opacity: f32);
}

pub trait RenderSurface {
    fn render(&mut self, frame: &FrameState) -> StageResult<()>;
}

/// External collaborators driven by the loop.
pub struct StageIo {
    pub sampler: Box<dyn FrequencySampler>,
    pub playback: Box<dyn PlaybackElement>,
    pub trigger: Box<dyn TriggerControl>,
    pub surface: Box<dyn RenderSurface>,
    pub caption: Box<dyn CaptionSink>,
}

/// Camera position, one timeline slot per axis.
struct CameraRig {
    x: Animated,
    y: Animated,
    z: Animated,
}

impl CameraRig {
    fn at(p: [f32; 3]) -> Self {
        Self {
            x: Animated::new(p[0]),
            y: Animated::new(p[1]),
            z: Animated::new(p[2]),
        }
    }

    fn position(&self) -> Vec3 {
        Vec3::new(self.x.value(), self.y.value(), self.z.value())
    }
}

pub struct AnimationLoop {
    params: StageParams,
    io: StageIo,
    inputs: Receiver<InputEvent>,
    port: InputPort,

    time: TimeState,
    phase: PlaybackPhaseController,
    intensity: IntensityTracker,
    orbit: CameraOrbitDriver,
    uniforms: UniformTimeAdvancer,
    transport: Transport,
    typewriter: Typewriter,

    camera: Camera,
    rig: CameraRig,
    trigger_opacity: Animated,
    model_scale: Animated,
    model_visible: bool,
    viewport: [f32; 2],
    glow_time: f32,
}

impl AnimationLoop {
    pub fn new(params: StageParams, io: StageIo, viewport: [f32; 2], caption_script: &str) -> Self {
        let (tx, rx) = mpsc::channel();
        let rest = params.camera_rest;
        let camera = Camera::new(Vec3::from(rest), params.fov_degrees, viewport[0], viewport[1]);
        Self {
            io,
            inputs: rx,
            port: InputPort::new(tx),
            time: TimeState::default(),
            phase: PlaybackPhaseController::new(),
            intensity: IntensityTracker::new(params.intensity_divisor),
            orbit: CameraOrbitDriver::new(params.orbit.clone()),
            uniforms: UniformTimeAdvancer::new(params.clocks.clone()),
            transport: Transport::new(),
            typewriter: Typewriter::new(caption_script, params.typewriter_step_sec),
            camera,
            rig: CameraRig::at(rest),
            trigger_opacity: Animated::new(1.0),
            model_scale: Animated::new(MODEL_INITIAL_SCALE),
            model_visible: false,
            viewport,
            glow_time: 0.0,
            params,
        }
    }

    /// Sending half for host event handlers.
    pub fn input_port(&self) -> InputPort {
        self.port.clone()
    }

    pub fn phase(&self) -> PlaybackPhase {
        self.phase.phase()
    }

    pub fn time(&self) -> &TimeState {
        &self.time
    }

    pub fn orbit(&self) -> &CameraOrbitDriver {
        &self.orbit
    }

    pub fn uniforms(&self) -> &UniformTimeAdvancer {
        &self.uniforms
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn intensity(&self) -> f32 {
        self.intensity.value()
    }

    pub fn trigger_opacity(&self) -> f32 {
        self.trigger_opacity.value()
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// User-gesture entry point. Starts a run at the current elapsed time.
    pub fn start_on_user_gesture(&mut self) -> StageResult<()> {
        let now = self.time.elapsed;
        let PhaseTransition::Started { run_start } = self.phase.start(&mut self.time)? else {
            return Ok(());
        };
        log::info!("[phase] running from t={run_start:.3}s");
        self.intensity.reset();
        self.io.trigger.set_enabled(false);
        self.trigger_opacity
            .tween_to(0.0, now, self.params.trigger_fade_sec, Ease::Power1Out);
        // the orbit owns x/z while running
        self.rig.x.cancel();
        self.rig.z.cancel();
        if let Some(v) = self.params.start_volume {
            self.io.playback.set_volume(v);
        }
        if let Err(e) = self.io.playback.play() {
            log::warn!("[phase] play failed: {e}");
        }
        self.typewriter.start(now);
        Ok(())
    }

    /// One display refresh. `elapsed_sec` is seconds since the loop started.
    pub fn tick(&mut self, elapsed_sec: f64) {
        let delta = self.time.advance(elapsed_sec, self.params.delta_mode);
        let now = self.time.elapsed;

        for ev in input::drain(&self.inputs) {
            self.handle_input(ev, now);
        }

        let intensity = if self.phase.phase() != PlaybackPhase::Idle {
            self.intensity.sample(self.io.sampler.as_mut())
        } else {
            self.intensity.reset();
            0.0
        };

        let playing = if self.phase.phase() != PlaybackPhase::Idle {
            match self.io.playback.is_playing() {
                Ok(p) => p,
                Err(e) => {
                    log::warn!("[phase] {e}; treating as stopped");
                    false
                }
            }
        } else {
            false
        };

        if let Some(PhaseTransition::Finished { run_duration }) =
            self.phase.tick(&mut self.time, playing)
        {
            self.on_finished(now, run_duration);
        }

        self.step_timelines(now);
        if self.phase.is_running() {
            let p = self.orbit.advance(delta, intensity);
            self.rig.x.set(p.x);
            self.rig.z.set(p.z);
        }
        self.camera.eye = self.rig.position();
        self.camera.look_at_origin();

        let clocks = self.uniforms.advance(delta, intensity);
        self.glow_time += self.time.forward_step_sec() as f32;

        for step in self.typewriter.advance(now) {
            self.io.caption.apply(step);
        }

        let frame = self.frame_state(intensity, clocks);
        if let Err(e) = self.io.surface.render(&frame) {
            log::error!("render error: {e}");
        }

        self.phase.settle();
        self.time.commit();
    }

    fn on_finished(&mut self, now: f64, run_duration: f64) {
        log::info!(
            "[phase] finished after {run_duration:.2}s (total {:.2}s)",
            self.time.accumulated_run_time
        );
        self.intensity.reset();
        self.io.trigger.set_enabled(true);
        self.orbit.on_finish();
        let rest = self.params.camera_rest;
        let d = self.params.return_duration_sec;
        self.rig.x.tween_to(rest[0], now, d, Ease::ExpoIn);
        self.rig.z.tween_to(rest[2], now, d, Ease::ExpoIn);
        self.trigger_opacity
            .tween_to(1.0, now, self.params.trigger_fade_sec, Ease::Power1Out);
    }

    fn step_timelines(&mut self, now: f64) {
        self.rig.x.update(now);
        self.rig.y.update(now);
        self.rig.z.update(now);
        if self.trigger_opacity.is_animating() {
            let o = self.trigger_opacity.update(now);
            self.io.trigger.set_opacity(o);
        }
        self.model_scale.update(now);
    }

    fn handle_input(&mut self, ev: InputEvent, now: f64) {
        match ev {
            InputEvent::Resize { width, height } => {
                self.viewport = [width, height];
                self.camera.resize(width, height);
            }
            InputEvent::PointerMove { x, y } => {
                let [ox, oy] = parallax_offset(x, y, self.viewport[0], self.viewport[1]);
                let d = self.params.parallax_duration_sec;
                self.rig.x.tween_to(ox, now, d, Ease::Power1Out);
                self.rig.y.tween_to(oy, now, d, Ease::Power1Out);
            }
            InputEvent::StartRequested => {
                if let Err(e) = self.start_on_user_gesture() {
                    log::warn!("[gesture] {e}; ignoring");
                }
            }
            InputEvent::Transport(cmd) => {
                if let Err(e) = self.transport.apply(cmd, self.io.playback.as_mut()) {
                    log::warn!("[transport] {cmd:?} failed: {e}");
                }
            }
            InputEvent::MediaTimeUpdate { current_time } => {
                match self
                    .transport
                    .on_time_update(current_time, self.io.playback.as_mut())
                {
                    Ok(true) => log::info!("[transport] paused after repeat"),
                    Ok(false) => {}
                    Err(e) => log::warn!("[transport] time update: {e}"),
                }
            }
            InputEvent::LoadProgress { loaded, total } => {
                if total > 0.0 {
                    let remaining = (1.0 - loaded / total).clamp(0.0, 1.0) as f32;
                    self.trigger_opacity.tween_to(
                        remaining,
                        now,
                        self.params.trigger_fade_sec,
                        Ease::Power1Out,
                    );
                }
            }
            InputEvent::AssetReady(asset) => {
                log::info!("[assets] {asset:?} ready");
                if asset == Asset::Matcap {
                    self.model_scale.tween_to(
                        MODEL_TARGET_SCALE,
                        now,
                        self.params.model_intro_sec,
                        Ease::ElasticOut,
                    );
                }
                if asset == Asset::HeartModel {
                    self.model_visible = true;
                }
            }
            InputEvent::AssetFailed { asset, reason } => {
                log::warn!("{}", StageError::AssetLoad { asset, reason });
                if asset == Asset::HeartModel {
                    self.model_visible = false;
                }
            }
        }
    }

    fn frame_state(&self, intensity: f32, clocks: ShaderClocks) -> FrameState {
        let eye = self.camera.eye;
        let uniforms = FrameUniforms {
            view_proj: (self.camera.projection_matrix() * self.camera.view_matrix())
                .to_cols_array_2d(),
            eye: [eye.x, eye.y, eye.z, 1.0],
            resolution: self.viewport,
            heart_time: clocks.heart_time,
            snow_time: clocks.snow_time,
            model_rotation_y: clocks.model_rotation,
            model_scale: self.model_scale.value(),
            glow_time: self.glow_time,
            intensity,
        };
        FrameState {
            uniforms,
            camera: self.camera.clone(),
            clocks,
            phase: self.phase.phase(),
            trigger_opacity: self.trigger_opacity.value(),
            model_visible: self.model_visible,
        }
    }
}
