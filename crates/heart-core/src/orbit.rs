//! Camera orbit while audio runs.

use crate::config::OrbitParams;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrbitAngle {
    pub x: f32,
    pub z: f32,
}

/// Camera x/z produced by the orbit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitPosition {
    pub x: f32,
    pub z: f32,
}

/// Map an orbit angle to a camera position. `z` always lands in
/// `[z_min, z_max]` for finite angles.
#[inline]
pub fn orbit_position(angle: OrbitAngle, p: &OrbitParams) -> OrbitPosition {
    OrbitPosition {
        x: angle.x.sin() * p.amplitude_x,
        z: (angle.z.cos() * p.amplitude_z).clamp(p.z_min, p.z_max),
    }
}

#[derive(Clone, Debug, Default)]
pub struct CameraOrbitDriver {
    angle: OrbitAngle,
    params: OrbitParams,
}

impl CameraOrbitDriver {
    pub fn new(params: OrbitParams) -> Self {
        Self {
            angle: OrbitAngle::default(),
            params,
        }
    }

    #[inline]
    pub fn angle(&self) -> OrbitAngle {
        self.angle
    }

    pub fn params(&self) -> &OrbitParams {
        &self.params
    }

    /// Step the orbit by `delta_ms`. The orbit rate does not depend on
    /// intensity; intensity only speeds up the shader clocks.
    pub fn advance(&mut self, delta_ms: f32, _intensity: f32) -> OrbitPosition {
        self.angle.x += delta_ms * self.params.rate_x;
        self.angle.z += delta_ms * self.params.rate_z;
        orbit_position(self.angle, &self.params)
    }

    /// Reset on the Running -> JustFinished edge. The return flight itself is a
    /// timeline owned by the loop.
    pub fn on_finish(&mut self) {
        self.angle = OrbitAngle::default();
    }
}
