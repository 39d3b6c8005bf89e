//! Visual-side state handed to the renderer.
//!
//! These types avoid platform APIs so the driver and its tests run on the host.
//! The web frontend forwards `FrameUniforms` to the page as a flat `f32` block.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use crate::constants::{CAMERA_FAR, CAMERA_NEAR};
use crate::phase::PlaybackPhase;
use crate::uniforms::ShaderClocks;

/// Right-handed perspective camera that always looks at the scene origin.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(eye: Vec3, fov_degrees: f32, width: f32, height: f32) -> Self {
        Self {
            eye,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: aspect_ratio(width, height),
            fovy_radians: fov_degrees.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.aspect = aspect_ratio(width, height);
    }

    pub fn look_at_origin(&mut self) {
        self.target = Vec3::ZERO;
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

#[inline]
fn aspect_ratio(width: f32, height: f32) -> f32 {
    width.max(1.0) / height.max(1.0)
}

/// Uniform block shared by the particle, snow, model and glow passes.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct FrameUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub eye: [f32; 4],
    pub resolution: [f32; 2],
    pub heart_time: f32,
    pub snow_time: f32,
    pub model_rotation_y: f32,
    pub model_scale: f32,
    pub glow_time: f32,
    pub intensity: f32,
}

impl FrameUniforms {
    pub fn as_f32_slice(&self) -> &[f32] {
        bytemuck::cast_slice(std::slice::from_ref(self))
    }
}

/// Everything the render surface needs for one frame.
#[derive(Clone, Debug)]
pub struct FrameState {
    pub uniforms: FrameUniforms,
    pub camera: Camera,
    pub clocks: ShaderClocks,
    pub phase: PlaybackPhase,
    pub trigger_opacity: f32,
    pub model_visible: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_block_is_std140_friendly() {
        assert_eq!(std::mem::size_of::<FrameUniforms>() % 16, 0);
        let u = FrameUniforms {
            intensity: 2.0,
            ..Default::default()
        };
        let flat = u.as_f32_slice();
        assert_eq!(flat.len(), 28);
        assert_eq!(flat[27], 2.0);
    }

    #[test]
    fn degenerate_resize_keeps_finite_aspect() {
        let mut cam = Camera::new(Vec3::new(0.0, 0.0, 4.5), 75.0, 800.0, 600.0);
        cam.resize(0.0, 0.0);
        assert_eq!(cam.aspect, 1.0);
        assert!(cam.projection_matrix().is_finite());
    }
}
