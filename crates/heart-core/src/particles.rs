//! Per-instance attributes for the heart and snow particle fields.

use bytemuck::{Pod, Zeroable};
use rand::prelude::*;

use crate::constants::{
    HEART_PALETTE, HEART_PARTICLE_MAX_SPEED, PARTICLE_MAX_SCALE, SNOW_PALETTE, SNOW_PHI_SPAN,
};

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct HeartParticle {
    pub random: f32,
    pub random1: f32,
    pub scale: f32,
    pub speed: f32,
    pub color: [f32; 3],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct SnowParticle {
    pub phi: f32,
    pub random: f32,
    pub random1: f32,
    pub scale: f32,
    pub color: [f32; 3],
}

fn pick_color(rng: &mut StdRng, palette: &[[f32; 3]]) -> [f32; 3] {
    *palette.choose(rng).unwrap_or(&[1.0, 1.0, 1.0])
}

pub fn seed_heart_particles(count: usize, seed: u64) -> Vec<HeartParticle> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| HeartParticle {
            random: rng.gen(),
            random1: rng.gen(),
            scale: rng.gen::<f32>() * PARTICLE_MAX_SCALE,
            color: pick_color(&mut rng, &HEART_PALETTE),
            speed: rng.gen::<f32>() * HEART_PARTICLE_MAX_SPEED,
        })
        .collect()
}

pub fn seed_snow_particles(count: usize, seed: u64) -> Vec<SnowParticle> {
    // Separate stream so heart and snow differ even with the same seed.
    let mut rng = StdRng::seed_from_u64(seed ^ 0x9E37_79B9_7F4A_7C15);
    (0..count)
        .map(|_| SnowParticle {
            phi: (rng.gen::<f32>() - 0.5) * SNOW_PHI_SPAN,
            random: rng.gen(),
            random1: rng.gen(),
            scale: rng.gen::<f32>() * PARTICLE_MAX_SCALE,
            color: pick_color(&mut rng, &SNOW_PALETTE),
        })
        .collect()
}

/// Interleaved attribute floats, ready for an instanced buffer upload.
pub fn flatten<T: Pod>(instances: &[T]) -> &[f32] {
    bytemuck::cast_slice(instances)
}
