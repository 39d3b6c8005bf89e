use crate::config::ClockRates;

/// Time-like accumulators fed to the particle shaders and the heart model.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ShaderClocks {
    pub heart_time: f32,
    pub model_rotation: f32,
    pub snow_time: f32,
}

/// Advances the shader clocks every frame, whatever the phase. The clocks are
/// never wrapped, so a forward delta keeps them monotonic.
#[derive(Clone, Debug, Default)]
pub struct UniformTimeAdvancer {
    clocks: ShaderClocks,
    rates: ClockRates,
}

impl UniformTimeAdvancer {
    pub fn new(rates: ClockRates) -> Self {
        Self {
            clocks: ShaderClocks::default(),
            rates,
        }
    }

    #[inline]
    pub fn clocks(&self) -> ShaderClocks {
        self.clocks
    }

    pub fn advance(&mut self, delta_ms: f32, intensity: f32) -> ShaderClocks {
        let r = &self.rates;
        self.clocks.heart_time += delta_ms * r.heart * (1.0 + intensity * r.heart_intensity_gain);
        self.clocks.model_rotation -= r.model_rotation * delta_ms * (1.0 + intensity);
        self.clocks.snow_time += delta_ms * r.snow * (1.0 + intensity);
        self.clocks
    }
}
