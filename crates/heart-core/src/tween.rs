//! Fire-and-forget interpolations advanced by the frame clock.

use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    /// Quadratic ease-out.
    Power1Out,
    /// Exponential ease-in.
    ExpoIn,
    /// Elastic ease-out, amplitude 1, period 0.3.
    ElasticOut,
}

impl Ease {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power1Out => 1.0 - (1.0 - t) * (1.0 - t),
            Ease::ExpoIn => {
                if t <= 0.0 {
                    0.0
                } else {
                    2.0_f32.powf(10.0 * (t - 1.0))
                }
            }
            Ease::ElasticOut => {
                if t <= 0.0 {
                    0.0
                } else if t >= 1.0 {
                    1.0
                } else {
                    let period = 0.3_f32;
                    let shift = period / 4.0;
                    2.0_f32.powf(-10.0 * t) * ((t - shift) * TAU / period).sin() + 1.0
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub start: f64,
    pub duration: f64,
    pub ease: Ease,
}

impl Tween {
    pub fn new(from: f32, to: f32, start: f64, duration: f64, ease: Ease) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            ease,
        }
    }

    pub fn progress(&self, now: f64) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start) / self.duration).clamp(0.0, 1.0) as f32
    }

    pub fn sample(&self, now: f64) -> f32 {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * self.ease.apply(t)
    }

    #[inline]
    pub fn is_finished(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }
}

/// A single animated value with at most one active tween. Starting a new tween
/// replaces the running one, continuing from the current value.
#[derive(Clone, Debug, PartialEq)]
pub struct Animated {
    value: f32,
    tween: Option<Tween>,
}

impl Animated {
    pub fn new(value: f32) -> Self {
        Self { value, tween: None }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn tween_to(&mut self, to: f32, now: f64, duration: f64, ease: Ease) {
        self.tween = Some(Tween::new(self.value, to, now, duration, ease));
    }

    /// Write a value directly, dropping any tween in flight.
    pub fn set(&mut self, value: f32) {
        self.value = value;
        self.tween = None;
    }

    pub fn cancel(&mut self) {
        self.tween = None;
    }

    /// Move the value along its tween. Finished tweens are dropped.
    pub fn update(&mut self, now: f64) -> f32 {
        if let Some(tw) = self.tween {
            self.value = tw.sample(now);
            if tw.is_finished(now) {
                self.tween = None;
            }
        }
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eases_hit_endpoints() {
        for ease in [Ease::Linear, Ease::Power1Out, Ease::ExpoIn, Ease::ElasticOut] {
            assert_eq!(ease.apply(0.0), 0.0, "{ease:?} at 0");
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-6, "{ease:?} at 1");
        }
    }

    #[test]
    fn expo_in_starts_slow() {
        assert!(Ease::ExpoIn.apply(0.5) < 0.05);
        assert!(Ease::Power1Out.apply(0.5) > 0.5);
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let tw = Tween::new(1.0, 3.0, 5.0, 0.0, Ease::Linear);
        assert_eq!(tw.sample(5.0), 3.0);
        assert!(tw.is_finished(5.0));
    }

    #[test]
    fn animated_retargets_from_current_value() {
        let mut a = Animated::new(0.0);
        a.tween_to(10.0, 0.0, 1.0, Ease::Linear);
        assert!((a.update(0.5) - 5.0).abs() < 1e-5);
        a.tween_to(0.0, 0.5, 1.0, Ease::Linear);
        assert!((a.update(1.0) - 2.5).abs() < 1e-5);
        assert_eq!(a.update(2.0), 0.0);
        assert!(!a.is_animating());
    }
}
