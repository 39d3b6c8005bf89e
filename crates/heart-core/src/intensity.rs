//! Audio intensity derived from the analyser's average frequency magnitude.

use crate::error::StageResult;

/// An audio analysis source polled once per frame.
pub trait FrequencySampler {
    /// Average frequency magnitude for the current frame (byte scale, 0..=255).
    fn average_frequency(&mut self) -> StageResult<f32>;
}

/// Mean of the analyser's byte frequency bins; 0 for an empty buffer.
pub fn average_byte_frequency(bins: &[u8]) -> f32 {
    if bins.is_empty() {
        return 0.0;
    }
    let sum: u32 = bins.iter().map(|&b| b as u32).sum();
    sum as f32 / bins.len() as f32
}

/// `avg^2 / divisor`, with non-finite or negative averages treated as silence.
#[inline]
pub fn intensity_from_average(avg: f32, divisor: f32) -> f32 {
    if !avg.is_finite() || avg <= 0.0 || divisor <= 0.0 {
        return 0.0;
    }
    avg * avg / divisor
}

/// Holds the latest intensity. Falls back to zero whenever sampling is off or
/// the source errors.
#[derive(Clone, Debug)]
pub struct IntensityTracker {
    value: f32,
    divisor: f32,
}

impl IntensityTracker {
    pub fn new(divisor: f32) -> Self {
        Self { value: 0.0, divisor }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn reset(&mut self) {
        self.value = 0.0;
    }

    pub fn sample(&mut self, sampler: &mut dyn FrequencySampler) -> f32 {
        self.value = match sampler.average_frequency() {
            Ok(avg) => intensity_from_average(avg, self.divisor),
            Err(e) => {
                log::debug!("[intensity] {e}; using 0");
                0.0
            }
        };
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StageError;

    struct Fixed(StageResult<f32>);
    impl FrequencySampler for Fixed {
        fn average_frequency(&mut self) -> StageResult<f32> {
            self.0.clone()
        }
    }

    #[test]
    fn squares_and_scales_average() {
        assert!((intensity_from_average(100.0, 2000.0) - 5.0).abs() < 1e-6);
        assert_eq!(intensity_from_average(f32::NAN, 2000.0), 0.0);
        assert_eq!(intensity_from_average(-3.0, 2000.0), 0.0);
    }

    #[test]
    fn byte_average() {
        assert_eq!(average_byte_frequency(&[]), 0.0);
        assert_eq!(average_byte_frequency(&[0, 255, 255, 10]), 130.0);
    }

    #[test]
    fn sampler_error_reads_as_silence() {
        let mut tr = IntensityTracker::new(2000.0);
        tr.sample(&mut Fixed(Ok(200.0)));
        assert!((tr.value() - 20.0).abs() < 1e-5);
        tr.sample(&mut Fixed(Err(StageError::SamplerUnavailable)));
        assert_eq!(tr.value(), 0.0);
    }
}
