//! Gamma curve used to filter in linear light.

/// Maps 8-bit samples into the filtering domain and back.
///
/// Without gamma correction both directions are the identity (plus rounding on the way out).
#[derive(Debug, Clone)]
pub struct GammaCurve {
    to_linear: [f32; 256],
    inverse: Option<f32>,
}

impl GammaCurve {
    /// Builds the lookup table for `gamma`. `None`, or a non-positive/non-finite exponent,
    /// disables correction.
    pub fn new(gamma: Option<f32>) -> Self {
        let gamma = gamma.filter(|g| g.is_finite() && *g > 0.0);
        let mut to_linear = [0f32; 256];
        for (v, slot) in to_linear.iter_mut().enumerate() {
            *slot = match gamma {
                Some(g) => 255.0 * (v as f32 / 255.0).powf(g),
                None => v as f32,
            };
        }

        Self {
            to_linear,
            inverse: gamma.map(|g| 1.0 / g),
        }
    }

    /// Whether samples are converted at all.
    #[inline]
    pub fn is_linear(&self) -> bool {
        self.inverse.is_none()
    }

    /// 8-bit sample to filtering domain.
    #[inline]
    pub fn to_linear(&self, v: u8) -> f32 {
        self.to_linear[v as usize]
    }

    /// Filtering domain back to an 8-bit sample, rounded and clamped.
    #[inline]
    pub fn from_linear(&self, v: f32) -> u8 {
        let v = v.clamp(0.0, 255.0);
        let v = match self.inverse {
            Some(inv) => 255.0 * (v / 255.0).powf(inv),
            None => v,
        };
        v.round().clamp(0.0, 255.0) as u8
    }

    /// Converts a whole sample buffer into the filtering domain.
    pub(crate) fn linearise(&self, samples: &[u8]) -> Vec<f32> {
        samples.iter().map(|&v| self.to_linear(v)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None)]
    #[case(Some(2.2))]
    #[case(Some(1.8))]
    fn round_trips_every_sample(#[case] gamma: Option<f32>) {
        let curve = GammaCurve::new(gamma);
        for v in 0..=255u8 {
            // Low values are squeezed together by the curve; allow one step of slack.
            let back = curve.from_linear(curve.to_linear(v));
            assert!(back.abs_diff(v) <= 1, "{v} -> {back}");
        }
    }

    #[test]
    fn linear_midpoint_is_brighter_after_correction() {
        let curve = GammaCurve::new(Some(2.2));
        let mid = (curve.to_linear(0) + curve.to_linear(255)) / 2.0;
        assert!(curve.from_linear(mid) > 128);
        assert!(!curve.is_linear());
        assert!(GammaCurve::new(Some(0.0)).is_linear());
    }
}
