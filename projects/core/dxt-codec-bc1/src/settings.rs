//! Options for the colour encoder.

use core::fmt;
use core::str::FromStr;
use derive_enum_all_values::AllValues;
use thiserror::Error;

/// How the general encoding path picks its initial endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AllValues)]
pub enum EndpointStrategy {
    /// The two texels furthest apart in RGB.
    MaxDistance,
    /// The brightest and darkest texels (BT.709 luma).
    Luminance,
    /// Extremes along the principal axis of the colour covariance.
    #[default]
    PrincipalAxis,
}

/// Returned when a strategy name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid strategy: '{0}'. Valid options are: max-distance, luminance, principal-axis")]
pub struct UnknownStrategyError(pub String);

impl EndpointStrategy {
    /// Canonical lowercase name.
    pub const fn name(&self) -> &'static str {
        match self {
            EndpointStrategy::MaxDistance => "max-distance",
            EndpointStrategy::Luminance => "luminance",
            EndpointStrategy::PrincipalAxis => "principal-axis",
        }
    }
}

impl fmt::Display for EndpointStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EndpointStrategy {
    type Err = UnknownStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "max-distance" | "distance" => Ok(EndpointStrategy::MaxDistance),
            "luminance" | "luma" => Ok(EndpointStrategy::Luminance),
            "principal-axis" | "pca" => Ok(EndpointStrategy::PrincipalAxis),
            _ => Err(UnknownStrategyError(s.to_string())),
        }
    }
}

/// Settings for [`encode_color_block`](crate::encode_color_block).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorEncodeSettings {
    /// Initial endpoint selection for blocks with more than one colour.
    pub strategy: EndpointStrategy,
    /// Diffuse quantisation error across the block when assigning indices.
    pub dither: bool,
    /// Store texels with alpha below 128 as transparent (3-colour mode).
    pub punch_through_alpha: bool,
}
