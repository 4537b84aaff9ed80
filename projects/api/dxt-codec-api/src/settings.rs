//! Settings for stream encoding and decoding.

use dxt_codec_bc1::{ColorEncodeSettings, EndpointStrategy};
use dxt_codec_resample::FilterKind;

/// Options for [`encode`](crate::encode) and [`encode_volume`](crate::encode_volume).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EncodeSettings {
    /// Number of mip levels to produce, including the base. 0 produces the full chain.
    pub mipmaps: u32,
    /// Kernel used to build each level from the previous one.
    pub filter: FilterKind,
    /// `Some(g)` filters in linear light with exponent `g`; `None` filters stored values.
    pub gamma: Option<f32>,
    /// Floyd-Steinberg dithering in the colour encoder.
    pub dither: bool,
    /// Initial endpoint selection of the colour encoder.
    pub strategy: EndpointStrategy,
}

impl EncodeSettings {
    /// The colour block settings these stream settings imply.
    ///
    /// Punch-through alpha is decided by the format, so it is left off here.
    #[inline]
    pub fn color_settings(&self) -> ColorEncodeSettings {
        ColorEncodeSettings {
            strategy: self.strategy,
            dither: self.dither,
            punch_through_alpha: false,
        }
    }
}

/// Options for [`decode`](crate::decode).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeSettings {
    /// Width of the base level in texels.
    pub width: u32,
    /// Height of the base level in texels.
    pub height: u32,
    /// Number of levels stored in the stream. 0 means the full chain.
    pub mipmaps: u32,
    /// Rebuild Z in blue from X (red) and Y (green) after decoding.
    pub normal_map: bool,
}

impl DecodeSettings {
    /// Settings for a `width x height` stream holding only the base level.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            mipmaps: 1,
            normal_map: false,
        }
    }
}
