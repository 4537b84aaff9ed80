//! Stream decoding: splits a block stream into levels and decodes each to RGBA.

use crate::encode::resolve_levels;
use crate::error::CodecError;
use crate::settings::DecodeSettings;
use crate::surface::decode_surface;
use dxt_codec_common::error::ImageError;
use dxt_codec_common::format::FormatDescriptor;
use dxt_codec_common::image::Image;
use dxt_codec_resample::{mip_level_count, next_level_size};
use tracing::debug;

/// Decodes a block stream into one RGBA image per level, base level first.
///
/// Trailing bytes past the last requested level are ignored.
///
/// # Errors
///
/// - [`CodecError::Image`] when `width` or `height` is zero
/// - [`CodecError::Format`] when the format rejects the dimensions
/// - [`CodecError::InvalidMipCount`] when `mipmaps` exceeds the full chain
/// - [`CodecError::InputTooShort`] when `data` cannot hold every requested level
///
/// # Examples
///
/// ```
/// use dxt_codec_api::{decode, DecodeSettings};
/// use dxt_codec_common::prelude::*;
///
/// // One BC1 block with both endpoints pure red.
/// let block = [0x00, 0xF8, 0x00, 0xF8, 0, 0, 0, 0];
/// let images = decode(&block, &FormatDescriptor::of(Format::Bc1), &DecodeSettings::new(4, 4))
///     .unwrap();
/// assert_eq!(images[0].texel_rgba(3, 3), Color8888::new(255, 0, 0, 255));
/// ```
pub fn decode(
    data: &[u8],
    descriptor: &FormatDescriptor,
    settings: &DecodeSettings,
) -> Result<Vec<Image>, CodecError> {
    let (width, height) = (settings.width, settings.height);
    if width == 0 || height == 0 {
        return Err(ImageError::ZeroDimensions { width, height }.into());
    }
    descriptor.check_dimensions(width, height)?;
    let levels = resolve_levels(settings.mipmaps, mip_level_count(width, height))?;

    let needed = descriptor.surface_size(width, height, levels);
    if data.len() < needed {
        return Err(CodecError::InputTooShort {
            needed,
            actual: data.len(),
        });
    }

    let mut images = Vec::with_capacity(levels as usize);
    let (mut w, mut h) = (width, height);
    let mut offset = 0;
    for index in 0..levels {
        let size = descriptor.level_size(w, h);
        let image = decode_surface(
            &data[offset..offset + size],
            descriptor,
            w,
            h,
            settings.normal_map,
        )?;
        debug!(level = index, width = w, height = h, offset, "decoded level");

        images.push(image);
        offset += size;
        (w, h) = next_level_size(w, h);
    }

    Ok(images)
}

/// Builder over [`DecodeSettings`] for one format.
///
/// ```
/// use dxt_codec_api::TextureDecoder;
/// use dxt_codec_common::prelude::*;
///
/// let images = TextureDecoder::new(FormatDescriptor::of(Format::Bc4), 4, 4)
///     .decode(&[200, 200, 0, 0, 0, 0, 0, 0])
///     .unwrap();
/// assert_eq!(images[0].texel_rgba(0, 0), Color8888::new(200, 200, 200, 255));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TextureDecoder {
    descriptor: FormatDescriptor,
    width: u32,
    height: u32,
    mipmaps: Option<u32>,
    normal_map: Option<bool>,
}

impl TextureDecoder {
    /// Creates a decoder for a `width x height` base level holding a single level.
    pub fn new(descriptor: FormatDescriptor, width: u32, height: u32) -> Self {
        Self {
            descriptor,
            width,
            height,
            mipmaps: None,
            normal_map: None,
        }
    }

    /// Number of levels stored in the stream. 0 means the full chain. Defaults to 1.
    pub fn mipmaps(mut self, mipmaps: u32) -> Self {
        self.mipmaps = Some(mipmaps);
        self
    }

    /// Rebuilds Z in blue from X and Y after decoding. Off by default.
    pub fn normal_map(mut self, normal_map: bool) -> Self {
        self.normal_map = Some(normal_map);
        self
    }

    /// The settings this builder describes.
    pub fn settings(&self) -> DecodeSettings {
        DecodeSettings {
            width: self.width,
            height: self.height,
            mipmaps: self.mipmaps.unwrap_or(1),
            normal_map: self.normal_map.unwrap_or(false),
        }
    }

    /// Decodes `data`. See [`decode`].
    pub fn decode(&self, data: &[u8]) -> Result<Vec<Image>, CodecError> {
        decode(data, &self.descriptor, &self.settings())
    }
}
