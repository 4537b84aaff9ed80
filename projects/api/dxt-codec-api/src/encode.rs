//! Stream encoding: mip chain generation followed by block compression of every level.

use crate::error::CodecError;
use crate::settings::EncodeSettings;
use crate::surface::encode_surface;
use crate::texture::{EncodedTexture, LevelDimensions};
use dxt_codec_bc1::EndpointStrategy;
use dxt_codec_common::format::FormatDescriptor;
use dxt_codec_common::image::Image;
use dxt_codec_common::volume::Volume;
use dxt_codec_resample::{
    generate_mip_chain_levels, generate_volume_mip_chain_levels, mip_level_count,
    volume_mip_level_count, FilterKind,
};
use std::borrow::Cow;
use tracing::{debug, trace};

/// Encodes `image` and its mip chain into a single block stream.
///
/// # Errors
///
/// - [`CodecError::Format`] when the format rejects the image dimensions
/// - [`CodecError::InvalidMipCount`] when `settings.mipmaps` exceeds the full chain
///
/// # Examples
///
/// ```
/// use dxt_codec_api::{encode, EncodeSettings};
/// use dxt_codec_common::prelude::*;
///
/// let image = Image::from_rgba(8, 8, vec![255; 8 * 8 * 4]).unwrap();
/// let descriptor = FormatDescriptor::of(Format::Bc1);
/// let texture = encode(&image, &descriptor, &EncodeSettings::default()).unwrap();
///
/// // 8x8, 4x4, 2x2 and 1x1: one 8 byte block each, except the base level.
/// assert_eq!(texture.level_offsets, vec![0, 32, 40, 48]);
/// assert_eq!(texture.data.len(), 56);
/// ```
pub fn encode(
    image: &Image,
    descriptor: &FormatDescriptor,
    settings: &EncodeSettings,
) -> Result<EncodedTexture, CodecError> {
    let (width, height) = (image.width(), image.height());
    descriptor.check_dimensions(width, height)?;
    let levels = resolve_levels(settings.mipmaps, mip_level_count(width, height))?;

    trace!(
        width,
        height,
        channels = image.channels(),
        levels,
        format = %descriptor.format,
        "encoding image"
    );

    let chain = generate_mip_chain_levels(
        base_level(image, descriptor),
        settings.filter,
        settings.gamma,
        levels,
    );

    let color = settings.color_settings();
    let mut texture = EncodedTexture {
        data: vec![0u8; descriptor.surface_size(width, height, levels)],
        level_offsets: Vec::with_capacity(chain.len()),
        level_dimensions: Vec::with_capacity(chain.len()),
    };

    let mut offset = 0;
    for (index, level) in chain.iter().enumerate() {
        let size = descriptor.level_size(level.width(), level.height());
        encode_surface(
            level,
            descriptor,
            &color,
            &mut texture.data[offset..offset + size],
        );
        debug!(
            level = index,
            width = level.width(),
            height = level.height(),
            offset,
            size,
            "encoded level"
        );

        texture.level_offsets.push(offset);
        texture
            .level_dimensions
            .push(LevelDimensions::flat(level.width(), level.height()));
        offset += size;
    }

    Ok(texture)
}

/// Encodes a volume texture and its mip chain.
///
/// Depth halves with width and height. Each level stores its slices as consecutive 2D
/// surfaces, front slice first.
///
/// # Errors
///
/// Same as [`encode`], with the chain length taken over width, height and depth.
pub fn encode_volume(
    volume: &Volume,
    descriptor: &FormatDescriptor,
    settings: &EncodeSettings,
) -> Result<EncodedTexture, CodecError> {
    let (width, height, depth) = (volume.width(), volume.height(), volume.depth());
    descriptor.check_dimensions(width, height)?;
    let levels = resolve_levels(
        settings.mipmaps,
        volume_mip_level_count(width, height, depth),
    )?;

    trace!(width, height, depth, levels, format = %descriptor.format, "encoding volume");

    let chain =
        generate_volume_mip_chain_levels(volume, settings.filter, settings.gamma, levels);

    let color = settings.color_settings();
    let mut texture = EncodedTexture::default();
    for (index, level) in chain.iter().enumerate() {
        let offset = texture.data.len();
        let slice_size = descriptor.level_size(level.width(), level.height());
        texture
            .data
            .resize(offset + slice_size * level.depth() as usize, 0);

        for z in 0..level.depth() {
            let start = offset + z as usize * slice_size;
            encode_surface(
                &level.slice(z),
                descriptor,
                &color,
                &mut texture.data[start..start + slice_size],
            );
        }
        debug!(
            level = index,
            width = level.width(),
            height = level.height(),
            depth = level.depth(),
            offset,
            "encoded volume level"
        );

        texture.level_offsets.push(offset);
        texture.level_dimensions.push(LevelDimensions {
            width: level.width(),
            height: level.height(),
            depth: level.depth(),
        });
    }

    Ok(texture)
}

/// The image level 0 is built from: borrowed when the block coder can read it directly,
/// promoted to RGBA otherwise. Single-channel formats read luminance images as they are.
pub(crate) fn base_level<'a>(image: &'a Image, descriptor: &FormatDescriptor) -> Cow<'a, Image> {
    if image.channels() == 4 || image.channels() == descriptor.source_channels() {
        Cow::Borrowed(image)
    } else {
        Cow::Owned(image.to_rgba())
    }
}

/// Turns a requested level count (0 = full chain) into the number of levels to produce.
pub(crate) fn resolve_levels(requested: u32, max: u32) -> Result<u32, CodecError> {
    match requested {
        0 => Ok(max),
        n if n <= max => Ok(n),
        n => Err(CodecError::InvalidMipCount { requested: n, max }),
    }
}

/// Builder over [`EncodeSettings`] for one format.
///
/// ```
/// use dxt_codec_api::TextureEncoder;
/// use dxt_codec_common::prelude::*;
/// use dxt_codec_resample::FilterKind;
///
/// let image = Image::from_rgba(4, 4, vec![128; 4 * 4 * 4]).unwrap();
/// let texture = TextureEncoder::new(FormatDescriptor::of(Format::Bc3))
///     .mipmaps(1)
///     .filter(FilterKind::Lanczos)
///     .encode(&image)
///     .unwrap();
/// assert_eq!(texture.data.len(), 16);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TextureEncoder {
    descriptor: FormatDescriptor,
    mipmaps: Option<u32>,
    filter: Option<FilterKind>,
    gamma: Option<f32>,
    dither: Option<bool>,
    strategy: Option<EndpointStrategy>,
}

impl TextureEncoder {
    /// Creates an encoder for `descriptor` with every setting at its default.
    pub fn new(descriptor: FormatDescriptor) -> Self {
        Self {
            descriptor,
            mipmaps: None,
            filter: None,
            gamma: None,
            dither: None,
            strategy: None,
        }
    }

    /// Number of levels to produce, including the base. 0 (default) produces the full chain.
    pub fn mipmaps(mut self, mipmaps: u32) -> Self {
        self.mipmaps = Some(mipmaps);
        self
    }

    /// Resampling kernel for the mip chain. Defaults to [`FilterKind::Box`].
    pub fn filter(mut self, filter: FilterKind) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Filters mip levels in linear light with exponent `gamma`.
    ///
    /// Without this call, stored values are filtered directly.
    pub fn gamma(mut self, gamma: f32) -> Self {
        self.gamma = Some(gamma);
        self
    }

    /// Enables Floyd-Steinberg dithering of colour indices. Off by default.
    pub fn dither(mut self, dither: bool) -> Self {
        self.dither = Some(dither);
        self
    }

    /// Initial endpoint selection of the colour encoder.
    pub fn strategy(mut self, strategy: EndpointStrategy) -> Self {
        self.strategy = Some(strategy);
        self
    }

    /// The settings this builder describes.
    pub fn settings(&self) -> EncodeSettings {
        EncodeSettings {
            mipmaps: self.mipmaps.unwrap_or(0),
            filter: self.filter.unwrap_or_default(),
            gamma: self.gamma,
            dither: self.dither.unwrap_or(false),
            strategy: self.strategy.unwrap_or_default(),
        }
    }

    /// Encodes `image`. See [`encode`].
    pub fn encode(&self, image: &Image) -> Result<EncodedTexture, CodecError> {
        encode(image, &self.descriptor, &self.settings())
    }

    /// Encodes `volume`. See [`encode_volume`].
    pub fn encode_volume(&self, volume: &Volume) -> Result<EncodedTexture, CodecError> {
        encode_volume(volume, &self.descriptor, &self.settings())
    }
}
