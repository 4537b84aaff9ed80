//! Mip chain generation.

use crate::filter::FilterKind;
use crate::gamma::GammaCurve;
use crate::scale::{resample_image, resample_volume};
use alloc::borrow::Cow;
use dxt_codec_common::image::Image;
use dxt_codec_common::volume::Volume;

/// Number of levels in a full chain for a `width x height` base: `1 + floor(log2(max(w, h)))`.
///
/// ```
/// use dxt_codec_resample::mip_level_count;
///
/// assert_eq!(mip_level_count(1, 1), 1);
/// assert_eq!(mip_level_count(256, 64), 9);
/// assert_eq!(mip_level_count(5, 3), 3);
/// ```
#[inline]
pub fn mip_level_count(width: u32, height: u32) -> u32 {
    32 - width.max(height).max(1).leading_zeros()
}

/// Same as [`mip_level_count`], with depth taking part in the largest side.
#[inline]
pub fn volume_mip_level_count(width: u32, height: u32, depth: u32) -> u32 {
    mip_level_count(width.max(depth), height)
}

/// Dimensions of the level after `width x height`.
#[inline]
pub fn next_level_size(width: u32, height: u32) -> (u32, u32) {
    ((width >> 1).max(1), (height >> 1).max(1))
}

/// Ordered mip levels, largest first. Level 0 may borrow the caller's image.
#[derive(Debug, Clone)]
pub struct MipChain<'a> {
    levels: Vec<Cow<'a, Image>>,
}

impl<'a> MipChain<'a> {
    /// Number of levels.
    #[inline]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Whether the chain has no levels. Never true for generated chains.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Level `index`, if present.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Image> {
        self.levels.get(index).map(|level| level.as_ref())
    }

    /// Iterates the levels, largest first.
    pub fn iter(&self) -> impl Iterator<Item = &Image> {
        self.levels.iter().map(|level| level.as_ref())
    }

    /// The levels as stored.
    #[inline]
    pub fn levels(&self) -> &[Cow<'a, Image>] {
        &self.levels
    }

    /// Consumes the chain, returning its levels.
    #[inline]
    pub fn into_levels(self) -> Vec<Cow<'a, Image>> {
        self.levels
    }
}

/// Builds the full chain for `image`, down to 1x1.
///
/// `gamma` of `Some(g)` filters in linear light with exponent `g`.
pub fn generate_mip_chain(image: &Image, filter: FilterKind, gamma: Option<f32>) -> MipChain<'_> {
    generate_mip_chain_levels(Cow::Borrowed(image), filter, gamma, 0)
}

/// Builds at most `max_levels` levels starting at `base` (0 = full chain).
/// The result never has fewer than one level or more than [`mip_level_count`] levels.
pub fn generate_mip_chain_levels<'a>(
    base: Cow<'a, Image>,
    filter: FilterKind,
    gamma: Option<f32>,
    max_levels: u32,
) -> MipChain<'a> {
    let count = clamp_levels(mip_level_count(base.width(), base.height()), max_levels);
    let curve = GammaCurve::new(gamma);

    let mut levels = Vec::with_capacity(count as usize);
    levels.push(base);
    for _ in 1..count {
        let Some(previous) = levels.last() else {
            break;
        };
        let (width, height) = next_level_size(previous.width(), previous.height());
        let next = resample_image(previous, width, height, filter, &curve);
        levels.push(Cow::Owned(next));
    }

    MipChain { levels }
}

/// Builds the full chain for a volume texture. Depth halves alongside width and height.
pub fn generate_volume_mip_chain(
    volume: &Volume,
    filter: FilterKind,
    gamma: Option<f32>,
) -> Vec<Cow<'_, Volume>> {
    generate_volume_mip_chain_levels(volume, filter, gamma, 0)
}

/// Builds at most `max_levels` volume levels (0 = full chain, ending at 1x1x1).
pub fn generate_volume_mip_chain_levels(
    volume: &Volume,
    filter: FilterKind,
    gamma: Option<f32>,
    max_levels: u32,
) -> Vec<Cow<'_, Volume>> {
    let full = volume_mip_level_count(volume.width(), volume.height(), volume.depth());
    let count = clamp_levels(full, max_levels);
    let curve = GammaCurve::new(gamma);

    let mut levels: Vec<Cow<'_, Volume>> = Vec::with_capacity(count as usize);
    levels.push(Cow::Borrowed(volume));
    for _ in 1..count {
        let Some(previous) = levels.last() else {
            break;
        };
        let (width, height) = next_level_size(previous.width(), previous.height());
        let depth = (previous.depth() >> 1).max(1);
        let next = resample_volume(previous, width, height, depth, filter, &curve);
        levels.push(Cow::Owned(next));
    }

    levels
}

#[inline]
fn clamp_levels(full: u32, requested: u32) -> u32 {
    if requested == 0 {
        full
    } else {
        requested.min(full)
    }
}
