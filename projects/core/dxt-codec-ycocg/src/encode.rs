//! YCoCg-DXT5 block encoding.

use crate::convert::block_to_ycocg;
use core::fmt;
use core::str::FromStr;
use derive_enum_all_values::AllValues;
use dxt_codec_bc4::encode_interpolated_alpha;
use dxt_codec_common::block_4x4::Rgba4x4Block;
use dxt_codec_common::color_565::Color565;
use dxt_codec_common::packing::join_halves;
use thiserror::Error;

/// How chroma is scaled before quantising.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AllValues)]
pub enum ChromaScale {
    /// Chroma is stored as is; the scale field is always 1.
    Fixed,
    /// Chroma is scaled by 1, 2 or 4, whichever fits the block's chroma range.
    #[default]
    Adaptive,
}

impl ChromaScale {
    /// Scale factor for a block whose chroma extremes deviate at most `deviation` from 128.
    #[inline]
    pub const fn factor(self, deviation: i32) -> i32 {
        match self {
            ChromaScale::Fixed => 1,
            ChromaScale::Adaptive if deviation <= 31 => 4,
            ChromaScale::Adaptive if deviation <= 63 => 2,
            ChromaScale::Adaptive => 1,
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            ChromaScale::Fixed => "fixed",
            ChromaScale::Adaptive => "adaptive",
        }
    }
}

/// A chroma scale name that [`ChromaScale::from_str`] did not recognise.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid chroma scale: {0}")]
pub struct UnknownChromaScaleError(pub String);

impl fmt::Display for ChromaScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChromaScale {
    type Err = UnknownChromaScaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChromaScale::all_values()
            .iter()
            .copied()
            .find(|scale| scale.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownChromaScaleError(s.to_owned()))
    }
}

/// Converts an RGB block to YCoCg and encodes it. Alpha of the input is discarded.
#[inline]
pub fn encode_ycocg_block(block: &Rgba4x4Block, scale: ChromaScale) -> [u8; 16] {
    compress_ycocg_block(&block_to_ycocg(block), scale)
}

/// Encodes a block already laid out as `(Co, Cg, _, Y)`.
///
/// Bytes 0..8 hold Y as an interpolated alpha block. Bytes 8..16 hold a BC1 colour block with
/// Co in red, Cg in green and the chroma scale in blue.
pub fn compress_ycocg_block(ycocg: &Rgba4x4Block, scale: ChromaScale) -> [u8; 16] {
    let luma = encode_interpolated_alpha(&ycocg.channel(3));

    let mut co = ycocg.channel(0).map(i32::from);
    let mut cg = ycocg.channel(1).map(i32::from);
    let mut min = [min_of(&co), min_of(&cg)];
    let mut max = [max_of(&co), max_of(&cg)];

    let deviation = min
        .iter()
        .chain(max.iter())
        .map(|v| (v - 128).abs())
        .max()
        .unwrap_or(0);
    let factor = scale.factor(deviation);

    // Scaling about 128 keeps every value in 0..=255 for the factor picked above.
    let rescale = |v: &mut i32| *v = (*v - 128) * factor + 128;
    co.iter_mut()
        .chain(cg.iter_mut())
        .chain(min.iter_mut())
        .chain(max.iter_mut())
        .for_each(rescale);

    // Inset the box by (span - 7) / 16, then quantise with bit replication.
    for ch in 0..2 {
        let inset = max[ch] - min[ch] - 7;
        min[ch] = (((min[ch] << 4) + inset) >> 4).max(0);
        max[ch] = (((max[ch] << 4) - inset) >> 4).min(255);
    }
    let quantise = |co: i32, cg: i32| Color565::from_rgb(co as u8, cg as u8, 0);
    let (mut min565, mut max565) = (quantise(min[0], min[1]), quantise(max[0], max[1]));
    min = [min565.red() as i32, min565.green() as i32];
    max = [max565.red() as i32, max565.green() as i32];

    // Co and Cg anti-correlated on most texels: use the other diagonal.
    let mid = [(min[0] + max[0] + 1) >> 1, (min[1] + max[1] + 1) >> 1];
    let opposite = co
        .iter()
        .zip(cg.iter())
        .filter(|&(&c0, &c1)| (c0 >= mid[0]) != (c1 >= mid[1]))
        .count();
    if opposite > 8 {
        core::mem::swap(&mut min[1], &mut max[1]);
        min565 = quantise(min[0], min[1]);
        max565 = quantise(max[0], max[1]);
    }

    let scale_bits = ((factor - 1) << 3) as u8;
    let max16 = max565.raw_value() | Color565::from_rgb(0, 0, scale_bits).raw_value();
    let min16 = min565.raw_value() | Color565::from_rgb(0, 0, scale_bits).raw_value();

    let palette = [
        max,
        min,
        [(2 * max[0] + min[0]) / 3, (2 * max[1] + min[1]) / 3],
        [(max[0] + 2 * min[0]) / 3, (max[1] + 2 * min[1]) / 3],
    ];
    let mut mask = 0u32;
    for (i, (&c0, &c1)) in co.iter().zip(cg.iter()).enumerate() {
        mask |= select_index(&palette, c0, c1) << (2 * i);
    }

    let mut color = [0u8; 8];
    color[0..2].copy_from_slice(&max16.to_le_bytes());
    color[2..4].copy_from_slice(&min16.to_le_bytes());
    color[4..8].copy_from_slice(&mask.to_le_bytes());
    join_halves(&luma, &color)
}

/// Nearest palette entry by Manhattan distance in (Co, Cg), without branches.
#[inline]
fn select_index(palette: &[[i32; 2]; 4], co: i32, cg: i32) -> u32 {
    let d: [i32; 4] =
        core::array::from_fn(|i| (palette[i][0] - co).abs() + (palette[i][1] - cg).abs());

    let b0 = (d[0] > d[3]) as u32;
    let b1 = (d[1] > d[2]) as u32;
    let b2 = (d[0] > d[2]) as u32;
    let b3 = (d[1] > d[3]) as u32;
    let b4 = (d[2] > d[3]) as u32;

    let x0 = b1 & b2;
    let x1 = b0 & b3;
    let x2 = b0 & b4;
    x2 | ((x0 | x1) << 1)
}

#[inline]
fn min_of(values: &[i32; 16]) -> i32 {
    values.iter().copied().min().unwrap_or(0)
}

#[inline]
fn max_of(values: &[i32; 16]) -> i32 {
    values.iter().copied().max().unwrap_or(0)
}
