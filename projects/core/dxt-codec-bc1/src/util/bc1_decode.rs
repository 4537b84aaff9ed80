//! BC1 (DXT1) decoding; based on the D3D9 documentation of opaque and 1-bit alpha textures
//! https://learn.microsoft.com/en-us/windows/win32/direct3d9/opaque-and-1-bit-alpha-textures
//!
//! Interpolation uses the exact integer ("ideal") formulas rather than any particular vendor's
//! hardware approximation.

use dxt_codec_common::block_4x4::Rgba4x4Block;
use dxt_codec_common::color_565::Color565;
use dxt_codec_common::color_8888::Color8888;

/// Decodes a BC1 block into RGBA8 pixels.
///
/// `c0 > c1` selects 4-colour mode. Otherwise the block is in 3-colour mode and index 3 is
/// transparent black.
///
/// # Example
///
/// ```
/// use dxt_codec_bc1::util::decode_bc1_block;
///
/// let bc1_block = [
///     0x00, 0xF8, // c0 = R:31 G:0 B:0
///     0x00, 0xF8, // c1 = R:31 G:0 B:0
///     0x00, 0x00, 0x00, 0x00, // All pixels use index 0
/// ];
/// let decoded = decode_bc1_block(&bc1_block);
/// assert!(decoded.pixels.iter().all(|p| (p.r, p.g, p.b, p.a) == (255, 0, 0, 255)));
/// ```
#[inline]
pub fn decode_bc1_block(src: &[u8; 8]) -> Rgba4x4Block {
    decode_with(src, false)
}

/// Decodes the colour half of a BC2/BC3 block. 4-colour mode is used regardless of the
/// endpoint order and every texel is opaque.
#[inline]
pub fn decode_bc1_color_block(src: &[u8; 8]) -> Rgba4x4Block {
    decode_with(src, true)
}

#[inline]
fn decode_with(src: &[u8; 8], always_four_colors: bool) -> Rgba4x4Block {
    let c0 = Color565::from_le_bytes([src[0], src[1]]);
    let c1 = Color565::from_le_bytes([src[2], src[3]]);
    let indices = u32::from_le_bytes([src[4], src[5], src[6], src[7]]);

    let dict = palette(c0, c1, always_four_colors || c0.greater_than(&c1));

    let mut block = Rgba4x4Block::default();
    for (i, pixel) in block.pixels.iter_mut().enumerate() {
        *pixel = dict[((indices >> (i * 2)) & 0x3) as usize];
    }
    block
}

/// The four colours a block's indices select from.
#[inline]
pub fn palette(c0: Color565, c1: Color565, four_colors: bool) -> [Color8888; 4] {
    let p0 = c0.to_color_8888();
    let p1 = c1.to_color_8888();
    let (r0, g0, b0) = (p0.r as u32, p0.g as u32, p0.b as u32);
    let (r1, g1, b1) = (p1.r as u32, p1.g as u32, p1.b as u32);

    if four_colors {
        [
            p0,
            p1,
            Color8888::new(
                ((2 * r0 + r1) / 3) as u8,
                ((2 * g0 + g1) / 3) as u8,
                ((2 * b0 + b1) / 3) as u8,
                255,
            ),
            Color8888::new(
                ((r0 + 2 * r1) / 3) as u8,
                ((g0 + 2 * g1) / 3) as u8,
                ((b0 + 2 * b1) / 3) as u8,
                255,
            ),
        ]
    } else {
        [
            p0,
            p1,
            Color8888::new(
                ((r0 + r1) / 2) as u8,
                ((g0 + g1) / 2) as u8,
                ((b0 + b1) / 2) as u8,
                255,
            ),
            Color8888::new(0, 0, 0, 0),
        ]
    }
}
