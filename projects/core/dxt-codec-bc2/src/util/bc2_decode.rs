//! BC2 (DXT3) decoding; based on MSDN
//! <https://learn.microsoft.com/en-us/windows/win32/direct3d10/d3d10-graphics-programming-guide-resources-block-compression#bc2>

use dxt_codec_bc1::decode_bc1_color_block;
use dxt_codec_common::block_4x4::Rgba4x4Block;
use dxt_codec_common::packing::split_halves;

/// Expands the explicit alpha half of a BC2 block to 16 8-bit values.
#[inline]
pub fn decode_explicit_alpha(src: &[u8; 8]) -> [u8; 16] {
    core::array::from_fn(|i| {
        // Low nibble first, (0-15) scaled to (0-255).
        let nibble = (src[i >> 1] >> ((i & 1) * 4)) & 0x0F;
        nibble * 17
    })
}

/// Decodes a BC2 block into RGBA8 pixels.
///
/// # Example
///
/// ```
/// use dxt_codec_bc2::decode_bc2_block;
///
/// let mut bc2_block = [0u8; 16];
/// bc2_block[0] = 0xF0; // texel 0 alpha 0, texel 1 alpha 255
///
/// let decoded = decode_bc2_block(&bc2_block);
/// assert_eq!(decoded.pixels[0].a, 0);
/// assert_eq!(decoded.pixels[1].a, 255);
/// ```
#[inline]
pub fn decode_bc2_block(src: &[u8; 16]) -> Rgba4x4Block {
    let (alpha_half, color_half) = split_halves(src);
    let mut block = decode_bc1_color_block(&color_half);
    let alpha = decode_explicit_alpha(&alpha_half);
    block.set_channel(3, &alpha);
    block
}
