//! BC3 (DXT4/DXT5) decoding; based on MSDN
//! <https://learn.microsoft.com/en-us/windows/win32/direct3d10/d3d10-graphics-programming-guide-resources-block-compression#bc3>
//!
//! Uses the 'ideal' rounding/computing method described in the DX9 docs, as opposed to DX10, AMD or Nvidia
//! method.

use dxt_codec_bc1::decode_bc1_color_block;
use dxt_codec_bc4::decode_interpolated_alpha;
use dxt_codec_common::block_4x4::Rgba4x4Block;
use dxt_codec_common::packing::split_halves;

/// Decodes a BC3 block into RGBA8 pixels.
///
/// The colour half is always decoded in 4-colour mode.
///
/// # Example
///
/// ```
/// use dxt_codec_bc3::decode_bc3_block;
///
/// let bc3_block = [
///     0xFF, 0x00, 0, 0, 0, 0, 0, 0, // alpha: a0 = 255, every texel on index 0
///     0x00, 0xF8, 0x00, 0xF8, 0, 0, 0, 0, // colour: solid red
/// ];
/// let decoded = decode_bc3_block(&bc3_block);
/// assert!(decoded.pixels.iter().all(|p| (p.r, p.g, p.b, p.a) == (255, 0, 0, 255)));
/// ```
#[inline]
pub fn decode_bc3_block(src: &[u8; 16]) -> Rgba4x4Block {
    let (alpha_half, color_half) = split_halves(src);
    let mut block = decode_bc1_color_block(&color_half);
    block.set_channel(3, &decode_interpolated_alpha(&alpha_half));
    block
}
