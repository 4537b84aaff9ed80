//! YCoCg-DXT5 decoding: a BC3 decode followed by YCoCg to RGB conversion.

use dxt_codec_bc1::decode_bc1_color_block;
use dxt_codec_bc4::decode_interpolated_alpha;
use dxt_codec_common::block_4x4::Rgba4x4Block;
use dxt_codec_common::color_8888::Color8888;
use dxt_codec_common::packing::split_halves;

/// Decodes a YCoCg-DXT5 block to opaque RGB texels.
///
/// Works for both the fixed and the adaptive chroma scale; the scale is read from the blue
/// channel of the colour block.
pub fn decode_ycocg_block(src: &[u8; 16]) -> Rgba4x4Block {
    let (luma_half, chroma_half) = split_halves(src);
    let luma = decode_interpolated_alpha(&luma_half);
    let chroma = decode_bc1_color_block(&chroma_half);

    let mut block = Rgba4x4Block::default();
    for ((pixel, c), &y) in block
        .pixels
        .iter_mut()
        .zip(chroma.pixels.iter())
        .zip(luma.iter())
    {
        *pixel = ycocg_to_rgb(*c, y);
    }
    block
}

/// Converts one decoded `(Co, Cg, scale)` texel plus its luma back to RGB.
#[inline]
pub fn ycocg_to_rgb(chroma: Color8888, luma: u8) -> Color8888 {
    let scale = ((chroma.b >> 3) as f32 + 1.0) * 255.0;
    let y = luma as f32 / 255.0;
    let co = (chroma.r as f32 - 128.0) / scale;
    let cg = (chroma.g as f32 - 128.0) / scale;

    Color8888::new(
        unit_to_u8(y + co - cg),
        unit_to_u8(y + cg),
        unit_to_u8(y - co - cg),
        255,
    )
}

#[inline]
fn unit_to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
