//! RGB to YCoCg conversion.

use dxt_codec_common::block_4x4::Rgba4x4Block;
use dxt_codec_common::color_8888::Color8888;

/// Converts an RGB texel to YCoCg, laid out as `(Co, Cg, 0, Y)` so luma lands in alpha.
///
/// Chroma is offset by 128. Alpha of the input is discarded.
///
/// # Examples
///
/// ```
/// use dxt_codec_common::color_8888::Color8888;
/// use dxt_codec_ycocg::rgb_to_ycocg;
///
/// // Greys have neutral chroma.
/// assert_eq!(rgb_to_ycocg(Color8888::new(77, 77, 77, 0)), Color8888::new(128, 128, 0, 77));
/// ```
#[inline]
pub fn rgb_to_ycocg(color: Color8888) -> Color8888 {
    let (r, g, b) = (color.r as i32, color.g as i32, color.b as i32);
    let y = (r + 2 * g + b + 2) >> 2;
    let co = ((r - b + 1) >> 1) + 128;
    let cg = ((2 * g - r - b + 2) >> 2) + 128;
    Color8888::new(clamp_u8(co), clamp_u8(cg), 0, clamp_u8(y))
}

/// Converts every texel of a block with [`rgb_to_ycocg`].
#[inline]
pub fn block_to_ycocg(block: &Rgba4x4Block) -> Rgba4x4Block {
    Rgba4x4Block::from_pixels(block.pixels.map(rgb_to_ycocg))
}

#[inline]
fn clamp_u8(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Color8888::new(255, 0, 0, 255), Color8888::new(255, 64, 0, 64))]
    #[case(Color8888::new(0, 255, 0, 255), Color8888::new(128, 255, 0, 128))]
    #[case(Color8888::new(0, 0, 255, 255), Color8888::new(1, 64, 0, 64))]
    #[case(Color8888::new(255, 255, 255, 255), Color8888::new(128, 128, 0, 255))]
    #[case(Color8888::new(0, 0, 0, 255), Color8888::new(128, 128, 0, 0))]
    fn primaries(#[case] rgb: Color8888, #[case] expected: Color8888) {
        assert_eq!(rgb_to_ycocg(rgb), expected);
    }
}
