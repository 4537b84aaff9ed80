//! Interpolated alpha (BC4) decoding; based on MSDN
//! <https://learn.microsoft.com/en-us/windows/win32/direct3d10/d3d10-graphics-programming-guide-resources-block-compression#bc4>
//!
//! Uses the 'ideal' truncating interpolation of the DX9 docs.

use dxt_codec_common::block_4x4::Rgba4x4Block;
use dxt_codec_common::color_8888::Color8888;
use dxt_codec_common::packing::{read_u48_le, split_halves};

/// The 8 values an interpolated alpha block's indices select from.
#[allow(clippy::identity_op)]
#[inline]
pub fn alpha_palette(a0: u8, a1: u8) -> [u8; 8] {
    let (a0, a1) = (a0 as u16, a1 as u16);
    if a0 > a1 {
        [
            a0 as u8,
            a1 as u8,
            ((6 * a0 + 1 * a1) / 7) as u8,
            ((5 * a0 + 2 * a1) / 7) as u8,
            ((4 * a0 + 3 * a1) / 7) as u8,
            ((3 * a0 + 4 * a1) / 7) as u8,
            ((2 * a0 + 5 * a1) / 7) as u8,
            ((1 * a0 + 6 * a1) / 7) as u8,
        ]
    } else {
        [
            a0 as u8,
            a1 as u8,
            ((4 * a0 + 1 * a1) / 5) as u8,
            ((3 * a0 + 2 * a1) / 5) as u8,
            ((2 * a0 + 3 * a1) / 5) as u8,
            ((1 * a0 + 4 * a1) / 5) as u8,
            0,
            255,
        ]
    }
}

/// Decodes an interpolated alpha block into 16 values.
///
/// # Example
///
/// ```
/// use dxt_codec_bc4::decode_interpolated_alpha;
///
/// // a0 <= a1: index 6 is 0 and index 7 is 255.
/// let block = [10, 20, 0b0011_1110, 0, 0, 0, 0, 0];
/// let values = decode_interpolated_alpha(&block);
/// assert_eq!(values[0], 0);
/// assert_eq!(values[1], 255);
/// assert_eq!(values[2], 10);
/// ```
#[inline]
pub fn decode_interpolated_alpha(src: &[u8; 8]) -> [u8; 16] {
    let palette = alpha_palette(src[0], src[1]);
    let bits = read_u48_le(src);
    core::array::from_fn(|i| palette[((bits >> (3 * i)) & 0x7) as usize])
}

/// Decodes a BC4 block to opaque grey texels.
#[inline]
pub fn decode_bc4_block(src: &[u8; 8]) -> Rgba4x4Block {
    let values = decode_interpolated_alpha(src);
    Rgba4x4Block::from_pixels(core::array::from_fn(|i| {
        let v = values[i];
        Color8888::new(v, v, v, 255)
    }))
}

/// Decodes a BC5 block: red from the first half, green from the second, blue 0, alpha 255.
#[inline]
pub fn decode_bc5_block(src: &[u8; 16]) -> Rgba4x4Block {
    let (red_half, green_half) = split_halves(src);
    let red = decode_interpolated_alpha(&red_half);
    let green = decode_interpolated_alpha(&green_half);
    Rgba4x4Block::from_pixels(core::array::from_fn(|i| {
        Color8888::new(red[i], green[i], 0, 255)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(255, 0, [255, 0, 218, 182, 145, 109, 72, 36])]
    #[case(0, 255, [0, 255, 51, 102, 153, 204, 0, 255])]
    #[case(50, 50, [50, 50, 50, 50, 50, 50, 0, 255])]
    fn palette_modes(#[case] a0: u8, #[case] a1: u8, #[case] expected: [u8; 8]) {
        assert_eq!(alpha_palette(a0, a1), expected);
    }

    #[test]
    fn indices_are_read_little_endian() {
        // Texels 0..8 use indices 0..8, texels 8..16 repeat them.
        let bits: u64 = (0..16u64).map(|i| (i % 8) << (3 * i)).sum();
        let mut block = [200, 100, 0, 0, 0, 0, 0, 0];
        block[2..8].copy_from_slice(&bits.to_le_bytes()[0..6]);

        let values = decode_interpolated_alpha(&block);
        let palette = alpha_palette(200, 100);
        for (i, &v) in values.iter().enumerate() {
            assert_eq!(v, palette[i % 8]);
        }
    }
}
