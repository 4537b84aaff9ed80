//! BC2 block encoding.

use dxt_codec_bc1::{encode_color_block, ColorEncodeSettings};
use dxt_codec_common::block_4x4::Rgba4x4Block;
use dxt_codec_common::packing::join_halves;

/// Packs 16 alpha values into the 4-bit explicit alpha half of a BC2 block.
///
/// Each value keeps its high nibble. Texel `2n` goes into the low nibble of byte `n`,
/// texel `2n + 1` into the high nibble.
///
/// # Examples
///
/// ```
/// use dxt_codec_bc2::encode_explicit_alpha;
///
/// let mut alpha = [0u8; 16];
/// alpha[0] = 0x1F;
/// alpha[1] = 0xF0;
/// assert_eq!(encode_explicit_alpha(&alpha)[0], 0xF1);
/// ```
#[inline]
pub fn encode_explicit_alpha(alpha: &[u8; 16]) -> [u8; 8] {
    let mut out = [0u8; 8];
    for (byte, pair) in out.iter_mut().zip(alpha.chunks_exact(2)) {
        *byte = (pair[0] >> 4) | (pair[1] & 0xF0);
    }
    out
}

/// Encodes a block as BC2: explicit alpha followed by a BC1 colour block.
///
/// Punch-through alpha in `settings` is ignored; alpha lives in the explicit half.
pub fn encode_bc2_block(block: &Rgba4x4Block, settings: &ColorEncodeSettings) -> [u8; 16] {
    let color_settings = ColorEncodeSettings {
        punch_through_alpha: false,
        ..*settings
    };

    join_halves(
        &encode_explicit_alpha(&block.channel(3)),
        &encode_color_block(block, &color_settings),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::decode_bc2_block;
    use dxt_codec_common::color_8888::Color8888;
    use rstest::rstest;

    fn gradient_block() -> Rgba4x4Block {
        Rgba4x4Block::from_pixels(core::array::from_fn(|i| {
            let (x, y) = ((i % 4) as u8, (i / 4) as u8);
            let a = (i * 17) as u8;
            Color8888::new(40 + 8 * x + 2 * y, 90 + 8 * y + 2 * x, 150 - 4 * x - 4 * y, a)
        }))
    }

    #[rstest]
    #[case(0x00, 0x00)]
    #[case(0x0F, 0x00)]
    #[case(0x10, 0x01)]
    #[case(0x80, 0x08)]
    #[case(0xFF, 0x0F)]
    fn keeps_high_nibble(#[case] alpha: u8, #[case] nibble: u8) {
        let packed = encode_explicit_alpha(&[alpha; 16]);
        assert_eq!(packed, [nibble | (nibble << 4); 8]);
    }

    #[test]
    fn alpha_round_trips_within_fifteen() {
        for v in 0..=255u8 {
            let block = Rgba4x4Block::new(Color8888::new(0, 0, 0, v));
            let decoded = decode_bc2_block(&encode_bc2_block(&block, &Default::default()));
            assert!(decoded.pixels.iter().all(|p| p.a.abs_diff(v) <= 15), "alpha {v}");
        }
    }

    #[test]
    fn gradient_round_trips_within_tolerance() {
        let block = gradient_block();
        let decoded = decode_bc2_block(&encode_bc2_block(&block, &Default::default()));
        for (src, dst) in block.pixels.iter().zip(decoded.pixels.iter()) {
            assert!(src.without_alpha().max_channel_difference(&dst.without_alpha()) <= 20);
            assert!(src.a.abs_diff(dst.a) <= 15);
        }
    }

    #[test]
    fn ignores_punch_through_setting() {
        let block = gradient_block();
        let settings = ColorEncodeSettings {
            punch_through_alpha: true,
            ..Default::default()
        };
        assert_eq!(
            encode_bc2_block(&block, &settings),
            encode_bc2_block(&block, &Default::default())
        );
    }
}
