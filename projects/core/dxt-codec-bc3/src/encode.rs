//! BC3 block encoding.

use dxt_codec_bc1::{encode_color_block, ColorEncodeSettings};
use dxt_codec_bc4::encode_interpolated_alpha;
use dxt_codec_common::block_4x4::Rgba4x4Block;
use dxt_codec_common::packing::join_halves;

/// Encodes a block as BC3: interpolated alpha followed by a BC1 colour block.
///
/// Punch-through alpha in `settings` is ignored.
pub fn encode_bc3_block(block: &Rgba4x4Block, settings: &ColorEncodeSettings) -> [u8; 16] {
    let color_settings = ColorEncodeSettings {
        punch_through_alpha: false,
        ..*settings
    };

    join_halves(
        &encode_interpolated_alpha(&block.channel(3)),
        &encode_color_block(block, &color_settings),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::decode_bc3_block;
    use dxt_codec_bc1::EndpointStrategy;
    use dxt_codec_common::color_8888::Color8888;
    use rstest::rstest;

    fn gradient_block() -> Rgba4x4Block {
        Rgba4x4Block::from_pixels(core::array::from_fn(|i| {
            let (x, y) = ((i % 4) as u8, (i / 4) as u8);
            let a = 100 + 4 * i as u8;
            Color8888::new(40 + 8 * x + 2 * y, 90 + 8 * y + 2 * x, 150 - 4 * x - 4 * y, a)
        }))
    }

    #[rstest]
    #[case(EndpointStrategy::MaxDistance)]
    #[case(EndpointStrategy::Luminance)]
    #[case(EndpointStrategy::PrincipalAxis)]
    fn gradient_round_trips_within_tolerance(#[case] strategy: EndpointStrategy) {
        let block = gradient_block();
        let settings = ColorEncodeSettings {
            strategy,
            ..Default::default()
        };
        let decoded = decode_bc3_block(&encode_bc3_block(&block, &settings));
        for (src, dst) in block.pixels.iter().zip(decoded.pixels.iter()) {
            assert!(src.without_alpha().max_channel_difference(&dst.without_alpha()) <= 20);
            assert!(src.a.abs_diff(dst.a) <= 6);
        }
    }

    #[test]
    fn white_block_is_opaque_white() {
        let block = Rgba4x4Block::new(Color8888::new(255, 255, 255, 255));
        let decoded = decode_bc3_block(&encode_bc3_block(&block, &Default::default()));
        assert_eq!(decoded, block);
    }

    #[test]
    fn alpha_half_comes_first() {
        let block = Rgba4x4Block::new(Color8888::new(0, 0, 0, 77));
        let bytes = encode_bc3_block(&block, &Default::default());
        assert_eq!((bytes[0], bytes[1]), (77, 77));
    }
}
