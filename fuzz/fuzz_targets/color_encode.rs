#![no_main]

// Encodes arbitrary texels with every colour encoder setting and checks the invariants
// that must hold for any input.

use dxt_codec_bc1::{decode_bc1_block, encode_color_block, ColorEncodeSettings, EndpointStrategy};
use dxt_codec_common::block_4x4::Rgba4x4Block;
use dxt_codec_common::color_8888::Color8888;
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Input {
    pub texels: [[u8; 4]; 16],
    pub strategy: u8,
    pub dither: bool,
    pub punch_through_alpha: bool,
}

fuzz_target!(|input: Input| {
    let pixels = input.texels.map(|[r, g, b, a]| Color8888::new(r, g, b, a));
    let block = Rgba4x4Block::from_pixels(pixels);
    let strategy = match input.strategy % 3 {
        0 => EndpointStrategy::MaxDistance,
        1 => EndpointStrategy::Luminance,
        _ => EndpointStrategy::PrincipalAxis,
    };
    let settings = ColorEncodeSettings {
        strategy,
        dither: input.dither,
        punch_through_alpha: input.punch_through_alpha,
    };

    let encoded = encode_color_block(&block, &settings);
    let repeated = encode_color_block(&block, &settings);
    assert_eq!(encoded, repeated, "Encoding is not deterministic");

    let decoded = decode_bc1_block(&encoded);
    for (src, dst) in block.pixels.iter().zip(decoded.pixels.iter()) {
        let expected_alpha = if settings.punch_through_alpha && src.a < 128 { 0 } else { 255 };
        assert_eq!(dst.a, expected_alpha, "Binary alpha was not preserved");
    }

    if block.has_identical_pixels_ignore_alpha() && !block.pixels.iter().any(|p| p.a < 128) {
        let src = block.pixels[0].without_alpha();
        for dst in decoded.pixels.iter() {
            assert!(
                src.max_channel_difference(&dst.without_alpha()) <= 1,
                "Single colour block drifted by more than one step"
            );
        }
    }
});
