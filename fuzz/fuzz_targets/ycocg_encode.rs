#![no_main]

// Encodes arbitrary colour blocks as YCoCg-DXT5 under both chroma scales.

use dxt_codec_common::block_4x4::Rgba4x4Block;
use dxt_codec_common::color_8888::Color8888;
use dxt_codec_ycocg::{decode_ycocg_block, encode_ycocg_block, ChromaScale};
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Input {
    pub texels: [[u8; 3]; 16],
    pub adaptive: bool,
}

fuzz_target!(|input: Input| {
    let pixels = input.texels.map(|[r, g, b]| Color8888::new(r, g, b, 255));
    let block = Rgba4x4Block::from_pixels(pixels);
    let scale = if input.adaptive {
        ChromaScale::Adaptive
    } else {
        ChromaScale::Fixed
    };

    let encoded = encode_ycocg_block(&block, scale);
    let repeated = encode_ycocg_block(&block, scale);
    assert_eq!(encoded, repeated, "Encoding is not deterministic");

    // Blue of the first endpoint holds factor - 1: only 1, 2 or 4 are ever written.
    let scale_bits = encoded[8] & 0x1F;
    assert!(matches!(scale_bits, 0 | 1 | 3), "Unexpected scale bits {scale_bits:#x}");
    if !input.adaptive {
        assert_eq!(scale_bits, 0);
    }

    let decoded = decode_ycocg_block(&encoded);
    assert!(decoded.pixels.iter().all(|p| p.a == 255));
});
