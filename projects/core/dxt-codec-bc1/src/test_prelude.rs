//! Common test imports and utilities for BC1 tests

pub use rstest::rstest;

pub use crate::util::{decode_bc1_block, decode_bc1_color_block};
pub use crate::{encode_color_block, ColorEncodeSettings, EndpointStrategy};

pub use dxt_codec_common::block_4x4::Rgba4x4Block;
pub use dxt_codec_common::color_8888::Color8888;

/// A smooth opaque block: red grows to the right, green grows downwards.
pub(crate) fn gradient_block() -> Rgba4x4Block {
    Rgba4x4Block::from_pixels(core::array::from_fn(|i| {
        let (x, y) = ((i % 4) as u8, (i / 4) as u8);
        Color8888::new(40 + 8 * x + 2 * y, 90 + 8 * y + 2 * x, 150 - 4 * x - 4 * y, 255)
    }))
}
