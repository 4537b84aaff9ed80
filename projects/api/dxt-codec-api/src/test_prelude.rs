//! Common test imports and utilities for the stream API tests

pub use rstest::rstest;

pub use dxt_codec_bc1::{ColorEncodeSettings, EndpointStrategy};
pub use dxt_codec_common::prelude::*;
pub use dxt_codec_resample::FilterKind;

/// The 4x4 colour gradient used by the block crates, fully opaque.
pub(crate) fn gradient_block() -> Rgba4x4Block {
    Rgba4x4Block::from_pixels(core::array::from_fn(|i| {
        let (x, y) = ((i % 4) as u8, (i / 4) as u8);
        Color8888::new(40 + 8 * x + 2 * y, 90 + 8 * y + 2 * x, 150 - 4 * x - 4 * y, 255)
    }))
}

/// A smooth opaque RGBA image. Channels wrap past 255 on images wider or taller than 36.
pub(crate) fn gradient_image(width: u32, height: u32) -> Image {
    Image::from_fn(width, height, |x, y| {
        Color8888::new(
            (30 + 6 * x) as u8,
            (50 + 6 * y) as u8,
            (100 + 3 * x + 3 * y) as u8,
            255,
        )
    })
    .unwrap()
}
