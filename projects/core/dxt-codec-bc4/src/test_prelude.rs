//! Common test imports and utilities for interpolated alpha tests

pub use rstest::rstest;

pub use crate::encode::*;
pub use crate::util::*;

pub use dxt_codec_common::block_4x4::Rgba4x4Block;
pub use dxt_codec_common::color_8888::Color8888;

/// A smooth 16-value ramp from 100 to 160.
pub(crate) fn ramp() -> [u8; 16] {
    core::array::from_fn(|i| 100 + 4 * i as u8)
}

/// Largest absolute difference between two channel blocks.
pub(crate) fn max_error(a: &[u8; 16], b: &[u8; 16]) -> u8 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| x.abs_diff(*y))
        .max()
        .unwrap_or(0)
}
