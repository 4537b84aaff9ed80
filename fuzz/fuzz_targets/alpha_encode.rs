#![no_main]

// Encodes arbitrary alpha values and checks endpoint order and the error bound.

use dxt_codec_bc4::{decode_interpolated_alpha, encode_interpolated_alpha};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|values: [u8; 16]| {
    let block = encode_interpolated_alpha(&values);
    let (min, max) = (
        values.iter().copied().min().unwrap_or(0),
        values.iter().copied().max().unwrap_or(0),
    );
    assert_eq!((block[0], block[1]), (max, min), "Endpoints must be max then min");

    // No texel may be further than one palette step away from its source value.
    let step = (max - min) as u32 / 7 + 1;
    let decoded = decode_interpolated_alpha(&block);
    for (src, dst) in values.iter().zip(decoded.iter()) {
        assert!(
            src.abs_diff(*dst) as u32 <= step,
            "{src} decoded as {dst} (range {min}..={max})"
        );
    }
});
