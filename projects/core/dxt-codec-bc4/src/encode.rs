//! Interpolated alpha encoding, and the BC4/BC5 blocks built from it.

use dxt_codec_common::block_4x4::Rgba4x4Block;
use dxt_codec_common::packing::{join_halves, write_u48_le};

/// Encodes 16 values into an interpolated alpha block with `a0 = max` and `a1 = min`.
///
/// Indices are chosen without searching: each value is scaled to a linear position 0..=7
/// between the endpoints (the bias rounds to the nearest palette entry), then remapped so
/// positions 0 and 7 land on the endpoint indices 1 and 0.
pub fn encode_interpolated_alpha(values: &[u8; 16]) -> [u8; 8] {
    let mut min = values[0] as i32;
    let mut max = min;
    for &v in &values[1..] {
        min = min.min(v as i32);
        max = max.max(v as i32);
    }

    let dist = max - min;
    let dist4 = dist * 4;
    let dist2 = dist * 2;
    let bias = if dist < 8 { dist - 1 } else { dist / 2 + 2 } - min * 7;

    let mut bits = 0u64;
    for (i, &v) in values.iter().enumerate() {
        let mut a = v as i32 * 7 + bias;

        // Branchless binary search for the linear position.
        let t = -((a >= dist4) as i32);
        let mut index = t & 4;
        a -= dist4 & t;
        let t = -((a >= dist2) as i32);
        index += t & 2;
        a -= dist2 & t;
        index += (a >= dist) as i32;

        // Linear position to block index: 0 -> 1, 7 -> 0, 6..1 -> 2..7.
        index = -index & 7;
        index ^= (2 > index) as i32;

        bits |= (index as u64) << (3 * i);
    }

    let mut out = [max as u8, min as u8, 0, 0, 0, 0, 0, 0];
    write_u48_le(&mut out, bits);
    out
}

/// Encodes the red channel of a block as BC4.
#[inline]
pub fn encode_bc4_block(block: &Rgba4x4Block) -> [u8; 8] {
    encode_interpolated_alpha(&block.channel(0))
}

/// Encodes the red and green channels of a block as BC5, red first.
#[inline]
pub fn encode_bc5_block(block: &Rgba4x4Block) -> [u8; 16] {
    join_halves(
        &encode_interpolated_alpha(&block.channel(0)),
        &encode_interpolated_alpha(&block.channel(1)),
    )
}
