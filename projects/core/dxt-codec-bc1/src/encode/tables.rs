//! Lookup tables shared by the colour encoder, built on first use.

use dxt_codec_common::color_565::mul8bit;
use std::sync::LazyLock;

/// Expands a 5-bit value to 8 bits by replicating the top bits.
#[inline]
pub(crate) const fn expand5(v: u8) -> u8 {
    (v << 3) | (v >> 2)
}

/// Expands a 6-bit value to 8 bits by replicating the top bits.
#[inline]
pub(crate) const fn expand6(v: u8) -> u8 {
    (v << 2) | (v >> 4)
}

/// `(2a + b) / 3`, the first interpolated palette entry.
#[inline]
pub(crate) const fn lerp13(a: i32, b: i32) -> i32 {
    (2 * a + b) / 3
}

/// Best `[max, min]` endpoint pair for reproducing each 8-bit value at palette index 2.
pub(crate) type SingleColorTable = [[u8; 2]; 256];

/// Optimal single-colour endpoints for 5-bit channels (red, blue).
pub(crate) static OMATCH5: LazyLock<SingleColorTable> =
    LazyLock::new(|| build_single_color_table(32, expand5));

/// Optimal single-colour endpoints for the 6-bit green channel.
pub(crate) static OMATCH6: LazyLock<SingleColorTable> =
    LazyLock::new(|| build_single_color_table(64, expand6));

/// Exhaustively picks, per 8-bit value, the endpoint pair whose 1/3 interpolant lands closest.
///
/// Hardware may interpolate up to 3% of the endpoint distance away from the exact value,
/// so that distance is charged as extra error.
fn build_single_color_table(levels: u8, expand: fn(u8) -> u8) -> SingleColorTable {
    let mut table = [[0u8; 2]; 256];
    for (value, entry) in table.iter_mut().enumerate() {
        let mut best = i32::MAX;
        for min in 0..levels {
            for max in 0..levels {
                let min_e = expand(min) as i32;
                let max_e = expand(max) as i32;
                let err = (lerp13(max_e, min_e) - value as i32).abs() + (max_e - min_e).abs() * 3 / 100;
                if err < best {
                    *entry = [max, min];
                    best = err;
                }
            }
        }
    }
    table
}

/// Packs the single-colour endpoints for `(r, g, b)` as `(max16, min16)`.
#[inline]
pub(crate) fn single_color_endpoints(r: u8, g: u8, b: u8) -> (u16, u16) {
    let (o5, o6) = (&*OMATCH5, &*OMATCH6);
    let [r_max, r_min] = o5[r as usize];
    let [g_max, g_min] = o6[g as usize];
    let [b_max, b_min] = o5[b as usize];
    let max16 = ((r_max as u16) << 11) | ((g_max as u16) << 5) | b_max as u16;
    let min16 = ((r_min as u16) << 11) | ((g_min as u16) << 5) | b_min as u16;
    (max16, min16)
}

/// Quantise-then-expand tables indexed by `value + 8`, so dither error can push a sample
/// slightly outside `0..=255`.
pub(crate) struct QuantTables {
    pub(crate) red_blue: [u8; 272],
    pub(crate) green: [u8; 272],
}

pub(crate) static QUANT: LazyLock<QuantTables> = LazyLock::new(|| {
    let mut tables = QuantTables {
        red_blue: [0; 272],
        green: [0; 272],
    };
    for i in 0..272i32 {
        let v = (i - 8).clamp(0, 255);
        tables.red_blue[i as usize] = expand5(mul8bit(v, 31) as u8);
        tables.green[i as usize] = expand6(mul8bit(v, 63) as u8);
    }
    tables
});
