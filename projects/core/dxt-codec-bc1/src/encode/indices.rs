//! Palette evaluation and index assignment.

use super::tables::{expand5, expand6, lerp13, QUANT};
use dxt_codec_common::color_8888::Color8888;

/// The four colours of a 4-colour mode block, as `[r, g, b]`.
pub(crate) type Palette = [[i32; 3]; 4];

/// Builds the 4-colour palette for endpoints `max16` (index 0) and `min16` (index 1).
pub(crate) fn eval_palette(max16: u16, min16: u16) -> Palette {
    let expand = |c: u16| {
        [
            expand5((c >> 11) as u8 & 31) as i32,
            expand6((c >> 5) as u8 & 63) as i32,
            expand5(c as u8 & 31) as i32,
        ]
    };
    let c0 = expand(max16);
    let c1 = expand(min16);
    [
        c0,
        c1,
        core::array::from_fn(|ch| lerp13(c0[ch], c1[ch])),
        core::array::from_fn(|ch| lerp13(c1[ch], c0[ch])),
    ]
}

/// Assigns each texel one of the four palette entries by projecting onto the endpoint line.
///
/// Along the line the palette is ordered `1, 3, 2, 0`; the three crossover points between
/// neighbours split it into zones. With `dither`, the projection error of each texel is
/// diffused to its neighbours (Floyd-Steinberg, raster order).
pub(crate) fn match_colors(texels: &[Color8888; 16], palette: &Palette, dither: bool) -> u32 {
    let dir = [
        palette[0][0] - palette[1][0],
        palette[0][1] - palette[1][1],
        palette[0][2] - palette[1][2],
    ];
    let project = |c: [i32; 3]| c[0] * dir[0] + c[1] * dir[1] + c[2] * dir[2];

    let dots: [i32; 16] =
        core::array::from_fn(|i| project([texels[i].r as i32, texels[i].g as i32, texels[i].b as i32]));
    let stops: [i32; 4] = core::array::from_fn(|i| project(palette[i]));

    // Crossovers, doubled to keep the halves exact.
    let c0_point = stops[1] + stops[3];
    let half_point = stops[3] + stops[2];
    let c3_point = stops[2] + stops[0];

    let pick = |dot: i32, c0_point: i32, half_point: i32, c3_point: i32| -> u32 {
        if dot < half_point {
            if dot < c0_point {
                1
            } else {
                3
            }
        } else if dot < c3_point {
            2
        } else {
            0
        }
    };

    if !dither {
        let mut mask = 0u32;
        for &dot in dots.iter().rev() {
            mask <<= 2;
            mask |= pick(dot * 2, c0_point, half_point, c3_point);
        }
        return mask;
    }

    // Errors are kept in 1/16ths; dots are scaled by 16 and crossovers by 8 to match.
    let (c0_point, half_point, c3_point) = (c0_point << 3, half_point << 3, c3_point << 3);
    let mut current = [0i32; 4];
    let mut previous = [0i32; 4];
    let mut mask = 0u32;
    for (y, row) in dots.chunks_exact(4).enumerate() {
        let mut row_mask = 0u32;
        for x in 0..4 {
            let diffused = diffused_error(&current, &previous, x);
            let step = pick((row[x] << 4) + diffused, c0_point, half_point, c3_point);
            current[x] = row[x] - stops[step as usize];
            row_mask |= step << (2 * x);
        }
        mask |= row_mask << (8 * y);
        core::mem::swap(&mut current, &mut previous);
    }
    mask
}

/// Floyd-Steinberg error arriving at column `x`: 7/16 from the left neighbour on this row,
/// 3/16, 5/16 and 1/16 from the row above (down-left, down, down-right as seen from there).
#[inline]
fn diffused_error(current: &[i32; 4], previous: &[i32; 4], x: usize) -> i32 {
    let left = if x > 0 { 7 * current[x - 1] } else { 0 };
    let above_right = if x < 3 { 3 * previous[x + 1] } else { 0 };
    let above = 5 * previous[x];
    let above_left = if x > 0 { previous[x - 1] } else { 0 };
    left + above_right + above + above_left
}

/// Returns a copy of the block dithered to 5:6:5 precision, used for endpoint fitting when
/// dithering is on.
pub(crate) fn dither_block(texels: &[Color8888; 16]) -> [Color8888; 16] {
    let quant = &*QUANT;
    let mut out = *texels;

    for ch in 0..3 {
        let table: &[u8; 272] = if ch == 1 { &quant.green } else { &quant.red_blue };
        let mut current = [0i32; 4];
        let mut previous = [0i32; 4];
        for y in 0..4 {
            for x in 0..4 {
                let i = y * 4 + x;
                let v = texels[i].channel(ch) as i32;
                let index = (v + (diffused_error(&current, &previous, x) >> 4) + 8).clamp(0, 271);
                let q = table[index as usize];
                current[x] = v - q as i32;
                match ch {
                    0 => out[i].r = q,
                    1 => out[i].g = q,
                    _ => out[i].b = q,
                }
            }
            core::mem::swap(&mut current, &mut previous);
        }
    }
    out
}
