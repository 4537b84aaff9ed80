//! Least squares endpoint refinement.

use super::tables::single_color_endpoints;
use dxt_codec_common::color_8888::Color8888;

/// Weight of endpoint 0 (times 3) for each index.
const W1: [i32; 4] = [3, 0, 2, 1];

/// Per index `(w1*w1) << 16 | (w2*w2) << 8 | (w1*w2)`, so a single accumulator collects
/// all three sums of the normal equations.
const PRODUCTS: [i32; 4] = [0x090000, 0x000900, 0x040102, 0x010402];

/// Solves for the endpoints that best reproduce `texels` under the index assignment `mask`.
///
/// Returns the new `(max16, min16)` and whether they differ from the inputs.
pub(crate) fn refine_endpoints(
    texels: &[Color8888; 16],
    max16: u16,
    min16: u16,
    mask: u32,
) -> (u16, u16, bool) {
    let (new_max, new_min) = if (mask ^ (mask << 2)) < 4 {
        // Every texel shares one index; the system is singular. Use the block mean instead.
        let mut sum = [8i32; 3];
        for texel in texels {
            sum[0] += texel.r as i32;
            sum[1] += texel.g as i32;
            sum[2] += texel.b as i32;
        }
        single_color_endpoints((sum[0] >> 4) as u8, (sum[1] >> 4) as u8, (sum[2] >> 4) as u8)
    } else {
        solve(texels, mask)
    };

    (new_max, new_min, new_max != max16 || new_min != min16)
}

fn solve(texels: &[Color8888; 16], mask: u32) -> (u16, u16) {
    let mut akku = 0i32;
    let mut at1 = [0i32; 3];
    let mut at2 = [0i32; 3];

    let mut cm = mask;
    for texel in texels {
        let step = (cm & 3) as usize;
        cm >>= 2;
        let w1 = W1[step];
        akku += PRODUCTS[step];
        for (ch, v) in [texel.r, texel.g, texel.b].into_iter().enumerate() {
            at1[ch] += w1 * v as i32;
            at2[ch] += v as i32;
        }
    }
    for ch in 0..3 {
        at2[ch] = 3 * at2[ch] - at1[ch];
    }

    let xx = akku >> 16;
    let yy = (akku >> 8) & 0xFF;
    let xy = akku & 0xFF;

    // Cramer's rule on the 2x2 normal equations, folded with the 8-bit to 5/6-bit scale.
    let f = 3.0f32 / 255.0 / (xx * yy - xy * xy) as f32;
    let quantize = |v: i32, levels: f32, max: i32| -> u16 {
        let q = (v as f32 * f * levels + 0.5) as i32;
        q.clamp(0, max) as u16
    };

    let max16 = (quantize(at1[0] * yy - at2[0] * xy, 31.0, 31) << 11)
        | (quantize(at1[1] * yy - at2[1] * xy, 63.0, 63) << 5)
        | quantize(at1[2] * yy - at2[2] * xy, 31.0, 31);
    let min16 = (quantize(at2[0] * xx - at1[0] * xy, 31.0, 31) << 11)
        | (quantize(at2[1] * xx - at1[1] * xy, 63.0, 63) << 5)
        | quantize(at2[2] * xx - at1[2] * xy, 31.0, 31);

    (max16, min16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_mask_falls_back_to_mean() {
        let texels = [Color8888::new(0, 0, 0, 255); 16];
        let (max16, min16, changed) = refine_endpoints(&texels, 0x1234, 0x1234, 0);
        assert_eq!((max16, min16), (0, 0));
        assert!(changed);
    }

    #[test]
    fn exact_endpoints_are_recovered() {
        // Half the texels on each endpoint: the fit reproduces them exactly.
        let white = Color8888::new(255, 255, 255, 255);
        let black = Color8888::new(0, 0, 0, 255);
        let texels: [Color8888; 16] = core::array::from_fn(|i| if i < 8 { white } else { black });
        // Indices 0 (white) for the first 8 texels, 1 (black) for the rest.
        let mask = 0x5555_0000;

        let (max16, min16, changed) = refine_endpoints(&texels, 0xFFFF, 0x0000, mask);
        assert_eq!((max16, min16), (0xFFFF, 0x0000));
        assert!(!changed);
    }
}
