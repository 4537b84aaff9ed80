//! Initial endpoint selection for the general encoding path.
//!
//! Each strategy returns `(max16, min16)`: two 5:6:5 colours taken from texels of the block.

use crate::settings::EndpointStrategy;
use dxt_codec_common::color_565::Color565;
use dxt_codec_common::color_8888::Color8888;

const POWER_ITERATIONS: usize = 4;

/// Selects endpoints for `texels` with the given strategy.
pub(crate) fn select_endpoints(texels: &[Color8888; 16], strategy: EndpointStrategy) -> (u16, u16) {
    let (max, min) = match strategy {
        EndpointStrategy::MaxDistance => max_distance_pair(texels),
        EndpointStrategy::Luminance => luminance_extremes(texels),
        EndpointStrategy::PrincipalAxis => principal_axis_extremes(texels),
    };
    (pack(max), pack(min))
}

#[inline]
fn pack(c: Color8888) -> u16 {
    Color565::from_rgb_rounded(c.r, c.g, c.b).raw_value()
}

/// The two texels furthest apart in RGB (squared distance), checking every pair.
fn max_distance_pair(texels: &[Color8888; 16]) -> (Color8888, Color8888) {
    let mut best = (texels[0], texels[0]);
    let mut best_dist = -1;
    for i in 0..16 {
        for j in (i + 1)..16 {
            let dist = squared_distance(&texels[i], &texels[j]);
            if dist > best_dist {
                best_dist = dist;
                best = (texels[i], texels[j]);
            }
        }
    }
    best
}

#[inline]
fn squared_distance(a: &Color8888, b: &Color8888) -> i32 {
    let dr = a.r as i32 - b.r as i32;
    let dg = a.g as i32 - b.g as i32;
    let db = a.b as i32 - b.b as i32;
    dr * dr + dg * dg + db * db
}

/// The brightest and darkest texels by BT.709 luma.
fn luminance_extremes(texels: &[Color8888; 16]) -> (Color8888, Color8888) {
    extremes_along(texels, [54, 183, 19])
}

/// Extremes of the projection onto the dominant axis of the block's colour covariance.
fn principal_axis_extremes(texels: &[Color8888; 16]) -> (Color8888, Color8888) {
    let mut sum = [0i32; 3];
    let mut min = [255i32; 3];
    let mut max = [0i32; 3];
    for texel in texels {
        for (ch, v) in [texel.r, texel.g, texel.b].into_iter().enumerate() {
            let v = v as i32;
            sum[ch] += v;
            min[ch] = min[ch].min(v);
            max[ch] = max[ch].max(v);
        }
    }
    let mean = sum.map(|s| (s + 8) >> 4);

    // Upper triangle: rr, rg, rb, gg, gb, bb.
    let mut cov = [0i32; 6];
    for texel in texels {
        let r = texel.r as i32 - mean[0];
        let g = texel.g as i32 - mean[1];
        let b = texel.b as i32 - mean[2];
        cov[0] += r * r;
        cov[1] += r * g;
        cov[2] += r * b;
        cov[3] += g * g;
        cov[4] += g * b;
        cov[5] += b * b;
    }
    let covf = cov.map(|c| c as f32 / 255.0);

    let mut v = [
        (max[0] - min[0]) as f32,
        (max[1] - min[1]) as f32,
        (max[2] - min[2]) as f32,
    ];
    for _ in 0..POWER_ITERATIONS {
        v = [
            v[0] * covf[0] + v[1] * covf[1] + v[2] * covf[2],
            v[0] * covf[1] + v[1] * covf[3] + v[2] * covf[4],
            v[0] * covf[2] + v[1] * covf[4] + v[2] * covf[5],
        ];
    }

    let magnitude = v[0].abs().max(v[1].abs()).max(v[2].abs());
    let axis = if magnitude < 4.0 {
        // Near-uniform block, fall back to luma weights.
        [299, 587, 114]
    } else {
        let scale = 512.0 / magnitude;
        v.map(|c| (c * scale) as i32)
    };

    extremes_along(texels, axis)
}

/// Texels with the largest and smallest dot product against `axis`, first occurrence wins.
fn extremes_along(texels: &[Color8888; 16], axis: [i32; 3]) -> (Color8888, Color8888) {
    let dot = |c: &Color8888| c.r as i32 * axis[0] + c.g as i32 * axis[1] + c.b as i32 * axis[2];

    let (mut max_i, mut min_i) = (0, 0);
    let (mut max_d, mut min_d) = (dot(&texels[0]), dot(&texels[0]));
    for (i, texel) in texels.iter().enumerate().skip(1) {
        let d = dot(texel);
        if d < min_d {
            min_d = d;
            min_i = i;
        }
        if d > max_d {
            max_d = d;
            max_i = i;
        }
    }
    (texels[max_i], texels[min_i])
}
