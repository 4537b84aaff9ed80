//! 3-colour mode encoding for blocks with binary transparency.

use dxt_codec_common::color_565::Color565;
use dxt_codec_common::color_8888::Color8888;

/// Texels with alpha below this are stored as transparent.
pub(crate) const ALPHA_THRESHOLD: u8 = 128;

/// Whether any texel of the block counts as transparent.
#[inline]
pub(crate) fn has_transparent_texel(texels: &[Color8888; 16]) -> bool {
    texels.iter().any(|t| t.a < ALPHA_THRESHOLD)
}

/// Encodes a block in 3-colour mode (`c0 <= c1`), transparent texels on index 3.
///
/// Endpoints come from the inset bounding box of the opaque texels; the box diagonal is
/// picked from the sign of the red/blue and green/blue covariances.
pub(crate) fn encode_punch_through(texels: &[Color8888; 16]) -> [u8; 8] {
    let opaque: Vec<[i32; 3]> = texels
        .iter()
        .filter(|t| t.a >= ALPHA_THRESHOLD)
        .map(|t| [t.r as i32, t.g as i32, t.b as i32])
        .collect();

    if opaque.is_empty() {
        return [0, 0, 0, 0, 0xFF, 0xFF, 0xFF, 0xFF];
    }

    let mut lo = [255i32; 3];
    let mut hi = [0i32; 3];
    for texel in &opaque {
        for ch in 0..3 {
            lo[ch] = lo[ch].min(texel[ch]);
            hi[ch] = hi[ch].max(texel[ch]);
        }
    }

    // Covariance of red and green against blue about the box centre.
    let center: [i32; 3] = core::array::from_fn(|ch| (lo[ch] + hi[ch]) / 2);
    let (mut cov_rb, mut cov_gb) = (0i32, 0i32);
    for texel in &opaque {
        let db = texel[2] - center[2];
        cov_rb += (texel[0] - center[0]) * db;
        cov_gb += (texel[1] - center[1]) * db;
    }
    if cov_rb < 0 {
        core::mem::swap(&mut lo[0], &mut hi[0]);
    }
    if cov_gb < 0 {
        core::mem::swap(&mut lo[1], &mut hi[1]);
    }

    // Pull both corners in by 1/16 of the span.
    for ch in 0..3 {
        let inset = (hi[ch] - lo[ch]) / 16;
        hi[ch] -= inset;
        lo[ch] += inset;
    }

    let pack = |c: [i32; 3]| {
        Color565::from_rgb_rounded(c[0] as u8, c[1] as u8, c[2] as u8).raw_value()
    };
    let (a, b) = (pack(hi), pack(lo));
    let (c0, c1) = (a.min(b), a.max(b));

    let p0 = Color565::from_raw(c0).to_color_8888();
    let p1 = Color565::from_raw(c1).to_color_8888();
    let palette = [
        [p0.r as i32, p0.g as i32, p0.b as i32],
        [p1.r as i32, p1.g as i32, p1.b as i32],
        [
            (p0.r as i32 + p1.r as i32) / 2,
            (p0.g as i32 + p1.g as i32) / 2,
            (p0.b as i32 + p1.b as i32) / 2,
        ],
    ];

    let mut mask = 0u32;
    for (i, texel) in texels.iter().enumerate() {
        let index = if texel.a < ALPHA_THRESHOLD {
            3
        } else {
            let rgb = [texel.r as i32, texel.g as i32, texel.b as i32];
            nearest(&palette, rgb)
        };
        mask |= index << (2 * i);
    }

    let mut out = [0u8; 8];
    out[0..2].copy_from_slice(&c0.to_le_bytes());
    out[2..4].copy_from_slice(&c1.to_le_bytes());
    out[4..8].copy_from_slice(&mask.to_le_bytes());
    out
}

fn nearest(palette: &[[i32; 3]; 3], rgb: [i32; 3]) -> u32 {
    let mut best = 0;
    let mut best_dist = i32::MAX;
    for (i, entry) in palette.iter().enumerate() {
        let dist: i32 = (0..3).map(|ch| (entry[ch] - rgb[ch]).pow(2)).sum();
        if dist < best_dist {
            best_dist = dist;
            best = i as u32;
        }
    }
    best
}
