//! Filter selection and the 1D weight functions shared by the 2D and 3D resamplers.

use core::f32::consts::PI;
use core::fmt;
use core::str::FromStr;
use derive_enum_all_values::AllValues;
use thiserror::Error;

/// Resampling kernel used to build each mip level from the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AllValues)]
pub enum FilterKind {
    /// Point sampling. Samples are copied without gamma conversion.
    Nearest,
    /// 2x2 average.
    #[default]
    Box,
    /// Centre aligned linear interpolation.
    Bilinear,
    /// Catmull-Rom cubic, 4 taps per axis.
    Bicubic,
    /// Windowed sinc with a radius of 3.
    Lanczos,
}

/// Returned when a filter name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid filter: '{0}'. Valid options are: nearest, box, bilinear, bicubic, lanczos")]
pub struct UnknownFilterError(pub String);

impl FilterKind {
    /// Canonical lowercase name.
    pub const fn name(&self) -> &'static str {
        match self {
            FilterKind::Nearest => "nearest",
            FilterKind::Box => "box",
            FilterKind::Bilinear => "bilinear",
            FilterKind::Bicubic => "bicubic",
            FilterKind::Lanczos => "lanczos",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterKind {
    type Err = UnknownFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nearest" | "point" => Ok(FilterKind::Nearest),
            "box" => Ok(FilterKind::Box),
            "bilinear" | "linear" | "triangle" => Ok(FilterKind::Bilinear),
            "bicubic" | "cubic" => Ok(FilterKind::Bicubic),
            "lanczos" | "lanczos3" => Ok(FilterKind::Lanczos),
            _ => Err(UnknownFilterError(s.to_string())),
        }
    }
}

/// Lanczos window radius.
pub(crate) const LANCZOS_RADIUS: f32 = 3.0;

/// Source index used by [`FilterKind::Nearest`] for output index `x`.
#[inline]
pub(crate) fn nearest_index(x: u32, src: u32, dst: u32) -> u32 {
    let ix = (x as u64 * src as u64 + src as u64 / 2) / dst as u64;
    (ix as u32).min(src - 1)
}

/// First of the two source indices averaged by [`FilterKind::Box`].
#[inline]
pub(crate) fn box_taps(x: u32, src: u32, dst: u32) -> [u32; 2] {
    let x0 = ((x as u64 * src as u64) / dst as u64) as u32;
    let x0 = x0.min(src - 1);
    [x0, (x0 + 1).min(src - 1)]
}

/// Centre aligned source position of output index `x` in 8.8 fixed point.
///
/// Returns the integer tap and the 8-bit fraction.
#[inline]
pub(crate) fn fixed_position(x: u32, src: u32, dst: u32) -> (i64, u32) {
    let pos = ((2 * x as i64 + 1) * src as i64 * 256) / (2 * dst as i64) - 128;
    let pos = pos.max(0);
    (pos >> 8, (pos & 0xFF) as u32)
}

/// Two linear taps with weights summing to 1.
#[inline]
pub(crate) fn bilinear_taps(x: u32, src: u32, dst: u32) -> [(u32, f32); 2] {
    let (x0, frac) = fixed_position(x, src, dst);
    let t = frac as f32 / 256.0;
    [
        (clamp_index(x0, src), 1.0 - t),
        (clamp_index(x0 + 1, src), t),
    ]
}

/// Four Catmull-Rom taps with weights summing to 1.
#[inline]
pub(crate) fn bicubic_taps(x: u32, src: u32, dst: u32) -> [(u32, f32); 4] {
    let (x0, frac) = fixed_position(x, src, dst);
    let t = frac as f32 / 256.0;
    let t2 = t * t;
    let t3 = t2 * t;
    [
        (clamp_index(x0 - 1, src), 0.5 * (-t + 2.0 * t2 - t3)),
        (clamp_index(x0, src), 0.5 * (2.0 - 5.0 * t2 + 3.0 * t3)),
        (clamp_index(x0 + 1, src), 0.5 * (t + 4.0 * t2 - 3.0 * t3)),
        (clamp_index(x0 + 2, src), 0.5 * (-t2 + t3)),
    ]
}

/// Normalised Lanczos taps for output index `x`. The support widens with the downscale ratio.
pub(crate) fn lanczos_taps(x: u32, src: u32, dst: u32) -> Vec<(u32, f32)> {
    let ratio = src as f32 / dst as f32;
    let scale = ratio.max(1.0);
    let support = LANCZOS_RADIUS * scale;
    let center = (x as f32 + 0.5) * ratio;

    let first = (center - support).floor() as i64;
    let last = (center + support).ceil() as i64;

    let mut taps = Vec::with_capacity((last - first + 1) as usize);
    let mut total = 0.0;
    for i in first..=last {
        let weight = lanczos((i as f32 + 0.5 - center) / scale);
        if weight != 0.0 {
            taps.push((clamp_index(i, src), weight));
            total += weight;
        }
    }

    if total != 0.0 {
        for (_, weight) in taps.iter_mut() {
            *weight /= total;
        }
    }
    taps
}

/// Per output index taps along one axis for any filter but [`FilterKind::Nearest`],
/// which is treated as a single full-weight tap.
pub(crate) fn axis_taps(filter: FilterKind, src: u32, dst: u32) -> Vec<Vec<(u32, f32)>> {
    (0..dst)
        .map(|x| match filter {
            FilterKind::Nearest => vec![(nearest_index(x, src, dst), 1.0)],
            FilterKind::Box => {
                let [x0, x1] = box_taps(x, src, dst);
                vec![(x0, 0.5), (x1, 0.5)]
            }
            FilterKind::Bilinear => bilinear_taps(x, src, dst).to_vec(),
            FilterKind::Bicubic => bicubic_taps(x, src, dst).to_vec(),
            FilterKind::Lanczos => lanczos_taps(x, src, dst),
        })
        .collect()
}

#[inline]
fn lanczos(x: f32) -> f32 {
    let x = x.abs();
    if x < 1e-6 {
        return 1.0;
    }
    if x >= LANCZOS_RADIUS {
        return 0.0;
    }
    let pix = PI * x;
    LANCZOS_RADIUS * pix.sin() * (pix / LANCZOS_RADIUS).sin() / (pix * pix)
}

#[inline]
fn clamp_index(i: i64, src: u32) -> u32 {
    i.clamp(0, src as i64 - 1) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("nearest", FilterKind::Nearest)]
    #[case("Box", FilterKind::Box)]
    #[case("BILINEAR", FilterKind::Bilinear)]
    #[case("cubic", FilterKind::Bicubic)]
    #[case("lanczos", FilterKind::Lanczos)]
    fn parses_names(#[case] name: &str, #[case] expected: FilterKind) {
        assert_eq!(name.parse::<FilterKind>(), Ok(expected));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for &filter in FilterKind::all_values() {
            assert_eq!(filter.to_string().parse::<FilterKind>(), Ok(filter));
        }
        assert!("mitchell".parse::<FilterKind>().is_err());
    }

    #[test]
    fn nearest_halving_picks_odd_texels() {
        let picked: Vec<u32> = (0..4).map(|x| nearest_index(x, 8, 4)).collect();
        assert_eq!(picked, [1, 3, 5, 7]);
    }

    #[test]
    fn box_taps_clamp_at_edge() {
        assert_eq!(box_taps(0, 4, 2), [0, 1]);
        assert_eq!(box_taps(1, 4, 2), [2, 3]);
        assert_eq!(box_taps(0, 1, 1), [0, 0]);
    }

    #[test]
    fn halving_positions_fall_between_pairs() {
        // Output texel 1 of 8 -> 4 sits between source 2 and 3.
        assert_eq!(fixed_position(1, 8, 4), (2, 128));
    }

    #[rstest]
    #[case(0)]
    #[case(3)]
    #[case(7)]
    fn weights_sum_to_one(#[case] x: u32) {
        let bicubic: f32 = bicubic_taps(x, 16, 8).iter().map(|(_, w)| w).sum();
        let bilinear: f32 = bilinear_taps(x, 16, 8).iter().map(|(_, w)| w).sum();
        let lanczos: f32 = lanczos_taps(x, 16, 8).iter().map(|(_, w)| w).sum();
        assert!((bicubic - 1.0).abs() < 1e-5);
        assert!((bilinear - 1.0).abs() < 1e-5);
        assert!((lanczos - 1.0).abs() < 1e-5);
    }

    #[test]
    fn lanczos_support_widens_with_ratio() {
        assert!(lanczos_taps(2, 32, 4).len() > lanczos_taps(2, 8, 4).len());
    }
}
