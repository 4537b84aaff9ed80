//! Single-step resampling of images and volumes.
//!
//! Every filter except [`FilterKind::Nearest`] runs as separable passes over an `f32` copy of
//! the source in the filtering domain: depth (volumes only), then vertical into a
//! `src_width x dst_height` temporary, then horizontal. For the box, bilinear and bicubic
//! kernels this is the same as summing their 2D (or 3D) tap products directly.

use crate::filter::{axis_taps, nearest_index, FilterKind};
use crate::gamma::GammaCurve;
use dxt_codec_common::error::ImageError;
use dxt_codec_common::image::Image;
use dxt_codec_common::volume::Volume;

type Taps = Vec<Vec<(u32, f32)>>;

/// Resamples `image` to `width x height`.
///
/// # Errors
///
/// [`ImageError::ZeroDimensions`] if the target size is zero on either axis.
pub fn scale_image(
    image: &Image,
    width: u32,
    height: u32,
    filter: FilterKind,
    gamma: Option<f32>,
) -> Result<Image, ImageError> {
    if width == 0 || height == 0 {
        return Err(ImageError::ZeroDimensions { width, height });
    }
    Ok(resample_image(
        image,
        width,
        height,
        filter,
        &GammaCurve::new(gamma),
    ))
}

/// Resamples `volume` to `width x height x depth`.
///
/// # Errors
///
/// [`ImageError::ZeroDimensions`] or [`ImageError::ZeroDepth`] for an empty target.
pub fn scale_volume(
    volume: &Volume,
    width: u32,
    height: u32,
    depth: u32,
    filter: FilterKind,
    gamma: Option<f32>,
) -> Result<Volume, ImageError> {
    if width == 0 || height == 0 {
        return Err(ImageError::ZeroDimensions { width, height });
    }
    if depth == 0 {
        return Err(ImageError::ZeroDepth);
    }
    Ok(resample_volume(
        volume,
        width,
        height,
        depth,
        filter,
        &GammaCurve::new(gamma),
    ))
}

pub(crate) fn resample_image(
    src: &Image,
    width: u32,
    height: u32,
    filter: FilterKind,
    curve: &GammaCurve,
) -> Image {
    let mut out = src.blank_like(width, height);
    let (width, height) = (out.width(), out.height());
    let channels = src.channels() as usize;

    if filter == FilterKind::Nearest {
        let dst = out.data_mut();
        for y in 0..height {
            let sy = nearest_index(y, src.height(), height);
            for x in 0..width {
                let sx = nearest_index(x, src.width(), width);
                let offset = (y as usize * width as usize + x as usize) * channels;
                dst[offset..offset + channels].copy_from_slice(src.texel(sx, sy));
            }
        }
        return out;
    }

    let plane = Plane {
        width: src.width(),
        height: src.height(),
        channels,
    };
    let rows = axis_taps(filter, src.height(), height);
    let cols = axis_taps(filter, src.width(), width);
    let linear = curve.linearise(src.data());
    resample_plane(&linear, plane, &rows, &cols, out.data_mut(), curve);
    out
}

pub(crate) fn resample_volume(
    src: &Volume,
    width: u32,
    height: u32,
    depth: u32,
    filter: FilterKind,
    curve: &GammaCurve,
) -> Volume {
    let mut out = src.blank_like(width, height, depth);
    let (width, height, depth) = (out.width(), out.height(), out.depth());
    let channels = src.channels() as usize;
    let dst_slice_len = out.slice_len();

    if filter == FilterKind::Nearest {
        let dst = out.data_mut();
        for z in 0..depth {
            let sz = nearest_index(z, src.depth(), depth);
            let src_slice = src.slice_data(sz);
            for y in 0..height {
                let sy = nearest_index(y, src.height(), height);
                for x in 0..width {
                    let sx = nearest_index(x, src.width(), width);
                    let from = (sy as usize * src.width() as usize + sx as usize) * channels;
                    let to = z as usize * dst_slice_len
                        + (y as usize * width as usize + x as usize) * channels;
                    dst[to..to + channels].copy_from_slice(&src_slice[from..from + channels]);
                }
            }
        }
        return out;
    }

    // Depth pass: one filtered source-sized slice per output slice.
    let src_slice_len = src.slice_len();
    let linear = curve.linearise(src.data());
    let depth_taps = axis_taps(filter, src.depth(), depth);
    let mut slices = vec![0f32; src_slice_len * depth as usize];
    for (slice, taps) in slices.chunks_exact_mut(src_slice_len).zip(depth_taps.iter()) {
        for &(sz, weight) in taps {
            let from = &linear[sz as usize * src_slice_len..(sz as usize + 1) * src_slice_len];
            for (acc, &v) in slice.iter_mut().zip(from.iter()) {
                *acc += weight * v;
            }
        }
    }

    let plane = Plane {
        width: src.width(),
        height: src.height(),
        channels,
    };
    let rows = axis_taps(filter, src.height(), height);
    let cols = axis_taps(filter, src.width(), width);
    for (slice, dst) in slices
        .chunks_exact(src_slice_len)
        .zip(out.data_mut().chunks_exact_mut(dst_slice_len))
    {
        resample_plane(slice, plane, &rows, &cols, dst, curve);
    }
    out
}

#[derive(Clone, Copy)]
struct Plane {
    width: u32,
    height: u32,
    channels: usize,
}

/// Vertical pass into a `src.width x dst_height` temporary, then horizontal pass into `dst`.
fn resample_plane(
    linear: &[f32],
    src: Plane,
    rows: &Taps,
    cols: &Taps,
    dst: &mut [u8],
    curve: &GammaCurve,
) {
    let channels = src.channels;
    let src_stride = src.width as usize * channels;
    debug_assert_eq!(linear.len(), src_stride * src.height as usize);

    let mut tmp = vec![0f32; src_stride * rows.len()];
    for (row, taps) in tmp.chunks_exact_mut(src_stride).zip(rows.iter()) {
        for &(sy, weight) in taps {
            let from = &linear[sy as usize * src_stride..(sy as usize + 1) * src_stride];
            for (acc, &v) in row.iter_mut().zip(from.iter()) {
                *acc += weight * v;
            }
        }
    }

    let dst_stride = cols.len() * channels;
    for (row, out_row) in tmp
        .chunks_exact(src_stride)
        .zip(dst.chunks_exact_mut(dst_stride))
    {
        for (taps, out_texel) in cols.iter().zip(out_row.chunks_exact_mut(channels)) {
            for (c, out) in out_texel.iter_mut().enumerate() {
                let acc: f32 = taps
                    .iter()
                    .map(|&(sx, weight)| weight * row[sx as usize * channels + c])
                    .sum();
                *out = curve.from_linear(acc);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dxt_codec_common::color_8888::Color8888;
    use rstest::rstest;

    fn checker(width: u32, height: u32) -> Image {
        Image::from_fn(width, height, |x, y| {
            let v = if (x + y) % 2 == 0 { 255 } else { 0 };
            Color8888::new(v, v, v, 255)
        })
        .unwrap()
    }

    #[test]
    fn rejects_empty_target() {
        let image = checker(4, 4);
        assert_eq!(
            scale_image(&image, 0, 2, FilterKind::Box, None),
            Err(ImageError::ZeroDimensions {
                width: 0,
                height: 2
            })
        );
    }

    #[rstest]
    #[case(FilterKind::Nearest)]
    #[case(FilterKind::Box)]
    #[case(FilterKind::Bilinear)]
    #[case(FilterKind::Bicubic)]
    #[case(FilterKind::Lanczos)]
    fn flat_image_stays_flat(#[case] filter: FilterKind) {
        let image = Image::new(8, 6, 3, [40u8, 120, 200].repeat(48)).unwrap();
        for gamma in [None, Some(2.2)] {
            let scaled = scale_image(&image, 4, 3, filter, gamma).unwrap();
            assert_eq!(scaled.channels(), 3);
            for texel in scaled.data().chunks_exact(3) {
                for (&got, want) in texel.iter().zip([40u8, 120, 200]) {
                    assert!(got.abs_diff(want) <= 1, "{filter:?} {gamma:?}: {got} vs {want}");
                }
            }
        }
    }

    #[test]
    fn box_halving_averages_checkerboard() {
        let scaled = scale_image(&checker(4, 4), 2, 2, FilterKind::Box, None).unwrap();
        for texel in scaled.data().chunks_exact(4) {
            assert_eq!(texel[0], 128);
            assert_eq!(texel[3], 255);
        }
    }

    #[test]
    fn gamma_brightens_averaged_checkerboard() {
        let plain = scale_image(&checker(4, 4), 2, 2, FilterKind::Box, None).unwrap();
        let corrected = scale_image(&checker(4, 4), 2, 2, FilterKind::Box, Some(2.2)).unwrap();
        assert!(corrected.data()[0] > plain.data()[0]);
    }

    #[test]
    fn nearest_copies_source_samples() {
        let image = Image::new(4, 1, 1, vec![10, 20, 30, 40]).unwrap();
        let scaled = scale_image(&image, 2, 1, FilterKind::Nearest, Some(2.2)).unwrap();
        assert_eq!(scaled.data(), &[20, 40]);
    }

    #[test]
    fn every_filter_handles_one_texel_sources() {
        let image = Image::new(1, 1, 2, vec![9, 99]).unwrap();
        for &filter in FilterKind::all_values() {
            let scaled = scale_image(&image, 1, 1, filter, None).unwrap();
            assert_eq!(scaled.data(), &[9, 99], "{filter:?}");
        }
    }

    #[rstest]
    #[case(FilterKind::Nearest)]
    #[case(FilterKind::Box)]
    #[case(FilterKind::Bilinear)]
    #[case(FilterKind::Bicubic)]
    #[case(FilterKind::Lanczos)]
    fn volume_flat_stays_flat(#[case] filter: FilterKind) {
        let volume = Volume::new(4, 4, 4, 1, vec![77; 64]).unwrap();
        let scaled = scale_volume(&volume, 2, 2, 2, filter, Some(2.2)).unwrap();
        assert_eq!((scaled.width(), scaled.height(), scaled.depth()), (2, 2, 2));
        assert!(scaled.data().iter().all(|v| v.abs_diff(77) <= 1));
    }

    #[test]
    fn volume_box_averages_across_slices() {
        let mut data = vec![0u8; 2 * 2];
        data.extend_from_slice(&[200; 4]);
        let volume = Volume::new(2, 2, 2, 1, data).unwrap();
        let scaled = scale_volume(&volume, 1, 1, 1, FilterKind::Box, None).unwrap();
        assert_eq!(scaled.data(), &[100]);
    }
}
