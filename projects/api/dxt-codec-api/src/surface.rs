//! Encoding and decoding of one surface (a single mip level or volume slice).
//!
//! Work is split by block row. With the `multithreaded` feature the rows are spread over
//! the rayon pool; every block still lands at `(by * blocks_wide + bx) * bytes_per_block`,
//! so the output does not depend on scheduling.

use crate::block::{decode_block, encode_block, reconstruct_normal_z};
use dxt_codec_bc1::ColorEncodeSettings;
use dxt_codec_bc4::encode_interpolated_alpha;
use dxt_codec_common::error::ImageError;
use dxt_codec_common::extract::{block_span, extract_block, extract_channel_block};
use dxt_codec_common::format::{Format, FormatDescriptor, Swizzle};
use dxt_codec_common::image::Image;

#[cfg(feature = "multithreaded")]
use rayon::prelude::*;

/// Encodes `image` into `out`, which must be exactly one level's worth of blocks.
pub(crate) fn encode_surface(
    image: &Image,
    descriptor: &FormatDescriptor,
    settings: &ColorEncodeSettings,
    out: &mut [u8],
) {
    debug_assert_eq!(out.len(), descriptor.level_size(image.width(), image.height()));
    let block_size = descriptor.bytes_per_block;
    let row_len = descriptor.blocks_wide(image.width()) * block_size;

    #[cfg(feature = "multithreaded")]
    let rows = out.par_chunks_mut(row_len);
    #[cfg(not(feature = "multithreaded"))]
    let rows = out.chunks_mut(row_len);

    rows.enumerate().for_each(|(by, row)| {
        let by = by as u32;
        for (bx, dst) in row.chunks_exact_mut(block_size).enumerate() {
            let bx = bx as u32;
            if descriptor.format == Format::Bc4 && descriptor.swizzle == Swizzle::None {
                let values = extract_channel_block(image, bx, by, 0);
                dst.copy_from_slice(&encode_interpolated_alpha(&values));
            } else {
                encode_block(descriptor, &extract_block(image, bx, by), settings, dst);
            }
        }
    });
}

/// Decodes one `width x height` level from `data` into an RGBA image.
pub(crate) fn decode_surface(
    data: &[u8],
    descriptor: &FormatDescriptor,
    width: u32,
    height: u32,
    normal_map: bool,
) -> Result<Image, ImageError> {
    let block_size = descriptor.bytes_per_block;
    let row_len = descriptor.blocks_wide(width) * block_size;
    let stride = width as usize * 4;
    let mut pixels = vec![0u8; stride * height as usize];

    // Four texel rows per block row; the last chunk is shorter for partial blocks.
    #[cfg(feature = "multithreaded")]
    let rows = pixels.par_chunks_mut(stride * 4);
    #[cfg(not(feature = "multithreaded"))]
    let rows = pixels.chunks_mut(stride * 4);

    rows.enumerate().for_each(|(by, texel_rows)| {
        let src_row = &data[by * row_len..(by + 1) * row_len];
        let span_y = texel_rows.len() / stride;

        for (bx, src) in src_row.chunks_exact(block_size).enumerate() {
            let mut block = decode_block(descriptor, src);
            if normal_map {
                reconstruct_normal_z(&mut block);
            }

            let span_x = block_span(width, bx as u32) as usize;
            for y in 0..span_y {
                let start = y * stride + bx * 16;
                let dst = &mut texel_rows[start..start + span_x * 4];
                for (x, texel) in dst.chunks_exact_mut(4).enumerate() {
                    texel.copy_from_slice(&block.pixels[y * 4 + x].to_array());
                }
            }
        }
    });

    Image::from_rgba(width, height, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::compress_block;
    use crate::test_prelude::*;

    #[rstest]
    #[case(Format::Bc1, 13, 9)]
    #[case(Format::Bc3, 8, 8)]
    #[case(Format::Bc4, 13, 9)]
    #[case(Format::Bc5, 5, 3)]
    #[case(Format::Rxgb, 7, 7)]
    #[case(Format::YCoCgScaled, 16, 4)]
    fn matches_block_by_block_encoding(
        #[case] format: Format,
        #[case] width: u32,
        #[case] height: u32,
    ) {
        let image = gradient_image(width, height);
        let descriptor = FormatDescriptor::of(format);
        let settings = ColorEncodeSettings::default();

        let mut parallel = vec![0u8; descriptor.level_size(width, height)];
        encode_surface(&image, &descriptor, &settings, &mut parallel);

        let mut sequential = Vec::new();
        for by in 0..descriptor.blocks_high(height) as u32 {
            for bx in 0..descriptor.blocks_wide(width) as u32 {
                let block = extract_block(&image, bx, by);
                let encoded = compress_block(&descriptor, &block, &settings);
                sequential.extend_from_slice(encoded.as_bytes());
            }
        }
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn decode_crops_partial_blocks() {
        let image = gradient_image(6, 5);
        let descriptor = FormatDescriptor::of(Format::Bc3);
        let mut encoded = vec![0u8; descriptor.level_size(6, 5)];
        encode_surface(&image, &descriptor, &Default::default(), &mut encoded);

        let decoded = decode_surface(&encoded, &descriptor, 6, 5, false).unwrap();
        assert_eq!((decoded.width(), decoded.height(), decoded.channels()), (6, 5, 4));
        for y in 0..5 {
            for x in 0..6 {
                let (src, dst) = (image.texel_rgba(x, y), decoded.texel_rgba(x, y));
                assert!(src.max_channel_difference(&dst) <= 20, "({x}, {y})");
            }
        }
    }
}
