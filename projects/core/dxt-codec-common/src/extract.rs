//! Block extractor: cuts 4x4 blocks out of an [`Image`].
//!
//! Images whose sides are not a multiple of 4 produce partial blocks along the right and
//! bottom edges. Texels past the edge repeat the last valid row/column, so a block with a
//! valid span `s` on an axis reads source index `min(i, s - 1)` for in-block index `i`.

use crate::block_4x4::Rgba4x4Block;
use crate::image::Image;

/// Number of valid texels (1-4) along one axis of block `block` for an image side of `extent`.
///
/// # Examples
///
/// ```
/// use dxt_codec_common::extract::block_span;
///
/// assert_eq!(block_span(10, 0), 4);
/// assert_eq!(block_span(10, 2), 2);
/// assert_eq!(block_span(1, 0), 1);
/// ```
#[inline]
pub fn block_span(extent: u32, block: u32) -> u32 {
    extent.saturating_sub(block * 4).clamp(1, 4)
}

/// Reads block `(bx, by)` of `image` as RGBA texels, replicating edge texels where the
/// block hangs over the image border.
pub fn extract_block(image: &Image, bx: u32, by: u32) -> Rgba4x4Block {
    let span_x = block_span(image.width(), bx);
    let span_y = block_span(image.height(), by);

    let mut block = Rgba4x4Block::default();
    for y in 0..4u32 {
        let src_y = by * 4 + y.min(span_y - 1);
        for x in 0..4u32 {
            let src_x = bx * 4 + x.min(span_x - 1);
            block.pixels[(y * 4 + x) as usize] = image.texel_rgba(src_x, src_y);
        }
    }

    block
}

/// Reads one channel (0 = R, 1 = G, 2 = B, 3 = A, after RGBA promotion) of block
/// `(bx, by)` with the same edge replication as [`extract_block`].
pub fn extract_channel_block(image: &Image, bx: u32, by: u32, channel: usize) -> [u8; 16] {
    let span_x = block_span(image.width(), bx);
    let span_y = block_span(image.height(), by);

    let mut out = [0u8; 16];
    for y in 0..4u32 {
        let src_y = by * 4 + y.min(span_y - 1);
        for x in 0..4u32 {
            let src_x = bx * 4 + x.min(span_x - 1);
            out[(y * 4 + x) as usize] = image.texel_rgba(src_x, src_y).channel(channel);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color_8888::Color8888;
    use rstest::rstest;

    fn coordinate_image(width: u32, height: u32) -> Image {
        Image::from_fn(width, height, |x, y| Color8888::new(x as u8, y as u8, 0, 255)).unwrap()
    }

    #[rstest]
    #[case(4, 0, 4)]
    #[case(5, 1, 1)]
    #[case(7, 1, 3)]
    #[case(8, 1, 4)]
    #[case(3, 0, 3)]
    fn span_is_clamped(#[case] extent: u32, #[case] block: u32, #[case] expected: u32) {
        assert_eq!(block_span(extent, block), expected);
    }

    #[test]
    fn full_block_copies_texels() {
        let image = coordinate_image(8, 8);
        let block = extract_block(&image, 1, 1);
        assert_eq!(block.get_pixel(0, 0), Color8888::new(4, 4, 0, 255));
        assert_eq!(block.get_pixel(3, 2), Color8888::new(7, 6, 0, 255));
    }

    #[test]
    fn partial_block_replicates_last_row_and_column() {
        let image = coordinate_image(6, 5);
        let block = extract_block(&image, 1, 1);

        // Valid span is 2 wide, 1 high.
        for y in 0..4 {
            for x in 0..4 {
                let expected_x = 4 + x.min(1) as u8;
                assert_eq!(block.get_pixel(x, y), Color8888::new(expected_x, 4, 0, 255));
            }
        }
    }

    #[test]
    fn single_texel_image_fills_block() {
        let image = Image::new(1, 1, 1, vec![77]).unwrap();
        let block = extract_block(&image, 0, 0);
        assert_eq!(block, Rgba4x4Block::new(Color8888::new(77, 77, 77, 255)));
        assert_eq!(extract_channel_block(&image, 0, 0, 3), [255; 16]);
    }

    #[test]
    fn channel_block_matches_rgba_block() {
        let image = coordinate_image(5, 6);
        let block = extract_block(&image, 1, 1);
        assert_eq!(extract_channel_block(&image, 1, 1, 0), block.channel(0));
        assert_eq!(extract_channel_block(&image, 1, 1, 1), block.channel(1));
    }
}
