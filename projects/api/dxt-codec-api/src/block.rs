//! Per-format dispatch for single blocks, including the swizzles of the DXT5 variants.

use dxt_codec_bc1::{decode_bc1_block, encode_color_block, ColorEncodeSettings};
use dxt_codec_bc2::{decode_bc2_block, encode_bc2_block};
use dxt_codec_bc3::{decode_bc3_block, encode_bc3_block};
use dxt_codec_bc4::{decode_bc4_block, decode_bc5_block, encode_bc4_block, encode_bc5_block};
use dxt_codec_common::block_4x4::Rgba4x4Block;
use dxt_codec_common::format::{Format, FormatDescriptor, Swizzle};
use dxt_codec_ycocg::{decode_ycocg_block, encode_ycocg_block, ChromaScale};

/// One encoded block: 8 bytes for BC1/BC4, 16 bytes for everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodedBlock {
    /// An 8-byte block (BC1, BC1a, BC4).
    Half([u8; 8]),
    /// A 16-byte block (BC2, BC3 and its variants, BC5, YCoCg).
    Full([u8; 16]),
}

impl EncodedBlock {
    /// The encoded bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            EncodedBlock::Half(bytes) => bytes,
            EncodedBlock::Full(bytes) => bytes,
        }
    }
}

/// Encodes one block in the format `descriptor` describes.
///
/// The descriptor's [`Swizzle`] is applied first: [`Swizzle::NormalXy`] stores X (red) in
/// alpha and Y in green, [`Swizzle::AlphaRed`] moves red to alpha. [`Format::Bc1a`] always
/// uses punch-through alpha and [`Format::Bc1`] never does, whatever `settings` says.
pub fn compress_block(
    descriptor: &FormatDescriptor,
    block: &Rgba4x4Block,
    settings: &ColorEncodeSettings,
) -> EncodedBlock {
    let with_punch_through = |punch_through_alpha| ColorEncodeSettings {
        punch_through_alpha,
        ..*settings
    };
    let block = &swizzle(descriptor.swizzle, block);

    match descriptor.format {
        Format::Bc1 => EncodedBlock::Half(encode_color_block(block, &with_punch_through(false))),
        Format::Bc1a => EncodedBlock::Half(encode_color_block(block, &with_punch_through(true))),
        Format::Bc2 => EncodedBlock::Full(encode_bc2_block(block, settings)),
        Format::Bc3 | Format::Bc3n | Format::Rxgb => {
            EncodedBlock::Full(encode_bc3_block(block, settings))
        }
        Format::Bc4 => EncodedBlock::Half(encode_bc4_block(block)),
        Format::Bc5 => EncodedBlock::Full(encode_bc5_block(block)),
        Format::YCoCg => EncodedBlock::Full(encode_ycocg_block(block, ChromaScale::Fixed)),
        Format::YCoCgScaled => {
            EncodedBlock::Full(encode_ycocg_block(block, ChromaScale::Adaptive))
        }
    }
}

/// Encodes one block into the start of `out`.
///
/// # Panics
///
/// If `out` is shorter than the format's block size.
#[inline]
pub fn encode_block(
    descriptor: &FormatDescriptor,
    block: &Rgba4x4Block,
    settings: &ColorEncodeSettings,
    out: &mut [u8],
) {
    let encoded = compress_block(descriptor, block, settings);
    let bytes = encoded.as_bytes();
    out[..bytes.len()].copy_from_slice(bytes);
}

/// Decodes one block from the start of `bytes`, undoing the descriptor's swizzle.
///
/// # Panics
///
/// If `bytes` is shorter than the format's block size.
pub fn decode_block(descriptor: &FormatDescriptor, bytes: &[u8]) -> Rgba4x4Block {
    let block = match descriptor.format {
        Format::Bc1 | Format::Bc1a => decode_bc1_block(&head(bytes)),
        Format::Bc2 => decode_bc2_block(&head(bytes)),
        Format::Bc3 | Format::Bc3n | Format::Rxgb => decode_bc3_block(&head(bytes)),
        Format::Bc4 => decode_bc4_block(&head(bytes)),
        Format::Bc5 => decode_bc5_block(&head(bytes)),
        Format::YCoCg | Format::YCoCgScaled => decode_ycocg_block(&head(bytes)),
    };
    unswizzle(descriptor.swizzle, block)
}

/// Rebuilds the Z component of a tangent-space normal in blue from X (red) and Y (green).
///
/// Alpha is set to 255.
pub fn reconstruct_normal_z(block: &mut Rgba4x4Block) {
    for pixel in block.pixels.iter_mut() {
        let x = pixel.r as f32 / 127.5 - 1.0;
        let y = pixel.g as f32 / 127.5 - 1.0;
        let z = (1.0 - x * x - y * y).max(0.0).sqrt();
        pixel.b = ((z + 1.0) * 127.5).round().min(255.0) as u8;
        pixel.a = 255;
    }
}

#[inline]
fn head<const N: usize>(bytes: &[u8]) -> [u8; N] {
    core::array::from_fn(|i| bytes[i])
}

// YCoCg is converted inside its block coder.
fn swizzle(swizzle: Swizzle, block: &Rgba4x4Block) -> Rgba4x4Block {
    match swizzle {
        Swizzle::NormalXy => swizzle_normal_xy(block),
        Swizzle::AlphaRed => swizzle_alpha_red(block),
        Swizzle::None | Swizzle::YCoCg => *block,
    }
}

fn unswizzle(swizzle: Swizzle, block: Rgba4x4Block) -> Rgba4x4Block {
    match swizzle {
        Swizzle::NormalXy => unswizzle_normal_xy(block),
        Swizzle::AlphaRed => unswizzle_alpha_red(block),
        Swizzle::None | Swizzle::YCoCg => block,
    }
}

fn swizzle_normal_xy(block: &Rgba4x4Block) -> Rgba4x4Block {
    let mut out = *block;
    for pixel in out.pixels.iter_mut() {
        (pixel.r, pixel.b, pixel.a) = (0, 0, pixel.r);
    }
    out
}

fn unswizzle_normal_xy(mut block: Rgba4x4Block) -> Rgba4x4Block {
    for pixel in block.pixels.iter_mut() {
        (pixel.r, pixel.b, pixel.a) = (pixel.a, 0, 255);
    }
    block
}

fn swizzle_alpha_red(block: &Rgba4x4Block) -> Rgba4x4Block {
    let mut out = *block;
    for pixel in out.pixels.iter_mut() {
        (pixel.r, pixel.a) = (0, pixel.r);
    }
    out
}

fn unswizzle_alpha_red(mut block: Rgba4x4Block) -> Rgba4x4Block {
    for pixel in block.pixels.iter_mut() {
        (pixel.r, pixel.a) = (pixel.a, 255);
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(Format::Bc1, 20)]
    #[case(Format::Bc1a, 20)]
    #[case(Format::Bc2, 20)]
    #[case(Format::Bc3, 20)]
    #[case(Format::Rxgb, 20)]
    #[case(Format::YCoCg, 24)]
    #[case(Format::YCoCgScaled, 24)]
    fn colour_round_trips_within_tolerance(#[case] format: Format, #[case] tolerance: u8) {
        let block = gradient_block();
        let descriptor = FormatDescriptor::of(format);
        let mut out = [0u8; 16];
        encode_block(&descriptor, &block, &Default::default(), &mut out);
        let decoded = decode_block(&descriptor, &out);

        for (src, dst) in block.pixels.iter().zip(decoded.pixels.iter()) {
            let error = src.without_alpha().max_channel_difference(&dst.without_alpha());
            assert!(error <= tolerance, "{format}: error {error}");
        }
    }

    #[rstest]
    #[case(Format::Bc1, 8)]
    #[case(Format::Bc1a, 8)]
    #[case(Format::Bc4, 8)]
    #[case(Format::Bc2, 16)]
    #[case(Format::Bc3n, 16)]
    #[case(Format::Bc5, 16)]
    #[case(Format::YCoCgScaled, 16)]
    fn block_size_matches_descriptor(#[case] format: Format, #[case] size: usize) {
        let descriptor = FormatDescriptor::of(format);
        let encoded = compress_block(&descriptor, &gradient_block(), &Default::default());
        assert_eq!(encoded.as_bytes().len(), size);
        assert_eq!(descriptor.bytes_per_block, size);
    }

    #[test]
    fn bc3n_keeps_x_and_y() {
        let block = gradient_block();
        let descriptor = FormatDescriptor::of(Format::Bc3n);
        let bytes = compress_block(&descriptor, &block, &Default::default());
        let decoded = decode_block(&descriptor, bytes.as_bytes());

        for (src, dst) in block.pixels.iter().zip(decoded.pixels.iter()) {
            assert!(src.r.abs_diff(dst.r) <= 6, "x");
            assert!(src.g.abs_diff(dst.g) <= 20, "y");
            assert_eq!((dst.b, dst.a), (0, 255));
        }
    }

    #[test]
    fn rxgb_keeps_red_in_alpha_precision() {
        let block = gradient_block();
        let descriptor = FormatDescriptor::of(Format::Rxgb);
        let bytes = compress_block(&descriptor, &block, &Default::default());
        let decoded = decode_block(&descriptor, bytes.as_bytes());

        for (src, dst) in block.pixels.iter().zip(decoded.pixels.iter()) {
            assert!(src.r.abs_diff(dst.r) <= 6);
            assert_eq!(dst.a, 255);
        }
    }

    #[test]
    fn bc1_ignores_punch_through_setting() {
        let mut block = gradient_block();
        block.pixels[0].a = 0;
        let settings = ColorEncodeSettings {
            punch_through_alpha: true,
            ..Default::default()
        };
        let opaque = compress_block(&FormatDescriptor::of(Format::Bc1), &block, &settings);
        let decoded = decode_block(&FormatDescriptor::of(Format::Bc1), opaque.as_bytes());
        assert!(decoded.pixels.iter().all(|p| p.a == 255));

        let bc1a = FormatDescriptor::of(Format::Bc1a);
        let punched = compress_block(&bc1a, &block, &Default::default());
        let decoded = decode_block(&bc1a, punched.as_bytes());
        assert_eq!(decoded.pixels[0].a, 0);
    }

    #[test]
    fn swizzle_follows_the_descriptor() {
        // A plain BC3 descriptor carrying the RXGB swizzle codes exactly like RXGB.
        let custom = FormatDescriptor {
            swizzle: Swizzle::AlphaRed,
            ..FormatDescriptor::of(Format::Bc3)
        };
        let rxgb = FormatDescriptor::of(Format::Rxgb);
        let block = gradient_block();

        let encoded = compress_block(&custom, &block, &Default::default());
        assert_eq!(encoded, compress_block(&rxgb, &block, &Default::default()));
        assert_eq!(
            decode_block(&custom, encoded.as_bytes()),
            decode_block(&rxgb, encoded.as_bytes())
        );

        let plain = decode_block(&FormatDescriptor::of(Format::Bc3), encoded.as_bytes());
        assert!(plain.pixels.iter().all(|p| p.r == 0));
    }

    #[rstest]
    #[case(Color8888::new(128, 128, 0, 0), 255)]
    #[case(Color8888::new(255, 128, 0, 0), 128)]
    #[case(Color8888::new(0, 0, 0, 0), 128)]
    fn rebuilds_normal_z(#[case] texel: Color8888, #[case] blue: u8) {
        let mut block = Rgba4x4Block::new(texel);
        reconstruct_normal_z(&mut block);
        assert!(block.pixels.iter().all(|p| p.b == blue && p.a == 255));
    }
}
