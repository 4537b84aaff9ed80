//! BC1 colour block encoder.

mod endpoints;
mod indices;
mod punch_through;
mod refine;
pub(crate) mod tables;

use crate::settings::ColorEncodeSettings;
use dxt_codec_common::block_4x4::Rgba4x4Block;
use endpoints::select_endpoints;
use indices::{dither_block, eval_palette, match_colors};
use punch_through::{encode_punch_through, has_transparent_texel};
use refine::refine_endpoints;
use tables::single_color_endpoints;

const REFINE_ITERATIONS: usize = 2;

/// Encodes 16 texels into an 8-byte BC1 colour block.
///
/// Opaque output is always stored in 4-colour mode (`c0 > c1`), or with `c0 == c1` when the
/// block reduces to a single endpoint. With [`ColorEncodeSettings::punch_through_alpha`],
/// blocks containing a texel with alpha below 128 are stored in 3-colour mode instead.
///
/// # Examples
///
/// ```
/// use dxt_codec_bc1::{encode_color_block, ColorEncodeSettings, EndpointStrategy};
/// use dxt_codec_common::prelude::*;
///
/// let mut block = Rgba4x4Block::new(Color8888::new(255, 0, 0, 255));
/// block.pixels[5] = Color8888::new(0, 0, 255, 255);
///
/// let settings = ColorEncodeSettings {
///     strategy: EndpointStrategy::Luminance,
///     ..Default::default()
/// };
/// let bytes = encode_color_block(&block, &settings);
/// assert_eq!(u16::from_le_bytes([bytes[0], bytes[1]]), 0xF800);
/// assert_eq!(u16::from_le_bytes([bytes[2], bytes[3]]), 0x001F);
/// ```
pub fn encode_color_block(block: &Rgba4x4Block, settings: &ColorEncodeSettings) -> [u8; 8] {
    let texels = &block.pixels;

    if settings.punch_through_alpha && has_transparent_texel(texels) {
        return encode_punch_through(texels);
    }

    let (mut max16, mut min16, mut mask);
    if block.has_identical_pixels_ignore_alpha() {
        (max16, min16) = single_color_endpoints(texels[0].r, texels[0].g, texels[0].b);
        mask = 0xAAAA_AAAA;
    } else {
        // Endpoints are fitted to the dithered copy, indices to the original texels.
        let dithered;
        let fit = if settings.dither {
            dithered = dither_block(texels);
            &dithered
        } else {
            texels
        };

        (max16, min16) = select_endpoints(fit, settings.strategy);
        mask = if max16 != min16 {
            match_colors(texels, &eval_palette(max16, min16), settings.dither)
        } else {
            0
        };

        for _ in 0..REFINE_ITERATIONS {
            let last_mask = mask;
            let (new_max, new_min, changed) = refine_endpoints(fit, max16, min16, mask);
            (max16, min16) = (new_max, new_min);
            if changed {
                if max16 != min16 {
                    mask = match_colors(texels, &eval_palette(max16, min16), settings.dither);
                } else {
                    mask = 0;
                    break;
                }
            }
            if mask == last_mask {
                break;
            }
        }
    }

    if max16 < min16 {
        core::mem::swap(&mut max16, &mut min16);
        mask ^= 0x5555_5555;
    }

    let mut out = [0u8; 8];
    out[0..2].copy_from_slice(&max16.to_le_bytes());
    out[2..4].copy_from_slice(&min16.to_le_bytes());
    out[4..8].copy_from_slice(&mask.to_le_bytes());
    out
}
