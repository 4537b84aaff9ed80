//! # 4x4 Blocks
//!
//! [`Rgba4x4Block`] is the unit every encoder in this workspace consumes and every decoder
//! produces: 16 RGBA texels of a single block, in row-major order.
//!
//! ```text
//! [ 0] [ 1] [ 2] [ 3]
//! [ 4] [ 5] [ 6] [ 7]
//! [ 8] [ 9] [10] [11]
//! [12] [13] [14] [15]
//! ```
//!
//! ```
//! use dxt_codec_common::color_8888::Color8888;
//! use dxt_codec_common::block_4x4::Rgba4x4Block;
//!
//! let red_pixel = Color8888::new(255, 0, 0, 255);
//! let block = Rgba4x4Block::new(red_pixel);
//! assert!(block.has_identical_pixels());
//! assert_eq!(block.channel(0), [255; 16]);
//! ```

use crate::color_8888::Color8888;

/// A 4x4 block of RGBA texels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba4x4Block {
    /// The 16 pixels in the block (row-major order)
    /// (i.e. `pixels[0]` is top-left, `pixels[3]` is top-right, etc.)
    pub pixels: [Color8888; 16],
}

impl Rgba4x4Block {
    /// Constructs a block where every pixel is set to `pixel`.
    pub const fn new(pixel: Color8888) -> Self {
        Self {
            pixels: [pixel; 16],
        }
    }

    /// Constructs a block from 16 row-major pixels.
    pub const fn from_pixels(pixels: [Color8888; 16]) -> Self {
        Self { pixels }
    }

    /// Gets the pixel at `(x, y)`, both in `0..4`.
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> Color8888 {
        self.pixels[y * 4 + x]
    }

    /// Sets the pixel at `(x, y)`, both in `0..4`.
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: Color8888) {
        self.pixels[y * 4 + x] = pixel;
    }

    /// Returns a single channel (0 = R, 1 = G, 2 = B, 3 = A) of every texel.
    #[inline]
    pub fn channel(&self, index: usize) -> [u8; 16] {
        let mut out = [0u8; 16];
        for (dst, pixel) in out.iter_mut().zip(self.pixels.iter()) {
            *dst = pixel.channel(index);
        }
        out
    }

    /// Overwrites a single channel of every texel.
    #[inline]
    pub fn set_channel(&mut self, index: usize, values: &[u8; 16]) {
        for (pixel, &value) in self.pixels.iter_mut().zip(values.iter()) {
            match index {
                0 => pixel.r = value,
                1 => pixel.g = value,
                2 => pixel.b = value,
                _ => pixel.a = value,
            }
        }
    }

    /// Checks if all pixels in the block are identical, alpha included.
    #[inline]
    pub fn has_identical_pixels(&self) -> bool {
        let first = self.pixels[0];
        self.pixels.iter().all(|pixel| *pixel == first)
    }

    /// Checks if all pixels in the block have the same colour, ignoring alpha.
    #[inline]
    pub fn has_identical_pixels_ignore_alpha(&self) -> bool {
        let first = self.pixels[0].without_alpha();
        self.pixels
            .iter()
            .all(|pixel| pixel.without_alpha() == first)
    }

    /// Checks if all pixels in the block have the same alpha values
    #[inline]
    pub fn has_identical_alpha(&self) -> bool {
        let first = self.pixels[0].a;
        self.pixels.iter().all(|pixel| pixel.a == first)
    }

    /// Largest per-channel difference between matching texels of two blocks.
    pub fn max_difference(&self, other: &Self) -> u8 {
        self.pixels
            .iter()
            .zip(other.pixels.iter())
            .map(|(a, b)| a.max_channel_difference(b))
            .max()
            .unwrap_or(0)
    }
}
