//! Raster images with 8-bit samples.
//!
//! Channel order is fixed by the channel count: 1 = L, 2 = LA, 3 = RGB, 4 = RGBA.
//! Samples are stored row by row with no padding between rows.

use crate::color_8888::Color8888;
use crate::error::ImageError;

/// An owned 2D image with 1 to 4 interleaved 8-bit channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    channels: u8,
    data: Vec<u8>,
}

impl Image {
    /// Creates an image, validating the dimensions and the sample buffer length.
    ///
    /// # Errors
    ///
    /// - [`ImageError::ZeroDimensions`] if `width` or `height` is zero.
    /// - [`ImageError::UnsupportedChannelCount`] if `channels` is not in `1..=4`.
    /// - [`ImageError::LengthMismatch`] if `data.len() != width * height * channels`.
    pub fn new(width: u32, height: u32, channels: u8, data: Vec<u8>) -> Result<Self, ImageError> {
        let expected = validate_layout(width, height, 1, channels)?;
        if data.len() != expected {
            return Err(ImageError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Assembles an image whose layout the caller has already validated.
    pub(crate) fn from_validated_parts(width: u32, height: u32, channels: u8, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize * channels as usize);
        Self {
            width,
            height,
            channels,
            data,
        }
    }

    /// Creates an RGBA image from interleaved RGBA samples.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self, ImageError> {
        Self::new(width, height, 4, data)
    }

    /// Creates an RGBA image where every texel comes from `f(x, y)`.
    pub fn from_fn(
        width: u32,
        height: u32,
        mut f: impl FnMut(u32, u32) -> Color8888,
    ) -> Result<Self, ImageError> {
        validate_layout(width, height, 1, 4)?;
        let mut data = Vec::with_capacity(width as usize * height as usize * 4);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y).to_array());
            }
        }
        Self::new(width, height, 4, data)
    }

    /// Creates a zero-filled image with this image's channel count.
    ///
    /// Dimensions below 1 are raised to 1, so the result is always a valid image.
    pub fn blank_like(&self, width: u32, height: u32) -> Image {
        let (width, height) = (width.max(1), height.max(1));
        let len = width as usize * height as usize * self.channels as usize;
        Image::from_validated_parts(width, height, self.channels, vec![0; len])
    }

    /// Width in texels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in texels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of interleaved channels (1-4).
    #[inline]
    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// Raw interleaved samples.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable access to the raw samples. The length cannot change.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consumes the image, returning its samples.
    #[inline]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Bytes per row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.width as usize * self.channels as usize
    }

    /// The samples of the texel at `(x, y)`.
    #[inline]
    pub fn texel(&self, x: u32, y: u32) -> &[u8] {
        let channels = self.channels as usize;
        let offset = y as usize * self.stride() + x as usize * channels;
        &self.data[offset..offset + channels]
    }

    /// The texel at `(x, y)` promoted to RGBA.
    ///
    /// L becomes `(L, L, L, 255)`, LA becomes `(L, L, L, A)` and RGB gains an opaque alpha.
    #[inline]
    pub fn texel_rgba(&self, x: u32, y: u32) -> Color8888 {
        promote(self.texel(x, y))
    }

    /// Returns an RGBA copy of this image.
    pub fn to_rgba(&self) -> Image {
        if self.channels == 4 {
            return self.clone();
        }

        let mut data = Vec::with_capacity(self.width as usize * self.height as usize * 4);
        for texel in self.data.chunks_exact(self.channels as usize) {
            data.extend_from_slice(&promote(texel).to_array());
        }

        Image::from_validated_parts(self.width, self.height, 4, data)
    }
}

/// Promotes the samples of one texel to RGBA.
#[inline]
pub(crate) fn promote(texel: &[u8]) -> Color8888 {
    match *texel {
        [l] => Color8888::new(l, l, l, 255),
        [l, a] => Color8888::new(l, l, l, a),
        [r, g, b] => Color8888::new(r, g, b, 255),
        [r, g, b, a, ..] => Color8888::new(r, g, b, a),
        [] => Color8888::default(),
    }
}

/// Validates dimensions and channel count, returning the expected sample count.
pub(crate) fn validate_layout(
    width: u32,
    height: u32,
    depth: u32,
    channels: u8,
) -> Result<usize, ImageError> {
    if width == 0 || height == 0 {
        return Err(ImageError::ZeroDimensions { width, height });
    }
    if depth == 0 {
        return Err(ImageError::ZeroDepth);
    }
    if !(1..=4).contains(&channels) {
        return Err(ImageError::UnsupportedChannelCount(channels));
    }

    Ok(width as usize * height as usize * depth as usize * channels as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 4, 4)]
    #[case(4, 0, 4)]
    fn rejects_zero_dimensions(#[case] width: u32, #[case] height: u32, #[case] channels: u8) {
        assert_eq!(
            Image::new(width, height, channels, vec![]),
            Err(ImageError::ZeroDimensions { width, height })
        );
    }

    #[rstest]
    #[case(0)]
    #[case(5)]
    fn rejects_unsupported_channel_counts(#[case] channels: u8) {
        assert_eq!(
            Image::new(2, 2, channels, vec![0; 2 * 2 * channels as usize]),
            Err(ImageError::UnsupportedChannelCount(channels))
        );
    }

    #[test]
    fn rejects_wrong_buffer_length() {
        assert_eq!(
            Image::new(3, 2, 3, vec![0; 17]),
            Err(ImageError::LengthMismatch {
                expected: 18,
                actual: 17
            })
        );
    }

    #[rstest]
    #[case(1, &[10], Color8888::new(10, 10, 10, 255))]
    #[case(2, &[10, 20], Color8888::new(10, 10, 10, 20))]
    #[case(3, &[10, 20, 30], Color8888::new(10, 20, 30, 255))]
    #[case(4, &[10, 20, 30, 40], Color8888::new(10, 20, 30, 40))]
    fn texel_rgba_promotes_layouts(
        #[case] channels: u8,
        #[case] texel: &[u8],
        #[case] expected: Color8888,
    ) {
        let image = Image::new(1, 1, channels, texel.to_vec()).unwrap();
        assert_eq!(image.texel_rgba(0, 0), expected);
        assert_eq!(image.to_rgba().data(), &expected.to_array());
    }

    #[test]
    fn from_fn_fills_row_major() {
        let image = Image::from_fn(3, 2, |x, y| Color8888::new(x as u8, y as u8, 0, 255)).unwrap();
        assert_eq!(image.texel_rgba(2, 1), Color8888::new(2, 1, 0, 255));
        assert_eq!(image.stride(), 12);
    }

    #[test]
    fn blank_like_keeps_channels_and_clamps_dimensions() {
        let image = Image::new(2, 2, 2, vec![1; 8]).unwrap();
        let blank = image.blank_like(0, 3);
        assert_eq!((blank.width(), blank.height(), blank.channels()), (1, 3, 2));
        assert!(blank.data().iter().all(|&v| v == 0));
    }
}
