//! 3D volume textures: a stack of equally sized image slices.

use crate::color_8888::Color8888;
use crate::error::ImageError;
use crate::image::{promote, validate_layout, Image};

/// An owned volume texture. Slices are contiguous `width * height * channels` planes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Volume {
    width: u32,
    height: u32,
    depth: u32,
    channels: u8,
    data: Vec<u8>,
}

impl Volume {
    /// Creates a volume, validating the dimensions and the sample buffer length.
    ///
    /// # Errors
    ///
    /// Same as [`Image::new`], plus [`ImageError::ZeroDepth`] when `depth` is zero.
    pub fn new(
        width: u32,
        height: u32,
        depth: u32,
        channels: u8,
        data: Vec<u8>,
    ) -> Result<Self, ImageError> {
        let expected = validate_layout(width, height, depth, channels)?;
        if data.len() != expected {
            return Err(ImageError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            depth,
            channels,
            data,
        })
    }

    /// Stacks 2D images into a volume. All slices must share dimensions and channel count.
    pub fn from_slices(slices: &[Image]) -> Result<Self, ImageError> {
        let Some(first) = slices.first() else {
            return Err(ImageError::ZeroDepth);
        };

        let mut data = Vec::with_capacity(first.data().len() * slices.len());
        for slice in slices {
            if slice.width() != first.width()
                || slice.height() != first.height()
                || slice.channels() != first.channels()
            {
                return Err(ImageError::LengthMismatch {
                    expected: first.data().len(),
                    actual: slice.data().len(),
                });
            }
            data.extend_from_slice(slice.data());
        }

        Self::new(
            first.width(),
            first.height(),
            slices.len() as u32,
            first.channels(),
            data,
        )
    }

    /// Creates a zero-filled volume with this volume's channel count.
    /// Dimensions below 1 are raised to 1.
    pub fn blank_like(&self, width: u32, height: u32, depth: u32) -> Volume {
        let (width, height, depth) = (width.max(1), height.max(1), depth.max(1));
        let len = width as usize * height as usize * depth as usize * self.channels as usize;
        Volume {
            width,
            height,
            depth,
            channels: self.channels,
            data: vec![0; len],
        }
    }

    /// Mutable access to the raw samples. The length cannot change.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
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

    /// Number of slices.
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Number of interleaved channels (1-4).
    #[inline]
    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// Raw samples, slice after slice.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Bytes per slice.
    #[inline]
    pub fn slice_len(&self) -> usize {
        self.width as usize * self.height as usize * self.channels as usize
    }

    /// The samples of slice `z`.
    #[inline]
    pub fn slice_data(&self, z: u32) -> &[u8] {
        let len = self.slice_len();
        &self.data[z as usize * len..(z as usize + 1) * len]
    }

    /// Copies slice `z` out as a 2D image.
    pub fn slice(&self, z: u32) -> Image {
        Image::from_validated_parts(
            self.width,
            self.height,
            self.channels,
            self.slice_data(z).to_vec(),
        )
    }

    /// The texel at `(x, y, z)` promoted to RGBA.
    #[inline]
    pub fn texel_rgba(&self, x: u32, y: u32, z: u32) -> Color8888 {
        let channels = self.channels as usize;
        let offset = z as usize * self.slice_len()
            + (y as usize * self.width as usize + x as usize) * channels;
        promote(&self.data[offset..offset + channels])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_depth() {
        assert_eq!(Volume::new(2, 2, 0, 4, vec![]), Err(ImageError::ZeroDepth));
        assert_eq!(Volume::from_slices(&[]), Err(ImageError::ZeroDepth));
    }

    #[test]
    fn slices_are_contiguous_planes() {
        let a = Image::new(2, 1, 1, vec![1, 2]).unwrap();
        let b = Image::new(2, 1, 1, vec![3, 4]).unwrap();
        let volume = Volume::from_slices(&[a, b.clone()]).unwrap();

        assert_eq!(volume.depth(), 2);
        assert_eq!(volume.data(), &[1, 2, 3, 4]);
        assert_eq!(volume.slice(1), b);
        assert_eq!(volume.texel_rgba(1, 0, 1), Color8888::new(4, 4, 4, 255));
    }

    #[test]
    fn rejects_mismatched_slices() {
        let a = Image::new(2, 1, 1, vec![1, 2]).unwrap();
        let b = Image::new(1, 1, 1, vec![3]).unwrap();
        assert!(Volume::from_slices(&[a, b]).is_err());
    }
}
