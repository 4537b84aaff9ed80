/// Represents a single RGBA8888 texel, as read from an image or produced by a block decoder.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color8888 {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
    /// Alpha component (0-255)
    pub a: u8,
}

impl Color8888 {
    /// Constructs a new [`Color8888`] from the specified red, green, blue, and alpha components.
    ///
    /// # Examples
    ///
    /// ```
    /// use dxt_codec_common::color_8888::Color8888;
    ///
    /// let pixel = Color8888::new(255, 0, 0, 255);
    /// assert_eq!(pixel.r, 255);
    /// assert_eq!(pixel.g, 0);
    /// assert_eq!(pixel.b, 0);
    /// assert_eq!(pixel.a, 255);
    /// ```
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Returns the same colour with alpha cleared to 0.
    #[inline]
    pub const fn without_alpha(&self) -> Self {
        Self::new(self.r, self.g, self.b, 0)
    }

    /// Returns channel `index` (0 = R, 1 = G, 2 = B, 3 = A).
    ///
    /// # Panics
    ///
    /// If `index > 3`.
    #[inline]
    pub const fn channel(&self, index: usize) -> u8 {
        match index {
            0 => self.r,
            1 => self.g,
            2 => self.b,
            3 => self.a,
            _ => panic!("channel index out of range"),
        }
    }

    /// Returns the components as `[r, g, b, a]`.
    #[inline]
    pub const fn to_array(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Largest absolute per-channel difference between two colours.
    #[inline]
    pub fn max_channel_difference(&self, other: &Self) -> u8 {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .map(|(a, b)| a.abs_diff(*b))
            .max()
            .unwrap_or(0)
    }
}

impl From<[u8; 4]> for Color8888 {
    #[inline]
    fn from(value: [u8; 4]) -> Self {
        Self::new(value[0], value[1], value[2], value[3])
    }
}
