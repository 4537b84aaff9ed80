//! 16-bit 5:6:5 endpoint colours as stored in every BC1-style colour block.

use crate::color_8888::Color8888;

/// Represents a 16-bit RGB565 color (5 bits red, 6 bits green, 5 bits blue)
/// As encountered in many of the BC1 formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Color565 {
    /// The underlying 16-bit RGB565 value
    value: u16,
}

impl Color565 {
    /// Creates a new [`Color565`] from the raw 16-bit value
    #[inline]
    pub const fn from_raw(value: u16) -> Self {
        Self { value }
    }

    /// Creates a new [`Color565`] from separate RGB components by dropping the low bits.
    ///
    /// # Parameters
    ///
    /// - `r`: The red component (0-255)
    /// - `g`: The green component (0-255)
    /// - `b`: The blue component (0-255)
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            value: ((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3),
        }
    }

    /// Creates a new [`Color565`] by rounding each component to the nearest 5 or 6 bit level.
    ///
    /// This is the quantiser used by the colour encoder. Unlike [`Color565::from_rgb`],
    /// a value such as 0x0F maps to 2 rather than 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use dxt_codec_common::color_565::Color565;
    ///
    /// assert_eq!(Color565::from_rgb(0x0F, 0, 0).raw_value() >> 11, 1);
    /// assert_eq!(Color565::from_rgb_rounded(0x0F, 0, 0).raw_value() >> 11, 2);
    /// ```
    #[inline]
    pub const fn from_rgb_rounded(r: u8, g: u8, b: u8) -> Self {
        Self {
            value: ((mul8bit(r as i32, 31) as u16) << 11)
                | ((mul8bit(g as i32, 63) as u16) << 5)
                | mul8bit(b as i32, 31) as u16,
        }
    }

    /// Returns the raw 16-bit value
    #[inline]
    pub const fn raw_value(&self) -> u16 {
        self.value
    }

    // Endpoints expand from 5/6 bits to 8 by replicating the top bits, as in the D3D11
    // functional spec: https://fgiesen.wordpress.com/2021/10/04/gpu-bcn-decoding/

    /// Extracts the expanded 8-bit red component
    #[inline]
    pub const fn red(&self) -> u8 {
        let r = (self.value & 0b11111000_00000000) >> 11;
        ((r << 3) | (r >> 2)) as u8
    }

    /// Extracts the expanded 8-bit green component
    #[inline]
    pub const fn green(&self) -> u8 {
        let g = (self.value & 0b00000111_11100000) >> 5;
        ((g << 2) | (g >> 4)) as u8
    }

    /// Extracts the expanded 8-bit blue component
    #[inline]
    pub const fn blue(&self) -> u8 {
        let b = self.value & 0b00000000_00011111;
        ((b << 3) | (b >> 2)) as u8
    }

    /// Compares two [`Color565`] values
    #[inline]
    pub const fn greater_than(&self, other: &Self) -> bool {
        self.value > other.value
    }

    /// Converts this [`Color565`] to a [`Color8888`] with full opacity (alpha=255)
    ///
    /// # Examples
    ///
    /// ```
    /// use dxt_codec_common::color_565::Color565;
    ///
    /// let rgb565 = Color565::from_rgb(255, 0, 0);
    /// let rgba8888 = rgb565.to_color_8888();
    /// assert_eq!(rgba8888.r, 255);
    /// assert_eq!(rgba8888.g, 0);
    /// assert_eq!(rgba8888.b, 0);
    /// assert_eq!(rgba8888.a, 255);
    /// ```
    #[inline]
    pub const fn to_color_8888(&self) -> Color8888 {
        Color8888::new(self.red(), self.green(), self.blue(), 255)
    }

    /// Returns the little-endian byte pair this colour occupies inside a block.
    #[inline]
    pub const fn to_le_bytes(&self) -> [u8; 2] {
        self.value.to_le_bytes()
    }

    /// Reads a colour from its little-endian byte pair inside a block.
    #[inline]
    pub const fn from_le_bytes(bytes: [u8; 2]) -> Self {
        Self::from_raw(u16::from_le_bytes(bytes))
    }
}

/// Computes `round(a * b / 255)` for `a, b` in `0..=255` without a division.
#[inline]
pub const fn mul8bit(a: i32, b: i32) -> i32 {
    let t = a * b + 128;
    (t + (t >> 8)) >> 8
}
