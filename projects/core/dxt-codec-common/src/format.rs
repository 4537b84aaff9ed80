//! # Format Table
//!
//! Every supported block format is described by a static [`FormatDescriptor`]: block
//! footprint, bytes per block, capability flags and the channel swizzle applied around the
//! block coder. A [`FormatRegistry`] is an explicit lookup object over those descriptors,
//! searchable by [`Format`] or by case-insensitive name/alias.
//!
//! ```
//! use dxt_codec_common::format::{Format, FormatRegistry};
//!
//! let registry = FormatRegistry::standard();
//! assert_eq!(registry.find("ATI2").unwrap().format, Format::Bc5);
//! assert_eq!(registry.get(Format::Bc1).unwrap().bytes_per_block, 8);
//! ```

use crate::error::FormatError;
use core::fmt;
use core::str::FromStr;
use derive_enum_all_values::AllValues;

/// A block compressed texture format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum Format {
    /// DXT1, opaque colour.
    Bc1,
    /// DXT1 with 1-bit (punch-through) alpha.
    Bc1a,
    /// DXT3, explicit 4-bit alpha.
    Bc2,
    /// DXT5, interpolated alpha.
    Bc3,
    /// DXT5nm: normal X in alpha, Y in green.
    Bc3n,
    /// DXT5 with red moved to alpha.
    Rxgb,
    /// Single interpolated channel (ATI1).
    Bc4,
    /// Two interpolated channels (ATI2).
    Bc5,
    /// YCoCg-DXT5 without chroma scaling.
    YCoCg,
    /// YCoCg-DXT5 with per-block chroma scale.
    YCoCgScaled,
}

/// Channel rearrangement applied before encoding and undone after decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Swizzle {
    /// Channels are stored as they are.
    None,
    /// Normal map: X in alpha, Y in green, red and blue cleared.
    NormalXy,
    /// Red is stored in alpha.
    AlphaRed,
    /// Colour is stored as YCoCg with luma in alpha.
    YCoCg,
}

/// Static description of one block format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatDescriptor {
    /// The format being described.
    pub format: Format,
    /// Canonical lowercase name.
    pub name: &'static str,
    /// Alternative lowercase names (DXTn / ATIn names etc.).
    pub aliases: &'static [&'static str],
    /// Block width in texels.
    pub block_width: u32,
    /// Block height in texels.
    pub block_height: u32,
    /// Size of one encoded block in bytes (8 or 16).
    pub bytes_per_block: usize,
    /// Whether alpha survives a round trip.
    pub has_alpha: bool,
    /// Whether alpha is limited to fully opaque/fully transparent.
    pub binary_alpha: bool,
    /// Whether both sides must be powers of two.
    pub requires_power_of_two: bool,
    /// Whether width must equal height.
    pub requires_square: bool,
    /// Channel swizzle applied around the block coder.
    pub swizzle: Swizzle,
}

impl FormatDescriptor {
    /// Returns the standard descriptor of `format`.
    pub const fn of(format: Format) -> Self {
        let (name, aliases, bytes_per_block, has_alpha, binary_alpha, swizzle): (
            &'static str,
            &'static [&'static str],
            usize,
            bool,
            bool,
            Swizzle,
        ) = match format {
            Format::Bc1 => ("bc1", &["dxt1"], 8, false, false, Swizzle::None),
            Format::Bc1a => ("bc1a", &["dxt1a"], 8, true, true, Swizzle::None),
            Format::Bc2 => ("bc2", &["dxt3"], 16, true, false, Swizzle::None),
            Format::Bc3 => ("bc3", &["dxt5"], 16, true, false, Swizzle::None),
            Format::Bc3n => ("bc3n", &["dxt5nm", "dxt5n"], 16, false, false, Swizzle::NormalXy),
            Format::Rxgb => ("rxgb", &["dxt5-rxgb"], 16, false, false, Swizzle::AlphaRed),
            Format::Bc4 => ("bc4", &["ati1", "bc4u"], 8, false, false, Swizzle::None),
            Format::Bc5 => ("bc5", &["ati2", "bc5u", "3dc"], 16, false, false, Swizzle::None),
            Format::YCoCg => ("ycocg", &["dxt5-ycocg"], 16, false, false, Swizzle::YCoCg),
            Format::YCoCgScaled => (
                "ycocg-scaled",
                &["dxt5-ycocg-scaled", "ycocgs"],
                16,
                false,
                false,
                Swizzle::YCoCg,
            ),
        };

        Self {
            format,
            name,
            aliases,
            block_width: 4,
            block_height: 4,
            bytes_per_block,
            has_alpha,
            binary_alpha,
            requires_power_of_two: false,
            requires_square: false,
            swizzle,
        }
    }

    /// Whether `name` is this format's name or one of its aliases (case-insensitive).
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
    }

    /// Number of channels the encoder reads from the source image.
    ///
    /// Single-channel formats take a luminance image as is; everything else wants RGBA.
    pub const fn source_channels(&self) -> u8 {
        match self.format {
            Format::Bc4 => 1,
            _ => 4,
        }
    }

    /// Number of blocks across a level `width` texels wide.
    #[inline]
    pub const fn blocks_wide(&self, width: u32) -> usize {
        width.div_ceil(self.block_width) as usize
    }

    /// Number of blocks down a level `height` texels high.
    #[inline]
    pub const fn blocks_high(&self, height: u32) -> usize {
        height.div_ceil(self.block_height) as usize
    }

    /// Encoded size of one `width x height` level: `ceil(w/4) * ceil(h/4) * bytes_per_block`.
    #[inline]
    pub const fn level_size(&self, width: u32, height: u32) -> usize {
        self.blocks_wide(width) * self.blocks_high(height) * self.bytes_per_block
    }

    /// Encoded size of `levels` mip levels starting at `width x height`.
    pub fn surface_size(&self, width: u32, height: u32, levels: u32) -> usize {
        let (mut w, mut h) = (width, height);
        let mut total = 0;
        for _ in 0..levels {
            total += self.level_size(w, h);
            w = (w >> 1).max(1);
            h = (h >> 1).max(1);
        }
        total
    }

    /// Checks the capability flags against an image size.
    ///
    /// # Errors
    ///
    /// [`FormatError::InvalidDimensions`] when a flag is violated.
    pub fn check_dimensions(&self, width: u32, height: u32) -> Result<(), FormatError> {
        let reject = |reason| FormatError::InvalidDimensions {
            format: self.format,
            width,
            height,
            reason,
        };

        if self.requires_power_of_two && !(width.is_power_of_two() && height.is_power_of_two()) {
            return Err(reject("dimensions must be powers of two"));
        }
        if self.requires_square && width != height {
            return Err(reject("width and height must match"));
        }
        Ok(())
    }
}

impl Format {
    /// Canonical lowercase name.
    pub const fn name(&self) -> &'static str {
        FormatDescriptor::of(*self).name
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::all_values()
            .iter()
            .copied()
            .find(|format| FormatDescriptor::of(*format).matches_name(s))
            .ok_or_else(|| FormatError::UnknownFormat(s.to_string()))
    }
}

/// Lookup table of format descriptors.
#[derive(Debug, Clone)]
pub struct FormatRegistry {
    descriptors: Vec<FormatDescriptor>,
}

impl FormatRegistry {
    /// A registry holding the standard descriptor of every [`Format`].
    pub fn standard() -> Self {
        Self::from_descriptors(
            Format::all_values()
                .iter()
                .map(|format| FormatDescriptor::of(*format)),
        )
    }

    /// A registry over custom descriptors. Later entries do not replace earlier ones.
    pub fn from_descriptors(descriptors: impl IntoIterator<Item = FormatDescriptor>) -> Self {
        Self {
            descriptors: descriptors.into_iter().collect(),
        }
    }

    /// Looks up a descriptor by format.
    pub fn get(&self, format: Format) -> Option<&FormatDescriptor> {
        self.descriptors.iter().find(|d| d.format == format)
    }

    /// Looks up a descriptor by case-insensitive name or alias.
    ///
    /// # Errors
    ///
    /// [`FormatError::UnknownFormat`] when nothing matches.
    pub fn find(&self, name: &str) -> Result<&FormatDescriptor, FormatError> {
        self.descriptors
            .iter()
            .find(|d| d.matches_name(name))
            .ok_or_else(|| FormatError::UnknownFormat(name.to_string()))
    }

    /// All registered descriptors.
    pub fn iter(&self) -> impl Iterator<Item = &FormatDescriptor> {
        self.descriptors.iter()
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("bc1", Format::Bc1)]
    #[case("DXT1", Format::Bc1)]
    #[case("dxt1a", Format::Bc1a)]
    #[case("dxt3", Format::Bc2)]
    #[case("Dxt5", Format::Bc3)]
    #[case("dxt5nm", Format::Bc3n)]
    #[case("rxgb", Format::Rxgb)]
    #[case("ati1", Format::Bc4)]
    #[case("ati2", Format::Bc5)]
    #[case("ycocg", Format::YCoCg)]
    #[case("ycocg-scaled", Format::YCoCgScaled)]
    fn find_accepts_names_and_aliases(#[case] name: &str, #[case] expected: Format) {
        let registry = FormatRegistry::standard();
        assert_eq!(registry.find(name).unwrap().format, expected);
        assert_eq!(name.parse::<Format>().unwrap(), expected);
    }

    #[test]
    fn unknown_name_is_rejected() {
        let registry = FormatRegistry::standard();
        assert_eq!(
            registry.find("bc7"),
            Err(FormatError::UnknownFormat("bc7".to_string()))
        );
    }

    #[test]
    fn standard_registry_covers_every_format() {
        let registry = FormatRegistry::standard();
        for &format in Format::all_values() {
            let descriptor = registry.get(format).unwrap();
            assert_eq!(descriptor.format, format);
            assert_eq!((descriptor.block_width, descriptor.block_height), (4, 4));
            assert!(matches!(descriptor.bytes_per_block, 8 | 16));
            assert_eq!(registry.find(&format.to_string()).unwrap().format, format);
        }
    }

    #[rstest]
    #[case(Format::Bc1, 4, 4, 8)]
    #[case(Format::Bc1, 5, 5, 32)]
    #[case(Format::Bc3, 1, 1, 16)]
    #[case(Format::Bc5, 16, 8, 128)]
    #[case(Format::Bc4, 13, 3, 32)]
    fn level_size_rounds_up_to_blocks(
        #[case] format: Format,
        #[case] width: u32,
        #[case] height: u32,
        #[case] expected: usize,
    ) {
        assert_eq!(FormatDescriptor::of(format).level_size(width, height), expected);
    }

    #[test]
    fn surface_size_sums_levels() {
        // 8x8 -> 4x4 -> 2x2 -> 1x1: 4 + 1 + 1 + 1 blocks.
        let descriptor = FormatDescriptor::of(Format::Bc1);
        assert_eq!(descriptor.surface_size(8, 8, 4), 7 * 8);
    }

    #[test]
    fn check_dimensions_enforces_flags() {
        let mut descriptor = FormatDescriptor::of(Format::Bc1);
        assert!(descriptor.check_dimensions(12, 7).is_ok());

        descriptor.requires_power_of_two = true;
        assert!(descriptor.check_dimensions(16, 8).is_ok());
        assert!(matches!(
            descriptor.check_dimensions(12, 8),
            Err(FormatError::InvalidDimensions { width: 12, .. })
        ));

        descriptor.requires_square = true;
        assert!(descriptor.check_dimensions(16, 16).is_ok());
        assert!(descriptor.check_dimensions(16, 8).is_err());
    }
}
