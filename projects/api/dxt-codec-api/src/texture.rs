//! The encoded output: one byte stream holding every level, base level first.

/// Size of one level in texels. `depth` is 1 for 2D textures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LevelDimensions {
    /// Width in texels.
    pub width: u32,
    /// Height in texels.
    pub height: u32,
    /// Number of slices.
    pub depth: u32,
}

impl LevelDimensions {
    /// Dimensions of a 2D level.
    #[inline]
    pub const fn flat(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            depth: 1,
        }
    }
}

/// A compressed texture.
///
/// Levels are stored back to back in `data`. Level `i` starts at `level_offsets[i]`
/// and has the size given by `level_dimensions[i]`. Within a level, blocks are row major.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EncodedTexture {
    /// The concatenated block stream.
    pub data: Vec<u8>,
    /// Byte offset of each level within `data`.
    pub level_offsets: Vec<usize>,
    /// Texel dimensions of each level.
    pub level_dimensions: Vec<LevelDimensions>,
}

impl EncodedTexture {
    /// Number of levels.
    #[inline]
    pub fn level_count(&self) -> usize {
        self.level_offsets.len()
    }

    /// The bytes of level `index`, or `None` past the last level.
    pub fn level(&self, index: usize) -> Option<&[u8]> {
        let start = *self.level_offsets.get(index)?;
        let end = self
            .level_offsets
            .get(index + 1)
            .copied()
            .unwrap_or(self.data.len());
        self.data.get(start..end)
    }

    /// Consumes the texture, returning the block stream.
    #[inline]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_slices_follow_offsets() {
        let texture = EncodedTexture {
            data: (0..11).collect(),
            level_offsets: vec![0, 8, 10],
            level_dimensions: vec![
                LevelDimensions::flat(4, 4),
                LevelDimensions::flat(2, 2),
                LevelDimensions::flat(1, 1),
            ],
        };

        assert_eq!(texture.level_count(), 3);
        assert_eq!(texture.level(0), Some(&[0, 1, 2, 3, 4, 5, 6, 7][..]));
        assert_eq!(texture.level(1), Some(&[8, 9][..]));
        assert_eq!(texture.level(2), Some(&[10][..]));
        assert_eq!(texture.level(3), None);
    }
}
