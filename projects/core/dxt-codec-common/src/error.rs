//! Error types for image construction and format lookups.

use crate::format::Format;
use thiserror::Error;

/// Errors raised when building an [`Image`](crate::image::Image) or
/// [`Volume`](crate::volume::Volume) from raw samples.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageError {
    /// One of the dimensions is zero.
    #[error("Invalid dimensions {width}x{height}: width and height must be non-zero.")]
    ZeroDimensions {
        /// The requested width
        width: u32,
        /// The requested height
        height: u32,
    },

    /// A volume was requested with no slices.
    #[error("Invalid depth: a volume needs at least one slice.")]
    ZeroDepth,

    /// The channel count is outside `1..=4`.
    #[error("Unsupported channel count: {0}. Expected 1 (L), 2 (LA), 3 (RGB) or 4 (RGBA).")]
    UnsupportedChannelCount(u8),

    /// The sample buffer does not match `width * height * channels` (times depth for volumes).
    #[error("Sample buffer has {actual} bytes, but the dimensions require {expected} bytes.")]
    LengthMismatch {
        /// The required size in bytes
        expected: usize,
        /// The actual size in bytes
        actual: usize,
    },
}

/// Errors raised by the format table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// No format is registered under this name or alias.
    #[error("Unknown format: '{0}'.")]
    UnknownFormat(String),

    /// The format cannot store an image of these dimensions.
    #[error("{format:?} cannot store a {width}x{height} image: {reason}.")]
    InvalidDimensions {
        /// The format that rejected the dimensions
        format: Format,
        /// The rejected width
        width: u32,
        /// The rejected height
        height: u32,
        /// Which capability flag was violated
        reason: &'static str,
    },
}
