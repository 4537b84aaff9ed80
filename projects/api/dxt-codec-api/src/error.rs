//! Error types for stream encode and decode operations.

use dxt_codec_common::error::{FormatError, ImageError};
use thiserror::Error;

/// Errors raised while validating an encode or decode request.
///
/// Every check runs before any block is touched; block coding itself cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The image (or requested output size) is invalid.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// The format cannot be used for this request.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// The encoded input holds fewer bytes than the requested levels need.
    #[error("Input too short: need {needed} bytes, but only {actual} bytes available.")]
    InputTooShort {
        /// The required size in bytes
        needed: usize,
        /// The actual size in bytes
        actual: usize,
    },

    /// More mip levels were requested than the base size allows.
    #[error("Invalid mip count: {requested} levels requested, at most {max} possible.")]
    InvalidMipCount {
        /// Requested number of levels
        requested: u32,
        /// Length of the full chain for the base size
        max: u32,
    },
}
