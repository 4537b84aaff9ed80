use dxt_codec_api::CodecError;
use dxt_codec_common::error::{FormatError, ImageError};
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Samples(#[from] ImageError),
}
