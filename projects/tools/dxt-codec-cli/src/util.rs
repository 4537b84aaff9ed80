use crate::error::CliError;
use bytesize::ByteSize;
use core::fmt;
use core::time::Duration;
use dxt_codec_common::format::FormatDescriptor;
use dxt_codec_common::image::Image;
use std::path::{Path, PathBuf};

/// Bytes per second, displayed with binary units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Throughput(u64);

impl Throughput {
    pub fn from_bytes_per_sec(bytes: u64) -> Self {
        Self(bytes)
    }

    /// Throughput of `bytes` processed in `elapsed`; zero when no time was measured.
    pub fn measure(bytes: usize, elapsed: Duration) -> Self {
        let secs = elapsed.as_secs_f64();
        if secs > 0.0 {
            Self::from_bytes_per_sec((bytes as f64 / secs) as u64)
        } else {
            Self::from_bytes_per_sec(0)
        }
    }
}

impl fmt::Display for Throughput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/s", ByteSize(self.0))
    }
}

/// Loads a PNG (or any format the `image` crate was built with) into an [`Image`].
///
/// Single channel formats get a luminance image, everything else RGBA.
pub fn load_image(path: &Path, descriptor: &FormatDescriptor) -> Result<Image, CliError> {
    let decoded = image::open(path)?;
    let (width, height) = (decoded.width(), decoded.height());

    let image = match descriptor.source_channels() {
        1 => Image::new(width, height, 1, decoded.to_luma8().into_raw())?,
        _ => Image::from_rgba(width, height, decoded.to_rgba8().into_raw())?,
    };
    Ok(image)
}

/// Writes an RGBA [`Image`] as a PNG.
pub fn save_image(path: &Path, image: &Image) -> Result<(), CliError> {
    image::save_buffer(
        path,
        image.data(),
        image.width(),
        image.height(),
        image::ColorType::Rgba8,
    )?;
    Ok(())
}

/// Output path for mip level `level`: the base level keeps `path`, level `n` becomes
/// `<stem>_mip<n>.<ext>` next to it.
pub fn level_path(path: &Path, level: usize) -> PathBuf {
    if level == 0 {
        return path.to_path_buf();
    }

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{stem}_mip{level}.{}", ext.to_string_lossy()),
        None => format!("{stem}_mip{level}"),
    };
    path.with_file_name(name)
}
