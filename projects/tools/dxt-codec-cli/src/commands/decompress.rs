use crate::error::CliError;
use crate::util::{level_path, save_image, Throughput};
use argh::FromArgs;
use dxt_codec_api::TextureDecoder;
use dxt_codec_common::format::FormatRegistry;
use dxt_codec_common::image::Image;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::debug;

#[cfg(feature = "multithreaded")]
use rayon::prelude::*;

#[derive(FromArgs, Debug)]
/// Decompress a raw block stream into PNG images, one per mip level
#[argh(subcommand, name = "decompress")]
pub struct DecompressCmd {
    /// input block stream path
    #[argh(option)]
    pub input: PathBuf,

    /// output path of the base level; further levels are written as <stem>_mip<n>.png
    #[argh(option)]
    pub output: PathBuf,

    /// block format of the stream, by name or alias [default: bc1]
    #[argh(option, default = "String::from(\"bc1\")")]
    pub format: String,

    /// width of the base level in texels
    #[argh(option)]
    pub width: u32,

    /// height of the base level in texels
    #[argh(option)]
    pub height: u32,

    /// number of levels in the stream, 0 for the full chain [default: 1]
    #[argh(option, default = "1")]
    pub mipmaps: u32,

    /// rebuild the Z component of a normal map in blue
    #[argh(switch)]
    pub normal_map: bool,
}

pub fn handle_decompress_command(
    cmd: DecompressCmd,
    registry: &FormatRegistry,
) -> Result<(), CliError> {
    let descriptor = *registry.find(&cmd.format)?;
    let data = fs::read(&cmd.input)?;
    debug!(path = %cmd.input.display(), len = data.len(), "read block stream");

    let start = Instant::now();
    let levels = TextureDecoder::new(descriptor, cmd.width, cmd.height)
        .mipmaps(cmd.mipmaps)
        .normal_map(cmd.normal_map)
        .decode(&data)?;
    let elapsed = start.elapsed();

    save_levels(&cmd.output, &levels)?;

    println!(
        "{} {} -> {} ({} levels)",
        descriptor.name,
        cmd.input.display(),
        cmd.output.display(),
        levels.len()
    );
    println!("Time taken: {elapsed:.2?}");
    println!("Throughput: {}", Throughput::measure(data.len(), elapsed));

    Ok(())
}

fn save_levels(output: &Path, levels: &[Image]) -> Result<(), CliError> {
    #[cfg(feature = "multithreaded")]
    let levels = levels.par_iter();
    #[cfg(not(feature = "multithreaded"))]
    let levels = levels.iter();

    levels
        .enumerate()
        .try_for_each(|(index, level)| save_image(&level_path(output, index), level))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::compress::{handle_compress_command, CompressCmd};
    use dxt_codec_bc1::EndpointStrategy;
    use dxt_codec_common::error::FormatError;
    use dxt_codec_resample::FilterKind;

    fn decompress_cmd(
        input: PathBuf,
        output: PathBuf,
        format: &str,
        mipmaps: u32,
    ) -> DecompressCmd {
        DecompressCmd {
            input,
            output,
            format: format.to_string(),
            width: 8,
            height: 8,
            mipmaps,
            normal_map: false,
        }
    }

    #[test]
    fn compress_then_decompress_writes_every_level() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("source.png");
        let stream = dir.path().join("source.bc3");
        let restored = dir.path().join("restored.png");
        let registry = FormatRegistry::standard();

        let pixels: Vec<u8> = (0..8 * 8)
            .flat_map(|i| [(i * 4) as u8, 128, 255 - (i * 2) as u8, 255])
            .collect();
        image::save_buffer(&source, &pixels, 8, 8, image::ColorType::Rgba8).unwrap();

        handle_compress_command(
            CompressCmd {
                input: source,
                output: stream.clone(),
                format: "bc3".to_string(),
                mipmaps: 0,
                filter: FilterKind::Box,
                gamma: None,
                dither: false,
                strategy: EndpointStrategy::default(),
            },
            &registry,
        )
        .unwrap();
        // 8x8, 4x4, 2x2, 1x1
        assert_eq!(fs::metadata(&stream).unwrap().len(), 4 * 16 + 3 * 16);

        // Decoded through the DXT5 alias.
        handle_decompress_command(
            decompress_cmd(stream, restored.clone(), "DXT5", 0),
            &registry,
        )
        .unwrap();

        for (level, size) in [(0, 8), (1, 4), (2, 2), (3, 1)] {
            let level = image::open(level_path(&restored, level)).unwrap();
            assert_eq!((level.width(), level.height()), (size, size));
        }
    }

    #[test]
    fn decompress_reports_short_streams() {
        let dir = tempfile::tempdir().unwrap();
        let stream = dir.path().join("short.bc1");
        fs::write(&stream, [0u8; 4]).unwrap();

        let result = handle_decompress_command(
            decompress_cmd(stream, dir.path().join("out.png"), "bc1", 1),
            &FormatRegistry::standard(),
        );
        assert!(matches!(result, Err(CliError::Codec(_))));
    }

    #[test]
    fn unknown_format_names_are_rejected_before_reading() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = decompress_cmd(
            dir.path().join("missing.bin"),
            dir.path().join("out.png"),
            "bc7",
            1,
        );
        let result = handle_decompress_command(cmd, &FormatRegistry::standard());
        assert!(matches!(
            result,
            Err(CliError::Format(FormatError::UnknownFormat(name))) if name == "bc7"
        ));
    }
}
