use crate::error::CliError;
use crate::util::{load_image, Throughput};
use argh::FromArgs;
use bytesize::ByteSize;
use dxt_codec_api::TextureEncoder;
use dxt_codec_bc1::EndpointStrategy;
use dxt_codec_common::format::FormatRegistry;
use dxt_codec_resample::FilterKind;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use tracing::debug;

#[derive(FromArgs, Debug)]
/// Compress an image and its mip chain into a raw block stream
#[argh(subcommand, name = "compress")]
pub struct CompressCmd {
    /// input image path (PNG)
    #[argh(option)]
    pub input: PathBuf,

    /// output path for the block stream
    #[argh(option)]
    pub output: PathBuf,

    /// block format: bc1, bc1a, bc2, bc3, bc3n, rxgb, bc4, bc5, ycocg, ycocg-scaled [default: bc1]
    #[argh(option, default = "String::from(\"bc1\")")]
    pub format: String,

    /// number of mip levels including the base, 0 for the full chain [default: 0]
    #[argh(option, default = "0")]
    pub mipmaps: u32,

    /// mip filter: nearest, box, bilinear, bicubic, lanczos [default: box]
    #[argh(option, default = "FilterKind::Box")]
    pub filter: FilterKind,

    /// filter mip levels in linear light using this gamma exponent
    #[argh(option)]
    pub gamma: Option<f32>,

    /// dither colour indices (Floyd-Steinberg)
    #[argh(switch)]
    pub dither: bool,

    /// colour endpoint selection: max-distance, luminance, principal-axis [default: principal-axis]
    #[argh(option, default = "EndpointStrategy::default()")]
    pub strategy: EndpointStrategy,
}

pub fn handle_compress_command(
    cmd: CompressCmd,
    registry: &FormatRegistry,
) -> Result<(), CliError> {
    let descriptor = *registry.find(&cmd.format)?;
    let image = load_image(&cmd.input, &descriptor)?;
    debug!(
        path = %cmd.input.display(),
        width = image.width(),
        height = image.height(),
        "loaded image"
    );

    let mut encoder = TextureEncoder::new(descriptor)
        .mipmaps(cmd.mipmaps)
        .filter(cmd.filter)
        .dither(cmd.dither)
        .strategy(cmd.strategy);
    if let Some(gamma) = cmd.gamma {
        encoder = encoder.gamma(gamma);
    }

    let start = Instant::now();
    let texture = encoder.encode(&image)?;
    let elapsed = start.elapsed();

    fs::write(&cmd.output, &texture.data)?;

    println!(
        "{} {}x{} -> {} ({} levels)",
        descriptor.name,
        image.width(),
        image.height(),
        cmd.output.display(),
        texture.level_count()
    );
    for (offset, dims) in texture.level_offsets.iter().zip(&texture.level_dimensions) {
        println!("  {:>5}x{:<5} @ {offset}", dims.width, dims.height);
    }
    println!("Time taken: {elapsed:.2?}");
    println!("Output size: {}", ByteSize(texture.data.len() as u64));
    println!(
        "Throughput: {}",
        Throughput::measure(image.data().len(), elapsed)
    );

    Ok(())
}
