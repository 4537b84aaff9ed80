#![no_main]

// Encodes small arbitrary images in every format and decodes them again, checking the
// stream layout against the format table.

use dxt_codec_api::{decode, encode, DecodeSettings, EncodeSettings};
use dxt_codec_common::format::{Format, FormatDescriptor};
use dxt_codec_common::image::Image;
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Input {
    pub width: u8,
    pub height: u8,
    pub format: u8,
    pub mipmaps: u8,
    pub pixels: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let width = (input.width % 16) as u32 + 1;
    let height = (input.height % 16) as u32 + 1;
    let len = width as usize * height as usize * 4;
    if input.pixels.len() < len {
        return;
    }

    let formats = Format::all_values();
    let format = formats[input.format as usize % formats.len()];
    let descriptor = FormatDescriptor::of(format);
    let Ok(image) = Image::from_rgba(width, height, input.pixels[..len].to_vec()) else {
        return;
    };

    let settings = EncodeSettings {
        mipmaps: (input.mipmaps % 3) as u32,
        ..Default::default()
    };
    let texture = encode(&image, &descriptor, &settings).expect("valid input must encode");

    let levels = texture.level_count() as u32;
    assert_eq!(texture.data.len(), descriptor.surface_size(width, height, levels));

    let decoded = decode(
        &texture.data,
        &descriptor,
        &DecodeSettings {
            width,
            height,
            mipmaps: levels,
            normal_map: false,
        },
    )
    .expect("encoded stream must decode");

    assert_eq!(decoded.len(), texture.level_count());
    for (image, dims) in decoded.iter().zip(&texture.level_dimensions) {
        assert_eq!((image.width(), image.height()), (dims.width, dims.height));
    }
});
