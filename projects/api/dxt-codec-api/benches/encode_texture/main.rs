use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dxt_codec_api::{encode, EncodeSettings};
use dxt_codec_common::prelude::*;
use std::hint::black_box;

fn generate_image(size: u32) -> Image {
    Image::from_fn(size, size, |x, y| {
        let v = x.wrapping_mul(31) ^ y.wrapping_mul(17);
        Color8888::new(
            (x + v) as u8,
            (y * 3 + v / 2) as u8,
            (x ^ y) as u8,
            (v >> 3) as u8,
        )
    })
    .unwrap_or_else(|e| panic!("{e}"))
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Texture Encode");

    let size = 512;
    let image = generate_image(size);
    group.throughput(Throughput::Bytes(image.data().len() as u64));

    for format in [Format::Bc1, Format::Bc3, Format::Bc5, Format::YCoCgScaled] {
        let descriptor = FormatDescriptor::of(format);
        for mipmaps in [1, 0] {
            let settings = EncodeSettings {
                mipmaps,
                ..Default::default()
            };
            let name = if mipmaps == 0 { "full chain" } else { "base" };

            group.bench_with_input(
                BenchmarkId::new(format!("{format} {name}"), size),
                &size,
                |b, &_size| {
                    b.iter(|| encode(black_box(&image), &descriptor, &settings));
                },
            );
        }
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
