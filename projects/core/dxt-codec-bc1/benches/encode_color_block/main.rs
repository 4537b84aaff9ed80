use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dxt_codec_bc1::{encode_color_block, ColorEncodeSettings, EndpointStrategy};
use dxt_codec_common::prelude::*;
use std::hint::black_box;

// Pseudo-random but repeatable blocks; a mix of smooth and noisy content.
fn generate_blocks(num_blocks: usize) -> Vec<Rgba4x4Block> {
    let mut state = 0x1234_5678u32;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state
    };

    (0..num_blocks)
        .map(|block_idx| {
            let base = next();
            Rgba4x4Block::from_pixels(core::array::from_fn(|i| {
                let noise = if block_idx % 2 == 0 { next() & 0x0F } else { 0 };
                let step = (i as u32) * 9 + noise;
                Color8888::new(
                    (base as u8).wrapping_add(step as u8),
                    ((base >> 8) as u8).wrapping_add((step / 2) as u8),
                    ((base >> 16) as u8).wrapping_sub(step as u8),
                    255,
                )
            }))
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("BC1 Colour Block Encode");

    // 4096 blocks = 256x256
    let size = 4096;
    let blocks = generate_blocks(size);
    let mut output = vec![0u8; size * 8];

    group.throughput(Throughput::Elements(size as u64));

    let configurations = [
        ("max-distance", EndpointStrategy::MaxDistance, false),
        ("luminance", EndpointStrategy::Luminance, false),
        ("principal-axis", EndpointStrategy::PrincipalAxis, false),
        ("principal-axis dither", EndpointStrategy::PrincipalAxis, true),
    ];

    for (name, strategy, dither) in configurations {
        let settings = ColorEncodeSettings {
            strategy,
            dither,
            punch_through_alpha: false,
        };

        group.bench_with_input(BenchmarkId::new(name, size), &size, |b, &_size| {
            b.iter(|| {
                for (block, out) in blocks.iter().zip(output.chunks_exact_mut(8)) {
                    out.copy_from_slice(&encode_color_block(black_box(block), &settings));
                }
                black_box(&output);
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
