//! Benchmarks for the wordpx pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use wordpx::{
    derive, encode_png, export, extract, import, inject, render_grid, ColorParameters,
    ProjectPayload, METADATA_KEY,
};

fn sample_text(words: usize) -> String {
    (0..words)
        .map(|i| format!("word{}", i))
        .collect::<Vec<_>>()
        .join(" ")
}

// -- Derivation benchmarks --

fn bench_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("derivation");

    let params = ColorParameters::default();
    let heavy = ColorParameters {
        sine_influence: 45.0,
        first_char_bias: 1.5,
        xor_mask: 0xA5A5,
        prime_modulus: 7919,
        ..Default::default()
    };
    let long_word = "z".repeat(300);

    group.bench_function("derive_short", |b| {
        b.iter(|| derive(black_box("mosaic"), black_box(42), &params))
    });

    group.bench_function("derive_long_word", |b| {
        b.iter(|| derive(black_box(long_word.as_str()), black_box(42), &params))
    });

    group.bench_function("derive_all_params", |b| {
        b.iter(|| derive(black_box("mosaic"), black_box(42), &heavy))
    });

    group.finish();
}

// -- Render benchmarks --

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    let payload = ProjectPayload {
        grid_width: 16,
        ..ProjectPayload::new(sample_text(256))
    };

    group.bench_function("grid_256_words", |b| {
        b.iter(|| render_grid(black_box(&payload)).unwrap())
    });

    let grid = render_grid(&payload).unwrap();
    group.bench_function("encode_png", |b| {
        b.iter(|| encode_png(black_box(&grid), 4).unwrap())
    });

    group.finish();
}

// -- Codec benchmarks --

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    let payload = ProjectPayload {
        grid_width: 16,
        ..ProjectPayload::new(sample_text(256))
    };
    let plain = encode_png(&render_grid(&payload).unwrap(), 4).unwrap();
    let record = serde_json::to_string(&payload).unwrap();
    let embedded = export(&payload, 4).unwrap();

    group.bench_function("inject", |b| {
        b.iter(|| inject(black_box(&plain), METADATA_KEY, black_box(&record)).unwrap())
    });

    group.bench_function("extract", |b| {
        b.iter(|| extract(black_box(&embedded), METADATA_KEY).unwrap())
    });

    group.bench_function("import", |b| {
        b.iter(|| import(black_box(&embedded)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_derivation, bench_render, bench_codec);
criterion_main!(benches);
