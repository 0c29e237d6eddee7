//! Benchmark suite for sprite export and rendering
//!
//! This benchmark measures the performance of pixel access, packed export,
//! and SVG rendering across common sprite sizes.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml
//!
//! For flamegraph profiling:
//! cargo bench --manifest-path benches/Cargo.toml -- --profile-time=5

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use spritegen_benches::{generate_test_sprite, sizes};
use std::hint::black_box;

/// Benchmark single-pixel reads across the whole grid
fn bench_pixel_access(c: &mut Criterion) {
	let mut group = c.benchmark_group("sprite_pixel_access");

	for (name, (width, height)) in [("tiny", sizes::TINY), ("medium", sizes::MEDIUM)] {
		let sprite = generate_test_sprite(width, height);
		let pixels = (width as u64) * (height as u64);

		group.throughput(Throughput::Elements(pixels));
		group.bench_with_input(BenchmarkId::new("pixel_at", name), &sprite, |b, sprite| {
			b.iter(|| {
				for y in 0..sprite.height() {
					for x in 0..sprite.width() {
						let _ = black_box(sprite.pixel_at(black_box(x), black_box(y)));
					}
				}
			});
		});
	}

	group.finish();
}

/// Benchmark the bulk export formats
fn bench_exports(c: &mut Criterion) {
	let mut group = c.benchmark_group("sprite_export");

	for (name, (width, height)) in [("small", sizes::SMALL), ("large", sizes::LARGE)] {
		let sprite = generate_test_sprite(width, height);
		let pixels = (width as u64) * (height as u64);
		group.throughput(Throughput::Elements(pixels));

		group.bench_with_input(BenchmarkId::new("packed", name), &sprite, |b, sprite| {
			b.iter(|| black_box(sprite.packed()));
		});

		group.bench_with_input(BenchmarkId::new("to_bytes", name), &sprite, |b, sprite| {
			b.iter(|| black_box(sprite.to_bytes()));
		});

		group.bench_with_input(BenchmarkId::new("matrix", name), &sprite, |b, sprite| {
			b.iter(|| black_box(sprite.matrix()));
		});
	}

	group.finish();
}

/// Benchmark SVG rendering, the heaviest export path
fn bench_svg_render(c: &mut Criterion) {
	let mut group = c.benchmark_group("sprite_svg");

	for (name, (width, height)) in
		[("tiny", sizes::TINY), ("small", sizes::SMALL), ("medium", sizes::MEDIUM)]
	{
		let sprite = generate_test_sprite(width, height);
		let pixels = (width as u64) * (height as u64);
		group.throughput(Throughput::Elements(pixels));

		group.bench_with_input(BenchmarkId::new("svg_scale", name), &sprite, |b, sprite| {
			b.iter(|| black_box(sprite.svg_scale(black_box(16), "px", None)));
		});
	}

	group.finish();
}

criterion_group!(benches, bench_pixel_access, bench_exports, bench_svg_render);
criterion_main!(benches);
