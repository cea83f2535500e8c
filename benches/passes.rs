use criterion::{criterion_group, criterion_main, Criterion};
use gray_processing::{filter::{Convolution, PointOp, WindowOp}, PassesLine, Raster};

fn create_raster(w: usize, h: usize) -> Raster {
	let pixels = (0..w * h).map(|i| (i * 31 % 256) as u8).collect();
	Raster::from_pixels(w, h, pixels)
}

pub fn line_threshold_shrink_display(c: &mut Criterion) {
	let mut line = PassesLine::new();
	line.add_point(PointOp::Threshold { threshold: 100 })
		.add_window(WindowOp::Shrink)
		.add_point(PointOp::BitDisplay);

	let raster = create_raster(1000, 1000);

	let mut group = c.benchmark_group("run line");
	group.sample_size(10);
	group.bench_function("threshold, shrink, display 1000x1000", |b| {
		b.iter(|| line.run(raster.clone()));
	});
	group.finish();
}

pub fn convolution_mean(c: &mut Criterion) {
	let mut line = PassesLine::new();
	line.add_convolution(Convolution::mean());

	let raster = create_raster(1000, 1000);

	let mut group = c.benchmark_group("run line");
	group.sample_size(10);
	group.bench_function("mean convolution 1000x1000", |b| {
		b.iter(|| line.run(raster.clone()));
	});
	group.finish();
}

criterion_group!(benches, line_threshold_shrink_display, convolution_mean);
criterion_main!(benches);
