use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kdrange::{linear_range_search, random_points, BoundingBox, KdTree};

const SIZES: [usize; 3] = [100, 10_000, 1_000_000];

fn generate(count: usize) -> Vec<[f64; 3]> {
    let bounds = BoundingBox::new([-10000.0; 3], [10000.0; 3]);
    random_points(count, &bounds, 42)
}

fn benchmark_naive(c: &mut Criterion) {
    let min = [-5000.0; 3];
    let max = [5000.0; 3];

    let mut group = c.benchmark_group("naive");
    for &size in &SIZES {
        let data = generate(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &s| {
            b.iter(|| {
                let mut result = Vec::with_capacity(s / 2);
                linear_range_search(black_box(&data), min, max, &mut result);
                result
            })
        });
    }
    group.finish();
}

fn benchmark_kdtree(c: &mut Criterion) {
    let min = [-5000.0; 3];
    let max = [5000.0; 3];

    let mut group = c.benchmark_group("kdtree");
    for &size in &SIZES {
        let tree = KdTree::build(generate(size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &s| {
            b.iter(|| {
                let mut result = Vec::with_capacity(s / 2);
                tree.range_search(black_box(min), black_box(max), &mut result);
                result
            })
        });
    }
    group.finish();
}

fn benchmark_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    group.sample_size(10);
    for &size in &SIZES {
        let data = generate(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| KdTree::build(black_box(data.clone())))
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_naive, benchmark_kdtree, benchmark_build);
criterion_main!(benches);
