use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use ndarray::Array2;
use rand::distr::{Distribution, Uniform};
use rand_xoshiro::Xoshiro256PlusPlus;
use rand_xoshiro::rand_core::SeedableRng;
use skyacf::{AcfConfig, DEC, RA, SkyPoints, compute_histogram, n_unordered_pairs};

// points scattered over a 30 x 30 degree patch, so that a decent fraction
// of the pairs land inside the default 10 degree range
fn patch_catalog(n_points: usize, seed: u64) -> Array2<f64> {
    let mut my_rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let dist = Uniform::try_from(-15.0..15.0).unwrap();
    let mut coords = Array2::<f64>::zeros((2, n_points));
    for i in 0..n_points {
        coords[[RA, i]] = 180.0 + dist.sample(&mut my_rng);
        coords[[DEC, i]] = dist.sample(&mut my_rng);
    }
    coords
}

fn criterion_benchmark(c: &mut Criterion) {
    let config = AcfConfig::default();
    let mut group = c.benchmark_group("compute_histogram");
    for n_points in [250usize, 1000, 4000] {
        let coords = patch_catalog(n_points, 2525365464_u64);
        group.throughput(Throughput::Elements(n_unordered_pairs(n_points)));
        group.bench_with_input(
            BenchmarkId::from_parameter(n_points),
            &coords,
            |b, coords: &Array2<f64>| {
                let points = SkyPoints::new(coords.view()).unwrap();
                b.iter(|| compute_histogram(&points, &config))
            },
        );
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
