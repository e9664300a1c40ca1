// the reason this is named mod.rs has to do with some complexities of how
// testing is handled
//
// we are following the advice of the rust book
// https://doc.rust-lang.org/book/ch11-03-test-organization.html#submodules-in-integration-tests

#![allow(dead_code)] // not every test file uses every helper

use ndarray::Array2;
use rand::distr::{Distribution, Uniform};
use rand_xoshiro::Xoshiro256PlusPlus;
use rand_xoshiro::rand_core::SeedableRng;
use skyacf::{DEC, RA};

// based on numpy!
// https://numpy.org/doc/stable/reference/generated/numpy.isclose.html
pub fn isclose(actual: f64, ref_val: f64, rtol: f64, atol: f64) -> bool {
    let actual_nan = actual.is_nan();
    let ref_nan = ref_val.is_nan();
    if actual_nan || ref_nan {
        actual_nan && ref_nan
    } else {
        (actual - ref_val).abs() <= (atol + rtol * ref_val.abs())
    }
}

/// draw `n_points` positions that are uniformly distributed over the sphere
pub fn random_sky(seed: u64, n_points: usize) -> Array2<f64> {
    let mut my_rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let ra_dist = Uniform::try_from(0.0..360.0).unwrap();
    // uniform in sin(dec) gives uniform coverage of the sphere
    let sin_dec_dist = Uniform::try_from(-1.0..=1.0).unwrap();

    let mut coords = Array2::<f64>::zeros((2, n_points));
    for i in 0..n_points {
        coords[[RA, i]] = ra_dist.sample(&mut my_rng);
        coords[[DEC, i]] = f64::asin(sin_dec_dist.sample(&mut my_rng)).to_degrees();
    }
    coords
}

/// draw `n_points` positions scattered within a small box around
/// `(ra_center, dec_center)` so that many pairs land inside typical bins
pub fn clustered_sky(
    seed: u64,
    n_points: usize,
    ra_center: f64,
    dec_center: f64,
    half_width: f64,
) -> Array2<f64> {
    let mut my_rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let offset_dist = Uniform::try_from(-half_width..half_width).unwrap();

    let mut coords = Array2::<f64>::zeros((2, n_points));
    for i in 0..n_points {
        coords[[RA, i]] = ra_center + offset_dist.sample(&mut my_rng);
        coords[[DEC, i]] = dec_center + offset_dist.sample(&mut my_rng);
    }
    coords
}
