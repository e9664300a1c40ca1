use std::time::{Duration, Instant};

use tracing::debug;

use crate::{AcfConfig, RegularBinEdges, SkyPoints, angular::angular_distance, bins::BinEdges};

/// The outcome of a counting pass.
///
/// `counts[i]` holds the number of unordered pairs whose separation falls
/// in bin `i`.
#[derive(Clone, Debug)]
pub struct HistogramResult {
    counts: Vec<u64>,
    counted_pairs: u64,
    n_points: usize,
    bins: RegularBinEdges,
    elapsed: Duration,
}

impl HistogramResult {
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// the total number of pairs that landed in any bin
    pub fn counted_pairs(&self) -> u64 {
        self.counted_pairs
    }

    /// the number of catalog points that went into the pass
    pub fn n_points(&self) -> usize {
        self.n_points
    }

    /// the number of distinct pairs, n(n-1)/2, in the catalog
    pub fn expected_total_pairs(&self) -> u64 {
        n_unordered_pairs(self.n_points)
    }

    pub fn bins(&self) -> &RegularBinEdges {
        &self.bins
    }

    /// the edges `[lo, hi)` (in degrees) of bin `i`
    pub fn bin_range(&self, i: usize) -> (f64, f64) {
        self.bins.bin_range(i)
    }

    /// wall-clock duration of the counting loop. This is purely diagnostic
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// `true` when both results hold identical counts for identical bins.
    /// The elapsed time is ignored.
    pub fn same_counts(&self, other: &HistogramResult) -> bool {
        self.bins == other.bins
            && self.n_points == other.n_points
            && self.counts == other.counts
    }

    /// fold the counts of `other` (computed over a disjoint set of pairs
    /// with the same binning) into `self`. [`Self::n_points`] keeps the
    /// value of `self`.
    ///
    /// # Panics
    /// Panics if the binning differs.
    pub fn merge(&mut self, other: &HistogramResult) {
        assert!(
            self.bins == other.bins,
            "can't merge histograms with different bins"
        );
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts.iter()) {
            *mine += *theirs;
        }
        self.counted_pairs += other.counted_pairs;
        self.elapsed += other.elapsed;
    }
}

/// the number of distinct unordered pairs that can be drawn from `n` points.
/// Saturates at `u64::MAX` when the count doesn't fit
pub fn n_unordered_pairs(n: usize) -> u64 {
    let n = n as u64;
    if n < 2 {
        0
    } else if n % 2 == 0 {
        // halve the even factor first so that n(n-1) is never formed
        (n / 2).saturating_mul(n - 1)
    } else {
        n.saturating_mul((n - 1) / 2)
    }
}

/// visit every unordered pair of points exactly once and increment the
/// histogram bin that their angular separation falls into. Pairs whose
/// separation lies outside of `bins` are skipped.
///
/// Returns the number of pairs that were counted.
///
/// # Panics
/// Panics if `histogram.len()` differs from `bins.n_bins()`
pub fn count_pairs(points: &SkyPoints, bins: &impl BinEdges, histogram: &mut [u64]) -> u64 {
    assert_eq!(
        histogram.len(),
        bins.n_bins(),
        "histogram must hold one counter per bin"
    );

    let n_points = points.n_points();
    let mut counted = 0;
    for i_a in 0..n_points {
        let (ra_a, dec_a) = points.get(i_a);
        for i_b in (i_a + 1)..n_points {
            let (ra_b, dec_b) = points.get(i_b);
            let distance = angular_distance(ra_a, dec_a, ra_b, dec_b);
            if let Some(distance_bin_idx) = bins.bin_index(distance) {
                histogram[distance_bin_idx] += 1;
                counted += 1;
            }
        }
    }
    counted
}

/// compute the histogram of pairwise angular separations in `points`
///
/// This is the entry point that most callers want. It allocates the
/// histogram, performs the O(n^2) counting pass and times it.
pub fn compute_histogram(points: &SkyPoints, config: &AcfConfig) -> HistogramResult {
    let bins = config.bins().clone();
    let mut counts = vec![0_u64; bins.n_bins()];

    debug!(
        n_points = points.n_points(),
        num_bins = bins.n_bins(),
        max_distance = bins.rightmost_edge(),
        "starting pair-counting pass"
    );

    let start = Instant::now();
    let counted_pairs = count_pairs(points, &bins, &mut counts);
    let elapsed = start.elapsed();

    debug!(
        counted_pairs,
        elapsed_secs = elapsed.as_secs_f64(),
        "finished pair-counting pass"
    );

    HistogramResult {
        counts,
        counted_pairs,
        n_points: points.n_points(),
        bins,
        elapsed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::points::pack_pairs;

    #[test]
    fn unordered_pair_count() {
        assert_eq!(n_unordered_pairs(0), 0);
        assert_eq!(n_unordered_pairs(1), 0);
        assert_eq!(n_unordered_pairs(2), 1);
        assert_eq!(n_unordered_pairs(5), 10);
        assert_eq!(n_unordered_pairs(100_000), 4_999_950_000);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn unordered_pair_count_beyond_u32() {
        // n(n-1) overflows u64 for these, but n(n-1)/2 still fits
        let even = 5_u64 << 30;
        assert_eq!(n_unordered_pairs(even as usize), (even / 2) * (even - 1));
        let odd = even + 1;
        assert_eq!(n_unordered_pairs(odd as usize), odd * (even / 2));

        assert_eq!(n_unordered_pairs(1 << 33), u64::MAX);
        assert_eq!(n_unordered_pairs(usize::MAX), u64::MAX);
    }

    #[test]
    fn count_pairs_with_custom_bins() {
        // all three points lie on the equator
        let coords = pack_pairs(&[(0.0, 0.0), (3.0, 0.0), (8.5, 0.0)]);
        let points = SkyPoints::new(coords.view()).unwrap();
        let bins = RegularBinEdges::new(2.0, 6.0, 2).unwrap();
        let mut hist = [0_u64; 2];

        // separations are 3, 8.5 and 5.5 degrees. 8.5 lies outside of the bins
        let counted = count_pairs(&points, &bins, &mut hist);
        assert_eq!(counted, 2);
        assert_eq!(hist, [1, 1]);
    }

    #[test]
    #[should_panic]
    fn count_pairs_histogram_length_mismatch() {
        let coords = pack_pairs(&[(0.0, 0.0), (1.0, 0.0)]);
        let points = SkyPoints::new(coords.view()).unwrap();
        let bins = RegularBinEdges::new(0.0, 10.0, 10).unwrap();
        let mut hist = [0_u64; 9];
        count_pairs(&points, &bins, &mut hist);
    }

    #[test]
    fn merge_results() {
        let config = AcfConfig::default();
        let coords_a = pack_pairs(&[(0.0, 0.0), (0.0, 2.5)]);
        let coords_b = pack_pairs(&[(50.0, 0.0), (50.0, 5.5), (50.0, 30.0)]);
        let mut a = compute_histogram(&SkyPoints::new(coords_a.view()).unwrap(), &config);
        let b = compute_histogram(&SkyPoints::new(coords_b.view()).unwrap(), &config);
        assert_eq!(a.counted_pairs(), 1);
        assert_eq!(b.counted_pairs(), 1);

        a.merge(&b);
        assert_eq!(a.counted_pairs(), 2);
        assert_eq!(a.counts().iter().sum::<u64>(), 2);
        assert_eq!(a.counts()[2], 1);
        assert_eq!(a.counts()[5], 1);
    }

    #[test]
    #[should_panic]
    fn merge_requires_matching_bins() {
        let coords = pack_pairs(&[(0.0, 0.0)]);
        let points = SkyPoints::new(coords.view()).unwrap();
        let mut a = compute_histogram(&points, &AcfConfig::default());
        let b = compute_histogram(&points, &AcfConfig::new(5, 10.0).unwrap());
        a.merge(&b);
    }
}
