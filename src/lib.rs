/*!
Computes the angular two-point correlation function (ACF) of a catalog of
points on the celestial sphere.

# High-Level: Angular Pair Counts

Given a catalog of `(right ascension, declination)` pairs (in degrees), we
compute the great-circle separation of every distinct pair of points and
count how many pairs fall into each bin of a linear partition of
`[0, max_distance)` degrees. In the astronomy literature, these raw pair
counts are the "DD" term of the
[angular correlation function](https://en.wikipedia.org/wiki/Correlation_function_(astronomy)).
No normalization against a random catalog is performed.

The computation visits all `n(n-1)/2` pairs, so the runtime is `O(n^2)`.

# User Guide

```
use skyacf::{AcfConfig, SkyPoints, compute_histogram, pack_pairs};

let coords = pack_pairs(&[(0.0, 0.0), (0.0, 3.5), (120.0, -45.0)]);
let points = SkyPoints::new(coords.view()).unwrap();
let result = compute_histogram(&points, &AcfConfig::default());

assert_eq!(result.counts()[3], 1);
assert_eq!(result.counted_pairs(), 1);
assert_eq!(result.expected_total_pairs(), 3);
```

The [`catalog`] and [`report`] modules provide the plumbing used by the
`acf` binary to read catalogs from text files and to print the results.
Neither one is needed to use the counting machinery.

*/

#![deny(rustdoc::broken_intra_doc_links)]

// inform build-system of the crates in this package
mod angular;
mod apply_points;
mod bins;
mod config;
mod error;
mod points;

pub mod catalog;
pub mod report;

// pull in symbols that visible outside of the package
pub use angular::angular_distance;
pub use apply_points::{HistogramResult, compute_histogram, count_pairs, n_unordered_pairs};
pub use bins::{BinEdges, RegularBinEdges};
pub use config::{AcfConfig, DEFAULT_MAX_DISTANCE_DEG, DEFAULT_NUM_BINS};
pub use error::Error;
pub use points::{DEC, RA, SkyPoints, pack_pairs};
