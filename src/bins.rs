//! Implements types to represent "bin edges" used for distance binning. The
//! [`BinEdges`] trait provides the interface consumed by the pair-counting
//! loop and [`RegularBinEdges`] implements it for a linear partition.

use crate::Error;

/// Super simple. This can be expanded as needed.
pub trait BinEdges {
    /// Calculate the bin index for a given value. Values which are equal to
    /// boundary values are considered part of the higher bin, i.e. intervals
    /// do not include the right edge.
    fn bin_index(&self, value: f64) -> Option<usize>;

    fn n_bins(&self) -> usize;

    fn leftmost_edge(&self) -> f64;

    fn rightmost_edge(&self) -> f64;
}

/// Regular bins with uniform spacing
#[derive(Clone, Debug)]
pub struct RegularBinEdges {
    min: f64,
    max: f64,
    bin_size: f64,
    n_bins: usize,
}

impl RegularBinEdges {
    /// Note that we initialize with num_bins rather than bin_size
    pub fn new(min: f64, max: f64, n_bins: usize) -> Result<Self, Error> {
        let diff = max - min;
        let bin_size = diff / (n_bins as f64);
        if n_bins == 0 {
            Err(Error::bin_config("Number of bins must be greater than zero"))
        } else if max <= min {
            Err(Error::bin_config("Maximum value must be greater than minimum value"))
        } else if !diff.is_finite() {
            // catches NaN and infinite arguments, and the pathological case
            // (max - min) > f64::MAX
            Err(Error::bin_config("Min and max values must be finite"))
        } else if bin_size == 0.0 {
            // (diff / n_bins) < f64::MIN
            Err(Error::bin_config("received pathological values"))
        } else {
            Ok(Self {
                min,
                max,
                bin_size,
                n_bins,
            })
        }
    }

    pub fn bin_size(&self) -> f64 {
        self.bin_size
    }

    /// the edges `[lo, hi)` of bin `i`
    ///
    /// # Panics
    /// Panics if `i >= self.n_bins()`
    pub fn bin_range(&self, i: usize) -> (f64, f64) {
        assert!(i < self.n_bins, "bin index out of range");
        (
            self.min + (i as f64) * self.bin_size,
            self.min + ((i + 1) as f64) * self.bin_size,
        )
    }
}

// we can't derive `Eq` for RegularBinEdges because f64 doesn't implement the
// trait (since `NaN`!=`NaN`). Because we confirmed in the constructor that
// both min and max are finite, we can manually implement the trait
impl PartialEq for RegularBinEdges {
    fn eq(&self, other: &Self) -> bool {
        // we can skip over bin_size since it is derived from the other parameters
        (self.min == other.min) && (self.max == other.max) && (self.n_bins == other.n_bins)
    }
}

impl Eq for RegularBinEdges {}

impl BinEdges for RegularBinEdges {
    fn bin_index(&self, value: f64) -> Option<usize> {
        // written so that NaN falls through to None
        if !(value >= self.min && value < self.max) {
            return None;
        }

        // this cast handles the truncation. For a value a hair below `max`,
        // the quotient can round up to n_bins, so we clamp to the last bin
        let index = ((value - self.min) / self.bin_size) as usize;

        Some(index.min(self.n_bins - 1))
    }

    fn n_bins(&self) -> usize {
        self.n_bins
    }

    fn leftmost_edge(&self) -> f64 {
        self.min
    }

    fn rightmost_edge(&self) -> f64 {
        self.max
    }
}
