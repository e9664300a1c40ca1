use crate::{Error, RegularBinEdges, bins::BinEdges};

/// default number of distance bins
pub const DEFAULT_NUM_BINS: usize = 10;
/// default upper bound (exclusive) on the counted separations, in degrees
pub const DEFAULT_MAX_DISTANCE_DEG: f64 = 10.0;

/// Describes the distance binning of a counting pass.
///
/// Separations are partitioned into `num_bins` equal-width bins that cover
/// `[0, max_distance)` degrees. Because the constructor validates its
/// arguments, the counting pass itself never has to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AcfConfig {
    bins: RegularBinEdges,
}

impl AcfConfig {
    pub fn new(num_bins: usize, max_distance_deg: f64) -> Result<AcfConfig, Error> {
        Ok(AcfConfig {
            bins: RegularBinEdges::new(0.0, max_distance_deg, num_bins)?,
        })
    }

    pub fn num_bins(&self) -> usize {
        self.bins.n_bins()
    }

    pub fn max_distance(&self) -> f64 {
        self.bins.rightmost_edge()
    }

    pub fn bin_size(&self) -> f64 {
        self.bins.bin_size()
    }

    pub fn bins(&self) -> &RegularBinEdges {
        &self.bins
    }
}

impl Default for AcfConfig {
    fn default() -> Self {
        AcfConfig::new(DEFAULT_NUM_BINS, DEFAULT_MAX_DISTANCE_DEG)
            .expect("the default configuration is valid")
    }
}
