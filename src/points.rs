use ndarray::{Array2, ArrayView2};

use crate::Error;

/// Index of the right ascension component along axis 0
pub const RA: usize = 0;
/// Index of the declination component along axis 0
pub const DEC: usize = 1;

/// A read-only view of a catalog of celestial coordinates (in degrees).
///
/// We place the following constraints on the viewed array:
/// - axis 0 is the slow axis and it holds exactly 2 components: right
///   ascension (index [`RA`]) followed by declination (index [`DEC`]).
/// - axis 1 is the fast axis. Its length coincides with the number of
///   points.
/// - In other words the shape is `(2, n_points)`.
///
/// The coordinate values themselves are never validated.
#[derive(Clone)]
pub struct SkyPoints<'a> {
    coords: ArrayView2<'a, f64>,
    n_points: usize,
}

impl<'a> SkyPoints<'a> {
    /// create a new instance
    pub fn new(coords: ArrayView2<'a, f64>) -> Result<SkyPoints<'a>, Error> {
        let n_components = coords.shape()[0];
        if n_components != 2 {
            Err(Error::catalog_shape(n_components))
        } else {
            Ok(Self {
                n_points: coords.shape()[1],
                coords,
            })
        }
    }

    pub fn n_points(&self) -> usize {
        self.n_points
    }

    pub fn is_empty(&self) -> bool {
        self.n_points == 0
    }

    /// returns `(ra, dec)` of the point at `idx`
    #[inline(always)]
    pub fn get(&self, idx: usize) -> (f64, f64) {
        (self.coords[[RA, idx]], self.coords[[DEC, idx]])
    }
}

/// Pack a sequence of `(ra, dec)` pairs into the `(2, n_points)` layout
/// expected by [`SkyPoints`].
pub fn pack_pairs(pairs: &[(f64, f64)]) -> Array2<f64> {
    let mut coords = Array2::<f64>::zeros((2, pairs.len()));
    for (i, &(ra, dec)) in pairs.iter().enumerate() {
        coords[[RA, i]] = ra;
        coords[[DEC, i]] = dec;
    }
    coords
}
