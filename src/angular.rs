//! Great-circle separations between points on the celestial sphere

use core::f64::consts::PI;

const DEGREE_TO_RAD: f64 = PI / 180.0;

/// computes the angular separation (in degrees) between the points
/// `(ra1_deg, dec1_deg)` and `(ra2_deg, dec2_deg)`, which are also given in
/// degrees, using the spherical law of cosines.
///
/// No range restrictions are placed on the inputs. Since only the sine and
/// cosine of each angle are used, any finite value maps onto a well-defined
/// point on the sphere. The result always lies in `[0, 180]`.
///
/// # Note
/// Rounding can push the cosine of the separation slightly outside of
/// `[-1, 1]` for nearly identical or nearly antipodal points. We clamp it
/// before taking the inverse cosine, otherwise `acos` would produce `NaN`.
#[inline]
pub fn angular_distance(ra1_deg: f64, dec1_deg: f64, ra2_deg: f64, dec2_deg: f64) -> f64 {
    let ra1 = ra1_deg * DEGREE_TO_RAD;
    let dec1 = dec1_deg * DEGREE_TO_RAD;
    let ra2 = ra2_deg * DEGREE_TO_RAD;
    let dec2 = dec2_deg * DEGREE_TO_RAD;

    let cos_angle = dec1.sin() * dec2.sin() + dec1.cos() * dec2.cos() * (ra1 - ra2).cos();

    cos_angle.clamp(-1.0, 1.0).acos() / DEGREE_TO_RAD
}
