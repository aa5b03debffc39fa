//! Spherical geodetic coordinate conversions
//!
//! Maps geodetic latitude/longitude onto an ECEF-style Cartesian frame
//! centered on an authalic sphere of radius [`EARTH_RADIUS_KM`]. An
//! ellipsoidal Earth model is deliberately not used; over the short
//! baselines this system operates on, the spherical error is well below
//! measurement noise.

use nalgebra::Vector3;

use crate::core::EARTH_RADIUS_KM;

/// Convert geodetic coordinates (degrees) to Cartesian ECEF (km)
pub fn geodetic_to_ecef(lat_deg: f64, lon_deg: f64) -> Vector3<f64> {
    let lat = lat_deg.to_radians();
    let lon = lon_deg.to_radians();

    Vector3::new(
        EARTH_RADIUS_KM * lat.cos() * lon.cos(),
        EARTH_RADIUS_KM * lat.cos() * lon.sin(),
        EARTH_RADIUS_KM * lat.sin(),
    )
}

/// Convert a Cartesian ECEF point (km) back to geodetic degrees
///
/// The latitude is recovered as `asin(z / R)`, so a point that lies off
/// the reference sphere yields the latitude of its radial projection;
/// for a point with `|z| > R` the result is NaN, which callers are
/// expected to reject.
pub fn ecef_to_geodetic(point: &Vector3<f64>) -> (f64, f64) {
    let lat = (point.z / EARTH_RADIUS_KM).asin().to_degrees();
    let lon = point.y.atan2(point.x).to_degrees();
    (lat, lon)
}
