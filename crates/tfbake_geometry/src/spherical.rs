//! # Spherical Coordinates
//!
//! Longitude/latitude pairs on the unit sphere.
//!
//! Midpoints are taken through Cartesian space: averaging the two unit
//! vectors and projecting back keeps the result on the sphere and on the
//! great-circle arc, which a plain angular average does not.

/// A point on the unit sphere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphericalCoord {
    /// Angle around the Z axis, measured from +X, in radians.
    pub longitude: f64,
    /// Angle above the XY plane, in radians (`+PI/2` is the north pole).
    pub latitude: f64,
}

impl SphericalCoord {
    /// Creates a coordinate from longitude and latitude in radians.
    #[inline]
    #[must_use]
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self { longitude, latitude }
    }

    /// Converts to a unit Cartesian vector.
    #[inline]
    #[must_use]
    pub fn to_cartesian(self) -> [f64; 3] {
        let (sin_lon, cos_lon) = self.longitude.sin_cos();
        let (sin_lat, cos_lat) = self.latitude.sin_cos();
        [cos_lon * cos_lat, sin_lon * cos_lat, sin_lat]
    }

    /// Recovers the direction of a Cartesian vector.
    ///
    /// The vector does not need to be normalized; only its direction is kept.
    #[inline]
    #[must_use]
    pub fn from_cartesian(v: [f64; 3]) -> Self {
        Self {
            longitude: v[1].atan2(v[0]),
            latitude: v[2].atan2(v[0].hypot(v[1])),
        }
    }

    /// Great-circle midpoint between two points.
    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        let a = self.to_cartesian();
        let b = other.to_cartesian();
        Self::from_cartesian([
            (a[0] + b[0]) / 2.0,
            (a[1] + b[1]) / 2.0,
            (a[2] + b[2]) / 2.0,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn norm(v: [f64; 3]) -> f64 {
        (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
    }

    #[test]
    fn test_cartesian_roundtrip() {
        let p = SphericalCoord::new(1.2, -0.4);
        let q = SphericalCoord::from_cartesian(p.to_cartesian());
        assert!((p.longitude - q.longitude).abs() < 1e-12);
        assert!((p.latitude - q.latitude).abs() < 1e-12);
    }

    #[test]
    fn test_midpoint_stays_on_sphere() {
        let a = SphericalCoord::new(0.0, FRAC_PI_2);
        let b = SphericalCoord::new(2.0 * PI / 3.0, -0.34);
        let m = a.midpoint(b).to_cartesian();
        assert!((norm(m) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_equator_midpoint() {
        let a = SphericalCoord::new(0.0, 0.0);
        let b = SphericalCoord::new(FRAC_PI_2, 0.0);
        let m = a.midpoint(b);
        assert!((m.longitude - FRAC_PI_4).abs() < 1e-12);
        assert!(m.latitude.abs() < 1e-12);
    }
}
