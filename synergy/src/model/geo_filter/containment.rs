use geo::Point;
use rstar::AABB;
use synergy_core::util::geo_utils;

/// decides which points count as "within `radius_km`" of a center point.
///
/// implementations provide an envelope that fully covers their region so that
/// spatial indices can prune candidates before [`SpatialContainment::contains`]
/// gives the final answer.
pub trait SpatialContainment: Send + Sync {
    /// rectangular envelope covering every point this containment accepts.
    fn envelope(&self, center: &Point<f64>, radius_km: f64) -> AABB<[f64; 2]>;

    /// true if `point` is within `radius_km` of `center`.
    fn contains(&self, center: &Point<f64>, radius_km: f64, point: &Point<f64>) -> bool;

    /// name reported as the analysis methodology.
    fn name(&self) -> &'static str;
}

/// the flat degree approximation: the square of half-width `radius_km / 111.0`
/// degrees on both axes. corners reach about 41% farther than `radius_km`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundingBoxContainment;

impl SpatialContainment for BoundingBoxContainment {
    fn envelope(&self, center: &Point<f64>, radius_km: f64) -> AABB<[f64; 2]> {
        let delta = geo_utils::km_to_degrees(radius_km);
        geo_utils::envelope_around(center, delta, delta)
    }

    fn contains(&self, center: &Point<f64>, radius_km: f64, point: &Point<f64>) -> bool {
        geo_utils::envelope_contains(&self.envelope(center, radius_km), point)
    }

    fn name(&self) -> &'static str {
        "bounding_box"
    }
}

/// true circular containment using great-circle distance.
#[derive(Debug, Clone, Copy, Default)]
pub struct HaversineContainment;

impl SpatialContainment for HaversineContainment {
    fn envelope(&self, center: &Point<f64>, radius_km: f64) -> AABB<[f64; 2]> {
        // 111.0 km per degree understates the true meridian degree, so the
        // latitude extent already over-covers the circle.
        let delta_y = geo_utils::km_to_degrees(radius_km);
        let cos_lat = center.y().to_radians().cos().abs().max(1e-6);
        let delta_x = (delta_y / cos_lat).min(180.0);
        geo_utils::envelope_around(center, delta_x, delta_y)
    }

    fn contains(&self, center: &Point<f64>, radius_km: f64, point: &Point<f64>) -> bool {
        geo_utils::haversine_km(center, point) <= radius_km
    }

    fn name(&self) -> &'static str {
        "haversine"
    }
}
