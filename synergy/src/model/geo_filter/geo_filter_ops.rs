use super::{BoundingBoxContainment, SpatialContainment};
use crate::model::SynergyError;
use geo::Point;
use synergy_core::model::BusinessRecord;

/// keeps every record inside the bounding box of half-width `radius_km / 111.0`
/// degrees around the center, preserving input order. this is the reference
/// zone filter; see [`filter_with`] for other containment rules.
///
/// # Arguments
///
/// * `records` - business records to filter
/// * `center_lat` - latitude of the center point, in degrees
/// * `center_lon` - longitude of the center point, in degrees
/// * `radius_km` - half-width of the bounding box, in kilometers
///
/// # Returns
///
/// * the records within the box. an empty result is valid.
pub fn filter_by_radius(
    records: &[BusinessRecord],
    center_lat: f64,
    center_lon: f64,
    radius_km: f64,
) -> Vec<BusinessRecord> {
    filter_with(
        &BoundingBoxContainment,
        records,
        center_lat,
        center_lon,
        radius_km,
    )
}

/// keeps every record accepted by the containment rule, preserving input order.
pub fn filter_with(
    containment: &dyn SpatialContainment,
    records: &[BusinessRecord],
    center_lat: f64,
    center_lon: f64,
    radius_km: f64,
) -> Vec<BusinessRecord> {
    let center = Point::new(center_lon, center_lat);
    records
        .iter()
        .filter(|r| containment.contains(&center, radius_km, &r.point()))
        .cloned()
        .collect()
}

/// rejects radii that are zero, negative, NaN or infinite.
pub fn validate_radius(radius_km: f64) -> Result<f64, SynergyError> {
    if radius_km.is_finite() && radius_km > 0.0 {
        Ok(radius_km)
    } else {
        Err(SynergyError::InvalidRadius(radius_km))
    }
}
