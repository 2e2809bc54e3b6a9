use geo::{line_string, Haversine, Length, LineString, Point};
use rstar::AABB;

/// kilometers per degree used for the flat degree approximation. this treats
/// latitude and longitude degrees alike and does not correct for longitude
/// compression away from the equator.
pub const KM_PER_DEGREE: f64 = 111.0;

/// converts a distance in kilometers to a degree delta using [`KM_PER_DEGREE`].
pub fn km_to_degrees(km: f64) -> f64 {
    km / KM_PER_DEGREE
}

/// builds the rectangular envelope centered at a point, extending `delta_x`
/// degrees in longitude and `delta_y` degrees in latitude on each side.
///
/// # Arguments
///
/// * `center` - center of the envelope in (x=longitude, y=latitude) order
/// * `delta_x` - half-width of the envelope in degrees
/// * `delta_y` - half-height of the envelope in degrees
///
/// # Returns
///
/// * an envelope that can be used to query an rstar tree of `[f64; 2]` points
pub fn envelope_around(center: &Point<f64>, delta_x: f64, delta_y: f64) -> AABB<[f64; 2]> {
    AABB::from_corners(
        [center.x() - delta_x, center.y() - delta_y],
        [center.x() + delta_x, center.y() + delta_y],
    )
}

/// tests whether a point lies inside an envelope, inclusive on every edge.
pub fn envelope_contains(envelope: &AABB<[f64; 2]>, point: &Point<f64>) -> bool {
    let [xmin, ymin] = envelope.lower();
    let [xmax, ymax] = envelope.upper();
    xmin <= point.x() && point.x() <= xmax && ymin <= point.y() && point.y() <= ymax
}

/// great-circle distance between two WGS84 points, in kilometers.
pub fn haversine_km(src: &Point<f64>, dst: &Point<f64>) -> f64 {
    let line: LineString<f64> = line_string![src.0, dst.0];
    Haversine.length(&line) / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_km_to_degrees() {
        assert_eq!(km_to_degrees(111.0), 1.0);
        assert!((km_to_degrees(0.5) - 0.0045045).abs() < 1e-6);
    }

    #[test]
    fn test_envelope_contains_is_inclusive() {
        let center = Point::new(-116.6217, 31.865);
        let envelope = envelope_around(&center, 0.01, 0.01);
        assert!(envelope_contains(&envelope, &center));
        assert!(envelope_contains(&envelope, &Point::new(-116.615, 31.86)));
        assert!(!envelope_contains(&envelope, &Point::new(-116.6, 31.865)));
    }

    #[test]
    fn test_haversine_km() {
        let a = Point::new(-116.6217, 31.865);
        let b = Point::new(-116.6217, 31.875);
        let distance = haversine_km(&a, &b);
        assert!(
            (distance - 1.112).abs() < 0.01,
            "distance {distance} should be near 1.112 km"
        );
        assert_eq!(haversine_km(&a, &a), 0.0);
    }
}
