use serde::{Deserialize, Serialize};

/// a named area of interest with the radius used when a caller does not
/// provide one.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Zone {
    pub name: String,
    pub center_latitude: f64,
    pub center_longitude: f64,
    pub default_radius_km: f64,
}

impl Zone {
    pub fn new(name: &str, center_latitude: f64, center_longitude: f64, default_radius_km: f64) -> Self {
        Self {
            name: name.trim().to_lowercase(),
            center_latitude,
            center_longitude,
            default_radius_km,
        }
    }
}
