use super::{BoundingBoxContainment, HaversineContainment, SpatialContainment};
use geo::Point;
use rstar::AABB;
use serde::{Deserialize, Serialize};

/// configurable choice of [`SpatialContainment`] used for neighbor searches.
#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum ContainmentPolicy {
    #[default]
    BoundingBox,
    Haversine,
}

impl SpatialContainment for ContainmentPolicy {
    fn envelope(&self, center: &Point<f64>, radius_km: f64) -> AABB<[f64; 2]> {
        match self {
            ContainmentPolicy::BoundingBox => BoundingBoxContainment.envelope(center, radius_km),
            ContainmentPolicy::Haversine => HaversineContainment.envelope(center, radius_km),
        }
    }

    fn contains(&self, center: &Point<f64>, radius_km: f64, point: &Point<f64>) -> bool {
        match self {
            ContainmentPolicy::BoundingBox => {
                BoundingBoxContainment.contains(center, radius_km, point)
            }
            ContainmentPolicy::Haversine => {
                HaversineContainment.contains(center, radius_km, point)
            }
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ContainmentPolicy::BoundingBox => BoundingBoxContainment.name(),
            ContainmentPolicy::Haversine => HaversineContainment.name(),
        }
    }
}

impl std::fmt::Display for ContainmentPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
