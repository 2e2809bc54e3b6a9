mod containment;
mod containment_policy;
pub mod geo_filter_ops;
mod record_index;

pub use containment::{BoundingBoxContainment, HaversineContainment, SpatialContainment};
pub use containment_policy::ContainmentPolicy;
pub use geo_filter_ops::{filter_by_radius, filter_with, validate_radius};
pub use record_index::RecordIndex;
