pub mod analysis;
pub mod dataset;
pub mod geo_filter;
pub mod rule;
mod synergy_error;
mod synergy_service;
pub mod zone;

pub use synergy_error::SynergyError;
pub use synergy_service::{SynergyService, DEFAULT_ANALYSIS_RADIUS_KM};
