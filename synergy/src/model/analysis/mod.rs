mod analyzer_config;
mod confidence;
mod opportunity;
mod synergy_analyzer;
mod zone_analysis;
mod zone_inspection;

pub use analyzer_config::{AnalyzerConfig, DEFAULT_SEARCH_RADIUS_KM};
pub use confidence::Confidence;
pub use opportunity::{Opportunity, ADDRESS_UNAVAILABLE};
pub use synergy_analyzer::{find_opportunities, SynergyAnalyzer};
pub use zone_analysis::{AnalysisSummary, ZoneAnalysis};
pub use zone_inspection::ZoneInspection;
