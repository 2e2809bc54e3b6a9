use crate::model::geo_filter::ContainmentPolicy;
use serde::{Deserialize, Serialize};

/// radius around each anchor searched for complementary businesses.
pub const DEFAULT_SEARCH_RADIUS_KM: f64 = 0.5;

/// tunable behaviors of the [`super::SynergyAnalyzer`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AnalyzerConfig {
    #[serde(default = "default_search_radius_km")]
    pub search_radius_km: f64,
    /// when true, a business matching several anchor keywords of one rule is
    /// treated as a single anchor. when false it is evaluated once per keyword.
    #[serde(default)]
    pub deduplicate_anchors: bool,
    #[serde(default)]
    pub containment: ContainmentPolicy,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            search_radius_km: DEFAULT_SEARCH_RADIUS_KM,
            deduplicate_anchors: false,
            containment: ContainmentPolicy::default(),
        }
    }
}

fn default_search_radius_km() -> f64 {
    DEFAULT_SEARCH_RADIUS_KM
}
