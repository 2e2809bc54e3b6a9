use super::{AnalyzerConfig, Opportunity};
use crate::model::{
    geo_filter::{self, RecordIndex, SpatialContainment},
    rule::{CategoryMatcher, SubstringMatcher, SynergyRule, SynergyRuleSet},
    SynergyError,
};
use std::collections::HashSet;
use synergy_core::model::BusinessRecord;

/// finds anchor businesses that lack a complementary business nearby.
///
/// for each rule, anchors are the records whose category matches one of the
/// rule's anchor keywords. an anchor is served when any record within
/// `search_radius_km` of it (the anchor itself included) matches one of the
/// rule's opportunity keywords. every unserved anchor yields one
/// [`Opportunity`].
///
/// keyword matching and spatial containment are both pluggable, see
/// [`CategoryMatcher`] and [`SpatialContainment`].
pub struct SynergyAnalyzer {
    search_radius_km: f64,
    deduplicate_anchors: bool,
    containment: Box<dyn SpatialContainment>,
    matcher: Box<dyn CategoryMatcher>,
}

impl Default for SynergyAnalyzer {
    fn default() -> Self {
        let config = AnalyzerConfig::default();
        Self {
            search_radius_km: config.search_radius_km,
            deduplicate_anchors: config.deduplicate_anchors,
            containment: Box::new(config.containment),
            matcher: Box::new(SubstringMatcher),
        }
    }
}

impl TryFrom<&AnalyzerConfig> for SynergyAnalyzer {
    type Error = SynergyError;

    fn try_from(config: &AnalyzerConfig) -> Result<Self, Self::Error> {
        let search_radius_km = geo_filter::validate_radius(config.search_radius_km)?;
        Ok(Self {
            search_radius_km,
            deduplicate_anchors: config.deduplicate_anchors,
            containment: Box::new(config.containment),
            matcher: Box::new(SubstringMatcher),
        })
    }
}

impl SynergyAnalyzer {
    /// replaces the keyword matcher.
    pub fn with_matcher(self, matcher: impl CategoryMatcher + 'static) -> Self {
        Self {
            matcher: Box::new(matcher),
            ..self
        }
    }

    /// replaces the containment rule used for the neighbor search.
    pub fn with_containment(self, containment: impl SpatialContainment + 'static) -> Self {
        Self {
            containment: Box::new(containment),
            ..self
        }
    }

    pub fn with_deduplicated_anchors(self, deduplicate_anchors: bool) -> Self {
        Self {
            deduplicate_anchors,
            ..self
        }
    }

    pub fn search_radius_km(&self) -> f64 {
        self.search_radius_km
    }

    /// name of the containment used for the neighbor search.
    pub fn containment_name(&self) -> &'static str {
        self.containment.name()
    }

    /// runs every rule against the records of a zone.
    ///
    /// # Arguments
    ///
    /// * `zone_records` - records already restricted to one zone
    /// * `rules` - the rules to evaluate, each independently
    ///
    /// # Returns
    ///
    /// * opportunities grouped by rule in rule order, anchors in discovery order.
    ///   empty input yields an empty list.
    pub fn find_opportunities(
        &self,
        zone_records: &[BusinessRecord],
        rules: &SynergyRuleSet,
    ) -> Vec<Opportunity> {
        if zone_records.is_empty() {
            return vec![];
        }
        let index = RecordIndex::new(zone_records);
        let mut opportunities = vec![];
        for rule in rules {
            let anchors = self.find_anchors(zone_records, rule);
            log::debug!(
                "rule '{}': {} anchors found among {} businesses",
                rule.category_tag,
                anchors.len(),
                zone_records.len()
            );
            let unserved = anchors
                .into_iter()
                .filter(|anchor| !self.is_served(&index, anchor, rule))
                .map(|anchor| {
                    Opportunity::new(
                        &rule.category_tag,
                        &rule.opportunity_label,
                        anchor,
                        self.search_radius_km,
                    )
                })
                .collect::<Vec<_>>();
            log::debug!(
                "rule '{}': {} unserved anchors",
                rule.category_tag,
                unserved.len()
            );
            opportunities.extend(unserved);
        }
        log::info!(
            "found {} opportunities across {} rules",
            opportunities.len(),
            rules.len()
        );
        opportunities
    }

    /// collects anchors keyword by keyword. without deduplication a record
    /// matching k anchor keywords is returned k times.
    fn find_anchors<'a>(
        &self,
        zone_records: &'a [BusinessRecord],
        rule: &SynergyRule,
    ) -> Vec<&'a BusinessRecord> {
        let mut seen: HashSet<usize> = HashSet::new();
        let mut anchors = vec![];
        for keyword in rule.anchor_keywords.iter() {
            for (idx, record) in zone_records.iter().enumerate() {
                if !self.matcher.matches(&record.category, keyword) {
                    continue;
                }
                if self.deduplicate_anchors && !seen.insert(idx) {
                    continue;
                }
                anchors.push(record);
            }
        }
        anchors
    }

    fn is_served(&self, index: &RecordIndex, anchor: &BusinessRecord, rule: &SynergyRule) -> bool {
        index
            .nearby(
                self.containment.as_ref(),
                &anchor.point(),
                self.search_radius_km,
            )
            .into_iter()
            .any(|r| {
                self.matcher
                    .matches_any(&r.category, &rule.opportunity_keywords)
            })
    }
}

/// runs the default analyzer: substring matching, bounding box containment,
/// 0.5 km neighbor search and no anchor deduplication.
pub fn find_opportunities(
    zone_records: &[BusinessRecord],
    rules: &SynergyRuleSet,
) -> Vec<Opportunity> {
    SynergyAnalyzer::default().find_opportunities(zone_records, rules)
}
