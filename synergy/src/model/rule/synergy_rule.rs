use crate::model::SynergyError;
use serde::{Deserialize, Serialize};

/// pairs the categories that signal demand (anchors) with the categories
/// expected to serve that demand nearby.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SynergyRule {
    /// identifier for this group, such as "educacion"
    pub category_tag: String,
    /// substrings identifying anchor businesses, in evaluation order
    pub anchor_keywords: Vec<String>,
    /// substrings identifying complementary businesses
    pub opportunity_keywords: Vec<String>,
    /// display name of the missing business type
    pub opportunity_label: String,
}

impl SynergyRule {
    /// builds a rule, lowercasing keywords so they compare against
    /// lowercased categories.
    pub fn new(
        category_tag: &str,
        anchor_keywords: &[&str],
        opportunity_keywords: &[&str],
        opportunity_label: &str,
    ) -> Self {
        Self {
            category_tag: category_tag.to_string(),
            anchor_keywords: normalize_keywords(anchor_keywords.iter().copied()),
            opportunity_keywords: normalize_keywords(opportunity_keywords.iter().copied()),
            opportunity_label: opportunity_label.to_string(),
        }
    }

    /// checks that the rule can produce meaningful results and returns it with
    /// normalized keywords.
    pub fn validated(self) -> Result<Self, SynergyError> {
        if self.category_tag.trim().is_empty() {
            return Err(SynergyError::InvalidRule(String::from(
                "category_tag must not be empty",
            )));
        }
        if self.opportunity_label.trim().is_empty() {
            return Err(SynergyError::InvalidRule(format!(
                "rule '{}' has an empty opportunity_label",
                self.category_tag
            )));
        }
        let anchor_keywords = normalize_keywords(self.anchor_keywords.iter().map(String::as_str));
        let opportunity_keywords =
            normalize_keywords(self.opportunity_keywords.iter().map(String::as_str));
        if anchor_keywords.iter().any(|k| k.is_empty()) || anchor_keywords.is_empty() {
            return Err(SynergyError::InvalidRule(format!(
                "rule '{}' needs at least one non-empty anchor keyword",
                self.category_tag
            )));
        }
        if opportunity_keywords.iter().any(|k| k.is_empty()) || opportunity_keywords.is_empty() {
            return Err(SynergyError::InvalidRule(format!(
                "rule '{}' needs at least one non-empty opportunity keyword",
                self.category_tag
            )));
        }
        Ok(Self {
            anchor_keywords,
            opportunity_keywords,
            ..self
        })
    }
}

fn normalize_keywords<'a>(keywords: impl Iterator<Item = &'a str>) -> Vec<String> {
    keywords.map(|k| k.trim().to_lowercase()).collect()
}
