use super::SynergyRule;
use crate::model::SynergyError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// the read-only collection of rules evaluated by the analyzer, in order.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "Vec<SynergyRule>", into = "Vec<SynergyRule>")]
pub struct SynergyRuleSet {
    rules: Vec<SynergyRule>,
}

impl Default for SynergyRuleSet {
    /// education, health and sports rules of the reference configuration.
    fn default() -> Self {
        let rules = vec![
            SynergyRule::new(
                "educacion",
                &[
                    "escuela",
                    "colegio",
                    "instituto",
                    "universidad",
                    "preparatoria",
                    "cbtis",
                    "conalep",
                    "secundaria",
                    "primaria",
                ],
                &[
                    "papeleria",
                    "copias",
                    "utiles escolares",
                    "libretas",
                    "lapices",
                    "cyber",
                    "internet",
                ],
                "Papelería / Tienda de útiles",
            ),
            SynergyRule::new(
                "salud",
                &[
                    "hospital",
                    "clinica",
                    "consultorio",
                    "imss",
                    "issste",
                    "centro de salud",
                    "medico",
                    "doctor",
                ],
                &["farmacia", "drogueria", "botica", "medicina", "farmaceutico"],
                "Farmacia",
            ),
            SynergyRule::new(
                "deporte",
                &["gym", "gimnasio", "deportivo", "fitness", "crossfit", "ejercicio"],
                &[
                    "suplementos",
                    "proteina",
                    "vitaminas",
                    "nutricion",
                    "deportiva",
                    "tenis",
                    "zapatos deportivos",
                ],
                "Tienda de suplementos / Nutrición",
            ),
        ];
        Self { rules }
    }
}

impl TryFrom<Vec<SynergyRule>> for SynergyRuleSet {
    type Error = SynergyError;

    fn try_from(rules: Vec<SynergyRule>) -> Result<Self, Self::Error> {
        let mut tags = HashSet::new();
        let validated = rules
            .into_iter()
            .map(|rule| {
                let rule = rule.validated()?;
                if !tags.insert(rule.category_tag.clone()) {
                    return Err(SynergyError::InvalidRule(format!(
                        "category_tag '{}' is defined more than once",
                        rule.category_tag
                    )));
                }
                Ok(rule)
            })
            .collect::<Result<Vec<_>, SynergyError>>()?;
        Ok(Self { rules: validated })
    }
}

impl From<SynergyRuleSet> for Vec<SynergyRule> {
    fn from(rule_set: SynergyRuleSet) -> Self {
        rule_set.rules
    }
}

impl SynergyRuleSet {
    pub fn rules(&self) -> &[SynergyRule] {
        &self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SynergyRule> {
        self.rules.iter()
    }

    pub fn get(&self, category_tag: &str) -> Option<&SynergyRule> {
        self.rules.iter().find(|r| r.category_tag == category_tag)
    }

    pub fn category_tags(&self) -> Vec<String> {
        self.rules.iter().map(|r| r.category_tag.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a> IntoIterator for &'a SynergyRuleSet {
    type Item = &'a SynergyRule;
    type IntoIter = std::slice::Iter<'a, SynergyRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
