use super::DatasetConfig;
use crate::model::{
    analysis::AnalyzerConfig, rule::SynergyRuleSet, zone::ZoneRegistry, SynergyError,
};
use config::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// run configuration. every section is optional and falls back to the
/// reference zones, rules and analyzer settings.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SynergyConfiguration {
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub zones: ZoneRegistry,
    #[serde(default)]
    pub rules: SynergyRuleSet,
}

impl SynergyConfiguration {
    /// the configuration as a TOML document.
    pub fn to_toml(&self) -> Result<String, SynergyError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl TryFrom<&Path> for SynergyConfiguration {
    type Error = SynergyError;

    /// reads a `.toml` or `.json` configuration file.
    fn try_from(filepath: &Path) -> Result<Self, Self::Error> {
        let filepath_str = filepath.to_string_lossy();
        let format = match filepath.extension().and_then(|e| e.to_str()) {
            Some("toml") => config::FileFormat::Toml,
            Some("json") => config::FileFormat::Json,
            _ => {
                return Err(SynergyError::ConfigurationError(format!(
                    "unsupported file type: {filepath_str}"
                )))
            }
        };
        let source = config::File::new(&filepath_str, format);
        let config = Config::builder()
            .add_source(source)
            .build()
            .map_err(|e| SynergyError::ConfigReadError {
                msg: format!("failed reading '{filepath_str}'"),
                source: e,
            })?;
        config
            .try_deserialize::<SynergyConfiguration>()
            .map_err(|e| SynergyError::ConfigReadError {
                msg: format!("failed decoding '{filepath_str}'"),
                source: e,
            })
    }
}

impl TryFrom<&String> for SynergyConfiguration {
    type Error = SynergyError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        SynergyConfiguration::try_from(Path::new(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::geo_filter::ContainmentPolicy;
    use tempfile::TempDir;

    #[test]
    fn test_default_configuration_toml() {
        let toml_str = SynergyConfiguration::default().to_toml().unwrap();
        let decoded: SynergyConfiguration = toml::from_str(&toml_str).unwrap();
        assert_eq!(decoded.zones.len(), 5);
        assert_eq!(decoded.rules.category_tags(), vec!["educacion", "salud", "deporte"]);
        assert_eq!(decoded.analyzer, AnalyzerConfig::default());
    }

    #[test]
    fn test_partial_configuration() {
        let toml_str = r#"
            [analyzer]
            deduplicate_anchors = true
            containment = { type = "haversine" }

            [[zones]]
            name = "Ensenada Norte"
            center_latitude = 31.9
            center_longitude = -116.62
            default_radius_km = 1.5
        "#;
        let conf: SynergyConfiguration = toml::from_str(toml_str).unwrap();
        assert!(conf.analyzer.deduplicate_anchors);
        assert_eq!(conf.analyzer.search_radius_km, 0.5);
        assert_eq!(conf.analyzer.containment, ContainmentPolicy::Haversine);
        assert_eq!(conf.zones.zone_names(), vec!["ensenada norte"]);
        assert_eq!(conf.rules.len(), 3);
        assert_eq!(conf.dataset.columns.category, "categoria_negocio");
    }

    #[test]
    fn test_invalid_rule_in_configuration() {
        let toml_str = r#"
            [[rules]]
            category_tag = "mascotas"
            anchor_keywords = []
            opportunity_keywords = ["veterinaria"]
            opportunity_label = "Veterinaria"
        "#;
        let result: Result<SynergyConfiguration, _> = toml::from_str(toml_str);
        assert!(result.is_err());
    }

    #[test]
    fn test_read_toml_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("synergy.toml");
        let mut conf = SynergyConfiguration::default();
        conf.analyzer.deduplicate_anchors = true;
        conf.analyzer.containment = ContainmentPolicy::Haversine;
        conf.dataset.file = Some(String::from("negocios.csv.gz"));
        std::fs::write(&path, conf.to_toml().unwrap()).unwrap();

        let decoded = SynergyConfiguration::try_from(path.as_path()).unwrap();
        assert_eq!(decoded.analyzer, conf.analyzer);
        assert_eq!(decoded.dataset, conf.dataset);
        assert_eq!(decoded.zones.zone_names(), conf.zones.zone_names());
        assert_eq!(decoded.rules.category_tags(), conf.rules.category_tags());
        let salud = decoded.rules.get("salud").unwrap();
        assert_eq!(salud.opportunity_label, "Farmacia");
    }

    #[test]
    fn test_read_json_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("synergy.json");
        let json = r#"{
            "analyzer": { "search_radius_km": 0.3, "containment": { "type": "haversine" } },
            "zones": [
                {
                    "name": "Ensenada Norte",
                    "center_latitude": 31.9,
                    "center_longitude": -116.62,
                    "default_radius_km": 1.5
                }
            ]
        }"#;
        std::fs::write(&path, json).unwrap();

        let conf = SynergyConfiguration::try_from(&path.to_string_lossy().to_string()).unwrap();
        assert_eq!(conf.analyzer.search_radius_km, 0.3);
        assert!(!conf.analyzer.deduplicate_anchors);
        assert_eq!(conf.analyzer.containment, ContainmentPolicy::Haversine);
        assert_eq!(conf.zones.zone_names(), vec!["ensenada norte"]);
        assert_eq!(conf.rules.len(), 3);
    }

    #[test]
    fn test_missing_configuration_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.toml");
        let result = SynergyConfiguration::try_from(path.as_path());
        assert!(matches!(result, Err(SynergyError::ConfigReadError { .. })));
    }

    #[test]
    fn test_unsupported_file_type() {
        let result = SynergyConfiguration::try_from(Path::new("synergy.yaml"));
        assert!(matches!(result, Err(SynergyError::ConfigurationError(_))));
    }
}
