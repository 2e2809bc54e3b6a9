use super::{
    analysis::{AnalysisSummary, SynergyAnalyzer, ZoneAnalysis, ZoneInspection},
    dataset::{
        dataset_ops, Dataset, DatasetColumns, DatasetLoadSummary, DatasetSnapshot,
        DatasetStatistics,
    },
    geo_filter,
    rule::SynergyRuleSet,
    zone::{Zone, ZoneRegistry},
    SynergyError,
};
use crate::config::SynergyConfiguration;
use rayon::prelude::*;
use std::{path::Path, sync::Arc};

/// zone radius used when a caller does not ask for one.
pub const DEFAULT_ANALYSIS_RADIUS_KM: f64 = 2.0;

/// number of in-zone records listed by [`SynergyService::inspect_zone`].
pub const DEFAULT_INSPECTION_LIMIT: usize = 20;

/// ties the zone registry, rule set, analyzer and dataset snapshot together.
/// all state is read-only apart from the snapshot, which can be reloaded.
pub struct SynergyService {
    zones: ZoneRegistry,
    rules: SynergyRuleSet,
    analyzer: SynergyAnalyzer,
    snapshot: DatasetSnapshot,
}

impl SynergyService {
    pub fn new(
        zones: ZoneRegistry,
        rules: SynergyRuleSet,
        analyzer: SynergyAnalyzer,
        snapshot: DatasetSnapshot,
    ) -> Self {
        Self {
            zones,
            rules,
            analyzer,
            snapshot,
        }
    }

    /// builds the service from a configuration with an empty snapshot.
    pub fn try_from_configuration(conf: &SynergyConfiguration) -> Result<Self, SynergyError> {
        let analyzer = SynergyAnalyzer::try_from(&conf.analyzer)?;
        Ok(Self {
            zones: conf.zones.clone(),
            rules: conf.rules.clone(),
            analyzer,
            snapshot: DatasetSnapshot::empty(),
        })
    }

    pub fn zones(&self) -> &ZoneRegistry {
        &self.zones
    }

    /// publishes a new dataset for subsequent requests.
    pub fn publish_dataset(&self, dataset: Dataset) -> Result<(), SynergyError> {
        self.snapshot.publish(dataset)?;
        Ok(())
    }

    /// reads a business CSV and publishes it. on failure the previous dataset
    /// remains in service.
    pub fn reload_dataset(
        &self,
        filepath: &Path,
        columns: &DatasetColumns,
    ) -> Result<DatasetLoadSummary, SynergyError> {
        let mut summary = DatasetLoadSummary::default();
        self.snapshot.reload(|| {
            let (dataset, load_summary) = dataset_ops::read_csv(filepath, columns)?;
            summary = load_summary;
            Ok(dataset)
        })?;
        Ok(summary)
    }

    /// validates the radius, resolves the zone, restricts the current dataset to
    /// it and runs the analyzer.
    ///
    /// # Arguments
    ///
    /// * `zone_name` - registered zone name, any case
    /// * `radius_km` - zone radius, or [`DEFAULT_ANALYSIS_RADIUS_KM`] when None
    pub fn analyze_zone(
        &self,
        zone_name: &str,
        radius_km: Option<f64>,
    ) -> Result<ZoneAnalysis, SynergyError> {
        let radius_km = geo_filter::validate_radius(radius_km.unwrap_or(DEFAULT_ANALYSIS_RADIUS_KM))?;
        let zone = self.zones.resolve_zone(zone_name)?;
        let dataset = self.snapshot.current()?;
        Ok(self.analyze(zone, radius_km, &dataset))
    }

    /// analyzes every registered zone in parallel over one dataset snapshot,
    /// each with its default radius unless `radius_km` is given.
    pub fn analyze_all_zones(
        &self,
        radius_km: Option<f64>,
    ) -> Result<Vec<ZoneAnalysis>, SynergyError> {
        if let Some(r) = radius_km {
            geo_filter::validate_radius(r)?;
        }
        let dataset = self.snapshot.current()?;
        let zones = self.zones.zones().collect::<Vec<_>>();
        let result = zones
            .into_par_iter()
            .map(|zone| {
                let radius = radius_km.unwrap_or(zone.default_radius_km);
                self.analyze(zone, radius, &dataset)
            })
            .collect::<Vec<_>>();
        Ok(result)
    }

    /// lists the records inside a zone, using the same default radius as
    /// [`SynergyService::analyze_zone`] so both see the same businesses.
    pub fn inspect_zone(
        &self,
        zone_name: &str,
        radius_km: Option<f64>,
        limit: Option<usize>,
    ) -> Result<ZoneInspection, SynergyError> {
        let zone = self.zones.resolve_zone(zone_name)?;
        let radius_km = geo_filter::validate_radius(radius_km.unwrap_or(DEFAULT_ANALYSIS_RADIUS_KM))?;
        let dataset = self.snapshot.current()?;
        Ok(ZoneInspection::build(
            zone,
            dataset.records(),
            radius_km,
            limit.unwrap_or(DEFAULT_INSPECTION_LIMIT),
        ))
    }

    pub fn statistics(&self) -> Result<DatasetStatistics, SynergyError> {
        let dataset = self.snapshot.current()?;
        Ok(DatasetStatistics::from(dataset.as_ref()))
    }

    fn analyze(&self, zone: &Zone, radius_km: f64, dataset: &Arc<Dataset>) -> ZoneAnalysis {
        log::info!("analyzing zone '{}' with radius {radius_km} km", zone.name);
        let zone_records = geo_filter::filter_by_radius(
            dataset.records(),
            zone.center_latitude,
            zone.center_longitude,
            radius_km,
        );
        log::info!("{} businesses in zone '{}'", zone_records.len(), zone.name);
        let opportunities = self.analyzer.find_opportunities(&zone_records, &self.rules);
        let summary = AnalysisSummary {
            analyzed_categories: self.rules.category_tags(),
            anchor_search_radius_km: self.analyzer.search_radius_km(),
            containment: self.analyzer.containment_name().to_string(),
        };
        ZoneAnalysis::new(zone, radius_km, zone_records.len(), opportunities, summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::geo_filter::HaversineContainment;
    use synergy_core::model::BusinessRecord;

    fn service() -> SynergyService {
        let dataset = Dataset::from(vec![
            BusinessRecord::new("primaria benito juarez", 31.8650, -116.6217, None),
            BusinessRecord::new("hospital de maneadero", 31.7167, -116.5667, None),
            BusinessRecord::new("farmacia similares", 31.7168, -116.5668, None),
            BusinessRecord::new("gym el sauzal", 31.8833, -116.6833, None),
        ]);
        SynergyService::new(
            ZoneRegistry::default(),
            SynergyRuleSet::default(),
            SynergyAnalyzer::default(),
            DatasetSnapshot::new(dataset),
        )
    }

    #[test]
    fn test_analyze_centro() {
        let analysis = service().analyze_zone("Centro", Some(2.0)).unwrap();
        assert_eq!(analysis.zone, "centro");
        assert_eq!(analysis.radius_km, 2.0);
        assert_eq!(analysis.total_businesses, 1);
        assert_eq!(analysis.total_opportunities, 1);
        assert_eq!(analysis.opportunities[0].synergy_category, "educacion");
        assert_eq!(analysis.summary.anchor_search_radius_km, 0.5);
        assert_eq!(analysis.opportunity_rate(), 100.0);
    }

    #[test]
    fn test_analyze_defaults_to_two_km() {
        let analysis = service().analyze_zone("centro", None).unwrap();
        assert_eq!(analysis.radius_km, DEFAULT_ANALYSIS_RADIUS_KM);
    }

    #[test]
    fn test_served_hospital_in_maneadero() {
        let analysis = service().analyze_zone("maneadero", None).unwrap();
        assert_eq!(analysis.total_businesses, 2);
        assert!(analysis.opportunities.is_empty());
    }

    #[test]
    fn test_errors() {
        let service = service();
        assert!(matches!(
            service.analyze_zone("tijuana", None),
            Err(SynergyError::ZoneNotFound { .. })
        ));
        assert!(matches!(
            service.analyze_zone("centro", Some(0.0)),
            Err(SynergyError::InvalidRadius(_))
        ));
        let unloaded = SynergyService::new(
            ZoneRegistry::default(),
            SynergyRuleSet::default(),
            SynergyAnalyzer::default(),
            DatasetSnapshot::empty(),
        );
        assert!(matches!(
            unloaded.analyze_zone("centro", None),
            Err(SynergyError::DatasetUnavailable(_))
        ));
    }

    #[test]
    fn test_analyze_all_zones_in_registry_order() {
        let result = service().analyze_all_zones(None).unwrap();
        let names = result.iter().map(|a| a.zone.as_str()).collect::<Vec<_>>();
        assert_eq!(
            names,
            vec!["maneadero", "centro", "chapultepec", "sauzal", "valle dorado"]
        );
        let sauzal = &result[3];
        assert_eq!(sauzal.radius_km, 2.5);
        assert_eq!(sauzal.total_opportunities, 1);
        assert_eq!(sauzal.opportunities[0].synergy_category, "deporte");
    }

    #[test]
    fn test_reload_changes_results() {
        let service = service();
        service
            .publish_dataset(Dataset::from(vec![
                BusinessRecord::new("primaria benito juarez", 31.8650, -116.6217, None),
                BusinessRecord::new("papeleria el sol", 31.8651, -116.6218, None),
            ]))
            .unwrap();
        let analysis = service.analyze_zone("centro", None).unwrap();
        assert_eq!(analysis.total_businesses, 2);
        assert!(analysis.opportunities.is_empty());
    }

    #[test]
    fn test_inspection_sees_analyzed_zone() {
        let service = service();
        // gym roughly 2.5 km north of the maneadero center, outside the 2.0 km default
        service
            .publish_dataset(Dataset::from(vec![
                BusinessRecord::new("hospital de maneadero", 31.7167, -116.5667, None),
                BusinessRecord::new("gym del valle", 31.7392, -116.5667, None),
            ]))
            .unwrap();
        let inspection = service.inspect_zone("maneadero", None, None).unwrap();
        let analysis = service.analyze_zone("maneadero", None).unwrap();
        assert_eq!(inspection.total_businesses, analysis.total_businesses);
        assert_eq!(inspection.total_businesses, 1);
    }

    #[test]
    fn test_summary_reports_analyzer_containment() {
        let service = SynergyService::new(
            ZoneRegistry::default(),
            SynergyRuleSet::default(),
            SynergyAnalyzer::default().with_containment(HaversineContainment),
            DatasetSnapshot::new(Dataset::default()),
        );
        let analysis = service.analyze_zone("centro", None).unwrap();
        assert_eq!(analysis.summary.containment, "haversine");
        let analysis = service_from_defaults().analyze_zone("centro", None).unwrap();
        assert_eq!(analysis.summary.containment, "bounding_box");
    }

    fn service_from_defaults() -> SynergyService {
        let service = SynergyService::try_from_configuration(&SynergyConfiguration::default())
            .unwrap();
        service.publish_dataset(Dataset::default()).unwrap();
        service
    }

    #[test]
    fn test_failed_reload_keeps_previous_dataset() {
        let service = service();
        let result = service.reload_dataset(
            Path::new("does/not/exist/negocios.csv"),
            &DatasetColumns::default(),
        );
        assert!(result.is_err());
        assert_eq!(service.statistics().unwrap().total_businesses, 4);
    }

    #[test]
    fn test_inspect_and_statistics() {
        let service = service();
        let inspection = service.inspect_zone("maneadero", None, Some(1)).unwrap();
        assert_eq!(inspection.total_businesses, 2);
        assert_eq!(inspection.businesses.len(), 1);
        let stats = service.statistics().unwrap();
        assert_eq!(stats.total_businesses, 4);
    }
}
