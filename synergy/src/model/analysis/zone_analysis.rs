use super::Opportunity;
use crate::model::zone::Zone;
use serde::{Deserialize, Serialize};

/// the result of analyzing one zone, as written by the command line tool.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ZoneAnalysis {
    #[serde(rename = "zona")]
    pub zone: String,
    #[serde(rename = "radio_analizado_km")]
    pub radius_km: f64,
    #[serde(rename = "total_negocios_zona")]
    pub total_businesses: usize,
    #[serde(rename = "total_oportunidades")]
    pub total_opportunities: usize,
    #[serde(rename = "oportunidades")]
    pub opportunities: Vec<Opportunity>,
    #[serde(rename = "estadisticas_analisis")]
    pub summary: AnalysisSummary,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AnalysisSummary {
    #[serde(rename = "categorias_analizadas")]
    pub analyzed_categories: Vec<String>,
    #[serde(rename = "radio_busqueda_anclas_km")]
    pub anchor_search_radius_km: f64,
    #[serde(rename = "metodologia")]
    pub containment: String,
}

impl ZoneAnalysis {
    pub fn new(
        zone: &Zone,
        radius_km: f64,
        total_businesses: usize,
        opportunities: Vec<Opportunity>,
        summary: AnalysisSummary,
    ) -> Self {
        Self {
            zone: zone.name.clone(),
            radius_km,
            total_businesses,
            total_opportunities: opportunities.len(),
            opportunities,
            summary,
        }
    }

    /// share of in-zone businesses that produced an opportunity, as a percentage.
    pub fn opportunity_rate(&self) -> f64 {
        if self.total_businesses == 0 {
            0.0
        } else {
            100.0 * self.total_opportunities as f64 / self.total_businesses as f64
        }
    }
}
