use crate::model::{geo_filter, zone::Zone};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use synergy_core::model::BusinessRecord;

/// raw view of the businesses inside a zone, for checking what the analyzer sees.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ZoneInspection {
    #[serde(rename = "zona")]
    pub zone: String,
    #[serde(rename = "total_negocios")]
    pub total_businesses: usize,
    #[serde(rename = "negocios")]
    pub businesses: Vec<BusinessRecord>,
    #[serde(rename = "categorias_unicas")]
    pub unique_categories: Vec<String>,
}

impl ZoneInspection {
    /// filters the dataset to the zone and keeps the first `limit` records.
    /// unique categories cover the whole zone in first-seen order.
    pub fn build(zone: &Zone, records: &[BusinessRecord], radius_km: f64, limit: usize) -> Self {
        let in_zone = geo_filter::filter_by_radius(
            records,
            zone.center_latitude,
            zone.center_longitude,
            radius_km,
        );
        let unique_categories = in_zone
            .iter()
            .map(|r| r.category.clone())
            .unique()
            .collect_vec();
        let total_businesses = in_zone.len();
        let businesses = in_zone.into_iter().take(limit).collect_vec();
        Self {
            zone: zone.name.clone(),
            total_businesses,
            businesses,
            unique_categories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_inspection() {
        let zone = Zone::new("centro", 31.8650, -116.6217, 2.0);
        let records = vec![
            BusinessRecord::new("papeleria el sol", 31.8651, -116.6218, None),
            BusinessRecord::new("farmacia centro", 31.8660, -116.6217, None),
            BusinessRecord::new("papeleria el sol", 31.8670, -116.6217, None),
            BusinessRecord::new("gym lejano", 32.5, -117.0, None),
        ];
        let inspection = ZoneInspection::build(&zone, &records, 2.0, 2);
        assert_eq!(inspection.zone, "centro");
        assert_eq!(inspection.total_businesses, 3);
        assert_eq!(inspection.businesses.len(), 2);
        assert_eq!(
            inspection.unique_categories,
            vec!["papeleria el sol", "farmacia centro"]
        );
    }
}
