use super::Dataset;
use indexmap::IndexMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// number of categories listed in [`DatasetStatistics::most_common_categories`].
const MOST_COMMON_LIMIT: usize = 10;

/// summary of a loaded dataset.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DatasetStatistics {
    #[serde(rename = "total_negocios")]
    pub total_businesses: usize,
    #[serde(rename = "categorias_unicas")]
    pub unique_categories: usize,
    #[serde(rename = "cobertura_geografica")]
    pub coverage: Option<GeographicCoverage>,
    /// category to count, most common first, ties by name.
    #[serde(rename = "categorias_mas_comunes")]
    pub most_common_categories: IndexMap<String, usize>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct GeographicCoverage {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl From<&Dataset> for DatasetStatistics {
    fn from(dataset: &Dataset) -> Self {
        let records = dataset.records();
        let counts = records.iter().map(|r| r.category.as_str()).counts();
        let most_common_categories = counts
            .iter()
            .sorted_by(|(a_cat, a_cnt), (b_cat, b_cnt)| b_cnt.cmp(a_cnt).then(a_cat.cmp(b_cat)))
            .take(MOST_COMMON_LIMIT)
            .map(|(category, count)| (category.to_string(), *count))
            .collect::<IndexMap<_, _>>();
        let coverage = records.iter().fold(None, |acc: Option<GeographicCoverage>, r| {
            Some(match acc {
                None => GeographicCoverage {
                    lat_min: r.latitude,
                    lat_max: r.latitude,
                    lon_min: r.longitude,
                    lon_max: r.longitude,
                },
                Some(c) => GeographicCoverage {
                    lat_min: c.lat_min.min(r.latitude),
                    lat_max: c.lat_max.max(r.latitude),
                    lon_min: c.lon_min.min(r.longitude),
                    lon_max: c.lon_max.max(r.longitude),
                },
            })
        });
        Self {
            total_businesses: records.len(),
            unique_categories: counts.len(),
            coverage,
            most_common_categories,
        }
    }
}
