use crate::util::text_utils;
use geo::Point;
use serde::{Deserialize, Serialize};

/// a single business location from the source dataset. categories are stored
/// lowercased so that keyword tests never need to care about case.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BusinessRecord {
    #[serde(rename = "categoria_negocio")]
    pub category: String,
    #[serde(rename = "latitud")]
    pub latitude: f64,
    #[serde(rename = "longitud")]
    pub longitude: f64,
    #[serde(rename = "direccion", default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl BusinessRecord {
    pub fn new(category: &str, latitude: f64, longitude: f64, address: Option<String>) -> Self {
        Self {
            category: category.trim().to_lowercase(),
            latitude,
            longitude,
            address,
        }
    }

    /// location as a [`Point`] in (x=longitude, y=latitude) order.
    pub fn point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }

    /// location as an rstar-compatible coordinate pair in (x, y) order.
    pub fn coordinate(&self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }

    /// category name in title case, as shown to end users.
    pub fn display_category(&self) -> String {
        text_utils::title_case(&self.category)
    }
}
