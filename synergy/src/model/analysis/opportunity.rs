use super::Confidence;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use synergy_core::model::BusinessRecord;

/// written in place of an anchor address that the dataset does not provide.
pub const ADDRESS_UNAVAILABLE: &str = "Dirección no disponible";

/// an anchor business with no complementary business nearby. field names on
/// the wire follow the established report format.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Opportunity {
    #[serde(rename = "categoria_sinergia")]
    pub synergy_category: String,
    #[serde(rename = "oportunidad")]
    pub opportunity_label: String,
    #[serde(rename = "ancla")]
    pub anchor_category: String,
    #[serde(
        rename = "ancla_direccion",
        default,
        serialize_with = "serialize_address",
        deserialize_with = "deserialize_address"
    )]
    pub anchor_address: Option<String>,
    #[serde(rename = "ancla_lat")]
    pub anchor_latitude: f64,
    #[serde(rename = "ancla_lon")]
    pub anchor_longitude: f64,
    #[serde(rename = "confianza")]
    pub confidence: Confidence,
    #[serde(rename = "radio_analizado")]
    pub search_radius_km: f64,
}

impl Opportunity {
    pub fn new(
        synergy_category: &str,
        opportunity_label: &str,
        anchor: &BusinessRecord,
        search_radius_km: f64,
    ) -> Self {
        Self {
            synergy_category: synergy_category.to_string(),
            opportunity_label: opportunity_label.to_string(),
            anchor_category: anchor.display_category(),
            anchor_address: anchor.address.clone(),
            anchor_latitude: anchor.latitude,
            anchor_longitude: anchor.longitude,
            confidence: Confidence::High,
            search_radius_km,
        }
    }

    /// the anchor address, or [`ADDRESS_UNAVAILABLE`] when the dataset had none.
    pub fn address_or_placeholder(&self) -> &str {
        self.anchor_address.as_deref().unwrap_or(ADDRESS_UNAVAILABLE)
    }
}

fn serialize_address<S>(address: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(address.as_deref().unwrap_or(ADDRESS_UNAVAILABLE))
}

fn deserialize_address<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|a| a != ADDRESS_UNAVAILABLE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_uses_report_field_names() {
        let anchor = BusinessRecord::new("primaria benito juarez", 31.865, -116.6217, None);
        let opportunity = Opportunity::new("educacion", "Papelería / Tienda de útiles", &anchor, 0.5);
        let json = serde_json::to_value(&opportunity).unwrap();
        assert_eq!(json["categoria_sinergia"], "educacion");
        assert_eq!(json["oportunidad"], "Papelería / Tienda de útiles");
        assert_eq!(json["ancla"], "Primaria Benito Juarez");
        assert_eq!(json["ancla_direccion"], ADDRESS_UNAVAILABLE);
        assert_eq!(json["ancla_lat"], 31.865);
        assert_eq!(json["ancla_lon"], -116.6217);
        assert_eq!(json["confianza"], "alta");
        assert_eq!(json["radio_analizado"], 0.5);
    }

    #[test]
    fn test_placeholder_reads_back_as_missing_address() {
        let anchor = BusinessRecord::new("gym", 31.865, -116.6217, None);
        let opportunity = Opportunity::new("deporte", "Tienda", &anchor, 0.5);
        let json = serde_json::to_string(&opportunity).unwrap();
        let decoded: Opportunity = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.anchor_address, None);
        assert_eq!(decoded.address_or_placeholder(), ADDRESS_UNAVAILABLE);
    }
}
