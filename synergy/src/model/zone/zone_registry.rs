use super::Zone;
use crate::model::{geo_filter, SynergyError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// fixed set of zones available for analysis, keyed by lowercase name and
/// kept in registration order.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "Vec<Zone>", into = "Vec<Zone>")]
pub struct ZoneRegistry {
    zones: IndexMap<String, Zone>,
}

impl Default for ZoneRegistry {
    /// the five Ensenada zones of the reference configuration.
    fn default() -> Self {
        let zones = vec![
            Zone::new("maneadero", 31.7167, -116.5667, 3.0),
            Zone::new("centro", 31.8650, -116.6217, 2.0),
            Zone::new("chapultepec", 31.8386, -116.6014, 2.0),
            Zone::new("sauzal", 31.8833, -116.6833, 2.5),
            Zone::new("valle dorado", 31.8489, -116.5858, 2.0),
        ];
        Self {
            zones: zones.into_iter().map(|z| (z.name.clone(), z)).collect(),
        }
    }
}

impl TryFrom<Vec<Zone>> for ZoneRegistry {
    type Error = SynergyError;

    fn try_from(zones: Vec<Zone>) -> Result<Self, Self::Error> {
        let mut lookup = IndexMap::with_capacity(zones.len());
        for zone in zones.into_iter() {
            let zone = Zone::new(
                &zone.name,
                zone.center_latitude,
                zone.center_longitude,
                zone.default_radius_km,
            );
            if zone.name.is_empty() {
                return Err(SynergyError::ConfigurationError(String::from(
                    "zone name must not be empty",
                )));
            }
            let valid_latitude = (-90.0..=90.0).contains(&zone.center_latitude);
            let valid_longitude = (-180.0..=180.0).contains(&zone.center_longitude);
            if !valid_latitude || !valid_longitude {
                return Err(SynergyError::ConfigurationError(format!(
                    "zone '{}' has invalid center ({}, {})",
                    zone.name, zone.center_latitude, zone.center_longitude
                )));
            }
            geo_filter::validate_radius(zone.default_radius_km)?;
            if lookup.contains_key(&zone.name) {
                return Err(SynergyError::ConfigurationError(format!(
                    "zone '{}' is defined more than once",
                    zone.name
                )));
            }
            lookup.insert(zone.name.clone(), zone);
        }
        Ok(Self { zones: lookup })
    }
}

impl From<ZoneRegistry> for Vec<Zone> {
    fn from(registry: ZoneRegistry) -> Self {
        registry.zones.into_values().collect()
    }
}

impl ZoneRegistry {
    /// looks up a zone by name, ignoring case and surrounding whitespace.
    ///
    /// # Returns
    ///
    /// * the zone, or [`SynergyError::ZoneNotFound`] listing the valid names
    pub fn resolve_zone(&self, name: &str) -> Result<&Zone, SynergyError> {
        let key = name.trim().to_lowercase();
        self.zones
            .get(&key)
            .ok_or_else(|| SynergyError::ZoneNotFound {
                name: name.to_string(),
                available: self.zone_names(),
            })
    }

    pub fn zone_names(&self) -> Vec<String> {
        self.zones.keys().cloned().collect()
    }

    pub fn zones(&self) -> impl Iterator<Item = &Zone> {
        self.zones.values()
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_zone_is_case_insensitive() {
        let registry = ZoneRegistry::default();
        let zone = registry.resolve_zone("  Valle DORADO ").unwrap();
        assert_eq!(zone.name, "valle dorado");
        assert_eq!(zone.center_latitude, 31.8489);
        assert_eq!(zone.center_longitude, -116.5858);
        assert_eq!(zone.default_radius_km, 2.0);
    }

    #[test]
    fn test_default_registry_has_five_zones() {
        let registry = ZoneRegistry::default();
        assert_eq!(
            registry.zone_names(),
            vec!["maneadero", "centro", "chapultepec", "sauzal", "valle dorado"]
        );
    }

    #[test]
    fn test_unknown_zone() {
        let registry = ZoneRegistry::default();
        match registry.resolve_zone("tijuana") {
            Err(SynergyError::ZoneNotFound { name, available }) => {
                assert_eq!(name, "tijuana");
                assert_eq!(available.len(), 5);
                assert!(available.contains(&String::from("centro")));
            }
            other => panic!("expected ZoneNotFound, found {other:?}"),
        }
    }

    #[test]
    fn test_registry_rejects_duplicates_and_bad_radius() {
        let duplicated = vec![
            Zone::new("centro", 31.8650, -116.6217, 2.0),
            Zone::new("CENTRO", 31.8650, -116.6217, 2.0),
        ];
        assert!(ZoneRegistry::try_from(duplicated).is_err());
        let bad_radius = vec![Zone::new("centro", 31.8650, -116.6217, 0.0)];
        match ZoneRegistry::try_from(bad_radius) {
            Err(SynergyError::InvalidRadius(r)) => assert_eq!(r, 0.0),
            other => panic!("expected InvalidRadius, found {other:?}"),
        }
    }

    #[test]
    fn test_registry_rejects_invalid_center() {
        for (lat, lon) in [(f64::NAN, -116.6217), (31.8650, f64::INFINITY), (95.0, -116.6217)] {
            let zones = vec![Zone::new("centro", lat, lon, 2.0)];
            match ZoneRegistry::try_from(zones) {
                Err(SynergyError::ConfigurationError(msg)) => {
                    assert!(msg.contains("centro"), "unexpected message {msg}")
                }
                other => panic!("expected ConfigurationError, found {other:?}"),
            }
        }
    }

    #[test]
    fn test_registry_json_round_trip_preserves_order() {
        let registry = ZoneRegistry::default();
        let json = serde_json::to_string(&registry).unwrap();
        let decoded: ZoneRegistry = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.zone_names(), registry.zone_names());
    }
}
