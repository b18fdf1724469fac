use crate::core::catalog::{CatalogBuilder, ConstantsCatalog};
use crate::domain::model::{FinishTier, KitchenType, RoomCategory, SizeTier};
use crate::utils::error::{PlannerError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// On-disk form of the area/cost tables.
///
/// ```toml
/// [areas.livingRoom]
/// compact = 16.0
/// standard = 20.0
/// spacious = 24.0
///
/// [areas.kitchen.kitchenette]
/// compact = 4.0
/// standard = 5.0
/// spacious = 6.0
///
/// [finish]
/// economy = 5000
/// standard = 6500
/// premium = 9000
///
/// [amenities]
/// balcony = 25000
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub areas: AreaTables,
    pub finish: FinishCosts,
    #[serde(default)]
    pub amenities: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaTables {
    pub living_room: TierAreas,
    pub double_bedroom: TierAreas,
    pub single_bedroom: TierAreas,
    pub bathroom: TierAreas,
    pub kitchen: KitchenAreas,
    pub wc: TierAreas,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierAreas {
    pub compact: f64,
    pub standard: f64,
    pub spacious: f64,
}

impl TierAreas {
    fn iter(&self) -> [(SizeTier, f64); 3] {
        [
            (SizeTier::Compact, self.compact),
            (SizeTier::Standard, self.standard),
            (SizeTier::Spacious, self.spacious),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KitchenAreas {
    pub kitchenette: TierAreas,
    pub separate: TierAreas,
}

/// Construction price per square meter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinishCosts {
    pub economy: u64,
    pub standard: u64,
    pub premium: u64,
}

impl CatalogConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PlannerError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| PlannerError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn into_catalog(self) -> Result<ConstantsCatalog> {
        let catalog = self.builder().build()?;
        tracing::debug!(
            "Catalog loaded with {} amenities",
            catalog.amenity_names().count()
        );
        Ok(catalog)
    }

    fn builder(&self) -> CatalogBuilder {
        let rooms = [
            (RoomCategory::LivingRoom, &self.areas.living_room),
            (RoomCategory::DoubleBedroom, &self.areas.double_bedroom),
            (RoomCategory::SingleBedroom, &self.areas.single_bedroom),
            (RoomCategory::Bathroom, &self.areas.bathroom),
            (RoomCategory::Wc, &self.areas.wc),
        ];
        let kitchens = [
            (KitchenType::Kitchenette, &self.areas.kitchen.kitchenette),
            (KitchenType::Separate, &self.areas.kitchen.separate),
        ];

        let mut builder = ConstantsCatalog::builder()
            .finish_cost(FinishTier::Economy, self.finish.economy)
            .finish_cost(FinishTier::Standard, self.finish.standard)
            .finish_cost(FinishTier::Premium, self.finish.premium);

        for (category, areas) in rooms {
            for (tier, area) in areas.iter() {
                builder = builder.room_area(category, tier, area);
            }
        }
        for (kind, areas) in kitchens {
            for (tier, area) in areas.iter() {
                builder = builder.kitchen_area(kind, tier, area);
            }
        }
        for (name, cost) in &self.amenities {
            builder = builder.amenity(name.clone(), *cost);
        }
        builder
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> Result<()> {
        self.builder().build().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CATALOG: &str = r#"
[areas.livingRoom]
compact = 16
standard = 20
spacious = 24

[areas.doubleBedroom]
compact = 10
standard = 12
spacious = 16

[areas.singleBedroom]
compact = 8
standard = 10
spacious = 14

[areas.bathroom]
compact = 3.5
standard = 4.5
spacious = 8

[areas.kitchen.kitchenette]
compact = 4
standard = 5
spacious = 6

[areas.kitchen.separate]
compact = 6
standard = 8
spacious = 10

[areas.wc]
compact = 1.5
standard = 1.5
spacious = 1.5

[finish]
economy = 5000
standard = 6500
premium = 9000

[amenities]
balcony = 25000
terrace = 40000
garden = 30000
parking_space = 60000
storage_unit = 15000
gym = 20000
bike_room = 8000
laundry_room = 10000
"#;

    #[test]
    fn test_parse_matches_standard_catalog() {
        let config = CatalogConfig::from_toml_str(CATALOG).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.into_catalog().unwrap(), ConstantsCatalog::standard());
    }

    #[test]
    fn test_missing_section() {
        let result = CatalogConfig::from_toml_str("[finish]\neconomy = 1\nstandard = 2\npremium = 3\n");
        assert!(matches!(result, Err(PlannerError::ConfigError { .. })));
    }

    #[test]
    fn test_zero_area_fails_validation() {
        let broken = CATALOG.replace("compact = 3.5", "compact = 0");
        let config = CatalogConfig::from_toml_str(&broken).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(CATALOG.as_bytes()).unwrap();

        let config = CatalogConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.finish.premium, 9000);
        assert_eq!(config.amenities.len(), 8);
    }
}
