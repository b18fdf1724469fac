use crate::domain::model::District;
use crate::domain::ports::DistrictCatalog;
use crate::utils::error::{PlannerError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_non_negative, Validate};
use std::collections::HashSet;
use std::path::Path;

/// District reference data held in memory, typically loaded from a JSON
/// array of `{id, name, landPricePerArea, boundary}` records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InMemoryDistrictCatalog {
    districts: Vec<District>,
}

impl InMemoryDistrictCatalog {
    pub fn new(districts: Vec<District>) -> Result<Self> {
        let catalog = Self { districts };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let districts: Vec<District> = serde_json::from_str(content)?;
        tracing::debug!("Loaded {} districts", districts.len());
        Self::new(districts)
    }

    pub fn iter(&self) -> impl Iterator<Item = &District> {
        self.districts.iter()
    }

    pub fn len(&self) -> usize {
        self.districts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.districts.is_empty()
    }
}

impl DistrictCatalog for InMemoryDistrictCatalog {
    fn district(&self, id: &str) -> Option<&District> {
        self.districts.iter().find(|district| district.id == id)
    }
}

impl Validate for InMemoryDistrictCatalog {
    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for district in &self.districts {
            validate_non_empty_string("district.id", &district.id)?;
            validate_non_negative(
                &format!("{}.landPricePerArea", district.id),
                district.land_price_per_area,
            )?;
            if !seen.insert(district.id.as_str()) {
                return Err(PlannerError::validation(
                    "district.id",
                    &district.id,
                    "District ids must be unique",
                ));
            }
        }
        Ok(())
    }
}
