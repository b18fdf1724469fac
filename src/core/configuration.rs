use crate::core::catalog::ConstantsCatalog;
use crate::core::selection::SelectionSet;
use crate::domain::model::{
    ConfigurationSnapshot, FinishTier, LocationSnapshot, Plot, RoomCategory, Spaces, SpacesForm,
};
use crate::utils::error::{PlannerError, Result};
use crate::utils::validation::validate_non_negative;
use std::collections::BTreeMap;
use std::sync::Arc;

/// One user's in-progress dwelling configuration.
///
/// All changes go through the mutators here and in `selection`; derived
/// figures are never stored and are recomputed by the metrics engine on read.
#[derive(Debug, Clone)]
pub struct ConfigurationModel {
    catalog: Arc<ConstantsCatalog>,
    spaces: Spaces,
    amenities: BTreeMap<String, bool>,
    common_area_finish: Option<FinishTier>,
    pub(super) selected_districts: SelectionSet<String>,
    pub(super) selected_plot: Option<Plot>,
}

impl ConfigurationModel {
    /// Living room, one bathroom and a kitchenette (all standard), every
    /// amenity off, standard finish, nothing selected on the map.
    pub fn new(catalog: Arc<ConstantsCatalog>) -> Self {
        let amenities = catalog
            .amenity_names()
            .map(|name| (name.to_string(), false))
            .collect();

        Self {
            catalog,
            spaces: Spaces::default(),
            amenities,
            common_area_finish: Some(FinishTier::Standard),
            selected_districts: SelectionSet::new(),
            selected_plot: None,
        }
    }

    /// Rebuilds a model from persisted data, running every value through the
    /// same checks as the mutators.
    pub fn from_snapshot(
        catalog: Arc<ConstantsCatalog>,
        snapshot: ConfigurationSnapshot,
    ) -> Result<Self> {
        let mut model = Self::new(catalog);
        model.replace_spaces_from_form(snapshot.spaces)?;

        for (name, enabled) in snapshot.amenities {
            model.set_amenity(&name, enabled)?;
        }

        match snapshot.common_area_finish {
            Some(tier) => model.set_common_area_finish(tier)?,
            None => model.common_area_finish = None,
        }

        for district_id in snapshot.location.selected_districts {
            model.selected_districts.insert(district_id);
        }
        if let Some(plot) = &snapshot.location.selected_plot {
            validate_non_negative("plot.area", plot.area)?;
        }
        model.selected_plot = snapshot.location.selected_plot;

        Ok(model)
    }

    pub fn snapshot(&self) -> ConfigurationSnapshot {
        ConfigurationSnapshot {
            spaces: SpacesForm::from(&self.spaces),
            amenities: self.amenities.clone(),
            common_area_finish: self.common_area_finish,
            location: LocationSnapshot {
                selected_districts: self.selected_districts.iter().cloned().collect(),
                selected_plot: self.selected_plot.clone(),
            },
        }
    }

    pub fn catalog(&self) -> &Arc<ConstantsCatalog> {
        &self.catalog
    }

    pub fn spaces(&self) -> &Spaces {
        &self.spaces
    }

    /// Swaps in a whole new set of room specs. Nothing is changed if any
    /// spec names a tier/type combination the catalog does not know.
    pub fn replace_spaces(&mut self, spaces: Spaces) -> Result<()> {
        for (category, spec) in spaces.iter() {
            if category == RoomCategory::Kitchen && spec.kitchen_type.is_none() {
                return Err(PlannerError::validation(
                    "kitchen.type",
                    "",
                    "Kitchen type is required",
                ));
            }
            if let Err(err) = self.catalog.area_of(category, spec.size, spec.kitchen_type) {
                return Err(PlannerError::validation(
                    &format!("{}.size", category),
                    spec.size,
                    err.to_string(),
                ));
            }
        }

        tracing::debug!("Spaces replaced ({} room categories)", spaces.len());
        self.spaces = spaces;
        Ok(())
    }

    pub fn replace_spaces_from_form(&mut self, form: SpacesForm) -> Result<()> {
        let spaces = Spaces::try_from(form)?;
        self.replace_spaces(spaces)
    }

    pub fn amenities(&self) -> &BTreeMap<String, bool> {
        &self.amenities
    }

    pub fn amenity(&self, name: &str) -> Result<bool> {
        self.amenities
            .get(name)
            .copied()
            .ok_or_else(|| PlannerError::UnknownAmenityError {
                name: name.to_string(),
            })
    }

    pub fn set_amenity(&mut self, name: &str, enabled: bool) -> Result<()> {
        let flag = self.amenity_flag(name)?;
        *flag = enabled;
        tracing::debug!("Amenity '{}' set to {}", name, enabled);
        Ok(())
    }

    /// Flips an amenity and returns its new value.
    pub fn toggle_amenity(&mut self, name: &str) -> Result<bool> {
        let flag = self.amenity_flag(name)?;
        *flag = !*flag;
        let enabled = *flag;
        tracing::debug!("Amenity '{}' toggled to {}", name, enabled);
        Ok(enabled)
    }

    fn amenity_flag(&mut self, name: &str) -> Result<&mut bool> {
        self.amenities
            .get_mut(name)
            .ok_or_else(|| PlannerError::UnknownAmenityError {
                name: name.to_string(),
            })
    }

    pub fn common_area_finish(&self) -> Option<FinishTier> {
        self.common_area_finish
    }

    pub fn set_common_area_finish(&mut self, tier: FinishTier) -> Result<()> {
        if !self.catalog.has_finish(tier) {
            return Err(PlannerError::validation(
                "commonAreaFinish",
                tier,
                "The catalog has no price for this finish",
            ));
        }
        self.common_area_finish = Some(tier);
        tracing::debug!("Common-area finish set to {}", tier);
        Ok(())
    }

    /// Form-facing variant taking the raw tier name.
    pub fn set_common_area_finish_str(&mut self, raw: &str) -> Result<()> {
        let tier = FinishTier::parse("commonAreaFinish", raw)?;
        self.set_common_area_finish(tier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{KitchenType, RoomSpec, SizeTier};

    fn model() -> ConfigurationModel {
        ConfigurationModel::new(Arc::new(ConstantsCatalog::standard()))
    }

    #[test]
    fn test_new_model_defaults() {
        let model = model();
        assert_eq!(model.spaces(), &Spaces::default());
        assert_eq!(model.common_area_finish(), Some(FinishTier::Standard));
        assert_eq!(model.amenities().len(), 8);
        assert!(model.amenities().values().all(|enabled| !enabled));
        assert!(model.selected_districts.is_empty());
        assert!(model.selected_plot.is_none());
    }

    #[test]
    fn test_replace_spaces() {
        let mut model = model();
        let spaces = Spaces::default()
            .with(RoomCategory::DoubleBedroom, RoomSpec::rooms(2, SizeTier::Spacious));
        model.replace_spaces(spaces.clone()).unwrap();
        assert_eq!(model.spaces(), &spaces);
    }

    #[test]
    fn test_replace_spaces_rejects_unknown_combination() {
        let mut model = model();
        let before = model.spaces().clone();

        let untyped_kitchen = Spaces::default()
            .with(RoomCategory::Kitchen, RoomSpec::singleton(SizeTier::Standard));
        assert!(matches!(
            model.replace_spaces(untyped_kitchen),
            Err(PlannerError::ValidationError { .. })
        ));

        let typed_bedroom = Spaces::default().with(
            RoomCategory::SingleBedroom,
            RoomSpec {
                count: 1,
                size: SizeTier::Standard,
                kitchen_type: Some(KitchenType::Separate),
            },
        );
        assert!(matches!(
            model.replace_spaces(typed_bedroom),
            Err(PlannerError::ValidationError { .. })
        ));

        assert_eq!(model.spaces(), &before);
    }

    #[test]
    fn test_amenities() {
        let mut model = model();
        model.set_amenity("garden", true).unwrap();
        assert!(model.amenity("garden").unwrap());

        assert!(!model.toggle_amenity("garden").unwrap());
        assert!(model.toggle_amenity("gym").unwrap());

        assert!(matches!(
            model.set_amenity("sauna", true),
            Err(PlannerError::UnknownAmenityError { .. })
        ));
        assert!(matches!(
            model.toggle_amenity("sauna"),
            Err(PlannerError::UnknownAmenityError { .. })
        ));
    }

    #[test]
    fn test_common_area_finish() {
        let mut model = model();
        model.set_common_area_finish(FinishTier::Premium).unwrap();
        assert_eq!(model.common_area_finish(), Some(FinishTier::Premium));

        model.set_common_area_finish_str("economy").unwrap();
        assert_eq!(model.common_area_finish(), Some(FinishTier::Economy));

        assert!(matches!(
            model.set_common_area_finish_str("luxury"),
            Err(PlannerError::ValidationError { .. })
        ));
        assert_eq!(model.common_area_finish(), Some(FinishTier::Economy));
    }

    #[test]
    fn test_finish_must_be_priced() {
        let catalog = ConstantsCatalog::builder()
            .finish_cost(FinishTier::Standard, 6_000)
            .build()
            .unwrap();
        let mut model = ConfigurationModel::new(Arc::new(catalog));
        assert!(model.set_common_area_finish(FinishTier::Premium).is_err());
    }

    #[test]
    fn test_snapshot_with_invalid_plot_area_is_rejected() {
        let catalog = Arc::new(ConstantsCatalog::standard());
        for area in [-500.0, f64::NAN] {
            let mut snapshot = model().snapshot();
            snapshot.location.selected_plot = Some(Plot {
                id: "p-1".to_string(),
                district_id: "krowodrza".to_string(),
                area,
            });
            assert!(matches!(
                ConfigurationModel::from_snapshot(catalog.clone(), snapshot),
                Err(PlannerError::ValidationError { .. })
            ));
        }
    }
}
