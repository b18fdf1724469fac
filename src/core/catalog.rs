use crate::domain::model::{FinishTier, KitchenType, RoomCategory, SizeTier};
use crate::utils::error::{PlannerError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_positive_area};
use std::collections::{BTreeMap, HashMap};

/// Tier order in the tables below: compact, standard, spacious.
const STANDARD_ROOM_AREAS: [(RoomCategory, [f64; 3]); 5] = [
    (RoomCategory::LivingRoom, [16.0, 20.0, 24.0]),
    (RoomCategory::DoubleBedroom, [10.0, 12.0, 16.0]),
    (RoomCategory::SingleBedroom, [8.0, 10.0, 14.0]),
    (RoomCategory::Bathroom, [3.5, 4.5, 8.0]),
    (RoomCategory::Wc, [1.5, 1.5, 1.5]),
];

const STANDARD_KITCHEN_AREAS: [(KitchenType, [f64; 3]); 2] = [
    (KitchenType::Kitchenette, [4.0, 5.0, 6.0]),
    (KitchenType::Separate, [6.0, 8.0, 10.0]),
];

const STANDARD_FINISH_COSTS: [(FinishTier, u64); 3] = [
    (FinishTier::Economy, 5_000),
    (FinishTier::Standard, 6_500),
    (FinishTier::Premium, 9_000),
];

const STANDARD_AMENITY_COSTS: [(&str, u64); 8] = [
    ("balcony", 25_000),
    ("terrace", 40_000),
    ("garden", 30_000),
    ("parking_space", 60_000),
    ("storage_unit", 15_000),
    ("gym", 20_000),
    ("bike_room", 8_000),
    ("laundry_room", 10_000),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct AreaKey {
    category: RoomCategory,
    kitchen_type: Option<KitchenType>,
    tier: SizeTier,
}

impl AreaKey {
    fn describe(&self) -> String {
        match self.kitchen_type {
            Some(kind) => format!("area {}/{}/{}", self.category, kind, self.tier),
            None => format!("area {}/{}", self.category, self.tier),
        }
    }
}

/// Something the catalog can price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostItem<'a> {
    /// One-off cost of an amenity.
    Amenity(&'a str),
    /// Construction cost per square meter for a finish tier.
    Finish(FinishTier),
}

/// Immutable area and cost tables. Build once, share behind an `Arc`.
///
/// Lookups never fall back to a default: a combination that is not in the
/// tables is an [`PlannerError::UnknownKeyError`].
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantsCatalog {
    room_areas: HashMap<AreaKey, f64>,
    finish_costs: HashMap<FinishTier, u64>,
    amenity_costs: BTreeMap<String, u64>,
}

impl ConstantsCatalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// The built-in tables.
    pub fn standard() -> Self {
        let mut builder = CatalogBuilder::default();
        for (category, areas) in STANDARD_ROOM_AREAS {
            for (tier, area) in SizeTier::ALL.into_iter().zip(areas) {
                builder = builder.room_area(category, tier, area);
            }
        }
        for (kind, areas) in STANDARD_KITCHEN_AREAS {
            for (tier, area) in SizeTier::ALL.into_iter().zip(areas) {
                builder = builder.kitchen_area(kind, tier, area);
            }
        }
        for (tier, cost) in STANDARD_FINISH_COSTS {
            builder = builder.finish_cost(tier, cost);
        }
        for (name, cost) in STANDARD_AMENITY_COSTS {
            builder = builder.amenity(name, cost);
        }
        builder.assemble()
    }

    pub fn area_of(
        &self,
        category: RoomCategory,
        tier: SizeTier,
        kitchen_type: Option<KitchenType>,
    ) -> Result<f64> {
        let key = AreaKey {
            category,
            kitchen_type,
            tier,
        };
        self.room_areas
            .get(&key)
            .copied()
            .ok_or_else(|| PlannerError::UnknownKeyError {
                key: key.describe(),
            })
    }

    pub fn cost_of(&self, item: CostItem<'_>) -> Result<u64> {
        match item {
            CostItem::Amenity(name) => self.amenity_costs.get(name).copied().ok_or_else(|| {
                PlannerError::UnknownKeyError {
                    key: format!("amenity '{}'", name),
                }
            }),
            CostItem::Finish(tier) => self.finish_costs.get(&tier).copied().ok_or_else(|| {
                PlannerError::UnknownKeyError {
                    key: format!("finish {}", tier),
                }
            }),
        }
    }

    pub fn has_amenity(&self, name: &str) -> bool {
        self.amenity_costs.contains_key(name)
    }

    pub fn has_finish(&self, tier: FinishTier) -> bool {
        self.finish_costs.contains_key(&tier)
    }

    /// Amenity names in alphabetical order.
    pub fn amenity_names(&self) -> impl Iterator<Item = &str> {
        self.amenity_costs.keys().map(String::as_str)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    room_areas: Vec<(AreaKey, f64)>,
    finish_costs: Vec<(FinishTier, u64)>,
    amenity_costs: Vec<(String, u64)>,
}

impl CatalogBuilder {
    /// Area of a non-kitchen room. Use [`CatalogBuilder::kitchen_area`] for kitchens.
    pub fn room_area(mut self, category: RoomCategory, tier: SizeTier, area: f64) -> Self {
        self.room_areas.push((
            AreaKey {
                category,
                kitchen_type: None,
                tier,
            },
            area,
        ));
        self
    }

    pub fn kitchen_area(mut self, kitchen_type: KitchenType, tier: SizeTier, area: f64) -> Self {
        self.room_areas.push((
            AreaKey {
                category: RoomCategory::Kitchen,
                kitchen_type: Some(kitchen_type),
                tier,
            },
            area,
        ));
        self
    }

    pub fn finish_cost(mut self, tier: FinishTier, cost_per_area: u64) -> Self {
        self.finish_costs.push((tier, cost_per_area));
        self
    }

    pub fn amenity(mut self, name: impl Into<String>, cost: u64) -> Self {
        self.amenity_costs.push((name.into(), cost));
        self
    }

    pub fn build(self) -> Result<ConstantsCatalog> {
        for (key, area) in &self.room_areas {
            if key.category == RoomCategory::Kitchen && key.kitchen_type.is_none() {
                return Err(PlannerError::validation(
                    "areas.kitchen",
                    key.tier,
                    "Kitchen areas must name a kitchen type",
                ));
            }
            validate_positive_area(&key.describe(), *area)?;
        }
        for (name, _) in &self.amenity_costs {
            validate_non_empty_string("amenities", name)?;
        }
        Ok(self.assemble())
    }

    // Later entries for the same key win.
    fn assemble(self) -> ConstantsCatalog {
        ConstantsCatalog {
            room_areas: self.room_areas.into_iter().collect(),
            finish_costs: self.finish_costs.into_iter().collect(),
            amenity_costs: self.amenity_costs.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_areas() {
        let catalog = ConstantsCatalog::standard();
        assert_eq!(
            catalog
                .area_of(RoomCategory::LivingRoom, SizeTier::Standard, None)
                .unwrap(),
            20.0
        );
        assert_eq!(
            catalog
                .area_of(RoomCategory::Bathroom, SizeTier::Compact, None)
                .unwrap(),
            3.5
        );
        assert_eq!(
            catalog
                .area_of(
                    RoomCategory::Kitchen,
                    SizeTier::Spacious,
                    Some(KitchenType::Separate)
                )
                .unwrap(),
            10.0
        );
        assert_eq!(
            catalog.area_of(RoomCategory::Wc, SizeTier::Spacious, None).unwrap(),
            1.5
        );
    }

    #[test]
    fn test_missing_combination_is_an_error() {
        let catalog = ConstantsCatalog::standard();
        // kitchen without a type and a typed bedroom are not in the tables
        assert!(matches!(
            catalog.area_of(RoomCategory::Kitchen, SizeTier::Standard, None),
            Err(PlannerError::UnknownKeyError { .. })
        ));
        assert!(catalog
            .area_of(
                RoomCategory::DoubleBedroom,
                SizeTier::Standard,
                Some(KitchenType::Kitchenette)
            )
            .is_err());

        let sparse = ConstantsCatalog::builder()
            .room_area(RoomCategory::Bathroom, SizeTier::Standard, 4.5)
            .build()
            .unwrap();
        assert!(sparse
            .area_of(RoomCategory::Bathroom, SizeTier::Spacious, None)
            .is_err());
        assert!(sparse.cost_of(CostItem::Finish(FinishTier::Standard)).is_err());
    }

    #[test]
    fn test_costs() {
        let catalog = ConstantsCatalog::standard();
        assert_eq!(catalog.cost_of(CostItem::Amenity("balcony")).unwrap(), 25_000);
        assert_eq!(
            catalog.cost_of(CostItem::Finish(FinishTier::Premium)).unwrap(),
            9_000
        );
        assert!(matches!(
            catalog.cost_of(CostItem::Amenity("sauna")),
            Err(PlannerError::UnknownKeyError { .. })
        ));
        assert_eq!(catalog.amenity_names().count(), 8);
        assert_eq!(catalog.amenity_names().next(), Some("balcony"));
    }

    #[test]
    fn test_builder_rejects_bad_entries() {
        assert!(ConstantsCatalog::builder()
            .room_area(RoomCategory::Bathroom, SizeTier::Standard, 0.0)
            .build()
            .is_err());
        assert!(ConstantsCatalog::builder()
            .room_area(RoomCategory::Kitchen, SizeTier::Standard, 5.0)
            .build()
            .is_err());
        assert!(ConstantsCatalog::builder().amenity("  ", 100).build().is_err());
    }

    #[test]
    fn test_catalog_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ConstantsCatalog>();
    }
}
