//! One-time adapter for configurations saved by the early flat-count schema
//! (`{"doubleBedrooms": 0, "singleBedrooms": 0, ...}`), which had no size
//! tiers. Everything it produces is sized `standard`.

use crate::domain::model::{CountInput, KitchenType, RoomCategory, RoomSpec, SizeTier, Spaces};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacySpaces {
    #[serde(default = "zero")]
    pub double_bedrooms: CountInput,
    #[serde(default = "zero")]
    pub single_bedrooms: CountInput,
    #[serde(default = "one")]
    pub bathrooms: CountInput,
    #[serde(default = "zero")]
    pub wcs: CountInput,
    #[serde(default)]
    pub kitchen_type: Option<String>,
}

fn zero() -> CountInput {
    CountInput::Number(0)
}

fn one() -> CountInput {
    CountInput::Number(1)
}

pub fn migrate_legacy_spaces(legacy: LegacySpaces) -> Result<Spaces> {
    let kitchen_type = match &legacy.kitchen_type {
        Some(raw) => KitchenType::parse("kitchenType", raw)?,
        None => KitchenType::Kitchenette,
    };

    let spaces = Spaces::empty()
        .with(RoomCategory::LivingRoom, RoomSpec::singleton(SizeTier::Standard))
        .with(
            RoomCategory::DoubleBedroom,
            RoomSpec::rooms(legacy.double_bedrooms.resolve("doubleBedrooms")?, SizeTier::Standard),
        )
        .with(
            RoomCategory::SingleBedroom,
            RoomSpec::rooms(legacy.single_bedrooms.resolve("singleBedrooms")?, SizeTier::Standard),
        )
        .with(
            RoomCategory::Bathroom,
            RoomSpec::rooms(legacy.bathrooms.resolve("bathrooms")?, SizeTier::Standard),
        )
        .with(
            RoomCategory::Kitchen,
            RoomSpec::kitchen(kitchen_type, SizeTier::Standard),
        )
        .with(
            RoomCategory::Wc,
            RoomSpec::rooms(legacy.wcs.resolve("wcs")?, SizeTier::Standard),
        );

    tracing::debug!("Migrated legacy flat-count spaces to structured room specs");
    Ok(spaces)
}
