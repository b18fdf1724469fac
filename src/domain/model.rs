use crate::utils::error::{PlannerError, Result};
use crate::utils::validation::{parse_count, validate_count};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Room kinds a dwelling is built from. The declaration order is the order
/// rooms are listed and summed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RoomCategory {
    LivingRoom,
    DoubleBedroom,
    SingleBedroom,
    Bathroom,
    Kitchen,
    Wc,
}

impl RoomCategory {
    pub const ALL: [RoomCategory; 6] = [
        RoomCategory::LivingRoom,
        RoomCategory::DoubleBedroom,
        RoomCategory::SingleBedroom,
        RoomCategory::Bathroom,
        RoomCategory::Kitchen,
        RoomCategory::Wc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoomCategory::LivingRoom => "livingRoom",
            RoomCategory::DoubleBedroom => "doubleBedroom",
            RoomCategory::SingleBedroom => "singleBedroom",
            RoomCategory::Bathroom => "bathroom",
            RoomCategory::Kitchen => "kitchen",
            RoomCategory::Wc => "wc",
        }
    }

    /// Living room and kitchen always exist exactly once; their `count` is ignored.
    pub fn is_singleton(&self) -> bool {
        matches!(self, RoomCategory::LivingRoom | RoomCategory::Kitchen)
    }
}

impl fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SizeTier {
    Compact,
    #[default]
    Standard,
    Spacious,
}

impl SizeTier {
    pub const ALL: [SizeTier; 3] = [SizeTier::Compact, SizeTier::Standard, SizeTier::Spacious];

    pub fn as_str(&self) -> &'static str {
        match self {
            SizeTier::Compact => "compact",
            SizeTier::Standard => "standard",
            SizeTier::Spacious => "spacious",
        }
    }

    pub fn parse(field_name: &str, raw: &str) -> Result<Self> {
        parse_variant(field_name, raw, &Self::ALL, Self::as_str)
    }
}

impl fmt::Display for SizeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum KitchenType {
    #[default]
    Kitchenette,
    Separate,
}

impl KitchenType {
    pub const ALL: [KitchenType; 2] = [KitchenType::Kitchenette, KitchenType::Separate];

    pub fn as_str(&self) -> &'static str {
        match self {
            KitchenType::Kitchenette => "kitchenette",
            KitchenType::Separate => "separate",
        }
    }

    pub fn parse(field_name: &str, raw: &str) -> Result<Self> {
        parse_variant(field_name, raw, &Self::ALL, Self::as_str)
    }
}

impl fmt::Display for KitchenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Construction quality of the shared areas; priced per square meter.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum FinishTier {
    Economy,
    #[default]
    Standard,
    Premium,
}

impl FinishTier {
    pub const ALL: [FinishTier; 3] = [FinishTier::Economy, FinishTier::Standard, FinishTier::Premium];

    pub fn as_str(&self) -> &'static str {
        match self {
            FinishTier::Economy => "economy",
            FinishTier::Standard => "standard",
            FinishTier::Premium => "premium",
        }
    }

    pub fn parse(field_name: &str, raw: &str) -> Result<Self> {
        parse_variant(field_name, raw, &Self::ALL, Self::as_str)
    }
}

impl fmt::Display for FinishTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn parse_variant<T: Copy>(
    field_name: &str,
    raw: &str,
    variants: &[T],
    name: fn(&T) -> &'static str,
) -> Result<T> {
    let wanted = raw.trim();
    variants
        .iter()
        .find(|variant| name(variant) == wanted)
        .copied()
        .ok_or_else(|| {
            let allowed: Vec<&str> = variants.iter().map(name).collect();
            PlannerError::validation(
                field_name,
                raw,
                format!("Expected one of: {}", allowed.join(", ")),
            )
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSpec {
    pub count: u32,
    pub size: SizeTier,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kitchen_type: Option<KitchenType>,
}

impl RoomSpec {
    pub fn rooms(count: u32, size: SizeTier) -> Self {
        Self {
            count,
            size,
            kitchen_type: None,
        }
    }

    pub fn singleton(size: SizeTier) -> Self {
        Self::rooms(1, size)
    }

    pub fn kitchen(kitchen_type: KitchenType, size: SizeTier) -> Self {
        Self {
            count: 1,
            size,
            kitchen_type: Some(kitchen_type),
        }
    }

    /// How many instances this spec puts into the dwelling.
    pub fn units(&self, category: RoomCategory) -> u32 {
        if category.is_singleton() {
            1
        } else {
            self.count
        }
    }
}

/// Room specs keyed by category. A category that is missing contributes
/// nothing; a category with `count == 0` is present but empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Spaces(BTreeMap<RoomCategory, RoomSpec>);

impl Spaces {
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    pub fn with(mut self, category: RoomCategory, spec: RoomSpec) -> Self {
        self.0.insert(category, spec);
        self
    }

    pub fn get(&self, category: RoomCategory) -> Option<&RoomSpec> {
        self.0.get(&category)
    }

    pub fn iter(&self) -> impl Iterator<Item = (RoomCategory, &RoomSpec)> {
        self.0.iter().map(|(category, spec)| (*category, spec))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Spaces {
    fn default() -> Self {
        Spaces::empty()
            .with(RoomCategory::LivingRoom, RoomSpec::singleton(SizeTier::Standard))
            .with(RoomCategory::DoubleBedroom, RoomSpec::rooms(0, SizeTier::Standard))
            .with(RoomCategory::SingleBedroom, RoomSpec::rooms(0, SizeTier::Standard))
            .with(RoomCategory::Bathroom, RoomSpec::rooms(1, SizeTier::Standard))
            .with(
                RoomCategory::Kitchen,
                RoomSpec::kitchen(KitchenType::Kitchenette, SizeTier::Standard),
            )
            .with(RoomCategory::Wc, RoomSpec::rooms(0, SizeTier::Standard))
    }
}

/// Counts as they come out of a form: either a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CountInput {
    Number(i64),
    /// Non-integer JSON numbers (`1.5`, `2.0`, or integers past `i64`).
    Float(f64),
    Text(String),
}

impl CountInput {
    pub(crate) fn resolve(&self, field_name: &str) -> Result<u32> {
        match self {
            CountInput::Number(value) => validate_count(field_name, *value),
            CountInput::Float(value) => {
                if !value.is_finite() || value.fract() != 0.0 {
                    return Err(PlannerError::validation(
                        field_name,
                        value,
                        "Count must be a whole number",
                    ));
                }
                // saturating cast; out-of-range values fail the range check
                validate_count(field_name, *value as i64)
            }
            CountInput::Text(raw) => parse_count(field_name, raw),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomSpecForm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<CountInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kitchen_type: Option<String>,
}

/// Untyped room specs, shaped like the front-end store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpacesForm(pub BTreeMap<RoomCategory, RoomSpecForm>);

impl RoomSpecForm {
    fn into_spec(self, category: RoomCategory) -> Result<RoomSpec> {
        let size = match &self.size {
            Some(raw) => SizeTier::parse(&format!("{}.size", category), raw)?,
            None => SizeTier::Standard,
        };

        let count = if category.is_singleton() {
            1
        } else {
            let field = format!("{}.count", category);
            self.count
                .as_ref()
                .ok_or_else(|| PlannerError::validation(&field, "", "Count is required"))?
                .resolve(&field)?
        };

        let kitchen_type = match (category, &self.kitchen_type) {
            (RoomCategory::Kitchen, Some(raw)) => Some(KitchenType::parse("kitchen.type", raw)?),
            (RoomCategory::Kitchen, None) => {
                return Err(PlannerError::validation(
                    "kitchen.type",
                    "",
                    "Kitchen type is required",
                ))
            }
            (_, Some(raw)) => {
                return Err(PlannerError::validation(
                    &format!("{}.type", category),
                    raw,
                    "Only the kitchen has a type",
                ))
            }
            (_, None) => None,
        };

        Ok(RoomSpec {
            count,
            size,
            kitchen_type,
        })
    }
}

impl TryFrom<SpacesForm> for Spaces {
    type Error = PlannerError;

    fn try_from(form: SpacesForm) -> Result<Self> {
        form.0
            .into_iter()
            .try_fold(Spaces::empty(), |spaces, (category, spec)| {
                Ok(spaces.with(category, spec.into_spec(category)?))
            })
    }
}

impl From<&Spaces> for SpacesForm {
    fn from(spaces: &Spaces) -> Self {
        SpacesForm(
            spaces
                .iter()
                .map(|(category, spec)| {
                    let form = RoomSpecForm {
                        count: (!category.is_singleton())
                            .then(|| CountInput::Number(i64::from(spec.count))),
                        size: Some(spec.size.as_str().to_string()),
                        kitchen_type: spec.kitchen_type.map(|kind| kind.as_str().to_string()),
                    };
                    (category, form)
                })
                .collect(),
        )
    }
}

/// A land parcel offered by the site search. Only `area` and `district_id`
/// are read here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plot {
    pub id: String,
    pub district_id: String,
    pub area: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct District {
    pub id: String,
    pub name: String,
    pub land_price_per_area: f64,
    /// Opaque boundary geometry (GeoJSON or similar); never interpreted.
    #[serde(default)]
    pub boundary: serde_json::Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSnapshot {
    #[serde(default)]
    pub selected_districts: Vec<String>,
    #[serde(default)]
    pub selected_plot: Option<Plot>,
}

fn default_finish() -> Option<FinishTier> {
    Some(FinishTier::Standard)
}

/// Persisted/transported form of a configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationSnapshot {
    pub spaces: SpacesForm,
    #[serde(default)]
    pub amenities: BTreeMap<String, bool>,
    #[serde(default = "default_finish")]
    pub common_area_finish: Option<FinishTier>,
    #[serde(default)]
    pub location: LocationSnapshot,
}
