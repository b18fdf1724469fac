use crate::core::catalog::{ConstantsCatalog, CostItem};
use crate::core::configuration::ConfigurationModel;
use crate::domain::model::{FinishTier, RoomCategory};
use crate::domain::ports::DistrictCatalog;
use crate::utils::error::{PlannerError, Result};
use crate::utils::validation::validate_non_negative;
use serde::Serialize;
use std::sync::Arc;

/// Common areas take one third of the total built area.
pub const COMMON_AREA_DIVISOR: f64 = 3.0;

/// Rounds to the nearest integer, ties going up (`32.5 -> 33`).
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

fn whole_area(field_name: &str, value: f64) -> Result<u64> {
    let rounded = round_half_up(value);
    // u64::MAX as f64 rounds up to 2^64, so the bound is exclusive
    if !rounded.is_finite() || rounded < 0.0 || rounded >= u64::MAX as f64 {
        return Err(PlannerError::validation(
            field_name,
            value,
            "Area is out of range",
        ));
    }
    Ok(rounded as u64)
}

fn overflow(field_name: &str) -> PlannerError {
    PlannerError::validation(field_name, "overflow", "Cost exceeds the representable range")
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomArea {
    pub category: RoomCategory,
    pub units: u32,
    pub area_per_unit: f64,
    pub area: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub finish: FinishTier,
    pub finish_cost_per_area: u64,
    /// Total area times the finish price.
    pub construction: u64,
    /// Sum of enabled amenity costs.
    pub amenities: u64,
    /// Plot area times the district land price; `None` until a plot with a
    /// known district is selected.
    pub land: Option<f64>,
}

impl CostBreakdown {
    pub fn total(&self) -> f64 {
        self.construction as f64 + self.amenities as f64 + self.land.unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsReport {
    pub rooms: Vec<RoomArea>,
    pub usable_area: f64,
    pub total_area: u64,
    pub common_area_share: f64,
    pub cost: CostBreakdown,
    pub estimated_cost: f64,
}

/// Derives areas and costs from a configuration. Holds no state besides the
/// catalog, so every call recomputes from the configuration as it is now.
#[derive(Debug, Clone)]
pub struct MetricsEngine {
    catalog: Arc<ConstantsCatalog>,
}

impl MetricsEngine {
    pub fn new(catalog: Arc<ConstantsCatalog>) -> Self {
        Self { catalog }
    }

    /// Engine over the same catalog the model validates against.
    pub fn for_model(model: &ConfigurationModel) -> Self {
        Self::new(Arc::clone(model.catalog()))
    }

    pub fn catalog(&self) -> &ConstantsCatalog {
        &self.catalog
    }

    /// Per-category contribution to the usable area, in category order.
    /// Zero-count categories are listed with an area of zero.
    pub fn room_areas(&self, config: &ConfigurationModel) -> Result<Vec<RoomArea>> {
        config
            .spaces()
            .iter()
            .map(|(category, spec)| {
                let area_per_unit = self
                    .catalog
                    .area_of(category, spec.size, spec.kitchen_type)?;
                let units = spec.units(category);
                Ok(RoomArea {
                    category,
                    units,
                    area_per_unit,
                    area: f64::from(units) * area_per_unit,
                })
            })
            .collect()
    }

    pub fn usable_area(&self, config: &ConfigurationModel) -> Result<f64> {
        let usable = self
            .room_areas(config)?
            .iter()
            .map(|room| room.area)
            .sum::<f64>();
        tracing::trace!("Usable area: {} m²", usable);
        Ok(usable)
    }

    /// Usable area is 90% of the built area; the other 10% is circulation
    /// and walls. Rounded half-up to whole square meters.
    pub fn total_area(&self, config: &ConfigurationModel) -> Result<u64> {
        let usable = self.usable_area(config)?;
        // usable / 0.9, written as * 10 / 9 to keep the inexact 0.9 literal out
        let gross = usable * 10.0 / 9.0;
        whole_area("totalArea", gross)
    }

    /// Not rounded.
    pub fn common_area_share(&self, config: &ConfigurationModel) -> Result<f64> {
        let total = self.total_area(config)?;
        Ok(total as f64 / COMMON_AREA_DIVISOR)
    }

    pub fn cost_breakdown<C>(&self, config: &ConfigurationModel, districts: &C) -> Result<CostBreakdown>
    where
        C: DistrictCatalog + ?Sized,
    {
        let finish = config.common_area_finish().ok_or_else(|| {
            PlannerError::IncompleteConfigurationError {
                field: "commonAreaFinish".to_string(),
            }
        })?;
        let finish_cost_per_area = self.catalog.cost_of(CostItem::Finish(finish))?;
        let construction = self
            .total_area(config)?
            .checked_mul(finish_cost_per_area)
            .ok_or_else(|| overflow("construction"))?;

        let amenities = config.enabled_amenities().try_fold(0u64, |sum, name| {
            let cost = self.catalog.cost_of(CostItem::Amenity(name))?;
            sum.checked_add(cost).ok_or_else(|| overflow("amenities"))
        })?;

        let land = match config.selected_plot() {
            Some(plot) => {
                // select_plot accepts anything, so the area is checked here
                validate_non_negative("plot.area", plot.area)?;
                match districts.land_price_per_area(&plot.district_id) {
                    Some(price) => Some(plot.area * price),
                    None => {
                        tracing::warn!(
                            "⚠️ District '{}' of plot '{}' is not in the district catalog, land cost omitted",
                            plot.district_id,
                            plot.id
                        );
                        None
                    }
                }
            }
            None => None,
        };

        Ok(CostBreakdown {
            finish,
            finish_cost_per_area,
            construction,
            amenities,
            land,
        })
    }

    pub fn estimated_cost<C>(&self, config: &ConfigurationModel, districts: &C) -> Result<f64>
    where
        C: DistrictCatalog + ?Sized,
    {
        Ok(self.cost_breakdown(config, districts)?.total())
    }

    pub fn report<C>(&self, config: &ConfigurationModel, districts: &C) -> Result<MetricsReport>
    where
        C: DistrictCatalog + ?Sized,
    {
        let rooms = self.room_areas(config)?;
        let usable_area = rooms.iter().map(|room| room.area).sum::<f64>();
        let total_area = self.total_area(config)?;
        let cost = self.cost_breakdown(config, districts)?;

        tracing::debug!(
            "Metrics: usable {} m², total {} m², cost {:.2}",
            usable_area,
            total_area,
            cost.total()
        );

        Ok(MetricsReport {
            rooms,
            usable_area,
            total_area,
            common_area_share: total_area as f64 / COMMON_AREA_DIVISOR,
            estimated_cost: cost.total(),
            cost,
        })
    }
}
