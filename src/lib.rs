pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::{
    catalog::{ConstantsCatalog, CostItem},
    configuration::ConfigurationModel,
    districts::InMemoryDistrictCatalog,
    metrics::{CostBreakdown, MetricsEngine, MetricsReport},
};
pub use crate::domain::model::{FinishTier, KitchenType, Plot, RoomCategory, RoomSpec, SizeTier, Spaces};
pub use crate::domain::ports::DistrictCatalog;
pub use crate::utils::error::{PlannerError, Result};
