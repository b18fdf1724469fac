pub mod catalog;
pub mod configuration;
pub mod districts;
pub mod metrics;
pub mod migration;
pub mod selection;

pub use crate::domain::model::{
    ConfigurationSnapshot, District, FinishTier, KitchenType, Plot, RoomCategory, RoomSpec,
    SizeTier, Spaces, SpacesForm,
};
pub use crate::domain::ports::DistrictCatalog;
pub use crate::utils::error::Result;
