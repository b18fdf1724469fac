use crate::config::catalog_config::CatalogConfig;
use crate::core::catalog::ConstantsCatalog;
use crate::core::configuration::ConfigurationModel;
use crate::core::districts::InMemoryDistrictCatalog;
use crate::core::migration::{migrate_legacy_spaces, LegacySpaces};
use crate::domain::model::ConfigurationSnapshot;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::path::Path;
use std::sync::Arc;

/// Built-in tables unless a TOML catalog file is given.
pub fn load_catalog(path: Option<&Path>) -> Result<Arc<ConstantsCatalog>> {
    let catalog = match path {
        Some(path) => {
            tracing::info!("📁 Loading catalog from: {}", path.display());
            let config = CatalogConfig::from_file(path)?;
            config.validate()?;
            config.into_catalog()?
        }
        None => ConstantsCatalog::standard(),
    };
    Ok(Arc::new(catalog))
}

/// Reads a configuration snapshot, or a flat-count legacy file when `legacy`
/// is set. No path means a fresh default configuration.
pub fn load_configuration(
    catalog: Arc<ConstantsCatalog>,
    path: Option<&Path>,
    legacy: bool,
) -> Result<ConfigurationModel> {
    let Some(path) = path else {
        return Ok(ConfigurationModel::new(catalog));
    };

    tracing::info!("📁 Loading configuration from: {}", path.display());
    let content = std::fs::read_to_string(path)?;

    if legacy {
        let legacy_spaces: LegacySpaces = serde_json::from_str(&content)?;
        let mut model = ConfigurationModel::new(catalog);
        model.replace_spaces(migrate_legacy_spaces(legacy_spaces)?)?;
        Ok(model)
    } else {
        let snapshot: ConfigurationSnapshot = serde_json::from_str(&content)?;
        ConfigurationModel::from_snapshot(catalog, snapshot)
    }
}

pub fn load_districts(path: Option<&Path>) -> Result<InMemoryDistrictCatalog> {
    match path {
        Some(path) => {
            tracing::info!("📁 Loading districts from: {}", path.display());
            InMemoryDistrictCatalog::from_file(path)
        }
        None => Ok(InMemoryDistrictCatalog::default()),
    }
}
