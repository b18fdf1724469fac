pub mod catalog_config;
pub mod sources;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "dwelling-planner")]
#[command(about = "Derive areas and a cost estimate for a dwelling configuration")]
pub struct CliConfig {
    #[arg(long, help = "TOML catalog file (built-in tables when omitted)")]
    pub catalog: Option<String>,

    #[arg(long, help = "JSON configuration snapshot (defaults when omitted)")]
    pub configuration: Option<String>,

    #[arg(long, help = "JSON array of districts used to price the selected plot")]
    pub districts: Option<String>,

    #[arg(long, help = "Read the configuration file in the old flat-count format")]
    pub legacy: bool,

    #[arg(long, help = "Print the report as JSON")]
    pub json: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        let paths = [
            ("catalog", &self.catalog),
            ("configuration", &self.configuration),
            ("districts", &self.districts),
        ];
        for (field, path) in paths {
            if let Some(path) = path {
                validate_path(field, path)?;
            }
        }
        Ok(())
    }
}
