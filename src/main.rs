use clap::Parser;
use dwelling_planner::config::sources::{load_catalog, load_configuration, load_districts};
use dwelling_planner::utils::error::ErrorSeverity;
use dwelling_planner::utils::{logger, validation::Validate};
use dwelling_planner::{CliConfig, MetricsEngine, MetricsReport, PlannerError};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting dwelling-planner CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    match evaluate(&config) {
        Ok(report) => {
            if config.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Evaluation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn evaluate(config: &CliConfig) -> Result<MetricsReport, PlannerError> {
    let catalog = load_catalog(config.catalog.as_deref().map(Path::new))?;
    let districts = load_districts(config.districts.as_deref().map(Path::new))?;
    let model = load_configuration(
        catalog.clone(),
        config.configuration.as_deref().map(Path::new),
        config.legacy,
    )?;

    if !model.plot_in_selected_district() {
        tracing::warn!("⚠️ The selected plot is outside the selected districts");
    }

    MetricsEngine::new(catalog).report(&model, &districts)
}

fn print_report(report: &MetricsReport) {
    println!("Rooms:");
    for room in &report.rooms {
        println!(
            "  {:<14} {:>2} x {:>5.1} m² = {:>6.1} m²",
            room.category.as_str(),
            room.units,
            room.area_per_unit,
            room.area
        );
    }
    println!("Usable area:       {:.1} m²", report.usable_area);
    println!("Total area:        {} m²", report.total_area);
    println!("Common-area share: {:.2} m²", report.common_area_share);
    println!(
        "Construction:      {} ({} finish, {} per m²)",
        report.cost.construction, report.cost.finish, report.cost.finish_cost_per_area
    );
    println!("Amenities:         {}", report.cost.amenities);
    match report.cost.land {
        Some(land) => println!("Land:              {:.2}", land),
        None => println!("Land:              not priced (no plot selected)"),
    }
    println!("Estimated cost:    {:.2}", report.estimated_cost);
}
