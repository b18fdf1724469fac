use dwelling_planner::config::sources::{load_catalog, load_configuration, load_districts};
use dwelling_planner::core::ConfigurationSnapshot;
use dwelling_planner::{
    ConfigurationModel, ConstantsCatalog, FinishTier, KitchenType, MetricsEngine, PlannerError,
    RoomCategory, RoomSpec, SizeTier,
};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tempfile::NamedTempFile;

fn temp_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

const STORE_SNAPSHOT: &str = r#"{
    "spaces": {
        "livingRoom": { "size": "spacious" },
        "doubleBedroom": { "count": "1", "size": "standard" },
        "singleBedroom": { "count": "0", "size": "standard" },
        "bathroom": { "count": "1", "size": "compact" },
        "kitchen": { "type": "separate", "size": "standard" },
        "wc": { "count": "1" }
    },
    "amenities": { "garden": true, "gym": false },
    "commonAreaFinish": "economy",
    "location": {
        "selectedDistricts": ["krowodrza"],
        "selectedPlot": { "id": "p-1", "districtId": "krowodrza", "area": 450.0 }
    }
}"#;

#[test]
fn test_bundled_catalog_file_matches_builtin() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("dwelling-catalog.toml");
    let catalog = load_catalog(Some(path.as_path())).unwrap();
    assert_eq!(*catalog, ConstantsCatalog::standard());
}

#[test]
fn test_load_defaults_without_files() {
    let catalog = load_catalog(None).unwrap();
    let model = load_configuration(catalog.clone(), None, false).unwrap();
    let districts = load_districts(None).unwrap();

    let report = MetricsEngine::new(catalog).report(&model, &districts).unwrap();
    assert_eq!(report.total_area, 33);
    assert!(districts.is_empty());
}

#[test]
fn test_load_store_shaped_snapshot() {
    let catalog = load_catalog(None).unwrap();
    let file = temp_file(STORE_SNAPSHOT);
    let model = load_configuration(catalog.clone(), Some(file.path()), false).unwrap();

    assert_eq!(
        model.spaces().get(RoomCategory::Kitchen),
        Some(&RoomSpec::kitchen(KitchenType::Separate, SizeTier::Standard))
    );
    assert!(model.amenity("garden").unwrap());
    assert_eq!(model.common_area_finish(), Some(FinishTier::Economy));
    assert_eq!(model.selected_plot().unwrap().area, 450.0);
    assert!(model.plot_in_selected_district());

    // 24 + 12 + 3.5 + 8 + 1.5
    let engine = MetricsEngine::new(catalog);
    assert_eq!(engine.usable_area(&model).unwrap(), 49.0);
    assert_eq!(engine.total_area(&model).unwrap(), 54);

    let districts_file = temp_file(
        r#"[{"id": "krowodrza", "name": "Krowodrza", "landPricePerArea": 1000.0}]"#,
    );
    let districts = load_districts(Some(districts_file.path())).unwrap();
    let cost = engine.cost_breakdown(&model, &districts).unwrap();
    assert_eq!(cost.construction, 54 * 5_000);
    assert_eq!(cost.amenities, 30_000);
    assert_eq!(cost.land, Some(450_000.0));
}

#[test]
fn test_snapshot_round_trip_preserves_model() {
    let catalog = Arc::new(ConstantsCatalog::standard());
    let snapshot: ConfigurationSnapshot = serde_json::from_str(STORE_SNAPSHOT).unwrap();
    let model = ConfigurationModel::from_snapshot(catalog.clone(), snapshot).unwrap();

    let json = serde_json::to_string(&model.snapshot()).unwrap();
    let reloaded = ConfigurationModel::from_snapshot(
        catalog,
        serde_json::from_str::<ConfigurationSnapshot>(&json).unwrap(),
    )
    .unwrap();

    assert_eq!(reloaded.spaces(), model.spaces());
    assert_eq!(reloaded.amenities(), model.amenities());
    assert_eq!(reloaded.common_area_finish(), model.common_area_finish());
    assert_eq!(
        reloaded.selected_districts().collect::<Vec<_>>(),
        model.selected_districts().collect::<Vec<_>>()
    );
    assert_eq!(reloaded.selected_plot(), model.selected_plot());
}

#[test]
fn test_snapshot_with_unknown_amenity_is_rejected() {
    let catalog = load_catalog(None).unwrap();
    let file = temp_file(r#"{ "spaces": {}, "amenities": { "sauna": true } }"#);
    let result = load_configuration(catalog, Some(file.path()), false);
    assert!(matches!(
        result,
        Err(PlannerError::UnknownAmenityError { .. })
    ));
}

#[test]
fn test_snapshot_with_negative_count_is_rejected() {
    let catalog = load_catalog(None).unwrap();
    let file = temp_file(r#"{ "spaces": { "bathroom": { "count": "-1", "size": "standard" } } }"#);
    let result = load_configuration(catalog, Some(file.path()), false);
    assert!(matches!(result, Err(PlannerError::ValidationError { .. })));
}

#[test]
fn test_load_legacy_configuration() {
    let catalog = load_catalog(None).unwrap();
    let file = temp_file(r#"{ "doubleBedrooms": 2, "singleBedrooms": "0", "bathrooms": 1 }"#);
    let model = load_configuration(catalog.clone(), Some(file.path()), true).unwrap();

    assert_eq!(
        model.spaces().get(RoomCategory::DoubleBedroom),
        Some(&RoomSpec::rooms(2, SizeTier::Standard))
    );
    assert_eq!(MetricsEngine::new(catalog).usable_area(&model).unwrap(), 53.5);
}

#[test]
fn test_missing_file_is_io_error() {
    let result = load_catalog(Some(Path::new("/nonexistent/dwelling-catalog.toml")));
    assert!(matches!(result, Err(PlannerError::IoError(_))));
}
