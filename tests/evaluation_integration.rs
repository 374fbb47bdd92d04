// End-to-end evaluation against the preset tracks

use race_strategy::compatibility::{BlockReason, CompatibilityWarning};
use race_strategy::config::AppConfig;
use race_strategy::input::{load_car, load_track};
use race_strategy::report::Advisory;
use race_strategy::track::{find_preset, preset_tracks};
use race_strategy::{
    AeroKitKind, CarConfiguration, EngineKind, RaceReport, RaceStrategyError, ResourceProjection,
    TrackProfile, TyreKind, evaluate, recommend,
};
use tempfile::TempDir;

#[test]
fn test_recommended_setup_matches_itself_on_every_preset() {
    for track in preset_tracks() {
        let optimal = recommend(&track);
        let report = evaluate(&optimal, &track).unwrap();

        if !report.is_valid() {
            // Only a wet kit with hard tyres may be blocked, which the recommender never pairs
            panic!("recommended setup rejected on {}", track.name);
        }
        let analysis = report.analysis.unwrap();
        assert_eq!(analysis.advisories, vec![Advisory::MatchesOptimal]);
        assert!(analysis.diff.is_same_setup());
    }
}

#[test]
fn test_desert_sprint_scenario() {
    let desert = find_preset("desert sprint circuit").unwrap();
    assert_eq!(desert.difficulty_score(), 1);
    assert_eq!(desert.total_laps(), 30);

    let optimal = recommend(&desert);
    assert_eq!(optimal.engine.kind, EngineKind::Turbo);
    assert_eq!(optimal.tyre.kind, TyreKind::Hard);
    assert_eq!(optimal.aero_kit.kind, AeroKitKind::Standard);
    assert_eq!(optimal.capacity, 80.0);

    let car = CarConfiguration::from_kinds(
        EngineKind::V8,
        TyreKind::Soft,
        AeroKitKind::Standard,
        80.0,
    );
    let report = evaluate(&car, &desert).unwrap();
    assert!(report.is_valid());

    let analysis = report.analysis.unwrap();
    assert!(analysis.diff.engine_changed);
    assert!(analysis.diff.tyre_changed);
    assert!(!analysis.diff.aero_changed);
    assert!(!analysis.diff.capacity_changed);
    assert!(analysis.metrics.lap_time_minutes > 0.0);
    assert_eq!(analysis.metrics.total_laps, 30);
    assert!(matches!(
        analysis.metrics.resources,
        ResourceProjection::Fuel { .. }
    ));
    assert!(
        !analysis
            .advisories
            .contains(&Advisory::MatchesOptimal)
    );
}

#[test]
fn test_wet_kit_with_hard_tyres_is_blocked() {
    let mountain = find_preset("Mountain Twistway").unwrap();
    let car = CarConfiguration::from_kinds(
        EngineKind::Hybrid,
        TyreKind::Hard,
        AeroKitKind::WetWeather,
        90.0,
    );

    let report = evaluate(&car, &mountain).unwrap();
    assert!(!report.is_valid());
    assert_eq!(report.track_name, "Mountain Twistway");
    assert_eq!(report.difficulty_score, 7);
    assert_eq!(
        report.verdict.block_reason(),
        Some(BlockReason::WetKitWithHardTyres)
    );
    assert!(report.analysis.is_none());
}

#[test]
fn test_warnings_do_not_block_analysis() {
    let long_lap = TrackProfile {
        name: "Coastal Endurance Ring".to_string(),
        lap_length_km: 8.0,
        total_race_distance_km: 240.0,
        ambient_temp_c: 22.0,
        is_wet: true,
        number_of_curves: 9,
        number_of_chicanes: 2,
        has_long_straights: true,
        elevation_gain_m: 60,
    };
    let car = CarConfiguration::from_kinds(
        EngineKind::Turbo,
        TyreKind::Soft,
        AeroKitKind::LowDrag,
        70.0,
    );

    let report = evaluate(&car, &long_lap).unwrap();
    assert!(report.is_valid());
    assert_eq!(
        report.verdict.warnings(),
        &[
            CompatibilityWarning::SoftTyresTurboLongLap,
            CompatibilityWarning::LowDragOnWetTrack,
        ]
    );
    assert!(report.analysis.is_some());
}

#[test]
fn test_electric_car_projects_energy() {
    let urban = find_preset("Urban Street Loop").unwrap();
    let car = CarConfiguration::from_kinds(
        EngineKind::Electric,
        TyreKind::Soft,
        AeroKitKind::GroundEffect,
        60.0,
    );

    let analysis = evaluate(&car, &urban).unwrap().analysis.unwrap();
    match analysis.metrics.resources {
        ResourceProjection::Energy {
            total_energy_needed_kwh,
            ..
        } => assert!(total_energy_needed_kwh > 0.0),
        other => panic!("expected an energy projection, got {:?}", other),
    }
    assert!(!analysis.flags.fuel_too_low);
}

#[test]
fn test_invalid_inputs_are_errors() {
    let mut track = find_preset("High-Speed Oval").unwrap();
    let car = recommend(&track);
    track.lap_length_km = 0.0;
    assert!(matches!(
        evaluate(&car, &track),
        Err(RaceStrategyError::InvalidInput { .. })
    ));

    assert!(matches!(
        find_preset("Nowhere Raceway"),
        Err(RaceStrategyError::UnknownTrack { .. })
    ));
}

#[test]
fn test_out_of_range_car_is_an_error_not_a_report() {
    let desert = find_preset("Desert Sprint Circuit").unwrap();
    let mut car = CarConfiguration::from_kinds(
        EngineKind::Turbo,
        TyreKind::Hard,
        AeroKitKind::Standard,
        80.0,
    );
    car.aero_kit.cornering_ability = 30;
    assert!(matches!(
        evaluate(&car, &desert),
        Err(RaceStrategyError::InvalidInput { .. })
    ));

    car.aero_kit.cornering_ability = 6;
    car.aero_kit.brake_efficiency = 1.0;
    assert!(matches!(
        evaluate(&car, &desert),
        Err(RaceStrategyError::InvalidInput { .. })
    ));
}

#[test]
fn test_file_inputs_and_json_report() {
    let temp_dir = TempDir::new().unwrap();
    let track_path = temp_dir.path().join("track.json");
    let car_path = temp_dir.path().join("car.json");

    let gp = find_preset("Grand Prix Complex").unwrap();
    let car = CarConfiguration::from_kinds(
        EngineKind::Standard,
        TyreKind::Medium,
        AeroKitKind::Extreme,
        65.0,
    );
    std::fs::write(&track_path, serde_json::to_string_pretty(&gp).unwrap()).unwrap();
    std::fs::write(&car_path, serde_json::to_string_pretty(&car).unwrap()).unwrap();

    let track = load_track(&track_path).unwrap();
    let loaded_car = load_car(&car_path).unwrap();
    assert_eq!(loaded_car, car);

    let config = AppConfig {
        capacity_tolerance: 1.0,
        ..Default::default()
    };
    let report = config.reporter().evaluate(&loaded_car, &track).unwrap();

    let json = serde_json::to_string(&report).unwrap();
    let parsed: RaceReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, report);

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["verdict"]["status"], "valid");
    assert_eq!(value["track_name"], "Grand Prix Complex");
}
