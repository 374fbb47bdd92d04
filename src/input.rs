// Loading car and track descriptions from JSON files

use std::path::Path;

use log::info;
use serde::de::DeserializeOwned;

use crate::RaceStrategyError;
use crate::car::CarConfiguration;
use crate::track::TrackProfile;

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, RaceStrategyError> {
    let display = path.display().to_string();
    let file = std::fs::File::open(path).map_err(|e| RaceStrategyError::InputFileError {
        path: display.clone(),
        source: e,
    })?;
    serde_json::from_reader(std::io::BufReader::new(file)).map_err(|e| {
        RaceStrategyError::InputParseError {
            path: display,
            source: e,
        }
    })
}

/// Read a track profile and check its preconditions.
pub fn load_track(path: &Path) -> Result<TrackProfile, RaceStrategyError> {
    let track: TrackProfile = load_json(path)?;
    track.validate()?;
    info!("Loaded track {} from {}", track.name, path.display());
    Ok(track)
}

/// Read a car configuration and check its preconditions.
pub fn load_car(path: &Path) -> Result<CarConfiguration, RaceStrategyError> {
    let car: CarConfiguration = load_json(path)?;
    car.validate()?;
    info!("Loaded car configuration from {}", path.display());
    Ok(car)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AeroKitKind, EngineKind, Suspension, TyreKind};
    use crate::track::find_preset;
    use tempfile::TempDir;

    #[test]
    fn test_load_track_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("track.json");
        let oval = find_preset("High-Speed Oval").unwrap();
        std::fs::write(&path, serde_json::to_string(&oval).unwrap()).unwrap();

        assert_eq!(load_track(&path).unwrap(), oval);
    }

    #[test]
    fn test_load_track_rejects_zero_lap_length() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("track.json");
        let mut oval = find_preset("High-Speed Oval").unwrap();
        oval.lap_length_km = 0.0;
        std::fs::write(&path, serde_json::to_string(&oval).unwrap()).unwrap();

        assert!(matches!(
            load_track(&path),
            Err(RaceStrategyError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_load_car_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("car.json");
        let car = CarConfiguration::from_kinds(
            EngineKind::Hybrid,
            TyreKind::Soft,
            AeroKitKind::Downforce,
            90.0,
        )
        .with_suspension(Suspension::Soft);
        std::fs::write(&path, serde_json::to_string(&car).unwrap()).unwrap();

        assert_eq!(load_car(&path).unwrap(), car);
    }

    #[test]
    fn test_load_car_rejects_out_of_range_aero() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("car.json");

        let mut car = CarConfiguration::from_kinds(
            EngineKind::Turbo,
            TyreKind::Hard,
            AeroKitKind::Standard,
            80.0,
        );
        car.aero_kit.cornering_ability = 30;
        std::fs::write(&path, serde_json::to_string(&car).unwrap()).unwrap();
        assert!(matches!(
            load_car(&path),
            Err(RaceStrategyError::InvalidInput { ref field, .. }) if field == "aero_kit.cornering_ability"
        ));

        car.aero_kit.cornering_ability = 6;
        car.aero_kit.brake_efficiency = 1.0;
        std::fs::write(&path, serde_json::to_string(&car).unwrap()).unwrap();
        assert!(matches!(
            load_car(&path),
            Err(RaceStrategyError::InvalidInput { ref field, .. }) if field == "aero_kit.brake_efficiency"
        ));
    }

    #[test]
    fn test_load_errors() {
        let temp_dir = TempDir::new().unwrap();
        assert!(matches!(
            load_car(&temp_dir.path().join("missing.json")),
            Err(RaceStrategyError::InputFileError { .. })
        ));

        let path = temp_dir.path().join("broken.json");
        std::fs::write(&path, "{ \"name\": ").unwrap();
        assert!(matches!(
            load_track(&path),
            Err(RaceStrategyError::InputParseError { .. })
        ));
    }
}
