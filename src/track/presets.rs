// Built-in track presets

use super::TrackProfile;
use crate::RaceStrategyError;

/// The five preset circuits shipped with the optimiser.
pub fn preset_tracks() -> Vec<TrackProfile> {
    vec![
        // Hot and flat with long straights, short laps favour acceleration
        TrackProfile {
            name: "Desert Sprint Circuit".to_string(),
            lap_length_km: 4.2,
            total_race_distance_km: 126.0,
            ambient_temp_c: 38.0,
            is_wet: false,
            number_of_curves: 6,
            number_of_chicanes: 1,
            has_long_straights: true,
            elevation_gain_m: 20,
        },
        // Narrow high-altitude circuit, cold and wet
        TrackProfile {
            name: "Mountain Twistway".to_string(),
            lap_length_km: 5.1,
            total_race_distance_km: 180.0,
            ambient_temp_c: 16.0,
            is_wet: true,
            number_of_curves: 14,
            number_of_chicanes: 5,
            has_long_straights: false,
            elevation_gain_m: 180,
        },
        TrackProfile {
            name: "High-Speed Oval".to_string(),
            lap_length_km: 7.0,
            total_race_distance_km: 210.0,
            ambient_temp_c: 28.0,
            is_wet: false,
            number_of_curves: 3,
            number_of_chicanes: 0,
            has_long_straights: true,
            elevation_gain_m: 0,
        },
        // Tight and technical, heavy on chicanes
        TrackProfile {
            name: "Urban Street Loop".to_string(),
            lap_length_km: 3.6,
            total_race_distance_km: 108.0,
            ambient_temp_c: 30.0,
            is_wet: false,
            number_of_curves: 12,
            number_of_chicanes: 7,
            has_long_straights: false,
            elevation_gain_m: 40,
        },
        TrackProfile {
            name: "Grand Prix Complex".to_string(),
            lap_length_km: 5.8,
            total_race_distance_km: 174.0,
            ambient_temp_c: 24.0,
            is_wet: true,
            number_of_curves: 10,
            number_of_chicanes: 3,
            has_long_straights: true,
            elevation_gain_m: 70,
        },
    ]
}

/// Look up a preset by name, ignoring case and surrounding whitespace.
pub fn find_preset(name: &str) -> Result<TrackProfile, RaceStrategyError> {
    let wanted = name.trim().to_lowercase();
    preset_tracks()
        .into_iter()
        .find(|t| t.name.to_lowercase() == wanted)
        .ok_or_else(|| RaceStrategyError::UnknownTrack {
            name: name.to_string(),
        })
}
