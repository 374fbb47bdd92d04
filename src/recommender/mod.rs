// Setup recommender
// Maps track characteristics to a track-optimal car configuration

use log::debug;

use crate::car::CarConfiguration;
use crate::catalog::{
    AeroKitKind, BrakeCompound, EngineKind, GearboxRatio, Suspension, TractionControl, TyreKind,
};
use crate::track::TrackProfile;

/// Recommend the optimal configuration for a track.
///
/// Pure and deterministic: structurally equal tracks always produce the same
/// component kinds. The extended components are always filled in.
pub fn recommend(track: &TrackProfile) -> CarConfiguration {
    let config = CarConfiguration::from_kinds(
        recommend_engine(track),
        recommend_tyre(track),
        recommend_aero_kit(track),
        recommend_capacity(track),
    )
    .with_suspension(recommend_suspension(track))
    .with_brakes(recommend_brakes(track))
    .with_gearbox(recommend_gearbox(track))
    .with_traction_control(recommend_traction_control(track));

    debug!(
        "Recommended for {}: {} / {} / {} / {:.0}",
        track.name,
        config.engine.name,
        config.tyre.label,
        config.aero_kit.name,
        config.capacity
    );
    config
}

/// First matching rule wins.
pub fn recommend_engine(track: &TrackProfile) -> EngineKind {
    if track.is_wet && track.number_of_curves > 10 {
        // control in twisty wet conditions
        EngineKind::Electric
    } else if track.is_wet || track.lap_length_km < 3.5 {
        EngineKind::Electric
    } else if track.number_of_curves > 15 {
        EngineKind::Hybrid
    } else if track.has_long_straights {
        EngineKind::Turbo
    } else {
        EngineKind::Standard
    }
}

pub fn recommend_tyre(track: &TrackProfile) -> TyreKind {
    if track.ambient_temp_c < 20.0 {
        TyreKind::Soft
    } else if track.ambient_temp_c > 30.0 || track.number_of_curves > 10 {
        // hot or high wear
        TyreKind::Hard
    } else {
        TyreKind::Medium
    }
}

pub fn recommend_aero_kit(track: &TrackProfile) -> AeroKitKind {
    if track.number_of_chicanes > 3 || track.number_of_curves > 12 {
        AeroKitKind::Downforce
    } else if track.has_long_straights && track.number_of_curves < 6 {
        AeroKitKind::LowDrag
    } else {
        AeroKitKind::Standard
    }
}

/// Fuel tank litres or battery kWh, sized by race distance.
pub fn recommend_capacity(track: &TrackProfile) -> f64 {
    let distance = track.total_race_distance_km;
    if distance > 180.0 {
        100.0
    } else if distance > 150.0 {
        90.0
    } else if distance < 120.0 {
        70.0
    } else {
        80.0
    }
}

pub fn recommend_suspension(track: &TrackProfile) -> Suspension {
    match track.difficulty_score() {
        0..=3 => Suspension::Hard,
        4..=7 => Suspension::Medium,
        _ => Suspension::Soft,
    }
}

pub fn recommend_brakes(track: &TrackProfile) -> BrakeCompound {
    if track.is_wet {
        BrakeCompound::HighTemperature
    } else {
        BrakeCompound::MediumTemperature
    }
}

pub fn recommend_gearbox(track: &TrackProfile) -> GearboxRatio {
    if track.has_long_straights {
        GearboxRatio::WideRatio
    } else {
        GearboxRatio::CloseRatio
    }
}

pub fn recommend_traction_control(track: &TrackProfile) -> TractionControl {
    if track.is_wet {
        TractionControl::High
    } else {
        TractionControl::Medium
    }
}

/// Short rationale for the recommended setup, keyed on the track name.
pub fn explain_setup_choice(track: &TrackProfile) -> &'static str {
    let name = track.name.to_lowercase();

    if name.contains("desert") {
        "Turbo engine with hard tyres for heat endurance and low drag for long straights."
    } else if name.contains("mountain") {
        "Hybrid engine and soft tyres for cold, twisty, wet terrain. Downforce adds grip in curves."
    } else if name.contains("oval") {
        "V8 engine and low drag kit are perfect for max speed on this flat, high-speed circuit."
    } else if name.contains("urban") {
        "Electric engine and ground effect suit tight chicanes and quick direction changes in the heat."
    } else if name.contains("grand prix") {
        "Balanced setup. Medium tyres and extreme aero handle both fast and technical sections well."
    } else {
        "Balanced configuration for general racing conditions."
    }
}
