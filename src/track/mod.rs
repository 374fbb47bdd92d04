// Track profiles and derived track difficulty

use serde::{Deserialize, Serialize};

use crate::RaceStrategyError;

pub mod presets;
pub use presets::{find_preset, preset_tracks};

/// Highest value the difficulty score can take.
pub const MAX_DIFFICULTY: u8 = 10;

/// Read-only description of a race track and the race run on it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TrackProfile {
    /// Human-readable track name (e.g., "Desert Sprint Circuit")
    pub name: String,
    /// Length of a single lap; must be positive
    pub lap_length_km: f64,
    /// Total race distance, used to derive the lap count
    pub total_race_distance_km: f64,
    /// Ambient temperature, drives tyre choice and tyre temperature fit
    pub ambient_temp_c: f64,
    pub is_wet: bool,
    /// Sharp or medium-speed corners
    pub number_of_curves: i32,
    /// Double-apex or S-bend chicanes
    pub number_of_chicanes: i32,
    pub has_long_straights: bool,
    /// Total elevation gain in meters
    pub elevation_gain_m: i32,
}

impl TrackProfile {
    /// Derived 0-10 rating of how demanding the track is.
    ///
    /// Each term is capped on its own before the sum is capped. Terms are
    /// computed with floor division on the raw values, so negative curve or
    /// elevation counts pull their term below zero (-5 curves gives -1). The
    /// total never drops below zero.
    pub fn difficulty_score(&self) -> u8 {
        let elevation_term = (self.elevation_gain_m.div_euclid(75)).min(3);
        let curves_term = (self.number_of_curves.div_euclid(5)).min(3);
        let chicane_term = if self.number_of_chicanes >= 3 { 1 } else { 0 };
        let wet_term = if self.is_wet { 2 } else { 0 };

        let total = elevation_term + curves_term + chicane_term + wet_term;
        total.clamp(0, MAX_DIFFICULTY as i32) as u8
    }

    /// Number of complete laps in the race.
    pub fn total_laps(&self) -> u32 {
        (self.total_race_distance_km / self.lap_length_km).floor() as u32
    }

    /// Check the preconditions every estimate divides by.
    pub fn validate(&self) -> Result<(), RaceStrategyError> {
        if !self.lap_length_km.is_finite() || self.lap_length_km <= 0.0 {
            return Err(RaceStrategyError::invalid_input(
                "lap_length_km",
                format!("must be greater than zero, got {}", self.lap_length_km),
            ));
        }
        if !self.total_race_distance_km.is_finite() || self.total_race_distance_km < 0.0 {
            return Err(RaceStrategyError::invalid_input(
                "total_race_distance_km",
                format!("must not be negative, got {}", self.total_race_distance_km),
            ));
        }
        Ok(())
    }
}
