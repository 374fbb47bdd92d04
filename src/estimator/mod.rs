// Performance estimator
// Closed-form projections of speed, lap time, resource use and tyre wear

use log::debug;
use serde::{Deserialize, Serialize};

use crate::RaceStrategyError;
use crate::car::CarConfiguration;
use crate::catalog::{AeroKitSpec, EngineSpec, PowerSource};
use crate::track::TrackProfile;

/// Lap time multiplier when ambient temperature is outside the tyre window.
pub const TYRE_TEMP_PENALTY: f64 = 1.1;
/// Fuel efficiency never drops below this many km per litre.
pub const MIN_FUEL_EFFICIENCY_KM_PER_LITER: f64 = 1.0;

/// Fuel or energy needs for the full race distance, depending on engine type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResourceProjection {
    Fuel {
        efficiency_km_per_liter: f64,
        fuel_needed_liters: f64,
        fuel_stops_required: u32,
    },
    Energy {
        consumption_kwh_per_100km: f64,
        total_energy_needed_kwh: f64,
        charging_stops_required: u32,
    },
}

impl ResourceProjection {
    /// Refuelling or recharging stops, whichever applies.
    pub fn stops_required(&self) -> u32 {
        match self {
            ResourceProjection::Fuel {
                fuel_stops_required,
                ..
            } => *fuel_stops_required,
            ResourceProjection::Energy {
                charging_stops_required,
                ..
            } => *charging_stops_required,
        }
    }
}

/// Projected race metrics for one car on one track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RaceMetrics {
    pub lap_time_minutes: f64,
    pub total_race_time_minutes: f64,
    pub total_laps: u32,
    pub tyre_changes_estimated: u32,
    pub resources: ResourceProjection,
}

/// Top-end speed estimate in km/h with aero and engine combined.
pub fn overall_speed(car: &CarConfiguration) -> f64 {
    car.aero_kit.top_speed + car.engine.speed_boost - car.engine.weight / 100.0
}

/// Time for one lap in minutes.
///
/// Penalised by 10% when the ambient temperature is outside the tyre's
/// optimal window, and reduced by the kit's cornering and braking ability.
pub fn lap_time_minutes(
    car: &CarConfiguration,
    track: &TrackProfile,
) -> Result<f64, RaceStrategyError> {
    track.validate()?;
    car.validate()?;
    let speed = overall_speed(car);
    if !speed.is_finite() || speed <= 0.0 {
        return Err(RaceStrategyError::invalid_input(
            "overall_speed",
            format!("must be greater than zero, got {}", speed),
        ));
    }

    let temp_penalty = if car.tyre.is_temperature_optimal(track.ambient_temp_c) {
        1.0
    } else {
        TYRE_TEMP_PENALTY
    };
    let cornering_modifier = 1.0 - f64::from(car.aero_kit.cornering_ability) / 20.0;
    let brake_modifier = 1.0 - car.aero_kit.brake_efficiency;
    let base_time_hours = track.lap_length_km / speed;

    Ok(base_time_hours * temp_penalty * cornering_modifier * brake_modifier * 60.0)
}

/// Fuel efficiency in km per litre, floored at 1.0.
pub fn fuel_efficiency_km_per_liter(engine: &EngineSpec, aero_kit: &AeroKitSpec) -> f64 {
    let base_efficiency = aero_kit.fuel_efficiency_rating;
    let engine_penalty = engine.fuel_consumption_rate();
    let weight_penalty = engine.weight / 300.0;
    (base_efficiency - engine_penalty - weight_penalty).max(MIN_FUEL_EFFICIENCY_KM_PER_LITER)
}

/// Distance per unit of stored energy: km/kWh for electric engines, km/l otherwise.
pub fn efficiency(car: &CarConfiguration) -> Result<f64, RaceStrategyError> {
    car.validate()?;
    Ok(match car.engine.power {
        PowerSource::Electric {
            energy_consumption_per_100km,
        } => 100.0 / energy_consumption_per_100km,
        PowerSource::Combustion { .. } => fuel_efficiency_km_per_liter(&car.engine, &car.aero_kit),
    })
}

/// Whole tyre sets worn through over the race.
pub fn tyre_changes_estimated(car: &CarConfiguration, total_laps: u32) -> u32 {
    (f64::from(total_laps) * car.tyre.wear_rate_per_lap).floor() as u32
}

/// Fuel or energy requirement for the race, chosen by the engine's power source.
pub fn resource_projection(
    car: &CarConfiguration,
    track: &TrackProfile,
) -> Result<ResourceProjection, RaceStrategyError> {
    track.validate()?;
    car.validate()?;
    let distance = track.total_race_distance_km;

    let projection = match car.engine.power {
        PowerSource::Electric {
            energy_consumption_per_100km,
        } => {
            let total_energy_needed_kwh = distance / 100.0 * energy_consumption_per_100km;
            ResourceProjection::Energy {
                consumption_kwh_per_100km: energy_consumption_per_100km,
                total_energy_needed_kwh,
                charging_stops_required: (total_energy_needed_kwh / car.capacity).ceil() as u32,
            }
        }
        PowerSource::Combustion { .. } => {
            let efficiency_km_per_liter = fuel_efficiency_km_per_liter(&car.engine, &car.aero_kit);
            let fuel_needed_liters = distance / efficiency_km_per_liter;
            ResourceProjection::Fuel {
                efficiency_km_per_liter,
                fuel_needed_liters,
                fuel_stops_required: (fuel_needed_liters / car.capacity).ceil() as u32,
            }
        }
    };
    Ok(projection)
}

/// Project every race metric for a car on a track.
pub fn estimate(
    car: &CarConfiguration,
    track: &TrackProfile,
) -> Result<RaceMetrics, RaceStrategyError> {
    let lap_time_minutes = lap_time_minutes(car, track)?;
    let resources = resource_projection(car, track)?;
    let total_laps = track.total_laps();

    let metrics = RaceMetrics {
        lap_time_minutes,
        total_race_time_minutes: lap_time_minutes * f64::from(total_laps),
        total_laps,
        tyre_changes_estimated: tyre_changes_estimated(car, total_laps),
        resources,
    };
    debug!("Estimated metrics on {}: {:?}", track.name, metrics);
    Ok(metrics)
}
