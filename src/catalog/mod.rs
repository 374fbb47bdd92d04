// Component catalog
// Fixed engine, tyre and aerodynamic kit variants with their performance attributes

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::RaceStrategyError;

pub mod components;
pub use components::{BrakeCompound, GearboxRatio, Suspension, TractionControl};

/// Engine variants offered by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EngineKind {
    Standard,
    Turbo,
    Hybrid,
    V8,
    Electric,
}

impl EngineKind {
    pub const ALL: [EngineKind; 5] = [
        EngineKind::Standard,
        EngineKind::Turbo,
        EngineKind::Hybrid,
        EngineKind::V8,
        EngineKind::Electric,
    ];

    /// Attribute lookup for this engine variant.
    pub fn spec(self) -> EngineSpec {
        let (name, speed_boost, acceleration_rating, weight, power) = match self {
            EngineKind::Standard => (
                "Standard Engine",
                20.0,
                4.0,
                180.0,
                PowerSource::Combustion {
                    fuel_consumption_rate: 4.5,
                },
            ),
            EngineKind::Turbo => (
                "Turbocharged Engine",
                40.0,
                3.2,
                220.0,
                PowerSource::Combustion {
                    fuel_consumption_rate: 6.5,
                },
            ),
            EngineKind::Hybrid => (
                "Hybrid Engine",
                35.0,
                3.5,
                200.0,
                PowerSource::Combustion {
                    fuel_consumption_rate: 4.0,
                },
            ),
            EngineKind::V8 => (
                "V8 Engine",
                45.0,
                3.8,
                250.0,
                PowerSource::Combustion {
                    fuel_consumption_rate: 7.0,
                },
            ),
            EngineKind::Electric => (
                "Electric Engine",
                50.0,
                2.9,
                140.0,
                PowerSource::Electric {
                    energy_consumption_per_100km: 18.0,
                },
            ),
        };

        EngineSpec {
            kind: self,
            name: name.to_string(),
            speed_boost,
            acceleration_rating,
            weight,
            power,
        }
    }
}

impl std::fmt::Display for EngineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineKind::Standard => write!(f, "Standard"),
            EngineKind::Turbo => write!(f, "Turbo"),
            EngineKind::Hybrid => write!(f, "Hybrid"),
            EngineKind::V8 => write!(f, "V8"),
            EngineKind::Electric => write!(f, "Electric"),
        }
    }
}

impl FromStr for EngineKind {
    type Err = RaceStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "standard" => Ok(EngineKind::Standard),
            "turbo" | "turbocharged" => Ok(EngineKind::Turbo),
            "hybrid" => Ok(EngineKind::Hybrid),
            "v8" => Ok(EngineKind::V8),
            "electric" | "ev" => Ok(EngineKind::Electric),
            _ => Err(unknown("engine", s)),
        }
    }
}

/// How an engine is fed: litres of fuel or kWh of battery energy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PowerSource {
    Combustion { fuel_consumption_rate: f64 },
    Electric { energy_consumption_per_100km: f64 },
}

/// Immutable attribute bundle for one engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSpec {
    pub kind: EngineKind,
    pub name: String,
    /// Top speed added on top of the aero kit's, in km/h
    pub speed_boost: f64,
    /// 0-100 km/h time in seconds
    pub acceleration_rating: f64,
    /// Engine weight in kg
    pub weight: f64,
    pub power: PowerSource,
}

impl EngineSpec {
    /// Fuel consumption penalty; zero for electric engines.
    pub fn fuel_consumption_rate(&self) -> f64 {
        match self.power {
            PowerSource::Combustion {
                fuel_consumption_rate,
            } => fuel_consumption_rate,
            PowerSource::Electric { .. } => 0.0,
        }
    }

    /// Energy draw in kWh per 100 km, only present for electric engines.
    pub fn energy_consumption_per_100km(&self) -> Option<f64> {
        match self.power {
            PowerSource::Electric {
                energy_consumption_per_100km,
            } => Some(energy_consumption_per_100km),
            PowerSource::Combustion { .. } => None,
        }
    }

    pub fn is_electric(&self) -> bool {
        matches!(self.power, PowerSource::Electric { .. })
    }
}

/// Tyre compounds offered by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TyreKind {
    Soft,
    Medium,
    Hard,
}

impl TyreKind {
    pub const ALL: [TyreKind; 3] = [TyreKind::Soft, TyreKind::Medium, TyreKind::Hard];

    /// Attribute lookup for this compound.
    pub fn spec(self) -> TyreSpec {
        let (wear_rate_per_lap, grip, min_optimal_temp_c, max_optimal_temp_c) = match self {
            TyreKind::Soft => (0.25, 0.9, 20.0, 30.0),
            TyreKind::Medium => (0.15, 0.8, 15.0, 35.0),
            TyreKind::Hard => (0.1, 0.6, 10.0, 40.0),
        };

        TyreSpec {
            kind: self,
            label: self.to_string(),
            wear_rate_per_lap,
            grip,
            min_optimal_temp_c,
            max_optimal_temp_c,
        }
    }
}

impl std::fmt::Display for TyreKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TyreKind::Soft => write!(f, "Soft"),
            TyreKind::Medium => write!(f, "Medium"),
            TyreKind::Hard => write!(f, "Hard"),
        }
    }
}

impl FromStr for TyreKind {
    type Err = RaceStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "soft" => Ok(TyreKind::Soft),
            "medium" => Ok(TyreKind::Medium),
            "hard" => Ok(TyreKind::Hard),
            _ => Err(unknown("tyre", s)),
        }
    }
}

/// Immutable attribute bundle for one tyre compound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TyreSpec {
    pub kind: TyreKind,
    pub label: String,
    /// Fraction of a tyre set consumed per lap
    pub wear_rate_per_lap: f64,
    pub grip: f64,
    pub min_optimal_temp_c: f64,
    pub max_optimal_temp_c: f64,
}

impl TyreSpec {
    /// Whether the ambient temperature falls inside the compound's window (inclusive).
    pub fn is_temperature_optimal(&self, temperature_c: f64) -> bool {
        temperature_c >= self.min_optimal_temp_c && temperature_c <= self.max_optimal_temp_c
    }
}

/// Aerodynamic packages offered by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AeroKitKind {
    Standard,
    Downforce,
    LowDrag,
    GroundEffect,
    Extreme,
    WetWeather,
}

impl AeroKitKind {
    pub const ALL: [AeroKitKind; 6] = [
        AeroKitKind::Standard,
        AeroKitKind::Downforce,
        AeroKitKind::LowDrag,
        AeroKitKind::GroundEffect,
        AeroKitKind::Extreme,
        AeroKitKind::WetWeather,
    ];

    /// Attribute lookup for this aero kit.
    pub fn spec(self) -> AeroKitSpec {
        let (
            name,
            drag_coefficient,
            downforce,
            top_speed,
            fuel_efficiency_rating,
            cornering_ability,
            brake_efficiency,
        ) = match self {
            AeroKitKind::Standard => ("Standard Kit", 0.30, 250.0, 250.0, 12.0, 6, 0.7),
            AeroKitKind::Downforce => ("Downforce-Focussed Kit", 0.35, 350.0, 220.0, 10.0, 9, 0.85),
            AeroKitKind::LowDrag => ("Low-Drag Kit", 0.25, 150.0, 280.0, 14.0, 5, 0.6),
            AeroKitKind::GroundEffect => ("Ground Effect Kit", 0.28, 300.0, 240.0, 12.0, 8, 0.75),
            AeroKitKind::Extreme => ("Extreme Aero Kit", 0.40, 450.0, 200.0, 9.0, 10, 0.88),
            AeroKitKind::WetWeather => ("Wet Weather Kit", 0.33, 320.0, 230.0, 11.0, 7, 0.9),
        };

        AeroKitSpec {
            kind: self,
            name: name.to_string(),
            drag_coefficient,
            downforce,
            top_speed,
            fuel_efficiency_rating,
            cornering_ability,
            brake_efficiency,
        }
    }
}

impl std::fmt::Display for AeroKitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AeroKitKind::Standard => write!(f, "Standard"),
            AeroKitKind::Downforce => write!(f, "Downforce"),
            AeroKitKind::LowDrag => write!(f, "Low Drag"),
            AeroKitKind::GroundEffect => write!(f, "Ground Effect"),
            AeroKitKind::Extreme => write!(f, "Extreme"),
            AeroKitKind::WetWeather => write!(f, "Wet Weather"),
        }
    }
}

impl FromStr for AeroKitKind {
    type Err = RaceStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "standard" => Ok(AeroKitKind::Standard),
            "downforce" => Ok(AeroKitKind::Downforce),
            "low-drag" | "lowdrag" => Ok(AeroKitKind::LowDrag),
            "ground-effect" | "groundeffect" => Ok(AeroKitKind::GroundEffect),
            "extreme" => Ok(AeroKitKind::Extreme),
            "wet-weather" | "wetweather" | "wet" => Ok(AeroKitKind::WetWeather),
            _ => Err(unknown("aero kit", s)),
        }
    }
}

/// Immutable attribute bundle for one aero kit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AeroKitSpec {
    pub kind: AeroKitKind,
    pub name: String,
    pub drag_coefficient: f64,
    pub downforce: f64,
    /// Base top speed in km/h
    pub top_speed: f64,
    /// Baseline km per litre before engine penalties
    pub fuel_efficiency_rating: f64,
    /// 0-10 scale
    pub cornering_ability: u8,
    /// 0-1 fraction
    pub brake_efficiency: f64,
}

/// Lowercases and maps spaces/underscores to hyphens so "Low Drag", "low_drag"
/// and "low-drag" all parse the same.
pub(crate) fn normalize(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '_' { '-' } else { c })
        .collect()
}

pub(crate) fn unknown(kind: &str, value: &str) -> RaceStrategyError {
    RaceStrategyError::UnknownComponent {
        kind: kind.to_string(),
        value: value.to_string(),
    }
}
