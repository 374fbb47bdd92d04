// Extended setup components: closed sets of named levels

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{normalize, unknown};
use crate::RaceStrategyError;

/// Suspension stiffness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suspension {
    /// Better over bumps, slower weight transfer
    Soft,
    Medium,
    /// Sharper response, less compliance
    Hard,
}

impl std::fmt::Display for Suspension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Suspension::Soft => write!(f, "Soft Suspension"),
            Suspension::Medium => write!(f, "Medium Suspension"),
            Suspension::Hard => write!(f, "Hard Suspension"),
        }
    }
}

impl FromStr for Suspension {
    type Err = RaceStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).trim_end_matches("-suspension") {
            "soft" => Ok(Suspension::Soft),
            "medium" => Ok(Suspension::Medium),
            "hard" => Ok(Suspension::Hard),
            _ => Err(unknown("suspension", s)),
        }
    }
}

/// Brake compound by operating temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BrakeCompound {
    /// Quick warm-up, short stints
    LowTemperature,
    MediumTemperature,
    /// Handles high loads over long stints
    HighTemperature,
}

impl std::fmt::Display for BrakeCompound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BrakeCompound::LowTemperature => write!(f, "Low Temperature"),
            BrakeCompound::MediumTemperature => write!(f, "Medium Temperature"),
            BrakeCompound::HighTemperature => write!(f, "High Temperature"),
        }
    }
}

impl FromStr for BrakeCompound {
    type Err = RaceStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).trim_end_matches("-temperature") {
            "low" => Ok(BrakeCompound::LowTemperature),
            "medium" => Ok(BrakeCompound::MediumTemperature),
            "high" => Ok(BrakeCompound::HighTemperature),
            _ => Err(unknown("brake compound", s)),
        }
    }
}

/// Gearbox ratio spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GearboxRatio {
    /// Shorter gearing, quicker shifts
    CloseRatio,
    /// Longer gearing for top speed
    WideRatio,
}

impl std::fmt::Display for GearboxRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GearboxRatio::CloseRatio => write!(f, "Close Ratio"),
            GearboxRatio::WideRatio => write!(f, "Wide Ratio"),
        }
    }
}

impl FromStr for GearboxRatio {
    type Err = RaceStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).trim_end_matches("-ratio") {
            "close" => Ok(GearboxRatio::CloseRatio),
            "wide" => Ok(GearboxRatio::WideRatio),
            _ => Err(unknown("gearbox ratio", s)),
        }
    }
}

/// Traction control assistance level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TractionControl {
    Off,
    Low,
    Medium,
    High,
}

impl std::fmt::Display for TractionControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TractionControl::Off => write!(f, "TC Off"),
            TractionControl::Low => write!(f, "TC Low"),
            TractionControl::Medium => write!(f, "TC Medium"),
            TractionControl::High => write!(f, "TC High"),
        }
    }
}

impl FromStr for TractionControl {
    type Err = RaceStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).trim_start_matches("tc-") {
            "off" => Ok(TractionControl::Off),
            "low" => Ok(TractionControl::Low),
            "medium" => Ok(TractionControl::Medium),
            "high" => Ok(TractionControl::High),
            _ => Err(unknown("traction control level", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_components_parse_short_and_display_forms() {
        assert_eq!("hard".parse::<Suspension>().unwrap(), Suspension::Hard);
        assert_eq!(
            Suspension::Soft.to_string().parse::<Suspension>().unwrap(),
            Suspension::Soft
        );
        assert_eq!(
            "High Temperature".parse::<BrakeCompound>().unwrap(),
            BrakeCompound::HighTemperature
        );
        assert_eq!("wide".parse::<GearboxRatio>().unwrap(), GearboxRatio::WideRatio);
        assert_eq!(
            "Close Ratio".parse::<GearboxRatio>().unwrap(),
            GearboxRatio::CloseRatio
        );
        assert_eq!("TC Off".parse::<TractionControl>().unwrap(), TractionControl::Off);
        assert_eq!("medium".parse::<TractionControl>().unwrap(), TractionControl::Medium);
    }

    #[test]
    fn test_unknown_component_level_is_rejected() {
        let err = "extra-stiff".parse::<Suspension>().unwrap_err();
        assert!(matches!(err, RaceStrategyError::UnknownComponent { .. }));
    }
}
