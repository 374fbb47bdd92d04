// Car configuration value object

use serde::{Deserialize, Serialize};

use crate::RaceStrategyError;
use crate::catalog::{
    AeroKitKind, AeroKitSpec, BrakeCompound, EngineKind, EngineSpec, GearboxRatio, Suspension,
    TractionControl, TyreKind, TyreSpec,
};

/// Top of the aero kit cornering scale.
pub const MAX_CORNERING_ABILITY: u8 = 10;

/// A complete car setup: engine, tyres, aero kit and tank or battery size,
/// plus the optional extended components.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CarConfiguration {
    pub engine: EngineSpec,
    pub tyre: TyreSpec,
    pub aero_kit: AeroKitSpec,
    /// Litres for combustion engines, kWh for electric ones
    pub capacity: f64,
    #[serde(default)]
    pub suspension: Option<Suspension>,
    #[serde(default)]
    pub brakes: Option<BrakeCompound>,
    #[serde(default)]
    pub gearbox: Option<GearboxRatio>,
    #[serde(default)]
    pub traction_control: Option<TractionControl>,
}

impl CarConfiguration {
    pub fn new(engine: EngineSpec, tyre: TyreSpec, aero_kit: AeroKitSpec, capacity: f64) -> Self {
        Self {
            engine,
            tyre,
            aero_kit,
            capacity,
            suspension: None,
            brakes: None,
            gearbox: None,
            traction_control: None,
        }
    }

    /// Build a car from catalog variants.
    pub fn from_kinds(
        engine: EngineKind,
        tyre: TyreKind,
        aero_kit: AeroKitKind,
        capacity: f64,
    ) -> Self {
        Self::new(engine.spec(), tyre.spec(), aero_kit.spec(), capacity)
    }

    pub fn with_suspension(mut self, suspension: Suspension) -> Self {
        self.suspension = Some(suspension);
        self
    }

    pub fn with_brakes(mut self, brakes: BrakeCompound) -> Self {
        self.brakes = Some(brakes);
        self
    }

    pub fn with_gearbox(mut self, gearbox: GearboxRatio) -> Self {
        self.gearbox = Some(gearbox);
        self
    }

    pub fn with_traction_control(mut self, traction_control: TractionControl) -> Self {
        self.traction_control = Some(traction_control);
        self
    }

    /// Whether any of the extended components is set.
    pub fn is_extended(&self) -> bool {
        self.suspension.is_some()
            || self.brakes.is_some()
            || self.gearbox.is_some()
            || self.traction_control.is_some()
    }

    /// Check the ranges the estimator relies on.
    ///
    /// Catalog cars always pass; cars read from JSON may carry any values.
    pub fn validate(&self) -> Result<(), RaceStrategyError> {
        if !self.capacity.is_finite() || self.capacity <= 0.0 {
            return Err(RaceStrategyError::invalid_input(
                "capacity",
                format!("must be greater than zero, got {}", self.capacity),
            ));
        }
        if self.aero_kit.cornering_ability > MAX_CORNERING_ABILITY {
            return Err(RaceStrategyError::invalid_input(
                "aero_kit.cornering_ability",
                format!(
                    "must be between 0 and {}, got {}",
                    MAX_CORNERING_ABILITY, self.aero_kit.cornering_ability
                ),
            ));
        }
        // 1.0 would zero the lap time
        let brake_efficiency = self.aero_kit.brake_efficiency;
        if !(0.0..1.0).contains(&brake_efficiency) {
            return Err(RaceStrategyError::invalid_input(
                "aero_kit.brake_efficiency",
                format!("must be in [0, 1), got {}", brake_efficiency),
            ));
        }
        if let Some(consumption) = self.engine.energy_consumption_per_100km() {
            if !consumption.is_finite() || consumption <= 0.0 {
                return Err(RaceStrategyError::invalid_input(
                    "engine.energy_consumption_per_100km",
                    format!("must be greater than zero, got {}", consumption),
                ));
            }
        }
        let wear_rate = self.tyre.wear_rate_per_lap;
        if !wear_rate.is_finite() || wear_rate < 0.0 {
            return Err(RaceStrategyError::invalid_input(
                "tyre.wear_rate_per_lap",
                format!("must not be negative, got {}", wear_rate),
            ));
        }
        Ok(())
    }
}
