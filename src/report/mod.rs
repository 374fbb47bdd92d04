// Race strategy reporter
// Combines the rule checker, estimator and recommender into one report

use log::info;
use serde::{Deserialize, Serialize};

use crate::RaceStrategyError;
use crate::car::CarConfiguration;
use crate::catalog::{AeroKitKind, EngineKind, TyreKind};
use crate::compatibility::{ValidationVerdict, check_compatibility};
use crate::estimator::{RaceMetrics, estimate, fuel_efficiency_km_per_liter};
use crate::recommender::{explain_setup_choice, recommend};
use crate::track::TrackProfile;

/// Capacity difference, in litres or kWh, tolerated before flagging a change.
pub const DEFAULT_CAPACITY_TOLERANCE: f64 = 5.0;

/// Setup fields compared between the chosen and the optimal configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SetupField {
    Engine,
    Tyre,
    AeroKit,
    Capacity,
    Suspension,
    Brakes,
    Gearbox,
    TractionControl,
}

impl std::fmt::Display for SetupField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupField::Engine => write!(f, "Engine"),
            SetupField::Tyre => write!(f, "Tyres"),
            SetupField::AeroKit => write!(f, "Aero Kit"),
            SetupField::Capacity => write!(f, "Fuel/Battery Capacity"),
            SetupField::Suspension => write!(f, "Suspension"),
            SetupField::Brakes => write!(f, "Brakes"),
            SetupField::Gearbox => write!(f, "Gearbox"),
            SetupField::TractionControl => write!(f, "Traction Control"),
        }
    }
}

/// Per-field changed flags between the chosen setup and the optimal one.
///
/// Extended components the car leaves unset are never reported as changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupDiff {
    pub engine_changed: bool,
    pub tyre_changed: bool,
    pub aero_changed: bool,
    pub capacity_changed: bool,
    pub suspension_changed: bool,
    pub brakes_changed: bool,
    pub gearbox_changed: bool,
    pub traction_control_changed: bool,
}

impl SetupDiff {
    /// Compare by component kind, and capacity by tolerance. A car that
    /// carries any extended component is compared on exact capacity.
    pub fn between(
        car: &CarConfiguration,
        optimal: &CarConfiguration,
        capacity_tolerance: f64,
    ) -> Self {
        let capacity_changed = if car.is_extended() {
            car.capacity != optimal.capacity
        } else {
            (car.capacity - optimal.capacity).abs() > capacity_tolerance
        };

        Self {
            engine_changed: car.engine.kind != optimal.engine.kind,
            tyre_changed: car.tyre.kind != optimal.tyre.kind,
            aero_changed: car.aero_kit.kind != optimal.aero_kit.kind,
            capacity_changed,
            suspension_changed: differs(car.suspension, optimal.suspension),
            brakes_changed: differs(car.brakes, optimal.brakes),
            gearbox_changed: differs(car.gearbox, optimal.gearbox),
            traction_control_changed: differs(car.traction_control, optimal.traction_control),
        }
    }

    /// Changed fields in report order.
    pub fn changed_fields(&self) -> Vec<SetupField> {
        [
            (self.engine_changed, SetupField::Engine),
            (self.tyre_changed, SetupField::Tyre),
            (self.aero_changed, SetupField::AeroKit),
            (self.capacity_changed, SetupField::Capacity),
            (self.suspension_changed, SetupField::Suspension),
            (self.brakes_changed, SetupField::Brakes),
            (self.gearbox_changed, SetupField::Gearbox),
            (self.traction_control_changed, SetupField::TractionControl),
        ]
        .into_iter()
        .filter_map(|(changed, field)| changed.then_some(field))
        .collect()
    }

    pub fn is_same_setup(&self) -> bool {
        self.changed_fields().is_empty()
    }
}

fn differs<T: PartialEq>(chosen: Option<T>, optimal: Option<T>) -> bool {
    match chosen {
        Some(chosen) => Some(chosen) != optimal,
        None => false,
    }
}

/// Track and car conditions that feed the advisory text. They never gate
/// validity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticFlags {
    pub high_wear_track: bool,
    pub fuel_demanding_track: bool,
    pub tyre_temp_mismatch: bool,
    pub tyre_too_soft_for_corners: bool,
    pub fuel_too_low: bool,
    pub brakes_too_weak_in_wet: bool,
    pub turbo_in_wet: bool,
}

impl DiagnosticFlags {
    pub fn compute(car: &CarConfiguration, track: &TrackProfile) -> Self {
        let high_wear_track = track.number_of_curves > 10 || track.number_of_chicanes > 3;
        let fuel_demanding_track =
            track.total_race_distance_km > 160.0 || track.elevation_gain_m > 100;

        Self {
            high_wear_track,
            fuel_demanding_track,
            tyre_temp_mismatch: !car.tyre.is_temperature_optimal(track.ambient_temp_c),
            tyre_too_soft_for_corners: high_wear_track && car.tyre.wear_rate_per_lap > 0.12,
            fuel_too_low: fuel_demanding_track
                && !car.engine.is_electric()
                && fuel_efficiency_km_per_liter(&car.engine, &car.aero_kit) < 6.0,
            brakes_too_weak_in_wet: track.is_wet && car.aero_kit.brake_efficiency < 0.6,
            turbo_in_wet: track.is_wet && car.engine.name.to_lowercase().contains("turbo"),
        }
    }
}

/// One line of strategy advice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Advisory {
    TyreTemperatureMismatch,
    FuelEfficiencyLow,
    TyresTooSoftForCorners,
    BrakesWeakInWet,
    TurboUnstableInWet,
    Suboptimal {
        field: SetupField,
        recommended: String,
    },
    MatchesOptimal,
}

impl std::fmt::Display for Advisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Advisory::TyreTemperatureMismatch => write!(
                f,
                "Tyres do not match track temperature range. Consider changing compound."
            ),
            Advisory::FuelEfficiencyLow => write!(
                f,
                "Fuel efficiency is low for this track. Consider optimizing aero or switching to hybrid/electric."
            ),
            Advisory::TyresTooSoftForCorners => write!(
                f,
                "Tyres may degrade quickly on this twisty circuit. Consider using harder compound."
            ),
            Advisory::BrakesWeakInWet => write!(
                f,
                "Wet track and low brake efficiency may reduce control. Consider a Downforce Kit."
            ),
            Advisory::TurboUnstableInWet => write!(
                f,
                "Turbo engines may be unstable in wet conditions. Consider Hybrid or Electric."
            ),
            Advisory::Suboptimal { field, recommended } => match field {
                SetupField::Engine => write!(
                    f,
                    "Engine selection is suboptimal. Recommended: {}",
                    recommended
                ),
                SetupField::Tyre => write!(
                    f,
                    "Tyre type differs from the track-optimized compound. Recommended: {}",
                    recommended
                ),
                SetupField::AeroKit => write!(
                    f,
                    "Aerodynamic kit choice may not provide the ideal performance. Recommended: {}",
                    recommended
                ),
                SetupField::Capacity => write!(
                    f,
                    "Fuel tank capacity may not meet race distance demands. Recommended: {}",
                    recommended
                ),
                other => write!(
                    f,
                    "{} differs from the track-optimized setting. Recommended: {}",
                    other, recommended
                ),
            },
            Advisory::MatchesOptimal => write!(
                f,
                "Your setup perfectly matches the optimal configuration for this track."
            ),
        }
    }
}

/// Build the advisory lines.
///
/// A diagnostic line is emitted only when its flag is set and the matching
/// field also differs from the optimal setup; a flag on a field that already
/// matches stays silent. Every changed field then gets its own line naming
/// the recommended value.
pub fn advisories(
    flags: &DiagnosticFlags,
    diff: &SetupDiff,
    optimal: &CarConfiguration,
) -> Vec<Advisory> {
    if diff.is_same_setup() {
        return vec![Advisory::MatchesOptimal];
    }

    let mut lines = Vec::new();
    if flags.tyre_temp_mismatch && diff.tyre_changed {
        lines.push(Advisory::TyreTemperatureMismatch);
    }
    if flags.fuel_too_low && diff.capacity_changed {
        lines.push(Advisory::FuelEfficiencyLow);
    }
    if flags.tyre_too_soft_for_corners && diff.tyre_changed {
        lines.push(Advisory::TyresTooSoftForCorners);
    }
    if flags.brakes_too_weak_in_wet && diff.aero_changed {
        lines.push(Advisory::BrakesWeakInWet);
    }
    if flags.turbo_in_wet && diff.engine_changed {
        lines.push(Advisory::TurboUnstableInWet);
    }

    for field in diff.changed_fields() {
        lines.push(Advisory::Suboptimal {
            field,
            recommended: recommended_value(field, optimal),
        });
    }
    lines
}

fn recommended_value(field: SetupField, optimal: &CarConfiguration) -> String {
    fn or_unset<T: ToString>(value: Option<T>) -> String {
        value.map_or_else(|| "unset".to_string(), |v| v.to_string())
    }

    match field {
        SetupField::Engine => optimal.engine.name.clone(),
        SetupField::Tyre => optimal.tyre.label.clone(),
        SetupField::AeroKit => optimal.aero_kit.name.clone(),
        SetupField::Capacity => format!("{:.1}", optimal.capacity),
        SetupField::Suspension => or_unset(optimal.suspension),
        SetupField::Brakes => or_unset(optimal.brakes),
        SetupField::Gearbox => or_unset(optimal.gearbox),
        SetupField::TractionControl => or_unset(optimal.traction_control),
    }
}

/// Race-day setup suggestion that takes the car's diagnostic flags into
/// account, alongside the purely track-derived optimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategySetup {
    pub engine: EngineKind,
    pub tyre: TyreKind,
    pub aero_kit: AeroKitKind,
}

impl StrategySetup {
    pub fn for_track(track: &TrackProfile, flags: &DiagnosticFlags) -> Self {
        let engine = if flags.turbo_in_wet {
            EngineKind::Hybrid
        } else if track.is_wet {
            EngineKind::Electric
        } else if track.number_of_curves > 12 {
            EngineKind::Hybrid
        } else if track.has_long_straights {
            EngineKind::Turbo
        } else {
            EngineKind::Standard
        };

        let tyre = if track.ambient_temp_c < 20.0 {
            TyreKind::Soft
        } else if track.ambient_temp_c > 30.0 || flags.tyre_too_soft_for_corners {
            TyreKind::Hard
        } else {
            TyreKind::Medium
        };

        let aero_kit = if flags.brakes_too_weak_in_wet || track.number_of_curves > 12 {
            AeroKitKind::Downforce
        } else if track.has_long_straights {
            AeroKitKind::LowDrag
        } else {
            AeroKitKind::Standard
        };

        Self {
            engine,
            tyre,
            aero_kit,
        }
    }
}

/// Everything computed for a configuration that passed the rule checker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyAnalysis {
    pub metrics: RaceMetrics,
    pub optimal: CarConfiguration,
    pub diff: SetupDiff,
    pub flags: DiagnosticFlags,
    pub advisories: Vec<Advisory>,
    pub strategy_setup: StrategySetup,
    pub rationale: String,
}

/// Full evaluation of a car on a track.
///
/// `analysis` is present exactly when the verdict is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceReport {
    pub track_name: String,
    pub difficulty_score: u8,
    pub verdict: ValidationVerdict,
    pub analysis: Option<StrategyAnalysis>,
}

impl RaceReport {
    pub fn is_valid(&self) -> bool {
        self.verdict.is_valid()
    }
}

/// Orchestrates the rule checker, recommender and estimator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaceStrategyReporter {
    capacity_tolerance: f64,
}

impl RaceStrategyReporter {
    pub fn new() -> Self {
        Self {
            capacity_tolerance: DEFAULT_CAPACITY_TOLERANCE,
        }
    }

    pub fn with_capacity_tolerance(capacity_tolerance: f64) -> Self {
        Self { capacity_tolerance }
    }

    pub fn capacity_tolerance(&self) -> f64 {
        self.capacity_tolerance
    }

    /// Evaluate a car on a track.
    ///
    /// Inputs that would make the projections meaningless (non-positive lap
    /// length or capacity) are rejected with an error before any rule runs. An
    /// incompatible setup is not an error: the report carries the invalid
    /// verdict and no analysis.
    pub fn evaluate(
        &self,
        car: &CarConfiguration,
        track: &TrackProfile,
    ) -> Result<RaceReport, RaceStrategyError> {
        track.validate()?;
        car.validate()?;

        let verdict = check_compatibility(car, track);
        let mut report = RaceReport {
            track_name: track.name.clone(),
            difficulty_score: track.difficulty_score(),
            verdict,
            analysis: None,
        };
        if !report.verdict.is_valid() {
            info!("Configuration rejected for {}", track.name);
            return Ok(report);
        }

        let metrics = estimate(car, track)?;
        let optimal = recommend(track);
        let diff = SetupDiff::between(car, &optimal, self.capacity_tolerance);
        let flags = DiagnosticFlags::compute(car, track);
        let advisories = advisories(&flags, &diff, &optimal);

        info!(
            "Evaluated setup on {}: {:.2} min/lap, {} advisories",
            track.name,
            metrics.lap_time_minutes,
            advisories.len()
        );

        report.analysis = Some(StrategyAnalysis {
            metrics,
            strategy_setup: StrategySetup::for_track(track, &flags),
            rationale: explain_setup_choice(track).to_string(),
            optimal,
            diff,
            flags,
            advisories,
        });
        Ok(report)
    }
}

impl Default for RaceStrategyReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluate with the default capacity tolerance.
pub fn evaluate(
    car: &CarConfiguration,
    track: &TrackProfile,
) -> Result<RaceReport, RaceStrategyError> {
    RaceStrategyReporter::new().evaluate(car, track)
}
