// Compatibility rule checker
// Hard-block and soft-warning rules over a car and track pair

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::car::CarConfiguration;
use crate::track::TrackProfile;

/// Lap length from which soft tyres under turbo power are flagged.
pub const LONG_LAP_KM: f64 = 8.0;
/// Engine weight above which ground effect loses its benefit.
pub const HEAVY_ENGINE_KG: f64 = 230.0;

/// Why a configuration was rejected outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockReason {
    WetKitWithHardTyres,
}

impl std::fmt::Display for BlockReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockReason::WetKitWithHardTyres => {
                write!(f, "Wet Weather Kit cannot be used with Hard Tyres")
            }
        }
    }
}

/// Advisory raised for a configuration that is allowed but questionable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompatibilityWarning {
    SoftTyresTurboLongLap,
    ExtremeAeroElectric,
    HeavyEngineGroundEffect,
    LowDragOnWetTrack,
}

impl std::fmt::Display for CompatibilityWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompatibilityWarning::SoftTyresTurboLongLap => write!(
                f,
                "Soft Tyres may degrade quickly with a Turbo Engine on a long lap"
            ),
            CompatibilityWarning::ExtremeAeroElectric => write!(
                f,
                "Extreme Aero Kit may significantly reduce electric range and performance"
            ),
            CompatibilityWarning::HeavyEngineGroundEffect => write!(
                f,
                "Heavy engine may limit the effectiveness of the Ground Effect Kit"
            ),
            CompatibilityWarning::LowDragOnWetTrack => {
                write!(f, "Low Drag Aero Kit is not recommended on wet tracks")
            }
        }
    }
}

/// Outcome of the rule checker.
///
/// An invalid verdict carries exactly one block reason and no warnings, since
/// the warning rules never run once a block fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ValidationVerdict {
    Valid { warnings: Vec<CompatibilityWarning> },
    Invalid { reason: BlockReason },
}

impl ValidationVerdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationVerdict::Valid { .. })
    }

    pub fn warnings(&self) -> &[CompatibilityWarning] {
        match self {
            ValidationVerdict::Valid { warnings } => warnings,
            ValidationVerdict::Invalid { .. } => &[],
        }
    }

    pub fn block_reason(&self) -> Option<BlockReason> {
        match self {
            ValidationVerdict::Valid { .. } => None,
            ValidationVerdict::Invalid { reason } => Some(*reason),
        }
    }
}

/// Case-insensitive substring match on a component name.
///
/// Classification is deliberately loose: any kit whose name mentions "wet"
/// counts as the wet-weather kit.
fn name_contains(name: &str, needle: &str) -> bool {
    name.to_lowercase().contains(needle)
}

/// Evaluate the compatibility rules for a car on a track.
///
/// The hard block is checked first and short-circuits. Otherwise every
/// matching warning is collected in rule order.
pub fn check_compatibility(car: &CarConfiguration, track: &TrackProfile) -> ValidationVerdict {
    let tyre = car.tyre.label.as_str();
    let aero = car.aero_kit.name.as_str();
    let engine = car.engine.name.as_str();

    if name_contains(aero, "wet") && name_contains(tyre, "hard") {
        warn!(
            "Rejected configuration: {} with {} tyres",
            car.aero_kit.name, car.tyre.label
        );
        return ValidationVerdict::Invalid {
            reason: BlockReason::WetKitWithHardTyres,
        };
    }

    let mut warnings = Vec::new();

    if name_contains(engine, "turbo")
        && name_contains(tyre, "soft")
        && track.lap_length_km >= LONG_LAP_KM
    {
        warnings.push(CompatibilityWarning::SoftTyresTurboLongLap);
    }

    if name_contains(aero, "extreme") && name_contains(engine, "electric") {
        warnings.push(CompatibilityWarning::ExtremeAeroElectric);
    }

    if name_contains(aero, "ground") && car.engine.weight > HEAVY_ENGINE_KG {
        warnings.push(CompatibilityWarning::HeavyEngineGroundEffect);
    }

    if name_contains(aero, "low") && track.is_wet {
        warnings.push(CompatibilityWarning::LowDragOnWetTrack);
    }

    for warning in &warnings {
        debug!("Compatibility warning on {}: {}", track.name, warning);
    }

    ValidationVerdict::Valid { warnings }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AeroKitKind, EngineKind, TyreKind};
    use crate::track::tests::track;
    use proptest::prelude::*;

    fn dry_track() -> TrackProfile {
        track(4.0, 150.0, 25.0, false, 8, 2, true, 50)
    }

    fn wet_track() -> TrackProfile {
        track(3.5, 120.0, 18.0, true, 12, 4, false, 80)
    }

    fn car(engine: EngineKind, tyre: TyreKind, aero: AeroKitKind) -> CarConfiguration {
        CarConfiguration::from_kinds(engine, tyre, aero, 70.0)
    }

    #[test]
    fn test_valid_configuration_has_no_warnings() {
        let verdict = check_compatibility(
            &car(EngineKind::Standard, TyreKind::Medium, AeroKitKind::Standard),
            &dry_track(),
        );
        assert_eq!(verdict, ValidationVerdict::Valid { warnings: vec![] });
    }

    #[test]
    fn test_wet_kit_with_hard_tyres_is_blocked() {
        let verdict = check_compatibility(
            &car(EngineKind::Standard, TyreKind::Hard, AeroKitKind::WetWeather),
            &dry_track(),
        );
        assert!(!verdict.is_valid());
        assert_eq!(verdict.block_reason(), Some(BlockReason::WetKitWithHardTyres));
        assert!(verdict.warnings().is_empty());
    }

    #[test]
    fn test_block_skips_warning_rules() {
        // V8 on a ground effect kit would warn if the warning rules ran
        let mut c = car(EngineKind::V8, TyreKind::Hard, AeroKitKind::GroundEffect);
        c.aero_kit.name = "Wet Ground Effect Kit".to_string();
        let verdict = check_compatibility(&c, &dry_track());
        assert_eq!(
            verdict,
            ValidationVerdict::Invalid {
                reason: BlockReason::WetKitWithHardTyres
            }
        );
    }

    #[test]
    fn test_wet_kit_tyre_equivalence() {
        let cases = [
            (TyreKind::Soft, true),
            (TyreKind::Medium, true),
            (TyreKind::Hard, false),
        ];
        for (tyre, expected) in cases {
            let verdict = check_compatibility(
                &car(EngineKind::Standard, tyre, AeroKitKind::WetWeather),
                &dry_track(),
            );
            assert_eq!(verdict.is_valid(), expected, "{} tyres", tyre);
        }
    }

    #[test]
    fn test_substring_matching_has_false_positives() {
        let mut c = car(EngineKind::Standard, TyreKind::Hard, AeroKitKind::Standard);
        c.aero_kit.name = "Wet-Resistant Standard".to_string();
        assert!(!check_compatibility(&c, &dry_track()).is_valid());

        let mut c = car(EngineKind::Standard, TyreKind::Medium, AeroKitKind::Standard);
        c.tyre.label = "HARD-ish Medium".to_string();
        c.aero_kit.name = "WET WEATHER KIT".to_string();
        assert!(!check_compatibility(&c, &dry_track()).is_valid());
    }

    #[test]
    fn test_turbo_soft_long_lap_boundary() {
        let cases = [(7.9, false), (8.0, true), (8.1, true)];
        for (lap, expect_warning) in cases {
            let t = track(lap, 150.0, 25.0, false, 8, 2, true, 50);
            let verdict = check_compatibility(
                &car(EngineKind::Turbo, TyreKind::Soft, AeroKitKind::Standard),
                &t,
            );
            assert!(verdict.is_valid(), "lap {} should stay valid", lap);
            assert_eq!(
                verdict
                    .warnings()
                    .contains(&CompatibilityWarning::SoftTyresTurboLongLap),
                expect_warning,
                "lap {}",
                lap
            );
        }
    }

    #[test]
    fn test_extreme_aero_with_electric_warns() {
        let verdict = check_compatibility(
            &car(EngineKind::Electric, TyreKind::Medium, AeroKitKind::Extreme),
            &dry_track(),
        );
        assert!(verdict.is_valid());
        assert_eq!(
            verdict.warnings(),
            &[CompatibilityWarning::ExtremeAeroElectric]
        );
    }

    #[test]
    fn test_ground_effect_engine_weight_boundary() {
        let cases = [(250.0, true), (230.0, false), (220.0, false)];
        for (weight, expect_warning) in cases {
            let mut c = car(EngineKind::Turbo, TyreKind::Medium, AeroKitKind::GroundEffect);
            c.engine.weight = weight;
            let verdict = check_compatibility(&c, &dry_track());
            assert!(verdict.is_valid());
            assert_eq!(
                verdict
                    .warnings()
                    .contains(&CompatibilityWarning::HeavyEngineGroundEffect),
                expect_warning,
                "weight {}",
                weight
            );
        }

        // The V8 is the only catalog engine above the threshold
        let verdict = check_compatibility(
            &car(EngineKind::V8, TyreKind::Medium, AeroKitKind::GroundEffect),
            &dry_track(),
        );
        assert_eq!(
            verdict.warnings(),
            &[CompatibilityWarning::HeavyEngineGroundEffect]
        );
    }

    #[test]
    fn test_low_drag_on_wet_track_warns() {
        let c = car(EngineKind::Standard, TyreKind::Medium, AeroKitKind::LowDrag);
        assert_eq!(
            check_compatibility(&c, &wet_track()).warnings(),
            &[CompatibilityWarning::LowDragOnWetTrack]
        );
        assert!(check_compatibility(&c, &dry_track()).warnings().is_empty());
    }

    #[test]
    fn test_warnings_accumulate_in_rule_order() {
        let mut c = car(EngineKind::Turbo, TyreKind::Soft, AeroKitKind::LowDrag);
        c.aero_kit.name = "Extreme Low Ground Kit".to_string();
        c.engine.name = "Electric Turbo".to_string();
        c.engine.weight = 300.0;
        let t = track(9.0, 150.0, 25.0, true, 8, 2, true, 50);

        let verdict = check_compatibility(&c, &t);
        assert_eq!(
            verdict.warnings(),
            &[
                CompatibilityWarning::SoftTyresTurboLongLap,
                CompatibilityWarning::ExtremeAeroElectric,
                CompatibilityWarning::HeavyEngineGroundEffect,
                CompatibilityWarning::LowDragOnWetTrack,
            ]
        );
    }

    fn any_engine() -> impl Strategy<Value = EngineKind> {
        prop::sample::select(EngineKind::ALL.to_vec())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_wet_kit_with_hard_tyres_always_invalid(
            engine in any_engine(),
            lap in 0.5f64..20.0,
            temp in -10.0f64..50.0,
            is_wet in any::<bool>(),
            curves in 0i32..30,
        ) {
            let t = track(lap, 200.0, temp, is_wet, curves, 2, true, 50);
            let verdict = check_compatibility(
                &car(engine, TyreKind::Hard, AeroKitKind::WetWeather),
                &t,
            );
            prop_assert!(!verdict.is_valid());
            prop_assert!(verdict.warnings().is_empty());
        }
    }
}
