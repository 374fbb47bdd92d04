use std::path::PathBuf;

use clap::{Parser, Subcommand};
use itertools::Itertools;
use log::{error, warn};
use race_strategy::{
    CarConfiguration, RaceReport, RaceStrategyError, ResourceProjection, TrackProfile,
    catalog::{
        AeroKitKind, BrakeCompound, EngineKind, GearboxRatio, Suspension, TractionControl,
        TyreKind,
    },
    config::AppConfig,
    input::{load_car, load_track},
    recommend,
    recommender::explain_setup_choice,
    report::StrategyAnalysis,
    track::{find_preset, preset_tracks},
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args, Debug)]
struct TrackSelection {
    /// Name of a preset track
    #[arg(short, long)]
    track: Option<String>,

    /// JSON file describing the track
    #[arg(long, conflicts_with = "track")]
    track_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the preset tracks
    Tracks,
    /// Show the optimal setup for a track
    Recommend {
        #[command(flatten)]
        track: TrackSelection,

        #[arg(long)]
        json: bool,
    },
    /// Check a car on a track and project its race
    Evaluate {
        #[command(flatten)]
        track: TrackSelection,

        /// JSON file describing the car; replaces the component flags
        #[arg(long)]
        car_file: Option<PathBuf>,

        #[arg(short, long, default_value = "standard")]
        engine: EngineKind,

        #[arg(long, default_value = "medium")]
        tyre: TyreKind,

        #[arg(short, long, default_value = "standard")]
        aero: AeroKitKind,

        /// Fuel tank litres, or battery kWh for the electric engine
        #[arg(short, long, default_value_t = 70.0)]
        capacity: f64,

        #[arg(long)]
        suspension: Option<Suspension>,

        #[arg(long)]
        brakes: Option<BrakeCompound>,

        #[arg(long)]
        gearbox: Option<GearboxRatio>,

        #[arg(long)]
        traction_control: Option<TractionControl>,

        #[arg(long)]
        json: bool,
    },
}

fn resolve_track(
    selection: &TrackSelection,
    config: &AppConfig,
) -> Result<TrackProfile, RaceStrategyError> {
    if let Some(path) = &selection.track_file {
        return load_track(path);
    }
    match selection.track.as_ref().or(config.default_track.as_ref()) {
        Some(name) => find_preset(name),
        None => Err(RaceStrategyError::InvalidInput {
            field: "track".to_string(),
            reason: "pass --track or --track-file, or set default_track in the config".to_string(),
        }),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), RaceStrategyError> {
    let out = serde_json::to_string_pretty(value)
        .map_err(|e| RaceStrategyError::ReportSerializeError { source: e })?;
    println!("{}", out);
    Ok(())
}

fn print_setup(car: &CarConfiguration) {
    println!("- Engine: {}", car.engine.name);
    println!("- Tyres: {}", car.tyre.label);
    println!("- Aero Kit: {}", car.aero_kit.name);
    println!("- Fuel/Battery Capacity: {:.1}", car.capacity);
    if let Some(suspension) = car.suspension {
        println!("- Suspension: {}", suspension);
    }
    if let Some(brakes) = car.brakes {
        println!("- Brakes: {}", brakes);
    }
    if let Some(gearbox) = car.gearbox {
        println!("- Gearbox: {}", gearbox);
    }
    if let Some(traction_control) = car.traction_control {
        println!("- Traction Control: {}", traction_control);
    }
}

fn tracks() {
    for (i, track) in preset_tracks().iter().enumerate() {
        println!(
            "[{}] {} (Difficulty: {}/10)",
            i + 1,
            track.name,
            track.difficulty_score()
        );
    }
}

fn recommend_setup(track: &TrackProfile, json: bool) -> Result<(), RaceStrategyError> {
    let optimal = recommend(track);
    if json {
        return print_json(&optimal);
    }

    println!("Recommended Setup for {}:", track.name);
    print_setup(&optimal);
    println!("Why this setup? {}", explain_setup_choice(track));
    Ok(())
}

fn print_analysis(car: &CarConfiguration, analysis: &StrategyAnalysis) {
    let metrics = &analysis.metrics;
    println!("\n=== Race Strategy Simulation ===");
    println!("\nSelected Car Setup:");
    print_setup(car);

    println!("\nEstimated Lap Time: {:.2} minutes", metrics.lap_time_minutes);
    println!(
        "Estimated Total Race Time: {:.2} minutes ({} laps)",
        metrics.total_race_time_minutes, metrics.total_laps
    );
    println!("Tyre Changes Estimated: {}", metrics.tyre_changes_estimated);
    match metrics.resources {
        ResourceProjection::Energy {
            consumption_kwh_per_100km,
            total_energy_needed_kwh,
            charging_stops_required,
        } => {
            println!("Energy Consumption: {:.2} kWh/100km", consumption_kwh_per_100km);
            println!("Estimated Energy Needed: {:.2} kWh", total_energy_needed_kwh);
            println!("Charging Stops Required: {}", charging_stops_required);
        }
        ResourceProjection::Fuel {
            efficiency_km_per_liter,
            fuel_needed_liters,
            fuel_stops_required,
        } => {
            println!("Fuel Efficiency: {:.2} km/l", efficiency_km_per_liter);
            println!("Estimated Fuel Needed: {:.2} L", fuel_needed_liters);
            println!("Fuel Stops Required: {}", fuel_stops_required);
        }
    }

    println!("\nFinal Strategy Recommendation:");
    for advisory in &analysis.advisories {
        println!("- {}", advisory);
    }

    let strategy = &analysis.strategy_setup;
    println!("\nRecommended Setup for This Track:");
    println!("- Engine: {}", strategy.engine.spec().name);
    println!("- Tyres: {}", strategy.tyre.spec().label);
    println!("- Aero Kit: {}", strategy.aero_kit.spec().name);
    println!("Why this setup? {}", analysis.rationale);
}

fn print_report(car: &CarConfiguration, report: &RaceReport) {
    println!(
        "Track: {} (Difficulty: {}/10)",
        report.track_name, report.difficulty_score
    );

    if let Some(reason) = report.verdict.block_reason() {
        println!("Invalid Configuration: {}", reason);
        return;
    }
    let warnings = report.verdict.warnings();
    if !warnings.is_empty() {
        println!("Warnings: {}", warnings.iter().join("; "));
    }
    if let Some(analysis) = &report.analysis {
        print_analysis(car, analysis);
    }
}

#[allow(clippy::too_many_arguments)]
fn build_car(
    car_file: Option<&PathBuf>,
    engine: EngineKind,
    tyre: TyreKind,
    aero: AeroKitKind,
    capacity: f64,
    suspension: Option<Suspension>,
    brakes: Option<BrakeCompound>,
    gearbox: Option<GearboxRatio>,
    traction_control: Option<TractionControl>,
) -> Result<CarConfiguration, RaceStrategyError> {
    if let Some(path) = car_file {
        return load_car(path);
    }

    let mut car = CarConfiguration::from_kinds(engine, tyre, aero, capacity);
    car.suspension = suspension;
    car.brakes = brakes;
    car.gearbox = gearbox;
    car.traction_control = traction_control;
    Ok(car)
}

fn run(cli: Args, config: AppConfig) -> Result<(), RaceStrategyError> {
    match cli.command {
        Commands::Tracks => {
            tracks();
            Ok(())
        }
        Commands::Recommend { track, json } => {
            let track = resolve_track(&track, &config)?;
            recommend_setup(&track, json || config.json_output)
        }
        Commands::Evaluate {
            track,
            car_file,
            engine,
            tyre,
            aero,
            capacity,
            suspension,
            brakes,
            gearbox,
            traction_control,
            json,
        } => {
            let track = resolve_track(&track, &config)?;
            let car = build_car(
                car_file.as_ref(),
                engine,
                tyre,
                aero,
                capacity,
                suspension,
                brakes,
                gearbox,
                traction_control,
            )?;
            let report = config.reporter().evaluate(&car, &track)?;
            if json || config.json_output {
                print_json(&report)
            } else {
                print_report(&car, &report);
                Ok(())
            }
        }
    }
}

fn main() {
    #[cfg(debug_assertions)]
    colog::init();

    let cli = Args::parse();
    let config = AppConfig::from_local_file()
        .unwrap_or_else(|e| {
            warn!("Ignoring unreadable config file: {}", e);
            None
        })
        .unwrap_or_default();

    if let Err(e) = run(cli, config) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
