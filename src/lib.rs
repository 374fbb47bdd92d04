// Library interface for race-strategy
// This allows integration tests and benches to access internal modules

pub mod car;
pub mod catalog;
pub mod compatibility;
pub mod config;
pub mod errors;
pub mod estimator;
pub mod input;
pub mod recommender;
pub mod report;
pub mod track;

// Re-export commonly used types
pub use car::CarConfiguration;
pub use catalog::{AeroKitKind, EngineKind, TyreKind};
pub use compatibility::{ValidationVerdict, check_compatibility};
pub use errors::RaceStrategyError;
pub use estimator::{RaceMetrics, ResourceProjection, estimate};
pub use recommender::recommend;
pub use report::{RaceReport, RaceStrategyReporter, evaluate};
pub use track::TrackProfile;
