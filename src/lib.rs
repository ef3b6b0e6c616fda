pub mod config;
pub mod error;
pub mod geometry;
pub mod math;
pub mod model;
pub mod operations;
pub mod query;
pub mod scene;

pub use config::EngineConfig;
pub use error::{PenetraError, PlacementFailure, Result};
pub use operations::{BatchReport, PlaceOpenings, PlacementSetup};
