//! Core library for the RENNOR humidity forecast client.
//!
//! This crate defines:
//! - Horizon input validation
//! - The HTTP client for the remote prediction service
//! - Tolerant normalization of service responses
//! - The request lifecycle state machine
//! - Display-ready projections (chart series, summary statistics)
//!
//! It is used by `rennor-cli`, but can also be reused by other binaries or
//! services.

pub mod backend;
pub mod config;
pub mod error;
pub mod model;
pub mod normalize;
pub mod present;
pub mod session;
pub mod validate;

pub use backend::{HttpBackend, PredictionBackend, RawResponse};
pub use config::Config;
pub use error::{ClientError, ValidationError};
pub use model::{
    ChartPoint, ComparisonPoint, ComparisonSeries, ForecastRequest, ForecastResult, Metrics,
    ServiceHealth, SummaryStats,
};
pub use session::{PredictionSession, RequestState};
