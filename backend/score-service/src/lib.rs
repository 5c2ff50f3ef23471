pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod services;
pub mod telemetry;

pub use config::Config;
pub use error::{AppError, Result};
pub use models::{ContentType, ScoreRequest, ScoreResponse, VoteEvent, VoteType};
pub use services::{compute_score, PointTable};
