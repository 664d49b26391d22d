// Library interface for the readyrs readiness and scheduling engine
// This allows integration tests to access the core functionality

pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod models;
pub mod readiness;
pub mod recommendation;
pub mod schedule;
pub mod strength;

// Re-export commonly used types for convenience
pub use models::*;
pub use engine::{EvaluationReport, EvaluationRequest, ReadinessEngine};
pub use readiness::{ReadinessConfig, ReadinessScorer, ReadinessWeights};
pub use recommendation::{RecommendationGenerator, RuleThresholds};
pub use schedule::{AdapterConfig, ScheduleAdapter};
pub use strength::{OneRmEstimate, StrengthEstimator, REP_MAX_PERCENTAGES};
pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use logging::{LogConfig, LogFormat, LogLevel};
