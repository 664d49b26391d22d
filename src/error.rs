//! Unified error hierarchy for the readiness engine
//!
//! Provides structured error types with field-level detail for input
//! validation, numeric domain failures, and configuration problems, plus
//! integration with the tracing system.

use chrono::Weekday;
use thiserror::Error;

/// Top-level error type for all engine operations
#[derive(Debug, Error)]
pub enum EngineError {
    /// Input validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Numeric domain errors from strength calculations
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// No usable data in the evaluation window
    #[error("Insufficient data for {calculation}: {reason}")]
    InsufficientData { calculation: String, reason: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Input validation errors, identifying the offending field
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Numeric field outside its permitted range
    #[error("{field} out of range: {value} (expected {min} to {max})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// NaN or infinite value where a real number is required
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    /// Zero or negative value where a positive one is required
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    /// Negative value where zero or more is required
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    /// Zero repetitions supplied to a rep-based estimate
    #[error("reps must be at least 1")]
    ZeroReps,

    /// Rep count outside the fixed percentage table
    #[error("rep count {reps} outside supported range 1-10")]
    UnsupportedReps { reps: u8 },

    /// Weekly schedule without exactly seven sessions
    #[error("weekly schedule must contain exactly 7 sessions, got {count}")]
    MalformedWeek { count: usize },

    /// Weekly schedule days not running Monday through Sunday
    #[error("schedule day out of order at position {position}: expected {expected}, got {found}")]
    DayOutOfOrder {
        position: usize,
        expected: Weekday,
        found: Weekday,
    },
}

/// Numeric domain errors that would otherwise surface as NaN or infinity
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Wilks polynomial evaluated to a non-positive denominator
    #[error("Wilks polynomial non-positive ({denominator:.4}) for bodyweight {bodyweight_kg} kg")]
    WilksDenominator {
        bodyweight_kg: f64,
        denominator: f64,
    },
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            EngineError::Validation(_) => ErrorSeverity::Warning,
            EngineError::InsufficientData { .. } => ErrorSeverity::Warning,
            EngineError::Domain(_) => ErrorSeverity::Error,
            EngineError::Configuration(_) => ErrorSeverity::Error,
        }
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            EngineError::Validation(ValidationError::OutOfRange {
                field, min, max, ..
            }) => {
                format!("{} must be between {} and {}.", field, min, max)
            }
            EngineError::InsufficientData { calculation, .. } => {
                format!(
                    "Not enough recorded data to compute {}. Log a recovery survey first.",
                    calculation
                )
            }
            EngineError::Domain(DomainError::WilksDenominator { bodyweight_kg, .. }) => {
                format!(
                    "Bodyweight {} kg is outside the range the Wilks formula supports.",
                    bodyweight_kg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Critical system error requiring immediate attention
    Critical,
    /// Error that prevents operation but system can continue
    Error,
    /// Warning that doesn't prevent operation
    Warning,
    /// Informational message
    Info,
}

impl ErrorSeverity {
    /// Convert to tracing level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            ErrorSeverity::Critical => tracing::Level::ERROR,
            ErrorSeverity::Error => tracing::Level::ERROR,
            ErrorSeverity::Warning => tracing::Level::WARN,
            ErrorSeverity::Info => tracing::Level::INFO,
        }
    }
}
