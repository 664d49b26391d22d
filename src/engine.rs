//! Evaluation pipeline facade
//!
//! Wires the scorer, rule engine, and schedule adapter into one call over
//! a single immutable input snapshot, so every stage of an evaluation sees
//! the same load fact and sample set. Inputs arrive bundled in an
//! `EvaluationRequest`; the caller assembles it once per cycle instead of
//! re-reading live data between stages.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::EngineConfig;
use crate::error::Result;
use crate::models::{
    ProgressMarkers, ReadinessScore, Recommendation, RecoverySample, TrainingLoadFact,
    WeeklySchedule,
};
use crate::readiness::ReadinessScorer;
use crate::recommendation::RecommendationGenerator;
use crate::schedule::ScheduleAdapter;

/// Everything one evaluation cycle needs, captured as one snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    /// Day the evaluation is for
    pub as_of: NaiveDate,

    /// Recovery surveys covering at least the scoring window
    pub samples: Vec<RecoverySample>,

    /// Load fact for the current week
    pub load: TrainingLoadFact,

    /// Longitudinal markers from stored evaluation history
    pub progress: ProgressMarkers,

    /// Unmodified template week to adapt
    pub template: WeeklySchedule,
}

/// Output of one evaluation cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Readiness for the evaluation day
    pub score: ReadinessScore,

    /// Recommendations the rules produced, priority order
    pub recommendations: Vec<Recommendation>,

    /// Template week with the recommendations applied
    pub schedule: WeeklySchedule,
}

/// One-call readiness pipeline: score, recommend, adapt
pub struct ReadinessEngine {
    scorer: ReadinessScorer,
    generator: RecommendationGenerator,
    adapter: ScheduleAdapter,
}

impl Default for ReadinessEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadinessEngine {
    /// Engine with the stock thresholds everywhere
    pub fn new() -> Self {
        ReadinessEngine {
            scorer: ReadinessScorer::new(),
            generator: RecommendationGenerator::new(),
            adapter: ScheduleAdapter::new(),
        }
    }

    /// Engine from a consolidated config, rejecting invalid thresholds
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(ReadinessEngine {
            scorer: ReadinessScorer::with_config(config.readiness),
            generator: RecommendationGenerator::with_thresholds(config.rules),
            adapter: ScheduleAdapter::with_config(config.adapter),
        })
    }

    pub fn scorer(&self) -> &ReadinessScorer {
        &self.scorer
    }

    pub fn generator(&self) -> &RecommendationGenerator {
        &self.generator
    }

    pub fn adapter(&self) -> &ScheduleAdapter {
        &self.adapter
    }

    /// Run one full evaluation: inputs -> score -> recommendations ->
    /// adapted schedule
    ///
    /// Intensity increases are already confidence-gated by the generator
    /// when the score comes back low-confidence, so a sparse survey week
    /// cannot trigger a load bump through this path.
    pub fn evaluate(&self, request: &EvaluationRequest) -> Result<EvaluationReport> {
        let score = self
            .scorer
            .score(request.as_of, &request.samples, &request.load)
            .map_err(|err| {
                warn!(error = %err, detail = %err.user_message(), "evaluation rejected");
                err
            })?;
        let recommendations = self
            .generator
            .generate(&score, &request.load, &request.progress);
        let schedule = self.adapter.adapt(&request.template, &recommendations);

        info!(
            date = %score.date,
            readiness = score.value,
            zone = %score.zone,
            recommendations = recommendations.len(),
            "evaluation complete"
        );

        Ok(EvaluationReport {
            score,
            recommendations,
            schedule,
        })
    }
}
