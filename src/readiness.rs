//! Readiness scoring module
//!
//! Converts daily subjective recovery surveys plus an objective weekly
//! training-load fact into a single 0-100 readiness score and a risk zone.
//!
//! The composite follows the wellness-questionnaire approach used in
//! athlete monitoring: each metric is normalized to [0,1], inverted where
//! higher raw values mean worse recovery (soreness, stress), and combined
//! as a weighted sum. An objective load penalty then catches weeks where
//! the athlete reports feeling fine but the training log says otherwise
//! (too many sessions, or volume well above the trailing 4-week average).
//!
//! Scores are a projection, recomputed on demand from the latest inputs;
//! nothing in this module holds state between calls.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, Result};
use crate::models::{ReadinessScore, ReadinessZone, RecoverySample, TrainingLoadFact};

/// Subjective metrics are surveyed on a 0-10 scale
const SUBJECTIVE_SCALE: f64 = 10.0;

/// Relative weight of each survey metric in the composite
///
/// Soreness and stress are applied to the inverted metric, so a larger
/// weight still means "matters more".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadinessWeights {
    pub sleep: f64,
    pub energy: f64,
    pub soreness: f64,
    pub stress: f64,
}

impl Default for ReadinessWeights {
    fn default() -> Self {
        ReadinessWeights {
            sleep: 0.30,
            energy: 0.25,
            soreness: 0.25,
            stress: 0.20,
        }
    }
}

/// Tunable thresholds for readiness scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadinessConfig {
    /// Metric weights; must sum to 1.0
    pub weights: ReadinessWeights,

    /// Scores at or above this are in the optimal zone
    pub optimal_cutoff: f64,

    /// Scores at or above this (and below optimal) are in the caution zone
    pub caution_cutoff: f64,

    /// Weekly session count above which the load penalty applies
    pub session_ceiling: u16,

    /// Volume above `factor × trailing 4-week average` triggers the penalty
    pub volume_overage_factor: Decimal,

    /// Points subtracted when the load penalty applies
    pub load_penalty: f64,

    /// Length of the sample window ending at the evaluation date
    pub window_days: i64,

    /// Distinct sampled days below this mark the score low-confidence
    pub min_confident_samples: usize,
}

impl Default for ReadinessConfig {
    fn default() -> Self {
        ReadinessConfig {
            weights: ReadinessWeights::default(),
            optimal_cutoff: 80.0,
            caution_cutoff: 60.0,
            session_ceiling: 6,
            volume_overage_factor: dec!(1.2),
            load_penalty: 10.0,
            window_days: 7,
            min_confident_samples: 3,
        }
    }
}

impl ReadinessConfig {
    /// Map a score value onto its risk zone; band lower bounds are inclusive
    pub fn zone_for(&self, value: f64) -> ReadinessZone {
        if value >= self.optimal_cutoff {
            ReadinessZone::Optimal
        } else if value >= self.caution_cutoff {
            ReadinessZone::Caution
        } else {
            ReadinessZone::HighRisk
        }
    }

    /// Reject configurations the scorer cannot work with
    pub fn validate(&self) -> Result<()> {
        let named_weights = [
            ("sleep", self.weights.sleep),
            ("energy", self.weights.energy),
            ("soreness", self.weights.soreness),
            ("stress", self.weights.stress),
        ];
        for (name, weight) in named_weights {
            if !(0.0..=1.0).contains(&weight) {
                return Err(EngineError::Configuration(format!(
                    "{} weight must be between 0 and 1, got {}",
                    name, weight
                )));
            }
        }
        let sum: f64 = named_weights.iter().map(|(_, w)| w).sum();
        if (sum - 1.0).abs() > 1e-6 {
            return Err(EngineError::Configuration(format!(
                "readiness weights must sum to 1.0, got {}",
                sum
            )));
        }
        if !(0.0..=100.0).contains(&self.caution_cutoff)
            || !(0.0..=100.0).contains(&self.optimal_cutoff)
        {
            return Err(EngineError::Configuration(
                "zone cutoffs must lie within 0-100".to_string(),
            ));
        }
        if self.caution_cutoff >= self.optimal_cutoff {
            return Err(EngineError::Configuration(format!(
                "caution cutoff {} must be below optimal cutoff {}",
                self.caution_cutoff, self.optimal_cutoff
            )));
        }
        if self.load_penalty < 0.0 {
            return Err(EngineError::Configuration(format!(
                "load penalty must not be negative, got {}",
                self.load_penalty
            )));
        }
        if self.volume_overage_factor < dec!(1.0) {
            return Err(EngineError::Configuration(format!(
                "volume overage factor must be at least 1, got {}",
                self.volume_overage_factor
            )));
        }
        if self.window_days < 1 {
            return Err(EngineError::Configuration(format!(
                "sample window must cover at least 1 day, got {}",
                self.window_days
            )));
        }
        if self.min_confident_samples == 0 {
            return Err(EngineError::Configuration(
                "minimum confident samples must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Computes readiness scores from recovery samples and load facts
pub struct ReadinessScorer {
    config: ReadinessConfig,
}

impl Default for ReadinessScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadinessScorer {
    /// Scorer with the stock thresholds
    pub fn new() -> Self {
        ReadinessScorer {
            config: ReadinessConfig::default(),
        }
    }

    /// Scorer with custom thresholds
    pub fn with_config(config: ReadinessConfig) -> Self {
        ReadinessScorer { config }
    }

    pub fn config(&self) -> &ReadinessConfig {
        &self.config
    }

    /// Score readiness for `as_of` from the samples in its trailing window
    ///
    /// Every sample presented is range-checked before anything else; the
    /// window then keeps samples dated within `window_days` ending at
    /// `as_of` (inclusive), last sample winning when a date repeats.
    ///
    /// # Returns
    /// The composite score, its zone, and a low-confidence flag when fewer
    /// distinct days were sampled than the configured minimum. An empty
    /// window is an insufficient-data error rather than a fabricated score.
    pub fn score(
        &self,
        as_of: NaiveDate,
        samples: &[RecoverySample],
        load: &TrainingLoadFact,
    ) -> Result<ReadinessScore> {
        for sample in samples {
            sample.validate()?;
        }
        load.validate()?;

        let window_start = as_of - Duration::days(self.config.window_days - 1);
        let mut by_date: BTreeMap<NaiveDate, &RecoverySample> = BTreeMap::new();
        for sample in samples {
            if sample.date >= window_start && sample.date <= as_of {
                by_date.insert(sample.date, sample);
            }
        }

        let samples_used = by_date.len();
        if samples_used == 0 {
            return Err(EngineError::InsufficientData {
                calculation: "readiness score".to_string(),
                reason: format!(
                    "no recovery samples between {} and {}",
                    window_start, as_of
                ),
            });
        }

        let count = samples_used as f64;
        let mut sleep_sum = 0.0;
        let mut soreness_sum = 0.0;
        let mut energy_sum = 0.0;
        let mut stress_sum = 0.0;
        for sample in by_date.values() {
            sleep_sum += sample.sleep_quality;
            soreness_sum += sample.soreness;
            energy_sum += sample.energy;
            stress_sum += sample.stress;
        }

        let weights = &self.config.weights;
        let composite = (sleep_sum / count / SUBJECTIVE_SCALE) * weights.sleep
            + (energy_sum / count / SUBJECTIVE_SCALE) * weights.energy
            + (1.0 - soreness_sum / count / SUBJECTIVE_SCALE) * weights.soreness
            + (1.0 - stress_sum / count / SUBJECTIVE_SCALE) * weights.stress;
        let mut value = composite * 100.0;

        let penalized = self.load_penalty_applies(load);
        if penalized {
            value -= self.config.load_penalty;
        }
        let value = value.clamp(0.0, 100.0);

        let zone = self.config.zone_for(value);
        let low_confidence = samples_used < self.config.min_confident_samples;

        debug!(
            date = %as_of,
            value,
            zone = %zone,
            samples = samples_used,
            penalized,
            low_confidence,
            "computed readiness score"
        );

        Ok(ReadinessScore {
            date: as_of,
            value,
            zone,
            low_confidence,
            samples_used,
        })
    }

    fn load_penalty_applies(&self, load: &TrainingLoadFact) -> bool {
        if load.session_count > self.config.session_ceiling {
            return true;
        }
        match load.four_week_avg_volume_kg {
            Some(avg) => load.total_volume_kg > avg * self.config.volume_overage_factor,
            None => false,
        }
    }
}
