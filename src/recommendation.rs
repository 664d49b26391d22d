//! Recommendation rule engine
//!
//! Applies a fixed-priority rule set over the readiness score, the weekly
//! load fact, and longitudinal progress markers to produce zero or more
//! typed recommendations for the upcoming week.
//!
//! Rules 1-3 are safety-oriented (deload, rest, intensity reduction) and
//! take precedence; when a deload or rest fires, the progression rules
//! (intensity increase, focus switch) are suppressed for the cycle. Output
//! is deterministic for identical inputs and de-duplicated by kind, so a
//! caller can re-run an evaluation and get the same week plan.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, Result};
use crate::models::{
    ProgressMarkers, ReadinessScore, ReadinessZone, Recommendation, RecommendationKind,
    TrainingLoadFact,
};

/// Tunable thresholds for the recommendation rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleThresholds {
    /// Days since the last deload after which one is considered due
    pub deload_cadence_days: u16,

    /// Consecutive optimal evaluations (current one included) required
    /// before an intensity increase
    pub optimal_streak_for_increase: usize,

    /// Days without a personal record after which progress counts as stale
    pub pr_stale_days: u32,

    /// Per-lift improvement below this percentage counts toward a plateau
    pub plateau_threshold_percent: f64,

    /// Suppress intensity increases when the score is low-confidence
    pub require_full_confidence_for_increase: bool,
}

impl Default for RuleThresholds {
    fn default() -> Self {
        RuleThresholds {
            deload_cadence_days: 28,
            optimal_streak_for_increase: 3,
            pr_stale_days: 14,
            plateau_threshold_percent: 1.0,
            require_full_confidence_for_increase: true,
        }
    }
}

impl RuleThresholds {
    /// Reject thresholds the rule set cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.optimal_streak_for_increase == 0 {
            return Err(EngineError::Configuration(
                "optimal streak must be at least 1 evaluation".to_string(),
            ));
        }
        if !self.plateau_threshold_percent.is_finite() || self.plateau_threshold_percent < 0.0 {
            return Err(EngineError::Configuration(format!(
                "plateau threshold must be a non-negative percentage, got {}",
                self.plateau_threshold_percent
            )));
        }
        Ok(())
    }
}

/// Evaluates the fixed-priority rule set
pub struct RecommendationGenerator {
    thresholds: RuleThresholds,
}

impl Default for RecommendationGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationGenerator {
    /// Generator with the stock thresholds
    pub fn new() -> Self {
        RecommendationGenerator {
            thresholds: RuleThresholds::default(),
        }
    }

    /// Generator with custom thresholds
    pub fn with_thresholds(thresholds: RuleThresholds) -> Self {
        RecommendationGenerator { thresholds }
    }

    pub fn thresholds(&self) -> &RuleThresholds {
        &self.thresholds
    }

    /// Run the rules for one evaluation cycle
    ///
    /// Rule order: deload, rest, intensity-down, intensity-up,
    /// switch-focus. A deload or rest suppresses the progression rules.
    /// The returned list is de-duplicated by kind and deterministic for
    /// identical inputs.
    pub fn generate(
        &self,
        score: &ReadinessScore,
        load: &TrainingLoadFact,
        progress: &ProgressMarkers,
    ) -> Vec<Recommendation> {
        let mut recommendations = Vec::new();

        let compromised = matches!(
            score.zone,
            ReadinessZone::Caution | ReadinessZone::HighRisk
        );
        let deload_due = load.days_since_last_deload > self.thresholds.deload_cadence_days;

        // Rule 1: overdue deload while recovery is compromised
        let deload_fired = deload_due && compromised;
        if deload_fired {
            recommendations.push(Recommendation {
                kind: RecommendationKind::Deload,
                rationale: format!(
                    "{} days since the last deload with readiness {:.0} in the {} zone",
                    load.days_since_last_deload, score.value, score.zone
                ),
                action: "Reduce volume 30-50% this week; keep the movements, cut the sets."
                    .to_string(),
                applies_from: score.date,
            });
        }

        // Rule 2: high-risk recovery not already covered by a deload
        let rest_fired = score.zone == ReadinessZone::HighRisk && !deload_fired;
        if rest_fired {
            recommendations.push(Recommendation {
                kind: RecommendationKind::Rest,
                rationale: format!("readiness {:.0} is in the high-risk zone", score.value),
                action: "Insert an additional rest day this week.".to_string(),
                applies_from: score.date,
            });
        }

        // Rule 3: caution zone inside the normal deload cadence
        if score.zone == ReadinessZone::Caution
            && load.days_since_last_deload <= self.thresholds.deload_cadence_days
        {
            recommendations.push(Recommendation {
                kind: RecommendationKind::IntensityDown,
                rationale: format!(
                    "readiness {:.0} is in the caution zone {} days after the last deload",
                    score.value, load.days_since_last_deload
                ),
                action: "Reduce working-set intensity by about 10% this week.".to_string(),
                applies_from: score.date,
            });
        }

        // Progression rules are suppressed for the cycle when a safety
        // rule fired
        let safety_fired = deload_fired || rest_fired;
        if !safety_fired {
            // Rule 4: sustained optimal readiness with stale PRs
            if score.zone == ReadinessZone::Optimal {
                let streak = 1 + progress
                    .recent_zones
                    .iter()
                    .rev()
                    .take_while(|zone| **zone == ReadinessZone::Optimal)
                    .count();
                let pr_stale = match progress.days_since_last_pr {
                    Some(days) => days > self.thresholds.pr_stale_days,
                    None => true,
                };
                let confident = !score.low_confidence
                    || !self.thresholds.require_full_confidence_for_increase;

                if streak >= self.thresholds.optimal_streak_for_increase && pr_stale && confident {
                    let pr_note = match progress.days_since_last_pr {
                        Some(days) => format!("no PR in {} days", days),
                        None => "no PR on record".to_string(),
                    };
                    recommendations.push(Recommendation {
                        kind: RecommendationKind::IntensityUp,
                        rationale: format!(
                            "readiness optimal for {} consecutive evaluations and {}",
                            streak, pr_note
                        ),
                        action: "Increase working-set intensity by 2.5-5% this week.".to_string(),
                        applies_from: score.date,
                    });
                }
            }

            // Rule 5: estimated 1RM flat across every tracked lift
            if !progress.lift_progress.is_empty() {
                let plateaued = progress.lift_progress.iter().all(|lift| {
                    match lift.improvement_percent() {
                        Some(percent) => percent < self.thresholds.plateau_threshold_percent,
                        // no usable baseline, cannot call it a plateau
                        None => false,
                    }
                });
                if plateaued {
                    recommendations.push(Recommendation {
                        kind: RecommendationKind::SwitchFocus,
                        rationale: format!(
                            "estimated 1RM improved less than {}% across all {} tracked lifts over the last two cycles",
                            self.thresholds.plateau_threshold_percent,
                            progress.lift_progress.len()
                        ),
                        action: "Switch to a hypertrophy block: 8-12 reps, more volume, shorter rests."
                            .to_string(),
                        applies_from: score.date,
                    });
                }
            }
        }

        // one recommendation per kind per week
        let mut seen: Vec<RecommendationKind> = Vec::new();
        recommendations.retain(|rec| {
            if seen.contains(&rec.kind) {
                false
            } else {
                seen.push(rec.kind);
                true
            }
        });

        debug!(
            date = %score.date,
            zone = %score.zone,
            fired = ?seen,
            "evaluated recommendation rules"
        );

        recommendations
    }
}
