//! Strength estimation module
//!
//! Pure functions for one-rep-max estimation (Brzycki), training-percentage
//! lookups, and bodyweight-normalized relative strength (Wilks).
//!
//! The Brzycki formula estimates 1RM from a submaximal set and is considered
//! reliable up to 10 repetitions; beyond that the linear assumption breaks
//! down. The Wilks score normalizes a lifted total across bodyweights using
//! a sex-specific 5th-degree polynomial, allowing lifters in different
//! weight classes to be compared.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, EngineError, Result, ValidationError};
use crate::models::{Sex, StrengthTest};

/// Highest rep count the Brzycki formula handles without degrading
pub const BRZYCKI_MAX_RELIABLE_REPS: u8 = 10;

/// Training percentages of 1RM per rep count
///
/// Fixed published table, deliberately not re-derived from the Brzycki
/// inverse so the 10RM boundary stays consistent.
pub const REP_MAX_PERCENTAGES: [(u8, f64); 10] = [
    (1, 1.00),
    (2, 0.95),
    (3, 0.93),
    (4, 0.90),
    (5, 0.87),
    (6, 0.85),
    (7, 0.83),
    (8, 0.80),
    (9, 0.77),
    (10, 0.75),
];

// Polynomial value below this is treated as non-positive
const WILKS_DENOMINATOR_FLOOR: f64 = 1e-6;

/// Wilks polynomial coefficients for one sex
#[derive(Debug, Clone, Copy)]
struct WilksCoefficients {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    e: f64,
    f: f64,
}

const WILKS_MALE: WilksCoefficients = WilksCoefficients {
    a: -216.0475144,
    b: 16.2606339,
    c: -0.002388645,
    d: -0.00113732,
    e: 7.01863e-6,
    f: -1.291e-8,
};

const WILKS_FEMALE: WilksCoefficients = WilksCoefficients {
    a: 594.31747775582,
    b: -27.23842536447,
    c: 0.82112226871,
    d: -0.00930733913,
    e: 4.731582e-5,
    f: -9.054e-8,
};

impl WilksCoefficients {
    /// Evaluate a + b·x + c·x² + d·x³ + e·x⁴ + f·x⁵ at the given bodyweight
    fn evaluate(&self, bodyweight_kg: f64) -> f64 {
        let x = bodyweight_kg;
        self.a
            + self.b * x
            + self.c * x.powi(2)
            + self.d * x.powi(3)
            + self.e * x.powi(4)
            + self.f * x.powi(5)
    }
}

/// A 1RM estimate, flagged when computed outside the formula's reliable range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OneRmEstimate {
    /// Estimated one-rep max in kilograms
    pub one_rm_kg: f64,

    /// True when the source set exceeded 10 reps and was clamped
    pub approximate: bool,
}

/// Stateless strength calculations
pub struct StrengthEstimator;

impl StrengthEstimator {
    /// Estimate 1RM from a submaximal set using the Brzycki formula
    ///
    /// `1RM = weight × 36 / (37 − reps)`, valid for 1-10 reps. Sets above
    /// 10 reps are computed at 10 reps and flagged approximate rather than
    /// extrapolated.
    ///
    /// # Arguments
    /// * `weight_kg` - Weight lifted in kilograms
    /// * `reps` - Repetitions completed at that weight
    pub fn estimate_one_rm(weight_kg: f64, reps: u8) -> Result<OneRmEstimate> {
        if !weight_kg.is_finite() {
            return Err(ValidationError::NotFinite { field: "weight_kg" }.into());
        }
        if weight_kg <= 0.0 {
            return Err(ValidationError::NotPositive {
                field: "weight_kg",
                value: weight_kg,
            }
            .into());
        }
        if reps == 0 {
            return Err(ValidationError::ZeroReps.into());
        }

        let capped_reps = reps.min(BRZYCKI_MAX_RELIABLE_REPS);
        let one_rm_kg = weight_kg * 36.0 / (37.0 - f64::from(capped_reps));

        Ok(OneRmEstimate {
            one_rm_kg,
            approximate: reps > BRZYCKI_MAX_RELIABLE_REPS,
        })
    }

    /// Working weight for a target rep count, from the fixed percentage table
    ///
    /// # Arguments
    /// * `one_rm_kg` - Known or estimated one-rep max in kilograms
    /// * `target_reps` - Desired repetitions, 1-10
    pub fn estimated_at_reps(one_rm_kg: f64, target_reps: u8) -> Result<f64> {
        if !one_rm_kg.is_finite() {
            return Err(ValidationError::NotFinite { field: "one_rm_kg" }.into());
        }
        if one_rm_kg <= 0.0 {
            return Err(ValidationError::NotPositive {
                field: "one_rm_kg",
                value: one_rm_kg,
            }
            .into());
        }
        if target_reps == 0 {
            return Err(ValidationError::ZeroReps.into());
        }

        let percentage = REP_MAX_PERCENTAGES
            .iter()
            .find(|(reps, _)| *reps == target_reps)
            .map(|(_, pct)| *pct)
            .ok_or(ValidationError::UnsupportedReps { reps: target_reps })?;

        Ok(one_rm_kg * percentage)
    }

    /// Bodyweight-normalized relative strength
    ///
    /// `wilks = 500 / polynomial(bodyweight) × total`, with sex-specific
    /// polynomial coefficients. A non-positive polynomial value (possible
    /// only for biologically implausible bodyweights) is a domain error,
    /// never silently propagated as infinity or NaN.
    ///
    /// # Arguments
    /// * `total_kg` - Combined lifted total in kilograms
    /// * `bodyweight_kg` - Lifter bodyweight in kilograms
    /// * `sex` - Coefficient set to use
    pub fn wilks_score(total_kg: f64, bodyweight_kg: f64, sex: Sex) -> Result<f64> {
        if !total_kg.is_finite() {
            return Err(ValidationError::NotFinite { field: "total_kg" }.into());
        }
        if total_kg <= 0.0 {
            return Err(ValidationError::NotPositive {
                field: "total_kg",
                value: total_kg,
            }
            .into());
        }
        if !bodyweight_kg.is_finite() {
            return Err(ValidationError::NotFinite {
                field: "bodyweight_kg",
            }
            .into());
        }
        if bodyweight_kg <= 0.0 {
            return Err(ValidationError::NotPositive {
                field: "bodyweight_kg",
                value: bodyweight_kg,
            }
            .into());
        }

        let coefficients = match sex {
            Sex::Male => WILKS_MALE,
            Sex::Female => WILKS_FEMALE,
        };
        let denominator = coefficients.evaluate(bodyweight_kg);
        if !denominator.is_finite() || denominator < WILKS_DENOMINATOR_FLOOR {
            return Err(EngineError::Domain(DomainError::WilksDenominator {
                bodyweight_kg,
                denominator,
            }));
        }

        Ok(500.0 / denominator * total_kg)
    }

    /// Estimate 1RM from a recorded strength test set
    pub fn one_rm_for_test(test: &StrengthTest) -> Result<OneRmEstimate> {
        Self::estimate_one_rm(test.weight_kg, test.reps)
    }
}
