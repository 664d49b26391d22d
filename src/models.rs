use std::fmt;

use chrono::{NaiveDate, Weekday};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Readiness zones classifying training risk for a given day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReadinessZone {
    Optimal,
    Caution,
    HighRisk,
}

impl fmt::Display for ReadinessZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadinessZone::Optimal => write!(f, "optimal"),
            ReadinessZone::Caution => write!(f, "caution"),
            ReadinessZone::HighRisk => write!(f, "high-risk"),
        }
    }
}

/// Daily subjective recovery survey
///
/// One sample per day; immutable once recorded. All four metrics are
/// self-reported on a 0-10 scale where higher sleep/energy is better and
/// higher soreness/stress is worse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecoverySample {
    /// Date the survey was taken
    pub date: NaiveDate,

    /// Sleep quality, 0 (none) to 10 (fully rested)
    pub sleep_quality: f64,

    /// Muscle soreness, 0 (none) to 10 (severe)
    pub soreness: f64,

    /// Perceived energy, 0 (exhausted) to 10 (fresh)
    pub energy: f64,

    /// Psychological stress, 0 (calm) to 10 (overwhelmed)
    pub stress: f64,
}

fn check_subjective(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field });
    }
    if !(0.0..=10.0).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field,
            value,
            min: 0.0,
            max: 10.0,
        });
    }
    Ok(())
}

impl RecoverySample {
    /// Create a new sample, rejecting out-of-range metrics
    pub fn new(
        date: NaiveDate,
        sleep_quality: f64,
        soreness: f64,
        energy: f64,
        stress: f64,
    ) -> Result<Self, ValidationError> {
        let sample = RecoverySample {
            date,
            sleep_quality,
            soreness,
            energy,
            stress,
        };
        sample.validate()?;
        Ok(sample)
    }

    /// Range-check every metric, naming the offending field
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_subjective("sleep_quality", self.sleep_quality)?;
        check_subjective("soreness", self.soreness)?;
        check_subjective("energy", self.energy)?;
        check_subjective("stress", self.stress)?;
        Ok(())
    }
}

/// Weekly training-load summary derived from workout logs
///
/// Recomputed weekly by the (external) logging flow. Volume is tracked as
/// `Decimal` since it accumulates over many sets without rounding drift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingLoadFact {
    /// Monday of the week this fact summarizes
    pub week_start: NaiveDate,

    /// Total lifted volume for the week in kilograms
    pub total_volume_kg: Decimal,

    /// Number of training sessions in the week
    pub session_count: u16,

    /// Days elapsed since the last deload week
    pub days_since_last_deload: u16,

    /// Trailing 4-week average volume; `None` until enough history exists
    pub four_week_avg_volume_kg: Option<Decimal>,
}

impl TrainingLoadFact {
    /// Create a load fact, rejecting negative volumes
    pub fn new(
        week_start: NaiveDate,
        total_volume_kg: Decimal,
        session_count: u16,
        days_since_last_deload: u16,
        four_week_avg_volume_kg: Option<Decimal>,
    ) -> Result<Self, ValidationError> {
        let fact = TrainingLoadFact {
            week_start,
            total_volume_kg,
            session_count,
            days_since_last_deload,
            four_week_avg_volume_kg,
        };
        fact.validate()?;
        Ok(fact)
    }

    /// Range-check the volume fields, naming the offending field
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.total_volume_kg < Decimal::ZERO {
            return Err(ValidationError::Negative {
                field: "total_volume_kg",
                value: self.total_volume_kg.to_f64().unwrap_or(f64::NAN),
            });
        }
        if let Some(avg) = self.four_week_avg_volume_kg {
            if avg < Decimal::ZERO {
                return Err(ValidationError::Negative {
                    field: "four_week_avg_volume_kg",
                    value: avg.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
        Ok(())
    }

    /// Build a load fact computing the rolling average from prior weeks
    ///
    /// `prior_weekly_volumes` is ordered oldest first; the average covers
    /// the most recent 4 entries (fewer if less history exists). An empty
    /// slice leaves the average unset, which skips the overage check.
    pub fn with_rolling_average(
        week_start: NaiveDate,
        total_volume_kg: Decimal,
        session_count: u16,
        days_since_last_deload: u16,
        prior_weekly_volumes: &[Decimal],
    ) -> Result<Self, ValidationError> {
        for volume in prior_weekly_volumes {
            if *volume < Decimal::ZERO {
                return Err(ValidationError::Negative {
                    field: "prior_weekly_volumes",
                    value: volume.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
        let window: Vec<Decimal> = prior_weekly_volumes.iter().rev().take(4).copied().collect();
        let average = if window.is_empty() {
            None
        } else {
            let total: Decimal = window.iter().sum();
            Some(total / Decimal::from(window.len() as u32))
        };
        Self::new(
            week_start,
            total_volume_kg,
            session_count,
            days_since_last_deload,
            average,
        )
    }
}

/// Computed readiness for a single day
///
/// Always derivable from the latest samples and load fact; never a source
/// of truth on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadinessScore {
    /// Day the score applies to
    pub date: NaiveDate,

    /// Composite readiness, 0-100
    pub value: f64,

    /// Risk zone the value falls in
    pub zone: ReadinessZone,

    /// Set when fewer than the configured minimum of sampled days backed
    /// the score; callers must surface this, not hide it
    pub low_confidence: bool,

    /// Distinct sampled days that contributed to the score
    pub samples_used: usize,
}

/// Recommendation kinds, one per adaptation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecommendationKind {
    Deload,
    Rest,
    IntensityUp,
    IntensityDown,
    SwitchFocus,
}

impl fmt::Display for RecommendationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecommendationKind::Deload => write!(f, "deload"),
            RecommendationKind::Rest => write!(f, "rest"),
            RecommendationKind::IntensityUp => write!(f, "intensity-up"),
            RecommendationKind::IntensityDown => write!(f, "intensity-down"),
            RecommendationKind::SwitchFocus => write!(f, "switch-focus"),
        }
    }
}

/// A typed training recommendation emitted by the rule engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Which rule family produced this recommendation
    pub kind: RecommendationKind,

    /// Human-readable explanation of why the rule fired
    pub rationale: String,

    /// Concrete instruction for the upcoming week
    pub action: String,

    /// First day the recommendation applies to
    pub applies_from: NaiveDate,
}

/// Session intensity tags, ordered easiest to hardest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntensityTag {
    Light,
    Moderate,
    Hard,
    Extreme,
}

impl IntensityTag {
    /// One level easier, clamped at light
    pub fn stepped_down(self) -> IntensityTag {
        match self {
            IntensityTag::Extreme => IntensityTag::Hard,
            IntensityTag::Hard => IntensityTag::Moderate,
            IntensityTag::Moderate | IntensityTag::Light => IntensityTag::Light,
        }
    }

    /// One level harder, clamped at extreme
    pub fn stepped_up(self) -> IntensityTag {
        match self {
            IntensityTag::Light => IntensityTag::Moderate,
            IntensityTag::Moderate => IntensityTag::Hard,
            IntensityTag::Hard | IntensityTag::Extreme => IntensityTag::Extreme,
        }
    }
}

impl fmt::Display for IntensityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntensityTag::Light => write!(f, "light"),
            IntensityTag::Moderate => write!(f, "moderate"),
            IntensityTag::Hard => write!(f, "hard"),
            IntensityTag::Extreme => write!(f, "extreme"),
        }
    }
}

/// Training focus a workout is programmed for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainingFocus {
    Strength,
    Hypertrophy,
    Conditioning,
}

impl fmt::Display for TrainingFocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrainingFocus::Strength => write!(f, "strength"),
            TrainingFocus::Hypertrophy => write!(f, "hypertrophy"),
            TrainingFocus::Conditioning => write!(f, "conditioning"),
        }
    }
}

/// A workout slot in the weekly template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedWorkout {
    /// Display name, e.g. "Lower Body"
    pub name: String,

    /// Focus the session is programmed for
    pub focus: TrainingFocus,

    /// Intensity tag driving adaptation decisions
    pub intensity: IntensityTag,

    /// Planned duration in minutes
    pub duration_minutes: u16,
}

impl PlannedWorkout {
    pub fn new(
        name: &str,
        focus: TrainingFocus,
        intensity: IntensityTag,
        duration_minutes: u16,
    ) -> Self {
        PlannedWorkout {
            name: name.to_string(),
            focus,
            intensity,
            duration_minutes,
        }
    }
}

/// One day of the weekly schedule; `workout == None` means a rest day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledSession {
    /// Day of week this session occupies
    pub day: Weekday,

    /// Planned workout, or `None` for a rest day
    pub workout: Option<PlannedWorkout>,

    /// Focus override set by a switch-focus recommendation; consumed by
    /// the downstream workout-content generator
    pub focus_override: Option<TrainingFocus>,

    /// Free-form annotation, e.g. rest-day labels
    pub note: Option<String>,
}

impl ScheduledSession {
    /// A training day
    pub fn training(day: Weekday, workout: PlannedWorkout) -> Self {
        ScheduledSession {
            day,
            workout: Some(workout),
            focus_override: None,
            note: None,
        }
    }

    /// A rest day with an optional label
    pub fn rest(day: Weekday, note: Option<String>) -> Self {
        ScheduledSession {
            day,
            workout: None,
            focus_override: None,
            note,
        }
    }

    pub fn is_rest(&self) -> bool {
        self.workout.is_none()
    }

    /// Intensity of the planned workout, `None` on rest days
    pub fn intensity(&self) -> Option<IntensityTag> {
        self.workout.as_ref().map(|w| w.intensity)
    }
}

/// Ordered week of exactly seven sessions, Monday through Sunday
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    pub(crate) sessions: Vec<ScheduledSession>,
}

const WEEK_DAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

impl WeeklySchedule {
    /// Validate and wrap a week of sessions
    ///
    /// Exactly seven sessions are required, one per weekday, in
    /// Monday-through-Sunday order.
    pub fn new(sessions: Vec<ScheduledSession>) -> Result<Self, ValidationError> {
        if sessions.len() != WEEK_DAYS.len() {
            return Err(ValidationError::MalformedWeek {
                count: sessions.len(),
            });
        }
        for (position, (session, expected)) in sessions.iter().zip(WEEK_DAYS).enumerate() {
            if session.day != expected {
                return Err(ValidationError::DayOutOfOrder {
                    position,
                    expected,
                    found: session.day,
                });
            }
        }
        Ok(WeeklySchedule { sessions })
    }

    pub fn sessions(&self) -> &[ScheduledSession] {
        &self.sessions
    }

    pub fn rest_day_count(&self) -> usize {
        self.sessions.iter().filter(|s| s.is_rest()).count()
    }

    /// The stock weekly template: five training days with two labeled
    /// rest days (midweek active recovery, Sunday full rest)
    pub fn default_template() -> Self {
        WeeklySchedule {
            sessions: vec![
                ScheduledSession::training(
                    Weekday::Mon,
                    PlannedWorkout::new("Lower Body", TrainingFocus::Strength, IntensityTag::Hard, 60),
                ),
                ScheduledSession::training(
                    Weekday::Tue,
                    PlannedWorkout::new("Upper Body", TrainingFocus::Strength, IntensityTag::Moderate, 60),
                ),
                ScheduledSession::rest(Weekday::Wed, Some("active recovery".to_string())),
                ScheduledSession::training(
                    Weekday::Thu,
                    PlannedWorkout::new(
                        "Full Body Intervals",
                        TrainingFocus::Conditioning,
                        IntensityTag::Extreme,
                        45,
                    ),
                ),
                ScheduledSession::training(
                    Weekday::Fri,
                    PlannedWorkout::new("Push Pull", TrainingFocus::Hypertrophy, IntensityTag::Moderate, 60),
                ),
                ScheduledSession::training(
                    Weekday::Sat,
                    PlannedWorkout::new("Accessory + Cardio", TrainingFocus::Conditioning, IntensityTag::Hard, 50),
                ),
                ScheduledSession::rest(Weekday::Sun, Some("full rest".to_string())),
            ],
        }
    }
}

/// Strength test types recorded by the logging client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrengthTestType {
    #[serde(rename = "1RM")]
    OneRm,
    #[serde(rename = "3RM")]
    ThreeRm,
    #[serde(rename = "5RM")]
    FiveRm,
    #[serde(rename = "AMRAP")]
    Amrap,
}

impl fmt::Display for StrengthTestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthTestType::OneRm => write!(f, "1RM"),
            StrengthTestType::ThreeRm => write!(f, "3RM"),
            StrengthTestType::FiveRm => write!(f, "5RM"),
            StrengthTestType::Amrap => write!(f, "AMRAP"),
        }
    }
}

/// Biological sex for Wilks coefficient selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "male"),
            Sex::Female => write!(f, "female"),
        }
    }
}

/// A recorded strength test set; append-only historical fact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthTest {
    /// Exercise name, e.g. "back squat"
    pub exercise: String,

    /// What kind of test was performed
    pub test_type: StrengthTestType,

    /// Weight lifted in kilograms
    pub weight_kg: f64,

    /// Repetitions completed at that weight
    pub reps: u8,

    /// Lifter bodyweight at test time in kilograms
    pub bodyweight_kg: f64,

    /// Date of the test
    pub date: NaiveDate,

    /// Client-supplied annotations passed through untouched
    pub metadata: Option<serde_json::Value>,
}

impl StrengthTest {
    /// Record a test, rejecting implausible numbers
    pub fn new(
        exercise: &str,
        test_type: StrengthTestType,
        weight_kg: f64,
        reps: u8,
        bodyweight_kg: f64,
        date: NaiveDate,
    ) -> Result<Self, ValidationError> {
        if !weight_kg.is_finite() {
            return Err(ValidationError::NotFinite { field: "weight_kg" });
        }
        if weight_kg <= 0.0 {
            return Err(ValidationError::NotPositive {
                field: "weight_kg",
                value: weight_kg,
            });
        }
        if reps == 0 {
            return Err(ValidationError::ZeroReps);
        }
        if !bodyweight_kg.is_finite() {
            return Err(ValidationError::NotFinite {
                field: "bodyweight_kg",
            });
        }
        if bodyweight_kg <= 0.0 {
            return Err(ValidationError::NotPositive {
                field: "bodyweight_kg",
                value: bodyweight_kg,
            });
        }
        Ok(StrengthTest {
            exercise: exercise.to_string(),
            test_type,
            weight_kg,
            reps,
            bodyweight_kg,
            date,
            metadata: None,
        })
    }
}

/// Estimated 1RM movement for one tracked lift across the last two
/// evaluation cycles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiftProgress {
    /// Exercise name matching the strength-test log
    pub exercise: String,

    /// Estimated 1RM from the previous evaluation cycle, kilograms
    pub previous_one_rm_kg: f64,

    /// Estimated 1RM from the current evaluation cycle, kilograms
    pub current_one_rm_kg: f64,
}

impl LiftProgress {
    /// Percent change between cycles; `None` when the previous estimate
    /// is unusable as a baseline
    pub fn improvement_percent(&self) -> Option<f64> {
        if self.previous_one_rm_kg <= 0.0 || !self.previous_one_rm_kg.is_finite() {
            return None;
        }
        Some((self.current_one_rm_kg - self.previous_one_rm_kg) / self.previous_one_rm_kg * 100.0)
    }
}

/// Longitudinal markers feeding the progression rules
///
/// Produced by the caller from stored evaluation history and the PR log;
/// the engine itself holds no state between evaluations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProgressMarkers {
    /// Zones of prior evaluations, oldest first, excluding the current one
    pub recent_zones: Vec<ReadinessZone>,

    /// Days since any tracked exercise set a personal record; `None`
    /// means no PR on record
    pub days_since_last_pr: Option<u32>,

    /// Per-lift estimated 1RM movement across the last two cycles
    pub lift_progress: Vec<LiftProgress>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_recovery_sample_accepts_full_range() {
        assert!(RecoverySample::new(d(2024, 6, 3), 0.0, 0.0, 0.0, 0.0).is_ok());
        assert!(RecoverySample::new(d(2024, 6, 3), 10.0, 10.0, 10.0, 10.0).is_ok());
        assert!(RecoverySample::new(d(2024, 6, 3), 7.5, 3.0, 6.0, 4.5).is_ok());
    }

    #[test]
    fn test_recovery_sample_rejects_out_of_range() {
        let err = RecoverySample::new(d(2024, 6, 3), 15.0, 2.0, 5.0, 3.0).unwrap_err();
        assert_eq!(
            err,
            ValidationError::OutOfRange {
                field: "sleep_quality",
                value: 15.0,
                min: 0.0,
                max: 10.0,
            }
        );

        let err = RecoverySample::new(d(2024, 6, 3), 7.0, -0.1, 5.0, 3.0).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::OutOfRange { field: "soreness", .. }
        ));
    }

    #[test]
    fn test_recovery_sample_rejects_nan() {
        let err = RecoverySample::new(d(2024, 6, 3), 7.0, 2.0, f64::NAN, 3.0).unwrap_err();
        assert_eq!(err, ValidationError::NotFinite { field: "energy" });
    }

    #[test]
    fn test_load_fact_rejects_negative_volume() {
        let err = TrainingLoadFact::new(d(2024, 6, 3), dec!(-10.0), 4, 14, None).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Negative { field: "total_volume_kg", .. }
        ));
    }

    #[test]
    fn test_rolling_average_uses_most_recent_four_weeks() {
        let priors = vec![dec!(900), dec!(1000), dec!(1100), dec!(1200), dec!(1300)];
        let fact =
            TrainingLoadFact::with_rolling_average(d(2024, 6, 3), dec!(1400), 5, 21, &priors)
                .unwrap();
        // average of 1000, 1100, 1200, 1300
        assert_eq!(fact.four_week_avg_volume_kg, Some(dec!(1150)));
    }

    #[test]
    fn test_rolling_average_with_short_history() {
        let fact =
            TrainingLoadFact::with_rolling_average(d(2024, 6, 3), dec!(800), 4, 7, &[dec!(600)])
                .unwrap();
        assert_eq!(fact.four_week_avg_volume_kg, Some(dec!(600)));

        let fact = TrainingLoadFact::with_rolling_average(d(2024, 6, 3), dec!(800), 4, 7, &[])
            .unwrap();
        assert_eq!(fact.four_week_avg_volume_kg, None);
    }

    #[test]
    fn test_intensity_step_clamps_at_ends() {
        assert_eq!(IntensityTag::Light.stepped_down(), IntensityTag::Light);
        assert_eq!(IntensityTag::Extreme.stepped_up(), IntensityTag::Extreme);
        assert_eq!(IntensityTag::Extreme.stepped_down(), IntensityTag::Hard);
        assert_eq!(IntensityTag::Moderate.stepped_up(), IntensityTag::Hard);
    }

    #[test]
    fn test_intensity_ordering() {
        assert!(IntensityTag::Light < IntensityTag::Moderate);
        assert!(IntensityTag::Hard < IntensityTag::Extreme);
    }

    #[test]
    fn test_weekly_schedule_requires_seven_sessions() {
        let err = WeeklySchedule::new(vec![ScheduledSession::rest(Weekday::Mon, None)])
            .unwrap_err();
        assert_eq!(err, ValidationError::MalformedWeek { count: 1 });
    }

    #[test]
    fn test_weekly_schedule_requires_monday_first() {
        let mut sessions = WeeklySchedule::default_template().sessions().to_vec();
        sessions.swap(0, 1);
        let err = WeeklySchedule::new(sessions).unwrap_err();
        assert_eq!(
            err,
            ValidationError::DayOutOfOrder {
                position: 0,
                expected: Weekday::Mon,
                found: Weekday::Tue,
            }
        );
    }

    #[test]
    fn test_default_template_shape() {
        let template = WeeklySchedule::default_template();
        assert_eq!(template.sessions().len(), 7);
        assert_eq!(template.rest_day_count(), 2);
        assert!(template.sessions()[2].is_rest());
        assert!(template.sessions()[6].is_rest());
        assert_eq!(
            template.sessions()[3].intensity(),
            Some(IntensityTag::Extreme)
        );
        // template itself passes its own validation
        assert!(WeeklySchedule::new(template.sessions().to_vec()).is_ok());
    }

    #[test]
    fn test_strength_test_validation() {
        assert!(StrengthTest::new(
            "back squat",
            StrengthTestType::FiveRm,
            140.0,
            5,
            82.0,
            d(2024, 6, 1)
        )
        .is_ok());

        let err = StrengthTest::new(
            "back squat",
            StrengthTestType::OneRm,
            -140.0,
            1,
            82.0,
            d(2024, 6, 1),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::NotPositive { field: "weight_kg", .. }
        ));

        let err = StrengthTest::new(
            "bench press",
            StrengthTestType::Amrap,
            100.0,
            0,
            82.0,
            d(2024, 6, 1),
        )
        .unwrap_err();
        assert_eq!(err, ValidationError::ZeroReps);
    }

    #[test]
    fn test_recommendation_kind_serializes_kebab_case() {
        let json = serde_json::to_string(&RecommendationKind::IntensityUp).unwrap();
        assert_eq!(json, "\"intensity-up\"");

        let parsed: RecommendationKind = serde_json::from_str("\"switch-focus\"").unwrap();
        assert_eq!(parsed, RecommendationKind::SwitchFocus);
    }

    #[test]
    fn test_zone_serialization_and_display() {
        let json = serde_json::to_string(&ReadinessZone::HighRisk).unwrap();
        assert_eq!(json, "\"high-risk\"");
        assert_eq!(ReadinessZone::HighRisk.to_string(), "high-risk");
        assert_eq!(ReadinessZone::Optimal.to_string(), "optimal");
    }

    #[test]
    fn test_schedule_serde_round_trip() {
        let template = WeeklySchedule::default_template();
        let json = serde_json::to_string(&template).unwrap();
        let parsed: WeeklySchedule = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, template);
    }

    #[test]
    fn test_lift_progress_improvement_percent() {
        let progress = LiftProgress {
            exercise: "deadlift".to_string(),
            previous_one_rm_kg: 200.0,
            current_one_rm_kg: 201.0,
        };
        let pct = progress.improvement_percent().unwrap();
        assert!((pct - 0.5).abs() < 1e-9);

        let unusable = LiftProgress {
            exercise: "deadlift".to_string(),
            previous_one_rm_kg: 0.0,
            current_one_rm_kg: 201.0,
        };
        assert_eq!(unusable.improvement_percent(), None);
    }
}
