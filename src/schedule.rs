//! Schedule adaptation module
//!
//! Mutates a template weekly schedule according to the active
//! recommendations: converting the hardest session to a rest day (within
//! rest-day caps), shifting intensity tags across the week, and annotating
//! sessions with a focus override.
//!
//! The adapter is deliberately not idempotent: applying the same
//! recommendations to an already-adapted week compounds the changes.
//! Callers always adapt from the unmodified template.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, Result};
use crate::models::{
    IntensityTag, Recommendation, RecommendationKind, ScheduledSession, TrainingFocus,
    WeeklySchedule,
};

/// Rest-day caps for schedule adaptation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdapterConfig {
    /// Most rest days a normal week may hold after adaptation
    pub max_rest_days: usize,

    /// Rest-day allowance when a deload recommendation is active
    pub deload_max_rest_days: usize,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        AdapterConfig {
            max_rest_days: 2,
            deload_max_rest_days: 3,
        }
    }
}

impl AdapterConfig {
    /// Reject caps the adapter cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.max_rest_days < 1 {
            return Err(EngineError::Configuration(
                "rest-day cap must allow at least 1 rest day".to_string(),
            ));
        }
        if self.deload_max_rest_days < self.max_rest_days {
            return Err(EngineError::Configuration(format!(
                "deload rest cap {} must not be below the normal cap {}",
                self.deload_max_rest_days, self.max_rest_days
            )));
        }
        if self.deload_max_rest_days > 7 {
            return Err(EngineError::Configuration(format!(
                "deload rest cap {} cannot exceed the week length",
                self.deload_max_rest_days
            )));
        }
        Ok(())
    }
}

fn apply_rank(kind: RecommendationKind) -> u8 {
    match kind {
        RecommendationKind::Deload => 0,
        RecommendationKind::Rest => 1,
        RecommendationKind::IntensityDown => 2,
        RecommendationKind::IntensityUp => 3,
        RecommendationKind::SwitchFocus => 4,
    }
}

/// Applies recommendations to a template week
pub struct ScheduleAdapter {
    config: AdapterConfig,
}

impl Default for ScheduleAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ScheduleAdapter {
    /// Adapter with the stock rest-day caps
    pub fn new() -> Self {
        ScheduleAdapter {
            config: AdapterConfig::default(),
        }
    }

    /// Adapter with custom caps
    pub fn with_config(config: AdapterConfig) -> Self {
        ScheduleAdapter { config }
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// Produce the adapted week for one recommendation set
    ///
    /// Recommendations are de-duplicated by kind and applied in a fixed
    /// order (deload, rest, intensity-down, intensity-up, switch-focus),
    /// so the result does not depend on input ordering. Rest days are
    /// never removed; rest/deload either convert the hardest session to
    /// rest (earliest day wins ties) or, once the applicable cap is
    /// reached, reduce that session's intensity one level instead.
    ///
    /// Not idempotent: always call with the unmodified template, never
    /// with a previously adapted week.
    pub fn adapt(&self, template: &WeeklySchedule, recs: &[Recommendation]) -> WeeklySchedule {
        let mut sessions = template.sessions.clone();

        let mut kinds: Vec<RecommendationKind> = Vec::new();
        for rec in recs {
            if !kinds.contains(&rec.kind) {
                kinds.push(rec.kind);
            }
        }
        kinds.sort_by_key(|kind| apply_rank(*kind));

        for kind in &kinds {
            match kind {
                RecommendationKind::Deload => self.insert_or_soften_rest(&mut sessions, true),
                RecommendationKind::Rest => self.insert_or_soften_rest(&mut sessions, false),
                RecommendationKind::IntensityDown => shift_intensities(&mut sessions, false),
                RecommendationKind::IntensityUp => shift_intensities(&mut sessions, true),
                RecommendationKind::SwitchFocus => annotate_focus(&mut sessions),
            }
        }

        debug!(applied = ?kinds, rest_days = sessions.iter().filter(|s| s.is_rest()).count(), "adapted weekly schedule");

        WeeklySchedule { sessions }
    }

    /// Convert the hardest session to rest, or reduce it one level once
    /// the rest cap is reached
    fn insert_or_soften_rest(&self, sessions: &mut [ScheduledSession], deload: bool) {
        let cap = if deload {
            self.config.deload_max_rest_days
        } else {
            self.config.max_rest_days
        };
        let rest_days = sessions.iter().filter(|s| s.is_rest()).count();

        // hardest session; the earliest day wins ties
        let mut target: Option<(usize, IntensityTag)> = None;
        for (index, session) in sessions.iter().enumerate() {
            if let Some(tag) = session.intensity() {
                match target {
                    Some((_, best)) if tag <= best => {}
                    _ => target = Some((index, tag)),
                }
            }
        }
        let Some((index, tag)) = target else {
            // nothing but rest days, nothing to convert
            return;
        };

        let day = sessions[index].day;
        if rest_days < cap {
            let note = if deload {
                "deload recovery day"
            } else {
                "added recovery day"
            };
            sessions[index] = ScheduledSession::rest(day, Some(note.to_string()));
            debug!(day = %day, intensity = %tag, deload, "converted session to rest");
        } else if let Some(workout) = sessions[index].workout.as_mut() {
            workout.intensity = workout.intensity.stepped_down();
            debug!(day = %day, "rest cap reached, reduced intensity one level");
        }
    }
}

/// Shift every non-rest session's intensity one level, clamped
fn shift_intensities(sessions: &mut [ScheduledSession], up: bool) {
    for session in sessions.iter_mut() {
        if let Some(workout) = session.workout.as_mut() {
            workout.intensity = if up {
                workout.intensity.stepped_up()
            } else {
                workout.intensity.stepped_down()
            };
        }
    }
}

/// Mark every non-rest session for hypertrophy-style programming
fn annotate_focus(sessions: &mut [ScheduledSession]) {
    for session in sessions.iter_mut() {
        if session.workout.is_some() {
            session.focus_override = Some(TrainingFocus::Hypertrophy);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlannedWorkout;
    use chrono::{NaiveDate, Weekday};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn rec(kind: RecommendationKind) -> Recommendation {
        Recommendation {
            kind,
            rationale: "test".to_string(),
            action: "test".to_string(),
            applies_from: d(2024, 6, 10),
        }
    }

    fn workout(name: &str, intensity: IntensityTag) -> PlannedWorkout {
        PlannedWorkout::new(name, TrainingFocus::Strength, intensity, 60)
    }

    /// Six training days, Wednesday rest, hardest sessions on Monday and
    /// Thursday
    fn one_rest_template() -> WeeklySchedule {
        WeeklySchedule::new(vec![
            ScheduledSession::training(Weekday::Mon, workout("A", IntensityTag::Hard)),
            ScheduledSession::training(Weekday::Tue, workout("B", IntensityTag::Light)),
            ScheduledSession::rest(Weekday::Wed, None),
            ScheduledSession::training(Weekday::Thu, workout("C", IntensityTag::Hard)),
            ScheduledSession::training(Weekday::Fri, workout("D", IntensityTag::Light)),
            ScheduledSession::training(Weekday::Sat, workout("E", IntensityTag::Moderate)),
            ScheduledSession::training(Weekday::Sun, workout("F", IntensityTag::Light)),
        ])
        .unwrap()
    }

    fn no_rest_template() -> WeeklySchedule {
        WeeklySchedule::new(
            [
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
                Weekday::Sat,
                Weekday::Sun,
            ]
            .into_iter()
            .map(|day| ScheduledSession::training(day, workout("S", IntensityTag::Moderate)))
            .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_deload_converts_hardest_session_within_cap() {
        let adapter = ScheduleAdapter::new();
        let template = WeeklySchedule::default_template();
        assert_eq!(template.rest_day_count(), 2);

        let adapted = adapter.adapt(&template, &[rec(RecommendationKind::Deload)]);

        assert_eq!(adapted.rest_day_count(), 3);
        // Thursday held the only extreme session
        let thursday = &adapted.sessions()[3];
        assert!(thursday.is_rest());
        assert_eq!(thursday.note.as_deref(), Some("deload recovery day"));
        // the rest of the week is untouched
        assert_eq!(adapted.sessions()[0], template.sessions()[0]);
        assert_eq!(adapted.sessions()[5], template.sessions()[5]);
    }

    #[test]
    fn test_rest_at_cap_softens_instead_of_converting() {
        let adapter = ScheduleAdapter::new();
        // the default template already holds 2 rest days, the normal cap
        let template = WeeklySchedule::default_template();

        let adapted = adapter.adapt(&template, &[rec(RecommendationKind::Rest)]);

        assert_eq!(adapted.rest_day_count(), 2);
        let thursday = &adapted.sessions()[3];
        assert_eq!(thursday.intensity(), Some(IntensityTag::Hard));
    }

    #[test]
    fn test_rest_invariant_from_single_rest_template() {
        let adapter = ScheduleAdapter::new();
        let template = one_rest_template();

        for kind in [RecommendationKind::Rest, RecommendationKind::Deload] {
            let adapted = adapter.adapt(&template, &[rec(kind)]);
            assert!(adapted.rest_day_count() >= 1);
            assert!(adapted.rest_day_count() <= 3);
            assert_eq!(adapted.rest_day_count(), 2);
        }
    }

    #[test]
    fn test_tie_break_prefers_earliest_day() {
        let adapter = ScheduleAdapter::new();
        // Monday and Thursday are both hard; Monday must be converted
        let adapted = adapter.adapt(&one_rest_template(), &[rec(RecommendationKind::Rest)]);

        assert!(adapted.sessions()[0].is_rest());
        assert_eq!(
            adapted.sessions()[3].intensity(),
            Some(IntensityTag::Hard)
        );
    }

    #[test]
    fn test_rest_on_template_without_rest_days() {
        let adapter = ScheduleAdapter::new();
        let adapted = adapter.adapt(&no_rest_template(), &[rec(RecommendationKind::Rest)]);

        assert_eq!(adapted.rest_day_count(), 1);
        assert!(adapted.sessions()[0].is_rest());
    }

    #[test]
    fn test_all_rest_week_is_left_alone() {
        let adapter = ScheduleAdapter::new();
        let week = WeeklySchedule::new(
            [
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
                Weekday::Sat,
                Weekday::Sun,
            ]
            .into_iter()
            .map(|day| ScheduledSession::rest(day, None))
            .collect(),
        )
        .unwrap();

        let adapted = adapter.adapt(&week, &[rec(RecommendationKind::Deload)]);
        assert_eq!(adapted, week);
    }

    #[test]
    fn test_intensity_down_shifts_every_training_day() {
        let adapter = ScheduleAdapter::new();
        let template = one_rest_template();

        let adapted = adapter.adapt(&template, &[rec(RecommendationKind::IntensityDown)]);

        assert_eq!(adapted.sessions()[0].intensity(), Some(IntensityTag::Moderate));
        // light cannot go lower
        assert_eq!(adapted.sessions()[1].intensity(), Some(IntensityTag::Light));
        assert!(adapted.sessions()[2].is_rest());
        assert_eq!(adapted.sessions()[5].intensity(), Some(IntensityTag::Light));
        assert_eq!(adapted.rest_day_count(), template.rest_day_count());
    }

    #[test]
    fn test_intensity_up_clamps_at_extreme() {
        let adapter = ScheduleAdapter::new();
        let template = WeeklySchedule::default_template();

        let adapted = adapter.adapt(&template, &[rec(RecommendationKind::IntensityUp)]);

        // Monday hard -> extreme, Thursday extreme stays extreme
        assert_eq!(adapted.sessions()[0].intensity(), Some(IntensityTag::Extreme));
        assert_eq!(adapted.sessions()[3].intensity(), Some(IntensityTag::Extreme));
        assert_eq!(adapted.sessions()[1].intensity(), Some(IntensityTag::Hard));
    }

    #[test]
    fn test_switch_focus_only_annotates() {
        let adapter = ScheduleAdapter::new();
        let template = WeeklySchedule::default_template();

        let adapted = adapter.adapt(&template, &[rec(RecommendationKind::SwitchFocus)]);

        for (original, adapted) in template.sessions().iter().zip(adapted.sessions()) {
            assert_eq!(original.intensity(), adapted.intensity());
            if adapted.is_rest() {
                assert_eq!(adapted.focus_override, None);
            } else {
                assert_eq!(adapted.focus_override, Some(TrainingFocus::Hypertrophy));
            }
        }
        assert_eq!(adapted.rest_day_count(), template.rest_day_count());
    }

    #[test]
    fn test_application_order_is_fixed() {
        let adapter = ScheduleAdapter::new();
        let template = one_rest_template();

        // input order reversed; deload still applies before the shift
        let adapted = adapter.adapt(
            &template,
            &[
                rec(RecommendationKind::IntensityDown),
                rec(RecommendationKind::Deload),
            ],
        );

        // Monday converted to rest first, then the rest of the week shifted
        assert!(adapted.sessions()[0].is_rest());
        assert_eq!(adapted.sessions()[3].intensity(), Some(IntensityTag::Moderate));
        assert_eq!(adapted.sessions()[5].intensity(), Some(IntensityTag::Light));

        let same = adapter.adapt(
            &template,
            &[
                rec(RecommendationKind::Deload),
                rec(RecommendationKind::IntensityDown),
            ],
        );
        assert_eq!(adapted, same);
    }

    #[test]
    fn test_duplicate_recommendations_apply_once() {
        let adapter = ScheduleAdapter::new();
        let template = one_rest_template();

        let adapted = adapter.adapt(
            &template,
            &[rec(RecommendationKind::Rest), rec(RecommendationKind::Rest)],
        );
        assert_eq!(adapted.rest_day_count(), 2);
        // a second application would have softened Thursday at the cap
        assert_eq!(adapted.sessions()[3].intensity(), Some(IntensityTag::Hard));
    }

    #[test]
    fn test_readapting_an_adapted_week_compounds() {
        // callers must adapt from the template; this documents why
        let adapter = ScheduleAdapter::new();
        let template = one_rest_template();

        let once = adapter.adapt(&template, &[rec(RecommendationKind::Rest)]);
        let twice = adapter.adapt(&once, &[rec(RecommendationKind::Rest)]);

        assert_ne!(once, twice);
    }

    #[test]
    fn test_config_validation() {
        assert!(AdapterConfig::default().validate().is_ok());

        let bad = AdapterConfig {
            max_rest_days: 0,
            deload_max_rest_days: 3,
        };
        assert!(bad.validate().is_err());

        let bad = AdapterConfig {
            max_rest_days: 4,
            deload_max_rest_days: 3,
        };
        assert!(bad.validate().is_err());

        let bad = AdapterConfig {
            max_rest_days: 2,
            deload_max_rest_days: 8,
        };
        assert!(bad.validate().is_err());
    }
}
