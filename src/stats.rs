use serde::Serialize;

use crate::session::ExerciseSession;
use crate::util::mean;

/// Totals shown on the summary card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct WeeklyAggregate {
    pub session_count: usize,
    pub total_minutes: u32,
    pub total_calories: u32,
}

/// Sum count, minutes and calories over `sessions`.
///
/// Never fails: durations that don't parse count as 0 minutes and totals
/// saturate at `u32::MAX`.
pub fn compute_weekly_aggregate<'a, I>(sessions: I) -> WeeklyAggregate
where
    I: IntoIterator<Item = &'a ExerciseSession>,
{
    sessions
        .into_iter()
        .fold(WeeklyAggregate::default(), |acc, session| WeeklyAggregate {
            session_count: acc.session_count + 1,
            total_minutes: acc.total_minutes.saturating_add(session.duration_minutes()),
            total_calories: acc.total_calories.saturating_add(session.calories_burned),
        })
}

/// Mean physiological readings over a set of sessions
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SessionAverages {
    pub heart_rate_bpm: Option<f64>,
    pub oxygen_percent: Option<f64>,
}

pub fn compute_averages<'a, I>(sessions: I) -> SessionAverages
where
    I: IntoIterator<Item = &'a ExerciseSession>,
{
    let (heart_rates, oxygen): (Vec<f64>, Vec<f64>) = sessions
        .into_iter()
        .map(|s| {
            (
                f64::from(s.heart_rate_avg_bpm),
                f64::from(s.oxygen_avg_percent),
            )
        })
        .unzip();

    SessionAverages {
        heart_rate_bpm: mean(&heart_rates),
        oxygen_percent: mean(&oxygen),
    }
}
