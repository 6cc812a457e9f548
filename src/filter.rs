use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::session::ExerciseSession;

/// Filter chips shown above the session list
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    ValueEnum,
    strum_macros::Display,
)]
#[serde(rename_all = "kebab-case")]
pub enum HistoryFilter {
    #[default]
    #[strum(to_string = "Semua")]
    All,
    #[strum(to_string = "Hari ini")]
    Today,
    #[strum(to_string = "Minggu ini")]
    ThisWeek,
    #[strum(to_string = "Bulan ini")]
    ThisMonth,
}

impl HistoryFilter {
    /// Chips in display order
    pub const ALL: [HistoryFilter; 4] = [
        HistoryFilter::All,
        HistoryFilter::Today,
        HistoryFilter::ThisWeek,
        HistoryFilter::ThisMonth,
    ];

    /// Oldest session age in days this filter admits; None means unbounded
    pub fn max_days_ago(&self) -> Option<u32> {
        match self {
            HistoryFilter::All => None,
            HistoryFilter::Today => Some(0),
            HistoryFilter::ThisWeek => Some(6),
            HistoryFilter::ThisMonth => Some(29),
        }
    }

    /// Sessions with an unparseable date label only match `All`.
    pub fn matches(&self, session: &ExerciseSession) -> bool {
        match self.max_days_ago() {
            None => true,
            Some(limit) => session
                .relative_date()
                .is_some_and(|date| date.days_ago <= limit),
        }
    }

    pub fn position(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}
