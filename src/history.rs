use itertools::Itertools;
use tracing::{debug, info};

use crate::error::{HistoryError, Result};
use crate::filter::HistoryFilter;
use crate::repository::SessionRepository;
use crate::session::ExerciseSession;
use crate::stats::{compute_averages, compute_weekly_aggregate, SessionAverages, WeeklyAggregate};

/// How the view starts out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    pub initial_filter: HistoryFilter,
    /// When false the selected chip is recorded but the list is never narrowed
    pub apply_filter: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            initial_filter: HistoryFilter::All,
            apply_filter: true,
        }
    }
}

impl From<&crate::config::Config> for ViewOptions {
    fn from(cfg: &crate::config::Config) -> Self {
        Self {
            initial_filter: cfg.default_filter,
            apply_filter: cfg.apply_filter,
        }
    }
}

/// State behind the history screen: the session collection and the
/// selected filter chip. Everything the renderer shows is derived from it.
#[derive(Debug, Clone)]
pub struct HistoryViewModel {
    sessions: Vec<ExerciseSession>,
    selected_filter: HistoryFilter,
    apply_filter: bool,
}

impl HistoryViewModel {
    /// Load the collection once. Fails only if the repository does, or if
    /// it hands back records that break the collection invariants.
    pub fn initialize(repo: &dyn SessionRepository, options: ViewOptions) -> Result<Self> {
        let sessions = repo.load()?;
        validate_sessions(&sessions)?;

        info!(
            sessions = sessions.len(),
            filter = %options.initial_filter,
            apply_filter = options.apply_filter,
            "history initialized"
        );

        Ok(Self {
            sessions,
            selected_filter: options.initial_filter,
            apply_filter: options.apply_filter,
        })
    }

    pub fn sessions(&self) -> &[ExerciseSession] {
        &self.sessions
    }

    pub fn selected_filter(&self) -> HistoryFilter {
        self.selected_filter
    }

    pub fn applies_filter(&self) -> bool {
        self.apply_filter
    }

    pub fn select_filter(&mut self, filter: HistoryFilter) {
        if self.selected_filter != filter {
            debug!(from = %self.selected_filter, to = %filter, "filter selected");
            self.selected_filter = filter;
        }
    }

    /// Sessions to render for the current chip, in collection order
    pub fn visible_sessions(&self) -> Vec<&ExerciseSession> {
        if !self.apply_filter {
            return self.sessions.iter().collect();
        }
        self.sessions
            .iter()
            .filter(|s| self.selected_filter.matches(s))
            .collect()
    }

    /// Totals over this week's sessions, regardless of the selected chip
    pub fn weekly_aggregate(&self) -> WeeklyAggregate {
        compute_weekly_aggregate(
            self.sessions
                .iter()
                .filter(|s| HistoryFilter::ThisWeek.matches(s)),
        )
    }

    pub fn visible_averages(&self) -> SessionAverages {
        compute_averages(self.visible_sessions())
    }
}

fn validate_sessions(sessions: &[ExerciseSession]) -> Result<()> {
    if let Some(id) = sessions.iter().map(|s| s.id).duplicates().next() {
        return Err(HistoryError::DuplicateSessionId(id));
    }

    if let Some(s) = sessions.iter().find(|s| s.oxygen_avg_percent > 100) {
        return Err(HistoryError::OxygenOutOfRange {
            id: s.id,
            value: s.oxygen_avg_percent,
        });
    }

    if let Some(s) = sessions.iter().find(|s| s.heart_rate_avg_bpm == 0) {
        return Err(HistoryError::HeartRateOutOfRange { id: s.id });
    }

    Ok(())
}
