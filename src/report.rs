//! Non-interactive output of the history view: a plain-text table for
//! terminals and pipes, and JSON for scripting.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

use crate::filter::HistoryFilter;
use crate::history::HistoryViewModel;
use crate::session::ExerciseSession;
use crate::stats::WeeklyAggregate;
use crate::util::format_thousands;

#[derive(Debug, Serialize)]
pub struct SessionEntry<'a> {
    #[serde(flatten)]
    pub session: &'a ExerciseSession,
    pub minutes: u32,
    pub date: Option<NaiveDate>,
    /// Clock time from the date label, `HH:MM`
    pub time: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HistoryReport<'a> {
    pub filter: HistoryFilter,
    pub apply_filter: bool,
    pub weekly: WeeklyAggregate,
    pub sessions: Vec<SessionEntry<'a>>,
}

impl<'a> HistoryReport<'a> {
    /// Snapshot of the view; relative dates are resolved against `today`
    pub fn new(view: &'a HistoryViewModel, today: NaiveDate) -> Self {
        let sessions = view
            .visible_sessions()
            .into_iter()
            .map(|session| {
                let relative = session.relative_date();
                SessionEntry {
                    session,
                    minutes: session.duration_minutes(),
                    date: relative.and_then(|d| d.resolve(today)),
                    time: relative
                        .and_then(|d| d.time)
                        .map(|t| t.format("%H:%M").to_string()),
                }
            })
            .collect();

        Self {
            filter: view.selected_filter(),
            apply_filter: view.applies_filter(),
            weekly: view.weekly_aggregate(),
            sessions,
        }
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "Riwayat Olahraga [{}]", self.filter);
        let _ = writeln!(
            out,
            "Minggu ini: {} sesi, {} menit, {} kalori",
            self.weekly.session_count,
            self.weekly.total_minutes,
            format_thousands(self.weekly.total_calories)
        );
        let _ = writeln!(out);

        let kind_width = self
            .sessions
            .iter()
            .map(|e| e.session.kind.width())
            .max()
            .unwrap_or(0);

        for entry in &self.sessions {
            let s = entry.session;
            let pad = " ".repeat(kind_width - s.kind.width());
            let _ = writeln!(
                out,
                "{:>3}  {}{}  {:<20}  {:>9}  {:>5} kcal  {:>3} bpm  {:>3}% O2  {}",
                s.id,
                s.kind,
                pad,
                s.date_label,
                s.duration_label,
                s.calories_burned,
                s.heart_rate_avg_bpm,
                s.oxygen_avg_percent,
                s.intensity
            );
        }

        if self.sessions.is_empty() {
            let _ = writeln!(out, "(tidak ada sesi)");
        }

        out
    }
}
