use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::filter::HistoryFilter;
use crate::palette::{DEEP_SKY_BLUE, NEUTRAL_GRAY, SKY_BLUE};

/// Shown after the chips when the selection does not narrow the list
pub const RECORD_ONLY_NOTE: &str = "  (tanpa filter)";

/// Filter chips as one line, the selected chip highlighted
pub fn chip_line(selected: HistoryFilter, applies_filter: bool) -> Line<'static> {
    let selected_style = Style::default()
        .bg(SKY_BLUE)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    let idle_style = Style::default().fg(DEEP_SKY_BLUE);

    let mut spans = Vec::with_capacity(HistoryFilter::ALL.len() * 2 + 1);
    for (idx, filter) in HistoryFilter::ALL.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" "));
        }
        let style = if *filter == selected {
            selected_style
        } else {
            idle_style
        };
        spans.push(Span::styled(format!(" {} ", filter), style));
    }

    if !applies_filter {
        spans.push(Span::styled(
            RECORD_ONLY_NOTE,
            Style::default()
                .fg(NEUTRAL_GRAY)
                .add_modifier(Modifier::ITALIC),
        ));
    }

    Line::from(spans)
}
