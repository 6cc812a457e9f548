use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::palette::{
    intensity_color, CALORIES, HEART_RATE, ICON_BLUE, MUTED, NEUTRAL_GRAY, OXYGEN, SKY_BLUE,
    TITLE_BLUE,
};
use crate::session::ExerciseSession;

/// Rows taken by one card, borders included
pub const CARD_HEIGHT: u16 = 6;

const STAT_GAP: &str = "   ";

/// Pure presenter for one session card's inner lines
pub fn present_card(session: &ExerciseSession, inner_width: u16) -> Vec<Line<'static>> {
    let color = intensity_color(&session.intensity);

    let glyph = session.icon.glyph();
    let badge = format!(" {} ", session.intensity);
    let used = glyph.width() + 1 + session.kind.width() + badge.width();
    let padding = (inner_width as usize).saturating_sub(used).max(1);

    let header = Line::from(vec![
        Span::styled(glyph.to_string(), Style::default().fg(ICON_BLUE)),
        Span::raw(" "),
        Span::styled(
            session.kind.clone(),
            Style::default().fg(TITLE_BLUE).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(padding)),
        Span::styled(
            badge,
            Style::default()
                .fg(color)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        ),
    ]);

    let date = Line::from(Span::styled(
        session.date_label.clone(),
        Style::default().fg(NEUTRAL_GRAY),
    ));

    let duration = Line::from(Span::styled(
        format!("⏱ {}", session.duration_label),
        Style::default().fg(MUTED),
    ));

    let stats = Line::from(vec![
        Span::styled(
            format!("🔥 {} kcal", session.calories_burned),
            Style::default().fg(CALORIES).add_modifier(Modifier::BOLD),
        ),
        Span::raw(STAT_GAP),
        Span::styled(
            format!("♥ {} bpm", session.heart_rate_avg_bpm),
            Style::default().fg(HEART_RATE).add_modifier(Modifier::BOLD),
        ),
        Span::raw(STAT_GAP),
        Span::styled(
            format!("O2 {}%", session.oxygen_avg_percent),
            Style::default().fg(OXYGEN).add_modifier(Modifier::BOLD),
        ),
    ]);

    vec![header, date, duration, stats]
}

pub fn render_card(session: &ExerciseSession, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(SKY_BLUE));
    let inner = block.inner(area);
    block.render(area, buf);

    Paragraph::new(present_card(session, inner.width)).render(inner, buf);
}
