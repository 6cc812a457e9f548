pub mod chips;
pub mod session_card;

use itertools::Itertools;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Widget},
};

use crate::app::App;
use crate::palette::{DEEP_SKY_BLUE, GREEN, ICON_BLUE, NEUTRAL_GRAY, ORANGE, SKY_BLUE};
use crate::stats::{SessionAverages, WeeklyAggregate};
use crate::util::format_thousands;
use session_card::{render_card, CARD_HEIGHT};

const TITLE: &str = "Riwayat Olahraga";
const SUMMARY_TITLE: &str = " Statistik Minggu Ini ";
const EMPTY_MESSAGE: &str = "Belum ada sesi untuk filter ini.";
const KEY_HINTS: &str = "←/→ filter  ↑/↓ gulir  q keluar";

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title bar
                Constraint::Length(4), // Weekly summary card
                Constraint::Length(1), // Filter chips
                Constraint::Min(0),    // Session cards
                Constraint::Length(1), // Footer
            ])
            .split(area);

        render_title(chunks[0], buf);
        render_summary(&self.view.weekly_aggregate(), chunks[1], buf);

        Paragraph::new(chips::chip_line(
            self.view.selected_filter(),
            self.view.applies_filter(),
        ))
        .render(chunks[2].inner(Margin::new(1, 0)), buf);

        render_sessions(self, chunks[3].inner(Margin::new(1, 0)), buf);

        let visible = self.view.visible_sessions().len();
        Paragraph::new(footer_text(visible, &self.view.visible_averages()))
            .style(
                Style::default()
                    .fg(NEUTRAL_GRAY)
                    .add_modifier(Modifier::ITALIC),
            )
            .alignment(Alignment::Center)
            .render(chunks[4], buf);
    }
}

fn render_title(area: Rect, buf: &mut Buffer) {
    Paragraph::new(Line::from(vec![Span::raw("← "), Span::raw(TITLE)]))
        .block(Block::default().padding(Padding::new(1, 1, 1, 0)))
        .style(
            Style::default()
                .bg(SKY_BLUE)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .render(area, buf);
}

fn render_summary(aggregate: &WeeklyAggregate, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(SKY_BLUE))
        .title(Span::styled(
            SUMMARY_TITLE,
            Style::default()
                .fg(DEEP_SKY_BLUE)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    block.render(area, buf);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(inner);

    let items = [
        (aggregate.session_count.to_string(), "Sesi", GREEN),
        (aggregate.total_minutes.to_string(), "Menit", ICON_BLUE),
        (format_thousands(aggregate.total_calories), "Kalori", ORANGE),
    ];

    for ((value, label, color), column) in items.into_iter().zip(columns.iter()) {
        Paragraph::new(vec![
            Line::from(Span::styled(
                value,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(label, Style::default().fg(NEUTRAL_GRAY))),
        ])
        .alignment(Alignment::Center)
        .render(*column, buf);
    }
}

fn render_sessions(app: &App, area: Rect, buf: &mut Buffer) {
    let visible = app.view.visible_sessions();

    if visible.is_empty() {
        Paragraph::new(EMPTY_MESSAGE)
            .style(Style::default().fg(NEUTRAL_GRAY))
            .alignment(Alignment::Center)
            .render(area, buf);
        return;
    }

    let offset = app.scroll_offset.min(visible.len() - 1);
    let mut y = area.y;

    for session in visible.iter().skip(offset) {
        if y + CARD_HEIGHT > area.bottom() {
            break;
        }
        render_card(session, Rect::new(area.x, y, area.width, CARD_HEIGHT), buf);
        y += CARD_HEIGHT;
    }
}

fn footer_text(visible: usize, averages: &SessionAverages) -> String {
    let mut parts = vec![format!("{visible} sesi")];
    if let Some(bpm) = averages.heart_rate_bpm {
        parts.push(format!("♥ {bpm:.0} bpm"));
    }
    if let Some(o2) = averages.oxygen_percent {
        parts.push(format!("O2 {o2:.1}%"));
    }
    parts.push(KEY_HINTS.to_string());
    parts.iter().join(" · ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::HistoryFilter;
    use crate::history::{HistoryViewModel, ViewOptions};
    use crate::repository::InMemoryRepository;

    fn create_test_app() -> App {
        let view =
            HistoryViewModel::initialize(&InMemoryRepository::seed(), ViewOptions::default())
                .unwrap();
        App::new(view)
    }

    fn render_to_string(app: &App, width: u16, height: u16) -> String {
        let area = Rect::new(0, 0, width, height);
        let mut buffer = Buffer::empty(area);

        app.render(area, &mut buffer);

        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .join("\n")
    }

    #[test]
    fn test_renders_title_summary_and_chips() {
        let app = create_test_app();
        let rendered = render_to_string(&app, 70, 30);

        assert!(rendered.contains("Riwayat Olahraga"));
        assert!(rendered.contains("Statistik Minggu Ini"));
        assert!(rendered.contains("1,550"));
        assert!(rendered.contains("220"));
        assert!(rendered.contains("Kalori"));
        assert!(rendered.contains("Semua"));
        assert!(rendered.contains("Bulan ini"));
    }

    #[test]
    fn test_renders_cards_that_fit() {
        let app = create_test_app();
        // 3 + 4 + 1 + footer leaves 21 rows: three full cards
        let rendered = render_to_string(&app, 70, 30);

        assert!(rendered.contains("Lari Pagi"));
        assert!(rendered.contains("Yoga"));
        assert!(rendered.contains("Bersepeda"));
        assert!(!rendered.contains("Push-up"));
    }

    #[test]
    fn test_scroll_offset_moves_window() {
        let mut app = create_test_app();
        app.scroll_offset = 3;
        let rendered = render_to_string(&app, 70, 30);

        assert!(!rendered.contains("Lari Pagi"));
        assert!(rendered.contains("Push-up"));
        assert!(rendered.contains("Jalan Santai"));
    }

    #[test]
    fn test_today_filter_shows_one_card() {
        let mut app = create_test_app();
        app.select_filter(HistoryFilter::Today);
        let rendered = render_to_string(&app, 70, 30);

        assert!(rendered.contains("Lari Pagi"));
        assert!(!rendered.contains("Yoga"));
        assert!(rendered.contains("1 sesi"));
        // weekly card is independent of the chip
        assert!(rendered.contains("1,550"));
    }

    #[test]
    fn test_empty_list_message() {
        let view = HistoryViewModel::initialize(
            &InMemoryRepository::new(Vec::new()),
            ViewOptions::default(),
        )
        .unwrap();
        let rendered = render_to_string(&App::new(view), 70, 20);
        assert!(rendered.contains(EMPTY_MESSAGE));
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let app = create_test_app();
        let _ = render_to_string(&app, 10, 5);
    }

    #[test]
    fn test_footer_text() {
        let averages = SessionAverages {
            heart_rate_bpm: Some(120.4),
            oxygen_percent: Some(96.83),
        };
        assert_eq!(
            footer_text(6, &averages),
            format!("6 sesi · ♥ 120 bpm · O2 96.8% · {KEY_HINTS}")
        );
        assert_eq!(
            footer_text(0, &SessionAverages::default()),
            format!("0 sesi · {KEY_HINTS}")
        );
    }
}
