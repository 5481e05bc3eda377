//! News tab: curated civic headlines from the backend.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::presentation::theme;
use crate::state::AppState;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let panel = &state.news;
    let mut lines = Vec::new();

    if let Some(error) = &panel.error {
        lines.push(Line::from(Span::styled(
            format!("Could not fetch news: {error}"),
            Style::default().fg(Color::Red),
        )));
    } else if panel.items.is_empty() {
        lines.push(Line::from(Span::styled(
            "Press n to fetch the latest civic news.",
            theme::hint_style(),
        )));
    } else {
        for item in &panel.items {
            lines.push(Line::from(Span::styled(
                item.headline.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(item.summary.clone()));
            lines.push(Line::from(Span::styled(
                format!("{} | {} | {}", item.source, item.date, item.category),
                theme::hint_style(),
            )));
            lines.push(Line::default());
        }
    }

    lines.push(Line::from(Span::styled("n: refresh", theme::hint_style())));

    let news = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Civic News "));
    frame.render_widget(news, area);
}
