//! Header bar, status line, and language overlay.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use client_backend_core::INDIAN_LANGUAGES;

use crate::presentation::theme;
use crate::presentation::widgets::centered_rect;
use crate::state::{AppState, Tab};

/// Render the tab bar with the phase badge and active language.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = vec![Span::styled(
        " S.A.T.Y.A ",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )];

    for tab in Tab::ALL {
        let style = if tab == state.tab {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::raw(" "));
        spans.push(Span::styled(format!(" {} ", tab.title()), style));
    }

    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        format!("[{}]", state.session.phase),
        theme::phase_style(state.session.phase),
    ));

    let native = INDIAN_LANGUAGES
        .iter()
        .find(|lang| lang.code == state.language)
        .map(|lang| lang.native)
        .unwrap_or("English");
    spans.push(Span::raw("  "));
    spans.push(Span::styled(native, Style::default().fg(Color::LightBlue)));

    let header = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Portal "));
    frame.render_widget(header, area);
}

/// Render the one-line status strip at the bottom.
pub fn render_status(frame: &mut Frame, area: Rect, state: &AppState) {
    let text = match &state.status {
        Some(status) => Line::from(Span::styled(
            status.clone(),
            Style::default().fg(Color::Yellow),
        )),
        None => Line::from(Span::styled(
            "Tab: switch panel | l: language | q: quit",
            theme::hint_style(),
        )),
    };
    frame.render_widget(Paragraph::new(text), area);
}

/// Render the language picker overlay.
pub fn render_language_menu(frame: &mut Frame, state: &AppState) {
    let area = centered_rect(frame.area(), 30, INDIAN_LANGUAGES.len() as u16 + 2);
    frame.render_widget(Clear, area);

    let items: Vec<ListItem> = INDIAN_LANGUAGES
        .iter()
        .map(|lang| ListItem::new(format!("{} ({})", lang.native, lang.name)))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Language "))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.language_menu.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}
