//! Verify tab: text and YouTube-link misinformation checks.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::presentation::theme;
use crate::state::AppState;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(6)])
        .split(area);

    render_input(frame, chunks[0], state);
    render_report(frame, chunks[1], state);
}

fn render_input(frame: &mut Frame, area: Rect, state: &AppState) {
    let panel = &state.verify;
    let cursor = if panel.editing { "▏" } else { "" };
    let lines = vec![
        Line::from(vec![
            Span::raw("Claim or YouTube link: "),
            Span::styled(
                format!("{}{cursor}", panel.input),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(Span::styled(
            if panel.editing {
                "Enter: check | Esc: stop editing"
            } else {
                "i: edit | Enter: check"
            },
            theme::hint_style(),
        )),
    ];

    let input = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Verify "));
    frame.render_widget(input, area);
}

fn render_report(frame: &mut Frame, area: Rect, state: &AppState) {
    let panel = &state.verify;
    let mut lines = Vec::new();

    if let Some(error) = &panel.error {
        lines.push(Line::from(Span::styled(
            format!("Check failed: {error}"),
            Style::default().fg(Color::Red),
        )));
    } else if let Some(verdict) = &panel.youtube {
        lines.push(Line::from(vec![
            Span::raw("Video verdict: "),
            Span::styled(
                if verdict.is_fake {
                    "LIKELY FAKE"
                } else {
                    "NO MANIPULATION FOUND"
                },
                theme::verdict_style(verdict.is_fake),
            ),
        ]));
        lines.push(Line::from(format!(
            "Confidence: {:.0}%",
            verdict.confidence * 100.0
        )));
    } else if let Some(report) = &panel.report {
        lines.push(Line::from(vec![
            Span::raw("Verdict: "),
            Span::styled(
                if report.is_fake {
                    "LIKELY MISINFORMATION"
                } else {
                    "LOOKS CREDIBLE"
                },
                theme::verdict_style(report.is_fake),
            ),
            Span::raw(format!("  ({:.0}% confidence)", report.confidence * 100.0)),
        ]));
        lines.push(Line::default());
        lines.push(Line::from(report.explanation.reason.clone()));
        if !report.explanation.highlighted_words.is_empty() {
            lines.push(Line::from(vec![
                Span::raw("Flagged phrases: "),
                Span::styled(
                    report.explanation.highlighted_words.join(", "),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
        }
        if !report.context_links.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "Context:",
                Style::default().add_modifier(Modifier::BOLD),
            )));
            for link in &report.context_links {
                lines.push(Line::from(format!("  {} - {}", link.title, link.url)));
            }
        }
    } else {
        lines.push(Line::from(Span::styled(
            "Paste a claim to check it against the verification service.",
            theme::hint_style(),
        )));
    }

    let report = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Report "));
    frame.render_widget(report, area);
}
