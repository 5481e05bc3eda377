//! Simulation tab: model picker, metrics dashboard, crisis modal, end screen.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap},
};

use sim_core::{Metric, Phase, PolicyModel, archetype::treasury_label};

use crate::presentation::theme;
use crate::presentation::widgets::centered_rect;
use crate::state::AppState;

/// Selectable models with the labels shown in SETUP.
pub const MODEL_CHOICES: [(PolicyModel, &str, &str); 3] = [
    (
        PolicyModel::Onoe,
        "One Nation, One Election",
        "Synchronized national and state polls every five years.",
    ),
    (
        PolicyModel::Cluster,
        "Clustered Elections",
        "States vote in grouped windows twice per cycle.",
    ),
    (
        PolicyModel::Rolling,
        "Rolling Elections",
        "The status quo: some state is always voting.",
    ),
];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    match state.session.phase {
        Phase::Setup => render_setup(frame, area, state),
        Phase::EndGame => render_end_screen(frame, area, state),
        _ => render_dashboard(frame, area, state),
    }
}

fn render_setup(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Choose an electoral model to govern for fifteen years",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];

    for (index, (_, label, blurb)) in MODEL_CHOICES.iter().enumerate() {
        let marker = if index == state.model_cursor {
            "> "
        } else {
            "  "
        };
        let style = if index == state.model_cursor {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(format!("{marker}{label}"), style)));
        lines.push(Line::from(Span::styled(
            format!("    {blurb}"),
            theme::hint_style(),
        )));
        lines.push(Line::default());
    }

    lines.push(Line::from(Span::styled(
        "Up/Down: highlight | Enter: start",
        theme::hint_style(),
    )));

    let setup = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Setup "));
    frame.render_widget(setup, area);
}

fn render_dashboard(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // year + model
            Constraint::Length(8), // metric gauges
            Constraint::Length(5), // ticker
            Constraint::Min(3),    // decision history
        ])
        .split(area);

    let model = state
        .session
        .model
        .map(|m| m.to_string())
        .unwrap_or_default();
    let year_line = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" Year {} / 15 ", state.session.year),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {model} "), Style::default().fg(Color::Cyan)),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(year_line, chunks[0]);

    render_gauges(frame, chunks[1], state);

    let ticker_lines: Vec<Line> = state
        .session
        .ticker
        .iter()
        .map(|(year, headline)| {
            Line::from(vec![
                Span::styled(format!("Y{year} "), theme::hint_style()),
                Span::raw(headline.clone()),
            ])
        })
        .collect();
    let ticker = Paragraph::new(ticker_lines)
        .block(Block::default().borders(Borders::ALL).title(" Newswire "));
    frame.render_widget(ticker, chunks[2]);

    let history_lines: Vec<Line> = state
        .session
        .history
        .iter()
        .rev()
        .map(|entry| Line::from(entry.to_string()))
        .collect();
    let history = Paragraph::new(history_lines)
        .block(Block::default().borders(Borders::ALL).title(" Decisions "));
    frame.render_widget(history, chunks[3]);
}

fn render_gauges(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default().borders(Borders::ALL).title(" Governance ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1); 4])
        .split(inner);

    let metrics = &state.session.metrics;
    let values = [
        (Metric::Fiscal, metrics.fiscal),
        (Metric::Stability, metrics.stability),
        (Metric::Accountability, metrics.accountability),
        (Metric::Federalism, metrics.federalism),
    ];

    for (row, (metric, value)) in rows.iter().zip(values) {
        let gauge = Gauge::default()
            .gauge_style(theme::metric_style(value))
            .ratio(f64::from(value) / 100.0)
            .label(format!("{metric}: {value}"));
        frame.render_widget(gauge, *row);
    }
}

fn render_end_screen(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(archetype) = state.session.archetype else {
        return;
    };

    let lines = vec![
        Line::from(Span::styled(
            "Fifteen years of governance complete",
            theme::hint_style(),
        )),
        Line::default(),
        Line::from(Span::styled(
            archetype.title(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(archetype.description()),
        Line::default(),
        Line::from(vec![
            Span::raw("National treasury: "),
            Span::styled(
                treasury_label(&state.session.metrics),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::default(),
        Line::from(Span::styled("r: govern again", theme::hint_style())),
    ];

    let screen = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Legacy "));
    frame.render_widget(screen, area);
}

/// Crisis modal shown while the clock is paused in EVENT.
pub fn render_crisis_modal(frame: &mut Frame, state: &AppState) {
    let Some(crisis) = &state.session.crisis else {
        return;
    };

    let (title, description) = match &state.crisis_translation {
        Some((title, description)) => (title.as_str(), description.as_str()),
        None => (crisis.title.as_str(), crisis.description.as_str()),
    };

    let area = centered_rect(frame.area(), 60, 14);
    frame.render_widget(Clear, area);

    let mut lines = vec![
        Line::from(Span::styled(
            format!("Year {}: {title}", crisis.year),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(description.to_string()),
        Line::default(),
    ];
    for (index, choice) in crisis.choices.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}] ", index + 1),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(choice.label.clone()),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "The clock is paused until you decide.",
        theme::hint_style(),
    )));

    let modal = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Crisis "));
    frame.render_widget(modal, area);
}
