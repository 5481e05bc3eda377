//! Margin of Error tab: what non-voters could have changed.

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
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    render_records(frame, columns[0], state);
    render_projection(frame, columns[1], state);
}

fn render_records(frame: &mut Frame, area: Rect, state: &AppState) {
    let panel = &state.margin;
    let mut lines = Vec::new();

    for (index, record) in panel.records.iter().enumerate() {
        let marker = if index == panel.selected { "> " } else { "  " };
        let style = if index == panel.selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(
            format!("{marker}{}", record.name),
            style,
        )));
        lines.push(Line::from(Span::styled(
            format!("    margin {}", record.margin()),
            theme::hint_style(),
        )));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Up/Down: constituency",
        theme::hint_style(),
    )));

    let records = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Constituencies "),
    );
    frame.render_widget(records, area);
}

fn render_projection(frame: &mut Frame, area: Rect, state: &AppState) {
    let panel = &state.margin;
    let Some(report) = panel.report() else {
        return;
    };

    let verdict = if report.flips {
        Span::styled(
            "THE SEAT FLIPS",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            format!("short by {} votes", report.shortfall()),
            Style::default().fg(Color::Yellow),
        )
    };

    let lines = vec![
        Line::from(vec![
            Span::raw("Victory margin: "),
            Span::styled(
                report.margin.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("People who stayed home: {}", report.non_voters)),
        Line::default(),
        Line::from(vec![
            Span::raw("If "),
            Span::styled(
                format!("{}%", panel.mobilized_percent),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" of them had voted together: "),
            Span::styled(
                report.projected_votes.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" votes"),
        ]),
        Line::default(),
        Line::from(verdict),
        Line::default(),
        Line::from(format!(
            "Non-voters are {:.1}x the winning margin here.",
            report.power_ratio
        )),
        Line::default(),
        Line::from(Span::styled(
            "Left/Right: adjust the mobilized share",
            theme::hint_style(),
        )),
    ];

    let projection = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" The Power of Staying Home "),
        );
    frame.render_widget(projection, area);
}
