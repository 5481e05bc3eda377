//! Democracy Dividend tab: taxpayer receipt, budget game, governance heatmaps.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use sim_core::{GovernanceHeatmap, TaxpayerReceipt};

use crate::presentation::theme;
use crate::state::AppState;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(5)])
        .split(columns[0]);

    render_receipt(frame, left[0], state);
    render_heatmaps(frame, left[1], state);
    render_budget(frame, columns[1], state);
}

fn render_receipt(frame: &mut Frame, area: Rect, state: &AppState) {
    let panel = &state.dividend;
    let mut lines = vec![
        Line::from(vec![
            Span::raw("Annual income: ₹ "),
            Span::styled(
                if panel.income_input.is_empty() {
                    "_".to_string()
                } else {
                    panel.income_input.clone()
                },
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(Span::styled(
            "type digits, Enter: compute, Backspace: erase",
            theme::hint_style(),
        )),
        Line::default(),
    ];

    match &panel.receipt {
        Some(receipt) => {
            lines.push(Line::from(vec![
                Span::raw("Your share of one national election: "),
                Span::styled(
                    format!("₹ {}", receipt.share),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::from(format!(
                "That is {} day(s) of your income.",
                receipt.days_of_income
            )));
            lines.push(Line::from(format!(
                "Frequent cycles also lock ~{} days of administration.",
                TaxpayerReceipt::FREQUENT_ELECTION_LOCK_DAYS
            )));
        }
        None => lines.push(Line::from(Span::styled(
            "Enter your income to see your election receipt.",
            theme::hint_style(),
        ))),
    }

    let receipt = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Taxpayer Receipt "),
        );
    frame.render_widget(receipt, area);
}

fn render_budget(frame: &mut Frame, area: Rect, state: &AppState) {
    let panel = &state.dividend;
    let mut lines = vec![
        Line::from(vec![
            Span::raw("Wallet: "),
            Span::styled(
                format!("₹ {} Cr", panel.ledger.wallet()),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("  (spent ₹ {} Cr)", panel.ledger.total_spent())),
        ]),
        Line::default(),
    ];

    for (index, item) in panel.catalog.iter().enumerate() {
        let marker = if index == panel.selected { "> " } else { "  " };
        let owned = panel.ledger.count(&item.id);
        let mut style = if index == panel.selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        if !panel.ledger.can_afford(item) {
            style = style.fg(Color::DarkGray);
        }
        lines.push(Line::from(Span::styled(
            format!("{marker}{} - ₹ {} Cr  x{owned}", item.name, item.cost),
            style,
        )));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Up/Down: select | b: buy | x: reset",
        theme::hint_style(),
    )));

    let budget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" What Your Vote Buys "),
    );
    frame.render_widget(budget, area);
}

fn render_heatmaps(frame: &mut Frame, area: Rect, state: &AppState) {
    let panel = &state.dividend;
    let lines = vec![
        heatmap_line("Rolling cycle ", &panel.staggered),
        Line::from(format!(
            "  {} frozen months, ~{} governance days lost",
            panel.staggered.frozen_months(),
            panel.staggered.days_lost()
        )),
        Line::default(),
        heatmap_line("One window    ", &panel.simultaneous),
        Line::from(format!(
            "  {} frozen months, ~{} governance days lost",
            panel.simultaneous.frozen_months(),
            panel.simultaneous.days_lost()
        )),
    ];

    let heatmaps = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Five Years of Code-of-Conduct Freezes "),
    );
    frame.render_widget(heatmaps, area);
}

fn heatmap_line(label: &str, heatmap: &GovernanceHeatmap) -> Line<'static> {
    let mut spans = vec![Span::raw(label.to_string())];
    for frozen in heatmap.months() {
        spans.push(if *frozen {
            Span::styled("█", Style::default().fg(Color::Red))
        } else {
            Span::styled("░", Style::default().fg(Color::Green))
        });
    }
    Line::from(spans)
}
