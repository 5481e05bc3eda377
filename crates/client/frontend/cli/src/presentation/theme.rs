//! Color rules shared across widgets.

use ratatui::style::{Color, Modifier, Style};
use sim_core::Phase;

/// Style for a governance metric gauge by its current value.
pub fn metric_style(value: u8) -> Style {
    let color = if value > 70 {
        Color::Green
    } else if value < 30 {
        Color::Red
    } else {
        Color::Yellow
    };
    Style::default().fg(color)
}

/// Style for the phase badge in the header.
pub fn phase_style(phase: Phase) -> Style {
    match phase {
        Phase::Setup => Style::default().fg(Color::Cyan),
        Phase::Simulation => Style::default().fg(Color::Green),
        Phase::Event => Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD),
        Phase::EndGame => Style::default().fg(Color::Magenta),
    }
}

/// Style for a fake/authentic verdict line.
pub fn verdict_style(is_fake: bool) -> Style {
    if is_fake {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green)
    }
}

/// Dim style for hints and key legends.
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}
