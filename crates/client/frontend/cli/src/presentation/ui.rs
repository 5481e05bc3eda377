//! Main render entry point composing the tabbed portal UI.
use anyhow::Result;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::presentation::{terminal::Tui, widgets};
use crate::state::{AppState, Tab};
use sim_core::Phase;

/// Render one frame of the portal.
pub fn render(terminal: &mut Tui, state: &AppState) -> Result<()> {
    terminal.draw(|frame| {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header with tabs
                Constraint::Min(10),   // active tab body
                Constraint::Length(1), // status line
            ])
            .split(frame.area());

        widgets::header::render(frame, chunks[0], state);

        match state.tab {
            Tab::Simulation => widgets::simulation::render(frame, chunks[1], state),
            Tab::Dividend => widgets::dividend::render(frame, chunks[1], state),
            Tab::Margin => widgets::margin::render(frame, chunks[1], state),
            Tab::Verify => widgets::verify::render(frame, chunks[1], state),
            Tab::News => widgets::news::render(frame, chunks[1], state),
        }

        widgets::header::render_status(frame, chunks[2], state);

        // Overlays sit on top of whatever tab is active.
        if state.session.phase == Phase::Event && state.tab == Tab::Simulation {
            widgets::simulation::render_crisis_modal(frame, state);
        }
        if state.language_menu.open {
            widgets::header::render_language_menu(frame, state);
        }
    })?;

    Ok(())
}
