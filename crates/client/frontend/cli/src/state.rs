//! Screen state owned by the CLI event loop.

use client_backend_core::{AnalysisReport, INDIAN_LANGUAGES, NewsItem, YoutubeVerdict};
use client_frontend_core::{DividendPanel, MarginPanel, SessionView};
use sim_core::{RngOracle, SimState};

/// Top-level portal tabs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Simulation,
    Dividend,
    Margin,
    Verify,
    News,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Simulation,
        Tab::Dividend,
        Tab::Margin,
        Tab::Verify,
        Tab::News,
    ];

    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|tab| *tab == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub const fn title(self) -> &'static str {
        match self {
            Tab::Simulation => "Simulation",
            Tab::Dividend => "Dividend",
            Tab::Margin => "Margin",
            Tab::Verify => "Verify",
            Tab::News => "News",
        }
    }
}

/// Misinformation-check panel state.
pub struct VerifyPanel {
    pub input: String,
    /// True while the text field captures keystrokes.
    pub editing: bool,
    pub report: Option<AnalysisReport>,
    pub youtube: Option<YoutubeVerdict>,
    pub error: Option<String>,
}

impl VerifyPanel {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            editing: false,
            report: None,
            youtube: None,
            error: None,
        }
    }
}

/// Civic news feed state.
pub struct NewsPanel {
    pub items: Vec<NewsItem>,
    pub error: Option<String>,
    /// Set after the first fetch; cleared when the language changes.
    pub fetched: bool,
}

impl NewsPanel {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            error: None,
            fetched: false,
        }
    }
}

/// Overlay for picking the interface language.
pub struct LanguageMenu {
    pub open: bool,
    pub selected: usize,
}

impl LanguageMenu {
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % INDIAN_LANGUAGES.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = (self.selected + INDIAN_LANGUAGES.len() - 1) % INDIAN_LANGUAGES.len();
    }
}

/// Everything the renderer needs, updated by runtime events and input.
pub struct AppState {
    pub tab: Tab,
    pub session: SessionView,
    pub dividend: DividendPanel,
    pub margin: MarginPanel,
    pub verify: VerifyPanel,
    pub news: NewsPanel,
    pub language: String,
    pub language_menu: LanguageMenu,
    /// Highlighted model in the SETUP screen (index into the model list).
    pub model_cursor: usize,
    /// One-line inline message (errors, confirmations).
    pub status: Option<String>,
    /// Crisis title/description translated into the active language.
    pub crisis_translation: Option<(String, String)>,
}

impl AppState {
    pub fn new(initial: &SimState, language: String, rng: &dyn RngOracle, seed: u64) -> Self {
        let menu_selected = INDIAN_LANGUAGES
            .iter()
            .position(|lang| lang.code == language)
            .unwrap_or(0);

        Self {
            tab: Tab::Simulation,
            session: SessionView::from_state(initial),
            dividend: DividendPanel::new(rng, seed),
            margin: MarginPanel::new(),
            verify: VerifyPanel::new(),
            news: NewsPanel::new(),
            language,
            language_menu: LanguageMenu {
                open: false,
                selected: menu_selected,
            },
            model_cursor: 0,
            status: None,
            crisis_translation: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullRng;

    impl RngOracle for NullRng {
        fn next_u32(&self, _seed: u64) -> u32 {
            0
        }
    }

    #[test]
    fn tabs_cycle_through_all_five() {
        let mut tab = Tab::Simulation;
        for _ in 0..Tab::ALL.len() {
            tab = tab.next();
        }
        assert_eq!(tab, Tab::Simulation);
    }

    #[test]
    fn language_menu_starts_on_the_configured_language() {
        let state = AppState::new(&SimState::new(), "ta".to_string(), &NullRng, 0);
        assert_eq!(INDIAN_LANGUAGES[state.language_menu.selected].code, "ta");

        let fallback = AppState::new(&SimState::new(), "xx".to_string(), &NullRng, 0);
        assert_eq!(fallback.language_menu.selected, 0);
    }
}
