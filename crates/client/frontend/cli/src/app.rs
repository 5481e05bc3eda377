//! Event loop tying runtime events, backend calls, and the terminal together.
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{self, Event as TermEvent};
use tokio::sync::broadcast::error::RecvError;
use tokio::time::{self, Duration};

use client_backend_core::{BackendApi, INDIAN_LANGUAGES, TranslationCache};
use client_frontend_core::{Frontend, Redraw};
use runtime::{Event, RuntimeHandle, SessionEvent, TickerEvent, Topic};
use sim_core::Phase;

use crate::config::CliConfig;
use crate::input::{InputHandler, KeyAction};
use crate::presentation::widgets::simulation::MODEL_CHOICES;
use crate::presentation::{terminal, ui};
use crate::state::{AppState, Tab};

/// Seed stream for the panel heatmap, independent of the session seed.
const HEATMAP_PANEL_SEED: u64 = 0x5eed_c0de;

/// Terminal frontend over the simulation runtime and verification backend.
pub struct CliFrontend {
    config: CliConfig,
    backend: Arc<dyn BackendApi>,
    cache: TranslationCache,
}

impl CliFrontend {
    pub fn new(config: CliConfig, backend: Arc<dyn BackendApi>) -> Self {
        Self {
            config,
            backend,
            cache: TranslationCache::new(),
        }
    }

    /// Translate UI-bound text into the active language via the memo cache.
    async fn localize(&self, text: &str, language: &str) -> String {
        self.cache
            .translate(self.backend.as_ref(), text, language)
            .await
    }

    async fn apply_runtime_event(&self, state: &mut AppState, event: Event) -> Redraw {
        match event {
            Event::Session(session_event) => {
                let redraw = state.session.apply_session(&session_event);
                if let SessionEvent::CrisisRaised { .. } = &session_event {
                    state.crisis_translation = self.translate_crisis(state).await;
                }
                if let SessionEvent::Restarted = &session_event {
                    state.crisis_translation = None;
                    state.dividend.reset_budget();
                }
                redraw
            }
            Event::Ticker(TickerEvent::Headline { year, headline }) => {
                let localized = self.localize(&headline, &state.language).await;
                state
                    .session
                    .apply_ticker(&TickerEvent::Headline {
                        year,
                        headline: localized,
                    })
            }
        }
    }

    async fn translate_crisis(&self, state: &AppState) -> Option<(String, String)> {
        if state.language == "en" {
            return None;
        }
        let crisis = state.session.crisis.as_ref()?;
        let title = self.localize(&crisis.title, &state.language).await;
        let description = self.localize(&crisis.description, &state.language).await;
        Some((title, description))
    }

    /// Handle one semantic key action. Returns `None` to quit.
    async fn handle_action(
        &self,
        state: &mut AppState,
        handle: &RuntimeHandle,
        action: KeyAction,
    ) -> Option<Redraw> {
        // The language overlay swallows navigation while open.
        if state.language_menu.open {
            return Some(self.handle_language_menu(state, action).await);
        }

        let redraw = match action {
            KeyAction::Quit => return None,
            KeyAction::NextTab => {
                state.tab = state.tab.next();
                state.status = None;
                Redraw::SESSION | Redraw::CIVIC
            }
            KeyAction::OpenLanguages => {
                state.language_menu.open = true;
                Redraw::STATUS
            }
            other => match state.tab {
                Tab::Simulation => self.handle_simulation_key(state, handle, other).await,
                Tab::Dividend => Self::handle_dividend_key(state, other),
                Tab::Margin => Self::handle_margin_key(state, other),
                Tab::Verify => self.handle_verify_key(state, other).await,
                Tab::News => self.handle_news_key(state, other).await,
            },
        };

        Some(redraw)
    }

    async fn handle_language_menu(&self, state: &mut AppState, action: KeyAction) -> Redraw {
        match action {
            KeyAction::Up => state.language_menu.select_prev(),
            KeyAction::Down => state.language_menu.select_next(),
            KeyAction::Cancel | KeyAction::OpenLanguages => state.language_menu.open = false,
            KeyAction::Confirm => {
                let language = INDIAN_LANGUAGES[state.language_menu.selected];
                state.language = language.code.to_string();
                state.language_menu.open = false;
                state.status = Some(format!("Language: {}", language.native));
                // Refetch language-dependent content lazily.
                state.news.fetched = false;
                state.news.items.clear();
                state.crisis_translation = self.translate_crisis(state).await;
            }
            _ => return Redraw::empty(),
        }
        Redraw::SESSION | Redraw::STATUS
    }

    async fn handle_simulation_key(
        &self,
        state: &mut AppState,
        handle: &RuntimeHandle,
        action: KeyAction,
    ) -> Redraw {
        match (state.session.phase, action) {
            (Phase::Setup, KeyAction::Up) => {
                state.model_cursor =
                    (state.model_cursor + MODEL_CHOICES.len() - 1) % MODEL_CHOICES.len();
                Redraw::SESSION
            }
            (Phase::Setup, KeyAction::Down) => {
                state.model_cursor = (state.model_cursor + 1) % MODEL_CHOICES.len();
                Redraw::SESSION
            }
            (Phase::Setup, KeyAction::Confirm) => {
                let (model, label, _) = MODEL_CHOICES[state.model_cursor];
                match handle.select_model(model).await {
                    Ok(()) => state.status = Some(format!("Governing under {label}")),
                    Err(err) => state.status = Some(err.to_string()),
                }
                Redraw::SESSION | Redraw::STATUS
            }
            (Phase::Event, KeyAction::Char(c @ ('1' | '2'))) => {
                let index = (c as usize) - ('1' as usize);
                if let Err(err) = handle.resolve_choice(index).await {
                    state.status = Some(err.to_string());
                }
                state.crisis_translation = None;
                Redraw::SESSION | Redraw::STATUS
            }
            (Phase::EndGame, KeyAction::Restart) => {
                if let Err(err) = handle.restart().await {
                    state.status = Some(err.to_string());
                }
                Redraw::SESSION | Redraw::STATUS
            }
            _ => Redraw::empty(),
        }
    }

    fn handle_dividend_key(state: &mut AppState, action: KeyAction) -> Redraw {
        match action {
            KeyAction::Char(digit) => {
                state.dividend.push_digit(digit);
                Redraw::CIVIC
            }
            KeyAction::Backspace => {
                state.dividend.pop_digit();
                Redraw::CIVIC
            }
            KeyAction::Confirm => {
                state.dividend.submit_income();
                Redraw::CIVIC
            }
            KeyAction::Up => {
                state.dividend.select_prev();
                Redraw::CIVIC
            }
            KeyAction::Down => {
                state.dividend.select_next();
                Redraw::CIVIC
            }
            KeyAction::Buy => {
                match state.dividend.buy_selected() {
                    Ok(()) => state.status = None,
                    Err(err) => state.status = Some(err.to_string()),
                }
                Redraw::CIVIC | Redraw::STATUS
            }
            KeyAction::ResetBudget => {
                state.dividend.reset_budget();
                Redraw::CIVIC
            }
            _ => Redraw::empty(),
        }
    }

    fn handle_margin_key(state: &mut AppState, action: KeyAction) -> Redraw {
        match action {
            KeyAction::Up => {
                state.margin.select_prev();
                Redraw::CIVIC
            }
            KeyAction::Down => {
                state.margin.select_next();
                Redraw::CIVIC
            }
            KeyAction::Left => {
                state.margin.lower_percent();
                Redraw::CIVIC
            }
            KeyAction::Right => {
                state.margin.raise_percent();
                Redraw::CIVIC
            }
            _ => Redraw::empty(),
        }
    }

    async fn handle_verify_key(&self, state: &mut AppState, action: KeyAction) -> Redraw {
        match action {
            KeyAction::EditField => {
                state.verify.editing = true;
                Redraw::CIVIC
            }
            KeyAction::Cancel => {
                state.verify.editing = false;
                Redraw::CIVIC
            }
            KeyAction::Char(c) if state.verify.editing => {
                state.verify.input.push(c);
                Redraw::CIVIC
            }
            KeyAction::Backspace => {
                state.verify.input.pop();
                Redraw::CIVIC
            }
            KeyAction::Confirm => {
                self.run_verification(state).await;
                Redraw::CIVIC | Redraw::STATUS
            }
            _ => Redraw::empty(),
        }
    }

    async fn run_verification(&self, state: &mut AppState) {
        let input = state.verify.input.trim().to_string();
        // Submission is disabled on empty input.
        if input.is_empty() {
            return;
        }
        state.verify.editing = false;
        state.verify.error = None;
        state.verify.report = None;
        state.verify.youtube = None;

        if input.contains("youtube.com/") || input.contains("youtu.be/") {
            match self.backend.detect_youtube(&input).await {
                Ok(verdict) => state.verify.youtube = Some(verdict),
                Err(err) => state.verify.error = Some(err.to_string()),
            }
        } else {
            let language = (state.language != "en").then_some(state.language.as_str());
            match self.backend.analyze_text(&input, language).await {
                Ok(report) => state.verify.report = Some(report),
                Err(err) => state.verify.error = Some(err.to_string()),
            }
        }
    }

    async fn handle_news_key(&self, state: &mut AppState, action: KeyAction) -> Redraw {
        match action {
            KeyAction::Refresh => {
                self.fetch_news(state).await;
                Redraw::CIVIC
            }
            _ => Redraw::empty(),
        }
    }

    async fn fetch_news(&self, state: &mut AppState) {
        match self.backend.latest_news(&state.language).await {
            Ok(items) => {
                state.news.items = items;
                state.news.error = None;
                state.news.fetched = true;
            }
            Err(err) => {
                state.news.error = Some(err.to_string());
                state.news.fetched = false;
            }
        }
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
        let mut term = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let mut session_rx = handle.subscribe(Topic::Session);
        let mut ticker_rx = handle.subscribe(Topic::Ticker);

        let initial = handle.query_state().await?;
        let mut state = AppState::new(
            &initial,
            self.config.language.clone(),
            &runtime::StdRngOracle,
            HEATMAP_PANEL_SEED,
        );

        let frame_interval = Duration::from_millis(self.config.frame_interval_ms);
        ui::render(&mut term, &state)?;

        loop {
            let mut redraw = Redraw::empty();

            tokio::select! {
                result = session_rx.recv() => match result {
                    Ok(event) => redraw |= self.apply_runtime_event(&mut state, event).await,
                    Err(RecvError::Closed) => {
                        tracing::warn!("session stream closed");
                        break;
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "session stream lagged, resyncing from state");
                        let snapshot = handle.query_state().await?;
                        state.session =
                            client_frontend_core::SessionView::from_state(&snapshot);
                        redraw |= Redraw::SESSION;
                    }
                },
                result = ticker_rx.recv() => match result {
                    Ok(event) => redraw |= self.apply_runtime_event(&mut state, event).await,
                    Err(RecvError::Closed) => {
                        tracing::warn!("ticker stream closed");
                        break;
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::debug!(skipped, "ticker stream lagged, headlines dropped");
                    }
                },
                _ = time::sleep(frame_interval) => {
                    while event::poll(Duration::from_millis(0))? {
                        if let TermEvent::Key(key) = event::read()? {
                            if let Some(action) = InputHandler::map(key, state.verify.editing
                                && state.tab == Tab::Verify)
                            {
                                match self.handle_action(&mut state, &handle, action).await {
                                    Some(flags) => redraw |= flags,
                                    None => {
                                        tracing::info!("quit requested");
                                        return Ok(());
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if !redraw.is_empty() {
                ui::render(&mut term, &state)?;
            }
        }

        Ok(())
    }
}
