//! Application state and core logic

use crate::config::QuoteConfig;
use crate::state::{AppState, Banner, Form, QuoteField, SubmitState};
use crate::webhook::{QuoteSender, SubmitError, WebhookClient};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::oneshot::{self, error::TryRecvError};

type Outcome = Result<(), SubmitError>;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Delivers quote requests to the webhook
    sender: Arc<dyn QuoteSender>,
    /// Result of the request in flight, if any
    pending: Option<oneshot::Receiver<Outcome>>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance posting to the configured webhook
    pub fn new(config: &QuoteConfig) -> Result<Self> {
        let url = config.webhook_url();
        let client = WebhookClient::new(url.clone(), config.request_timeout())?;
        tracing::info!("Quote webhook: {}", client.url());
        Ok(Self::with_sender(Arc::new(client), url))
    }

    pub fn with_sender(sender: Arc<dyn QuoteSender>, webhook_url: impl Into<String>) -> Self {
        Self {
            state: AppState::new(webhook_url),
            sender,
            pending: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Handle a key press on the quote form
    pub fn handle_key(&mut self, key: KeyEvent) {
        let on_submit_row = self.state.form.is_submit_row_active();
        let on_choice = self.state.form.active().is_some_and(QuoteField::is_choice);

        match key.code {
            KeyCode::Esc => self.request_quit(),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit();
            }
            KeyCode::Enter if on_submit_row => {
                self.submit();
            }
            KeyCode::Tab | KeyCode::Down | KeyCode::Enter => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Left if on_choice => self.state.form.cycle_choice(false),
            KeyCode::Right if on_choice => self.state.form.cycle_choice(true),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.form.input_char(c)
            }
            KeyCode::Backspace => self.state.form.backspace(),
            _ => {}
        }
    }

    /// Validate the form and, when clean, start sending it.
    ///
    /// Returns true when a request was started. While a request is in flight
    /// the submit control is disabled and this does nothing.
    pub fn submit(&mut self) -> bool {
        if !self.state.can_submit() {
            tracing::debug!("Submit ignored, a quote request is already in flight");
            return false;
        }

        self.state.banner = None;
        self.state.submit_state = SubmitState::Idle;

        if !self.state.form.validate() {
            let invalid: Vec<_> = self
                .state
                .form
                .errors
                .iter()
                .map(|(field, _)| field.wire_name())
                .collect();
            tracing::info!("Quote form has invalid fields: {}", invalid.join(", "));
            return false;
        }

        self.state.submit_state = SubmitState::Submitting;
        let request = self.state.form.request.clone();
        let sender = Arc::clone(&self.sender);
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let outcome = sender.send_quote(&request).await;
            // Receiver is gone only if the app shut down
            let _ = tx.send(outcome);
        });

        tracing::info!("Submitting quote request to {}", self.state.webhook_url);
        self.pending = Some(rx);
        true
    }

    /// Collect a finished submission and expire stale banners
    pub fn tick(&mut self, now: Instant) {
        if let Some(rx) = self.pending.as_mut() {
            match rx.try_recv() {
                Ok(outcome) => self.finish_submission(outcome, now),
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Closed) => self.finish_submission(
                    Err(SubmitError::Transport(
                        "submission task ended without a result".to_string(),
                    )),
                    now,
                ),
            }
        }

        self.state.expire_banner(now);
    }

    /// Single exit of the in-flight state, taken on success and failure alike
    fn finish_submission(&mut self, outcome: Outcome, now: Instant) {
        self.pending = None;

        match outcome {
            Ok(()) => {
                tracing::info!("Quote request delivered");
                self.state.submit_state = SubmitState::Succeeded;
                self.state.banner = Some(Banner::success(now));
                self.state.form.reset();
            }
            Err(err) => {
                tracing::warn!("Quote request failed: {err}");
                self.state.submit_state = SubmitState::Failed;
                self.state.banner = Some(Banner::error(err.user_message()));
            }
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.state.submit_state.is_submitting()
    }
}
