//! Application state definitions

use super::forms::QuoteForm;
use std::time::{Duration, Instant};

/// How long the success banner stays on screen
pub const BANNER_TTL: Duration = Duration::from_secs(5);

pub const SUCCESS_MESSAGE: &str =
    "✓ Solicitação enviada com sucesso! Você receberá um orçamento em breve.";

/// Lifecycle of a quote submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmitState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

/// Message shown above the form after a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
    /// When the banner disappears on its own; `None` keeps it until the
    /// next submit attempt
    pub expires_at: Option<Instant>,
}

impl Banner {
    pub fn success(now: Instant) -> Self {
        Self {
            kind: BannerKind::Success,
            message: SUCCESS_MESSAGE.to_string(),
            expires_at: Some(now + BANNER_TTL),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Error,
            message: message.into(),
            expires_at: None,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }
}

/// Everything the screen renders from
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub form: QuoteForm,
    pub submit_state: SubmitState,
    pub banner: Option<Banner>,
    /// Endpoint shown in the status bar
    pub webhook_url: String,
}

impl AppState {
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            ..Default::default()
        }
    }

    /// The submit control is disabled while a request is in flight
    pub fn can_submit(&self) -> bool {
        !self.submit_state.is_submitting()
    }

    /// Drop the banner once its display time has passed
    pub fn expire_banner(&mut self, now: Instant) {
        if self.banner.as_ref().is_some_and(|b| b.is_expired(now)) {
            self.banner = None;
        }
    }
}

#[cfg(test)]
impl AppState {
    pub fn success_banner(&self) -> Option<&Banner> {
        self.banner
            .as_ref()
            .filter(|b| b.kind == BannerKind::Success)
    }

    pub fn error_banner(&self) -> Option<&Banner> {
        self.banner.as_ref().filter(|b| b.kind == BannerKind::Error)
    }
}
