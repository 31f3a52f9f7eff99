//! Trait abstraction for the webhook client to enable mocking in tests

use super::error::SubmitError;
use crate::state::QuoteRequest;
use async_trait::async_trait;

/// Delivers a quote request to the quoting workflow
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuoteSender: Send + Sync {
    /// Send one request; `Ok` only for a success response
    async fn send_quote(&self, request: &QuoteRequest) -> Result<(), SubmitError>;
}
