//! Webhook client module for delivering quote requests

mod client;
mod error;
mod traits;

pub use client::{WebhookClient, DEFAULT_WEBHOOK_URL};
pub use error::SubmitError;
pub use traits::QuoteSender;

#[cfg(test)]
pub use traits::MockQuoteSender;
