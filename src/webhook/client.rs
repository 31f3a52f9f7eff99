//! HTTP client for the quote webhook
//!
//! Posts the quote request as JSON to a single fixed endpoint. Any 2xx
//! response counts as delivered; everything else is a [`SubmitError`].

use super::error::SubmitError;
use super::traits::QuoteSender;
use crate::state::QuoteRequest;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

/// Default webhook address
pub const DEFAULT_WEBHOOK_URL: &str = "https://webhook.automab.dev/webhook/forms";

/// Client for the quote webhook
#[derive(Debug, Clone)]
pub struct WebhookClient {
    http: reqwest::Client,
    url: String,
}

impl WebhookClient {
    /// Create a new webhook client.
    ///
    /// Without a timeout the transport defaults apply.
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            http,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl QuoteSender for WebhookClient {
    async fn send_quote(&self, request: &QuoteRequest) -> Result<(), SubmitError> {
        let response = self
            .http
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!("Webhook accepted quote with status {}", status.as_u16());
            Ok(())
        } else {
            Err(SubmitError::Rejected {
                status: status.as_u16(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Transmission, UsageType};
    use pretty_assertions::assert_eq;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve exactly one request with the given status line and hand back
    /// the raw request text
    async fn one_shot_server(status_line: &'static str) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/webhook/forms", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&buf[..n]);
                if request_complete(&raw) {
                    break;
                }
            }
            let response =
                format!("{status_line}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n");
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8(raw).unwrap()
        });

        (url, handle)
    }

    fn request_complete(raw: &[u8]) -> bool {
        let text = String::from_utf8_lossy(raw);
        let Some(header_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..header_end]
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        raw.len() >= header_end + 4 + content_length
    }

    fn sample_request() -> QuoteRequest {
        QuoteRequest {
            name: "Ana".to_string(),
            email: "ana@exemplo.com".to_string(),
            transmission: Some(Transmission::Manual),
            usage: Some(UsageType::Work),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_keeps_url() {
        let client = WebhookClient::new(DEFAULT_WEBHOOK_URL, None).unwrap();
        assert_eq!(client.url(), DEFAULT_WEBHOOK_URL);
    }

    #[tokio::test]
    async fn test_success_status_is_ok_and_posts_json() {
        let (url, server) = one_shot_server("HTTP/1.1 200 OK").await;
        let client = WebhookClient::new(url, Some(Duration::from_secs(5))).unwrap();

        tokio_test::assert_ok!(client.send_quote(&sample_request()).await);

        let raw = server.await.unwrap();
        let (head, body) = raw.split_once("\r\n\r\n").unwrap();
        assert!(head.starts_with("POST /webhook/forms HTTP/1.1"));
        assert!(head
            .lines()
            .any(|l| l.eq_ignore_ascii_case("content-type: application/json")));

        let json: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(json, serde_json::to_value(sample_request()).unwrap());
        assert_eq!(json["cambio"], "Manual");
        assert_eq!(json["uso"], "Trabalho");
    }

    #[tokio::test]
    async fn test_non_success_status_is_rejected() {
        let (url, server) = one_shot_server("HTTP/1.1 500 Internal Server Error").await;
        let client = WebhookClient::new(url, Some(Duration::from_secs(5))).unwrap();

        let result = client.send_quote(&sample_request()).await;

        assert_eq!(result, Err(SubmitError::Rejected { status: 500 }));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        // Bind then drop to get a port with nothing listening
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client =
            WebhookClient::new(format!("http://{addr}/"), Some(Duration::from_secs(5))).unwrap();
        let result = client.send_quote(&sample_request()).await;

        let err = tokio_test::assert_err!(result);
        assert!(matches!(err, SubmitError::Transport(_)));
    }
}
