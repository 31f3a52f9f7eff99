//! Submission failures

use thiserror::Error;

/// Why a quote could not be delivered.
///
/// Both kinds leave the form filled in and are recovered the same way, by
/// submitting again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The webhook answered with a non-success status
    #[error("webhook rejected the request with status {status}")]
    Rejected { status: u16 },

    /// The request never got a response (DNS, connect, timeout, ...)
    #[error("webhook unreachable: {0}")]
    Transport(String),
}

impl SubmitError {
    /// Text for the error banner
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmitError::Rejected { .. } => "Erro ao enviar o formulário. Tente novamente.",
            SubmitError::Transport(_) => {
                "Erro na conexão. Verifique sua internet e tente novamente."
            }
        }
    }
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        SubmitError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_message_mentions_status() {
        let err = SubmitError::Rejected { status: 502 };
        assert_eq!(
            err.to_string(),
            "webhook rejected the request with status 502"
        );
        assert_eq!(
            err.user_message(),
            "Erro ao enviar o formulário. Tente novamente."
        );
    }

    #[test]
    fn test_transport_message_is_connection_hint() {
        let err = SubmitError::Transport("dns error".to_string());
        assert!(err.to_string().contains("dns error"));
        assert!(err.user_message().starts_with("Erro na conexão"));
    }
}
