pub mod api;
mod client;
pub mod config;
mod response;

pub use api::{posts::PostsApi, session::SessionApi, YapperApi};
pub use client::Client;
pub use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("{message}: status code: {status_code}, response: {body}")]
    FailedStatusCode {
        status_code: StatusCode,
        message: String,
        body: String,
    },
    #[error("{message}: {source}")]
    ReqwestError {
        source: reqwest::Error,
        message: String,
    },
    #[error("{message}: {source}")]
    SerdeJsonError {
        source: serde_json::Error,
        message: String,
    },
    #[error("{message}: {source}")]
    UrlError {
        source: url::ParseError,
        message: String,
    },
}

impl ClientError {
    /// The HTTP status when the server answered with a non-success code.
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            ClientError::FailedStatusCode { status_code, .. } => {
                Some(*status_code)
            }
            _ => None,
        }
    }
}
