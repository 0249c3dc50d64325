//! Errors raised by the content source client.

use reqwest::StatusCode;
use thiserror::Error;

/// Failure talking to the content source.
///
/// These never reach page code: the catalog provider logs them and serves
/// the fallback dataset instead.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to build content source client")]
    Client(#[source] reqwest::Error),
    #[error("request to content source failed")]
    Transport(#[source] reqwest::Error),
    #[error("content source returned {status}: {description}")]
    Api {
        status: StatusCode,
        description: String,
    },
    #[error("failed to decode content source response")]
    Decode(#[source] serde_json::Error),
    #[error("failed to encode query parameter '{name}'")]
    Param {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}
