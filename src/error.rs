// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for teddy-chat
//!
//! `TransportError` covers the failure shapes an assistant endpoint can
//! report; `ChatError` is the crate-level error for everything else.

use thiserror::Error;

/// Failure shapes reported by a transport adapter.
///
/// Endpoints fail in three distinct ways: the call itself errors out, the
/// endpoint answers with a structured error body, or it answers with a bare
/// non-success status. All three normalize to one reason string via
/// [`TransportError::reason`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The underlying call failed (connection refused, timeout, bad payload)
    #[error("{0}")]
    Network(String),

    /// The endpoint returned an error body with a message field
    #[error("{0}")]
    Endpoint(String),

    /// The endpoint returned a non-success status with no readable body
    #[error("request failed with status {0}")]
    Status(u16),
}

impl TransportError {
    /// Normalize any failure shape to a single human-readable reason.
    ///
    /// Never returns an empty string: a `Network` failure without a message
    /// falls back to a generic description.
    pub fn reason(&self) -> String {
        match self {
            Self::Network(message) if message.trim().is_empty() => {
                "failed to send message".to_string()
            }
            Self::Network(message) => message.clone(),
            Self::Endpoint(message) => message.clone(),
            Self::Status(code) => format!("request failed with status {code}"),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

/// Main error type for teddy-chat operations
#[derive(Error, Debug)]
pub enum ChatError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport-level errors
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for teddy-chat operations
pub type Result<T> = std::result::Result<T, ChatError>;
