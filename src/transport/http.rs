// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! HTTP transport adapter
//!
//! Posts queries to the assistant endpoint as JSON. Requests run with no
//! deadline and cannot be aborted once dispatched; integrators that need
//! cancellation or timeouts must layer them on top.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::{QueryRequest, QueryResult, Transport};
use crate::config::Settings;
use crate::error::TransportError;

/// Transport adapter talking to an assistant endpoint over HTTP
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

/// Error body shape the endpoint may return on non-success statuses
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl HttpTransport {
    /// Create a new transport for the given endpoint URL
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Create a transport from settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.chat.endpoint.clone())
    }

    /// The endpoint URL this transport posts to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Parse a non-success response into a failure shape
    fn parse_error(status: u16, body: &str) -> TransportError {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => TransportError::Endpoint(parsed.error),
            Err(_) => TransportError::Status(status),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: QueryRequest) -> Result<QueryResult, TransportError> {
        tracing::debug!(endpoint = %self.endpoint, provider = %request.provider, "posting query");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::parse_error(status, &body));
        }

        let result: QueryResult = response.json().await?;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_structured_body() {
        let err = HttpTransport::parse_error(500, r#"{"error":"model overloaded"}"#);
        assert_eq!(err, TransportError::Endpoint("model overloaded".to_string()));
    }

    #[test]
    fn test_parse_error_bare_status() {
        let err = HttpTransport::parse_error(502, "Bad Gateway");
        assert_eq!(err, TransportError::Status(502));
    }

    #[test]
    fn test_parse_error_empty_body() {
        let err = HttpTransport::parse_error(404, "");
        assert_eq!(err, TransportError::Status(404));
    }

    #[test]
    fn test_from_settings_uses_configured_endpoint() {
        let settings = Settings::default();
        let transport = HttpTransport::from_settings(&settings);
        assert_eq!(transport.endpoint(), settings.chat.endpoint);
    }
}
