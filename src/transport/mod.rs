// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Transport adapter contract
//!
//! The session controller never talks to the assistant endpoint directly;
//! it depends only on the request/response contract defined here. The
//! endpoint is an external collaborator reached through an adapter.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::TransportError;
use crate::message::ProviderId;

pub mod http;
pub mod mock;

pub use http::HttpTransport;
pub use mock::MockTransport;

/// Opaque caller-defined context payload, passed through to the endpoint
/// unmodified. No schema is imposed beyond being serializable.
pub type AppContext = serde_json::Value;

/// Request sent to the assistant endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    /// The user's query text
    pub query: String,

    /// Optional application context forwarded as-is
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apps_data: Option<Vec<AppContext>>,

    /// Provider requested for this query
    pub provider: ProviderId,
}

/// Successful response from the assistant endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueryResult {
    /// The assistant's answer
    pub response: String,

    /// Provider that actually answered; may differ from the one requested
    pub provider: ProviderId,
}

/// The external collaborator performing the assistant call on the
/// session's behalf.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one query and wait for its settlement.
    async fn send(&self, request: QueryRequest) -> Result<QueryResult, TransportError>;
}
