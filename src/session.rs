// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Chat session state and controller
//!
//! [`ChatSession`] owns one conversation: the transcript, the loading
//! flag, the last error, and the active provider. All mutations go
//! through its four operations; state is guarded by a per-session mutex
//! held only for the duration of a mutation, never across an await.
//!
//! Overlapping submissions are allowed and ordering is best-effort: user
//! messages append in invocation order, assistant messages and loading
//! transitions follow settlement order, which can differ when calls
//! overlap. There is no in-flight guard, no retry, and no cancellation.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use uuid::Uuid;

use crate::error::{ChatError, Result};
use crate::message::{Message, ProviderId, Transcript};
use crate::transport::{AppContext, QueryRequest, QueryResult, Transport};

/// Unique session identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Generate a fresh session identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// View-model state for one chat session
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Ordered message history
    pub messages: Transcript,

    /// True from dispatch until the request's settlement is processed
    pub is_loading: bool,

    /// Last failure reason, if any
    pub error: Option<String>,

    /// Currently selected provider
    pub provider: ProviderId,
}

impl SessionState {
    fn new(provider: ProviderId) -> Self {
        Self {
            messages: Transcript::new(),
            is_loading: false,
            error: None,
            provider,
        }
    }
}

/// Controller owning a session's state and request lifecycle.
///
/// Cheap to clone; clones share the same session.
#[derive(Clone)]
pub struct ChatSession {
    session_id: SessionId,
    state: Arc<Mutex<SessionState>>,
    transport: Arc<dyn Transport>,
}

/// Builder for creating ChatSession instances
pub struct ChatSessionBuilder {
    transport: Option<Arc<dyn Transport>>,
    provider: ProviderId,
}

impl ChatSessionBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            transport: None,
            provider: ProviderId::from("claude"),
        }
    }

    /// Set the transport adapter
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Set the initial provider
    pub fn provider(mut self, provider: impl Into<ProviderId>) -> Self {
        self.provider = provider.into();
        self
    }

    /// Build the ChatSession
    pub fn build(self) -> Result<ChatSession> {
        let transport = self
            .transport
            .ok_or_else(|| ChatError::Config("no transport set".into()))?;
        Ok(ChatSession {
            session_id: SessionId::new(),
            state: Arc::new(Mutex::new(SessionState::new(self.provider))),
            transport,
        })
    }
}

impl Default for ChatSessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    /// Create a builder for constructing a ChatSession
    pub fn builder() -> ChatSessionBuilder {
        ChatSessionBuilder::new()
    }

    /// Create a session with an empty transcript and the given provider
    pub fn new(transport: Arc<dyn Transport>, provider: impl Into<ProviderId>) -> Self {
        Self {
            session_id: SessionId::new(),
            state: Arc::new(Mutex::new(SessionState::new(provider.into()))),
            transport,
        }
    }

    fn state(&self) -> MutexGuard<'_, SessionState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                tracing::warn!(session = %self.session_id, "session state lock was poisoned, recovering");
                poisoned.into_inner()
            }
        }
    }

    /// Submit a user message and wait for the assistant's settlement.
    ///
    /// Empty or whitespace-only input is a no-op returning `None`.
    /// Otherwise the trimmed text is appended as a user message, the
    /// session enters loading, and the transport is invoked once. On
    /// success the assistant's reply is appended (tagged with the
    /// provider the endpoint reported) and the result returned. On
    /// failure an assistant-role error message is appended, the failure
    /// reason lands in `error`, and `None` is returned.
    ///
    /// Exactly one assistant message is appended per accepted
    /// submission; failures never propagate out of this call.
    pub async fn submit_message(
        &self,
        content: &str,
        context: Option<Vec<AppContext>>,
    ) -> Option<QueryResult> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return None;
        }

        let provider = {
            let mut state = self.state();
            let provider = state.provider.clone();
            state.messages.push(Message::user(trimmed, provider.clone()));
            state.is_loading = true;
            state.error = None;
            provider
        };

        tracing::debug!(session = %self.session_id, provider = %provider, "dispatching query");

        let request = QueryRequest {
            query: trimmed.to_string(),
            apps_data: context,
            provider: provider.clone(),
        };

        match self.transport.send(request).await {
            Ok(result) => {
                let mut state = self.state();
                state
                    .messages
                    .push(Message::assistant(&result.response, result.provider.clone()));
                state.is_loading = false;
                Some(result)
            }
            Err(err) => {
                let reason = err.reason();
                tracing::warn!(session = %self.session_id, error = %reason, "query failed");

                let mut state = self.state();
                state.messages.push(Message::assistant(
                    format!("Sorry, I encountered an error: {reason}. Please try again."),
                    provider,
                ));
                state.is_loading = false;
                state.error = Some(reason);
                None
            }
        }
    }

    /// Empty the transcript and clear any error.
    ///
    /// The loading flag and provider selection are left untouched.
    pub fn clear_messages(&self) {
        let mut state = self.state();
        state.messages.clear();
        state.error = None;
    }

    /// Switch the active provider.
    ///
    /// Past messages and in-flight requests are unaffected.
    pub fn set_provider(&self, provider: impl Into<ProviderId>) {
        self.state().provider = provider.into();
    }

    /// Clear the last error
    pub fn clear_error(&self) {
        self.state().error = None;
    }

    /// Snapshot of the message history
    pub fn messages(&self) -> Vec<Message> {
        self.state().messages.messages().to_vec()
    }

    /// Whether a request is currently in flight
    pub fn is_loading(&self) -> bool {
        self.state().is_loading
    }

    /// The last failure reason, if any
    pub fn error(&self) -> Option<String> {
        self.state().error.clone()
    }

    /// The currently selected provider
    pub fn provider(&self) -> ProviderId {
        self.state().provider.clone()
    }

    /// This session's identifier
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    /// Snapshot of the full session state
    pub fn snapshot(&self) -> SessionState {
        self.state().clone()
    }
}
