// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Message types for chat sessions
//!
//! Defines the message structure exchanged with the assistant endpoint and
//! the transcript holding a session's history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::id::MessageId;

/// A message in a chat session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Unique identifier for the message
    pub id: MessageId,

    /// Role of the message sender
    pub role: Role,

    /// Content of the message
    pub content: String,

    /// When the message was created
    pub timestamp: DateTime<Utc>,

    /// Provider active when the message was created or answered
    pub provider: ProviderId,
}

/// Role of the message sender
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// User message
    User,
    /// Assistant response
    Assistant,
}

/// Identifier of the backend assistant answering queries.
///
/// An open token: the core never validates membership, so providers unknown
/// to this crate pass through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderId(String);

impl ProviderId {
    /// The provider token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProviderId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ProviderId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Message {
    /// Create a new user message
    pub fn user(content: impl Into<String>, provider: ProviderId) -> Self {
        Self {
            id: MessageId::generate(),
            role: Role::User,
            content: content.into(),
            timestamp: Utc::now(),
            provider,
        }
    }

    /// Create a new assistant message
    pub fn assistant(content: impl Into<String>, provider: ProviderId) -> Self {
        Self {
            id: MessageId::generate(),
            role: Role::Assistant,
            content: content.into(),
            timestamp: Utc::now(),
            provider,
        }
    }
}

/// Ordered history of a chat session.
///
/// Append-only from the controller's perspective: messages are pushed in
/// invocation order and only [`Transcript::clear`] resets the sequence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// Create a new empty transcript
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Remove all messages
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Number of messages
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the transcript is empty
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Iterate over messages in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    /// The most recent message, if any
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// All messages as a slice
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_user_creation() {
        let message = Message::user("Hello, world!", ProviderId::from("claude"));

        assert_eq!(message.role, Role::User);
        assert_eq!(message.content, "Hello, world!");
        assert_eq!(message.provider, ProviderId::from("claude"));
    }

    #[test]
    fn test_message_assistant_creation() {
        let message = Message::assistant("I can help with that.", ProviderId::from("gemini"));

        assert_eq!(message.role, Role::Assistant);
        assert_eq!(message.content, "I can help with that.");
    }

    #[test]
    fn test_message_ids_differ() {
        let provider = ProviderId::from("claude");
        let a = Message::user("one", provider.clone());
        let b = Message::user("two", provider);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_role_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            "\"assistant\""
        );
    }

    #[test]
    fn test_provider_id_is_open() {
        // Unknown tokens pass through untouched
        let provider = ProviderId::from("some-future-backend");
        assert_eq!(provider.as_str(), "some-future-backend");
        assert_eq!(
            serde_json::to_string(&provider).unwrap(),
            "\"some-future-backend\""
        );
    }

    #[test]
    fn test_transcript_push_preserves_order() {
        let provider = ProviderId::from("claude");
        let mut transcript = Transcript::new();
        transcript.push(Message::user("First message", provider.clone()));
        transcript.push(Message::assistant("Response", provider));

        assert_eq!(transcript.len(), 2);
        let contents: Vec<&str> = transcript.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["First message", "Response"]);
    }

    #[test]
    fn test_transcript_clear() {
        let provider = ProviderId::from("claude");
        let mut transcript = Transcript::new();
        transcript.push(Message::user("Hello", provider.clone()));
        transcript.push(Message::assistant("Hi", provider));

        transcript.clear();

        assert!(transcript.is_empty());
        assert!(transcript.last().is_none());
    }

    #[test]
    fn test_timestamps_non_decreasing() {
        let provider = ProviderId::from("claude");
        let mut transcript = Transcript::new();
        for i in 0..5 {
            transcript.push(Message::user(format!("message {i}"), provider.clone()));
        }

        let timestamps: Vec<_> = transcript.iter().map(|m| m.timestamp).collect();
        assert!(timestamps.windows(2).all(|w| w[0] <= w[1]));
    }
}
