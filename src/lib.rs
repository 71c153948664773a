// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Teddy chat session core.
//!
//! This crate exposes the session runtime shared by Teddy front-ends:
//! the message data model, the session controller driving the
//! query/response lifecycle against an assistant endpoint, and the
//! transport abstraction that endpoint is consumed through.
//!
//! Architecture highlights:
//! - `message`: message data model and the append-only transcript
//! - `session`: session state and the controller owning all transitions
//! - `transport`: assistant endpoint contract, HTTP adapter, test double
//! - `config`: endpoint and provider settings
//! - `logging`: tracing setup for host front-ends

pub mod config;
pub mod error;
pub mod id;
pub mod logging;
pub mod message;
pub mod session;
pub mod transport;

pub use error::{ChatError, Result, TransportError};
pub use message::{Message, ProviderId, Role, Transcript};
pub use session::{ChatSession, SessionId, SessionState};
pub use transport::{AppContext, QueryRequest, QueryResult, Transport};
