// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Mock transport for testing
//!
//! A configurable [`Transport`] double usable in tests without a real
//! endpoint. Outcomes are queued and popped at settlement time; optional
//! per-call gates let tests decide when each in-flight call settles, so
//! overlapping-submission ordering can be asserted deterministically.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::oneshot;

use super::{QueryRequest, QueryResult, Transport};
use crate::error::TransportError;
use crate::message::ProviderId;

/// A mock transport for testing
#[derive(Clone, Default)]
pub struct MockTransport {
    /// Queued outcomes, popped per settlement
    outcomes: Arc<Mutex<VecDeque<MockOutcome>>>,
    /// Settlement gates, popped per call in invocation order
    gates: Arc<Mutex<VecDeque<oneshot::Receiver<()>>>>,
    /// Call counter
    call_count: Arc<AtomicUsize>,
    /// Recorded requests
    recorded_requests: Arc<Mutex<Vec<QueryRequest>>>,
}

/// A pre-configured settlement for the mock transport
#[derive(Clone, Debug)]
pub enum MockOutcome {
    /// Settle successfully with this result
    Reply(QueryResult),
    /// Settle with this failure
    Fail(TransportError),
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            tracing::warn!("Mock transport lock was poisoned, recovering");
            poisoned.into_inner()
        }
    }
}

impl MockTransport {
    /// Create a new mock transport.
    ///
    /// With no outcomes queued, every call settles successfully by echoing
    /// its query back, answered by the requested provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace queued outcomes with a single successful reply
    pub fn with_reply(self, response: impl Into<String>, provider: impl Into<ProviderId>) -> Self {
        {
            let mut outcomes = lock(&self.outcomes);
            outcomes.clear();
            outcomes.push_back(MockOutcome::Reply(QueryResult {
                response: response.into(),
                provider: provider.into(),
            }));
        }
        self
    }

    /// Replace queued outcomes with a single failure
    pub fn with_failure(self, error: TransportError) -> Self {
        {
            let mut outcomes = lock(&self.outcomes);
            outcomes.clear();
            outcomes.push_back(MockOutcome::Fail(error));
        }
        self
    }

    /// Queue an additional outcome (settled in order)
    pub fn queue_outcome(&self, outcome: MockOutcome) {
        lock(&self.outcomes).push_back(outcome);
    }

    /// Add a settlement gate for the next un-gated call.
    ///
    /// The call will record its request, then hold until the returned
    /// sender fires (or is dropped). Gates pair with calls in invocation
    /// order.
    pub fn gate(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        lock(&self.gates).push_back(rx);
        tx
    }

    /// Number of calls made so far
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// All requests recorded so far, in invocation order
    pub fn recorded_requests(&self) -> Vec<QueryRequest> {
        lock(&self.recorded_requests).clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: QueryRequest) -> Result<QueryResult, TransportError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        lock(&self.recorded_requests).push(request.clone());

        let gate = lock(&self.gates).pop_front();
        if let Some(gate) = gate {
            // A dropped sender releases the gate as well
            let _ = gate.await;
        }

        let outcome = lock(&self.outcomes).pop_front();
        match outcome {
            Some(MockOutcome::Reply(result)) => Ok(result),
            Some(MockOutcome::Fail(error)) => Err(error),
            None => Ok(QueryResult {
                response: format!("echo: {}", request.query),
                provider: request.provider,
            }),
        }
    }
}
