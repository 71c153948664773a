// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use teddy_chat::error::{ChatError, TransportError};

#[test]
fn test_transport_error_display() {
    assert_eq!(
        TransportError::Network("connection refused".to_string()).to_string(),
        "connection refused"
    );
    assert_eq!(
        TransportError::Endpoint("overloaded".to_string()).to_string(),
        "overloaded"
    );
    assert_eq!(
        TransportError::Status(500).to_string(),
        "request failed with status 500"
    );
}

#[test]
fn test_reason_is_never_empty() {
    let failures = [
        TransportError::Network(String::new()),
        TransportError::Network("  ".to_string()),
        TransportError::Endpoint("boom".to_string()),
        TransportError::Status(0),
    ];

    for failure in failures {
        assert!(!failure.reason().is_empty());
    }
}

#[test]
fn test_chat_error_wraps_transport() {
    let err: ChatError = TransportError::Endpoint("bad request".to_string()).into();
    assert!(err.to_string().contains("Transport error"));
    assert!(err.to_string().contains("bad request"));
}

#[test]
fn test_chat_error_from_json() {
    let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
    let err: ChatError = json_err.into();
    assert!(err.to_string().contains("JSON error"));
}
