// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Tracing setup shared by host front-ends and tests

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Defaults to WARN. `RUST_LOG` still takes precedence; `verbose > 0`
/// enables session diagnostics without requiring users to know target
/// names up front. Safe to call more than once (later calls are no-ops).
pub fn init_logging(verbose: u8) {
    let mut env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into());

    if verbose > 0 {
        if let Ok(directive) = "teddy_chat=debug".parse() {
            env_filter = env_filter.add_directive(directive);
        }
    }

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging(0);
        init_logging(2);
    }
}
