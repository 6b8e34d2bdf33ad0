// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Tabwerk.

use thiserror::Error;

/// Top-level error type for all Tabwerk operations.
///
/// Parse failures and routing misses are deliberately *not* represented
/// here: deep-link extraction returns `Option` and logs, and the event pump
/// drops unroutable events with a warning. Nothing in this crate is fatal to
/// the host process.
#[derive(Debug, Error)]
pub enum TabwerkError {
    // -- Precondition failures --
    #[error("overlay URL is empty")]
    EmptyUrl,

    // -- Platform bridge --
    #[error("platform bridge error: {0}")]
    Bridge(String),

    #[error("browser overlay declined to open")]
    OverlayRejected,

    #[error("feature not available on this platform")]
    PlatformUnavailable,
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, TabwerkError>;
