// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Overlay configuration.

use serde::{Deserialize, Serialize};

/// Per-session overlay settings.
///
/// Hosts can persist this alongside their own configuration; all fields have
/// sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// Toolbar color in hex format (e.g. `#4285F4`).
    pub toolbar_color: String,
    /// Whether the overlay toolbar shows the page title.
    pub show_title: bool,
    /// Whether the URL bar hides as the page scrolls.
    pub enable_url_bar_hiding: bool,
    /// Custom user agent (empty = browser default).
    pub custom_user_agent: String,
    /// Custom HTTP header appended to requests (empty = none).
    pub custom_header: String,
    /// Emit per-session diagnostic logging at debug level.
    pub debug_logging: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            toolbar_color: "#4285F4".into(),
            show_title: true,
            enable_url_bar_hiding: true,
            custom_user_agent: String::new(),
            custom_header: String::new(),
            debug_logging: true,
        }
    }
}
