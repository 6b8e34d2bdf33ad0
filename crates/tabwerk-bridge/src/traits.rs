// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic trait definitions for the browser overlay.

use tabwerk_core::error::Result;

/// Unified bridge over the native browser overlay.
///
/// Platforms without a browser overlay (desktop, CI) return
/// `TabwerkError::PlatformUnavailable` from the stub implementation.
pub trait PlatformBridge: NativeOverlay {
    /// Human-readable platform name (e.g. "Android 14").
    fn platform_name(&self) -> &str;
}

/// Open and close the system browser overlay.
pub trait NativeOverlay {
    /// Open `url` in the browser overlay.
    ///
    /// Mirrors the Java wire surface `openTab(String,String,String,String)Z`:
    /// toolbar color as a hex string, custom user agent (empty = browser
    /// default) and custom HTTP header (empty = none). A Java-side `false`
    /// is reported as `TabwerkError::OverlayRejected`. The user may still
    /// dismiss the overlay at any time; that is not an error.
    fn open_overlay(
        &self,
        url: &str,
        toolbar_color: &str,
        user_agent: &str,
        custom_header: &str,
    ) -> Result<()>;

    /// Close the currently open overlay, if any.
    fn close_overlay(&self) -> Result<()>;
}
