// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub bridge for desktop/CI builds where the Android overlay is unavailable.
//
// Every trait method returns `PlatformUnavailable` — the real implementation
// lives in the `android` module.

use tabwerk_core::error::{Result, TabwerkError};

use crate::traits::*;

/// No-op bridge returned on non-Android platforms.
pub struct StubBridge;

impl PlatformBridge for StubBridge {
    fn platform_name(&self) -> &str {
        "Desktop (stub)"
    }
}

impl NativeOverlay for StubBridge {
    fn open_overlay(
        &self,
        _url: &str,
        _toolbar_color: &str,
        _user_agent: &str,
        _custom_header: &str,
    ) -> Result<()> {
        tracing::warn!("NativeOverlay::open_overlay called on stub bridge");
        Err(TabwerkError::PlatformUnavailable)
    }

    fn close_overlay(&self) -> Result<()> {
        tracing::warn!("NativeOverlay::close_overlay called on stub bridge");
        Err(TabwerkError::PlatformUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_reports_platform_unavailable() {
        let bridge = StubBridge;
        assert!(matches!(
            bridge.open_overlay("https://example.com", "#4285F4", "", ""),
            Err(TabwerkError::PlatformUnavailable)
        ));
        assert!(matches!(
            bridge.close_overlay(),
            Err(TabwerkError::PlatformUnavailable)
        ));
    }
}
