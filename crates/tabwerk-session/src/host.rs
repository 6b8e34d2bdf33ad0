// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Overlay lifecycle facade: bridge calls plus registry bookkeeping.

use std::sync::Arc;

use tabwerk_bridge::traits::PlatformBridge;
use tabwerk_core::error::{Result, TabwerkError};

use crate::registry::ActiveSessionRegistry;
use crate::session::SharedSession;

/// Ties session lifecycle to the platform bridge and the active-session
/// registry. Owned by whichever component manages sessions; the same
/// registry must be injected into the [`crate::EventPump`] so inbound
/// events route to sessions opened here.
pub struct OverlayHost {
    bridge: Box<dyn PlatformBridge>,
    registry: Arc<ActiveSessionRegistry>,
}

impl OverlayHost {
    pub fn new(bridge: Box<dyn PlatformBridge>, registry: Arc<ActiveSessionRegistry>) -> Self {
        tracing::info!(platform = bridge.platform_name(), "overlay host ready");
        Self { bridge, registry }
    }

    pub fn registry(&self) -> &Arc<ActiveSessionRegistry> {
        &self.registry
    }

    /// Open the overlay at `url` on behalf of `session`.
    ///
    /// `toolbar_color` overrides the session's configured color for this
    /// call only. On success the session is marked open and registered as
    /// the active event target, replacing any previous registration.
    pub fn open_tab(
        &self,
        session: &SharedSession,
        url: &str,
        toolbar_color: Option<&str>,
    ) -> Result<()> {
        if url.is_empty() {
            tracing::error!("open_tab called with an empty URL");
            return Err(TabwerkError::EmptyUrl);
        }

        {
            let mut session = session.lock();
            let config = session.config();
            let color = toolbar_color.unwrap_or(&config.toolbar_color);

            self.bridge
                .open_overlay(url, color, &config.custom_user_agent, &config.custom_header)?;
            session.mark_opened(url);
        }
        self.registry.register(session);
        Ok(())
    }

    /// Close the overlay opened by `session` and clear its registration.
    pub fn close_tab(&self, session: &SharedSession) -> Result<()> {
        self.bridge.close_overlay()?;
        session.lock().mark_closed();
        self.registry.unregister();
        Ok(())
    }
}
