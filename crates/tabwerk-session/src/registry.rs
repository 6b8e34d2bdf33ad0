// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Single-slot registry for the currently active overlay session.
//
// The platform can only display one overlay at a time, and its callbacks
// carry no reference back to the owning session — the registry is how
// inbound events find their target. Context-owned: the host constructs it
// and injects it into both the `OverlayHost` and the `EventPump`.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::session::{SharedSession, TabSession};

/// Maps "the open overlay" to the session that owns it.
///
/// Holds a weak reference only, so the registry never extends a session's
/// lifetime: a session dropped by its owner is observed as absent, not
/// dangling. The slot is mutex-guarded — in the documented design all
/// access happens on the pump's context, but the triggering events originate
/// on a foreign thread, so the slot is kept safe to touch from anywhere.
#[derive(Default)]
pub struct ActiveSessionRegistry {
    slot: Mutex<Option<Weak<Mutex<TabSession>>>>,
}

impl ActiveSessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `session` as the active one, replacing any previous
    /// registration. Last writer wins; no error conditions.
    pub fn register(&self, session: &SharedSession) {
        let id = session.lock().id();
        tracing::info!(session = %id, "registered active session");
        *self.slot.lock() = Some(Arc::downgrade(session));
    }

    /// Clear the slot unconditionally. Idempotent if already empty.
    pub fn unregister(&self) {
        tracing::info!("unregistered active session");
        *self.slot.lock() = None;
    }

    /// The active session, if one is registered and still alive.
    pub fn active(&self) -> Option<SharedSession> {
        self.slot.lock().as_ref().and_then(Weak::upgrade)
    }
}
