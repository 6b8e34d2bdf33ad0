// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Tabwerk — Overlay session lifecycle and event routing.
//
// Three pieces cooperate here:
//
// - `TabSession` holds per-session state (`is_open`, current URL, last
//   received events) and surfaces notifications to an application-provided
//   `SessionObserver`.
// - `ActiveSessionRegistry` is the single-slot, context-owned table mapping
//   "the currently open overlay" to the session that owns it, so inbound
//   platform events can find their target.
// - `EventPump` drains the inbound event channel on the host's main context
//   and dispatches to the active session.
//
// The `OverlayHost` facade ties session lifecycle (open/close through the
// platform bridge) to registry bookkeeping.

pub mod host;
pub mod registry;
pub mod router;
pub mod session;

pub use host::OverlayHost;
pub use registry::ActiveSessionRegistry;
pub use router::EventPump;
pub use session::{NoopObserver, SessionObserver, SharedSession, TabSession, Transition};
