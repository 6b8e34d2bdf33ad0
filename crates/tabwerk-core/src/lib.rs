// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Tabwerk — Core types and error definitions shared across all crates.

pub mod config;
pub mod deeplink;
pub mod error;
pub mod event;
pub mod types;

pub use config::OverlayConfig;
pub use error::TabwerkError;
pub use event::{event_channel, EventReceiver, EventSink, InboundEvent, NavigationEvent};
pub use types::*;
