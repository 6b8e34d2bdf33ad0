// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Navigation event vocabulary and the foreign-thread → main-context channel.
//
// Native overlay callbacks arrive on a thread outside the host's control.
// The producer half here only captures callback arguments by value and
// enqueues them; all session mutation happens on the consumer side
// (`tabwerk-session::router::EventPump`). The channel is FIFO, so events are
// dispatched in arrival order.

use crossbeam_channel::{Receiver, Sender};
use serde::{Deserialize, Serialize};

/// Navigation events reported by the browser overlay.
///
/// The numbered variants mirror the Android `CustomTabsCallback` codes;
/// `TabOpened`, `TabClosed` and `MessageChannelReady` are synthetic events
/// produced by dedicated callbacks. Unknown codes are preserved rather than
/// rejected so a newer platform library cannot break event delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationEvent {
    Started,
    Finished,
    Failed,
    Aborted,
    TabShown,
    TabHidden,
    TabOpened,
    TabClosed,
    MessageChannelReady,
    Unknown(i32),
}

impl NavigationEvent {
    /// Map a raw platform callback code to an event.
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => Self::Started,
            2 => Self::Finished,
            3 => Self::Failed,
            4 => Self::Aborted,
            5 => Self::TabShown,
            6 => Self::TabHidden,
            other => Self::Unknown(other),
        }
    }
}

impl std::fmt::Display for NavigationEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Started => write!(f, "NavigationStarted"),
            Self::Finished => write!(f, "NavigationFinished"),
            Self::Failed => write!(f, "NavigationFailed"),
            Self::Aborted => write!(f, "NavigationAborted"),
            Self::TabShown => write!(f, "TabShown"),
            Self::TabHidden => write!(f, "TabHidden"),
            Self::TabOpened => write!(f, "TabOpened"),
            Self::TabClosed => write!(f, "TabClosed"),
            Self::MessageChannelReady => write!(f, "MessageChannelReady"),
            Self::Unknown(code) => write!(f, "Unknown({code})"),
        }
    }
}

/// Immutable event value constructed on the foreign callback thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    Navigation { event: NavigationEvent, url: String },
    DeepLink { action: String, params_json: String },
    PostMessage { message: String, origin: String },
}

/// Producer half of the event channel. Cloneable and `Send`; safe to call
/// from any thread. Every method is fire-and-forget: if the consuming pump
/// has been dropped the event is logged and discarded, never retried.
#[derive(Debug, Clone)]
pub struct EventSink {
    tx: Sender<InboundEvent>,
}

/// Consumer half, drained by the main-context event pump.
pub type EventReceiver = Receiver<InboundEvent>;

/// Create a connected sink/receiver pair.
pub fn event_channel() -> (EventSink, EventReceiver) {
    let (tx, rx) = crossbeam_channel::unbounded();
    (EventSink { tx }, rx)
}

impl EventSink {
    /// A deep link was received from web content.
    pub fn on_deep_link(&self, action: impl Into<String>, params_json: impl Into<String>) {
        let action = action.into();
        let params_json = params_json.into();
        tracing::info!(action = %action, params = %params_json, "deep link received");
        self.send(InboundEvent::DeepLink {
            action,
            params_json,
        });
    }

    /// A raw navigation callback fired with the given platform code.
    pub fn on_navigation(&self, code: i32, url: impl Into<String>) {
        let event = NavigationEvent::from_code(code);
        let url = url.into();
        tracing::info!(%event, url = %url, "navigation event");
        self.send(InboundEvent::Navigation { event, url });
    }

    /// The overlay tab became visible.
    pub fn on_tab_opened(&self) {
        tracing::info!("tab opened");
        self.send(InboundEvent::Navigation {
            event: NavigationEvent::TabOpened,
            url: String::new(),
        });
    }

    /// The overlay tab was closed.
    pub fn on_tab_closed(&self) {
        tracing::info!("tab closed");
        self.send(InboundEvent::Navigation {
            event: NavigationEvent::TabClosed,
            url: String::new(),
        });
    }

    /// The post-message channel to the page is ready.
    pub fn on_message_channel_ready(&self) {
        tracing::info!("post-message channel ready");
        self.send(InboundEvent::Navigation {
            event: NavigationEvent::MessageChannelReady,
            url: String::new(),
        });
    }

    /// A message was posted by the displayed page.
    pub fn on_post_message(&self, message: impl Into<String>, origin: impl Into<String>) {
        let message = message.into();
        let origin = origin.into();
        tracing::info!(origin = %origin, "post message received");
        self.send(InboundEvent::PostMessage { message, origin });
    }

    fn send(&self, event: InboundEvent) {
        if self.tx.send(event).is_err() {
            tracing::warn!("event pump gone — dropping overlay event");
        }
    }
}
