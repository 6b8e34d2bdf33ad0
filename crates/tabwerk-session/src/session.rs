// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Per-session overlay state and application-facing notifications.

use std::sync::Arc;

use parking_lot::Mutex;

use tabwerk_core::types::{DeepLink, SessionId};
use tabwerk_core::{NavigationEvent, OverlayConfig};

/// Application-facing notifications, fired after the session has updated its
/// own state. All methods default to no-ops so hosts override only what they
/// consume. Handlers run on the event pump's context, never on the platform
/// callback thread.
pub trait SessionObserver: Send {
    fn on_navigation_event(&mut self, event: NavigationEvent, url: &str) {
        let _ = (event, url);
    }

    fn on_deep_link(&mut self, action: &str, params_json: &str) {
        let _ = (action, params_json);
    }

    fn on_post_message(&mut self, message: &str, origin: &str) {
        let _ = (message, origin);
    }
}

/// Observer that ignores every notification.
pub struct NoopObserver;

impl SessionObserver for NoopObserver {}

/// Shared handle to a session. The registry holds only a `Weak` to this, so
/// dropping the last `Arc` ends the session's routing eligibility.
pub type SharedSession = Arc<Mutex<TabSession>>;

/// Registry side effect produced by a navigation event. The event pump
/// applies it after the handler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    None,
    Opened,
    Closed,
}

/// State for one overlay session from open to close.
pub struct TabSession {
    id: SessionId,
    config: OverlayConfig,
    is_open: bool,
    current_url: String,
    last_navigation_event: Option<NavigationEvent>,
    last_deep_link: Option<DeepLink>,
    observer: Box<dyn SessionObserver>,
}

impl TabSession {
    pub fn new(config: OverlayConfig, observer: Box<dyn SessionObserver>) -> Self {
        let session = Self {
            id: SessionId::new(),
            config,
            is_open: false,
            current_url: String::new(),
            last_navigation_event: None,
            last_deep_link: None,
            observer,
        };
        session.debug("session created");
        session
    }

    /// Convenience constructor returning the shared handle used by the
    /// registry and pump.
    pub fn shared(config: OverlayConfig, observer: Box<dyn SessionObserver>) -> SharedSession {
        Arc::new(Mutex::new(Self::new(config, observer)))
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Whether the overlay is currently open.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// The URL currently displayed, or empty if no overlay is open.
    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    pub fn last_navigation_event(&self) -> Option<NavigationEvent> {
        self.last_navigation_event
    }

    pub fn last_deep_link(&self) -> Option<&DeepLink> {
        self.last_deep_link.as_ref()
    }

    /// Handle a navigation event routed to this session.
    ///
    /// `TabClosed` forces the session closed regardless of prior state;
    /// `Started` while closed is an implicit open with the same side effects
    /// as an explicit one (the returned transition tells the pump to apply
    /// the matching registry update). All events are surfaced to the
    /// observer after local state settles.
    pub fn handle_navigation_event(&mut self, event: NavigationEvent, url: &str) -> Transition {
        if self.config.debug_logging {
            tracing::debug!(session = %self.id, %event, url, "handling navigation event");
        }

        self.last_navigation_event = Some(event);
        if !url.is_empty() {
            self.current_url = url.to_owned();
        }

        let transition = match event {
            NavigationEvent::TabClosed => {
                self.mark_closed();
                Transition::Closed
            }
            NavigationEvent::Started if !self.is_open => {
                self.mark_opened(url);
                Transition::Opened
            }
            _ => Transition::None,
        };

        self.observer.on_navigation_event(event, url);
        transition
    }

    /// Handle a deep link routed to this session. Any `action` string is
    /// accepted; interpretation is left to the observer.
    pub fn handle_deep_link(&mut self, action: &str, params_json: &str) {
        if self.config.debug_logging {
            tracing::debug!(session = %self.id, action, params = params_json, "handling deep link");
        }

        self.last_deep_link = Some(DeepLink::new(action, params_json));
        self.observer.on_deep_link(action, params_json);
    }

    /// Handle a message posted by the displayed page.
    pub fn handle_post_message(&mut self, message: &str, origin: &str) {
        if self.config.debug_logging {
            tracing::debug!(session = %self.id, origin, "handling post message");
        }

        self.observer.on_post_message(message, origin);
    }

    pub(crate) fn mark_opened(&mut self, url: &str) {
        self.is_open = true;
        self.current_url = url.to_owned();
        self.debug("overlay opened");
    }

    pub(crate) fn mark_closed(&mut self) {
        self.is_open = false;
        self.current_url.clear();
        self.debug("overlay closed");
    }

    fn debug(&self, message: &str) {
        if self.config.debug_logging {
            tracing::debug!(session = %self.id, message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Observer recording every notification for assertions.
    #[derive(Default)]
    struct Recorder {
        events: Arc<Mutex<Vec<String>>>,
    }

    impl SessionObserver for Recorder {
        fn on_navigation_event(&mut self, event: NavigationEvent, url: &str) {
            self.events.lock().push(format!("nav:{event}:{url}"));
        }

        fn on_deep_link(&mut self, action: &str, params_json: &str) {
            self.events.lock().push(format!("link:{action}:{params_json}"));
        }

        fn on_post_message(&mut self, message: &str, origin: &str) {
            self.events.lock().push(format!("msg:{message}:{origin}"));
        }
    }

    fn recording_session() -> (TabSession, Arc<Mutex<Vec<String>>>) {
        let recorder = Recorder::default();
        let events = Arc::clone(&recorder.events);
        (
            TabSession::new(OverlayConfig::default(), Box::new(recorder)),
            events,
        )
    }

    #[test]
    fn started_while_closed_is_an_implicit_open() {
        let (mut session, _) = recording_session();
        assert!(!session.is_open());

        let transition =
            session.handle_navigation_event(NavigationEvent::Started, "https://example.com");

        assert_eq!(transition, Transition::Opened);
        assert!(session.is_open());
        assert_eq!(session.current_url(), "https://example.com");
        assert_eq!(
            session.last_navigation_event(),
            Some(NavigationEvent::Started)
        );
    }

    #[test]
    fn started_while_open_does_not_transition() {
        let (mut session, _) = recording_session();
        session.mark_opened("https://example.com");

        let transition =
            session.handle_navigation_event(NavigationEvent::Started, "https://example.com/next");

        assert_eq!(transition, Transition::None);
        assert_eq!(session.current_url(), "https://example.com/next");
    }

    #[test]
    fn tab_closed_always_closes_and_clears_url() {
        let (mut session, _) = recording_session();
        session.mark_opened("https://example.com");

        let transition = session.handle_navigation_event(NavigationEvent::TabClosed, "");

        assert_eq!(transition, Transition::Closed);
        assert!(!session.is_open());
        assert_eq!(session.current_url(), "");

        // Idempotent on an already-closed session.
        let transition = session.handle_navigation_event(NavigationEvent::TabClosed, "");
        assert_eq!(transition, Transition::Closed);
        assert!(!session.is_open());
    }

    #[test]
    fn events_are_surfaced_to_the_observer() {
        let (mut session, events) = recording_session();

        session.handle_navigation_event(NavigationEvent::Finished, "https://example.com");
        session.handle_deep_link("teleport", r#"{"x":"1","y":"2","z":"3"}"#);
        session.handle_post_message("hello", "https://example.com");

        let events = events.lock();
        assert_eq!(
            events.as_slice(),
            [
                "nav:NavigationFinished:https://example.com",
                r#"link:teleport:{"x":"1","y":"2","z":"3"}"#,
                "msg:hello:https://example.com",
            ]
        );
    }

    #[test]
    fn deep_link_is_recorded_as_last_received() {
        let (mut session, _) = recording_session();

        session.handle_deep_link("jump", r#"{"height":"500"}"#);

        let link = session.last_deep_link().unwrap();
        assert_eq!(link.action, "jump");
        assert_eq!(link.params_json, r#"{"height":"500"}"#);
    }

    #[test]
    fn empty_url_preserves_current_url() {
        let (mut session, _) = recording_session();
        session.mark_opened("https://example.com");

        session.handle_navigation_event(NavigationEvent::TabHidden, "");

        assert_eq!(session.current_url(), "https://example.com");
    }
}
