// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Main-context event pump: the consumer half of the router.
//
// Platform callbacks enqueue immutable event values from their own thread;
// this pump drains them on the host's main context and dispatches to the
// active session. The channel is FIFO, so events are handled in arrival
// order. There is no cancellation: an enqueued event is either dispatched
// or dropped here when no session is active.

use std::sync::Arc;

use tabwerk_core::event::{EventReceiver, InboundEvent};

use crate::registry::ActiveSessionRegistry;
use crate::session::Transition;

/// Drains inbound overlay events and routes them to the active session.
pub struct EventPump {
    rx: EventReceiver,
    registry: Arc<ActiveSessionRegistry>,
}

impl EventPump {
    pub fn new(rx: EventReceiver, registry: Arc<ActiveSessionRegistry>) -> Self {
        Self { rx, registry }
    }

    /// Drain every currently queued event. Call once per main-loop
    /// iteration. Returns the number of events taken off the queue,
    /// including any dropped for lack of an active session.
    pub fn pump(&self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.rx.try_recv() {
            self.dispatch(event);
            handled += 1;
        }
        handled
    }

    fn dispatch(&self, inbound: InboundEvent) {
        let Some(session) = self.registry.active() else {
            tracing::warn!(event = ?inbound, "no active session — dropping overlay event");
            return;
        };

        match inbound {
            InboundEvent::Navigation { event, url } => {
                let transition = session.lock().handle_navigation_event(event, &url);
                match transition {
                    // An implicit open re-asserts the receiving session as
                    // active, same as an explicit open.
                    Transition::Opened => self.registry.register(&session),
                    Transition::Closed => self.registry.unregister(),
                    Transition::None => {}
                }
            }
            InboundEvent::DeepLink {
                action,
                params_json,
            } => {
                session.lock().handle_deep_link(&action, &params_json);
            }
            InboundEvent::PostMessage { message, origin } => {
                session.lock().handle_post_message(&message, &origin);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{SessionObserver, SharedSession, TabSession};
    use parking_lot::Mutex;
    use tabwerk_core::event::{event_channel, EventSink};
    use tabwerk_core::{NavigationEvent, OverlayConfig};

    struct Recorder {
        events: Arc<Mutex<Vec<String>>>,
    }

    impl SessionObserver for Recorder {
        fn on_navigation_event(&mut self, event: NavigationEvent, url: &str) {
            self.events.lock().push(format!("nav:{event}:{url}"));
        }

        fn on_deep_link(&mut self, action: &str, _params_json: &str) {
            self.events.lock().push(format!("link:{action}"));
        }

        fn on_post_message(&mut self, message: &str, _origin: &str) {
            self.events.lock().push(format!("msg:{message}"));
        }
    }

    fn pipeline() -> (EventSink, EventPump, SharedSession, Arc<Mutex<Vec<String>>>) {
        let (sink, rx) = event_channel();
        let registry = Arc::new(ActiveSessionRegistry::new());
        let pump = EventPump::new(rx, Arc::clone(&registry));
        let events = Arc::new(Mutex::new(Vec::new()));
        let session = TabSession::shared(
            OverlayConfig::default(),
            Box::new(Recorder {
                events: Arc::clone(&events),
            }),
        );
        registry.register(&session);
        (sink, pump, session, events)
    }

    #[test]
    fn events_without_an_active_session_are_dropped() {
        let (sink, rx) = event_channel();
        let pump = EventPump::new(rx, Arc::new(ActiveSessionRegistry::new()));

        sink.on_deep_link("teleport", r#"{"x":"1","y":"2","z":"3"}"#);
        sink.on_navigation(1, "https://example.com");

        // No panic, both events taken off the queue, nothing to observe.
        assert_eq!(pump.pump(), 2);
        assert_eq!(pump.pump(), 0);
    }

    #[test]
    fn events_dispatch_in_fifo_order() {
        let (sink, pump, _session, events) = pipeline();

        sink.on_navigation(1, "https://example.com");
        sink.on_navigation(2, "https://example.com");
        sink.on_deep_link("jump", r#"{"height":"500"}"#);
        sink.on_post_message("ready", "https://example.com");

        assert_eq!(pump.pump(), 4);
        assert_eq!(
            events.lock().as_slice(),
            [
                "nav:NavigationStarted:https://example.com",
                "nav:NavigationFinished:https://example.com",
                "link:jump",
                "msg:ready",
            ]
        );
    }

    #[test]
    fn implicit_open_updates_session_state() {
        let (sink, pump, session, _) = pipeline();
        assert!(!session.lock().is_open());

        sink.on_navigation(1, "https://example.com");
        pump.pump();

        let session = session.lock();
        assert!(session.is_open());
        assert_eq!(session.current_url(), "https://example.com");
    }

    #[test]
    fn tab_closed_unregisters_the_session() {
        let (sink, pump, session, _) = pipeline();

        sink.on_navigation(1, "https://example.com");
        sink.on_tab_closed();
        pump.pump();

        assert!(!session.lock().is_open());
        assert!(pump.registry.active().is_none());

        // Later events have no target and are dropped quietly.
        sink.on_deep_link("jump", r#"{"height":"500"}"#);
        assert_eq!(pump.pump(), 1);
        assert!(session.lock().last_deep_link().is_none());
    }

    #[test]
    fn session_dropped_by_owner_stops_receiving() {
        let (sink, pump, session, events) = pipeline();
        drop(session);

        sink.on_navigation(1, "https://example.com");
        assert_eq!(pump.pump(), 1);
        assert!(events.lock().is_empty());
    }

    #[test]
    fn unknown_navigation_codes_are_delivered() {
        let (sink, pump, session, events) = pipeline();

        sink.on_navigation(99, "https://example.com");
        pump.pump();

        assert_eq!(
            session.lock().last_navigation_event(),
            Some(NavigationEvent::Unknown(99))
        );
        assert_eq!(
            events.lock().as_slice(),
            ["nav:Unknown(99):https://example.com"]
        );
    }
}
