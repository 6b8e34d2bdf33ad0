// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Desktop walkthrough of the overlay pipeline.
//
// There is no browser overlay off-Android, so the bridge open fails with
// `PlatformUnavailable` and the platform callbacks are simulated from a
// worker thread — the same foreign-thread hand-off the JNI shims perform.
//
// Run with: cargo run -p tabwerk-session --example desktop_host

use std::sync::Arc;
use std::thread;

use tabwerk_core::{deeplink, event_channel, NavigationEvent, OverlayConfig};
use tabwerk_session::{ActiveSessionRegistry, EventPump, OverlayHost, SessionObserver, TabSession};

/// Prints every notification, the way a game layer would react to them.
struct LoggingObserver;

impl SessionObserver for LoggingObserver {
    fn on_navigation_event(&mut self, event: NavigationEvent, url: &str) {
        tracing::info!(%event, url, "app notified of navigation");
    }

    fn on_deep_link(&mut self, action: &str, params_json: &str) {
        tracing::info!(action, params = params_json, "app notified of deep link");
        if action == "teleport" {
            match deeplink::parameter_as_vec3(params_json) {
                Some(target) => tracing::info!(?target, "teleporting player"),
                None => tracing::warn!("teleport link missing coordinates"),
            }
        }
    }

    fn on_post_message(&mut self, message: &str, origin: &str) {
        tracing::info!(message, origin, "app notified of post message");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();

    tracing::info!("Tabwerk desktop host starting");

    let registry = Arc::new(ActiveSessionRegistry::new());
    let (sink, rx) = event_channel();
    let pump = EventPump::new(rx, Arc::clone(&registry));
    let host = OverlayHost::new(tabwerk_bridge::platform_bridge(), Arc::clone(&registry));

    let session = TabSession::shared(OverlayConfig::default(), Box::new(LoggingObserver));

    // Off-Android the stub bridge declines; the overlay "opens" below via
    // the simulated NavigationStarted event instead.
    if let Err(err) = host.open_tab(&session, "https://tabwerk.example/shop", None) {
        tracing::warn!(%err, "bridge open declined (expected off-Android)");
        registry.register(&session);
    }

    // Simulated platform callbacks, arriving on a foreign thread.
    let callbacks = thread::spawn(move || {
        sink.on_navigation(1, "https://tabwerk.example/shop");
        sink.on_navigation(2, "https://tabwerk.example/shop");
        sink.on_tab_opened();
        sink.on_deep_link("teleport", r#"{"x":"1000","y":"0","z":"500"}"#);
        sink.on_post_message("checkout-complete", "https://tabwerk.example");
        sink.on_tab_closed();
    });
    if callbacks.join().is_err() {
        tracing::error!("callback thread panicked");
        return;
    }

    let handled = pump.pump();
    tracing::info!(handled, "event pump drained");

    let session = session.lock();
    tracing::info!(
        is_open = session.is_open(),
        current_url = session.current_url(),
        last_event = ?session.last_navigation_event(),
        "final session state"
    );
}
