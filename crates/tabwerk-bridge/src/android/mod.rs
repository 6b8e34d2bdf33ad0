// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Android platform bridge via JNI.
//
// Requires the Android NDK and targets `aarch64-linux-android` or
// `armv7-linux-androideabi`. Outbound calls invoke static methods on the
// platform-owned `io.tabwerk.overlay.BrowserOverlay` Java class; inbound
// traffic arrives through the `Java_*` callback shims at the bottom of this
// file, which the Java class calls on its own binder/handler threads.
//
// ## Architecture notes
//
// The callback shims never touch session state. They convert JNI strings,
// then hand the values to the installed [`EventSink`] — the producer half of
// the main-context event channel. Dispatch to the owning session happens on
// the host's event pump, never on the Java callback thread.

#![cfg(target_os = "android")]

use jni::objects::{JClass, JString, JValue};
use jni::sys::jint;
use jni::JNIEnv;
use parking_lot::RwLock;

use tabwerk_core::error::{Result, TabwerkError};
use tabwerk_core::event::EventSink;

use crate::traits::*;

/// Fully qualified class hosting the overlay on the Java side.
const OVERLAY_CLASS: &str = "io/tabwerk/overlay/BrowserOverlay";

// ---------------------------------------------------------------------------
// JNI bootstrap helpers
// ---------------------------------------------------------------------------

/// Obtain a [`JNIEnv`] handle from the global Android context.
///
/// Calls `ndk_context::android_context()` to retrieve the `JavaVM*` pointer
/// set by `android_main` or `ANativeActivity_onCreate`, then attaches the
/// current thread if it is not already attached. The attachment is permanent;
/// outbound calls come from the host's main loop, which outlives any overlay.
fn jni_env() -> Result<JNIEnv<'static>> {
    let ctx = ndk_context::android_context();
    // SAFETY: `ctx.vm()` returns the `JavaVM*` set by the NDK glue code.
    // The pointer is guaranteed valid for the lifetime of the process.
    let vm = unsafe { jni::JavaVM::from_raw(ctx.vm().cast()) }
        .map_err(|e| TabwerkError::Bridge(format!("failed to obtain JavaVM: {e}")))?;
    vm.attach_current_thread_permanently()
        .map_err(|e| TabwerkError::Bridge(format!("failed to attach JNI thread: {e}")))
}

/// Convenience: map any `jni::errors::Error` into `TabwerkError::Bridge`.
fn jni_err(context: &str, e: jni::errors::Error) -> TabwerkError {
    TabwerkError::Bridge(format!("{context}: {e}"))
}

// ---------------------------------------------------------------------------
// Bridge struct
// ---------------------------------------------------------------------------

/// Android implementation of the Tabwerk platform bridge.
///
/// All methods go through JNI to call the overlay's Java class. The struct
/// is zero-sized; all state lives on the Java side.
pub struct AndroidBridge;

impl AndroidBridge {
    /// Create a new Android bridge.
    ///
    /// This does **not** touch JNI — the first JNI call happens lazily when
    /// a trait method is invoked.
    pub fn new() -> Self {
        Self
    }
}

impl Default for AndroidBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformBridge for AndroidBridge {
    fn platform_name(&self) -> &str {
        "Android"
    }
}

// ---------------------------------------------------------------------------
// NativeOverlay — BrowserOverlay.openTab / closeTab
// ---------------------------------------------------------------------------

impl NativeOverlay for AndroidBridge {
    /// Open the browser overlay via `BrowserOverlay.openTab`.
    ///
    /// Returns `Ok(())` once the Java side reports the overlay launched; a
    /// Java-side `false` (no browser supporting Custom Tabs, activity gone)
    /// becomes `OverlayRejected`.
    fn open_overlay(
        &self,
        url: &str,
        toolbar_color: &str,
        user_agent: &str,
        custom_header: &str,
    ) -> Result<()> {
        let mut env = jni_env()?;

        tracing::info!(url, color = toolbar_color, "Android: opening browser overlay");

        let j_url: JString = env
            .new_string(url)
            .map_err(|e| jni_err("new_string(url)", e))?;
        let j_color: JString = env
            .new_string(toolbar_color)
            .map_err(|e| jni_err("new_string(toolbar_color)", e))?;
        let j_user_agent: JString = env
            .new_string(user_agent)
            .map_err(|e| jni_err("new_string(user_agent)", e))?;
        let j_header: JString = env
            .new_string(custom_header)
            .map_err(|e| jni_err("new_string(custom_header)", e))?;

        let opened = env
            .call_static_method(
                OVERLAY_CLASS,
                "openTab",
                "(Ljava/lang/String;Ljava/lang/String;Ljava/lang/String;Ljava/lang/String;)Z",
                &[
                    JValue::Object(&j_url),
                    JValue::Object(&j_color),
                    JValue::Object(&j_user_agent),
                    JValue::Object(&j_header),
                ],
            )
            .map_err(|e| jni_err("openTab", e))?
            .z()
            .map_err(|e| jni_err("openTab->z", e))?;

        if opened {
            tracing::info!(url, "Android: browser overlay opened");
            Ok(())
        } else {
            tracing::error!(url, "Android: openTab returned false");
            Err(TabwerkError::OverlayRejected)
        }
    }

    /// Close the overlay via `BrowserOverlay.closeTab`.
    fn close_overlay(&self) -> Result<()> {
        let mut env = jni_env()?;

        env.call_static_method(OVERLAY_CLASS, "closeTab", "()V", &[])
            .map_err(|e| jni_err("closeTab", e))?;

        tracing::info!("Android: browser overlay closed");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Inbound callback sink
// ---------------------------------------------------------------------------

/// The sink the `Java_*` shims forward into. Installed once by the host at
/// startup; re-installing replaces the previous sink.
static CALLBACK_SINK: RwLock<Option<EventSink>> = RwLock::new(None);

/// Install the producer half of the host's event channel so overlay
/// callbacks reach the event pump. Until a sink is installed, inbound
/// events are logged and dropped.
pub fn install_callback_sink(sink: EventSink) {
    tracing::info!("Android: callback sink installed");
    *CALLBACK_SINK.write() = Some(sink);
}

/// Remove the installed sink; subsequent callbacks are dropped.
pub fn uninstall_callback_sink() {
    tracing::info!("Android: callback sink removed");
    *CALLBACK_SINK.write() = None;
}

fn with_sink(f: impl FnOnce(&EventSink)) {
    let guard = CALLBACK_SINK.read();
    match guard.as_ref() {
        Some(sink) => f(sink),
        None => tracing::warn!("no callback sink installed — dropping overlay event"),
    }
}

/// Read a Java string, logging and substituting empty on failure so a bad
/// argument never aborts the callback.
fn java_string(env: &mut JNIEnv, value: &JString, what: &str) -> String {
    match env.get_string(value) {
        Ok(s) => s.into(),
        Err(e) => {
            tracing::error!(error = %e, what, "failed to read Java string");
            String::new()
        }
    }
}

// ---------------------------------------------------------------------------
// JNI callbacks — called from Java
// ---------------------------------------------------------------------------

/// Deep link received from web content.
///
/// Java signature: `nativeOnDeepLinkReceived(String action, String paramsJson)`.
#[no_mangle]
pub extern "system" fn Java_io_tabwerk_overlay_BrowserOverlay_nativeOnDeepLinkReceived(
    mut env: JNIEnv,
    _class: JClass,
    action: JString,
    params_json: JString,
) {
    let action = java_string(&mut env, &action, "deep-link action");
    let params_json = java_string(&mut env, &params_json, "deep-link params");
    with_sink(|sink| sink.on_deep_link(action, params_json));
}

/// Navigation event with a raw platform code.
///
/// Java signature: `nativeOnNavigationEvent(int event, String url)`.
#[no_mangle]
pub extern "system" fn Java_io_tabwerk_overlay_BrowserOverlay_nativeOnNavigationEvent(
    mut env: JNIEnv,
    _class: JClass,
    event: jint,
    url: JString,
) {
    let url = java_string(&mut env, &url, "navigation url");
    with_sink(|sink| sink.on_navigation(event, url));
}

/// Java signature: `nativeOnTabOpened()`.
#[no_mangle]
pub extern "system" fn Java_io_tabwerk_overlay_BrowserOverlay_nativeOnTabOpened(
    _env: JNIEnv,
    _class: JClass,
) {
    with_sink(|sink| sink.on_tab_opened());
}

/// Java signature: `nativeOnTabClosed()`.
#[no_mangle]
pub extern "system" fn Java_io_tabwerk_overlay_BrowserOverlay_nativeOnTabClosed(
    _env: JNIEnv,
    _class: JClass,
) {
    with_sink(|sink| sink.on_tab_closed());
}

/// Java signature: `nativeOnMessageChannelReady()`.
#[no_mangle]
pub extern "system" fn Java_io_tabwerk_overlay_BrowserOverlay_nativeOnMessageChannelReady(
    _env: JNIEnv,
    _class: JClass,
) {
    with_sink(|sink| sink.on_message_channel_ready());
}

/// Message posted by the displayed page.
///
/// Java signature: `nativeOnPostMessage(String message, String origin)`.
#[no_mangle]
pub extern "system" fn Java_io_tabwerk_overlay_BrowserOverlay_nativeOnPostMessage(
    mut env: JNIEnv,
    _class: JClass,
    message: JString,
    origin: JString,
) {
    let message = java_string(&mut env, &message, "post message");
    let origin = java_string(&mut env, &origin, "post message origin");
    with_sink(|sink| sink.on_post_message(message, origin));
}
