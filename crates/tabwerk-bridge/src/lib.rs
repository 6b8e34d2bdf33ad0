// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Tabwerk — Native platform bridge abstractions.
//
// This crate defines the trait seam and platform dispatch logic for the
// browser overlay bridge. High-level Rust code opens and closes the overlay
// through a unified interface; the Android implementation speaks JNI to the
// platform-owned `BrowserOverlay` Java class, and a stub keeps desktop/CI
// builds linking.

pub mod traits;

#[cfg(target_os = "android")]
pub mod android;

#[cfg(not(target_os = "android"))]
pub mod stub;

/// Retrieves the bridge implementation for the target operating system.
///
/// RETURNS: A boxed trait object (`dyn PlatformBridge`) that abstracts away
/// the underlying native SDK details.
pub fn platform_bridge() -> Box<dyn traits::PlatformBridge> {
    #[cfg(target_os = "android")]
    {
        // Android: Uses `jni-rs` to invoke methods on the JVM/ART.
        Box::new(android::AndroidBridge::new())
    }
    #[cfg(not(target_os = "android"))]
    {
        // DESKTOP/CI: Uses a mock implementation to allow non-native builds.
        Box::new(stub::StubBridge)
    }
}
