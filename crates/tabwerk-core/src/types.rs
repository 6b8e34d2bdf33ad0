// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Tabwerk overlay bridge.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an overlay session, used in log output to tell
/// sessions apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A deep link received from web content displayed in the overlay.
///
/// `params_json` is a flat JSON object of string-valued fields, e.g.
/// `{"x":"1000","y":"0","z":"500"}` — see [`crate::deeplink`] for the
/// extraction helpers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeepLink {
    pub action: String,
    pub params_json: String,
    /// When the link was handled on the main context.
    pub received_at: DateTime<Utc>,
}

impl DeepLink {
    pub fn new(action: impl Into<String>, params_json: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            params_json: params_json.into(),
            received_at: Utc::now(),
        }
    }
}

/// Three-component vector extracted from deep-link parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}
