//! Firebase client configuration checks.
//!
//! The server never talks to Firebase itself; it only reports whether the
//! client SDK keys are present so operators can spot a half-configured deploy.

use std::env;

use serde::{Deserialize, Serialize};

pub const API_KEY_VAR: &str = "FIREBASE_API_KEY";
pub const PROJECT_ID_VAR: &str = "FIREBASE_PROJECT_ID";

/// Presence of the Firebase keys at the moment of the probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FirebaseStatus {
    pub configured: bool,
    pub api_key: bool,
    pub project_id: bool,
}

impl FirebaseStatus {
    /// Read the process environment now. Not cached: keys may be rotated
    /// into a running process.
    pub fn probe() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |key: &str| lookup(key).is_some_and(|v| !v.is_empty());
        let api_key = present(API_KEY_VAR);
        let project_id = present(PROJECT_ID_VAR);
        Self {
            configured: api_key && project_id,
            api_key,
            project_id,
        }
    }
}

/// Actions accepted by `POST /api/firebase/init`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitAction {
    TestConnection,
}

impl InitAction {
    /// Extract the action from an arbitrary JSON body.
    ///
    /// Returns `None` for a non-object body, a missing or non-string
    /// `action`, or an unknown action name.
    pub fn from_body(body: &serde_json::Value) -> Option<Self> {
        let action = body.get("action")?.as_str()?;
        serde_json::from_value(serde_json::Value::String(action.to_string())).ok()
    }
}
