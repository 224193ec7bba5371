// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//!
//! Request and response envelopes exchanged with the voice platform.
//!
//! Only the fields the skill reads are modelled; anything else in the JSON
//! is ignored on input.
//!
//! ```json
//! {
//!   "version": "1.0",
//!   "session": { "new": true, "sessionId": "...", "attributes": {} },
//!   "context": { "System": { "apiEndpoint": "https://api.amazonalexa.com",
//!                            "apiAccessToken": "..." } },
//!   "request": { "type": "IntentRequest", "requestId": "...",
//!                "intent": { "name": "CompleteIngredientIntent" } }
//! }
//! ```

use mealmaker_lists::SessionAttributes;
use serde::{Deserialize, Serialize};

use crate::{Response, SkillError};

pub const LAUNCH_REQUEST: &str = "LaunchRequest";
pub const INTENT_REQUEST: &str = "IntentRequest";
pub const SESSION_ENDED_REQUEST: &str = "SessionEndedRequest";

pub const COMPLETE_INGREDIENT_INTENT: &str = "CompleteIngredientIntent";
pub const HELP_INTENT: &str = "AMAZON.HelpIntent";
pub const CANCEL_INTENT: &str = "AMAZON.CancelIntent";
pub const STOP_INTENT: &str = "AMAZON.StopIntent";
pub const FALLBACK_INTENT: &str = "AMAZON.FallbackIntent";

// ─── Request side ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestEnvelope {
    #[serde(default = "default_version")]
    pub version: String,
    /// Absent for out-of-session requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
    #[serde(default)]
    pub context: Context,
    pub request: Request,
}

fn default_version() -> String {
    "1.0".to_string()
}

impl RequestEnvelope {
    pub fn from_json(bytes: &[u8]) -> Result<Self, SkillError> {
        serde_json::from_slice(bytes).map_err(|e| SkillError::InvalidEnvelope(e.to_string()))
    }

    pub fn request_type(&self) -> &str {
        &self.request.kind
    }

    /// Intent name for `IntentRequest`s, `None` otherwise.
    pub fn intent_name(&self) -> Option<&str> {
        if self.request.kind != INTENT_REQUEST {
            return None;
        }
        self.request.intent.as_ref().map(|i| i.name.as_str())
    }

    /// `true` when this is an `IntentRequest` for `name`.
    pub fn is_intent(&self, name: &str) -> bool {
        self.intent_name() == Some(name)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub new: bool,
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub attributes: Option<SessionAttributes>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Context {
    #[serde(rename = "System", default)]
    pub system: SystemContext,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemContext {
    /// Base URL of the platform APIs for this user's region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_endpoint: Option<String>,
    /// Short-lived token authorising calls on behalf of the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_access_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub request_id: String,
    /// ISO 8601 as sent by the platform; kept verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
    /// Why the session ended (`SessionEndedRequest` only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Intent {
    pub name: String,
}

// ─── Response side ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: String,
    pub session_attributes: SessionAttributes,
    pub response: Response,
}

impl ResponseEnvelope {
    pub fn new(session_attributes: SessionAttributes, response: Response) -> Self {
        Self { version: default_version(), session_attributes, response }
    }
}
