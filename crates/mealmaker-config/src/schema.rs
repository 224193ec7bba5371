// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//!
//! Skill backend configuration.
//!
//! All sections are optional; `Config::default()` is a working local setup
//! that listens on loopback and talks to whatever list API endpoint the voice
//! platform announces in each request.
//!
//! # Example
//! ```yaml
//! http:
//!   bind: "0.0.0.0:18791"
//!   path: "/alexa"
//!
//! lists:
//!   # Point the list client at a local stub instead of the platform endpoint.
//!   endpoint: "http://127.0.0.1:9000"
//!   timeout_secs: 5
//!
//! skill:
//!   name: "Meal Maker"
//!   permissions:
//!     - "write::alexa:household:list"
//! ```

use serde::{Deserialize, Serialize};

/// Permission scope required to read and complete household list items.
pub const HOUSEHOLD_LIST_WRITE: &str = "write::alexa:household:list";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub lists: ListsConfig,
    #[serde(default)]
    pub skill: SkillConfig,
}

/// Listener for the skill endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// `host:port` to listen on. Default: `127.0.0.1:18791`.
    #[serde(default = "default_http_bind")]
    pub bind: String,

    /// Route that accepts `POST`ed request envelopes. Default: `/`.
    #[serde(default = "default_http_path")]
    pub path: String,

    /// Maximum request body size in bytes (default: 256 KiB).
    #[serde(default = "default_max_body")]
    pub max_body_bytes: usize,
}

fn default_http_bind() -> String {
    "127.0.0.1:18791".to_string()
}

fn default_http_path() -> String {
    "/".to_string()
}

fn default_max_body() -> usize {
    256 * 1024
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind: default_http_bind(),
            path: default_http_path(),
            max_body_bytes: default_max_body(),
        }
    }
}

/// Household list API client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListsConfig {
    /// Base URL override. When `None` the `apiEndpoint` carried in each
    /// request envelope is used.
    pub endpoint: Option<String>,

    /// `User-Agent` header sent with every list API call.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-call timeout in seconds (0 = no limit).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_user_agent() -> String {
    "cookbook/list-access/v1".to_string()
}

fn default_timeout_secs() -> u64 {
    8
}

impl Default for ListsConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Presentation settings for the voice responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillConfig {
    /// Name spoken in the welcome and help prompts.
    #[serde(default = "default_skill_name")]
    pub name: String,

    /// Scopes requested through the permissions consent card.
    #[serde(default = "default_permissions")]
    pub permissions: Vec<String>,
}

fn default_skill_name() -> String {
    "Meal Maker".to_string()
}

fn default_permissions() -> Vec<String> {
    vec![HOUSEHOLD_LIST_WRITE.to_string()]
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            name: default_skill_name(),
            permissions: default_permissions(),
        }
    }
}
