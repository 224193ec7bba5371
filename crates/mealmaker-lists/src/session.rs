// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Per-conversation scratch state carried in the request/response
/// envelopes as `sessionAttributes`.
///
/// Keys this crate does not own are kept in `extra` so they survive the
/// round trip through the skill.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionAttributes {
    #[serde(default)]
    pub is_new: bool,
    /// Cached id of the default to-do list, written by the resolver.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub todo_list_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SessionAttributes {
    /// Attributes that already carry a resolved list id.
    pub fn with_todo_list_id(list_id: impl Into<String>) -> Self {
        Self { todo_list_id: Some(list_id.into()), ..Self::default() }
    }
}
