// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine,
};
use serde::{Deserialize, Serialize};

// ─── List identifiers ─────────────────────────────────────────────────────────

/// Decoded-id suffix of the platform-provisioned to-do list.
pub const TODO_LIST_SUFFIX: &str = "-TASK";

/// Decoded-id suffix of the platform-provisioned shopping list.
pub const SHOPPING_LIST_SUFFIX: &str = "-SHOPPING_ITEM";

/// List ids arrive with or without `=` padding and are not always
/// canonically encoded, so unused trailing bits are accepted.
const LIST_ID_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Base64-decode a list id into its internal form, e.g.
/// `amzn1.account.XYZ-TASK`.  Embedded whitespace is skipped.  Returns
/// `None` for ids that are not valid base64 or do not decode to UTF-8.
pub fn decode_list_id(list_id: &str) -> Option<String> {
    let compact: String = list_id.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = LIST_ID_ENGINE.decode(compact).ok()?;
    String::from_utf8(bytes).ok()
}

/// Semantic role of a platform-provisioned list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListRole {
    Todo,
    Shopping,
}

// ─── Metadata ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListState {
    Active,
    Archived,
}

/// One list owned by the user account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMetadata {
    pub list_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<ListState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
}

impl ListMetadata {
    pub fn new(list_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { list_id: list_id.into(), name: name.into(), state: None, version: None }
    }

    /// Role tagged by the decoded id suffix; `None` for custom lists and
    /// undecodable ids.  Matching is case-sensitive.
    pub fn role(&self) -> Option<ListRole> {
        let decoded = decode_list_id(&self.list_id)?;
        if decoded.ends_with(TODO_LIST_SUFFIX) {
            Some(ListRole::Todo)
        } else if decoded.ends_with(SHOPPING_LIST_SUFFIX) {
            Some(ListRole::Shopping)
        } else {
            None
        }
    }
}

/// Body of `GET /v2/householdlists/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListsMetadata {
    #[serde(default)]
    pub lists: Vec<ListMetadata>,
}

// ─── Items ────────────────────────────────────────────────────────────────────

/// Item status, also used as the status filter of a list fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStatus {
    Active,
    Completed,
}

impl ListStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

impl std::fmt::Display for ListStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    pub id: String,
    pub value: String,
    pub status: ListStatus,
    /// Optimistic-concurrency token; echoed back unchanged on update.
    pub version: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl ListItem {
    pub fn new(id: impl Into<String>, value: impl Into<String>, version: i64) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
            status: ListStatus::Active,
            version,
            created_time: None,
            updated_time: None,
            href: None,
        }
    }

    /// Patch that marks this item completed under the version it was read at.
    pub fn completion_patch(&self) -> ItemPatch {
        ItemPatch {
            value: self.value.clone(),
            status: ListStatus::Completed,
            version: self.version,
        }
    }
}

/// Body of `GET /v2/householdlists/{listId}/{status}`.
///
/// `items` stays `None` when the service omits the field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoList {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<ListState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<ListItem>>,
}

impl TodoList {
    pub fn with_items(items: Vec<ListItem>) -> Self {
        Self { items: Some(items), ..Self::default() }
    }

    /// First item in service order.
    pub fn top_item(&self) -> Option<&ListItem> {
        self.items.as_deref().and_then(<[ListItem]>::first)
    }
}

/// Body of `PUT /v2/householdlists/{listId}/items/{itemId}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemPatch {
    pub value: String,
    pub status: ListStatus,
    pub version: i64,
}
