// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use async_trait::async_trait;

use crate::{ItemPatch, ListError, ListItem, ListStatus, ListsMetadata, TodoList};

/// Client for the household list management API.
///
/// Reads return `Ok(None)` when the service answers but grants nothing
/// (no permission, unknown list).  Transport and protocol failures are
/// `Err`.
#[async_trait]
pub trait ListService: Send + Sync {
    /// Metadata of every list the user owns, in service order.
    async fn get_lists_metadata(&self) -> Result<Option<ListsMetadata>, ListError>;

    /// One list with its items filtered by `status`.
    async fn get_list(
        &self,
        list_id: &str,
        status: ListStatus,
    ) -> Result<Option<TodoList>, ListError>;

    /// Replace an item's value/status.  `patch.version` must match the
    /// server-held version or the service rejects the update.
    async fn update_list_item(
        &self,
        list_id: &str,
        item_id: &str,
        patch: &ItemPatch,
    ) -> Result<ListItem, ListError>;
}
