// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;

use crate::{
    ItemPatch, ListError, ListItem, ListMetadata, ListService, ListStatus, ListsMetadata,
    TodoList,
};

/// One call observed by [`ScriptedListService`].
#[derive(Debug, Clone, PartialEq)]
pub enum ListCall {
    GetListsMetadata,
    GetList { list_id: String, status: ListStatus },
    UpdateListItem { list_id: String, item_id: String, patch: ItemPatch },
}

/// Deterministic in-memory list service for tests and offline runs.
///
/// Every answer is scripted up front; every call is recorded in order so
/// tests can assert exactly which requests the workflow issued.
pub struct ScriptedListService {
    metadata: Result<Option<ListsMetadata>, ListError>,
    lists: HashMap<String, Result<Option<TodoList>, ListError>>,
    update_error: Option<ListError>,
    calls: Arc<Mutex<Vec<ListCall>>>,
}

impl Default for ScriptedListService {
    /// A service that grants no access: metadata reads return `None`.
    fn default() -> Self {
        Self {
            metadata: Ok(None),
            lists: HashMap::new(),
            update_error: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl ScriptedListService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Metadata reads return these lists in the given order.
    pub fn with_lists(mut self, lists: Vec<ListMetadata>) -> Self {
        self.metadata = Ok(Some(ListsMetadata { lists }));
        self
    }

    /// Metadata reads fail with a transport error.
    pub fn failing_metadata(mut self, reason: impl Into<String>) -> Self {
        self.metadata = Err(ListError::Transport(reason.into()));
        self
    }

    /// `get_list(list_id, _)` returns a list holding `items`.
    pub fn with_items(self, list_id: impl Into<String>, items: Vec<ListItem>) -> Self {
        self.with_list(list_id, TodoList::with_items(items))
    }

    /// `get_list(list_id, _)` returns `list` verbatim.
    pub fn with_list(mut self, list_id: impl Into<String>, list: TodoList) -> Self {
        self.lists.insert(list_id.into(), Ok(Some(list)));
        self
    }

    /// `get_list(list_id, _)` fails with a transport error.
    pub fn failing_list(mut self, list_id: impl Into<String>, reason: impl Into<String>) -> Self {
        self.lists
            .insert(list_id.into(), Err(ListError::Transport(reason.into())));
        self
    }

    /// Every update is rejected with `error`.
    pub fn failing_update(mut self, error: ListError) -> Self {
        self.update_error = Some(error);
        self
    }

    /// Calls observed so far, oldest first.
    pub fn calls(&self) -> Vec<ListCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Shared handle on the call log, usable after the service is moved
    /// into an `Arc<dyn ListService>`.
    pub fn call_log(&self) -> Arc<Mutex<Vec<ListCall>>> {
        Arc::clone(&self.calls)
    }

    fn record(&self, call: ListCall) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

#[async_trait]
impl ListService for ScriptedListService {
    async fn get_lists_metadata(&self) -> Result<Option<ListsMetadata>, ListError> {
        self.record(ListCall::GetListsMetadata);
        self.metadata.clone()
    }

    async fn get_list(
        &self,
        list_id: &str,
        status: ListStatus,
    ) -> Result<Option<TodoList>, ListError> {
        self.record(ListCall::GetList { list_id: list_id.to_string(), status });
        // Unknown ids behave like a 404.
        self.lists.get(list_id).cloned().unwrap_or(Ok(None))
    }

    async fn update_list_item(
        &self,
        list_id: &str,
        item_id: &str,
        patch: &ItemPatch,
    ) -> Result<ListItem, ListError> {
        self.record(ListCall::UpdateListItem {
            list_id: list_id.to_string(),
            item_id: item_id.to_string(),
            patch: patch.clone(),
        });
        if let Some(e) = &self.update_error {
            return Err(e.clone());
        }
        let mut item = ListItem::new(item_id, patch.value.clone(), patch.version + 1);
        item.status = patch.status;
        Ok(item)
    }
}
