// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use tracing::{debug, info, warn};

use crate::{resolve_todo_list, ListResolution, ListService, ListStatus, SessionAttributes};

/// Structured result of [`complete_top_item`].  Never carries speech text;
/// the caller decides how to phrase each case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// No access to the list store, or the resolved list is not readable.
    PermissionMissing,
    /// The store is readable but holds no default to-do list.
    NoDefaultList,
    /// The list was read and has no active items.
    ListEmpty,
    /// The top item was marked completed; carries its description.
    Completed(String),
    /// Transport, protocol or service error while reading or updating.
    Failed(String),
}

/// Resolve the default to-do list, take its first active item and mark it
/// completed.
///
/// Calls are strictly sequential: resolve, fetch, update.  Every client
/// error is absorbed into [`CompletionOutcome::Failed`]; nothing is retried
/// and a failure after the fetch leaves the list untouched.
pub async fn complete_top_item(
    session: &mut SessionAttributes,
    client: &dyn ListService,
) -> CompletionOutcome {
    let was_cached = session.todo_list_id.is_some();
    let list_id = match resolve_todo_list(session, client).await {
        ListResolution::Resolved(id) => id,
        ListResolution::PermissionMissing => return CompletionOutcome::PermissionMissing,
        ListResolution::NoDefaultList => return CompletionOutcome::NoDefaultList,
    };

    let list = match client.get_list(&list_id, ListStatus::Active).await {
        Ok(Some(list)) => list,
        Ok(None) => {
            info!(%list_id, "to-do list not readable");
            if was_cached {
                // The cached id may be stale; resolve afresh on the next turn.
                session.todo_list_id = None;
            }
            return CompletionOutcome::PermissionMissing;
        }
        Err(e) => {
            warn!(%list_id, "fetching to-do list failed: {e}");
            return CompletionOutcome::Failed(e.to_string());
        }
    };

    let Some(item) = list.top_item() else {
        debug!(%list_id, "to-do list has no active items");
        return CompletionOutcome::ListEmpty;
    };

    let patch = item.completion_patch();
    match client.update_list_item(&list_id, &item.id, &patch).await {
        Ok(_) => {
            info!(item_id = %item.id, version = item.version, "top to-do item completed");
            CompletionOutcome::Completed(item.value.clone())
        }
        Err(e) => {
            warn!(item_id = %item.id, "completing to-do item failed: {e}");
            CompletionOutcome::Failed(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use base64::Engine;

    use super::*;
    use crate::{
        ItemPatch, ListCall, ListError, ListItem, ListMetadata, ScriptedListService, TodoList,
    };

    fn todo_id() -> String {
        base64::engine::general_purpose::STANDARD.encode("amzn1.account.ABC-TASK")
    }

    fn with_todo_list() -> ScriptedListService {
        ScriptedListService::new().with_lists(vec![ListMetadata::new(todo_id(), "To-do List")])
    }

    #[tokio::test]
    async fn completes_first_item_with_its_version() {
        let client = with_todo_list().with_items(
            todo_id(),
            vec![ListItem::new("i1", "eggs", 3), ListItem::new("i2", "milk", 1)],
        );
        let mut session = SessionAttributes::default();

        let outcome = complete_top_item(&mut session, &client).await;

        assert_eq!(outcome, CompletionOutcome::Completed("eggs".into()));
        assert_eq!(
            client.calls(),
            vec![
                ListCall::GetListsMetadata,
                ListCall::GetList { list_id: todo_id(), status: ListStatus::Active },
                ListCall::UpdateListItem {
                    list_id: todo_id(),
                    item_id: "i1".into(),
                    patch: ItemPatch {
                        value: "eggs".into(),
                        status: ListStatus::Completed,
                        version: 3,
                    },
                },
            ]
        );
        assert_eq!(session.todo_list_id, Some(todo_id()));
    }

    #[tokio::test]
    async fn empty_list_issues_no_update() {
        let client = with_todo_list().with_items(todo_id(), vec![]);
        let mut session = SessionAttributes::default();

        let outcome = complete_top_item(&mut session, &client).await;

        assert_eq!(outcome, CompletionOutcome::ListEmpty);
        assert!(!client
            .calls()
            .iter()
            .any(|c| matches!(c, ListCall::UpdateListItem { .. })));
    }

    #[tokio::test]
    async fn absent_items_field_is_empty() {
        let client = with_todo_list().with_list(todo_id(), TodoList::default());
        let mut session = SessionAttributes::default();

        assert_eq!(
            complete_top_item(&mut session, &client).await,
            CompletionOutcome::ListEmpty
        );
    }

    #[tokio::test]
    async fn missing_metadata_stops_before_list_calls() {
        let client = ScriptedListService::new();
        let mut session = SessionAttributes::default();

        let outcome = complete_top_item(&mut session, &client).await;

        assert_eq!(outcome, CompletionOutcome::PermissionMissing);
        assert_eq!(client.calls(), vec![ListCall::GetListsMetadata]);
    }

    #[tokio::test]
    async fn unreadable_list_is_permission_missing_not_empty() {
        // Metadata names the list but fetching it yields nothing.
        let client = with_todo_list();
        let mut session = SessionAttributes::default();

        assert_eq!(
            complete_top_item(&mut session, &client).await,
            CompletionOutcome::PermissionMissing
        );
    }

    #[tokio::test]
    async fn no_todo_list_is_reported_separately() {
        let shopping = base64::engine::general_purpose::STANDARD.encode("acct-SHOPPING_ITEM");
        let client =
            ScriptedListService::new().with_lists(vec![ListMetadata::new(shopping, "Shopping")]);
        let mut session = SessionAttributes::default();

        assert_eq!(
            complete_top_item(&mut session, &client).await,
            CompletionOutcome::NoDefaultList
        );
        assert_eq!(client.calls().len(), 1);
    }

    #[tokio::test]
    async fn update_failure_is_failed_without_retry() {
        let client = with_todo_list()
            .with_items(todo_id(), vec![ListItem::new("i1", "eggs", 3)])
            .failing_update(ListError::Status { status: 409, body: "version conflict".into() });
        let mut session = SessionAttributes::default();

        let outcome = complete_top_item(&mut session, &client).await;

        assert!(matches!(outcome, CompletionOutcome::Failed(ref r) if r.contains("409")));
        let updates = client
            .calls()
            .into_iter()
            .filter(|c| matches!(c, ListCall::UpdateListItem { .. }))
            .count();
        assert_eq!(updates, 1, "update must not be retried");
    }

    #[tokio::test]
    async fn fetch_failure_is_failed() {
        let client = with_todo_list().failing_list(todo_id(), "timed out");
        let mut session = SessionAttributes::default();

        let outcome = complete_top_item(&mut session, &client).await;

        assert!(matches!(outcome, CompletionOutcome::Failed(_)));
    }

    #[tokio::test]
    async fn cached_list_id_goes_straight_to_fetch() {
        let client = ScriptedListService::new()
            .with_items("cached", vec![ListItem::new("i9", "rice", 7)]);
        let mut session = SessionAttributes::with_todo_list_id("cached");

        let outcome = complete_top_item(&mut session, &client).await;

        assert_eq!(outcome, CompletionOutcome::Completed("rice".into()));
        assert_eq!(
            client.calls().first(),
            Some(&ListCall::GetList { list_id: "cached".into(), status: ListStatus::Active })
        );
    }

    #[tokio::test]
    async fn stale_cached_id_is_dropped_and_next_turn_resolves() {
        let client = with_todo_list().with_items(todo_id(), vec![ListItem::new("i1", "eggs", 3)]);
        let mut session = SessionAttributes::with_todo_list_id("stale-id");

        let first = complete_top_item(&mut session, &client).await;
        assert_eq!(first, CompletionOutcome::PermissionMissing);
        assert_eq!(session.todo_list_id, None);

        let second = complete_top_item(&mut session, &client).await;
        assert_eq!(second, CompletionOutcome::Completed("eggs".into()));
        assert_eq!(session.todo_list_id, Some(todo_id()));
        assert_eq!(
            client.calls()[..2],
            [
                ListCall::GetList { list_id: "stale-id".into(), status: ListStatus::Active },
                ListCall::GetListsMetadata,
            ]
        );
    }
}
