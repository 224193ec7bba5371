// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use tracing::{debug, info, warn};

use crate::{ListRole, ListService, SessionAttributes};

/// Result of looking up the default to-do list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListResolution {
    /// Encoded id of the default to-do list.
    Resolved(String),
    /// Metadata could not be read: the call failed or returned nothing.
    PermissionMissing,
    /// Metadata was readable but no list carries the to-do suffix.
    NoDefaultList,
}

/// Find the platform-default to-do list.
///
/// A cached `session.todo_list_id` is returned without touching the
/// network.  Otherwise the first list (in service order) whose decoded id
/// ends with `-TASK` wins.  The resolved id is written back into `session`.
/// One attempt, no retries.
pub async fn resolve_todo_list(
    session: &mut SessionAttributes,
    client: &dyn ListService,
) -> ListResolution {
    if let Some(cached) = session.todo_list_id.clone() {
        debug!(list_id = %cached, "to-do list id cached in session");
        return ListResolution::Resolved(cached);
    }

    let metadata = match client.get_lists_metadata().await {
        Ok(Some(m)) if !m.lists.is_empty() => m,
        Ok(_) => {
            info!("list metadata unavailable; permissions are not granted");
            return ListResolution::PermissionMissing;
        }
        Err(e) => {
            warn!("list metadata request failed: {e}");
            return ListResolution::PermissionMissing;
        }
    };

    let found = metadata.lists.into_iter().find(|list| {
        debug!(name = %list.name, list_id = %list.list_id, "inspecting list");
        list.role() == Some(ListRole::Todo)
    });

    match found {
        Some(list) => {
            debug!(name = %list.name, "default to-do list resolved");
            session.todo_list_id = Some(list.list_id.clone());
            ListResolution::Resolved(list.list_id)
        }
        None => {
            info!("no default to-do list among the user's lists");
            ListResolution::NoDefaultList
        }
    }
}

#[cfg(test)]
mod tests {
    use base64::Engine;

    use super::*;
    use crate::{ListCall, ListMetadata, ScriptedListService};

    fn encoded(raw: &str) -> String {
        base64::engine::general_purpose::STANDARD.encode(raw)
    }

    fn meta(raw: &str, name: &str) -> ListMetadata {
        ListMetadata::new(encoded(raw), name)
    }

    #[tokio::test]
    async fn finds_todo_list_among_others() {
        let client = ScriptedListService::new().with_lists(vec![
            meta("acct-SHOPPING_ITEM", "Shopping List"),
            meta("acct-TASK", "To-do List"),
            meta("acct-custom", "Pantry"),
        ]);
        let mut session = SessionAttributes::default();

        let res = resolve_todo_list(&mut session, &client).await;

        assert_eq!(res, ListResolution::Resolved(encoded("acct-TASK")));
        assert_eq!(session.todo_list_id, Some(encoded("acct-TASK")));
    }

    #[tokio::test]
    async fn first_matching_list_wins() {
        let client = ScriptedListService::new().with_lists(vec![
            meta("first-TASK", "A"),
            meta("second-TASK", "B"),
        ]);
        let mut session = SessionAttributes::default();

        let res = resolve_todo_list(&mut session, &client).await;

        assert_eq!(res, ListResolution::Resolved(encoded("first-TASK")));
    }

    #[tokio::test]
    async fn no_todo_suffix_is_no_default_list() {
        let client = ScriptedListService::new().with_lists(vec![
            meta("acct-SHOPPING_ITEM", "Shopping List"),
            meta("acct-task", "lowercase does not count"),
        ]);
        let mut session = SessionAttributes::default();

        let res = resolve_todo_list(&mut session, &client).await;

        assert_eq!(res, ListResolution::NoDefaultList);
        assert_eq!(session.todo_list_id, None);
    }

    #[tokio::test]
    async fn cached_id_skips_metadata_call() {
        let client = ScriptedListService::new().with_lists(vec![meta("other-TASK", "X")]);
        let mut session = SessionAttributes::with_todo_list_id("cached-id");

        let res = resolve_todo_list(&mut session, &client).await;

        assert_eq!(res, ListResolution::Resolved("cached-id".into()));
        assert_eq!(session.todo_list_id.as_deref(), Some("cached-id"));
        assert!(client.calls().is_empty(), "cache hit must not call the service");
    }

    #[tokio::test]
    async fn missing_metadata_is_permission_missing() {
        let client = ScriptedListService::new();
        let mut session = SessionAttributes::default();

        let res = resolve_todo_list(&mut session, &client).await;

        assert_eq!(res, ListResolution::PermissionMissing);
        assert_eq!(client.calls(), vec![ListCall::GetListsMetadata]);
    }

    #[tokio::test]
    async fn empty_metadata_is_permission_missing() {
        let client = ScriptedListService::new().with_lists(vec![]);
        let mut session = SessionAttributes::default();

        assert_eq!(
            resolve_todo_list(&mut session, &client).await,
            ListResolution::PermissionMissing
        );
    }

    #[tokio::test]
    async fn failed_metadata_call_is_permission_missing_without_retry() {
        let client = ScriptedListService::new().failing_metadata("connection reset");
        let mut session = SessionAttributes::default();

        let res = resolve_todo_list(&mut session, &client).await;

        assert_eq!(res, ListResolution::PermissionMissing);
        assert_eq!(client.calls().len(), 1);
    }
}
