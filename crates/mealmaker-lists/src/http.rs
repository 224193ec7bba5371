// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//! [`ListService`] over the household list REST API.
//!
//! # Endpoints
//! - `GET  {endpoint}/v2/householdlists/`
//! - `GET  {endpoint}/v2/householdlists/{listId}/{status}`
//! - `PUT  {endpoint}/v2/householdlists/{listId}/items/{itemId}`
//!
//! Every call carries `Authorization: Bearer <apiAccessToken>`.  On reads,
//! 401/403 (and 404 for a single list) mean "nothing you may see" and are
//! reported as `Ok(None)`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{ItemPatch, ListError, ListItem, ListService, ListStatus, ListsMetadata, TodoList};

/// Build the shared `reqwest::Client` used by every per-request
/// [`HttpListClient`].  `timeout_secs == 0` disables the timeout.
pub fn build_http_client(user_agent: &str, timeout_secs: u64) -> Result<reqwest::Client, ListError> {
    let mut builder = reqwest::Client::builder().user_agent(user_agent);
    if timeout_secs > 0 {
        builder = builder.timeout(Duration::from_secs(timeout_secs));
    }
    builder.build().map_err(ListError::from)
}

pub struct HttpListClient {
    client: reqwest::Client,
    /// API base, e.g. `https://api.amazonalexa.com`.
    endpoint: Url,
    access_token: Option<String>,
}

impl HttpListClient {
    /// `endpoint` is the API base without the `/v2/...` path.
    pub fn new(
        client: reqwest::Client,
        endpoint: &str,
        access_token: Option<String>,
    ) -> Result<Self, ListError> {
        let endpoint = Url::parse(endpoint.trim_end_matches('/'))
            .map_err(|e| ListError::InvalidEndpoint(format!("{endpoint}: {e}")))?;
        if endpoint.cannot_be_a_base() {
            return Err(ListError::InvalidEndpoint(endpoint.to_string()));
        }
        Ok(Self { client, endpoint, access_token })
    }

    /// Append path segments to the endpoint.  Segments are percent-encoded,
    /// so a `/` inside a base64 list id cannot split the path.
    fn url(&self, segments: &[&str]) -> Result<Url, ListError> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| ListError::InvalidEndpoint(self.endpoint.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GET `url` and decode the body.  `absent` lists the statuses that mean
    /// "no access / no such list".
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        absent: &[StatusCode],
    ) -> Result<Option<T>, ListError> {
        let Some(token) = self.access_token.as_deref() else {
            debug!("no API access token; treating list read as not permitted");
            return Ok(None);
        };

        debug!(%url, "list API GET");
        let resp = self.client.get(url).bearer_auth(token).send().await?;
        let status = resp.status();
        if absent.contains(&status) {
            debug!(status = status.as_u16(), "list API denied or list missing");
            return Ok(None);
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ListError::Status { status: status.as_u16(), body });
        }

        let bytes = resp.bytes().await?;
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| ListError::Decode(e.to_string()))
    }
}

#[async_trait]
impl ListService for HttpListClient {
    async fn get_lists_metadata(&self) -> Result<Option<ListsMetadata>, ListError> {
        // Trailing empty segment keeps the `/v2/householdlists/` form.
        let url = self.url(&["v2", "householdlists", ""])?;
        self.get_json(url, &[StatusCode::UNAUTHORIZED, StatusCode::FORBIDDEN])
            .await
    }

    async fn get_list(
        &self,
        list_id: &str,
        status: ListStatus,
    ) -> Result<Option<TodoList>, ListError> {
        let url = self.url(&["v2", "householdlists", list_id, status.as_str()])?;
        self.get_json(
            url,
            &[StatusCode::UNAUTHORIZED, StatusCode::FORBIDDEN, StatusCode::NOT_FOUND],
        )
        .await
    }

    async fn update_list_item(
        &self,
        list_id: &str,
        item_id: &str,
        patch: &ItemPatch,
    ) -> Result<ListItem, ListError> {
        let token = self.access_token.as_deref().ok_or(ListError::MissingAccessToken)?;
        let url = self.url(&["v2", "householdlists", list_id, "items", item_id])?;

        debug!(%url, version = patch.version, "list API PUT");
        let resp = self
            .client
            .put(url)
            .bearer_auth(token)
            .json(patch)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ListError::Status { status: status.as_u16(), body });
        }

        let bytes = resp.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ListError::Decode(e.to_string()))
    }
}
