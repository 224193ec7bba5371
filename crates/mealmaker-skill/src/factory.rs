// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use std::sync::Arc;

use mealmaker_config::ListsConfig;
use mealmaker_lists::{build_http_client, HttpListClient, ListService};
use tracing::debug;

use crate::{SkillError, SystemContext};

/// Builds the list client for one request.
///
/// The platform hands out a fresh access token (and the regional endpoint)
/// with every request, so clients are per-request while the connection pool
/// behind them is shared.
pub trait ListServiceFactory: Send + Sync {
    fn list_service(&self, system: &SystemContext) -> Result<Arc<dyn ListService>, SkillError>;
}

/// Factory for [`HttpListClient`]s against the real list API.
pub struct HttpListServiceFactory {
    client: reqwest::Client,
    endpoint_override: Option<String>,
}

impl HttpListServiceFactory {
    pub fn from_config(cfg: &ListsConfig) -> Result<Self, SkillError> {
        Ok(Self {
            client: build_http_client(&cfg.user_agent, cfg.timeout_secs)?,
            endpoint_override: cfg.endpoint.clone(),
        })
    }
}

impl ListServiceFactory for HttpListServiceFactory {
    fn list_service(&self, system: &SystemContext) -> Result<Arc<dyn ListService>, SkillError> {
        let endpoint = self
            .endpoint_override
            .as_deref()
            .or(system.api_endpoint.as_deref())
            .ok_or(SkillError::MissingApiEndpoint)?;
        debug!(endpoint, "building list client");
        let client = HttpListClient::new(
            self.client.clone(),
            endpoint,
            system.api_access_token.clone(),
        )?;
        Ok(Arc::new(client))
    }
}

/// Factory that always hands out the same service, e.g. a
/// [`mealmaker_lists::ScriptedListService`].
pub struct FixedListServiceFactory {
    service: Arc<dyn ListService>,
}

impl FixedListServiceFactory {
    pub fn new(service: Arc<dyn ListService>) -> Self {
        Self { service }
    }
}

impl ListServiceFactory for FixedListServiceFactory {
    fn list_service(&self, _system: &SystemContext) -> Result<Arc<dyn ListService>, SkillError> {
        Ok(Arc::clone(&self.service))
    }
}
