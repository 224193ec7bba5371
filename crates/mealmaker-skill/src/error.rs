// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use mealmaker_lists::ListError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SkillError {
    #[error("request carries no list API endpoint and none is configured")]
    MissingApiEndpoint,

    #[error("list client error: {0}")]
    Lists(#[from] ListError),

    #[error("invalid request envelope: {0}")]
    InvalidEnvelope(String),
}
