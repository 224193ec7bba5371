// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ListError {
    #[error("list API transport error: {0}")]
    Transport(String),

    #[error("list API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed list API response: {0}")]
    Decode(String),

    #[error("invalid list API endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("no API access token in the request")]
    MissingAccessToken,
}

impl From<reqwest::Error> for ListError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ListError::Decode(e.to_string())
        } else {
            ListError::Transport(e.to_string())
        }
    }
}
