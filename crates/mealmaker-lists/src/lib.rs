// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//! Household list access for the Meal Maker skill.
//!
//! [`ListService`] is the seam to the platform's list management API.
//! [`resolve_todo_list`] finds the default to-do list and
//! [`complete_top_item`] marks its first active item completed, reporting
//! the result as a [`CompletionOutcome`] instead of an error.

mod error;
mod http;
mod mock;
mod resolver;
mod service;
mod session;
mod types;
mod workflow;

pub use error::ListError;
pub use http::{build_http_client, HttpListClient};
pub use mock::{ListCall, ScriptedListService};
pub use resolver::{resolve_todo_list, ListResolution};
pub use service::ListService;
pub use session::SessionAttributes;
pub use types::*;
pub use workflow::{complete_top_item, CompletionOutcome};
