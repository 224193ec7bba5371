// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//! Request routing for the Meal Maker voice skill.
//!
//! A [`Skill`] receives a [`RequestEnvelope`] from the voice platform, hands
//! it to the first [`RequestHandler`] that accepts it and returns a
//! [`ResponseEnvelope`] carrying the speech and the updated session
//! attributes.  [`server`] hosts a skill behind an HTTP endpoint.

mod envelope;
mod error;
mod factory;
mod handlers;
mod response;
pub mod server;
mod skill;
pub mod speech;

pub use envelope::*;
pub use error::SkillError;
pub use factory::{FixedListServiceFactory, HttpListServiceFactory, ListServiceFactory};
pub use handlers::{
    CancelAndStopIntentHandler, CompleteIngredientHandler, FallbackIntentHandler,
    HelpIntentHandler, LaunchRequestHandler, RequestHandler, SessionEndedRequestHandler,
};
pub use response::{Card, OutputSpeech, Reprompt, Response, ResponseBuilder};
pub use skill::{HandlerInput, Skill};
