// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use std::sync::Arc;

use mealmaker_config::SkillConfig;
use mealmaker_lists::SessionAttributes;
use tracing::{debug, error, warn};

use crate::{
    handlers::{
        CancelAndStopIntentHandler, CompleteIngredientHandler, FallbackIntentHandler,
        HelpIntentHandler, LaunchRequestHandler, RequestHandler, SessionEndedRequestHandler,
    },
    speech, ListServiceFactory, RequestEnvelope, Response, ResponseBuilder, ResponseEnvelope,
};

/// Everything a handler sees for one request.
///
/// `attributes` starts as the session attributes sent by the platform and
/// is returned to it in the response envelope, including any changes the
/// handler made.
pub struct HandlerInput<'a> {
    pub envelope: &'a RequestEnvelope,
    pub attributes: SessionAttributes,
    pub lists: &'a dyn ListServiceFactory,
    pub config: &'a SkillConfig,
}

/// Ordered handler chain plus the catch-all error reply.
pub struct Skill {
    handlers: Vec<Box<dyn RequestHandler>>,
    config: SkillConfig,
    lists: Arc<dyn ListServiceFactory>,
}

impl Skill {
    /// Skill with no handlers; every request gets the error reply.
    pub fn empty(config: SkillConfig, lists: Arc<dyn ListServiceFactory>) -> Self {
        Self { handlers: Vec::new(), config, lists }
    }

    /// Skill with the standard Meal Maker handlers in dispatch order.
    pub fn new(config: SkillConfig, lists: Arc<dyn ListServiceFactory>) -> Self {
        Self::empty(config, lists)
            .with_handler(CancelAndStopIntentHandler)
            .with_handler(HelpIntentHandler)
            .with_handler(LaunchRequestHandler)
            .with_handler(CompleteIngredientHandler)
            .with_handler(SessionEndedRequestHandler)
            .with_handler(FallbackIntentHandler)
    }

    /// Append a handler; earlier handlers take precedence.
    pub fn with_handler(mut self, handler: impl RequestHandler + 'static) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    pub fn handler_names(&self) -> Vec<&str> {
        self.handlers.iter().map(|h| h.name()).collect()
    }

    /// Route one request.  Never fails: unmatched requests and handler
    /// errors both produce the generic error reply.
    pub async fn dispatch(&self, envelope: &RequestEnvelope) -> ResponseEnvelope {
        let mut attributes = envelope
            .session
            .as_ref()
            .and_then(|s| s.attributes.clone())
            .unwrap_or_default();
        attributes.is_new = envelope.session.as_ref().is_some_and(|s| s.new);

        let mut input = HandlerInput {
            envelope,
            attributes,
            lists: self.lists.as_ref(),
            config: &self.config,
        };

        let response = match self.handlers.iter().find(|h| h.can_handle(&input)) {
            Some(handler) => {
                debug!(
                    handler = handler.name(),
                    request_type = envelope.request_type(),
                    request_id = %envelope.request.request_id,
                    "dispatching request"
                );
                match handler.handle(&mut input).await {
                    Ok(response) => response,
                    Err(e) => {
                        error!(handler = handler.name(), "request handler failed: {e:#}");
                        error_response()
                    }
                }
            }
            None => {
                warn!(
                    request_type = envelope.request_type(),
                    intent = envelope.intent_name().unwrap_or("-"),
                    "no handler for request"
                );
                error_response()
            }
        };

        ResponseEnvelope::new(input.attributes, response)
    }
}

fn error_response() -> Response {
    ResponseBuilder::new()
        .speak(speech::ERROR)
        .reprompt(speech::ERROR)
        .build()
}
