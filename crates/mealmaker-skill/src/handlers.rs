// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use anyhow::Context;
use async_trait::async_trait;
use mealmaker_lists::{complete_top_item, CompletionOutcome};
use tracing::info;

use crate::{
    envelope::{
        CANCEL_INTENT, COMPLETE_INGREDIENT_INTENT, FALLBACK_INTENT, HELP_INTENT, LAUNCH_REQUEST,
        SESSION_ENDED_REQUEST, STOP_INTENT,
    },
    speech, HandlerInput, Response, ResponseBuilder,
};

/// One entry in the [`crate::Skill`] dispatch chain.
#[async_trait]
pub trait RequestHandler: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &str;

    fn can_handle(&self, input: &HandlerInput<'_>) -> bool;

    async fn handle(&self, input: &mut HandlerInput<'_>) -> anyhow::Result<Response>;
}

pub struct LaunchRequestHandler;

#[async_trait]
impl RequestHandler for LaunchRequestHandler {
    fn name(&self) -> &str {
        "launch"
    }

    fn can_handle(&self, input: &HandlerInput<'_>) -> bool {
        input.envelope.request_type() == LAUNCH_REQUEST
    }

    async fn handle(&self, input: &mut HandlerInput<'_>) -> anyhow::Result<Response> {
        let text = speech::welcome(&input.config.name, input.attributes.is_new);
        Ok(ResponseBuilder::new()
            .speak(&text)
            .reprompt(&text)
            .with_ask_for_permissions_consent_card(&input.config.permissions)
            .build())
    }
}

/// Completes the top item of the user's to-do list.
pub struct CompleteIngredientHandler;

#[async_trait]
impl RequestHandler for CompleteIngredientHandler {
    fn name(&self) -> &str {
        "complete-ingredient"
    }

    fn can_handle(&self, input: &HandlerInput<'_>) -> bool {
        input.envelope.is_intent(COMPLETE_INGREDIENT_INTENT)
    }

    async fn handle(&self, input: &mut HandlerInput<'_>) -> anyhow::Result<Response> {
        info!("completing the top to-do item");
        let client = input
            .lists
            .list_service(&input.envelope.context.system)
            .context("building list client")?;

        let outcome = complete_top_item(&mut input.attributes, client.as_ref()).await;
        info!(?outcome, "completion finished");

        let builder = ResponseBuilder::new().speak(&speech::completion(&outcome));
        let builder = match outcome {
            CompletionOutcome::PermissionMissing => {
                builder.with_ask_for_permissions_consent_card(&input.config.permissions)
            }
            _ => builder,
        };
        Ok(builder.build())
    }
}

pub struct HelpIntentHandler;

#[async_trait]
impl RequestHandler for HelpIntentHandler {
    fn name(&self) -> &str {
        "help"
    }

    fn can_handle(&self, input: &HandlerInput<'_>) -> bool {
        input.envelope.is_intent(HELP_INTENT)
    }

    async fn handle(&self, input: &mut HandlerInput<'_>) -> anyhow::Result<Response> {
        let text = speech::help(&input.config.name);
        Ok(ResponseBuilder::new().speak(&text).reprompt(&text).build())
    }
}

pub struct CancelAndStopIntentHandler;

#[async_trait]
impl RequestHandler for CancelAndStopIntentHandler {
    fn name(&self) -> &str {
        "cancel-stop"
    }

    fn can_handle(&self, input: &HandlerInput<'_>) -> bool {
        input.envelope.is_intent(CANCEL_INTENT) || input.envelope.is_intent(STOP_INTENT)
    }

    async fn handle(&self, _input: &mut HandlerInput<'_>) -> anyhow::Result<Response> {
        Ok(ResponseBuilder::new().speak(speech::GOODBYE).build())
    }
}

pub struct SessionEndedRequestHandler;

#[async_trait]
impl RequestHandler for SessionEndedRequestHandler {
    fn name(&self) -> &str {
        "session-ended"
    }

    fn can_handle(&self, input: &HandlerInput<'_>) -> bool {
        input.envelope.request_type() == SESSION_ENDED_REQUEST
    }

    async fn handle(&self, input: &mut HandlerInput<'_>) -> anyhow::Result<Response> {
        let request = &input.envelope.request;
        info!(
            reason = request.reason.as_deref().unwrap_or("unknown"),
            error = ?request.error,
            "session ended"
        );
        Ok(ResponseBuilder::new().build())
    }
}

pub struct FallbackIntentHandler;

#[async_trait]
impl RequestHandler for FallbackIntentHandler {
    fn name(&self) -> &str {
        "fallback"
    }

    fn can_handle(&self, input: &HandlerInput<'_>) -> bool {
        input.envelope.is_intent(FALLBACK_INTENT)
    }

    async fn handle(&self, _input: &mut HandlerInput<'_>) -> anyhow::Result<Response> {
        Ok(ResponseBuilder::new()
            .speak(speech::FALLBACK)
            .reprompt(speech::FALLBACK)
            .build())
    }
}
