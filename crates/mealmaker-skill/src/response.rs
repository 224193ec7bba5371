// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use serde::{Deserialize, Serialize};

/// The `response` object of a [`crate::ResponseEnvelope`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub should_end_session: Option<bool>,
}

impl Response {
    /// Text inside `<speak>…</speak>`, if any speech was set.
    pub fn speech_text(&self) -> Option<&str> {
        self.output_speech.as_ref().map(OutputSpeech::inner_text)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    #[serde(rename = "SSML")]
    Ssml { ssml: String },
}

impl OutputSpeech {
    pub fn ssml(text: &str) -> Self {
        Self::Ssml { ssml: format!("<speak>{text}</speak>") }
    }

    fn inner_text(&self) -> &str {
        match self {
            Self::Ssml { ssml } => ssml
                .strip_prefix("<speak>")
                .and_then(|s| s.strip_suffix("</speak>"))
                .unwrap_or(ssml),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Card {
    /// Asks the user, in the companion app, to grant the listed scopes.
    AskForPermissionsConsent { permissions: Vec<String> },
}

/// Fluent construction of a [`Response`].
#[derive(Debug, Default)]
pub struct ResponseBuilder {
    response: Response,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn speak(mut self, text: &str) -> Self {
        self.response.output_speech = Some(OutputSpeech::ssml(text));
        self
    }

    /// Setting a reprompt keeps the session open for the user's answer.
    pub fn reprompt(mut self, text: &str) -> Self {
        self.response.reprompt = Some(Reprompt { output_speech: OutputSpeech::ssml(text) });
        self.response.should_end_session = Some(false);
        self
    }

    pub fn with_ask_for_permissions_consent_card(mut self, permissions: &[String]) -> Self {
        self.response.card = Some(Card::AskForPermissionsConsent {
            permissions: permissions.to_vec(),
        });
        self
    }

    pub fn build(self) -> Response {
        self.response
    }
}
