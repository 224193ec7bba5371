// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//! Spoken phrases.  Everything returned here is SSML body text, ready for
//! [`crate::ResponseBuilder::speak`].

use mealmaker_lists::CompletionOutcome;

pub const PERMISSIONS_MISSING: &str =
    "Alexa List permissions are missing. You can grant permissions within the Alexa app.";
pub const NO_DEFAULT_LIST: &str = "I could not find your to-do list. Please check the Alexa app.";
pub const LIST_EMPTY: &str = "I could not return a recipe. Your ingredient list is empty.";
pub const COMPLETION_FAILED: &str = "I could not formulate a recipe.  Please try again later";
pub const GOODBYE: &str = "Goodbye!";
pub const FALLBACK: &str = "Sorry, I don't know about that. Please try again.";
pub const ERROR: &str = "Sorry, I had trouble doing what you asked. Please try again.";

/// Greeting for a launch; first-time sessions get the longer introduction.
pub fn welcome(skill_name: &str, is_new: bool) -> String {
    let name = escape_ssml(skill_name);
    if is_new {
        format!(
            "<say-as interpret-as=\"interjection\">Hello!</say-as> \
             Welcome to {name}! \
             I'll help you find the right recipe all from the comfort of your own home. \
             To make it easier, you can list the ingredients you have at home, \
             just check the Alexa app."
        )
    } else {
        format!(
            "Welcome back to {name}! \
             Make sure to list the ingredients you have in the Alexa app."
        )
    }
}

pub fn help(skill_name: &str) -> String {
    format!(
        "This is {}. I will find a recipe for ingredients you already have in your home. \
         To get started say I'm hungry",
        escape_ssml(skill_name)
    )
}

/// Phrase for each completion outcome.
pub fn completion(outcome: &CompletionOutcome) -> String {
    match outcome {
        CompletionOutcome::PermissionMissing => PERMISSIONS_MISSING.to_string(),
        CompletionOutcome::NoDefaultList => NO_DEFAULT_LIST.to_string(),
        CompletionOutcome::ListEmpty => LIST_EMPTY.to_string(),
        CompletionOutcome::Completed(value) => format!(
            "I successfully completed {}, which was your top todo.  Bye for now!",
            escape_ssml(value)
        ),
        CompletionOutcome::Failed(_) => COMPLETION_FAILED.to_string(),
    }
}

/// Escape user-supplied text for inclusion in SSML.
pub fn escape_ssml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
