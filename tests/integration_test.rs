// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
/// End-to-end: config file → skill with the HTTP list client → stub list API.
#[path = "../crates/mealmaker-lists/tests/common/mod.rs"]
mod common;

use std::io::Write;
use std::sync::Arc;

use common::{mock_server, reply};
use mealmaker_skill::{HttpListServiceFactory, RequestEnvelope, Skill};

#[tokio::test]
async fn complete_ingredient_against_stub_api() {
    // "aGgtVEFTSw==" decodes to "hh-TASK".
    let (endpoint, mut rx) = mock_server(vec![
        reply(200, r#"{"lists":[{"listId":"c2hvcC1TSE9QUElOR19JVEVN","name":"Shopping List"},{"listId":"aGgtVEFTSw==","name":"To-do List"}]}"#),
        reply(200, r#"{"listId":"aGgtVEFTSw==","items":[{"id":"item-1","version":5,"value":"tomatoes","status":"active"}]}"#),
        reply(200, r#"{"id":"item-1","version":6,"value":"tomatoes","status":"completed"}"#),
    ])
    .await;

    let mut cfg_file = tempfile::NamedTempFile::new().unwrap();
    writeln!(cfg_file, "lists:\n  endpoint: \"{endpoint}\"\n  timeout_secs: 5").unwrap();
    let config = mealmaker_config::load(Some(cfg_file.path())).unwrap();

    let lists = HttpListServiceFactory::from_config(&config.lists).unwrap();
    let skill = Skill::new(config.skill.clone(), Arc::new(lists));

    let envelope = RequestEnvelope::from_json(
        br#"{
            "version": "1.0",
            "session": { "new": true, "sessionId": "s", "attributes": {} },
            "context": { "System": { "apiEndpoint": "https://unused.example",
                                     "apiAccessToken": "tok" } },
            "request": { "type": "IntentRequest", "requestId": "r",
                         "intent": { "name": "CompleteIngredientIntent" } }
        }"#,
    )
    .unwrap();

    let response = skill.dispatch(&envelope).await;
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(
        json["response"]["outputSpeech"]["ssml"],
        "<speak>I successfully completed tomatoes, which was your top todo.  Bye for now!</speak>"
    );
    assert_eq!(json["sessionAttributes"]["todoListId"], "aGgtVEFTSw==");

    let mut seen = Vec::new();
    for _ in 0..3 {
        let req = rx.recv().await.unwrap();
        seen.push((req.method, req.path));
    }
    assert_eq!(seen[0], ("GET".to_string(), "/v2/householdlists/".to_string()));
    assert_eq!(seen[1], ("GET".to_string(), "/v2/householdlists/aGgtVEFTSw==/active".to_string()));
    assert_eq!(seen[2], ("PUT".to_string(), "/v2/householdlists/aGgtVEFTSw==/items/item-1".to_string()));
    assert_eq!(rx.recv().await.map(|r| r.path), None);
}

#[test]
fn config_defaults_are_valid() {
    let config = mealmaker_config::Config::default();
    assert_eq!(config.skill.name, "Meal Maker");
    assert!(config.lists.endpoint.is_none());
}
