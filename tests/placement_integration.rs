use std::fs;
use std::io::Write;

use board_placer::filtering::LabelOperator;
use board_placer::{
    BoardItemPlacer, GitHubClient, GithubOutputFile, InputsBuilder, OutputSink, PlacementOutcome,
    TriggerContext,
};
use serde_json::json;
use tempfile::NamedTempFile;
use wiremock::matchers::{body_string_contains, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

const EVENT: &str = r#"{
    "action": "labeled",
    "issue": {
        "node_id": "I_kwDOBq",
        "html_url": "https://github.com/acme/widgets/issues/17",
        "labels": [{ "name": "Bug" }]
    },
    "repository": { "owner": { "login": "acme" } }
}"#;

async fn mount(server: &MockServer, needle: &str, data: serde_json::Value) {
    Mock::given(method("POST"))
        .and(body_string_contains(needle))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": data })))
        .expect(1)
        .mount(server)
        .await;
}

#[test]
fn test_output_file_appends_lines() {
    let file = NamedTempFile::new().unwrap();
    let mut outputs = GithubOutputFile::new(file.path());

    outputs.publish("itemId", "PVTI_1").unwrap();
    outputs.publish("itemId", "PVTI_1").unwrap();

    let written = fs::read_to_string(file.path()).unwrap();
    assert_eq!(written, "itemId=PVTI_1\nitemId=PVTI_1\n");
}

#[test]
fn test_output_file_rejects_multiline_values() {
    let file = NamedTempFile::new().unwrap();
    let mut outputs = GithubOutputFile::new(file.path());

    assert!(outputs.publish("itemId", "a\nb").is_err());
    assert_eq!(fs::read_to_string(file.path()).unwrap(), "");
}

#[test]
fn test_trigger_context_from_event_file() {
    let mut event = NamedTempFile::new().unwrap();
    event.write_all(EVENT.as_bytes()).unwrap();

    let trigger = TriggerContext::from_event_file(event.path()).unwrap();
    assert_eq!(trigger.content.content_id, "I_kwDOBq");
    assert!(trigger.content.labels.contains("bug"));
}

#[tokio::test]
async fn test_full_run_against_mock_api() {
    let server = MockServer::start().await;
    mount(&server, "projectV2(number: $projectNumber)", json!({
        "organization": { "projectV2": { "id": "PVT_acme" } }
    })).await;
    mount(&server, "addProjectV2ItemById", json!({
        "addProjectV2ItemById": { "item": { "id": "PVTI_17" } }
    })).await;
    mount(&server, "ProjectV2SingleSelectField", json!({
        "node": { "field": { "id": "F_status", "options": [{ "id": "O_triage", "name": "Triage" }] } }
    })).await;
    mount(&server, "singleSelectOptionId", json!({
        "updateProjectV2ItemFieldValue": { "projectV2Item": { "id": "PVTI_17" } }
    })).await;
    mount(&server, "ProjectV2IterationField", json!({
        "node": { "field": { "id": "F_iter", "configuration": { "iterations": [
            { "id": "IT_old", "startDate": "2024-05-06" },
            { "id": "IT_new", "startDate": "2024-05-20" }
        ] } } }
    })).await;
    mount(&server, "iterationId: $iterationId", json!({
        "updateProjectV2ItemFieldValue": { "projectV2Item": { "id": "PVTI_17" } }
    })).await;

    let inputs = InputsBuilder::new("https://github.com/orgs/acme/projects/2", "Status", "Triage")
        .with_token("ghp_test")
        .with_labels("bug, regression", LabelOperator::Or)
        .with_api_url(&format!("{}/graphql", server.uri()))
        .build();
    let trigger = TriggerContext::from_event_json(EVENT).unwrap();
    let client = GitHubClient::new(&inputs.api_url, &inputs.github_token).unwrap();
    let output_file = NamedTempFile::new().unwrap();
    let mut outputs = GithubOutputFile::new(output_file.path());

    let outcome = BoardItemPlacer::new(&client, &mut outputs)
        .run(&inputs, &trigger)
        .await
        .unwrap();

    match outcome {
        PlacementOutcome::Placed(report) => {
            assert_eq!(report.item_id(), "PVTI_17");
            assert_eq!(report.iteration.iteration.iteration_id, "IT_new");
        }
        other => panic!("Expected Placed, got {:?}", other),
    }

    let lines = fs::read_to_string(output_file.path()).unwrap();
    assert_eq!(lines.lines().last(), Some("itemId=PVTI_17"));
    assert_eq!(lines.lines().count(), 3);
}

#[tokio::test]
async fn test_skipped_run_sends_no_requests() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let inputs = InputsBuilder::new("https://github.com/orgs/acme/projects/2", "Status", "Triage")
        .with_token("ghp_test")
        .with_labels("bug", LabelOperator::Not)
        .with_api_url(&format!("{}/graphql", server.uri()))
        .build();
    let trigger = TriggerContext::from_event_json(EVENT).unwrap();
    let client = GitHubClient::new(&inputs.api_url, &inputs.github_token).unwrap();
    let output_file = NamedTempFile::new().unwrap();
    let mut outputs = GithubOutputFile::new(output_file.path());

    let outcome = BoardItemPlacer::new(&client, &mut outputs)
        .run(&inputs, &trigger)
        .await
        .unwrap();

    assert!(matches!(outcome, PlacementOutcome::Skipped { .. }));
    assert_eq!(fs::read_to_string(output_file.path()).unwrap(), "");
}
