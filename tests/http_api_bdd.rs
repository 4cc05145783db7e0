//! Behavioural tests for the repository HTTP routes.

#[path = "http_api_bdd/mod.rs"]
mod http_api_bdd_support;

use http_api_bdd_support::{ApiState, SeededRepository, send_request};
use octo_manager::github::PullRequest;
use reqwest::Method;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::{Value, json};

#[fixture]
fn api_state() -> ApiState {
    ApiState::default()
}

fn parse_json(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|error| panic!("invalid JSON `{raw}`: {error}"))
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}

fn recorded_body(api_state: &ApiState) -> Value {
    api_state
        .response
        .with_ref(|response| response.body.clone())
        .unwrap_or_else(|| panic!("no response recorded"))
}

#[given("an upstream with no repositories")]
fn empty_upstream(api_state: &ApiState) {
    api_state.seeds.set(Vec::new());
}

#[given("an upstream with the repositories {names}")]
fn upstream_with_repositories(api_state: &ApiState, names: String) {
    for name in split_list(&names) {
        api_state.seed(SeededRepository {
            name,
            pull_requests: Vec::new(),
        });
    }
}

#[given("an upstream repository {name} with {count:u64} open pull requests")]
fn upstream_with_pull_requests(api_state: &ApiState, name: String, count: u64) {
    let pull_requests = (1..=count)
        .map(|number| PullRequest::titled(number, &format!("PR {number}")))
        .collect();
    api_state.seed(SeededRepository {
        name,
        pull_requests,
    });
}

#[when("a client posts {body} to {path}")]
fn client_posts(api_state: &ApiState, body: String, path: String) {
    send_request(api_state, Method::POST, &path, Some(parse_json(&body)));
}

#[when("a client sends {method} {path}")]
fn client_sends(api_state: &ApiState, method: String, path: String) {
    let parsed = Method::from_bytes(method.as_bytes())
        .unwrap_or_else(|error| panic!("unknown method `{method}`: {error}"));
    send_request(api_state, parsed, &path, None);
}

#[then("the response status is {status:u16}")]
fn assert_status(api_state: &ApiState, status: u16) {
    let actual = api_state
        .response
        .with_ref(|response| response.status)
        .unwrap_or_else(|| panic!("no response recorded"));

    assert_eq!(actual, status, "status mismatch");
}

#[then("the response body is {body}")]
fn assert_body(api_state: &ApiState, body: String) {
    assert_eq!(recorded_body(api_state), parse_json(&body), "body mismatch");
}

#[then("the upstream holds the repositories {names}")]
fn assert_upstream_names(api_state: &ApiState, names: String) {
    assert_eq!(api_state.upstream_names(), split_list(&names));
}

#[then("the upstream holds no repositories")]
fn assert_upstream_empty(api_state: &ApiState) {
    assert!(
        api_state.upstream_names().is_empty(),
        "expected the upstream to be empty"
    );
}

#[then("the pull request titles are {titles}")]
fn assert_pull_request_titles(api_state: &ApiState, titles: String) {
    let body = recorded_body(api_state);
    let actual: Vec<String> = body
        .get("pull_requests")
        .and_then(Value::as_array)
        .unwrap_or_else(|| panic!("pull_requests missing from {body}"))
        .iter()
        .filter_map(|pull| pull.get("title").and_then(Value::as_str))
        .map(str::to_owned)
        .collect();

    assert_eq!(actual, split_list(&titles), "title mismatch");
}

#[then("the response reports repository {name} with count {count:u64}")]
fn assert_pull_request_summary(api_state: &ApiState, name: String, count: u64) {
    let body = recorded_body(api_state);

    assert_eq!(body.get("repository"), Some(&json!(name)), "repository mismatch");
    assert_eq!(body.get("count"), Some(&json!(count)), "count mismatch");
}

#[scenario(path = "tests/features/http_api.feature", index = 0)]
fn create_repository(api_state: ApiState) {
    let _ = api_state;
}

#[scenario(path = "tests/features/http_api.feature", index = 1)]
fn reject_create_without_name(api_state: ApiState) {
    let _ = api_state;
}

#[scenario(path = "tests/features/http_api.feature", index = 2)]
fn delete_existing_repository(api_state: ApiState) {
    let _ = api_state;
}

#[scenario(path = "tests/features/http_api.feature", index = 3)]
fn delete_missing_repository(api_state: ApiState) {
    let _ = api_state;
}

#[scenario(path = "tests/features/http_api.feature", index = 4)]
fn list_limited_pull_requests(api_state: ApiState) {
    let _ = api_state;
}

#[scenario(path = "tests/features/http_api.feature", index = 5)]
fn reject_invalid_count(api_state: ApiState) {
    let _ = api_state;
}

#[scenario(path = "tests/features/http_api.feature", index = 6)]
fn list_repository_names(api_state: ApiState) {
    let _ = api_state;
}
