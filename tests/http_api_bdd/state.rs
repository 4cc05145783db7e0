//! Scenario state and server start-up for the HTTP API BDD tests.

use std::net::SocketAddr;
use std::sync::Arc;

use octo_manager::github::{DEFAULT_REQUEST_TIMEOUT, InMemoryGateway, PullRequest};
use octo_manager::{OwnerLocator, ProviderClient, serve};
use reqwest::Method;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use serde_json::Value;
use tokio::net::TcpListener;

use super::runtime::{SharedRuntime, ensure_runtime};

/// Repository placed in the upstream before the server starts.
#[derive(Clone, Debug)]
pub(crate) struct SeededRepository {
    pub(crate) name: String,
    pub(crate) pull_requests: Vec<PullRequest>,
}

/// Status and JSON body of the last response.
#[derive(Clone, Debug)]
pub(crate) struct RecordedResponse {
    pub(crate) status: u16,
    pub(crate) body: Value,
}

#[derive(ScenarioState, Default)]
pub(crate) struct ApiState {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) seeds: Slot<Vec<SeededRepository>>,
    pub(crate) gateway: Slot<Arc<InMemoryGateway>>,
    pub(crate) address: Slot<SocketAddr>,
    pub(crate) response: Slot<RecordedResponse>,
}

impl ApiState {
    /// Records a repository to seed the upstream with.
    pub(crate) fn seed(&self, repository: SeededRepository) {
        let mut seeds = self.seeds.take().unwrap_or_default();
        seeds.push(repository);
        self.seeds.set(seeds);
    }

    /// Names currently held by the upstream.
    pub(crate) fn upstream_names(&self) -> Vec<String> {
        self.gateway
            .with_ref(|gateway| gateway.repository_names())
            .unwrap_or_else(|| panic!("server has not been started"))
    }
}

/// Starts the server over the seeded upstream on first use.
fn ensure_server(api_state: &ApiState, runtime: &SharedRuntime) -> SocketAddr {
    if let Some(address) = api_state.address.get() {
        return address;
    }

    let gateway = api_state
        .seeds
        .take()
        .unwrap_or_default()
        .into_iter()
        .fold(InMemoryGateway::new().with_page_size(2), |gateway, seed| {
            gateway.with_pull_requests(&seed.name, seed.pull_requests)
        });
    let shared_gateway = Arc::new(gateway);
    let owner = OwnerLocator::for_user("octocat")
        .unwrap_or_else(|error| panic!("owner should be valid: {error}"));
    let client = ProviderClient::new(shared_gateway.clone(), owner, DEFAULT_REQUEST_TIMEOUT);

    let address = runtime.block_on(async {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .unwrap_or_else(|error| panic!("listener should bind: {error}"));
        let address = listener
            .local_addr()
            .unwrap_or_else(|error| panic!("listener should have an address: {error}"));
        tokio::spawn(serve(listener, client, std::future::pending()));
        address
    });

    api_state.gateway.set(shared_gateway);
    api_state.address.set(address);
    address
}

/// Sends a request to the running server and records the response.
pub(crate) fn send_request(api_state: &ApiState, method: Method, path: &str, body: Option<Value>) {
    let runtime = ensure_runtime(&api_state.runtime)
        .unwrap_or_else(|error| panic!("failed to create Tokio runtime: {error}"));
    let address = ensure_server(api_state, &runtime);
    let url = format!("http://{address}{path}");

    let recorded = runtime.block_on(async {
        let client = reqwest::Client::new();
        let mut request = client.request(method, url);
        if let Some(json_body) = body {
            request = request.json(&json_body);
        }
        let response = request
            .send()
            .await
            .unwrap_or_else(|error| panic!("request should complete: {error}"));
        let status = response.status().as_u16();
        let json = response
            .json::<Value>()
            .await
            .unwrap_or_else(|error| panic!("response body should be JSON: {error}"));
        RecordedResponse { status, body: json }
    });

    api_state.response.set(recorded);
}
