//! End-to-end pipeline tests against mock HTTP servers

use devscout_rs::adapters::{
    CodeHostAdapter, DataPlatformAdapter, ModelHubAdapter, SourceAdapter,
};
use devscout_rs::{Aggregator, HttpClient, Source};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn repo(name: &str, stars: u64) -> serde_json::Value {
    json!({
        "name": name,
        "html_url": format!("https://github.com/org/{}", name),
        "description": format!("{} description", name),
        "topics": ["rust"],
        "stargazers_count": stars
    })
}

fn model(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "author": "org",
        "pipeline_tag": "text-classification",
        "tags": ["nlp"]
    })
}

/// Aggregator whose live adapters point at the mock server.
fn aggregator_against(server: &MockServer) -> Aggregator {
    let adapters: Vec<Arc<dyn SourceAdapter>> = vec![
        Arc::new(
            CodeHostAdapter::new().with_api_url(format!("{}/search/repositories", server.uri())),
        ),
        Arc::new(
            ModelHubAdapter::new()
                .with_models_url(format!("{}/api/models", server.uri()))
                .with_datasets_url(format!("{}/api/datasets", server.uri())),
        ),
        Arc::new(DataPlatformAdapter::new()),
    ];
    Aggregator::with_adapters(HttpClient::new().unwrap(), adapters)
}

async fn mount_github(server: &MockServer, repos: Vec<serde_json::Value>) {
    Mock::given(method("GET"))
        .and(path("/search/repositories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": repos })))
        .mount(server)
        .await;
}

async fn mount_models(server: &MockServer, models: Vec<serde_json::Value>) {
    Mock::given(method("GET"))
        .and(path("/api/models"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(models)))
        .mount(server)
        .await;
}

async fn mount_datasets(server: &MockServer, datasets: Vec<serde_json::Value>) {
    Mock::given(method("GET"))
        .and(path("/api/datasets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(datasets)))
        .mount(server)
        .await;
}

#[tokio::test]
async fn full_pipeline_merges_in_source_order() {
    let server = MockServer::start().await;
    mount_github(&server, vec![repo("alpha", 10), repo("beta", 5)]).await;
    mount_models(&server, vec![model("org/clf")]).await;
    mount_datasets(&server, vec![json!({"id": "org/corpus", "author": "org"})]).await;

    let result = aggregator_against(&server)
        .aggregate("text classification")
        .await
        .unwrap();

    let sources: Vec<Source> = result.items.iter().map(|i| i.source).collect();
    assert_eq!(
        sources,
        vec![
            Source::CodeHost,
            Source::CodeHost,
            Source::ModelHub,
            Source::ModelHub,
            Source::DataPlatform,
        ]
    );
    assert_eq!(result.items[0].name, "alpha");
    assert_eq!(result.items[2].name, "org/clf");
    assert_eq!(result.items[3].name, "org/corpus");
    assert!(result.citations_consistent());
    assert!(result.summary.contains("2 from GitHub"));
    assert!(result.summary.contains("2 from Hugging Face"));
    assert!(result.summary.contains("and 1 from Kaggle"));
}

#[tokio::test]
async fn rate_limited_code_host_degrades_to_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/repositories"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;
    mount_models(&server, vec![model("org/clf")]).await;
    mount_datasets(&server, vec![]).await;

    let result = aggregator_against(&server).aggregate("rust").await.unwrap();

    assert!(result
        .items
        .iter()
        .all(|item| item.source != Source::CodeHost));
    assert!(result.summary.contains("0 from GitHub"));
    // The other two sources are unaffected
    assert!(result.items.iter().any(|i| i.source == Source::ModelHub));
    assert!(result
        .items
        .iter()
        .any(|i| i.source == Source::DataPlatform));
}

#[tokio::test]
async fn dataset_failure_keeps_model_items() {
    let server = MockServer::start().await;
    mount_github(&server, vec![]).await;
    mount_models(&server, vec![model("org/a"), model("org/b")]).await;
    Mock::given(method("GET"))
        .and(path("/api/datasets"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = aggregator_against(&server).aggregate("nlp").await.unwrap();

    let hub_items: Vec<_> = result
        .items
        .iter()
        .filter(|i| i.source == Source::ModelHub)
        .collect();
    assert_eq!(hub_items.len(), 2);
    assert_eq!(hub_items[0].name, "org/a");
    assert_eq!(hub_items[1].name, "org/b");
}

#[tokio::test]
async fn model_failure_skips_dataset_request() {
    let server = MockServer::start().await;
    mount_github(&server, vec![]).await;
    Mock::given(method("GET"))
        .and(path("/api/models"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    // The dataset endpoint must never be hit after a model failure
    Mock::given(method("GET"))
        .and(path("/api/datasets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let result = aggregator_against(&server).aggregate("nlp").await.unwrap();
    assert!(result
        .items
        .iter()
        .all(|item| item.source != Source::ModelHub));
}

#[tokio::test]
async fn empty_query_rejected_before_any_network_activity() {
    let server = MockServer::start().await;
    mount_github(&server, vec![repo("alpha", 1)]).await;
    mount_models(&server, vec![]).await;
    mount_datasets(&server, vec![]).await;

    let result = aggregator_against(&server).aggregate("").await;
    assert!(result.is_err());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn merged_result_respects_overall_cap() {
    let server = MockServer::start().await;
    mount_github(
        &server,
        (0..6).map(|i| repo(&format!("r{}", i), i)).collect(),
    )
    .await;
    mount_models(
        &server,
        (0..4).map(|i| model(&format!("org/m{}", i))).collect(),
    )
    .await;
    mount_datasets(
        &server,
        (0..2)
            .map(|i| json!({"id": format!("org/d{}", i)}))
            .collect(),
    )
    .await;

    let result = aggregator_against(&server).aggregate("data").await.unwrap();

    // 6 + 6 + 1 found, capped at 9: the data-platform tail is dropped
    assert_eq!(result.items.len(), 9);
    assert_eq!(result.citations.len(), 9);
    assert!(result
        .items
        .iter()
        .all(|item| item.source != Source::DataPlatform));
    assert!(result.summary.starts_with("Found 9 resources for \"data\""));
}

#[tokio::test]
async fn aggregation_is_idempotent_for_fixed_remote_state() {
    let server = MockServer::start().await;
    mount_github(&server, vec![repo("alpha", 10)]).await;
    mount_models(&server, vec![model("org/clf")]).await;
    mount_datasets(&server, vec![]).await;

    let aggregator = aggregator_against(&server);
    let first = aggregator.aggregate("rust").await.unwrap();
    let second = aggregator.aggregate("rust").await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn code_host_request_carries_search_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/repositories"))
        .and(query_param("q", "rust"))
        .and(query_param("sort", "stars"))
        .and(query_param("order", "desc"))
        .and(query_param("per_page", "6"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .expect(1)
        .mount(&server)
        .await;
    mount_models(&server, vec![]).await;
    mount_datasets(&server, vec![]).await;

    aggregator_against(&server).aggregate("rust").await.unwrap();
}
