//! Rutas HTTP contra el catálogo de demostración, vía `tower::ServiceExt::oneshot`.
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use paramflow_rust::access::AllowAll;
use paramflow_rust::http::router;
use paramflow_rust::{build_renderer, AppConfig, AppState, Catalog};
use serde_json::{json, Value};
use tower::ServiceExt;

const CATALOG: &str = include_str!("../catalog.json");

fn app_with(config: AppConfig) -> Router {
    let catalog = Catalog::from_json_str(CATALOG).expect("demo catalog");
    router(AppState::new(Arc::new(catalog), build_renderer(&config)))
}

fn app() -> Router {
    app_with(AppConfig::default())
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn param<'a>(body: &'a Value, name: &str) -> &'a Value {
    body["data"]["parameters"].as_array()
                              .unwrap()
                              .iter()
                              .find(|p| p["name"] == name)
                              .unwrap_or_else(|| panic!("parameter {name} missing"))
}

#[tokio::test]
async fn health_is_ok() {
    let (status, body) = get(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "data": {"status": "ok"}}));
}

#[tokio::test]
async fn missing_or_blank_job_is_bad_request() {
    for uri in ["/api/parameters", "/api/parameters?job=%20%20", "/api/parameters/env"] {
        let (status, body) = get(app(), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["success"], json!(false));
        assert!(body["error"].as_str().unwrap().contains("job"));
        assert!(body.get("data").is_none());
    }
}

#[tokio::test]
async fn malformed_job_name_is_bad_request() {
    let (status, _) = get(app(), "/api/parameters?job=team//deploy").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_job_is_not_found() {
    let (status, body) = get(app(), "/api/parameters?job=team/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("job not found: team/missing"));
}

#[tokio::test]
async fn restricted_job_is_forbidden() {
    let (status, body) = get(app(), "/api/parameters?job=ops/rotate-keys").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn access_policy_is_pluggable() {
    let catalog = Catalog::from_json_str(CATALOG).unwrap();
    let state = AppState::new(Arc::new(catalog), build_renderer(&AppConfig::default())).with_access(Arc::new(AllowAll));
    let (status, body) = get(router(state), "/api/parameters?job=ops/rotate-keys").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(param(&body, "scope")["currentValue"], json!("all"));
}

#[tokio::test]
async fn renders_whole_job_with_current_values() {
    let (status, body) = get(app(), "/api/parameters?job=team/deploy&params=env:prod,region:us-west-2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    let data = &body["data"];
    assert_eq!(data["jobName"], json!("deploy"));
    assert_eq!(data["jobFullName"], json!("team/deploy"));
    assert_eq!(data["buildWithParametersUrl"], json!("job/team/job/deploy/buildWithParameters"));
    assert_eq!(data["activeExtensionAvailable"], json!(true));
    assert!(data["activeExtensionVersion"].is_string());

    let names: Vec<&str> = data["parameters"].as_array()
                                             .unwrap()
                                             .iter()
                                             .map(|p| p["name"].as_str().unwrap())
                                             .collect();
    assert_eq!(names, vec!["env", "region", "summary", "dry_run", "token"]);

    let region = param(&body, "region");
    assert_eq!(region["choices"], json!(["us-east-1", "us-west-2", "eu-west-1"]));
    assert_eq!(region["dependencies"], json!(["env"]));
    assert_eq!(region["currentValue"], json!("us-west-2"));
    assert_eq!(region["isDynamic"], json!(true));
    assert_eq!(region["errorMessage"], Value::Null);

    let summary = param(&body, "summary");
    assert_eq!(summary["data"], json!("deploying to prod/us-west-2"));
    assert_eq!(summary["dependencies"], json!(["env", "region"]));

    assert_eq!(param(&body, "dry_run")["currentValue"], json!("true"));
    assert_eq!(param(&body, "token")["currentValue"], json!(""));
}

#[tokio::test]
async fn bracketed_params_are_flattened() {
    let (status, body) = get(app(), "/api/parameters?job=team/build&params=module_filter:%5Bc%5D").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(param(&body, "module_filter")["currentValue"], json!("c"));
    assert_eq!(param(&body, "module")["choices"], json!(["core", "cli"]));
    assert_eq!(param(&body, "branch")["choices"], json!(["main", "release"]));
}

#[tokio::test]
async fn renders_single_parameter() {
    let (status, body) = get(app(), "/api/parameters/region?job=team/deploy&params=env:dev").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], json!("region"));
    assert_eq!(body["data"]["choices"], json!(["local"]));
}

#[tokio::test]
async fn unknown_parameter_is_not_found() {
    let (status, body) = get(app(), "/api/parameters/nope?job=team/deploy").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("parameter 'nope' not found in job team/deploy"));
}

#[tokio::test]
async fn extension_absent_is_reported_but_builtins_render() {
    let (status, body) = get(app_with(AppConfig { extension_enabled: false, ..AppConfig::default() }),
                             "/api/parameters?job=team/deploy").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["activeExtensionAvailable"], json!(false));
    assert_eq!(body["data"]["activeExtensionVersion"], Value::Null);
    assert_eq!(param(&body, "env")["currentValue"], json!("dev"));
}

#[tokio::test]
async fn parallel_mode_matches_sequential() {
    let uri = "/api/parameters?job=team/deploy&params=env:staging";
    let (_, sequential) = get(app(), uri).await;
    let (_, parallel) = get(app_with(AppConfig { parallel: true, ..AppConfig::default() }), uri).await;
    assert_eq!(sequential, parallel);
}
