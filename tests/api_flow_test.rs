//! End-to-end test of the CRM API over real HTTP.
//!
//! Starts a throwaway upstream reporting service and the CRM router on random
//! loopback ports, then walks every route with `reqwest`.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use axum::{Json, Router};
use crm::config::AppConfig;
use crm::services::reporting::HttpReportingService;
use crm::AppState;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use tokio::net::TcpListener;

async fn serve(app: Router) -> (String, tokio::task::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });
    (format!("http://{addr}"), handle)
}

/// Upstream stand-in returning a fixed dashboard document.
async fn start_reporting_upstream(payload: Value) -> (String, tokio::task::JoinHandle<()>) {
    let app = Router::new().route(
        "/dashboard",
        get(move || {
            let payload = payload.clone();
            async move { Json(payload) }
        }),
    );
    serve(app).await
}

/// Spin up the CRM API pointed at `reporting_url`.
async fn start_server(reporting_url: &str) -> (String, tokio::task::JoinHandle<()>) {
    let config = AppConfig::from_lookup(|key| match key {
        "REPORTING_SERVICE_URL" => Ok(reporting_url.to_string()),
        _ => Err(std::env::VarError::NotPresent),
    })
    .expect("config");

    let reporting = HttpReportingService::new(reporting_url, Duration::from_secs(5))
        .expect("reporting client");
    let state = AppState::new(config, Arc::new(reporting));
    let app = crm::routes::router(state).expect("router");

    let (base, handle) = serve(app).await;

    // Wait briefly for server readiness
    tokio::time::sleep(Duration::from_millis(50)).await;

    (base, handle)
}

/// Helper: extract `data` from the success envelope, panic on an error body.
fn extract_data(body: &Value) -> &Value {
    if let Some(err) = body.get("error") {
        panic!("API error: {err}");
    }
    assert!(body["message"].is_string(), "missing 'message' in {body}");
    body.get("data").expect("missing 'data' field")
}

async fn get_json(client: &Client, url: String) -> (StatusCode, Value) {
    let resp = client.get(url).send().await.unwrap();
    let status = resp.status();
    (status, resp.json().await.unwrap())
}

async fn post_raw(client: &Client, url: String, body: &str) -> (StatusCode, Value) {
    let resp = client
        .post(url)
        .header("content-type", "application/json")
        .body(body.to_string())
        .send()
        .await
        .unwrap();
    let status = resp.status();
    (status, resp.json().await.unwrap())
}

#[tokio::test]
async fn full_api_flow() {
    let dashboard = json!({
        "stats": { "total_leads": 42, "open_deals": 7, "won_value": 125000.5 },
        "recent_activities": [{ "type": "call", "subject": "Intro call" }]
    });
    let (upstream, _upstream_handle) = start_reporting_upstream(dashboard.clone()).await;
    let (base, _handle) = start_server(&upstream).await;
    let client = Client::new();

    // ──────────────────────────────────────────────────────────
    // 1. Health
    // ──────────────────────────────────────────────────────────
    let resp = client.get(format!("{base}/health/live")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "OK");

    let (status, health) = get_json(&client, format!("{base}/api/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "healthy");
    let configured = health["firebase"]["configured"].as_bool().unwrap();
    let api_key = health["firebase"]["api_key"].as_bool().unwrap();
    let project_id = health["firebase"]["project_id"].as_bool().unwrap();
    assert_eq!(configured, api_key && project_id);

    // ──────────────────────────────────────────────────────────
    // 2. Dashboard is the upstream document, unwrapped
    // ──────────────────────────────────────────────────────────
    let (status, body) = get_json(&client, format!("{base}/api/dashboard")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, dashboard);

    // ──────────────────────────────────────────────────────────
    // 3. Bulk endpoints
    // ──────────────────────────────────────────────────────────
    for resource in ["leads", "deals", "activities"] {
        let (status, body) = post_raw(
            &client,
            format!("{base}/api/{resource}/bulk"),
            r#"{"action":"update","ids":["a","b"],"fields":{"owner":"sam"}}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            extract_data(&body),
            &json!({ "processed": 0, "errors": [] })
        );

        let (status, body) =
            post_raw(&client, format!("{base}/api/{resource}/bulk"), "{\"ids\":").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().starts_with("Failed to process bulk"));
    }

    // ──────────────────────────────────────────────────────────
    // 4. Read-only placeholders
    // ──────────────────────────────────────────────────────────
    for path in [
        "activities/calendar",
        "deals/export",
        "leads/export",
        "reports",
    ] {
        let (status, body) = get_json(&client, format!("{base}/api/{path}")).await;
        assert_eq!(status, StatusCode::OK, "{path}");
        assert_eq!(extract_data(&body), &json!([]));
    }

    let (_, forecast) = get_json(&client, format!("{base}/api/deals/forecast")).await;
    assert_eq!(extract_data(&forecast)["periods"], json!([]));
    let (_, pipeline) = get_json(&client, format!("{base}/api/deals/pipeline")).await;
    assert_eq!(extract_data(&pipeline)["stages"], json!([]));

    let (status, report) =
        post_raw(&client, format!("{base}/api/reports"), r#"{"kind":"pipeline"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(extract_data(&report)["total"], 0);

    // ──────────────────────────────────────────────────────────
    // 5. Firebase bootstrap
    // ──────────────────────────────────────────────────────────
    let (status, body) = post_raw(
        &client,
        format!("{base}/api/firebase/init"),
        r#"{"action":"test_connection"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (status, body) = post_raw(
        &client,
        format!("{base}/api/firebase/init"),
        r#"{"action":"delete_everything"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Invalid action" }));

    // ──────────────────────────────────────────────────────────
    // 6. Auth acknowledgements
    // ──────────────────────────────────────────────────────────
    let resp = client
        .post(format!("{base}/api/auth/logout"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert!(extract_data(&body).is_null());

    let (status, _) = get_json(&client, format!("{base}/api/auth/session")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn dashboard_upstream_down_yields_generic_500() {
    // Bind then drop to get a port nothing is listening on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let (base, _handle) = start_server(&dead).await;
    let client = Client::new();

    let (status, body) = get_json(&client, format!("{base}/api/dashboard")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to fetch dashboard data" }));
}
