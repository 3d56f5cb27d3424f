use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use fintrack_connect::IcicidirectConfig;
use fintrack_server::{
    api::app_router,
    build_state,
    config::{Config, LogFormat},
};
use serde_json::{json, Value};
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn test_app(icicidirect: IcicidirectConfig) -> (Router, TempDir) {
    let tmp = tempdir().unwrap();
    let config = Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        db_path: tmp.path().join("app.db").to_string_lossy().to_string(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(10),
        log_format: LogFormat::Text,
        icicidirect,
    };
    let state = build_state(&config).await.unwrap();
    (app_router(state, &config), tmp)
}

struct TestResponse {
    status: StatusCode,
    content_type: Option<String>,
    content_disposition: Option<String>,
    body: Vec<u8>,
}

impl TestResponse {
    fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    fn text(&self) -> String {
        String::from_utf8(self.body.clone()).unwrap()
    }
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let header_text = |name| {
        response
            .headers()
            .get(name)
            .map(|v| v.to_str().unwrap().to_string())
    };
    let content_type = header_text(header::CONTENT_TYPE);
    let content_disposition = header_text(header::CONTENT_DISPOSITION);
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();

    TestResponse {
        status,
        content_type,
        content_disposition,
        body,
    }
}

fn icicidirect_config(base_url: String) -> IcicidirectConfig {
    IcicidirectConfig {
        base_url,
        app_key: "app-key".to_string(),
        client_secret: "client-secret".to_string(),
        user_id: "TESTUSER".to_string(),
        password: "hunter2".to_string(),
        ..IcicidirectConfig::default()
    }
}

#[tokio::test]
async fn healthz_returns_ok() {
    let (app, _tmp) = test_app(IcicidirectConfig::default()).await;

    let response = send(&app, "GET", "/api/v1/healthz", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text(), "ok");
}

#[tokio::test]
async fn asset_crud_round_trip() {
    let (app, _tmp) = test_app(IcicidirectConfig::default()).await;

    let created = send(
        &app,
        "POST",
        "/api/v1/assets",
        Some(json!({"name": "Savings", "assetType": "Cash", "value": 1500.5})),
    )
    .await;
    assert_eq!(created.status, StatusCode::CREATED);
    let id = created.json()["id"].as_str().unwrap().to_string();

    let fetched = send(&app, "GET", &format!("/api/v1/assets/{}", id), None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.json()["name"], "Savings");
    assert_eq!(fetched.json()["value"].as_f64(), Some(1500.5));

    let updated = send(
        &app,
        "PUT",
        &format!("/api/v1/assets/{}", id),
        Some(json!({"name": "Savings", "assetType": "Cash", "value": 2000, "description": "FD"})),
    )
    .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.json()["description"], "FD");

    let listed = send(&app, "GET", "/api/v1/assets", None).await;
    assert_eq!(listed.json().as_array().unwrap().len(), 1);

    let deleted = send(&app, "DELETE", &format!("/api/v1/assets/{}", id), None).await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let gone = send(&app, "GET", &format!("/api/v1/assets/{}", id), None).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_input_is_bad_request() {
    let (app, _tmp) = test_app(IcicidirectConfig::default()).await;

    let response = send(
        &app,
        "POST",
        "/api/v1/liabilities",
        Some(json!({"name": "Car Loan", "liabilityType": "Auto", "amount": -5})),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["code"], 400);
}

#[tokio::test]
async fn missing_entity_is_not_found() {
    let (app, _tmp) = test_app(IcicidirectConfig::default()).await;

    let response = send(&app, "GET", "/api/v1/investments/does-not-exist", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json()["code"], 404);
}

#[tokio::test]
async fn export_is_a_csv_attachment() {
    let (app, _tmp) = test_app(IcicidirectConfig::default()).await;
    send(
        &app,
        "POST",
        "/api/v1/assets",
        Some(json!({"name": "Gold", "assetType": "Commodity", "value": 80000})),
    )
    .await;

    let response = send(&app, "GET", "/api/v1/assets/export", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.content_type.as_deref(),
        Some("text/csv; charset=utf-8")
    );
    assert!(response
        .content_disposition
        .as_deref()
        .unwrap()
        .contains("assets_export.csv"));
    let csv = response.text();
    assert!(csv.starts_with("ID,Name,Asset Type,Value,Description,Created At,Updated At"));
    assert!(csv.contains(",Gold,Commodity,80000,"));
}

#[tokio::test]
async fn dashboard_reports_net_worth() {
    let (app, _tmp) = test_app(IcicidirectConfig::default()).await;
    send(
        &app,
        "POST",
        "/api/v1/assets",
        Some(json!({"name": "Cash", "assetType": "Cash", "value": 1000})),
    )
    .await;
    send(
        &app,
        "POST",
        "/api/v1/investments",
        Some(json!({
            "investmentType": "Fixed Deposit",
            "providerBroker": "SBI",
            "investmentAmount": 500,
            "currentAmount": 650
        })),
    )
    .await;
    send(
        &app,
        "POST",
        "/api/v1/liabilities",
        Some(json!({"name": "Card", "liabilityType": "Credit Card", "amount": 400})),
    )
    .await;

    let response = send(&app, "GET", "/api/v1/dashboard", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let summary = response.json();
    assert_eq!(summary["totalAssetsWithInvestments"].as_f64(), Some(1650.0));
    assert_eq!(summary["netWorth"].as_f64(), Some(1250.0));
    assert_eq!(summary["liabilityCount"], 1);
}

#[tokio::test]
async fn sync_with_incomplete_settings_fails() {
    let (app, _tmp) = test_app(IcicidirectConfig::default()).await;

    let response = send(&app, "POST", "/api/v1/icicidirect/sync", None).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json();
    assert_eq!(body["success"], false);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Failed to sync: Configuration error"));
    assert!(body.get("createdCount").is_none());
}

#[tokio::test]
async fn sync_mirrors_sip_book_into_investments() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/apiuser/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Status": "Success",
            "SessionToken": "token-1"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/mf/mfSIPBook"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Status": "Success",
            "Data": [
                {
                    "scheme_name": "Bluechip Fund Growth",
                    "scheme_code": "P8042",
                    "sip_amount": "5000",
                    "current_value": 61234.5,
                    "sip_id": "SIP1"
                },
                {
                    "scheme_name": "Liquid Fund",
                    "scheme_code": 1001,
                    "sip_amount": "",
                    "current_value": "",
                    "sip_id": "SIP2"
                }
            ]
        })))
        .expect(2)
        .mount(&server)
        .await;

    let (app, _tmp) = test_app(icicidirect_config(server.uri())).await;

    let first = send(&app, "POST", "/api/v1/icicidirect/sync", None).await;
    assert_eq!(first.status, StatusCode::OK);
    let body = first.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Successfully synced mutual fund investments");
    assert_eq!(body["createdCount"], 2);
    assert_eq!(body["updatedCount"], 0);
    assert_eq!(body["totalCount"], 2);
    assert_eq!(body["failedIds"], json!([]));

    let second = send(&app, "POST", "/api/v1/icicidirect/sync", None).await;
    let body = second.json();
    assert_eq!(body["createdCount"], 0);
    assert_eq!(body["updatedCount"], 2);

    let listed = send(&app, "GET", "/api/v1/investments", None).await.json();
    let investments = listed.as_array().unwrap();
    assert_eq!(investments.len(), 2);
    let bluechip = investments
        .iter()
        .find(|i| i["externalId"] == "SIP1")
        .unwrap();
    assert_eq!(bluechip["providerBroker"], "ICICIDirect");
    assert_eq!(bluechip["investmentType"], "Mutual Fund");
    assert_eq!(bluechip["investmentAmount"].as_f64(), Some(5000.0));
    assert_eq!(bluechip["currentAmount"].as_f64(), Some(61234.5));
    let liquid = investments
        .iter()
        .find(|i| i["externalId"] == "SIP2")
        .unwrap();
    assert_eq!(liquid["investmentAmount"].as_f64(), Some(0.0));
    assert_eq!(liquid["currentAmount"].as_f64(), Some(0.0));
    assert_eq!(liquid["schemeCode"], "1001");
}
