use std::sync::Arc;

use polygon_gateway::{RpcClient, create_router};
use reqwest::StatusCode;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use url::Url;
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Serves the gateway on an ephemeral port and returns its base URL.
async fn spawn_gateway(rpc_url: &str) -> String {
    let rpc_client = RpcClient::new(Url::parse(rpc_url).unwrap()).unwrap();
    let router = create_router(Arc::new(rpc_client));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}", addr)
}

async fn mock_rpc_result(mock_server: &MockServer, rpc_method: &str, result: Value) {
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "method": rpc_method })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": 2,
            "result": result
        })))
        .mount(mock_server)
        .await;
}

async fn upstream_payloads(mock_server: &MockServer) -> Vec<Value> {
    mock_server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|r| serde_json::from_slice(&r.body).unwrap())
        .collect()
}

#[tokio::test]
async fn test_health_check_ignores_upstream() {
    let gateway = spawn_gateway("http://127.0.0.1:1/").await;

    let response = reqwest::get(format!("{}/health", gateway)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.json::<Value>().await.unwrap(), json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_get_block_number_end_to_end() {
    let mock_server = MockServer::start().await;
    mock_rpc_result(&mock_server, "eth_blockNumber", json!("0x134e82a")).await;
    let gateway = spawn_gateway(&mock_server.uri()).await;

    let response = reqwest::get(format!("{}/block/number", gateway)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>().await.unwrap(),
        json!({ "block_number": "0x134e82a" })
    );
    let payloads = upstream_payloads(&mock_server).await;
    assert!(payloads[0].get("params").is_none());
}

#[tokio::test]
async fn test_get_block_number_upstream_failure_is_500() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&mock_server)
        .await;
    let gateway = spawn_gateway(&mock_server.uri()).await;

    let response = reqwest::get(format!("{}/block/number", gateway)).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let detail = response.json::<Value>().await.unwrap()["detail"].as_str().unwrap().to_string();
    assert!(detail.contains("502"));
    assert!(detail.contains("Bad Gateway"));
}

#[tokio::test]
async fn test_get_block_by_number_returns_block_verbatim() {
    let mock_server = MockServer::start().await;
    let block = json!({
        "number": "0x134e82a",
        "hash": "0x1234567890abcdef",
        "transactions": []
    });
    mock_rpc_result(&mock_server, "eth_getBlockByNumber", block.clone()).await;
    let gateway = spawn_gateway(&mock_server.uri()).await;

    let response = reqwest::Client::new()
        .post(format!("{}/block/by-number", gateway))
        .json(&json!({ "block_number": "0x134e82a", "include_transactions": false }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.json::<Value>().await.unwrap(), block);
    let payloads = upstream_payloads(&mock_server).await;
    assert_eq!(payloads[0]["params"], json!(["0x134e82a", false]));
}

#[tokio::test]
async fn test_include_transactions_defaults_to_true() {
    let mock_server = MockServer::start().await;
    mock_rpc_result(&mock_server, "eth_getBlockByNumber", json!({ "number": "0x10" })).await;
    let gateway = spawn_gateway(&mock_server.uri()).await;

    let response = reqwest::Client::new()
        .post(format!("{}/block/by-number", gateway))
        .json(&json!({ "block_number": "0x10" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let payloads = upstream_payloads(&mock_server).await;
    assert_eq!(payloads[0]["params"], json!(["0x10", true]));
}

#[tokio::test]
async fn test_get_block_by_number_null_result_is_404() {
    let mock_server = MockServer::start().await;
    mock_rpc_result(&mock_server, "eth_getBlockByNumber", Value::Null).await;
    let gateway = spawn_gateway(&mock_server.uri()).await;

    let response = reqwest::Client::new()
        .post(format!("{}/block/by-number", gateway))
        .json(&json!({ "block_number": "0x999999", "include_transactions": true }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>().await.unwrap(),
        json!({ "detail": "Block not found" })
    );
}

#[tokio::test]
async fn test_get_block_by_number_empty_object_is_404() {
    let mock_server = MockServer::start().await;
    mock_rpc_result(&mock_server, "eth_getBlockByNumber", json!({})).await;
    let gateway = spawn_gateway(&mock_server.uri()).await;

    let response = reqwest::Client::new()
        .post(format!("{}/block/by-number", gateway))
        .json(&json!({ "block_number": "0x1" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_block_by_number_rpc_error_is_500() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": 2,
            "error": { "code": -32000, "message": "Invalid parameters" }
        })))
        .mount(&mock_server)
        .await;
    let gateway = spawn_gateway(&mock_server.uri()).await;

    let response = reqwest::Client::new()
        .post(format!("{}/block/by-number", gateway))
        .json(&json!({ "block_number": "0x134e82a", "include_transactions": true }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let detail = response.json::<Value>().await.unwrap()["detail"].as_str().unwrap().to_string();
    assert!(detail.contains("RPC error"));
    assert!(detail.contains("Invalid parameters"));
}

#[tokio::test]
async fn test_missing_block_number_is_rejected_before_upstream() {
    let mock_server = MockServer::start().await;
    let gateway = spawn_gateway(&mock_server.uri()).await;

    let response = reqwest::Client::new()
        .post(format!("{}/block/by-number", gateway))
        .json(&json!({ "include_transactions": true }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let detail = response.json::<Value>().await.unwrap()["detail"].as_str().unwrap().to_string();
    assert!(detail.contains("block_number"));
    assert!(upstream_payloads(&mock_server).await.is_empty());
}

#[tokio::test]
async fn test_mistyped_include_transactions_is_rejected() {
    let mock_server = MockServer::start().await;
    let gateway = spawn_gateway(&mock_server.uri()).await;

    let response = reqwest::Client::new()
        .post(format!("{}/block/by-number", gateway))
        .json(&json!({ "block_number": "0x1", "include_transactions": "yes" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(upstream_payloads(&mock_server).await.is_empty());
}

#[tokio::test]
async fn test_malformed_json_body_is_400() {
    let mock_server = MockServer::start().await;
    let gateway = spawn_gateway(&mock_server.uri()).await;

    let response = reqwest::Client::new()
        .post(format!("{}/block/by-number", gateway))
        .header("Content-Type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>().await.unwrap();
    assert!(body["detail"].is_string());
    assert!(upstream_payloads(&mock_server).await.is_empty());
}

#[tokio::test]
async fn test_non_json_content_type_is_415() {
    let mock_server = MockServer::start().await;
    let gateway = spawn_gateway(&mock_server.uri()).await;

    let response = reqwest::Client::new()
        .post(format!("{}/block/by-number", gateway))
        .header("Content-Type", "text/plain")
        .body(r#"{"block_number":"0x1"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let body = response.json::<Value>().await.unwrap();
    assert!(body["detail"].is_string());
    assert!(upstream_payloads(&mock_server).await.is_empty());
}
