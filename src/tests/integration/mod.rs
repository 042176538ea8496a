//! End-to-end route tests
//!
//! Full request/response assertions over the combined routes, with the mock
//! gateway standing in for the vendor.

use crate::application::services::{PaymentService, StatusService};
use crate::config::AppConfig;
use crate::infrastructure::http::routes::RouteBuilder;
use crate::infrastructure::http::server::handle_rejection;
use crate::shared::error::AppError;
use crate::tests::common::MockGateway;
use serde_json::{json, Value};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use warp::filters::BoxedFilter;
use warp::reply::Response;
use warp::{Filter, Reply};

fn build_routes(gateway: MockGateway) -> BoxedFilter<(Response,)> {
    let config = AppConfig::default();
    let gateway = Arc::new(gateway);
    let payment_service = Arc::new(PaymentService::new(
        Arc::new(config.clone()),
        gateway.clone(),
    ));
    let status_service = Arc::new(StatusService::new(gateway));

    RouteBuilder::build_routes(config, payment_service, status_service)
        .recover(handle_rejection)
        .map(|reply| Reply::into_response(reply))
        .boxed()
}

fn complete_create_body() -> Value {
    json!({
        "transaction": 12345,
        "hash": "abc123",
        "pix": { "pix_qr_code": "00020126pixpayload" }
    })
}

async fn post_json(
    routes: &BoxedFilter<(Response,)>,
    path: &str,
    body: &Value,
) -> (warp::http::StatusCode, Value) {
    let res = warp::test::request()
        .method("POST")
        .path(path)
        .json(body)
        .reply(routes)
        .await;
    let status = res.status();
    let parsed: Value = serde_json::from_slice(res.body()).unwrap();
    (status, parsed)
}

#[tokio::test]
async fn test_checkout_success_returns_payment_instruction() {
    let routes = build_routes(MockGateway::with_create_body(complete_create_body()));

    let request = json!({
        "amount": 100.0,
        "customer": { "document": "231.678.618-94" }
    });
    let (status, body) = post_json(&routes, "/geradorinvictus", &request).await;

    assert_eq!(status, warp::http::StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["hash"], json!("abc123"));
    assert_eq!(body["data"]["pix_code"], json!("00020126pixpayload"));
    assert_eq!(body["data"]["status"], json!("pending"));
    assert_eq!(body["data"]["amount"], json!(100.0));
    assert!(body["data"]["qr_code_url"]
        .as_str()
        .unwrap()
        .starts_with("https://quickchart.io/qr?text="));
}

#[tokio::test]
async fn test_checkout_rejects_short_document() {
    let routes = build_routes(MockGateway::default());

    let request = json!({ "amount": 100.0, "customer": { "document": "123" } });
    let (status, body) = post_json(&routes, "/geradorinvictus", &request).await;

    assert_eq!(status, warp::http::StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!("CPF deve ter 11 dígitos"));
}

#[tokio::test]
async fn test_checkout_rejects_non_positive_amount() {
    let routes = build_routes(MockGateway::default());

    for amount in [json!(0), json!(-5)] {
        let request = json!({ "amount": amount });
        let (status, body) = post_json(&routes, "/geradorinvictus", &request).await;

        assert_eq!(status, warp::http::StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], json!("Valor deve ser maior que zero"));
    }
}

#[tokio::test]
async fn test_checkout_gateway_failure_keeps_generic_error() {
    let routes = build_routes(MockGateway::with_create_error(AppError::Gateway {
        message: "HTTP error: 422".to_string(),
        status: Some(422),
        body: Some(r#"{"message":"Invalid document"}"#.to_string()),
    }));

    let request = json!({ "amount": 100.0 });
    let (status, body) = post_json(&routes, "/geradorinvictus", &request).await;

    assert_eq!(status, warp::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], json!(false));
    assert_eq!(
        body["error"],
        json!("Falha na comunicação com a API de pagamentos")
    );
    assert_eq!(body["details"], json!("Invalid document"));
}

#[tokio::test]
async fn test_checkout_incomplete_gateway_response_is_500() {
    // 2xx from the vendor but no PIX payload
    let routes = build_routes(MockGateway::with_create_body(json!({
        "transaction": 12345,
        "hash": "abc123"
    })));

    let request = json!({ "amount": 100.0 });
    let (status, body) = post_json(&routes, "/geradorinvictus", &request).await;

    assert_eq!(status, warp::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body["error"],
        json!("Falha na comunicação com a API de pagamentos")
    );
    assert_eq!(body["details"], json!("Resposta da API incompleta"));
}

#[tokio::test]
async fn test_status_test_marker_skips_upstream() {
    let gateway = MockGateway::default();
    let calls = gateway.status_calls.clone();
    let routes = build_routes(gateway);

    let request = json!({ "hash": "test_abc123" });
    let (status, body) = post_json(&routes, "/verificar_status", &request).await;

    assert_eq!(status, warp::http::StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["status"], json!("pending"));
    assert_eq!(body["message"], json!("Pagamento pendente (modo teste)"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_status_normalizes_vendor_vocabulary() {
    let routes = build_routes(MockGateway::with_status_body(
        json!({ "payment_status": "Approved" }),
    ));

    let request = json!({ "hash": "abc123" });
    let (status, body) = post_json(&routes, "/verificar_status", &request).await;

    assert_eq!(status, warp::http::StatusCode::OK);
    assert_eq!(body["status"], json!("paid"));
    assert_eq!(body["original_status"], json!("Approved"));
}

#[tokio::test]
async fn test_status_upstream_404_yields_not_found() {
    let routes = build_routes(MockGateway::with_status_error(AppError::GatewayNotFound));

    let request = json!({ "hash": "abc123" });
    let (status, body) = post_json(&routes, "/verificar_status", &request).await;

    assert_eq!(status, warp::http::StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["status"], json!("not_found"));
}

#[tokio::test]
async fn test_status_upstream_failure_degrades_to_pending() {
    let routes = build_routes(MockGateway::with_status_error(AppError::Gateway {
        message: "timeout".to_string(),
        status: Some(504),
        body: None,
    }));

    let request = json!({ "hash": "abc123" });
    let (status, body) = post_json(&routes, "/verificar_status", &request).await;

    assert_eq!(status, warp::http::StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["status"], json!("pending"));
    assert_eq!(
        body["message"],
        json!("Não foi possível verificar o status no momento")
    );
}

#[tokio::test]
async fn test_status_missing_hash_is_400() {
    let routes = build_routes(MockGateway::default());

    let (status, body) = post_json(&routes, "/verificar_status", &json!({})).await;

    assert_eq!(status, warp::http::StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!("Hash da transação é obrigatório"));
}

#[tokio::test]
async fn test_health_endpoint() {
    let routes = build_routes(MockGateway::default());

    let res = warp::test::request()
        .method("GET")
        .path("/health")
        .reply(&routes)
        .await;

    assert_eq!(res.status(), warp::http::StatusCode::OK);
    let body: Value = serde_json::from_slice(res.body()).unwrap();
    assert_eq!(body["status"], json!("OK"));
}
