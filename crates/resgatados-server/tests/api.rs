//! Endpoint tests against the mock gateway.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use resgatados_payments::MockGateway;
use resgatados_server::{router, AppState};

fn app(gateway: Arc<MockGateway>) -> axum::Router {
    router(AppState { gateway })
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn contact_form_accepts_valid_payload() {
    let app = app(Arc::new(MockGateway::new()));

    let payload = json!({
        "name": "Maria Silva",
        "email": "maria@example.com",
        "subject": "Voluntariado",
        "message": "Gostaria de ajudar nas ações de inverno",
    });
    let response = app.oneshot(post_json("/api/contact", &payload)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("Mensagem enviada com sucesso!"));
    // static acknowledgment only; nothing from the submission is echoed back
    assert_eq!(body.as_object().unwrap().len(), 2);
}

#[tokio::test]
async fn contact_form_rejects_missing_name() {
    let app = app(Arc::new(MockGateway::new()));

    let payload = json!({
        "email": "maria@example.com",
        "subject": "Voluntariado",
        "message": "Olá",
    });
    let response = app.oneshot(post_json("/api/contact", &payload)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Nome é obrigatório"));
}

#[tokio::test]
async fn contact_form_rejects_malformed_email() {
    let app = app(Arc::new(MockGateway::new()));

    let payload = json!({
        "name": "Maria Silva",
        "email": "not-an-email",
        "subject": "Doações",
        "message": "Olá",
    });
    let response = app.oneshot(post_json("/api/contact", &payload)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("E-mail inválido"));
}

#[tokio::test]
async fn partner_form_accepts_valid_payload() {
    let app = app(Arc::new(MockGateway::new()));

    let payload = json!({
        "name": "Empresa Solidária",
        "email": "contato@empresa.com.br",
        "phone": "(48) 99999-9999",
        "message": "Queremos firmar uma parceria",
    });
    let response = app
        .oneshot(post_json("/api/partner-contact", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(true));
}

#[tokio::test]
async fn partner_form_rejects_missing_phone() {
    let app = app(Arc::new(MockGateway::new()));

    let payload = json!({
        "name": "Empresa Solidária",
        "email": "contato@empresa.com.br",
        "phone": "",
        "message": "Queremos firmar uma parceria",
    });
    let response = app
        .oneshot(post_json("/api/partner-contact", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Telefone é obrigatório"));
}

#[tokio::test]
async fn payment_intent_rejects_low_amounts_without_calling_gateway() {
    let gateway = Arc::new(MockGateway::new());

    for amount in [json!(0), json!(-5), json!(0.99)] {
        let response = app(gateway.clone())
            .oneshot(post_json("/api/create-payment-intent", &json!({ "amount": amount })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["message"], json!("Valor inválido"));
    }

    assert_eq!(gateway.call_count(), 0);
}

#[tokio::test]
async fn payment_intent_rejects_missing_amount() {
    let gateway = Arc::new(MockGateway::new());

    let response = app(gateway.clone())
        .oneshot(post_json("/api/create-payment-intent", &json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(gateway.call_count(), 0);
}

#[tokio::test]
async fn payment_intent_converts_to_minor_units() {
    let gateway = Arc::new(MockGateway::new());

    let response = app(gateway.clone())
        .oneshot(post_json("/api/create-payment-intent", &json!({ "amount": 50 })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let secret = body["clientSecret"].as_str().unwrap();
    assert!(!secret.is_empty());

    assert_eq!(gateway.amounts(), vec![50.0]);
}

#[tokio::test]
async fn payment_intent_surfaces_gateway_failure() {
    let gateway = Arc::new(MockGateway::failing("Your card was declined."));

    let response = app(gateway.clone())
        .oneshot(post_json("/api/create-payment-intent", &json!({ "amount": 50 })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("Your card was declined."));
    assert!(body.get("clientSecret").is_none());
}

#[tokio::test]
async fn health_reports_gateway() {
    let app = app(Arc::new(MockGateway::new()));

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], json!("healthy"));
    assert_eq!(body["gateway"], json!("mock"));
}
