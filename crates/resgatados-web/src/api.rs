//! API Client

use resgatados_core::{ContactForm, PartnerForm};

/// Absolute endpoint URL; fetch needs one even for same-origin calls.
fn api_url(path: &str) -> String {
    let origin = web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:3000".into());
    format!("{origin}{path}")
}

/// Send a contact form submission. Returns the server acknowledgment message.
pub async fn submit_contact(form: &ContactForm) -> Result<String, String> {
    let body = serde_json::to_value(form).map_err(|e| e.to_string())?;
    post_form("/api/contact", &body).await
}

/// Send a partnership inquiry. Returns the server acknowledgment message.
pub async fn submit_partner_contact(form: &PartnerForm) -> Result<String, String> {
    let body = serde_json::to_value(form).map_err(|e| e.to_string())?;
    post_form("/api/partner-contact", &body).await
}

async fn post_form(path: &str, body: &serde_json::Value) -> Result<String, String> {
    let client = reqwest::Client::new();

    let response = client
        .post(api_url(path))
        .json(body)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let success = response.status().is_success();
    let data: serde_json::Value = response.json().await.unwrap_or_default();
    let message = data["message"].as_str().unwrap_or("").to_string();

    if success && data["success"].as_bool().unwrap_or(false) {
        Ok(message)
    } else if message.is_empty() {
        Err("Erro ao enviar. Tente novamente mais tarde.".into())
    } else {
        Err(message)
    }
}

/// Ask the server for a payment intent; returns the client secret.
pub async fn create_payment_intent(amount: f64) -> Result<String, String> {
    let client = reqwest::Client::new();

    let body = serde_json::json!({ "amount": amount });

    let response = client
        .post(api_url("/api/create-payment-intent"))
        .json(&body)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.status().is_success() {
        let data: serde_json::Value = response.json().await.map_err(|e| e.to_string())?;
        match data["clientSecret"].as_str() {
            Some(secret) if !secret.is_empty() => Ok(secret.to_string()),
            _ => Err("Resposta sem clientSecret".into()),
        }
    } else {
        let data: serde_json::Value = response.json().await.unwrap_or_default();
        Err(data["message"]
            .as_str()
            .unwrap_or("Erro ao criar intenção de pagamento")
            .to_string())
    }
}
