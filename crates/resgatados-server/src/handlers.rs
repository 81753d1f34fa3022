//! HTTP Handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use resgatados_core::{validate_form, ContactForm, FormSchema, PartnerForm, MIN_DONATION_AMOUNT};
use resgatados_payments::PaymentError;

use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub gateway: &'static str,
}

/// Envelope for form submissions, success and failure alike
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmissionResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct CreatePaymentIntentRequest {
    /// Amount in reais. Optional so a missing field answers 400 with a
    /// message instead of a bare deserialization rejection.
    #[serde(default)]
    pub amount: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PaymentIntentResponse {
    #[serde(rename = "clientSecret")]
    pub client_secret: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        gateway: state.gateway.name(),
    })
}

/// Validate, log, acknowledge. Shared by both form endpoints; submissions are
/// recorded for operational visibility only, never persisted.
fn handle_submission<T>(label: &'static str, form: &T) -> (StatusCode, Json<SubmissionResponse>)
where
    T: FormSchema + std::fmt::Debug,
{
    match validate_form(form) {
        Ok(()) => {
            tracing::info!(form = ?form, "{} form submitted", label);
            (
                StatusCode::OK,
                Json(SubmissionResponse {
                    success: true,
                    message: "Mensagem enviada com sucesso!".into(),
                }),
            )
        }
        Err(errors) => {
            tracing::warn!(%errors, "{} form rejected", label);
            let message = errors
                .first_message()
                .unwrap_or("Erro ao processar formulário")
                .to_string();
            (
                StatusCode::BAD_REQUEST,
                Json(SubmissionResponse {
                    success: false,
                    message,
                }),
            )
        }
    }
}

/// General contact form endpoint
pub async fn submit_contact(
    Json(form): Json<ContactForm>,
) -> (StatusCode, Json<SubmissionResponse>) {
    handle_submission("contact", &form)
}

/// Partnership inquiry endpoint
pub async fn submit_partner_contact(
    Json(form): Json<PartnerForm>,
) -> (StatusCode, Json<SubmissionResponse>) {
    handle_submission("partner-contact", &form)
}

/// Create a payment intent for a one-time donation
pub async fn create_payment_intent(
    State(state): State<AppState>,
    Json(payload): Json<CreatePaymentIntentRequest>,
) -> Result<Json<PaymentIntentResponse>, (StatusCode, Json<ErrorResponse>)> {
    // Guard before touching the gateway: bad amounts must never reach Stripe.
    let amount = payload.amount.unwrap_or(0.0);
    if !amount.is_finite() || amount < MIN_DONATION_AMOUNT {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                message: "Valor inválido".into(),
            }),
        ));
    }

    let intent = state
        .gateway
        .create_payment_intent(amount)
        .await
        .map_err(|e| {
            tracing::error!("Stripe payment error: {}", e);
            let status = match &e {
                PaymentError::InvalidAmount(_) => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (
                status,
                Json(ErrorResponse {
                    message: e.user_message(),
                }),
            )
        })?;

    Ok(Json(PaymentIntentResponse {
        client_secret: intent.client_secret,
    }))
}
