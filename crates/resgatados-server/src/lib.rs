//! Resgatados HTTP Server
//!
//! Axum-based server exposing the form-submission and payment-intent
//! endpoints and serving the compiled WASM frontend.

pub mod handlers;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers::{create_payment_intent, health_check, submit_contact, submit_partner_contact};
pub use crate::state::AppState;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health & info
        .route("/health", get(health_check))
        // Form submissions
        .route("/api/contact", post(submit_contact))
        .route("/api/partner-contact", post(submit_partner_contact))
        // Donations
        .route("/api/create-payment-intent", post(create_payment_intent))
        // Static files (WASM frontend)
        .fallback_service(tower_http::services::ServeDir::new("static"))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
