//! Resgatados Server Binary

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use resgatados_payments::StripeGateway;
use resgatados_server::{router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    // The Stripe secret is mandatory; refuse to start without it.
    let gateway = StripeGateway::from_env()
        .context("Missing required Stripe secret: STRIPE_SECRET_KEY")?;
    tracing::info!("✓ Stripe configured");

    let state = AppState {
        gateway: Arc::new(gateway),
    };

    let app = router(state);

    // Start server
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 resgatados-server running on http://{}", addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health                    - Health check");
    tracing::info!("  POST /api/contact               - Contact form");
    tracing::info!("  POST /api/partner-contact       - Partnership form");
    tracing::info!("  POST /api/create-payment-intent - Donation payment intent");
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}
