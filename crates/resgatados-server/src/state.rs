//! Application State

use std::sync::Arc;

use resgatados_payments::DonationGateway;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Payment gateway (Stripe in production, mock in tests)
    pub gateway: Arc<dyn DonationGateway>,
}
