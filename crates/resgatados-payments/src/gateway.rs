//! Payment Intent Creation
//!
//! The `DonationGateway` trait is the seam between HTTP handlers and Stripe;
//! tests swap in [`crate::MockGateway`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use stripe::{
    Client, CreatePaymentIntent, CreatePaymentIntentAutomaticPaymentMethods, Currency,
    PaymentIntent as StripePaymentIntent,
};

use resgatados_core::MIN_DONATION_AMOUNT;

use crate::error::{PaymentError, Result};

/// A created payment intent, reduced to what the site needs.
///
/// `client_secret` is the opaque token the browser uses to complete the
/// payment out-of-band; everything else about the intent stays on Stripe's
/// side, including its expiry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PaymentIntent {
    /// Stripe intent id, for log correlation
    pub id: String,

    /// Token authorizing the browser to complete this intent
    pub client_secret: String,

    /// Charged amount in minor units (centavos)
    pub amount_minor: i64,
}

/// Payment gateway trait
#[async_trait]
pub trait DonationGateway: Send + Sync {
    /// Create a payment intent for `amount` reais and return its client secret.
    async fn create_payment_intent(&self, amount: f64) -> Result<PaymentIntent>;

    /// Gateway name, for logs and the health endpoint.
    fn name(&self) -> &'static str;
}

/// Convert reais to centavos, rounding to the nearest integer.
///
/// Rejects non-finite values and anything below [`MIN_DONATION_AMOUNT`].
pub fn to_minor_units(amount: f64) -> Result<i64> {
    if !amount.is_finite() || amount < MIN_DONATION_AMOUNT {
        return Err(PaymentError::InvalidAmount(format!("R$ {amount:.2}")));
    }
    Ok((amount * 100.0).round() as i64)
}

/// Stripe-backed gateway
pub struct StripeGateway {
    client: Client,
}

impl StripeGateway {
    /// Create a new gateway from a secret API key
    pub fn new(secret_key: &str) -> Self {
        Self {
            client: Client::new(secret_key),
        }
    }

    /// Create from environment variables.
    ///
    /// `STRIPE_SECRET_KEY` is required; the server refuses to start without it.
    pub fn from_env() -> Result<Self> {
        let secret_key = std::env::var("STRIPE_SECRET_KEY")
            .map_err(|_| PaymentError::Config("STRIPE_SECRET_KEY not set".into()))?;

        Ok(Self::new(&secret_key))
    }
}

#[async_trait]
impl DonationGateway for StripeGateway {
    async fn create_payment_intent(&self, amount: f64) -> Result<PaymentIntent> {
        let amount_minor = to_minor_units(amount)?;

        // Fixed currency; automatic payment methods lets Stripe pick what to
        // offer inside the Payment Element.
        let mut params = CreatePaymentIntent::new(amount_minor, Currency::BRL);
        params.automatic_payment_methods = Some(CreatePaymentIntentAutomaticPaymentMethods {
            enabled: true,
            allow_redirects: None,
        });

        let intent = StripePaymentIntent::create(&self.client, params)
            .await
            .map_err(|e| PaymentError::Stripe(e.to_string()))?;

        let client_secret = intent
            .client_secret
            .ok_or_else(|| PaymentError::Stripe("no client secret returned".into()))?;

        tracing::info!(intent = %intent.id, amount_minor, "created payment intent");

        Ok(PaymentIntent {
            id: intent.id.to_string(),
            client_secret,
            amount_minor,
        })
    }

    fn name(&self) -> &'static str {
        "stripe"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minor_unit_conversion() {
        assert_eq!(to_minor_units(50.0).unwrap(), 5000);
        assert_eq!(to_minor_units(1.0).unwrap(), 100);
        assert_eq!(to_minor_units(19.99).unwrap(), 1999);
    }

    #[test]
    fn test_minor_unit_rounding_is_nearest() {
        assert_eq!(to_minor_units(10.555).unwrap(), 1056);
        assert_eq!(to_minor_units(10.554).unwrap(), 1055);
    }

    #[test]
    fn test_amounts_below_minimum_are_rejected() {
        assert!(matches!(
            to_minor_units(0.0),
            Err(PaymentError::InvalidAmount(_))
        ));
        assert!(matches!(
            to_minor_units(-5.0),
            Err(PaymentError::InvalidAmount(_))
        ));
        assert!(matches!(
            to_minor_units(0.99),
            Err(PaymentError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_non_finite_amounts_are_rejected() {
        assert!(to_minor_units(f64::NAN).is_err());
        assert!(to_minor_units(f64::INFINITY).is_err());
    }
}
