//! Mock Gateway
//!
//! For tests and local development without Stripe credentials. Records every
//! requested amount and can be configured to fail like the processor would.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{PaymentError, Result};
use crate::gateway::{to_minor_units, DonationGateway, PaymentIntent};

/// Mock gateway recording every intent request
pub struct MockGateway {
    calls: Mutex<Vec<f64>>,
    fail_with: Option<String>,
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGateway {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_with: None,
        }
    }

    /// A gateway whose every call fails with the given processor message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_with: Some(message.into()),
        }
    }

    /// Amounts (in reais) the gateway was asked to charge, in order.
    pub fn amounts(&self) -> Vec<f64> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl DonationGateway for MockGateway {
    async fn create_payment_intent(&self, amount: f64) -> Result<PaymentIntent> {
        let sequence = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(amount);
            calls.len()
        };

        if let Some(message) = &self.fail_with {
            return Err(PaymentError::Stripe(message.clone()));
        }

        let amount_minor = to_minor_units(amount)?;

        Ok(PaymentIntent {
            id: format!("pi_mock_{sequence}"),
            client_secret: format!("pi_mock_{sequence}_secret_test"),
            amount_minor,
        })
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_records_amounts() {
        let gateway = MockGateway::new();

        let intent = gateway.create_payment_intent(50.0).await.unwrap();
        assert_eq!(intent.amount_minor, 5000);
        assert!(intent.client_secret.contains("secret"));

        gateway.create_payment_intent(20.0).await.unwrap();
        assert_eq!(gateway.amounts(), vec![50.0, 20.0]);
    }

    #[tokio::test]
    async fn test_mock_failure() {
        let gateway = MockGateway::failing("Your card was declined");

        let err = gateway.create_payment_intent(50.0).await.unwrap_err();
        assert!(matches!(err, PaymentError::Stripe(_)));
        assert_eq!(gateway.call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_rejects_bad_amounts() {
        let gateway = MockGateway::new();
        let err = gateway.create_payment_intent(0.0).await.unwrap_err();
        assert!(matches!(err, PaymentError::InvalidAmount(_)));
    }
}
