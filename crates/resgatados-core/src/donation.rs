//! Donation Types
//!
//! Transient per-checkout-attempt data. Nothing here is persisted; the payment
//! intent created from a [`DonationRequest`] lives on the processor's side.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Minimum accepted donation, in reais. Enforced in the UI and re-validated
/// by the server before a payment intent is requested.
pub const MIN_DONATION_AMOUNT: f64 = 1.0;

/// Preset amounts offered on the donation page, in reais.
pub const PRESET_AMOUNTS: [u32; 4] = [20, 50, 100, 200];

/// PIX key shown as the instant-payment alternative.
pub const PIX_KEY: &str = "pix@resgatados.org.br";

/// How often the donor intends to give.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Once,
    Monthly,
    Quarterly,
    Annual,
}

impl Frequency {
    pub const ALL: [Self; 4] = [Self::Once, Self::Monthly, Self::Quarterly, Self::Annual];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Once => "once",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Annual => "annual",
        }
    }

    /// Label shown on the frequency selector.
    pub fn label(self) -> &'static str {
        match self {
            Self::Once => "Uma vez",
            Self::Monthly => "Mensal",
            Self::Quarterly => "Trimestral",
            Self::Annual => "Anual",
        }
    }
}

impl Default for Frequency {
    fn default() -> Self {
        Self::Once
    }
}

/// Payment method tabs on the donation page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Pix,
    Card,
}

impl PaymentMethod {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pix => "PIX",
            Self::Card => "Cartão",
        }
    }
}

impl Default for PaymentMethod {
    fn default() -> Self {
        Self::Pix
    }
}

/// A donor's checkout selection. Created per attempt, never stored.
#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DonationRequest {
    #[validate(range(min = 1.0, message = "Valor deve ser maior que R$ 0"))]
    pub amount: f64,

    pub frequency: Frequency,

    pub payment_method: PaymentMethod,
}

impl DonationRequest {
    /// UI-side gate before a payment intent is requested. The server
    /// re-validates independently; this is never trusted.
    pub fn meets_minimum(&self) -> bool {
        self.amount.is_finite() && self.amount >= MIN_DONATION_AMOUNT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_minimum_amount() {
        let request = DonationRequest {
            amount: 0.5,
            frequency: Frequency::Once,
            payment_method: PaymentMethod::Card,
        };
        assert!(request.validate().is_err());

        let request = DonationRequest { amount: 1.0, ..request };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_meets_minimum() {
        let request = DonationRequest {
            amount: 0.99,
            frequency: Frequency::Monthly,
            payment_method: PaymentMethod::Card,
        };
        assert!(!request.meets_minimum());
        assert!(DonationRequest { amount: 1.0, ..request.clone() }.meets_minimum());
        assert!(!DonationRequest { amount: f64::NAN, ..request }.meets_minimum());
    }

    #[test]
    fn test_frequency_wire_names() {
        let json = serde_json::to_string(&Frequency::Quarterly).unwrap();
        assert_eq!(json, r#""quarterly""#);

        let parsed: Frequency = serde_json::from_str(r#""annual""#).unwrap();
        assert_eq!(parsed, Frequency::Annual);
    }

    #[test]
    fn test_donation_request_wire_shape() {
        let request: DonationRequest = serde_json::from_str(
            r#"{"amount":50,"frequency":"monthly","paymentMethod":"card"}"#,
        )
        .unwrap();

        assert_eq!(request.amount, 50.0);
        assert_eq!(request.frequency, Frequency::Monthly);
        assert_eq!(request.payment_method, PaymentMethod::Card);
    }
}
