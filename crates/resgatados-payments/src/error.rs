//! Payment Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, PaymentError>;

/// Payment-related errors
#[derive(Error, Debug)]
pub enum PaymentError {
    /// Stripe API error
    #[error("Stripe error: {0}")]
    Stripe(String),

    /// Amount missing, non-finite, or below the minimum
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PaymentError {
    /// Message shown to the donor.
    pub fn user_message(&self) -> String {
        match self {
            PaymentError::Stripe(msg) => {
                format!("Erro ao criar intenção de pagamento: {msg}")
            }
            PaymentError::InvalidAmount(_) => "Valor inválido".into(),
            PaymentError::Config(_) => "Pagamentos indisponíveis no momento".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stripe_user_message_carries_processor_text() {
        let err = PaymentError::Stripe("card_declined".into());
        assert_eq!(
            err.user_message(),
            "Erro ao criar intenção de pagamento: card_declined"
        );
    }

    #[test]
    fn test_invalid_amount_user_message() {
        let err = PaymentError::InvalidAmount("R$ 0.00".into());
        assert_eq!(err.user_message(), "Valor inválido");
    }
}
