//! Checkout Phases
//!
//! Linear status progression of the donation checkout widget, kept as plain
//! state so the transitions are testable off-browser. The component in
//! `pages::donation` drives it.

/// State of one checkout attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckoutPhase {
    /// Nothing requested yet
    Idle,
    /// Payment intent requested, awaiting the client secret
    LoadingIntent,
    /// Secret obtained; the Payment Element can be mounted
    Ready { client_secret: String },
    /// Confirmation in flight; further submits are disabled
    Processing { client_secret: String },
    /// Synchronous confirmation error; the same intent is retried
    Failed { client_secret: String, message: String },
    /// Confirmation succeeded; the browser is being redirected
    Redirected,
    /// No publishable key, Stripe.js missing, or the intent fetch failed.
    /// The page falls back to PIX instructions instead of hard-failing.
    Unavailable,
}

impl CheckoutPhase {
    /// Secret of the intent currently bound to the widget, if any.
    pub fn client_secret(&self) -> Option<&str> {
        match self {
            Self::Ready { client_secret }
            | Self::Processing { client_secret }
            | Self::Failed { client_secret, .. } => Some(client_secret),
            _ => None,
        }
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        matches!(self, Self::Ready { .. } | Self::Failed { .. })
    }

    pub fn is_processing(&self) -> bool {
        matches!(self, Self::Processing { .. })
    }

    /// The intent fetch resolved. Ignored unless a fetch was pending.
    pub fn intent_ready(self, client_secret: String) -> Self {
        match self {
            Self::LoadingIntent => Self::Ready { client_secret },
            other => other,
        }
    }

    /// Submit pressed. No-op unless submission is currently allowed.
    pub fn submit(self) -> Self {
        match self {
            Self::Ready { client_secret } | Self::Failed { client_secret, .. } => {
                Self::Processing { client_secret }
            }
            other => other,
        }
    }

    /// Synchronous confirmation error; the intent is kept for retry.
    pub fn confirm_failed(self, message: String) -> Self {
        match self {
            Self::Processing { client_secret } => Self::Failed {
                client_secret,
                message,
            },
            other => other,
        }
    }

    /// Confirmation succeeded; the processor is redirecting the browser.
    pub fn confirmed(self) -> Self {
        match self {
            Self::Processing { .. } => Self::Redirected,
            other => other,
        }
    }
}

/// Parse the custom-amount input. Empty or unparsable input yields `None`
/// (the preset amount stays in effect); comma decimals are accepted.
pub fn parse_custom_amount(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    trimmed
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready() -> CheckoutPhase {
        CheckoutPhase::LoadingIntent.intent_ready("pi_1_secret".into())
    }

    #[test]
    fn test_intent_ready_only_applies_while_loading() {
        assert_eq!(
            ready(),
            CheckoutPhase::Ready {
                client_secret: "pi_1_secret".into()
            }
        );

        // stale resolution after the widget degraded
        let phase = CheckoutPhase::Unavailable.intent_ready("pi_2_secret".into());
        assert_eq!(phase, CheckoutPhase::Unavailable);
    }

    #[test]
    fn test_submit_moves_to_processing() {
        let phase = ready().submit();
        assert!(phase.is_processing());
        assert_eq!(phase.client_secret(), Some("pi_1_secret"));
    }

    #[test]
    fn test_second_submit_while_processing_is_a_noop() {
        let processing = ready().submit();
        assert!(!processing.can_submit());
        assert_eq!(processing.clone().submit(), processing);
    }

    #[test]
    fn test_confirm_failure_keeps_intent_for_retry() {
        let failed = ready().submit().confirm_failed("Cartão recusado".into());

        assert_eq!(failed.client_secret(), Some("pi_1_secret"));
        assert!(failed.can_submit());

        // retry reuses the same secret, no new intent requested
        let retried = failed.submit();
        assert_eq!(retried.client_secret(), Some("pi_1_secret"));
    }

    #[test]
    fn test_confirmed_redirects() {
        let phase = ready().submit().confirmed();
        assert_eq!(phase, CheckoutPhase::Redirected);
        assert_eq!(phase.client_secret(), None);
    }

    #[test]
    fn test_idle_cannot_submit() {
        assert!(!CheckoutPhase::Idle.can_submit());
        assert_eq!(CheckoutPhase::Idle.submit(), CheckoutPhase::Idle);
    }

    #[test]
    fn test_parse_custom_amount() {
        assert_eq!(parse_custom_amount(""), None);
        assert_eq!(parse_custom_amount("   "), None);
        assert_eq!(parse_custom_amount("75"), Some(75.0));
        assert_eq!(parse_custom_amount("75.50"), Some(75.5));
        assert_eq!(parse_custom_amount("75,50"), Some(75.5));
        assert_eq!(parse_custom_amount("abc"), None);
    }
}
