//! # resgatados-payments
//!
//! Stripe integration for the donation flow.
//!
//! ## Integration approach: Payment Element (embedded)
//!
//! The donation page keeps the donor on the site and embeds Stripe's hosted
//! Payment Element, bound to a payment intent created here:
//!
//! ```text
//! ┌──────────────┐  amount   ┌──────────────┐  minor units  ┌─────────┐
//! │ Donation page│──────────▶│ this crate   │──────────────▶│ Stripe  │
//! │ (Leptos)     │◀──────────│ (intent)     │◀──────────────│  API    │
//! └──────┬───────┘  secret   └──────────────┘ client secret └─────────┘
//!        │ mounts Payment Element with the secret; confirmation and the
//!        ▼ success redirect happen between the browser and Stripe.
//! ```
//!
//! The server only brokers intent creation. It never learns whether the
//! payment succeeded: confirmation ends in a browser redirect, and there is
//! no webhook listener. A single attempt is made per submission; Stripe
//! failures are terminal and surface the processor's message.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use resgatados_payments::{DonationGateway, StripeGateway};
//!
//! let gateway = StripeGateway::from_env()?;
//! let intent = gateway.create_payment_intent(50.0).await?;
//! // hand intent.client_secret to the browser
//! ```

mod error;
mod gateway;
mod mock;

pub use error::{PaymentError, Result};
pub use gateway::{to_minor_units, DonationGateway, PaymentIntent, StripeGateway};
pub use mock::MockGateway;
