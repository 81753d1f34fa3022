//! # resgatados-core
//!
//! Shared schema for the Resgatados site. The same types are compiled into the
//! server (authoritative validation) and the WASM frontend (inline form errors,
//! donation widget state), so wire shapes and validation messages can never
//! drift between the two.
//!
//! ```text
//! ┌──────────────────┐          ┌──────────────────┐
//! │ resgatados-web   │          │ resgatados-server│
//! │ (Leptos, WASM)   │──POST───▶│ (axum)           │
//! └────────┬─────────┘          └────────┬─────────┘
//!          │        resgatados-core      │
//!          └──── forms / donation / content ────┘
//! ```

pub mod content;
pub mod donation;
pub mod forms;

pub use content::{
    filter_by_category, Partner, PartnerKind, Project, ProjectCategory, TeamMember, Testimonial,
};
pub use donation::{
    DonationRequest, Frequency, PaymentMethod, MIN_DONATION_AMOUNT, PIX_KEY, PRESET_AMOUNTS,
};
pub use forms::{validate_form, ContactForm, FieldErrors, FormSchema, NewsletterForm, PartnerForm};
