//! Form Schemas
//!
//! Contact, partnership and newsletter form definitions with their validation
//! rules. The frontend validates before submitting to render inline errors;
//! the server validates again on receipt and is authoritative. Client-side
//! validation is UX only and is never trusted.
//!
//! Missing fields deserialize to empty strings (`#[serde(default)]`), so a
//! missing field and an empty field produce the same "required" error.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

/// A validatable form with a stable field order.
///
/// `FIELDS` drives [`FieldErrors`] ordering: one message per invalid field,
/// first error wins, iterated in declaration order.
pub trait FormSchema: Validate {
    /// Field names in declaration order.
    const FIELDS: &'static [&'static str];
}

/// General contact form (`POST /api/contact`).
#[derive(Clone, Debug, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ContactForm {
    #[validate(length(min = 1, message = "Nome é obrigatório"))]
    pub name: String,

    #[validate(email(message = "E-mail inválido"))]
    pub email: String,

    #[validate(length(min = 1, message = "Assunto é obrigatório"))]
    pub subject: String,

    #[validate(length(min = 1, message = "Mensagem é obrigatória"))]
    pub message: String,
}

impl FormSchema for ContactForm {
    const FIELDS: &'static [&'static str] = &["name", "email", "subject", "message"];
}

/// Partnership inquiry form (`POST /api/partner-contact`).
#[derive(Clone, Debug, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PartnerForm {
    #[validate(length(min = 1, message = "Nome é obrigatório"))]
    pub name: String,

    #[validate(email(message = "E-mail inválido"))]
    pub email: String,

    #[validate(length(min = 1, message = "Telefone é obrigatório"))]
    pub phone: String,

    #[validate(length(min = 1, message = "Mensagem é obrigatória"))]
    pub message: String,
}

impl FormSchema for PartnerForm {
    const FIELDS: &'static [&'static str] = &["name", "email", "phone", "message"];
}

/// Footer newsletter signup. Validated client-side only; there is no endpoint
/// for it yet.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct NewsletterForm {
    #[validate(email(message = "E-mail inválido"))]
    pub email: String,
}

impl FormSchema for NewsletterForm {
    const FIELDS: &'static [&'static str] = &["email"];
}

/// Field-level validation errors, in field declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(&'static str, String)>);

impl FieldErrors {
    fn from_validation(fields: &'static [&'static str], errors: &ValidationErrors) -> Self {
        let by_field = errors.field_errors();
        let mut ordered = Vec::new();

        for &field in fields {
            if let Some(first) = by_field.get(field).and_then(|list| list.first()) {
                let message = first
                    .message
                    .as_deref()
                    .unwrap_or("Campo inválido")
                    .to_string();
                ordered.push((field, message));
            }
        }

        Self(ordered)
    }

    /// Error message for a single field, if it failed validation.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, message)| message.as_str())
    }

    /// The first failing field's message, in declaration order.
    pub fn first_message(&self) -> Option<&str> {
        self.0.first().map(|(_, message)| message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Validate a form, collecting one message per invalid field.
pub fn validate_form<T: FormSchema>(form: &T) -> Result<(), FieldErrors> {
    form.validate()
        .map_err(|errors| FieldErrors::from_validation(T::FIELDS, &errors))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str, email: &str, subject: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    #[test]
    fn test_valid_contact_form() {
        let form = contact("Maria", "maria@example.com", "Voluntariado", "Quero ajudar");
        assert!(validate_form(&form).is_ok());
    }

    #[test]
    fn test_empty_fields_are_rejected() {
        let form = contact("", "maria@example.com", "", "Quero ajudar");
        let errors = validate_form(&form).unwrap_err();

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("name"), Some("Nome é obrigatório"));
        assert_eq!(errors.get("subject"), Some("Assunto é obrigatório"));
        assert_eq!(errors.get("message"), None);
    }

    #[test]
    fn test_first_message_follows_declaration_order() {
        let form = contact("", "not-an-email", "", "");
        let errors = validate_form(&form).unwrap_err();

        // name comes before email, subject and message
        assert_eq!(errors.first_message(), Some("Nome é obrigatório"));
    }

    #[test]
    fn test_malformed_email() {
        let form = contact("Maria", "maria@", "Doações", "Olá");
        let errors = validate_form(&form).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("email"), Some("E-mail inválido"));
    }

    #[test]
    fn test_empty_email_reports_invalid_email() {
        let form = contact("Maria", "", "Doações", "Olá");
        let errors = validate_form(&form).unwrap_err();
        assert_eq!(errors.get("email"), Some("E-mail inválido"));
    }

    #[test]
    fn test_missing_fields_deserialize_as_empty() {
        let form: ContactForm = serde_json::from_str(r#"{"name":"Maria"}"#).unwrap();
        let errors = validate_form(&form).unwrap_err();

        assert_eq!(errors.get("email"), Some("E-mail inválido"));
        assert_eq!(errors.get("subject"), Some("Assunto é obrigatório"));
        assert_eq!(errors.get("message"), Some("Mensagem é obrigatória"));
    }

    #[test]
    fn test_partner_form_requires_phone() {
        let form = PartnerForm {
            name: "Empresa Solidária".into(),
            email: "contato@empresa.com.br".into(),
            phone: String::new(),
            message: "Queremos ser parceiros".into(),
        };
        let errors = validate_form(&form).unwrap_err();

        assert_eq!(errors.first_message(), Some("Telefone é obrigatório"));
    }

    #[test]
    fn test_newsletter_form() {
        let ok = NewsletterForm { email: "a@b.org".into() };
        assert!(validate_form(&ok).is_ok());

        let bad = NewsletterForm { email: "nope".into() };
        let errors = validate_form(&bad).unwrap_err();
        assert_eq!(errors.first_message(), Some("E-mail inválido"));
    }
}
