use serde::{Deserialize, Serialize};

use crate::config::ContactValidation;
use crate::error::FieldError;
use crate::services;
use crate::{Error, Result};

/// Raw contact form payload as submitted by the site
///
/// Every field is optional here; validation decides what is required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Validated data required to store a contact message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

/// A stored contact message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

impl ContactMessage {
    pub fn new(id: u64, data: NewContactMessage) -> Self {
        Self {
            id,
            name: data.name,
            email: data.email,
            phone: data.phone,
            service: data.service,
            message: data.message,
        }
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Loose email shape check: `local@domain.tld`, no whitespace
fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

impl ContactSubmission {
    /// Validate using the given mode
    pub fn validate(&self, mode: ContactValidation) -> Result<NewContactMessage> {
        match mode {
            ContactValidation::Presence => self.validate_presence(),
            ContactValidation::Strict => self.validate_strict(),
        }
    }

    /// Require non-empty name, email, service and message
    pub fn validate_presence(&self) -> Result<NewContactMessage> {
        let missing: Vec<FieldError> = self
            .required()
            .into_iter()
            .filter(|(_, value)| value.is_none())
            .map(|(field, _)| FieldError::new(field, "Campo obrigatório"))
            .collect();

        if !missing.is_empty() {
            return Err(Error::Validation(missing));
        }
        Ok(self.to_new_message())
    }

    /// Presence checks plus email shape and known service id; reports
    /// every failing field at once
    pub fn validate_strict(&self) -> Result<NewContactMessage> {
        let mut errors = Vec::new();

        for (field, value) in self.required() {
            if value.is_none() {
                errors.push(FieldError::new(field, "Campo obrigatório"));
            }
        }

        if let Some(email) = present(&self.email) {
            if !looks_like_email(email) {
                errors.push(FieldError::new("email", "Email inválido"));
            }
        }

        if let Some(service) = present(&self.service) {
            if services::find(service).is_none() {
                errors.push(FieldError::new("service", "Serviço desconhecido"));
            }
        }

        if !errors.is_empty() {
            return Err(Error::Validation(errors));
        }
        Ok(self.to_new_message())
    }

    fn required(&self) -> [(&'static str, Option<&str>); 4] {
        [
            ("name", present(&self.name)),
            ("email", present(&self.email)),
            ("service", present(&self.service)),
            ("message", present(&self.message)),
        ]
    }

    fn to_new_message(&self) -> NewContactMessage {
        NewContactMessage {
            name: self.name.clone().unwrap_or_default(),
            email: self.email.clone().unwrap_or_default(),
            phone: self.phone.clone().unwrap_or_default(),
            service: self.service.clone().unwrap_or_default(),
            message: self.message.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: Some("Ana".into()),
            email: Some("a@x.com".into()),
            phone: None,
            service: Some("sites-profissionais".into()),
            message: Some("Oi".into()),
        }
    }

    fn failing_fields(err: Error) -> Vec<String> {
        match err {
            Error::Validation(fields) => fields.into_iter().map(|f| f.field).collect(),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_presence_accepts_missing_phone() {
        let msg = submission().validate_presence().unwrap();
        assert_eq!(msg.phone, "");
        assert_eq!(msg.name, "Ana");
    }

    #[test]
    fn test_presence_rejects_missing_and_empty_fields() {
        let mut s = submission();
        s.message = None;
        s.name = Some(String::new());
        let fields = failing_fields(s.validate_presence().unwrap_err());
        assert_eq!(fields, vec!["name", "message"]);
    }

    #[test]
    fn test_presence_does_not_check_email_shape() {
        let mut s = submission();
        s.email = Some("not-an-email".into());
        assert!(s.validate(ContactValidation::Presence).is_ok());
        assert!(s.validate(ContactValidation::Strict).is_err());
    }

    #[test]
    fn test_strict_reports_every_field() {
        let s = ContactSubmission {
            email: Some("a@b".into()),
            service: Some("unknown".into()),
            ..Default::default()
        };
        let fields = failing_fields(s.validate_strict().unwrap_err());
        assert_eq!(fields, vec!["name", "message", "email", "service"]);
    }

    #[test]
    fn test_email_shape() {
        assert!(looks_like_email("a@x.com"));
        assert!(!looks_like_email("a @x.com"));
        assert!(!looks_like_email("@x.com"));
        assert!(!looks_like_email("a@x."));
        assert!(!looks_like_email("a@@x.com"));
    }
}
