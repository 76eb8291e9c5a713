//! Wire types and fixed strings of the HTTP API

use serde::{Deserialize, Serialize};

use crate::contact::ContactMessage;
use crate::error::FieldError;

// Route paths
pub mod routes {
    pub const CONTACT: &str = "/api/contact";
    pub const SERVICES: &str = "/api/services";
    pub const HEALTH: &str = "/api/health";
}

// User-facing messages
pub mod messages {
    pub const CONTACT_CREATED: &str = "Mensagem enviada com sucesso!";
    pub const CONTACT_MISSING_FIELDS: &str =
        "Dados inválidos. Nome, email, serviço e mensagem são obrigatórios.";
    pub const CONTACT_INVALID: &str = "Dados inválidos";
    pub const CONTACT_FAILED: &str = "Erro ao enviar mensagem";
    pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";
}

/// Envelope returned by the contact endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ContactMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl ContactResponse {
    pub fn created(data: ContactMessage) -> Self {
        Self {
            success: true,
            message: messages::CONTACT_CREATED.to_string(),
            data: Some(data),
            errors: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            errors: None,
        }
    }

    pub fn invalid_fields(errors: Vec<FieldError>) -> Self {
        Self {
            errors: Some(errors),
            ..Self::failure(messages::CONTACT_INVALID)
        }
    }
}

/// Body of a bare message response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

impl HealthResponse {
    pub fn ok_now() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_omits_data_and_errors() {
        let json = serde_json::to_value(ContactResponse::failure("x")).unwrap();
        assert_eq!(json, serde_json::json!({"success": false, "message": "x"}));
    }

    #[test]
    fn test_invalid_fields_lists_errors() {
        let fields = vec![FieldError::new("email", "Email inválido")];
        let resp = ContactResponse::invalid_fields(fields);
        let json = serde_json::to_value(resp).unwrap();
        assert_eq!(json["message"], messages::CONTACT_INVALID);
        assert_eq!(json["errors"][0]["field"], "email");
    }

    #[test]
    fn test_health_timestamp_is_utc_iso8601() {
        let health = HealthResponse::ok_now();
        assert_eq!(health.status, "ok");
        assert!(health.timestamp.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&health.timestamp).is_ok());
    }
}
