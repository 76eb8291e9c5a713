use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;
use tracing::{debug, error, info, warn};

use super::protocol::*;
use super::AppState;
use crate::config::ContactValidation;
use crate::contact::ContactSubmission;
use crate::error::FieldError;
use crate::services;
use crate::Error;

pub(crate) async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub(crate) async fn submit_contact(State(state): State<AppState>, body: Bytes) -> Response {
    let mode = state.config.contact_validation;

    let submission = match parse_submission(&body) {
        Ok(submission) => submission,
        Err(e) => {
            warn!("Rejected contact body: {}", e);
            return invalid_response(mode, vec![FieldError::new("body", "JSON inválido")]);
        }
    };

    let data = match submission.validate(mode) {
        Ok(data) => data,
        Err(Error::Validation(fields)) => {
            debug_fields(&fields);
            return invalid_response(mode, fields);
        }
        Err(e) => return internal_error(e),
    };

    match state.store.create(data).await {
        Ok(message) => {
            info!(id = message.id, service = %message.service, "Contact message received");
            (StatusCode::CREATED, Json(ContactResponse::created(message))).into_response()
        }
        Err(e) => internal_error(e),
    }
}

pub(crate) async fn list_services() -> Json<&'static [services::ServiceOffering]> {
    Json(services::catalog())
}

pub(crate) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok_now())
}

pub(crate) async fn contact_method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ContactResponse::failure(messages::METHOD_NOT_ALLOWED)),
    )
        .into_response()
}

pub(crate) async fn services_method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(MessageResponse {
            message: messages::METHOD_NOT_ALLOWED.to_string(),
        }),
    )
        .into_response()
}

/// Only a JSON object is a submission; serde would otherwise accept arrays
/// positionally
fn parse_submission(body: &[u8]) -> Result<ContactSubmission, Error> {
    match serde_json::from_slice::<Value>(body)? {
        object @ Value::Object(_) => Ok(serde_json::from_value(object)?),
        other => Err(Error::Other(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn invalid_response(mode: ContactValidation, fields: Vec<FieldError>) -> Response {
    let body = match mode {
        ContactValidation::Presence => ContactResponse::failure(messages::CONTACT_MISSING_FIELDS),
        ContactValidation::Strict => ContactResponse::invalid_fields(fields),
    };
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}

fn internal_error(e: Error) -> Response {
    error!("Error processing contact: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ContactResponse::failure(messages::CONTACT_FAILED)),
    )
        .into_response()
}

fn debug_fields(fields: &[FieldError]) {
    for f in fields {
        debug!(field = %f.field, reason = %f.message, "Contact field rejected");
    }
}
