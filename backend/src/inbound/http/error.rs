//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep [`Error`] HTTP-agnostic while letting Actix handlers turn
//! domain failures into consistent JSON responses and status codes.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        let mut redacted = Error::internal("Internal server error");
        if let Some(id) = error.trace_id() {
            redacted = redacted.with_trace_id(id.to_owned());
        }
        redacted
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(redact_if_internal(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Error::internal("Internal server error")
    }
}

/// Render malformed JSON bodies as `invalid_request` payloads.
///
/// Registered through `web::JsonConfig::error_handler` so clients see the
/// same error shape for unparsable bodies as for validation failures.
pub fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    let detail = err.to_string();
    Error::invalid_request("request body is not valid customer JSON")
        .with_details(serde_json::json!({ "field": "body", "code": "malformed_json", "reason": detail }))
        .into()
}

/// Render unparsable query strings as `invalid_request` payloads.
pub fn query_error_handler(
    err: actix_web::error::QueryPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    let detail = err.to_string();
    Error::invalid_request("query parameters are not valid")
        .with_details(serde_json::json!({ "field": "query", "code": "malformed_query", "reason": detail }))
        .into()
}

/// Render unparsable path segments, such as a non-numeric customer id.
pub fn path_error_handler(
    err: actix_web::error::PathError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    let detail = err.to_string();
    Error::invalid_request("path parameters are not valid")
        .with_details(serde_json::json!({ "field": "id", "code": "malformed_path", "reason": detail }))
        .into()
}

#[cfg(test)]
mod tests;
