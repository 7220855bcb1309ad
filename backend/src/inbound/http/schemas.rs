//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their wire shape and live in the inbound adapter
//! layer where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested customer does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "email domain gmail.com is not allowed")]
    message: String,
    /// Correlation identifier, echoed in the `trace-id` header.
    #[schema(rename = "traceId", example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Offending field and failure code, e.g. `{"field":"email","code":"restricted_email_domain"}`.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Customer`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Customer)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CustomerSchema {
    /// Store-assigned identifier.
    #[schema(example = 1)]
    id: i32,
    /// Customer name.
    #[schema(example = "abc")]
    name: String,
    /// Contact email.
    #[schema(example = "abc@company.com")]
    email: String,
}

/// OpenAPI schema for [`crate::domain::CustomerInput`].
#[derive(ToSchema)]
#[schema(as = crate::domain::CustomerInput)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CustomerInputSchema {
    /// Ignored on create; the path id wins on update.
    id: Option<i32>,
    /// Required. Letters only under the default name policy.
    #[schema(example = "abc")]
    name: Option<String>,
    /// Required. Consumer mail domains are rejected.
    #[schema(example = "abc@company.com")]
    email: Option<String>,
}
