//! Translation of customer failures into API [`Error`] payloads.
//!
//! Validation and pagination failures become [`ErrorCode::InvalidRequest`],
//! missing customers become [`ErrorCode::NotFound`], and storage failures are
//! logged and surfaced as [`ErrorCode::InternalError`]. The message always
//! comes from the failure's `Display` text; `details` carries the offending
//! field and a stable code so clients can branch without parsing prose.
//!
//! ```
//! use customer_service::domain::{Error, ErrorCode, ValidationError};
//!
//! let err = Error::from(ValidationError::RestrictedEmailDomain("gmail.com".into()));
//! assert_eq!(err.code(), ErrorCode::InvalidRequest);
//! assert_eq!(err.message(), "email domain gmail.com is not allowed");
//! ```

use serde_json::json;
use tracing::error;

use super::page::PageRequestError;
use super::ports::CustomerPersistenceError;
use super::{CustomerServiceError, Error, ValidationError};

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        let mut details = json!({ "field": err.field(), "code": err.code() });
        if let ValidationError::RestrictedEmailDomain(domain) = &err {
            details["domain"] = json!(domain);
        }
        Self::invalid_request(err.to_string()).with_details(details)
    }
}

impl From<PageRequestError> for Error {
    fn from(err: PageRequestError) -> Self {
        Self::invalid_request(err.to_string()).with_details(json!({
            "field": err.field(),
            "code": "out_of_range",
        }))
    }
}

impl From<CustomerPersistenceError> for Error {
    fn from(err: CustomerPersistenceError) -> Self {
        error!(error = %err, "customer store failure");
        Self::internal(err.to_string())
    }
}

impl From<CustomerServiceError> for Error {
    fn from(err: CustomerServiceError) -> Self {
        match err {
            CustomerServiceError::Validation(validation) => validation.into(),
            CustomerServiceError::NotFound(id) => Self::not_found(
                CustomerServiceError::NotFound(id).to_string(),
            )
            .with_details(json!({ "id": id.get() })),
            CustomerServiceError::Persistence(persistence) => persistence.into(),
        }
    }
}
