//! Domain primitives, validation, and customer use-cases.
//!
//! Purpose: define the customer model and the rules a payload must satisfy
//! before it is stored. Nothing here depends on Actix or on a concrete store;
//! inbound adapters talk to the driving ports and outbound adapters implement
//! the driven port in [`ports`].
//!
//! Public surface:
//! - [`Customer`], [`CustomerDraft`], [`CustomerId`], [`CustomerInput`]: the
//!   customer model.
//! - [`RequestValidator`]: ordered, first-failure-wins validation pipeline.
//! - [`CustomerService`]: implements [`ports::CustomersQuery`] and
//!   [`ports::CustomersCommand`].
//! - [`Error`] and [`ErrorCode`]: transport-agnostic API error payload.

pub mod customer;
pub mod customer_service;
pub mod error;
mod error_mapping;
pub mod page;
pub mod ports;
pub mod trace_id;
pub mod validation;

pub use self::customer::{Customer, CustomerDraft, CustomerId, CustomerInput};
pub use self::customer_service::{CustomerService, CustomerServiceError};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::page::{
    DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageRequest, PageRequestError,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::validation::{
    Check, DEFAULT_BLOCKED_EMAIL_DOMAINS, DEFAULT_NAME_PUNCTUATION, NamePolicy, RequestValidator,
    ValidationConfig, ValidationError, ValidatorConfigError,
};
