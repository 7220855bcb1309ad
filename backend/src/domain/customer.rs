//! Customer data model.
//!
//! [`CustomerInput`] is the raw inbound payload; it may be incomplete or
//! malformed and only becomes a [`CustomerDraft`] after the request validator
//! accepts it. [`Customer`] is the stored record returned to clients.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::validation::ValidationError;

/// Numeric customer identifier assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(i32);

impl CustomerId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Raw integer value.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<i32> for CustomerId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

/// Inbound customer payload, constructed per request.
///
/// Every field is optional on the wire so that missing values reach the
/// validator instead of failing deserialisation.
///
/// # Examples
/// ```
/// use customer_service::domain::CustomerInput;
///
/// let input = CustomerInput::new("abc", "abc@company.com");
/// assert_eq!(input.name.as_deref(), Some("abc"));
/// assert!(input.id.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInput {
    /// Client-supplied identifier. Ignored on create; the path id wins on update.
    #[serde(default)]
    pub id: Option<i32>,
    /// Customer name.
    #[serde(default)]
    pub name: Option<String>,
    /// Contact email address.
    #[serde(default)]
    pub email: Option<String>,
}

impl CustomerInput {
    /// Build an input with both name and email present.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }

    /// Set the client-supplied identifier.
    #[must_use]
    pub const fn with_id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }
}

/// Validated, trimmed customer fields ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerDraft {
    name: String,
    email: String,
}

impl CustomerDraft {
    /// Trimmed customer name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Trimmed contact email.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}

impl TryFrom<CustomerInput> for CustomerDraft {
    type Error = ValidationError;

    /// Extract the stored fields from an input the validator already accepted.
    ///
    /// Only presence is rechecked here; format rules belong to the validator.
    fn try_from(value: CustomerInput) -> Result<Self, Self::Error> {
        let name = value
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or(ValidationError::MissingName)?;
        let email = value
            .email
            .as_deref()
            .map(str::trim)
            .filter(|email| !email.is_empty())
            .ok_or(ValidationError::MissingEmail)?;
        Ok(Self {
            name: name.to_owned(),
            email: email.to_owned(),
        })
    }
}

/// Stored customer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    name: String,
    email: String,
}

impl Customer {
    /// Assemble a record from an identifier and validated fields.
    #[must_use]
    pub fn from_draft(id: CustomerId, draft: CustomerDraft) -> Self {
        let CustomerDraft { name, email } = draft;
        Self { id, name, email }
    }

    /// Store-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> CustomerId {
        self.id
    }

    /// Customer name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Contact email.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}
