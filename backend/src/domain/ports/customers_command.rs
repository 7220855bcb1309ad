//! Driving port for customer writes.

use async_trait::async_trait;

use crate::domain::{Customer, CustomerId, CustomerInput, CustomerServiceError};

/// Write-side customer use-cases. Every payload passes the request validator
/// before it reaches storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomersCommand: Send + Sync {
    /// Validate and store a new customer under a fresh id.
    async fn create_customer(&self, input: CustomerInput) -> Result<Customer, CustomerServiceError>;

    /// Replace an existing customer's fields.
    async fn update_customer(
        &self,
        id: CustomerId,
        input: CustomerInput,
    ) -> Result<Customer, CustomerServiceError>;

    /// Remove a customer.
    async fn delete_customer(&self, id: CustomerId) -> Result<(), CustomerServiceError>;
}
