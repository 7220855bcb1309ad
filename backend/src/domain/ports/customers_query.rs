//! Driving port for customer reads.
//!
//! HTTP handlers depend on this trait rather than on the repository so they
//! never see storage errors directly.

use async_trait::async_trait;

use crate::domain::{Customer, CustomerId, CustomerServiceError, PageRequest};

/// Read-side customer use-cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomersQuery: Send + Sync {
    /// All customers ordered by id.
    async fn list_customers(&self) -> Result<Vec<Customer>, CustomerServiceError>;

    /// One page of customers ordered by id.
    async fn list_page(&self, page: PageRequest) -> Result<Vec<Customer>, CustomerServiceError>;

    /// A single customer, or [`CustomerServiceError::NotFound`].
    async fn get_customer(&self, id: CustomerId) -> Result<Customer, CustomerServiceError>;
}
