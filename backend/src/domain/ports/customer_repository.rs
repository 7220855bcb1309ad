//! Driven port for customer storage.
//!
//! The customer service calls this port only after the request validator has
//! accepted a payload. Adapters own id assignment and ordering.

use async_trait::async_trait;

use crate::domain::{Customer, CustomerDraft, CustomerId};

use super::define_port_error;

define_port_error! {
    /// Failures raised by customer storage adapters.
    pub enum CustomerPersistenceError {
        /// The store could not be reached.
        Connection { message: String } => "customer store connection failed: {message}",
        /// A read or write failed while executing.
        Query { message: String } => "customer store query failed: {message}",
    }
}

/// Customer storage operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Fetch one customer.
    async fn find_by_id(&self, id: CustomerId)
    -> Result<Option<Customer>, CustomerPersistenceError>;

    /// Every customer, ordered by id.
    async fn find_all(&self) -> Result<Vec<Customer>, CustomerPersistenceError>;

    /// Up to `limit` customers after skipping `offset`, ordered by id.
    async fn find_page(
        &self,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<Customer>, CustomerPersistenceError>;

    /// Store a new customer under a freshly assigned id.
    async fn insert(&self, draft: CustomerDraft) -> Result<Customer, CustomerPersistenceError>;

    /// Replace an existing customer, returning `None` when no row has `id`.
    ///
    /// Adapters check existence and write atomically; an id that is absent
    /// is never created by this call.
    async fn update(
        &self,
        id: CustomerId,
        draft: CustomerDraft,
    ) -> Result<Option<Customer>, CustomerPersistenceError>;

    /// Remove a customer, reporting whether anything was deleted.
    async fn delete_by_id(&self, id: CustomerId) -> Result<bool, CustomerPersistenceError>;
}
