//! Customer use-cases orchestrating validation and storage.
//!
//! Writes run the [`RequestValidator`] first and touch the repository only on
//! success. Lookups that find nothing become [`CustomerServiceError::NotFound`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use super::ports::{CustomerPersistenceError, CustomerRepository, CustomersCommand, CustomersQuery};
use super::{
    Customer, CustomerDraft, CustomerId, CustomerInput, PageRequest, RequestValidator,
    ValidationError,
};

/// Failures surfaced by the customer use-cases.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CustomerServiceError {
    /// The payload failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// No customer exists under the identifier.
    #[error("customer [id={0}] is not found")]
    NotFound(CustomerId),
    /// The storage adapter failed.
    #[error(transparent)]
    Persistence(#[from] CustomerPersistenceError),
}

/// Customer service backed by a repository and a shared validator.
#[derive(Clone)]
pub struct CustomerService {
    repository: Arc<dyn CustomerRepository>,
    validator: Arc<RequestValidator>,
}

impl CustomerService {
    /// Wire the service to its collaborators.
    pub fn new(repository: Arc<dyn CustomerRepository>, validator: Arc<RequestValidator>) -> Self {
        Self {
            repository,
            validator,
        }
    }

    fn validated_draft(&self, input: CustomerInput) -> Result<CustomerDraft, ValidationError> {
        let input = self.validator.validate(input)?;
        CustomerDraft::try_from(input)
    }
}

#[async_trait]
impl CustomersQuery for CustomerService {
    async fn list_customers(&self) -> Result<Vec<Customer>, CustomerServiceError> {
        Ok(self.repository.find_all().await?)
    }

    async fn list_page(&self, page: PageRequest) -> Result<Vec<Customer>, CustomerServiceError> {
        debug!(page = page.page(), size = page.size(), "listing customer page");
        Ok(self
            .repository
            .find_page(page.offset(), page.limit())
            .await?)
    }

    async fn get_customer(&self, id: CustomerId) -> Result<Customer, CustomerServiceError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(CustomerServiceError::NotFound(id))
    }
}

#[async_trait]
impl CustomersCommand for CustomerService {
    async fn create_customer(&self, input: CustomerInput) -> Result<Customer, CustomerServiceError> {
        let draft = self.validated_draft(input)?;
        let customer = self.repository.insert(draft).await?;
        info!(customer_id = %customer.id(), "customer created");
        Ok(customer)
    }

    async fn update_customer(
        &self,
        id: CustomerId,
        input: CustomerInput,
    ) -> Result<Customer, CustomerServiceError> {
        // Existence is checked before the payload is validated.
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(CustomerServiceError::NotFound(id));
        }
        let draft = self.validated_draft(input)?;
        // A concurrent delete can win after the check above.
        let customer = self
            .repository
            .update(id, draft)
            .await?
            .ok_or(CustomerServiceError::NotFound(id))?;
        info!(customer_id = %id, "customer updated");
        Ok(customer)
    }

    async fn delete_customer(&self, id: CustomerId) -> Result<(), CustomerServiceError> {
        if self.repository.delete_by_id(id).await? {
            info!(customer_id = %id, "customer deleted");
            Ok(())
        } else {
            Err(CustomerServiceError::NotFound(id))
        }
    }
}

#[cfg(test)]
#[path = "customer_service_tests.rs"]
mod tests;
