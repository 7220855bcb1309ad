//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{CustomersCommand, CustomersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Read-side customer use-cases.
    pub customers_query: Arc<dyn CustomersQuery>,
    /// Write-side customer use-cases.
    pub customers_command: Arc<dyn CustomersCommand>,
}

impl HttpState {
    /// Construct state from the two customer ports.
    ///
    /// A single service usually implements both, so pass the same `Arc`
    /// twice.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use customer_service::domain::{CustomerService, RequestValidator};
    /// use customer_service::inbound::http::state::HttpState;
    /// use customer_service::outbound::persistence::InMemoryCustomerRepository;
    ///
    /// let validator = RequestValidator::with_defaults().expect("default pattern compiles");
    /// let service = Arc::new(CustomerService::new(
    ///     Arc::new(InMemoryCustomerRepository::new()),
    ///     Arc::new(validator),
    /// ));
    /// let state = HttpState::new(service.clone(), service);
    /// let _query = state.customers_query.clone();
    /// ```
    pub fn new(
        customers_query: Arc<dyn CustomersQuery>,
        customers_command: Arc<dyn CustomersCommand>,
    ) -> Self {
        Self {
            customers_query,
            customers_command,
        }
    }
}
