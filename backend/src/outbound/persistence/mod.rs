//! Customer persistence adapters.
//!
//! The only adapter shipped is an in-memory store; anything that implements
//! [`crate::domain::ports::CustomerRepository`] can replace it.

mod in_memory_customer_repository;

pub use in_memory_customer_repository::{DEMO_CUSTOMERS, InMemoryCustomerRepository};
