//! Domain ports for the hexagonal boundary.
//!
//! Driving ports ([`CustomersQuery`], [`CustomersCommand`]) are what inbound
//! adapters call; the driven port ([`CustomerRepository`]) is what outbound
//! adapters implement.

mod macros;
pub(crate) use macros::define_port_error;

mod customer_repository;
mod customers_command;
mod customers_query;

#[cfg(test)]
pub use customer_repository::MockCustomerRepository;
pub use customer_repository::{CustomerPersistenceError, CustomerRepository};
#[cfg(test)]
pub use customers_command::MockCustomersCommand;
pub use customers_command::CustomersCommand;
#[cfg(test)]
pub use customers_query::MockCustomersQuery;
pub use customers_query::CustomersQuery;
