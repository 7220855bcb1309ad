//! Customer service library.
//!
//! Hexagonal layout: [`domain`] holds the customer model, the request
//! validation pipeline, and the use-cases; [`inbound`] adapts HTTP onto the
//! driving ports; [`outbound`] implements the storage port.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
