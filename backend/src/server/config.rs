//! HTTP server configuration object.

use std::net::SocketAddr;

use customer_service::domain::ValidationConfig;

/// Everything [`super::create_server`] needs to wire the application.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) validation: ValidationConfig,
    pub(crate) seed_demo_data: bool,
}

impl ServerConfig {
    /// Bind to `bind_addr` and validate payloads with `validation`.
    #[must_use]
    pub const fn new(bind_addr: SocketAddr, validation: ValidationConfig) -> Self {
        Self {
            bind_addr,
            validation,
            seed_demo_data: false,
        }
    }

    /// Pre-load the in-memory store with the demo customers.
    #[must_use]
    pub const fn with_demo_data(mut self, enabled: bool) -> Self {
        self.seed_demo_data = enabled;
        self
    }
}
