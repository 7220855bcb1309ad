//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every customer endpoint and health probe, plus the
//! schema wrappers from [`crate::inbound::http::schemas`] so domain types
//! stay free of utoipa derives.
//!
//! The generated document backs Swagger UI in debug builds and is exported
//! via `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{
    CustomerInputSchema, CustomerSchema, ErrorCodeSchema, ErrorSchema,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Customer service API",
        description = "Customer CRUD with ordered, first-failure-wins request validation.",
        license(name = "MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::customers::list_customers,
        crate::inbound::http::customers::list_customers_paginated,
        crate::inbound::http::customers::get_customer,
        crate::inbound::http::customers::create_customer,
        crate::inbound::http::customers::update_customer,
        crate::inbound::http::customers::delete_customer,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(CustomerSchema, CustomerInputSchema, ErrorSchema, ErrorCodeSchema)),
    tags(
        (name = "customers", description = "Customer records"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
