//! Customer HTTP handlers.
//!
//! ```text
//! GET    /api/v1/customers
//! GET    /api/v1/customers/paginated?page=1&size=3
//! GET    /api/v1/customers/{id}
//! POST   /api/v1/customers        {"name":"abc","email":"abc@company.com"}
//! PUT    /api/v1/customers/{id}   {"name":"abc","email":"abc@company.com"}
//! DELETE /api/v1/customers/{id}
//! ```
//!
//! Handlers only translate between HTTP and the customer ports. Validation,
//! existence checks, and error mapping happen in the domain; `?` turns a
//! `CustomerServiceError` into the API [`Error`] rendered by
//! [`crate::inbound::http::error`].

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::Deserialize;
use tracing::debug;
use utoipa::IntoParams;

use crate::domain::{
    Customer, CustomerId, CustomerInput, DEFAULT_PAGE, DEFAULT_PAGE_SIZE, Error, PageRequest,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{CustomerInputSchema, CustomerSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;

/// Query parameters for `GET /api/v1/customers/paginated`.
#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// One-based page number. Defaults to 1.
    #[param(minimum = 1, example = 1)]
    pub page: Option<u32>,
    /// Customers per page, at most 100. Defaults to 3.
    #[param(minimum = 1, maximum = 100, example = 3)]
    pub size: Option<u32>,
}

impl TryFrom<PageQuery> for PageRequest {
    type Error = Error;

    fn try_from(query: PageQuery) -> Result<Self, Self::Error> {
        Self::new(
            query.page.unwrap_or(DEFAULT_PAGE),
            query.size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
        .map_err(Error::from)
    }
}

/// List every customer ordered by id.
#[utoipa::path(
    get,
    path = "/api/v1/customers",
    responses(
        (status = 200, description = "All customers", body = [CustomerSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["customers"],
    operation_id = "listCustomers"
)]
#[get("/customers")]
pub async fn list_customers(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Customer>>> {
    let customers = state.customers_query.list_customers().await?;
    Ok(web::Json(customers))
}

/// List one page of customers ordered by id.
#[utoipa::path(
    get,
    path = "/api/v1/customers/paginated",
    params(PageQuery),
    responses(
        (status = 200, description = "Customers on the requested page", body = [CustomerSchema]),
        (status = 400, description = "Page or size out of range", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["customers"],
    operation_id = "listCustomersPaginated"
)]
#[get("/customers/paginated")]
pub async fn list_customers_paginated(
    state: web::Data<HttpState>,
    query: web::Query<PageQuery>,
) -> ApiResult<web::Json<Vec<Customer>>> {
    let page = PageRequest::try_from(query.into_inner())?;
    let customers = state.customers_query.list_page(page).await?;
    Ok(web::Json(customers))
}

/// Fetch a single customer.
#[utoipa::path(
    get,
    path = "/api/v1/customers/{id}",
    params(("id" = i32, Path, description = "Customer identifier")),
    responses(
        (status = 200, description = "Customer", body = CustomerSchema),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "No such customer", body = ErrorSchema)
    ),
    tags = ["customers"],
    operation_id = "getCustomer"
)]
#[get("/customers/{id}")]
pub async fn get_customer(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<Customer>> {
    let id = CustomerId::new(path.into_inner());
    let customer = state.customers_query.get_customer(id).await?;
    Ok(web::Json(customer))
}

/// Validate and store a new customer.
///
/// Any `id` in the body is ignored; the store assigns one.
#[utoipa::path(
    post,
    path = "/api/v1/customers",
    request_body = CustomerInputSchema,
    responses(
        (status = 201, description = "Customer created", body = CustomerSchema),
        (status = 400, description = "Validation failed", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["customers"],
    operation_id = "createCustomer"
)]
#[post("/customers")]
pub async fn create_customer(
    state: web::Data<HttpState>,
    payload: web::Json<CustomerInput>,
) -> ApiResult<HttpResponse> {
    let customer = state
        .customers_command
        .create_customer(payload.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(customer))
}

/// Replace an existing customer.
///
/// A missing customer is reported as 404 before the body is validated.
#[utoipa::path(
    put,
    path = "/api/v1/customers/{id}",
    params(("id" = i32, Path, description = "Customer identifier")),
    request_body = CustomerInputSchema,
    responses(
        (status = 200, description = "Customer updated", body = CustomerSchema),
        (status = 400, description = "Validation failed", body = ErrorSchema),
        (status = 404, description = "No such customer", body = ErrorSchema)
    ),
    tags = ["customers"],
    operation_id = "updateCustomer"
)]
#[put("/customers/{id}")]
pub async fn update_customer(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<CustomerInput>,
) -> ApiResult<web::Json<Customer>> {
    let id = CustomerId::new(path.into_inner());
    let input = payload.into_inner();
    if input.id.is_some_and(|body_id| body_id != id.get()) {
        debug!(customer_id = %id, body_id = ?input.id, "body id ignored in favour of path id");
    }
    let customer = state.customers_command.update_customer(id, input).await?;
    Ok(web::Json(customer))
}

/// Remove a customer. Responds 200 with an empty body.
#[utoipa::path(
    delete,
    path = "/api/v1/customers/{id}",
    params(("id" = i32, Path, description = "Customer identifier")),
    responses(
        (status = 200, description = "Customer deleted"),
        (status = 404, description = "No such customer", body = ErrorSchema)
    ),
    tags = ["customers"],
    operation_id = "deleteCustomer"
)]
#[delete("/customers/{id}")]
pub async fn delete_customer(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let id = CustomerId::new(path.into_inner());
    state.customers_command.delete_customer(id).await?;
    Ok(HttpResponse::Ok().finish())
}

/// Register the customer handlers and their extractor error handlers.
///
/// `/customers/paginated` is registered ahead of `/customers/{id}` so the
/// literal segment is not parsed as an identifier.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use customer_service::inbound::http::customers;
///
/// let app = App::new().service(web::scope("/api/v1").configure(customers::configure));
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(super::error::json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(super::error::query_error_handler))
        .app_data(web::PathConfig::default().error_handler(super::error::path_error_handler))
        .service(list_customers)
        .service(list_customers_paginated)
        .service(get_customer)
        .service(create_customer)
        .service(update_customer)
        .service(delete_customer);
}

#[cfg(test)]
#[path = "customers_tests.rs"]
mod tests;
