//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use customer_service::Trace;
#[cfg(debug_assertions)]
use customer_service::doc::ApiDoc;
use customer_service::domain::ports::CustomerRepository;
use customer_service::domain::{CustomerService, RequestValidator};
use customer_service::inbound::http::customers;
use customer_service::inbound::http::health::{HealthState, live, ready};
use customer_service::inbound::http::state::HttpState;
use customer_service::outbound::persistence::InMemoryCustomerRepository;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Build the customer ports from configuration.
///
/// # Errors
/// Returns [`std::io::Error`] when the name policy pattern fails to compile.
fn build_http_state(config: &ServerConfig) -> std::io::Result<HttpState> {
    let validator = RequestValidator::new(&config.validation)
        .map_err(|err| std::io::Error::other(format!("request validator: {err}")))?;
    info!(checks = ?validator.labels().collect::<Vec<_>>(), "request validator ready");

    let repository: Arc<dyn CustomerRepository> = if config.seed_demo_data {
        info!("seeding demo customers");
        Arc::new(InMemoryCustomerRepository::with_demo_customers())
    } else {
        Arc::new(InMemoryCustomerRepository::new())
    };
    let service = Arc::new(CustomerService::new(repository, Arc::new(validator)));
    Ok(HttpState::new(service.clone(), service))
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api/v1").configure(customers::configure);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when the validator cannot be built or the
/// socket cannot be bound.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(build_http_state(&config)?);

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .disable_signals()
    .bind(config.bind_addr)?
    .run();

    info!(bind_addr = %config.bind_addr, "customer service listening");
    health_state.mark_ready();
    Ok(server)
}

/// Fail liveness probes, then stop `server` once in-flight requests finish.
pub async fn drain(server: ServerHandle, health_state: web::Data<HealthState>) {
    health_state.mark_draining();
    info!("customer service draining");
    server.stop(true).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use customer_service::domain::ValidationConfig;
    use rstest::rstest;

    fn config(seed: bool) -> ServerConfig {
        ServerConfig::new(
            "127.0.0.1:0".parse().expect("valid addr"),
            ValidationConfig::default(),
        )
        .with_demo_data(seed)
    }

    #[rstest]
    #[actix_web::test]
    async fn app_serves_customers_and_probes() {
        let health = web::Data::new(HealthState::new());
        health.mark_ready();
        let state = web::Data::new(build_http_state(&config(true)).expect("state builds"));
        let app = actix_test::init_service(build_app(health, state)).await;

        for uri in ["/api/v1/customers", "/health/ready", "/health/live"] {
            let res =
                actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
                    .await;
            assert_eq!(res.status(), StatusCode::OK, "{uri}");
            assert!(res.headers().contains_key("trace-id"), "{uri}");
        }
    }

    #[rstest]
    #[actix_web::test]
    async fn drain_fails_liveness_and_stops_the_server() {
        let health = web::Data::new(HealthState::new());
        let server = create_server(health.clone(), config(false)).expect("ephemeral port binds");
        assert!(health.is_ready());
        let handle = server.handle();
        let running = actix_web::rt::spawn(server);

        drain(handle, health.clone()).await;

        assert!(!health.is_alive());
        running
            .await
            .expect("server task joins")
            .expect("server stops cleanly");
    }

    #[rstest]
    #[actix_web::test]
    async fn demo_seed_is_opt_in() {
        let health = web::Data::new(HealthState::new());
        let state = web::Data::new(build_http_state(&config(false)).expect("state builds"));
        let app = actix_test::init_service(build_app(health, state)).await;

        let body: serde_json::Value = actix_test::call_and_read_body_json(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/customers")
                .to_request(),
        )
        .await;
        assert_eq!(body, serde_json::json!([]));
    }
}
