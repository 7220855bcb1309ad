//! End-to-end customer flows through the HTTP adapter.
//!
//! These tests wire the real customer service, request validator, and
//! in-memory repository behind the Actix handlers, so status codes and
//! payloads are observed exactly as clients see them.

use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use customer_service::Trace;
use customer_service::domain::{
    CustomerService, NamePolicy, RequestValidator, TRACE_ID_HEADER, ValidationConfig,
};
use customer_service::inbound::http::customers;
use customer_service::inbound::http::state::HttpState;
use customer_service::outbound::persistence::InMemoryCustomerRepository;

#[fixture]
fn validation() -> ValidationConfig {
    ValidationConfig::default()
}

async fn app_with(
    config: ValidationConfig,
    seeded: bool,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    let repository = if seeded {
        InMemoryCustomerRepository::with_demo_customers()
    } else {
        InMemoryCustomerRepository::new()
    };
    let validator = RequestValidator::new(&config).expect("validator builds");
    let service = Arc::new(CustomerService::new(Arc::new(repository), Arc::new(validator)));
    let state = HttpState::new(service.clone(), service);
    actix_test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .wrap(Trace)
            .service(web::scope("/api/v1").configure(customers::configure)),
    )
    .await
}

async fn call(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
    request: actix_test::TestRequest,
) -> (StatusCode, Value) {
    let response = actix_test::call_service(app, request.to_request()).await;
    let status = response.status();
    let bytes = actix_test::read_body(response).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("JSON body")
    };
    (status, body)
}

fn post(body: Value) -> actix_test::TestRequest {
    actix_test::TestRequest::post()
        .uri("/api/v1/customers")
        .set_json(body)
}

#[rstest]
#[case(json!({ "name": "abc", "email": "abc@gmail.com" }), "restricted_email_domain", "email domain gmail.com is not allowed")]
#[case(json!({ "name": "", "email": "x@y.com" }), "missing_name", "name is required")]
#[case(json!({ "name": "abc", "email": "abc" }), "invalid_email_format", "invalid email format")]
#[case(json!({ "name": "abc1", "email": "abc@y.com" }), "invalid_name_format", "name contains characters that are not allowed")]
#[case(json!({ "email": "abc@y.com" }), "missing_name", "name is required")]
#[case(json!({ "name": "abc" }), "missing_email", "email is required")]
#[actix_web::test]
async fn create_rejects_invalid_customers(
    validation: ValidationConfig,
    #[case] body: Value,
    #[case] code: &str,
    #[case] message: &str,
) {
    let app = app_with(validation, false).await;

    let (status, error) = call(&app, post(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "invalid_request");
    assert_eq!(error["message"], message);
    assert_eq!(error["details"]["code"], code);
    assert!(error["traceId"].is_string());

    let (_, all) = call(&app, actix_test::TestRequest::get().uri("/api/v1/customers")).await;
    assert_eq!(all, json!([]), "nothing is stored after a rejection");
}

#[rstest]
#[actix_web::test]
async fn create_stores_valid_customers(validation: ValidationConfig) {
    let app = app_with(validation, false).await;

    let (status, created) = call(
        &app,
        post(json!({ "id": 99, "name": "abc", "email": "abc@company.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created, json!({ "id": 1, "name": "abc", "email": "abc@company.com" }));

    let (status, fetched) =
        call(&app, actix_test::TestRequest::get().uri("/api/v1/customers/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[rstest]
#[actix_web::test]
async fn first_failing_check_is_reported(validation: ValidationConfig) {
    let app = app_with(validation, false).await;

    let (_, error) = call(&app, post(json!({ "name": "abc1", "email": "abc" }))).await;

    assert_eq!(error["details"]["code"], "invalid_name_format");
}

#[rstest]
#[actix_web::test]
async fn blocked_domains_ignore_case(validation: ValidationConfig) {
    let app = app_with(validation, false).await;

    let (status, error) = call(&app, post(json!({ "name": "abc", "email": "Abc@GMAIL.com" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["details"]["domain"], "gmail.com");
}

#[rstest]
#[actix_web::test]
async fn punctuation_policy_accepts_compound_names() {
    let config = ValidationConfig::new(
        NamePolicy::letters_with_default_punctuation(),
        ["gmail.com"],
    );
    let app = app_with(config, false).await;

    let (status, created) = call(
        &app,
        post(json!({ "name": "Mary-Jane O'Neil", "email": "mj@company.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Mary-Jane O'Neil");
}

#[rstest]
#[actix_web::test]
async fn seeded_store_lists_and_pages(validation: ValidationConfig) {
    let app = app_with(validation, true).await;

    let (status, all) = call(&app, actix_test::TestRequest::get().uri("/api/v1/customers")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().map(Vec::len), Some(10));
    assert_eq!(all[0], json!({ "id": 1, "name": "sam", "email": "sam@gmail.com" }));

    let (status, page) = call(
        &app,
        actix_test::TestRequest::get().uri("/api/v1/customers/paginated?page=3&size=2"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        page,
        json!([
            { "id": 5, "name": "sophia", "email": "sophia@example.com" },
            { "id": 6, "name": "liam", "email": "liam@example.com" },
        ])
    );

    let (_, defaults) = call(
        &app,
        actix_test::TestRequest::get().uri("/api/v1/customers/paginated"),
    )
    .await;
    assert_eq!(defaults.as_array().map(Vec::len), Some(3));
}

#[rstest]
#[case("/api/v1/customers/paginated?page=0&size=3")]
#[case("/api/v1/customers/paginated?page=1&size=1000")]
#[actix_web::test]
async fn pagination_rejects_out_of_range(validation: ValidationConfig, #[case] uri: &str) {
    let app = app_with(validation, true).await;

    let (status, error) = call(&app, actix_test::TestRequest::get().uri(uri)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["details"]["code"], "out_of_range");
}

#[rstest]
#[actix_web::test]
async fn update_replaces_fields_under_the_path_id(validation: ValidationConfig) {
    let app = app_with(validation, true).await;

    let (status, updated) = call(
        &app,
        actix_test::TestRequest::put()
            .uri("/api/v1/customers/2")
            .set_json(json!({ "id": 7, "name": "noel", "email": "noel@company.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated, json!({ "id": 2, "name": "noel", "email": "noel@company.com" }));

    let (_, seventh) = call(&app, actix_test::TestRequest::get().uri("/api/v1/customers/7")).await;
    assert_eq!(seventh["name"], "olivia");
}

#[rstest]
#[actix_web::test]
async fn update_of_missing_customer_is_not_found_even_when_invalid(
    validation: ValidationConfig,
) {
    let app = app_with(validation, true).await;

    let (status, error) = call(
        &app,
        actix_test::TestRequest::put()
            .uri("/api/v1/customers/15")
            .set_json(json!({ "name": "", "email": "bad" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["message"], "customer [id=15] is not found");
}

#[rstest]
#[actix_web::test]
async fn update_of_existing_customer_validates_the_body(validation: ValidationConfig) {
    let app = app_with(validation, true).await;

    let (status, error) = call(
        &app,
        actix_test::TestRequest::put()
            .uri("/api/v1/customers/1")
            .set_json(json!({ "name": "sam", "email": "sam@gmail.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["details"]["code"], "restricted_email_domain");
}

#[rstest]
#[actix_web::test]
async fn delete_then_lookup_is_not_found(validation: ValidationConfig) {
    let app = app_with(validation, true).await;

    let (status, body) =
        call(&app, actix_test::TestRequest::delete().uri("/api/v1/customers/4")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);

    let (status, _) = call(&app, actix_test::TestRequest::get().uri("/api/v1/customers/4")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call(
        &app,
        actix_test::TestRequest::put()
            .uri("/api/v1/customers/4")
            .set_json(json!({ "name": "zed", "email": "z@acme.io" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, all) = call(&app, actix_test::TestRequest::get().uri("/api/v1/customers")).await;
    assert_eq!(all.as_array().map(Vec::len), Some(9), "update must not recreate the row");

    let (status, error) =
        call(&app, actix_test::TestRequest::delete().uri("/api/v1/customers/4")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "not_found");
}

#[rstest]
#[actix_web::test]
async fn error_trace_id_matches_header(validation: ValidationConfig) {
    let app = app_with(validation, false).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/customers/15")
            .to_request(),
    )
    .await;
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .expect("trace-id header");
    let body: Value = actix_test::read_body_json(response).await;

    assert_eq!(body["traceId"], header);
}
