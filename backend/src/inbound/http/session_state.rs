//! Session-state handlers: counter, cart, and form.
//!
//! All state lives in the cookie session and is owned by exactly one
//! session; two browsers never observe each other's counter or cart.

use actix_web::{delete, get, post, put, web};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{
    CartValidationError, DomainError, FormValidationError, SubmittedForm, remove_cart_item,
    validate_cart_item,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;

/// Counter value payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CounterResponse {
    pub value: i64,
}

/// Cart contents payload, in insertion order.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CartResponse {
    pub items: Vec<String>,
}

/// Body for appending a cart item.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CartItemPayload {
    pub item: String,
}

/// Body for submitting the form.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FormPayload {
    pub name: String,
    pub email: String,
}

fn form_error(error: FormValidationError) -> DomainError {
    let (field, code) = match error {
        FormValidationError::EmptyName => ("name", "missing_field"),
        FormValidationError::EmptyEmail => ("email", "missing_field"),
        FormValidationError::InvalidEmail => ("email", "invalid_email"),
    };
    DomainError::invalid_request(error.to_string())
        .with_details(json!({ "field": field, "code": code }))
}

fn cart_error(error: CartValidationError) -> DomainError {
    let (field, code) = match error {
        CartValidationError::EmptyItem => ("item", "missing_field"),
        CartValidationError::IndexOutOfRange { .. } => ("index", "out_of_range"),
    };
    DomainError::invalid_request(error.to_string())
        .with_details(json!({ "field": field, "code": code }))
}

/// Current counter value; zero for a fresh session.
#[utoipa::path(
    get,
    path = "/api/v1/session/counter",
    responses((status = 200, description = "Current counter", body = CounterResponse)),
    tags = ["session"],
    operation_id = "getCounter"
)]
#[get("/session/counter")]
pub async fn get_counter(session: SessionContext) -> ApiResult<web::Json<CounterResponse>> {
    Ok(web::Json(CounterResponse {
        value: session.counter()?,
    }))
}

/// Increment the counter and return the new value.
#[utoipa::path(
    post,
    path = "/api/v1/session/counter/increment",
    responses((status = 200, description = "Updated counter", body = CounterResponse)),
    tags = ["session"],
    operation_id = "incrementCounter"
)]
#[post("/session/counter/increment")]
pub async fn increment_counter(session: SessionContext) -> ApiResult<web::Json<CounterResponse>> {
    let value = session.counter()?.saturating_add(1);
    session.set_counter(value)?;
    Ok(web::Json(CounterResponse { value }))
}

/// Decrement the counter and return the new value.
#[utoipa::path(
    post,
    path = "/api/v1/session/counter/decrement",
    responses((status = 200, description = "Updated counter", body = CounterResponse)),
    tags = ["session"],
    operation_id = "decrementCounter"
)]
#[post("/session/counter/decrement")]
pub async fn decrement_counter(session: SessionContext) -> ApiResult<web::Json<CounterResponse>> {
    let value = session.counter()?.saturating_sub(1);
    session.set_counter(value)?;
    Ok(web::Json(CounterResponse { value }))
}

/// Current cart contents.
#[utoipa::path(
    get,
    path = "/api/v1/session/cart",
    responses((status = 200, description = "Cart contents", body = CartResponse)),
    tags = ["session"],
    operation_id = "getCart"
)]
#[get("/session/cart")]
pub async fn get_cart(session: SessionContext) -> ApiResult<web::Json<CartResponse>> {
    Ok(web::Json(CartResponse {
        items: session.cart_items()?,
    }))
}

/// Append a non-blank item to the cart.
#[utoipa::path(
    post,
    path = "/api/v1/session/cart",
    request_body = CartItemPayload,
    responses(
        (status = 200, description = "Updated cart", body = CartResponse),
        (status = 400, description = "Blank item")
    ),
    tags = ["session"],
    operation_id = "addCartItem"
)]
#[post("/session/cart")]
pub async fn add_cart_item(
    session: SessionContext,
    payload: web::Json<CartItemPayload>,
) -> ApiResult<web::Json<CartResponse>> {
    let item = validate_cart_item(&payload.item).map_err(cart_error)?;
    let mut items = session.cart_items()?;
    items.push(item);
    session.set_cart_items(&items)?;
    Ok(web::Json(CartResponse { items }))
}

/// Remove the cart item at the given zero-based index.
#[utoipa::path(
    delete,
    path = "/api/v1/session/cart/{index}",
    params(("index" = usize, Path, description = "Zero-based cart index")),
    responses(
        (status = 200, description = "Updated cart", body = CartResponse),
        (status = 400, description = "Index out of range")
    ),
    tags = ["session"],
    operation_id = "removeCartItem"
)]
#[delete("/session/cart/{index}")]
pub async fn remove_cart_item_at(
    session: SessionContext,
    index: web::Path<usize>,
) -> ApiResult<web::Json<CartResponse>> {
    let mut items = session.cart_items()?;
    remove_cart_item(&mut items, index.into_inner()).map_err(cart_error)?;
    session.set_cart_items(&items)?;
    Ok(web::Json(CartResponse { items }))
}

/// Empty the cart.
#[utoipa::path(
    delete,
    path = "/api/v1/session/cart",
    responses((status = 200, description = "Emptied cart", body = CartResponse)),
    tags = ["session"],
    operation_id = "clearCart"
)]
#[delete("/session/cart")]
pub async fn clear_cart(session: SessionContext) -> ApiResult<web::Json<CartResponse>> {
    let items = Vec::new();
    session.set_cart_items(&items)?;
    Ok(web::Json(CartResponse { items }))
}

/// The form submitted in this session, or 404 if none was.
#[utoipa::path(
    get,
    path = "/api/v1/session/form",
    responses(
        (status = 200, description = "Saved form", body = Object),
        (status = 404, description = "No form submitted yet")
    ),
    tags = ["session"],
    operation_id = "getForm"
)]
#[get("/session/form")]
pub async fn get_form(session: SessionContext) -> ApiResult<web::Json<SubmittedForm>> {
    let form = session
        .form()?
        .ok_or_else(|| DomainError::not_found("no form submitted in this session"))?;
    Ok(web::Json(form))
}

/// Validate and store a form submission, stamping the current time.
#[utoipa::path(
    put,
    path = "/api/v1/session/form",
    request_body = FormPayload,
    responses(
        (status = 200, description = "Stored form", body = Object),
        (status = 400, description = "Invalid name or email")
    ),
    tags = ["session"],
    operation_id = "submitForm"
)]
#[put("/session/form")]
pub async fn submit_form(
    session: SessionContext,
    payload: web::Json<FormPayload>,
) -> ApiResult<web::Json<SubmittedForm>> {
    let form = SubmittedForm::try_from_parts(&payload.name, &payload.email, Utc::now())
        .map_err(form_error)?;
    session.persist_form(&form)?;
    Ok(web::Json(form))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::cookie::Cookie;
    use actix_web::dev::ServiceResponse;
    use actix_web::{App, http::StatusCode, test as actix_test};
    use serde_json::Value;

    use crate::inbound::http::test_utils::test_session_middleware;

    fn test_app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .wrap(test_session_middleware())
            .service(get_counter)
            .service(increment_counter)
            .service(decrement_counter)
            .service(get_cart)
            .service(add_cart_item)
            .service(remove_cart_item_at)
            .service(clear_cart)
            .service(get_form)
            .service(submit_form)
    }

    fn session_cookie(res: &ServiceResponse) -> Option<Cookie<'static>> {
        res.response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .map(Cookie::into_owned)
    }

    #[actix_web::test]
    async fn counter_survives_the_cookie_round_trip() {
        let app = actix_test::init_service(test_app()).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/session/counter/increment")
                .to_request(),
        )
        .await;
        assert!(res.status().is_success());
        let cookie = session_cookie(&res).expect("session cookie set");
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body.get("value").and_then(Value::as_i64), Some(1));

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/session/counter/decrement")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body.get("value").and_then(Value::as_i64), Some(0));
    }

    #[actix_web::test]
    async fn counter_defaults_to_zero_without_a_cookie() {
        let app = actix_test::init_service(test_app()).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/session/counter")
                .to_request(),
        )
        .await;
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body.get("value").and_then(Value::as_i64), Some(0));
    }

    #[actix_web::test]
    async fn cart_preserves_add_and_remove_order() {
        let app = actix_test::init_service(test_app()).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/session/cart")
                .set_json(serde_json::json!({ "item": "apples" }))
                .to_request(),
        )
        .await;
        let cookie = session_cookie(&res).expect("session cookie set");

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/session/cart")
                .cookie(cookie)
                .set_json(serde_json::json!({ "item": "pears" }))
                .to_request(),
        )
        .await;
        let cookie = session_cookie(&res).expect("session cookie set");

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete()
                .uri("/session/cart/0")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert!(res.status().is_success());
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body, serde_json::json!({ "items": ["pears"] }));
    }

    #[actix_web::test]
    async fn out_of_range_removal_leaves_the_cart_untouched() {
        let app = actix_test::init_service(test_app()).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/session/cart")
                .set_json(serde_json::json!({ "item": "apples" }))
                .to_request(),
        )
        .await;
        let cookie = session_cookie(&res).expect("session cookie set");

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete()
                .uri("/session/cart/7")
                .cookie(cookie.clone())
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/session/cart")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body, serde_json::json!({ "items": ["apples"] }));
    }

    #[actix_web::test]
    async fn blank_cart_items_are_rejected() {
        let app = actix_test::init_service(test_app()).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/session/cart")
                .set_json(serde_json::json!({ "item": "   " }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn clearing_the_cart_empties_it() {
        let app = actix_test::init_service(test_app()).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/session/cart")
                .set_json(serde_json::json!({ "item": "apples" }))
                .to_request(),
        )
        .await;
        let cookie = session_cookie(&res).expect("session cookie set");

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete()
                .uri("/session/cart")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body, serde_json::json!({ "items": [] }));
    }

    #[actix_web::test]
    async fn form_is_404_until_submitted() {
        let app = actix_test::init_service(test_app()).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/session/form")
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::put()
                .uri("/session/form")
                .set_json(serde_json::json!({ "name": "Ada", "email": "ada@example.com" }))
                .to_request(),
        )
        .await;
        assert!(res.status().is_success());
        let cookie = session_cookie(&res).expect("session cookie set");

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/session/form")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert!(res.status().is_success());
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body.get("name").and_then(Value::as_str), Some("Ada"));
        assert!(body.get("submittedAt").is_some());
    }

    #[actix_web::test]
    async fn invalid_emails_are_rejected_with_field_details() {
        let app = actix_test::init_service(test_app()).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::put()
                .uri("/session/form")
                .set_json(serde_json::json!({ "name": "Ada", "email": "not-an-email" }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(
            body.pointer("/details/field").and_then(Value::as_str),
            Some("email")
        );
    }
}
