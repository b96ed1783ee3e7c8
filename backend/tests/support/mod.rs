//! Shared helpers for integration tests.
//!
//! Builds an application wired like production: `Trace` on every route,
//! cookie sessions scoped to `/api/v1`, and the memoized dataset behind
//! `HttpState`. Swagger UI is left out because these tests exercise the
//! API surface only.

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use backend::Trace;
use backend::inbound::http::dashboard::{by_category, by_date, by_region, records, summary};
use backend::inbound::http::files::{
    download_sales_csv, download_sample_text, download_users_json, upload,
};
use backend::inbound::http::health::health;
use backend::inbound::http::items::{create_item, get_item, update_item};
use backend::inbound::http::session_state::{
    add_cart_item, clear_cart, decrement_counter, get_cart, get_counter, get_form,
    increment_counter, remove_cart_item_at, submit_form,
};
use backend::inbound::http::state::HttpState;
use backend::inbound::http::users::list_users;
use mock_data::Dataset;

pub fn full_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let dataset = Dataset::get();
    let state = HttpState::new(dataset.sales.clone(), dataset.users.clone());

    let session = SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build();

    let api = web::scope("/api/v1")
        .wrap(session)
        .service(summary)
        .service(by_date)
        .service(by_category)
        .service(by_region)
        .service(records)
        .service(list_users)
        .service(get_counter)
        .service(increment_counter)
        .service(decrement_counter)
        .service(get_cart)
        .service(add_cart_item)
        .service(remove_cart_item_at)
        .service(clear_cart)
        .service(get_form)
        .service(submit_form)
        .service(download_sales_csv)
        .service(download_users_json)
        .service(download_sample_text)
        .service(upload);

    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .service(api)
        .service(health)
        .service(get_item)
        .service(create_item)
        .service(update_item)
}
