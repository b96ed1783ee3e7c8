//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use actix_session::{
    SessionMiddleware,
    config::{CookieContentSecurity, PersistentSession},
    storage::CookieSessionStore,
};
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use backend::Trace;
#[cfg(debug_assertions)]
use backend::doc::ApiDoc;
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
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct AppDependencies {
    http_state: web::Data<HttpState>,
    key: Key,
    cookie_secure: bool,
    same_site: SameSite,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        http_state,
        key,
        cookie_secure,
        same_site,
    } = deps;

    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(same_site)
        .session_lifecycle(
            PersistentSession::default().session_ttl(actix_web::cookie::time::Duration::hours(2)),
        )
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

    let app = App::new()
        .app_data(http_state)
        .wrap(Trace)
        .service(api)
        .service(health)
        .service(get_item)
        .service(create_item)
        .service(update_item);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server over the memoized dataset.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let http_state = web::Data::new(HttpState::from_default_dataset());
    let ServerConfig {
        key,
        cookie_secure,
        same_site,
        bind_addr,
    } = config;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            http_state: http_state.clone(),
            key: key.clone(),
            cookie_secure,
            same_site,
        })
    })
    .bind(bind_addr)?
    .run();

    Ok(server)
}
