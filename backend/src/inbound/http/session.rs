//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! Provides a thin wrapper around Actix sessions so handlers only deal
//! with domain-friendly operations such as reading the counter or
//! persisting the cart. All state here is ephemeral: it lives in the
//! session cookie, is owned by exactly one session, and disappears
//! when the session ends.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;

use crate::domain::{DomainError, SubmittedForm};

pub(crate) const COUNTER_KEY: &str = "counter";
pub(crate) const CART_KEY: &str = "cart_items";
pub(crate) const FORM_KEY: &str = "form_data";

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Current counter value, defaulting to zero for fresh sessions.
    pub fn counter(&self) -> Result<i64, DomainError> {
        Ok(self.get(COUNTER_KEY)?.unwrap_or(0))
    }

    /// Persist a new counter value.
    pub fn set_counter(&self, value: i64) -> Result<(), DomainError> {
        self.insert(COUNTER_KEY, &value)
    }

    /// Current cart contents, in insertion order.
    pub fn cart_items(&self) -> Result<Vec<String>, DomainError> {
        Ok(self.get(CART_KEY)?.unwrap_or_default())
    }

    /// Persist the cart contents.
    pub fn set_cart_items(&self, items: &[String]) -> Result<(), DomainError> {
        self.insert(CART_KEY, &items)
    }

    /// The last submitted form, if any.
    pub fn form(&self) -> Result<Option<SubmittedForm>, DomainError> {
        self.get(FORM_KEY)
    }

    /// Persist a validated form submission.
    pub fn persist_form(&self, form: &SubmittedForm) -> Result<(), DomainError> {
        self.insert(FORM_KEY, form)
    }

    fn get<T: serde::de::DeserializeOwned>(&self, key: &str) -> Result<Option<T>, DomainError> {
        self.0
            .get::<T>(key)
            .map_err(|error| DomainError::internal(format!("failed to read session: {error}")))
    }

    fn insert<T: serde::Serialize>(&self, key: &str, value: &T) -> Result<(), DomainError> {
        self.0
            .insert(key, value)
            .map_err(|error| DomainError::internal(format!("failed to persist session: {error}")))
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test, web};
    use chrono::Utc;

    fn session_test_app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new().wrap(crate::inbound::http::test_utils::test_session_middleware())
    }

    #[actix_web::test]
    async fn counter_defaults_to_zero() {
        let app = test::init_service(session_test_app().route(
            "/counter",
            web::get().to(|session: SessionContext| async move {
                let value = session.counter()?;
                Ok::<_, DomainError>(HttpResponse::Ok().body(value.to_string()))
            }),
        ))
        .await;

        let res =
            test::call_service(&app, test::TestRequest::get().uri("/counter").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(test::read_body(res).await, "0");
    }

    #[actix_web::test]
    async fn cart_round_trips_through_the_cookie() {
        let app = test::init_service(
            session_test_app()
                .route(
                    "/fill",
                    web::get().to(|session: SessionContext| async move {
                        session.set_cart_items(&["apples".to_owned(), "pears".to_owned()])?;
                        Ok::<_, DomainError>(HttpResponse::Ok())
                    }),
                )
                .route(
                    "/read",
                    web::get().to(|session: SessionContext| async move {
                        let items = session.cart_items()?;
                        Ok::<_, DomainError>(HttpResponse::Ok().body(items.join(",")))
                    }),
                ),
        )
        .await;

        let fill_res =
            test::call_service(&app, test::TestRequest::get().uri("/fill").to_request()).await;
        assert_eq!(fill_res.status(), StatusCode::OK);
        let cookie = fill_res
            .response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .expect("session cookie set");

        let read_res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/read")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(read_res.status(), StatusCode::OK);
        assert_eq!(test::read_body(read_res).await, "apples,pears");
    }

    #[actix_web::test]
    async fn form_is_absent_until_persisted() {
        let app = test::init_service(
            session_test_app()
                .route(
                    "/form",
                    web::get().to(|session: SessionContext| async move {
                        let present = session.form()?.is_some();
                        Ok::<_, DomainError>(HttpResponse::Ok().body(present.to_string()))
                    }),
                )
                .route(
                    "/save",
                    web::get().to(|session: SessionContext| async move {
                        let form =
                            SubmittedForm::try_from_parts("Ada", "ada@example.com", Utc::now())
                                .map_err(|err| DomainError::invalid_request(err.to_string()))?;
                        session.persist_form(&form)?;
                        Ok::<_, DomainError>(HttpResponse::Ok())
                    }),
                ),
        )
        .await;

        let res =
            test::call_service(&app, test::TestRequest::get().uri("/form").to_request()).await;
        assert_eq!(test::read_body(res).await, "false");

        let save_res =
            test::call_service(&app, test::TestRequest::get().uri("/save").to_request()).await;
        let cookie = save_res
            .response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .expect("session cookie set");

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/form")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(test::read_body(res).await, "true");
    }
}
