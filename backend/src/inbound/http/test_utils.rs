//! Test glue for handlers that touch the cookie session.

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;

/// Session middleware for handler tests.
///
/// Uses the production cookie name so counter, cart, and form state
/// round-trip exactly as they would behind the real server wiring,
/// but generates a throwaway key per app and drops the `Secure` flag
/// because the test harness speaks plain HTTP.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_path("/".to_owned())
        .cookie_secure(false)
        .build()
}
