//! Test helpers for inbound HTTP components.

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::{HttpResponse, web};

use crate::domain::{DomainError, Identity};
use crate::inbound::http::session::SessionContext;

/// Path of the sign-in route added by [`sign_in_route`].
pub const SIGN_IN_PATH: &str = "/test/sign-in";

/// Build a session middleware configured for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Sets the cookie name to `session` and disables the `Secure` flag for
///   local HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Route that stores the posted [`Identity`] in the session cookie.
pub fn sign_in_route() -> actix_web::Route {
    web::post().to(
        |session: SessionContext, identity: web::Json<Identity>| async move {
            session.persist_identity(&identity)?;
            Ok::<_, DomainError>(HttpResponse::NoContent().finish())
        },
    )
}
