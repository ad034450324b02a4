//! Browser sessions on top of `actix-session`.
//!
//! The [`SessionContext`] travels in a private (encrypted) cookie managed by
//! [`SessionMiddleware`]. Handlers read it through the [`BrowserSession`]
//! extractor and write it back with [`BrowserSession::save`].

use std::future::{ready, Ready};

use actix_session::storage::CookieSessionStore;
use actix_session::{Session, SessionExt, SessionMiddleware};
use actix_web::cookie::Key;
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use log::warn;
use rb_core::session::SessionContext;

use crate::error::ApiError;

pub const SESSION_COOKIE: &str = "rb_session";

const CONTEXT_KEY: &str = "context";

/// Session layer for the whole app. `secure` should be on whenever the site
/// is served over HTTPS.
pub fn session_middleware(key: Key, secure: bool) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name(SESSION_COOKIE.to_string())
        .cookie_secure(secure)
        .build()
}

/// The session attached to the current request.
///
/// A missing or unreadable cookie yields an anonymous context; nothing is
/// sent back until the handler calls [`save`](Self::save).
pub struct BrowserSession {
    session: Session,
    pub context: SessionContext,
}

impl BrowserSession {
    fn resolve(req: &HttpRequest) -> Self {
        let session = req.get_session();
        let context = match session.get::<SessionContext>(CONTEXT_KEY) {
            Ok(context) => context.unwrap_or_default(),
            Err(e) => {
                warn!("discarding unreadable session: {}", e);
                session.purge();
                SessionContext::new()
            }
        };
        Self { session, context }
    }

    /// Stores the context so the response carries the updated cookie.
    pub fn save(&self) -> Result<(), ApiError> {
        self.session.insert(CONTEXT_KEY, &self.context)?;
        Ok(())
    }
}

impl FromRequest for BrowserSession {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Ok(Self::resolve(req)))
    }
}
