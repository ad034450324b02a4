//! Runtime settings.
//!
//! Defaults first, then `RUSTY_BLOG_*` environment variables (a `.env` file
//! is loaded into the environment beforehand by `main`).

use actix_web::cookie::Key;
use config::{Config, ConfigError, Environment};
use log::warn;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    /// Directory served under `/static`
    pub static_dir: String,
    /// Session cookie key material, at least 64 bytes
    pub session_secret: Option<SecretString>,
    pub secure_cookies: bool,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_source(Environment::with_prefix("RUSTY_BLOG"))
    }

    fn from_source(env: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("host", "127.0.0.1")?
            .set_default("port", 3000)?
            .set_default("static_dir", "./public")?
            .set_default("secure_cookies", false)?
            .add_source(env)
            .build()?
            .try_deserialize()
    }

    pub fn bind_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }

    /// Key for signing and encrypting the session cookie.
    pub fn session_key(&self) -> Result<Key, ConfigError> {
        match &self.session_secret {
            Some(secret) => Key::try_from(secret.expose_secret().as_bytes())
                .map_err(|e| ConfigError::Message(format!("session_secret: {}", e))),
            None => {
                warn!("RUSTY_BLOG_SESSION_SECRET not set; sessions will not survive a restart");
                Ok(Key::generate())
            }
        }
    }
}
