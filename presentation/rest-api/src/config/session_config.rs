use std::{env, time::Duration};

use poem::session::{CookieConfig, MemoryStorage, ServerSession};

use super::error::{ConfigError, parse_or};

const TWO_WEEKS_SECS: u64 = 60 * 60 * 24 * 14;

/// Visitor session settings
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Session key the cart is stored under
    pub cart_key: String,
    pub cookie_name: String,
    pub cookie_secure: bool,
    pub max_age: Duration,
}

impl SessionConfig {
    /// Load session configuration from environment variables
    ///
    /// Environment variables:
    /// - CART_SESSION_ID: session key holding the cart (default: "cart")
    /// - SESSION_COOKIE_NAME: cookie carrying the session id (default: "storefront_session")
    /// - SESSION_COOKIE_SECURE: only send the cookie over HTTPS (default: false)
    /// - SESSION_MAX_AGE_SECS: session lifetime in seconds (default: two weeks)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let cart_key = lookup("CART_SESSION_ID").unwrap_or_else(|| "cart".to_string());
        if cart_key.trim().is_empty() {
            return Err(ConfigError::InvalidVariable("CART_SESSION_ID"));
        }

        let cookie_name =
            lookup("SESSION_COOKIE_NAME").unwrap_or_else(|| "storefront_session".to_string());
        let cookie_secure = parse_or(&lookup, "SESSION_COOKIE_SECURE", false)?;
        let max_age_secs = parse_or(&lookup, "SESSION_MAX_AGE_SECS", TWO_WEEKS_SECS)?;

        Ok(Self {
            cart_key,
            cookie_name,
            cookie_secure,
            max_age: Duration::from_secs(max_age_secs),
        })
    }

    /// Server-side session middleware keeping session data in process memory
    pub fn middleware(&self) -> ServerSession<MemoryStorage> {
        let cookie = CookieConfig::new()
            .name(self.cookie_name.clone())
            .path("/")
            .http_only(true)
            .secure(self.cookie_secure)
            .max_age(self.max_age);

        ServerSession::new(cookie, MemoryStorage::new())
    }
}
