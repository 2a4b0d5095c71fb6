//! Credentials for the Sankaku servers.
//!
//! The two server revisions authenticate differently and the schemes are never
//! combined: the API takes a bearer token header, the HTML frontend a session
//! cookie. Both are modeled as one tagged [`SankakuAuth`] value attached to the
//! extractor at construction.
use std::sync::Arc;

use skc_common::log::debug;
use skc_common::reqwest::cookie::Jar;
use skc_common::reqwest::{RequestBuilder, Url};

/// Name of the session cookie the chan frontend expects.
pub const SESSION_COOKIE_NAME: &str = "_sankakucomplex_session";

/// Session cookies are pinned for one year, matching the browser frontend.
pub const SESSION_COOKIE_MAX_AGE_SECS: u64 = 365 * 24 * 60 * 60;

/// The credential attached to every outgoing request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SankakuAuth {
    /// No credential; public endpoints only.
    #[default]
    Anonymous,
    /// API token, sent as an `Authorization: Bearer` header.
    Bearer(String),
    /// Session cookie (name, value) installed into the client's cookie jar.
    Session(String, String),
}

impl SankakuAuth {
    /// Session credential under the fixed site cookie name.
    pub fn session(id: &str) -> Self {
        Self::Session(SESSION_COOKIE_NAME.to_string(), id.to_string())
    }

    #[inline]
    #[must_use]
    pub const fn is_auth(&self) -> bool {
        !matches!(self, Self::Anonymous)
    }

    /// Attaches per-request credentials. Session cookies ride through the
    /// client's cookie jar instead, see [`SankakuAuth::register_cookie`].
    pub fn append_to(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Self::Bearer(token) => request.bearer_auth(token),
            _ => request,
        }
    }

    /// Installs the session cookie into `jar`, scoped to `base`, so it is sent
    /// with every request the client makes to that host.
    pub fn register_cookie(&self, jar: &Arc<Jar>, base: &Url) {
        if let Self::Session(name, value) = self {
            debug!("Using session cookie for {}", base);
            let cookie = format!("{name}={value}; Max-Age={SESSION_COOKIE_MAX_AGE_SECS}; Path=/");
            jar.add_cookie_str(&cookie, base);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_uses_the_site_cookie_name() {
        let auth = SankakuAuth::session("deadbeef");
        assert_eq!(
            auth,
            SankakuAuth::Session("_sankakucomplex_session".to_string(), "deadbeef".to_string())
        );
        assert!(auth.is_auth());
        assert!(!SankakuAuth::Anonymous.is_auth());
    }
}
