//! Reading and writing the `document.cookie` string.
//!
//! Reading `document.cookie` yields `name=value` pairs joined by `; `. Writing it
//! takes one `Set-Cookie` style directive at a time. [`MemoryCookieJar`]
//! reproduces that contract off-browser, including eviction of cookies whose
//! `Expires` has passed.

use chrono::Utc;
use cookie::time::{ Duration, OffsetDateTime };
use cookie::{ Cookie, CookieJar };

/// Value of the first cookie called `name` in a raw cookie string.
pub fn cookie_value(raw: &str, name: &str) -> Option<String> {
    Cookie::split_parse(raw)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value().to_string())
}

/// Directive for a session cookie: no expiry, path or secure attributes.
pub fn session_cookie(name: &str, value: &str) -> String {
    Cookie::new(name, value).to_string()
}

/// Directive that overwrites `name` with an expiry at the Unix epoch.
pub fn expired_cookie(name: &str) -> String {
    Cookie::build((name, "")).expires(OffsetDateTime::UNIX_EPOCH).build().to_string()
}

/// In-memory stand-in for the browser cookie engine behind `document.cookie`.
/// One cookie per name; reads list them ordered by name.
#[derive(Debug, Default, Clone)]
pub struct MemoryCookieJar {
    jar: CookieJar,
}

impl MemoryCookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the jar from a string shaped like a `document.cookie` read.
    /// A repeated name keeps its last value.
    pub fn with_cookies(raw: &str) -> Self {
        let mut jar = CookieJar::new();
        for cookie in Cookie::split_parse(raw.to_string()).filter_map(Result::ok) {
            jar.add(cookie);
        }
        Self { jar }
    }

    pub fn cookie_string(&self) -> String {
        let mut pairs: Vec<_> = self.jar.iter().map(Cookie::name_value).collect();
        pairs.sort_by(|a, b| a.0.cmp(b.0));
        pairs
            .into_iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect::<Vec<_>>()
            .join("; ")
    }

    pub fn is_empty(&self) -> bool {
        self.jar.iter().next().is_none()
    }

    /// Applies one directive the way assigning to `document.cookie` does.
    /// `Max-Age` wins over `Expires`; an `Expires` that fails to parse is ignored.
    pub fn set_cookie(&mut self, directive: &str) {
        let cookie = match Cookie::parse(directive.to_string()) {
            Ok(cookie) => cookie,
            Err(e) => {
                log::warn!("Ignoring malformed cookie directive {:?}: {}", directive, e);
                return;
            }
        };

        let expired = match (cookie.max_age(), cookie.expires_datetime()) {
            (Some(max_age), _) => max_age <= Duration::ZERO,
            (None, Some(at)) => at.unix_timestamp() <= Utc::now().timestamp(),
            (None, None) => false,
        };

        if expired {
            self.jar.remove(cookie);
        } else {
            self.jar.add(cookie);
        }
    }
}
