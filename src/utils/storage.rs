use crate::configs::ThemeConfig;
use crate::error::ThemeError;
use super::cookie::{ cookie_value, expired_cookie, session_cookie, MemoryCookieJar };

const ENABLED_VALUE: &str = "true";

/// Raw read/write access to a cookie string, as `document.cookie` exposes it.
pub trait CookieSource {
    fn read_cookies(&self) -> Result<String, ThemeError>;
    fn write_cookie(&mut self, directive: &str) -> Result<(), ThemeError>;
}

impl CookieSource for MemoryCookieJar {
    fn read_cookies(&self) -> Result<String, ThemeError> {
        Ok(self.cookie_string())
    }

    fn write_cookie(&mut self, directive: &str) -> Result<(), ThemeError> {
        self.set_cookie(directive);
        Ok(())
    }
}

/// Where the "dark enabled" flag lives between page loads.
pub trait PreferenceStore {
    fn get_preference(&self) -> Result<bool, ThemeError>;
    fn set_preference(&mut self, dark: bool) -> Result<(), ThemeError>;
}

/// Keeps the flag as a session cookie; clearing it expires the cookie.
#[derive(Debug, Clone)]
pub struct CookiePreference<C> {
    source: C,
    cookie_name: String,
}

impl<C: CookieSource> CookiePreference<C> {
    pub fn new(source: C, cookie_name: impl Into<String>) -> Self {
        Self {
            source,
            cookie_name: cookie_name.into(),
        }
    }

    pub fn from_config(source: C, config: &ThemeConfig) -> Self {
        Self::new(source, config.cookie_name.clone())
    }

    pub fn source(&self) -> &C {
        &self.source
    }
}

impl<C: CookieSource> PreferenceStore for CookiePreference<C> {
    fn get_preference(&self) -> Result<bool, ThemeError> {
        let raw = self.source.read_cookies()?;
        // an empty leftover from a failed eviction still reads as off
        let enabled = matches!(
            cookie_value(&raw, &self.cookie_name).as_deref(),
            Some(value) if !value.is_empty() && value != "false"
        );
        log::debug!("Cookie {:?} read as dark={}", self.cookie_name, enabled);
        Ok(enabled)
    }

    fn set_preference(&mut self, dark: bool) -> Result<(), ThemeError> {
        let directive = if dark {
            session_cookie(&self.cookie_name, ENABLED_VALUE)
        } else {
            expired_cookie(&self.cookie_name)
        };
        log::debug!("Writing cookie directive: {}", directive);
        self.source.write_cookie(&directive)
    }
}
