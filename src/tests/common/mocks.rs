use crate::error::ThemeError;
use crate::utils::{ ClassTarget, CookieSource, PreferenceStore };

/// Cookie access refused, as with cookies disabled or a sandboxed frame.
pub struct BlockedCookies;

impl CookieSource for BlockedCookies {
    fn read_cookies(&self) -> Result<String, ThemeError> {
        Err(ThemeError::Cookie("SecurityError: cookies are disabled".to_string()))
    }

    fn write_cookie(&mut self, _directive: &str) -> Result<(), ThemeError> {
        Err(ThemeError::Cookie("SecurityError: cookies are disabled".to_string()))
    }
}

/// Reads succeed but writes are dropped.
pub struct ReadOnlyPreference {
    pub dark: bool,
}

impl PreferenceStore for ReadOnlyPreference {
    fn get_preference(&self) -> Result<bool, ThemeError> {
        Ok(self.dark)
    }

    fn set_preference(&mut self, _dark: bool) -> Result<(), ThemeError> {
        Ok(())
    }
}

/// A body that disappeared, counting how often it was touched.
#[derive(Default)]
pub struct DetachedBody {
    pub writes: usize,
}

impl ClassTarget for DetachedBody {
    fn has_class(&self, _class: &str) -> Result<bool, ThemeError> {
        Ok(false)
    }

    fn set_class(&mut self, _class: &str, _present: bool) -> Result<(), ThemeError> {
        self.writes += 1;
        Err(ThemeError::Unavailable("document has no body".to_string()))
    }
}
