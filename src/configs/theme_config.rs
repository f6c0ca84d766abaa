use lazy_static::lazy_static;
use regex::Regex;
use serde::{ Deserialize, Serialize };
use crate::error::ThemeError;

lazy_static! {
    // RFC 6265 cookie-name token
    static ref COOKIE_NAME: Regex = Regex::new(r"^[!#$%&'*+\-.^_`|~0-9A-Za-z]+$").unwrap();
}

pub const DEFAULT_COOKIE_NAME: &str = "dark";
pub const DEFAULT_DARK_CLASS: &str = "dark";

/// Names the cookie that stores the preference and the class put on `<body>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub cookie_name: String,
    pub dark_class: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            dark_class: DEFAULT_DARK_CLASS.to_string(),
        }
    }
}

impl ThemeConfig {
    /// Reads `THEME_COOKIE_NAME` and `THEME_DARK_CLASS`, falling back to `dark`.
    pub fn from_env() -> Result<Self, ThemeError> {
        let config = Self {
            cookie_name: env_or_default("THEME_COOKIE_NAME", DEFAULT_COOKIE_NAME),
            dark_class: env_or_default("THEME_DARK_CLASS", DEFAULT_DARK_CLASS),
        };
        config.validate()?;
        Ok(config)
    }

    /// Reads the JSON a page embeds in its config `<meta content>`. No meta
    /// means the defaults.
    pub fn from_page_meta(content: Option<&str>) -> Result<Self, ThemeError> {
        match content {
            Some(json) => Self::from_json(json),
            None => Ok(Self::default()),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ThemeError> {
        if self.cookie_name.is_empty() {
            return Err(ThemeError::InvalidConfig("cookie name is empty".to_string()));
        }
        if !COOKIE_NAME.is_match(&self.cookie_name) {
            return Err(
                ThemeError::InvalidConfig(
                    format!("cookie name {:?} is not a valid cookie token", self.cookie_name)
                )
            );
        }
        if self.dark_class.is_empty() {
            return Err(ThemeError::InvalidConfig("dark class is empty".to_string()));
        }
        // DomTokenList throws InvalidCharacterError on whitespace
        if self.dark_class.chars().any(char::is_whitespace) {
            return Err(
                ThemeError::InvalidConfig(
                    format!("dark class {:?} contains whitespace", self.dark_class)
                )
            );
        }
        Ok(())
    }
}

fn env_or_default(key: &str, default: &str) -> String {
    match std::env::var(key) {
        Ok(value) => value,
        Err(_) => {
            log::warn!("{} not set, using default {:?}", key, default);
            default.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_names_are_dark() {
        let config = ThemeConfig::default();
        assert_eq!(config.cookie_name, "dark");
        assert_eq!(config.dark_class, "dark");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_cookie_name_with_separator() {
        let config = ThemeConfig {
            cookie_name: "dark;mode".to_string(),
            ..ThemeConfig::default()
        };
        assert!(matches!(config.validate(), Err(ThemeError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_class_with_whitespace() {
        let config = ThemeConfig {
            dark_class: "dark mode".to_string(),
            ..ThemeConfig::default()
        };
        assert!(matches!(config.validate(), Err(ThemeError::InvalidConfig(_))));
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        let config = ThemeConfig::from_json(r#"{"dark_class":"night"}"#).unwrap();
        assert_eq!(config.cookie_name, "dark");
        assert_eq!(config.dark_class, "night");
    }

    #[test]
    fn test_accepts_token_punctuation() {
        let config = ThemeConfig {
            cookie_name: "site.dark-mode_v2".to_string(),
            ..ThemeConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_page_meta() {
        let config = ThemeConfig::from_page_meta(Some(r#"{"cookie_name":"night"}"#)).unwrap();
        assert_eq!(config.cookie_name, "night");
        assert_eq!(ThemeConfig::from_page_meta(None).unwrap(), ThemeConfig::default());
        assert!(ThemeConfig::from_page_meta(Some(r#"{"dark_class":""}"#)).is_err());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(ThemeConfig::from_json("not json").is_err());
    }
}
