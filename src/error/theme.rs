use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub enum ThemeError {
    Unavailable(String),
    Cookie(String),
    ClassList(String),
    InvalidConfig(String),
}

impl Display for ThemeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeError::Unavailable(msg) => write!(f, "Unavailable: {}", msg),
            ThemeError::Cookie(msg) => write!(f, "Cookie Error: {}", msg),
            ThemeError::ClassList(msg) => write!(f, "Class List Error: {}", msg),
            ThemeError::InvalidConfig(msg) => write!(f, "Invalid Config: {}", msg),
        }
    }
}

impl std::error::Error for ThemeError {}

impl From<serde_json::Error> for ThemeError {
    fn from(error: serde_json::Error) -> Self {
        ThemeError::InvalidConfig(error.to_string())
    }
}

// JS exceptions carry no stable shape, so keep whatever the debug view says.
#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for ThemeError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        ThemeError::Unavailable(format!("{:?}", value))
    }
}
