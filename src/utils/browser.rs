use wasm_bindgen::JsCast;
use web_sys::{ HtmlDocument, HtmlElement };
use crate::configs::ThemeConfig;
use crate::error::ThemeError;
use super::dom::ClassTarget;
use super::storage::CookieSource;

fn html_document() -> Result<HtmlDocument, ThemeError> {
    let window = web_sys::window().ok_or_else(||
        ThemeError::Unavailable("no global window".to_string())
    )?;
    let document = window
        .document()
        .ok_or_else(|| ThemeError::Unavailable("window has no document".to_string()))?;
    document
        .dyn_into::<HtmlDocument>()
        .map_err(|_| ThemeError::Unavailable("document is not an HTML document".to_string()))
}

pub const CONFIG_META_NAME: &str = "dark-toggle-config";

/// Config from `<meta name="dark-toggle-config" content="{...}">`, if the page has one.
pub fn page_config() -> Result<ThemeConfig, ThemeError> {
    let selector = format!("meta[name=\"{}\"]", CONFIG_META_NAME);
    let content = html_document()?
        .query_selector(&selector)?
        .and_then(|meta| meta.get_attribute("content"));
    ThemeConfig::from_page_meta(content.as_deref())
}

/// `document.cookie` of the current page.
pub struct DocumentCookies {
    document: HtmlDocument,
}

impl DocumentCookies {
    pub fn attach() -> Result<Self, ThemeError> {
        Ok(Self { document: html_document()? })
    }
}

impl CookieSource for DocumentCookies {
    fn read_cookies(&self) -> Result<String, ThemeError> {
        self.document.cookie().map_err(|e| ThemeError::Cookie(format!("{:?}", e)))
    }

    fn write_cookie(&mut self, directive: &str) -> Result<(), ThemeError> {
        self.document.set_cookie(directive).map_err(|e| ThemeError::Cookie(format!("{:?}", e)))
    }
}

/// Class list of the current page's `<body>`.
pub struct BodyClassList {
    body: HtmlElement,
}

impl BodyClassList {
    pub fn attach() -> Result<Self, ThemeError> {
        let body = html_document()?
            .body()
            .ok_or_else(|| ThemeError::Unavailable("document has no body".to_string()))?;
        Ok(Self { body })
    }
}

impl ClassTarget for BodyClassList {
    fn has_class(&self, class: &str) -> Result<bool, ThemeError> {
        Ok(self.body.class_list().contains(class))
    }

    fn set_class(&mut self, class: &str, present: bool) -> Result<(), ThemeError> {
        self.body
            .class_list()
            .toggle_with_force(class, present)
            .map(|_| ())
            .map_err(|e| ThemeError::ClassList(format!("{:?}", e)))
    }
}
