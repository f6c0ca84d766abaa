use crate::configs::ThemeConfig;
use crate::error::ThemeError;
use super::dom::ClassTarget;
use super::storage::{ CookiePreference, CookieSource, PreferenceStore };
use super::theme_state::{ Theme, ThemeState };

/// Reflects the stored dark preference onto a class list.
#[derive(Debug, Clone)]
pub struct ThemeController<S, T> {
    store: S,
    target: T,
    dark_class: String,
}

impl<S: PreferenceStore, T: ClassTarget> ThemeController<S, T> {
    pub fn new(store: S, target: T, dark_class: impl Into<String>) -> Self {
        Self {
            store,
            target,
            dark_class: dark_class.into(),
        }
    }

    /// Stored preference, without touching the class list.
    pub fn current(&self) -> Result<ThemeState, ThemeError> {
        Ok(ThemeState { is_dark: self.store.get_preference()? })
    }

    /// Brings the class list in line with the stored preference. Idempotent.
    pub fn apply_theme(&mut self) -> Result<ThemeState, ThemeError> {
        let state = self.current()?;
        if self.target.has_class(&self.dark_class)? != state.is_dark {
            self.target.set_class(&self.dark_class, state.is_dark)?;
            log::info!("Applied {:?} theme", state.theme());
        }
        Ok(state)
    }

    /// Flips the stored preference once, then re-applies it.
    pub fn toggle_theme(&mut self) -> Result<ThemeState, ThemeError> {
        let next = self.current()?.toggled();
        self.store.set_preference(next.is_dark)?;
        log::info!("Toggled theme to {:?}", next.theme());
        self.apply_theme()
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<ThemeState, ThemeError> {
        let wanted = ThemeState::from(theme);
        if self.current()? != wanted {
            self.store.set_preference(wanted.is_dark)?;
        }
        self.apply_theme()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn dark_class(&self) -> &str {
        &self.dark_class
    }
}

impl<C: CookieSource, T: ClassTarget> ThemeController<CookiePreference<C>, T> {
    pub fn from_config(source: C, target: T, config: &ThemeConfig) -> Self {
        Self::new(CookiePreference::from_config(source, config), target, config.dark_class.clone())
    }
}

#[cfg(target_arch = "wasm32")]
pub type PageThemeController = ThemeController<
    CookiePreference<super::browser::DocumentCookies>,
    super::browser::BodyClassList
>;

#[cfg(not(target_arch = "wasm32"))]
pub type PageThemeController = ThemeController<
    CookiePreference<super::cookie::MemoryCookieJar>,
    super::dom::MemoryClassList
>;

/// Builds the controller for the current page: the real `document.cookie` and
/// `<body>` in the browser, in-memory stand-ins elsewhere.
pub fn attach_page_controller(config: &ThemeConfig) -> Result<PageThemeController, ThemeError> {
    config.validate()?;

    #[cfg(target_arch = "wasm32")]
    let (source, target) = (
        super::browser::DocumentCookies::attach()?,
        super::browser::BodyClassList::attach()?,
    );

    #[cfg(not(target_arch = "wasm32"))]
    let (source, target) = (super::cookie::MemoryCookieJar::new(), super::dom::MemoryClassList::new());

    log::debug!("Attached theme controller (cookie {:?})", config.cookie_name);
    Ok(ThemeController::from_config(source, target, config))
}
