pub mod mocks;

use crate::configs::ThemeConfig;
use crate::utils::{ CookiePreference, MemoryClassList, MemoryCookieJar, ThemeController };

pub type MemoryController = ThemeController<CookiePreference<MemoryCookieJar>, MemoryClassList>;

pub fn setup() {
    let _ = env_logger::builder().is_test(true).filter_level(log::LevelFilter::Debug).try_init();
}

/// Controller over a jar seeded with `cookies` and an empty body class list.
pub fn controller_with(cookies: &str) -> MemoryController {
    setup();
    ThemeController::from_config(
        MemoryCookieJar::with_cookies(cookies),
        MemoryClassList::new(),
        &ThemeConfig::default()
    )
}

pub fn cookie_string(controller: &MemoryController) -> String {
    controller.store().source().cookie_string()
}

pub fn body_is_dark(controller: &MemoryController) -> bool {
    controller.target().classes().iter().any(|c| c == "dark")
}
