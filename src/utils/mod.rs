pub mod cookie;
pub mod controller;
pub mod dom;
pub mod storage;
mod theme_state;

#[cfg(target_arch = "wasm32")]
pub mod browser;

pub use controller::{ attach_page_controller, PageThemeController, ThemeController };
pub use cookie::MemoryCookieJar;
pub use dom::{ ClassTarget, MemoryClassList };
pub use storage::{ CookiePreference, CookieSource, PreferenceStore };
pub use theme_state::{ Theme, ThemeState };
