use dioxus::prelude::*;
use dark_toggle::{
    attach_page_controller,
    PageThemeController,
    Route,
    ThemeConfig,
    ThemeError,
    ThemeState,
};

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenv::dotenv().ok();
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info");
        }
        env_logger::init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to start logger: {}", e).into());
        }
    }

    dioxus::launch(App);
}

// env vars on native, the page's config meta in the browser
fn load_config() -> Result<ThemeConfig, ThemeError> {
    #[cfg(target_arch = "wasm32")]
    {
        dark_toggle::utils::browser::page_config()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        ThemeConfig::from_env()
    }
}

#[component]
fn App() -> Element {
    let mut controller = use_signal(|| {
        match load_config().and_then(|config| attach_page_controller(&config)) {
            Ok(controller) => Some(controller),
            Err(e) => {
                log::error!("Theme controller unavailable: {}", e);
                None
            }
        }
    });
    let mut theme = use_signal(ThemeState::default);
    use_context_provider(|| controller);
    use_context_provider(|| theme);

    // sync <body> with the cookie once the page is mounted
    use_effect(move || {
        let applied = controller.write().as_mut().map(PageThemeController::apply_theme);
        match applied {
            Some(Ok(state)) => theme.set(state),
            Some(Err(e)) => log::error!("Failed to apply theme: {}", e),
            None => {}
        }
    });

    let root_class = controller
        .read()
        .as_ref()
        .map(|controller| theme().root_class(controller.dark_class()).to_string())
        .unwrap_or_default();

    rsx! {
        div {
            id: "root",
            class: "{root_class}",
            document::Link { rel: "stylesheet", href: MAIN_CSS }
            Router::<Route> {}
        }
    }
}
