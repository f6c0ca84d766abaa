use dioxus::prelude::*;
use crate::utils::ThemeState;

#[component]
pub fn Home() -> Element {
    let theme = use_context::<Signal<ThemeState>>();

    rsx! {
        div { 
            class: "container mx-auto p-4",
            h1 { 
                class: "text-2xl font-bold mb-4",
                "Dark Toggle"
            }
            p { 
                class: "text-gray-600",
                if theme.read().is_dark {
                    "Dark theme is on. It lasts until the browser session ends."
                } else {
                    "Use the moon button to switch to the dark theme."
                }
            }
        }
    }
}
