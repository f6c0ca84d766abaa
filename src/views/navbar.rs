use dioxus::prelude::*;
use crate::error::ThemeError;
use crate::routes::Route;
use crate::utils::{ PageThemeController, ThemeState };

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

#[component(no_case_check)]
pub fn Navbar() -> Element {
    let mut controller = use_context::<Signal<Option<PageThemeController>>>();
    let mut theme = use_context::<Signal<ThemeState>>();

    rsx! {
        div {
            document::Link { rel: "stylesheet", href: NAVBAR_CSS }
            
            nav { 
                class: if theme.read().is_dark {
                    "bg-dark-primary shadow-lg transition-colors duration-200" 
                } else { 
                    "bg-white shadow-lg transition-colors duration-200" 
                },
                div {
                    id: "navbar",
                    class: "container mx-auto px-4 py-3 flex justify-between items-center",
                    Link {
                        class: if theme.read().is_dark {
                            "text-white hover:text-primary transition-colors"
                        } else {
                            "text-gray-800 hover:text-primary transition-colors"
                        },
                        to: Route::Home,
                        "Home"
                    }
                    button {
                        class: if theme.read().is_dark {
                            "p-2 rounded-lg bg-gray-700 hover:bg-gray-600 transition-colors"
                        } else {
                            "p-2 rounded-lg bg-gray-200 hover:bg-gray-300 transition-colors"
                        },
                        title: "Toggle theme",
                        onclick: move |_| {
                            let toggled = match controller.write().as_mut() {
                                Some(controller) => controller.toggle_theme(),
                                None => Err(ThemeError::Unavailable("theme controller not attached".to_string())),
                            };
                            match toggled {
                                Ok(state) => theme.set(state),
                                Err(e) => log::error!("Failed to toggle theme: {}", e),
                            }
                        },
                        {theme.read().toggle_icon()}
                    }
                }
            }
            Outlet::<Route> {}
        }
    }
}
