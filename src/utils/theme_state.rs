use serde::{ Deserialize, Serialize };

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ThemeState {
    pub is_dark: bool,
}

impl ThemeState {
    pub fn theme(self) -> Theme {
        if self.is_dark { Theme::Dark } else { Theme::Light }
    }

    pub fn toggled(self) -> Self {
        Self { is_dark: !self.is_dark }
    }

    /// Class for the app's root element. In the browser `<body>` carries the
    /// theme, so the root stays unclassed there.
    pub fn root_class(self, dark_class: &str) -> &str {
        if cfg!(target_arch = "wasm32") || !self.is_dark { "" } else { dark_class }
    }

    /// Toggle button glyph: the moon offers dark, the sun offers light.
    pub fn toggle_icon(self) -> &'static str {
        if self.is_dark { "🌞" } else { "🌙" }
    }
}

impl From<Theme> for ThemeState {
    fn from(theme: Theme) -> Self {
        Self { is_dark: theme == Theme::Dark }
    }
}
