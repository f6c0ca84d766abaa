mod views;
pub mod utils;
mod routes;
pub mod configs;
mod tests;
pub mod error;

pub use crate::routes::*;
pub use crate::utils::*;
pub use crate::configs::ThemeConfig;
pub use crate::error::ThemeError;
