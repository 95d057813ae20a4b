//! Errores de la capa externa (API, catálogo, configuración).

pub mod api_error;
pub mod catalog_error;
pub mod config_error;

pub use api_error::ApiError;
pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
