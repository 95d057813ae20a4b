//! paramflow: servicio HTTP del renderizado de parámetros de job.
//!
//! Este crate actúa como la capa externa del motor (`param-core`):
//! - `config`: configuración desde variables de entorno (.env).
//! - `errors`: errores de API, catálogo y configuración.
//! - `catalog`: jobs y descriptores cargados desde un archivo JSON.
//! - `access`: política de lectura (responde el camino 403).
//! - `app`: construcción del renderer a partir de la configuración.
//! - `http`: parsing de `params`, envelope `{success, data|error}` y rutas axum.
//! - `telemetry`: inicialización de tracing (con puente para `log`).

pub mod access;
pub mod app;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod http;
pub mod telemetry;

pub use app::{build_renderer, AppState};
pub use catalog::{Catalog, CatalogJob, JobStore};
pub use config::AppConfig;
