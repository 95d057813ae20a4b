//! Superficie HTTP: parsing de query, sobre de respuesta y rutas axum.
pub mod envelope;
pub mod query;
pub mod routes;

pub use envelope::Envelope;
pub use query::parse_params;
pub use routes::router;
