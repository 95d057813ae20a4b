use thiserror::Error;

/// Errores al construir un provider desde su spec declarativa.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpecError {
    #[error("provider '{kind}' requires a non-empty '{field}'")]
    MissingField { kind: &'static str, field: &'static str },
    #[error("invalid provider spec: {0}")]
    Invalid(String),
}
