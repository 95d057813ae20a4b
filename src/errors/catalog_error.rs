use param_providers::SpecError;
use thiserror::Error;

/// Errores al cargar o validar el catálogo de jobs.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("error de IO leyendo el catálogo: {0}")]
    Io(#[from] std::io::Error),
    #[error("catálogo JSON inválido: {0}")]
    Json(#[from] serde_json::Error),
    #[error("job duplicado: {0}")]
    DuplicateJob(String),
    #[error("job '{0}' sin nombre válido")]
    InvalidJobName(String),
    #[error("job '{job}': parámetro con nombre vacío")]
    EmptyParameterName { job: String },
    #[error("job '{job}': parámetro duplicado '{parameter}'")]
    DuplicateParameter { job: String, parameter: String },
    #[error("job '{job}', parámetro '{parameter}': {source}")]
    Provider {
        job: String,
        parameter: String,
        #[source]
        source: SpecError,
    },
}
