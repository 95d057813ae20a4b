//! Inicialización de logging: subscriber `tracing` con filtro `RUST_LOG`
//! (por defecto `info`) y puente para los registros `log` del motor. La
//! salida va a stderr: stdout queda para el JSON de la CLI.
use tracing_log::LogTracer;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "info";

/// Instala el subscriber global. Devuelve `false` si ya había uno instalado.
pub fn init() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let subscriber = tracing_subscriber::registry().with(filter).with(fmt::layer().with_target(true).with_writer(std::io::stderr));
    if LogTracer::init().is_err() {
        return false;
    }
    tracing::subscriber::set_global_default(subscriber).is_ok()
}
