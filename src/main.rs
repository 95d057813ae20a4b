use std::process::ExitCode;
use std::sync::Arc;

use paramflow_rust::config::init_dotenv;
use paramflow_rust::http::router;
use paramflow_rust::{build_renderer, telemetry, AppConfig, AppState, Catalog};

#[tokio::main]
async fn main() -> ExitCode {
    // .env antes de leer RUST_LOG y la configuración
    init_dotenv();
    telemetry::init();

    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("configuración inválida: {e}");
            return ExitCode::from(2);
        }
    };
    let catalog = match Catalog::load(&config.catalog_path) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(path = %config.catalog_path.display(), "no se pudo cargar el catálogo: {e}");
            return ExitCode::from(5);
        }
    };

    let renderer = build_renderer(&config);
    let version = renderer.detector().version();
    tracing::info!(extension = renderer.detector().is_available(),
                   version = version.as_deref(),
                   "motor de parámetros listo");
    let state = AppState::new(Arc::new(catalog), renderer);

    let listener = match tokio::net::TcpListener::bind(config.bind).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(bind = %config.bind, "no se pudo abrir el puerto: {e}");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(bind = %config.bind, "escuchando");
    if let Err(e) = axum::serve(listener, router(state)).await {
        tracing::error!("servidor detenido con error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
