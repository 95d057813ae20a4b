//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) una sola vez y expone una estructura
//! inmutable con los parámetros del servidor y del motor de render.
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use dotenvy::dotenv;
use once_cell::sync::Lazy;

use crate::errors::ConfigError;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";
pub const DEFAULT_CATALOG: &str = "catalog.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Dirección de escucha del servidor HTTP.
    pub bind: SocketAddr,
    /// Archivo JSON con los jobs y sus parámetros.
    pub catalog_path: PathBuf,
    /// Límite por parámetro para la evaluación de providers (`None` = sin límite).
    pub provider_timeout: Option<Duration>,
    /// Renderizar los parámetros de un job en paralelo.
    pub parallel: bool,
    /// `false` simula una instalación sin la extensión de providers.
    pub extension_enabled: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { bind: SocketAddr::from(([127, 0, 0, 1], 8080)),
               catalog_path: PathBuf::from(DEFAULT_CATALOG),
               provider_timeout: None,
               parallel: false,
               extension_enabled: true }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        // asegura que .env se haya cargado
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que `from_env` pero con una fuente de variables arbitraria.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
        where F: Fn(&str) -> Option<String>
    {
        let bind_raw = lookup("PARAMFLOW_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind: SocketAddr = bind_raw.parse()
                           .map_err(|_| ConfigError::Invalid { key: "PARAMFLOW_BIND", value: bind_raw.clone() })?;
        let catalog_path = PathBuf::from(lookup("PARAMFLOW_CATALOG").unwrap_or_else(|| DEFAULT_CATALOG.to_string()));
        let provider_timeout = match lookup("PARAMFLOW_PROVIDER_TIMEOUT_MS") {
            Some(v) if !v.trim().is_empty() => {
                let ms: u64 = v.trim()
                               .parse()
                               .map_err(|_| ConfigError::Invalid { key: "PARAMFLOW_PROVIDER_TIMEOUT_MS", value: v.clone() })?;
                Some(Duration::from_millis(ms))
            }
            _ => None,
        };
        let parallel = parse_flag(&lookup, "PARAMFLOW_PARALLEL", false)?;
        let extension_enabled = parse_flag(&lookup, "PARAMFLOW_EXTENSION", true)?;
        Ok(Self { bind, catalog_path, provider_timeout, parallel, extension_enabled })
    }
}

fn parse_flag<F>(lookup: &F, key: &'static str, default: bool) -> Result<bool, ConfigError>
    where F: Fn(&str) -> Option<String>
{
    match lookup(key) {
        None => Ok(default),
        Some(v) => match v.trim().to_ascii_lowercase().as_str() {
            "" => Ok(default),
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::Invalid { key, value: v }),
        },
    }
}

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}
