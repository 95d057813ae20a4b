//! Detección de disponibilidad de la extensión de parámetros dinámicos.
//!
//! Se calcula una sola vez (primer acceso) y queda cacheado durante la vida
//! del proceso. La ausencia de la extensión es un estado normal, no un error.

use std::fmt::Debug;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use log::debug;
use once_cell::sync::OnceCell;

use crate::constants::WELL_KNOWN_EXTENSION_TYPE;
use crate::errors::{panic_message, LocateError};

/// Extensión resuelta por el locator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedExtension {
    pub type_name: String,
    /// Versión leída de la metadata del paquete, si existe.
    pub package_version: Option<String>,
}

/// Resuelve nombres de tipo contra la extensión instalada.
pub trait ExtensionLocator: Send + Sync + Debug {
    fn resolve(&self, type_name: &str) -> Result<ResolvedExtension, LocateError>;
}

/// Locator que nunca resuelve: la extensión no está instalada.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoExtension;

impl ExtensionLocator for NoExtension {
    fn resolve(&self, type_name: &str) -> Result<ResolvedExtension, LocateError> {
        Err(LocateError::TypeNotFound(type_name.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ExtensionStatus {
    available: bool,
    version: Option<String>,
}

#[derive(Debug)]
pub struct ExtensionDetector {
    locator: Arc<dyn ExtensionLocator>,
    status: OnceCell<ExtensionStatus>,
}

impl ExtensionDetector {
    pub fn new(locator: Arc<dyn ExtensionLocator>) -> Self {
        Self { locator, status: OnceCell::new() }
    }

    pub fn absent() -> Self {
        Self::new(Arc::new(NoExtension))
    }

    pub fn is_available(&self) -> bool {
        self.status().available
    }

    pub fn version(&self) -> Option<String> {
        self.status().version.clone()
    }

    fn status(&self) -> &ExtensionStatus {
        self.status.get_or_init(|| match self.resolve_guarded() {
                                        Ok(resolved) => {
                                            let version = resolved.package_version
                                                                  .map(|v| v.trim().to_string())
                                                                  .filter(|v| !v.is_empty());
                                            debug!("extension available version={version:?}");
                                            ExtensionStatus { available: true, version }
                                        }
                                        Err(e) => {
                                            debug!("extension unavailable: {e}");
                                            ExtensionStatus { available: false, version: None }
                                        }
                                    })
    }

    /// Un panic del locator se trata como extensión no disponible.
    fn resolve_guarded(&self) -> Result<ResolvedExtension, LocateError> {
        panic::catch_unwind(AssertUnwindSafe(|| self.locator.resolve(WELL_KNOWN_EXTENSION_TYPE)))
            .unwrap_or_else(|payload| Err(LocateError::Lookup(panic_message(payload))))
    }
}
