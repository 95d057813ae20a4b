//! Registro de tipos de parámetro que aporta la extensión.
//!
//! Implementa `ExtensionLocator`: el detector del core resuelve el tipo bien
//! conocido contra este registro y lee la versión del paquete.

use param_core::constants::{CASCADE_CHOICE_PARAMETER, DYNAMIC_CHOICE_PARAMETER, DYNAMIC_REFERENCE_PARAMETER};
use param_core::{ExtensionLocator, LocateError, ResolvedExtension};

/// Versión del paquete de la extensión (metadata de Cargo).
pub const EXTENSION_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Default)]
pub struct ProviderRegistry {
    types: Vec<String>,
    version: Option<String>,
}

impl ProviderRegistry {
    /// Registro con los tres tipos dinámicos de esta extensión.
    pub fn installed() -> Self {
        Self { types: vec![DYNAMIC_CHOICE_PARAMETER.to_string(),
                           CASCADE_CHOICE_PARAMETER.to_string(),
                           DYNAMIC_REFERENCE_PARAMETER.to_string()],
               version: Some(EXTENSION_VERSION.to_string()) }
    }

    /// Registro vacío: simula una instalación sin la extensión.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn register(&mut self, type_name: impl Into<String>) {
        let type_name = type_name.into();
        if !self.supports(&type_name) {
            self.types.push(type_name);
        }
    }

    pub fn supports(&self, type_name: &str) -> bool {
        self.types.iter().any(|t| t == type_name)
    }

    pub fn types(&self) -> &[String] {
        &self.types
    }
}

impl ExtensionLocator for ProviderRegistry {
    fn resolve(&self, type_name: &str) -> Result<ResolvedExtension, LocateError> {
        if self.supports(type_name) {
            Ok(ResolvedExtension { type_name: type_name.to_string(), package_version: self.version.clone() })
        } else {
            Err(LocateError::TypeNotFound(type_name.to_string()))
        }
    }
}
