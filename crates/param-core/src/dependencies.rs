//! Extracción de dependencias (parámetros upstream) de un descriptor dinámico.
//!
//! Se prueban, en orden, las convenciones de accessor conocidas; gana la
//! primera que el provider soporta y que no falla. El orden de salida es el
//! de enumeración del accessor: sin ordenar y sin deduplicar.

use std::panic::{self, AssertUnwindSafe};

use log::{debug, trace};

use crate::errors::ProviderError;
use crate::model::ParameterDescriptor;
use crate::provider::{Capability, DynamicProvider, RawDependencies};

/// Estrategia de extracción con nombre (para logs).
pub type DependencyAccessor = fn(&dyn DynamicProvider) -> Capability<RawDependencies>;

fn referenced_parameters(p: &dyn DynamicProvider) -> Capability<RawDependencies> {
    p.referenced_parameters()
}

fn filter_parameters(p: &dyn DynamicProvider) -> Capability<RawDependencies> {
    p.filter_parameters()
}

/// Convenciones conocidas, en orden de prioridad.
pub const DEFAULT_ACCESSORS: &[(&str, DependencyAccessor)] =
    &[("referencedParameters", referenced_parameters), ("filterParameters", filter_parameters)];

#[derive(Debug, Clone)]
pub struct DependencyExtractor {
    accessors: Vec<(&'static str, DependencyAccessor)>,
}

impl DependencyExtractor {
    pub fn new() -> Self {
        Self { accessors: DEFAULT_ACCESSORS.to_vec() }
    }

    /// Dependencias declaradas por el descriptor; nunca falla.
    pub fn dependencies_of(&self, descriptor: &ParameterDescriptor) -> Vec<String> {
        if !descriptor.kind().is_dynamic() {
            return Vec::new();
        }
        let Some(provider) = descriptor.provider() else {
            return Vec::new();
        };
        for (name, accessor) in self.accessors.iter() {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| accessor(provider.as_ref())))
                .unwrap_or_else(|_| Capability::Failed(ProviderError::Panicked(format!("accessor {name}"))));
            match outcome {
                Capability::Produced(raw) => {
                    trace!("dependencies:{} resolved via {name}", descriptor.name());
                    return split_dependencies(raw);
                }
                Capability::Unsupported => continue,
                Capability::Failed(e) => {
                    debug!("dependencies:{} accessor {name} failed: {e}", descriptor.name());
                }
            }
        }
        Vec::new()
    }
}

impl Default for DependencyExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Normaliza la respuesta del accessor a una lista ordenada.
pub fn split_dependencies(raw: RawDependencies) -> Vec<String> {
    match raw {
        RawDependencies::Delimited(s) => s.split(',')
                                          .map(str::trim)
                                          .filter(|seg| !seg.is_empty())
                                          .map(str::to_string)
                                          .collect(),
        RawDependencies::Sequence(items) => items,
        RawDependencies::Array(items) => items.into_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimited_is_trimmed_in_order_without_dedup() {
        let deps = split_dependencies(RawDependencies::Delimited("env, region ,env".into()));
        assert_eq!(deps, vec!["env", "region", "env"]);
    }

    #[test]
    fn empty_delimited_yields_nothing() {
        assert!(split_dependencies(RawDependencies::Delimited("  ".into())).is_empty());
    }

    #[test]
    fn array_keeps_order() {
        let deps = split_dependencies(RawDependencies::Array(vec!["b".to_string(), "a".to_string()].into_boxed_slice()));
        assert_eq!(deps, vec!["b", "a"]);
    }
}
