//! Contrato de los providers dinámicos.
//!
//! El conjunto de providers es abierto y cada versión de la extensión expone
//! un subconjunto distinto de operaciones. Cada operación es un método
//! opcional que por defecto responde `Capability::Unsupported`; "no soportado"
//! y "falló" son variantes distintas para que la cadena de fallback del
//! invoker sea una máquina de estados explícita.

use std::fmt::Debug;

use crate::errors::ProviderError;
use crate::model::{CurrentValues, JobContext};
use crate::normalize::RawResult;

/// Resultado de sondear una capacidad de un provider.
#[derive(Debug)]
pub enum Capability<T> {
    /// El provider no implementa esta operación (no es un fallo).
    Unsupported,
    /// La operación existe pero falló al ejecutarse.
    Failed(ProviderError),
    Produced(T),
}

impl<T> Capability<T> {
    pub fn is_supported(&self) -> bool {
        !matches!(self, Capability::Unsupported)
    }
}

/// Forma cruda en la que un accessor de dependencias puede responder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawDependencies {
    /// Cadena delimitada por comas (`"env, region"`).
    Delimited(String),
    Sequence(Vec<String>),
    Array(Box<[String]>),
}

/// Provider asociado a un descriptor dinámico.
///
/// Las operaciones de choices se prueban en el orden en que aparecen aquí.
pub trait DynamicProvider: Send + Sync + Debug {
    /// Nombre para logs y diagnósticos.
    fn provider_name(&self) -> &str;

    /// (1) Mismo render que dispararía el formulario interactivo.
    fn render_choices(&self, _values: &CurrentValues) -> Capability<RawResult> {
        Capability::Unsupported
    }

    /// (2) Choices que requieren estado con alcance de job.
    fn choices_for_job(&self, _job: &JobContext, _values: &CurrentValues) -> Capability<RawResult> {
        Capability::Unsupported
    }

    /// (3) Contrato antiguo, sólo con los valores actuales.
    fn legacy_choices(&self, _values: &CurrentValues) -> Capability<RawResult> {
        Capability::Unsupported
    }

    /// (4) Choices estáticas / por defecto; ignora los valores actuales.
    fn default_choices(&self) -> Capability<RawResult> {
        Capability::Unsupported
    }

    fn referenced_parameters(&self) -> Capability<RawDependencies> {
        Capability::Unsupported
    }

    fn filter_parameters(&self) -> Capability<RawDependencies> {
        Capability::Unsupported
    }
}
