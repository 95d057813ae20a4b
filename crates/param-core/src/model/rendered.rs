//! Estructuras de salida (value objects por request).
//!
//! `None` se serializa como `null` y las colecciones vacías como `[]`; la
//! distinción "ausente" vs "vacío" sobrevive al JSON.

use serde::{Deserialize, Serialize};

use crate::model::kind::InputKind;

/// Descripción canónica de un parámetro renderizado.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedParameter {
    pub name: String,
    #[serde(rename = "type")]
    pub type_tag: String,
    pub description: Option<String>,
    pub current_value: String,
    pub input_kind: InputKind,
    pub choices: Vec<String>,
    pub dependencies: Vec<String>,
    pub is_dynamic: bool,
    pub is_required: bool,
    pub error_message: Option<String>,
    /// Contenido libre de un `DynamicReferenceParameter` (no es lista de choices).
    pub data: Option<String>,
}

impl RenderedParameter {
    pub fn has_error(&self) -> bool {
        self.error_message.is_some()
    }
}

/// Agregado de todos los parámetros de un job, en el orden declarado.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedJobParameters {
    pub job_name: String,
    pub job_full_name: String,
    pub job_url: String,
    pub build_with_parameters_url: String,
    pub active_extension_available: bool,
    pub active_extension_version: Option<String>,
    pub parameters: Vec<RenderedParameter>,
}

impl RenderedJobParameters {
    pub fn parameter(&self, name: &str) -> Option<&RenderedParameter> {
        self.parameters.iter().find(|p| p.name == name)
    }
}
