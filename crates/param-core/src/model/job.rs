//! Identidad del job y su lista ordenada de descriptores.

use serde::{Deserialize, Serialize};

use crate::constants::BUILD_WITH_PARAMETERS;
use crate::model::descriptor::ParameterDescriptor;

/// Contexto del job que se pasa a los providers con alcance de job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobContext {
    pub name: String,
    pub full_name: String,
    pub url: String,
}

impl JobContext {
    /// Construye el contexto a partir del nombre completo (`folder/job`).
    /// Sin `url` explícita se deriva `job/folder/job/name/`.
    pub fn new(full_name: impl Into<String>, url: Option<String>) -> Self {
        let full_name = full_name.into();
        let name = full_name.rsplit('/').next().unwrap_or(&full_name).to_string();
        let url = url.unwrap_or_else(|| Self::default_url(&full_name));
        Self { name, full_name, url }
    }

    fn default_url(full_name: &str) -> String {
        let segments: Vec<&str> = full_name.split('/').filter(|s| !s.is_empty()).collect();
        format!("job/{}/", segments.join("/job/"))
    }

    /// URL relativa para lanzar un build con parámetros.
    pub fn build_with_parameters_url(&self) -> String {
        if self.url.is_empty() || self.url.ends_with('/') {
            format!("{}{}", self.url, BUILD_WITH_PARAMETERS)
        } else {
            format!("{}/{}", self.url, BUILD_WITH_PARAMETERS)
        }
    }
}

/// Job con sus parámetros en el orden declarado.
#[derive(Debug, Clone)]
pub struct JobDefinition {
    pub context: JobContext,
    pub parameters: Vec<ParameterDescriptor>,
}

impl JobDefinition {
    pub fn new(context: JobContext, parameters: Vec<ParameterDescriptor>) -> Self {
        Self { context, parameters }
    }

    pub fn parameter(&self, name: &str) -> Option<&ParameterDescriptor> {
        self.parameters.iter().find(|p| p.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_name_and_url_from_full_name() {
        let ctx = JobContext::new("team/deploy", None);
        assert_eq!(ctx.name, "deploy");
        assert_eq!(ctx.url, "job/team/job/deploy/");
        assert_eq!(ctx.build_with_parameters_url(), "job/team/job/deploy/buildWithParameters");
    }

    #[test]
    fn explicit_url_without_trailing_slash() {
        let ctx = JobContext::new("deploy", Some("job/deploy".into()));
        assert_eq!(ctx.build_with_parameters_url(), "job/deploy/buildWithParameters");
    }
}
