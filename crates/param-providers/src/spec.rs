//! Descripción declarativa de providers (p.ej. dentro del catálogo JSON).
//!
//! ```json
//! { "kind": "cascadeTable", "driver": "env",
//!   "table": { "prod": ["us-east-1", "us-west-1"] },
//!   "fallback": ["us-east-1"] }
//! ```

use std::sync::Arc;

use indexmap::IndexMap;
use param_core::DynamicProvider;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SpecError;
use crate::providers::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ProviderSpec {
    Static {
        choices: Value,
    },
    #[serde(rename_all = "camelCase")]
    CascadeTable {
        driver: String,
        table: IndexMap<String, Value>,
        #[serde(default)]
        fallback: Option<Value>,
        #[serde(default)]
        referenced_parameters: Option<String>,
    },
    JobScoped {
        jobs: IndexMap<String, Value>,
        #[serde(default)]
        fallback: Option<Value>,
    },
    LegacyFilter {
        driver: String,
        choices: Vec<String>,
    },
    ReferenceTemplate {
        template: String,
    },
    Failing {
        #[serde(default = "default_failure")]
        message: String,
    },
}

fn default_failure() -> String {
    "provider failure".to_string()
}

impl ProviderSpec {
    pub fn kind_name(&self) -> &'static str {
        match self {
            ProviderSpec::Static { .. } => "static",
            ProviderSpec::CascadeTable { .. } => "cascadeTable",
            ProviderSpec::JobScoped { .. } => "jobScoped",
            ProviderSpec::LegacyFilter { .. } => "legacyFilter",
            ProviderSpec::ReferenceTemplate { .. } => "referenceTemplate",
            ProviderSpec::Failing { .. } => "failing",
        }
    }

    /// Construye el provider, validando los campos obligatorios.
    pub fn build(&self) -> Result<Arc<dyn DynamicProvider>, SpecError> {
        let kind = self.kind_name();
        let require = |value: &str, field: &'static str| {
            if value.trim().is_empty() {
                Err(SpecError::MissingField { kind, field })
            } else {
                Ok(())
            }
        };
        let provider: Arc<dyn DynamicProvider> = match self {
            ProviderSpec::Static { choices } => Arc::new(StaticChoicesProvider::new(choices.clone())),
            ProviderSpec::CascadeTable { driver, table, fallback, referenced_parameters } => {
                require(driver, "driver")?;
                let mut p = CascadeTableProvider::new(driver.clone(), table.clone());
                if let Some(f) = fallback {
                    p = p.with_fallback(f.clone());
                }
                if let Some(r) = referenced_parameters {
                    p = p.with_referenced(r.clone());
                }
                Arc::new(p)
            }
            ProviderSpec::JobScoped { jobs, fallback } => {
                let mut p = JobScopedProvider::new(jobs.clone());
                if let Some(f) = fallback {
                    p = p.with_fallback(f.clone());
                }
                Arc::new(p)
            }
            ProviderSpec::LegacyFilter { driver, choices } => {
                require(driver, "driver")?;
                Arc::new(LegacyFilterProvider::new(driver.clone(), choices.clone()))
            }
            ProviderSpec::ReferenceTemplate { template } => {
                require(template, "template")?;
                Arc::new(ReferenceTemplateProvider::new(template.clone()))
            }
            ProviderSpec::Failing { message } => Arc::new(FailingProvider::new(message.clone())),
        };
        Ok(provider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_cascade_table_with_camel_case_fields() {
        let spec: ProviderSpec = serde_json::from_value(json!({
            "kind": "cascadeTable",
            "driver": "env",
            "table": {"prod": ["a"]},
            "referencedParameters": "env, zone"
        })).unwrap();
        assert_eq!(spec.kind_name(), "cascadeTable");
        let p = spec.build().unwrap();
        assert_eq!(p.provider_name(), "cascadeTable");
    }

    #[test]
    fn empty_driver_is_rejected() {
        let spec = ProviderSpec::LegacyFilter { driver: " ".into(), choices: vec![] };
        assert_eq!(spec.build().unwrap_err(),
                   SpecError::MissingField { kind: "legacyFilter", field: "driver" });
    }

    #[test]
    fn failing_has_default_message() {
        let spec: ProviderSpec = serde_json::from_value(json!({"kind": "failing"})).unwrap();
        assert_eq!(spec, ProviderSpec::Failing { message: "provider failure".into() });
    }
}
