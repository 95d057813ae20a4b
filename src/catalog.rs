//! Catálogo de jobs cargado desde JSON.
//!
//! ```json
//! { "jobs": [ { "fullName": "team/deploy",
//!               "parameters": [ { "type": "ChoiceParameterDefinition",
//!                                 "name": "env", "choices": ["dev", "prod"] } ] } ] }
//! ```
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use indexmap::IndexMap;
use param_core::{JobContext, JobDefinition, ParameterDescriptor};
use param_providers::ProviderSpec;
use serde::Deserialize;

use crate::errors::{ApiError, CatalogError};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    jobs: Vec<JobEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JobEntry {
    full_name: String,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    restricted: bool,
    #[serde(default)]
    parameters: Vec<ParameterEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ParameterEntry {
    #[serde(rename = "type")]
    type_tag: String,
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    default_value: Option<String>,
    #[serde(default)]
    choices: Vec<String>,
    #[serde(default)]
    required: bool,
    #[serde(default)]
    provider: Option<ProviderSpec>,
}

/// Job del catálogo: definición para el motor + marca de acceso restringido.
#[derive(Debug, Clone)]
pub struct CatalogJob {
    pub definition: Arc<JobDefinition>,
    pub restricted: bool,
}

/// Jobs indexados por nombre completo, en el orden declarado.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    jobs: IndexMap<String, CatalogJob>,
}

impl Catalog {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&raw)?;
        tracing::info!(path = %path.display(), jobs = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(raw)?;
        let mut jobs = IndexMap::with_capacity(file.jobs.len());
        for entry in file.jobs {
            let full_name = entry.full_name.trim().to_string();
            if full_name.is_empty() || full_name.split('/').any(str::is_empty) {
                return Err(CatalogError::InvalidJobName(entry.full_name));
            }
            if jobs.contains_key(&full_name) {
                return Err(CatalogError::DuplicateJob(full_name));
            }
            let job = build_job(&full_name, entry)?;
            jobs.insert(full_name, job);
        }
        Ok(Self { jobs })
    }

    pub fn get(&self, full_name: &str) -> Option<&CatalogJob> {
        self.jobs.get(full_name)
    }

    pub fn job_names(&self) -> impl Iterator<Item = &str> {
        self.jobs.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

fn build_job(full_name: &str, entry: JobEntry) -> Result<CatalogJob, CatalogError> {
    let mut parameters: Vec<ParameterDescriptor> = Vec::with_capacity(entry.parameters.len());
    for p in entry.parameters {
        let name = p.name.trim().to_string();
        if name.is_empty() {
            return Err(CatalogError::EmptyParameterName { job: full_name.to_string() });
        }
        if parameters.iter().any(|d| d.name() == name) {
            return Err(CatalogError::DuplicateParameter { job: full_name.to_string(), parameter: name });
        }
        let mut descriptor = ParameterDescriptor::new(p.type_tag, name.clone()).with_choices(p.choices)
                                                                              .with_required(p.required);
        if let Some(description) = p.description {
            descriptor = descriptor.with_description(description);
        }
        if let Some(default_value) = p.default_value {
            descriptor = descriptor.with_default(default_value);
        }
        if let Some(spec) = p.provider {
            let provider = spec.build().map_err(|source| CatalogError::Provider { job: full_name.to_string(),
                                                                                   parameter: name.clone(),
                                                                                   source })?;
            descriptor = descriptor.with_provider(provider);
        }
        parameters.push(descriptor);
    }
    let context = JobContext::new(full_name, entry.url);
    Ok(CatalogJob { definition: Arc::new(JobDefinition::new(context, parameters)),
                    restricted: entry.restricted })
}

/// Fuente de definiciones de job para la capa HTTP.
#[async_trait]
pub trait JobStore: Send + Sync {
    async fn find(&self, full_name: &str) -> Result<Option<CatalogJob>, ApiError>;
}

#[async_trait]
impl JobStore for Catalog {
    async fn find(&self, full_name: &str) -> Result<Option<CatalogJob>, ApiError> {
        Ok(self.get(full_name).cloned())
    }
}
