use indexmap::IndexMap;
use param_core::{Capability, CurrentValues, DynamicProvider, JobContext, RawResult};
use serde_json::Value;

/// Choices por job (clave: nombre completo del job).
#[derive(Debug, Clone)]
pub struct JobScopedProvider {
    jobs: IndexMap<String, Value>,
    fallback: Option<Value>,
}

impl JobScopedProvider {
    pub fn new(jobs: IndexMap<String, Value>) -> Self {
        Self { jobs, fallback: None }
    }

    pub fn with_fallback(mut self, fallback: Value) -> Self {
        self.fallback = Some(fallback);
        self
    }
}

impl DynamicProvider for JobScopedProvider {
    fn provider_name(&self) -> &str {
        "jobScoped"
    }

    fn choices_for_job(&self, job: &JobContext, _values: &CurrentValues) -> Capability<RawResult> {
        let row = self.jobs.get(&job.full_name).cloned();
        Capability::Produced(row.map(RawResult::from).unwrap_or(RawResult::Null))
    }

    fn default_choices(&self) -> Capability<RawResult> {
        match &self.fallback {
            Some(v) => Capability::Produced(RawResult::from(v.clone())),
            None => Capability::Unsupported,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use param_core::normalize;
    use serde_json::json;

    #[test]
    fn picks_row_by_full_name() {
        let mut jobs = IndexMap::new();
        jobs.insert("team/deploy".to_string(), json!(["blue", "green"]));
        let p = JobScopedProvider::new(jobs);
        let job = JobContext::new("team/deploy", None);
        match p.choices_for_job(&job, &CurrentValues::new()) {
            Capability::Produced(raw) => assert_eq!(normalize(raw), vec!["blue", "green"]),
            other => panic!("unexpected {other:?}"),
        }
    }
}
