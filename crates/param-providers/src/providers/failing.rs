use param_core::{Capability, CurrentValues, DynamicProvider, JobContext, ProviderError, RawDependencies, RawResult};

/// Provider que falla en todas sus operaciones (diagnóstico y pruebas).
#[derive(Debug, Clone)]
pub struct FailingProvider {
    message: String,
}

impl FailingProvider {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    fn fail<T>(&self) -> Capability<T> {
        Capability::Failed(ProviderError::evaluation(self.message.clone()))
    }
}

impl DynamicProvider for FailingProvider {
    fn provider_name(&self) -> &str {
        "failing"
    }

    fn render_choices(&self, _values: &CurrentValues) -> Capability<RawResult> {
        self.fail()
    }

    fn choices_for_job(&self, _job: &JobContext, _values: &CurrentValues) -> Capability<RawResult> {
        self.fail()
    }

    fn legacy_choices(&self, _values: &CurrentValues) -> Capability<RawResult> {
        self.fail()
    }

    fn default_choices(&self) -> Capability<RawResult> {
        self.fail()
    }

    fn referenced_parameters(&self) -> Capability<RawDependencies> {
        self.fail()
    }
}
