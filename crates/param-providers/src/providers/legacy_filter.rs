use param_core::{Capability, CurrentValues, DynamicProvider, RawDependencies, RawResult};

/// Contrato antiguo: filtra una lista estática por el valor del driver
/// (subcadena, sin distinguir mayúsculas). Expone sus dependencias por el
/// accessor `filter_parameters`.
#[derive(Debug, Clone)]
pub struct LegacyFilterProvider {
    driver: String,
    choices: Vec<String>,
}

impl LegacyFilterProvider {
    pub fn new(driver: impl Into<String>, choices: Vec<String>) -> Self {
        Self { driver: driver.into(), choices }
    }
}

impl DynamicProvider for LegacyFilterProvider {
    fn provider_name(&self) -> &str {
        "legacyFilter"
    }

    fn legacy_choices(&self, values: &CurrentValues) -> Capability<RawResult> {
        let needle = values.get(&self.driver).unwrap_or_default().to_lowercase();
        let filtered = self.choices
                           .iter()
                           .filter(|c| needle.is_empty() || c.to_lowercase().contains(&needle))
                           .cloned();
        Capability::Produced(RawResult::sequence(filtered))
    }

    fn filter_parameters(&self) -> Capability<RawDependencies> {
        Capability::Produced(RawDependencies::Sequence(vec![self.driver.clone()]))
    }
}
