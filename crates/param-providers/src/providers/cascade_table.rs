use indexmap::IndexMap;
use log::trace;
use param_core::{Capability, CurrentValues, DynamicProvider, RawDependencies, RawResult};
use serde_json::Value;

/// Cascada por tabla: el valor actual del parámetro `driver` elige la fila.
///
/// Sin valor para el driver, o con un valor que no está en la tabla, el
/// render no produce nada y el invoker cae a `default_choices` (la
/// `fallback`, si existe).
#[derive(Debug, Clone)]
pub struct CascadeTableProvider {
    driver: String,
    table: IndexMap<String, Value>,
    fallback: Option<Value>,
    referenced: Option<String>,
}

impl CascadeTableProvider {
    pub fn new(driver: impl Into<String>, table: IndexMap<String, Value>) -> Self {
        Self { driver: driver.into(), table, fallback: None, referenced: None }
    }

    pub fn with_fallback(mut self, fallback: Value) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Lista de referencias explícita (por defecto, sólo el driver).
    pub fn with_referenced(mut self, referenced: impl Into<String>) -> Self {
        self.referenced = Some(referenced.into());
        self
    }
}

impl DynamicProvider for CascadeTableProvider {
    fn provider_name(&self) -> &str {
        "cascadeTable"
    }

    fn render_choices(&self, values: &CurrentValues) -> Capability<RawResult> {
        let row = values.get(&self.driver).and_then(|v| self.table.get(v));
        trace!("cascadeTable driver={} hit={}", self.driver, row.is_some());
        Capability::Produced(row.cloned().map(RawResult::from).unwrap_or(RawResult::Null))
    }

    fn default_choices(&self) -> Capability<RawResult> {
        match &self.fallback {
            Some(v) => Capability::Produced(RawResult::from(v.clone())),
            None => Capability::Unsupported,
        }
    }

    fn referenced_parameters(&self) -> Capability<RawDependencies> {
        let refs = self.referenced.clone().unwrap_or_else(|| self.driver.clone());
        Capability::Produced(RawDependencies::Delimited(refs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use param_core::normalize;
    use serde_json::json;

    fn regions() -> CascadeTableProvider {
        let mut table = IndexMap::new();
        table.insert("prod".to_string(), json!(["us-east-1", "us-west-1"]));
        table.insert("dev".to_string(), json!(["local"]));
        CascadeTableProvider::new("env", table)
    }

    #[test]
    fn driver_value_selects_row() {
        let values: CurrentValues = [("env", "prod")].into_iter().collect();
        match regions().render_choices(&values) {
            Capability::Produced(raw) => assert_eq!(normalize(raw), vec!["us-east-1", "us-west-1"]),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn unknown_driver_value_produces_nothing() {
        let values: CurrentValues = [("env", "qa")].into_iter().collect();
        match regions().render_choices(&values) {
            Capability::Produced(raw) => assert!(normalize(raw).is_empty()),
            other => panic!("unexpected {other:?}"),
        }
        assert!(!regions().default_choices().is_supported());
    }
}
