use param_core::{Capability, DynamicProvider, RawResult};
use serde_json::Value;

/// Choices fijas; sólo implementa el fallback sin argumentos.
///
/// Acepta cualquier forma JSON (lista, objeto, lista de `{label, value}`,
/// escalar) y la entrega como `RawResult` para que el core la normalice.
#[derive(Debug, Clone)]
pub struct StaticChoicesProvider {
    choices: Value,
}

impl StaticChoicesProvider {
    pub fn new(choices: Value) -> Self {
        Self { choices }
    }

    pub fn from_list<I, S>(items: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        Self::new(Value::Array(items.into_iter().map(|s| Value::String(s.into())).collect()))
    }
}

impl DynamicProvider for StaticChoicesProvider {
    fn provider_name(&self) -> &str {
        "static"
    }

    fn default_choices(&self) -> Capability<RawResult> {
        Capability::Produced(RawResult::from(self.choices.clone()))
    }
}
