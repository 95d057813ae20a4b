use param_core::{Capability, CurrentValues, DynamicProvider, RawDependencies, RawResult, Scalar};

/// Contenido libre (markup) con placeholders `${nombre}` sustituidos por los
/// valores actuales. Un placeholder sin valor se reemplaza por "".
#[derive(Debug, Clone)]
pub struct ReferenceTemplateProvider {
    template: String,
}

impl ReferenceTemplateProvider {
    pub fn new(template: impl Into<String>) -> Self {
        Self { template: template.into() }
    }

    /// Nombres de los placeholders en orden de aparición (con repeticiones).
    pub fn placeholders(&self) -> Vec<String> {
        let mut out = Vec::new();
        let mut rest = self.template.as_str();
        while let Some(start) = rest.find("${") {
            let after = &rest[start + 2..];
            let Some(end) = after.find('}') else { break };
            out.push(after[..end].trim().to_string());
            rest = &after[end + 1..];
        }
        out
    }

    pub fn expand(&self, values: &CurrentValues) -> String {
        let mut out = String::with_capacity(self.template.len());
        let mut rest = self.template.as_str();
        while let Some(start) = rest.find("${") {
            let after = &rest[start + 2..];
            let Some(end) = after.find('}') else { break };
            out.push_str(&rest[..start]);
            out.push_str(values.get(after[..end].trim()).unwrap_or_default());
            rest = &after[end + 1..];
        }
        out.push_str(rest);
        out
    }
}

impl DynamicProvider for ReferenceTemplateProvider {
    fn provider_name(&self) -> &str {
        "referenceTemplate"
    }

    fn render_choices(&self, values: &CurrentValues) -> Capability<RawResult> {
        Capability::Produced(RawResult::Scalar(Scalar::Text(self.expand(values))))
    }

    fn referenced_parameters(&self) -> Capability<RawDependencies> {
        Capability::Produced(RawDependencies::Array(self.placeholders().into_boxed_slice()))
    }
}
