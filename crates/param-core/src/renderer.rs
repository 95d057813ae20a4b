//! Render de un único descriptor.
//!
//! `ParameterRenderer::render` es total: siempre devuelve un
//! `RenderedParameter`. Cualquier fallo queda aislado en `error_message` y en
//! ese caso `choices` va vacío y `current_value` es el default best-effort.

use log::warn;

use crate::dependencies::DependencyExtractor;
use crate::errors::ProviderError;
use crate::invoker::ProviderInvoker;
use crate::model::{CurrentValues, DescriptorKind, JobContext, ParameterDescriptor, RenderedParameter};

#[derive(Debug, Clone, Default)]
pub struct ParameterRenderer {
    extractor: DependencyExtractor,
    invoker: ProviderInvoker,
}

impl ParameterRenderer {
    pub fn new(extractor: DependencyExtractor, invoker: ProviderInvoker) -> Self {
        Self { extractor, invoker }
    }

    pub fn render(&self, descriptor: &ParameterDescriptor, job: &JobContext, values: &CurrentValues) -> RenderedParameter {
        match descriptor.kind() {
            kind if kind.is_dynamic() => self.render_dynamic(descriptor, kind, job, values),
            kind => render_static(descriptor, kind, values),
        }
    }

    fn render_dynamic(&self,
                      descriptor: &ParameterDescriptor,
                      kind: DescriptorKind,
                      job: &JobContext,
                      values: &CurrentValues)
                      -> RenderedParameter {
        let mut out = base(descriptor);
        out.is_dynamic = true;
        out.current_value = values.get(descriptor.name()).unwrap_or_default().to_string();
        out.dependencies = self.extractor.dependencies_of(descriptor);

        let Some(provider) = descriptor.provider() else {
            let error = ProviderError::InvalidHandle(format!("parameter '{}' has no provider", descriptor.name()));
            warn!("render:{} {error}", descriptor.name());
            out.error_message = Some(error.to_string());
            return out;
        };

        match self.invoker.invoke_shared(provider, job, values) {
            Ok(inv) if inv.ok => {
                if kind == DescriptorKind::DynamicReference && inv.content.is_some() {
                    out.data = inv.content;
                } else {
                    out.choices = inv.choices;
                }
            }
            Ok(inv) if inv.all_failed() => {
                let summary = inv.last_failure()
                                 .map(|f| format!("{}: {}", f.candidate, f.error))
                                 .unwrap_or_default();
                warn!("render:{} all {} provider operations failed", descriptor.name(), inv.attempted);
                out.error_message = Some(format!("failed to evaluate '{}' ({summary})", descriptor.name()));
            }
            // Sin choices es un estado legítimo: el provider no tiene nada que ofrecer.
            Ok(_) => {}
            Err(e) => {
                warn!("render:{} invocation aborted: {e}", descriptor.name());
                out.error_message = Some(format!("failed to evaluate '{}' ({e})", descriptor.name()));
            }
        }
        out
    }
}

fn base(descriptor: &ParameterDescriptor) -> RenderedParameter {
    RenderedParameter { name: descriptor.name().to_string(),
                        type_tag: descriptor.type_tag().to_string(),
                        description: descriptor.description().map(str::to_string),
                        current_value: String::new(),
                        input_kind: descriptor.input_kind(),
                        choices: Vec::new(),
                        dependencies: Vec::new(),
                        is_dynamic: false,
                        is_required: descriptor.is_required(),
                        error_message: None,
                        data: None }
}

/// Kinds built-in y no reconocidos: sin provider ni dependencias.
fn render_static(descriptor: &ParameterDescriptor, kind: DescriptorKind, values: &CurrentValues) -> RenderedParameter {
    let mut out = base(descriptor);
    let supplied = values.get(descriptor.name());
    out.current_value = match kind {
        // Nunca se expone un secreto, venga de donde venga.
        DescriptorKind::Password => String::new(),
        DescriptorKind::Choice => supplied.or(descriptor.default_value())
                                          .or(descriptor.choices().first().map(String::as_str))
                                          .unwrap_or_default()
                                          .to_string(),
        DescriptorKind::Boolean => supplied.or(descriptor.default_value()).unwrap_or("false").to_string(),
        _ => supplied.or(descriptor.default_value()).unwrap_or_default().to_string(),
    };
    if kind != DescriptorKind::Unrecognized {
        out.choices = descriptor.choices().to_vec();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use crate::normalize::RawResult;
    use crate::provider::{Capability, DynamicProvider, RawDependencies};
    use std::sync::Arc;

    fn ctx() -> JobContext {
        JobContext::new("demo", None)
    }

    #[derive(Debug)]
    struct Html;
    impl DynamicProvider for Html {
        fn provider_name(&self) -> &str {
            "html"
        }
        fn render_choices(&self, values: &CurrentValues) -> Capability<RawResult> {
            Capability::Produced(RawResult::Scalar(format!("<b>{}</b>", values.get("env").unwrap_or("?")).into()))
        }
        fn referenced_parameters(&self) -> Capability<RawDependencies> {
            Capability::Produced(RawDependencies::Delimited("env".into()))
        }
    }

    #[derive(Debug)]
    struct Broken;
    impl DynamicProvider for Broken {
        fn provider_name(&self) -> &str {
            "broken"
        }
        fn render_choices(&self, _values: &CurrentValues) -> Capability<RawResult> {
            Capability::Failed(ProviderError::evaluation("bad script"))
        }
        fn default_choices(&self) -> Capability<RawResult> {
            Capability::Failed(ProviderError::evaluation("bad fallback"))
        }
    }

    #[test]
    fn password_never_leaks() {
        let d = ParameterDescriptor::password("token").with_default("s3cr3t");
        let values: CurrentValues = [("token", "typed")].into_iter().collect();
        let r = ParameterRenderer::default().render(&d, &ctx(), &values);
        assert_eq!(r.current_value, "");
        assert!(!r.is_dynamic);
    }

    #[test]
    fn choice_defaults_to_first_declared_choice() {
        let d = ParameterDescriptor::choice("env", ["dev", "prod"]);
        let r = ParameterRenderer::default().render(&d, &ctx(), &CurrentValues::new());
        assert_eq!(r.current_value, "dev");
        assert_eq!(r.choices, vec!["dev", "prod"]);
    }

    #[test]
    fn unrecognized_kind_is_plain_text() {
        let d = ParameterDescriptor::new("RunParameterDefinition", "run").with_default("last").with_choices(["x"]);
        let r = ParameterRenderer::default().render(&d, &ctx(), &CurrentValues::new());
        assert_eq!(r.current_value, "last");
        assert!(r.choices.is_empty());
        assert!(r.dependencies.is_empty());
        assert!(!r.is_dynamic);
    }

    #[test]
    fn dynamic_reference_content_goes_to_data() {
        let d = ParameterDescriptor::dynamic(DYNAMIC_REFERENCE_PARAMETER, "info", Arc::new(Html));
        let values: CurrentValues = [("env", "prod")].into_iter().collect();
        let r = ParameterRenderer::default().render(&d, &ctx(), &values);
        assert_eq!(r.data.as_deref(), Some("<b>prod</b>"));
        assert!(r.choices.is_empty());
        assert_eq!(r.dependencies, vec!["env"]);
        assert_eq!(r.error_message, None);
    }

    #[test]
    fn scalar_content_on_choice_kind_is_a_single_choice() {
        let d = ParameterDescriptor::dynamic(DYNAMIC_CHOICE_PARAMETER, "info", Arc::new(Html));
        let r = ParameterRenderer::default().render(&d, &ctx(), &CurrentValues::new());
        assert_eq!(r.choices, vec!["<b>?</b>"]);
        assert_eq!(r.data, None);
    }

    #[test]
    fn all_failing_provider_sets_error() {
        let d = ParameterDescriptor::dynamic(CASCADE_CHOICE_PARAMETER, "region", Arc::new(Broken));
        let values: CurrentValues = [("region", "eu")].into_iter().collect();
        let r = ParameterRenderer::default().render(&d, &ctx(), &values);
        assert!(r.error_message.as_deref().unwrap().contains("bad fallback"));
        assert!(r.choices.is_empty());
        assert_eq!(r.current_value, "eu");
    }

    #[derive(Debug)]
    struct Stuck;
    impl DynamicProvider for Stuck {
        fn provider_name(&self) -> &str {
            "stuck"
        }
        fn default_choices(&self) -> Capability<RawResult> {
            std::thread::sleep(std::time::Duration::from_millis(300));
            Capability::Produced(RawResult::sequence(["late"]))
        }
    }

    #[test]
    fn timed_out_provider_sets_error_and_no_choices() {
        let invoker = ProviderInvoker::with_options(crate::invoker::InvokerOptions {
            timeout: Some(std::time::Duration::from_millis(20)),
        });
        let renderer = ParameterRenderer::new(DependencyExtractor::new(), invoker);
        let d = ParameterDescriptor::dynamic(DYNAMIC_CHOICE_PARAMETER, "slow", Arc::new(Stuck));
        let r = renderer.render(&d, &ctx(), &CurrentValues::new());
        assert!(r.error_message.as_deref().unwrap().contains("slow"));
        assert!(r.choices.is_empty());
    }

    #[test]
    fn dynamic_without_provider_is_an_error() {
        let d = ParameterDescriptor::new(CASCADE_CHOICE_PARAMETER, "region");
        let r = ParameterRenderer::default().render(&d, &ctx(), &CurrentValues::new());
        assert_eq!(r.error_message.as_deref(), Some("invalid provider handle: parameter 'region' has no provider"));
        assert!(r.is_dynamic);
        assert!(r.choices.is_empty());
    }
}
