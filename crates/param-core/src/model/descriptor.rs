//! Descriptor de parámetro (entrada de sólo lectura, propiedad del job).

use std::fmt;
use std::sync::Arc;

use crate::constants::*;
use crate::model::kind::{input_kind_of, InputKind};
use crate::provider::DynamicProvider;

/// Familia del descriptor, derivada de su type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DescriptorKind {
    String,
    Text,
    Boolean,
    Choice,
    Password,
    DynamicChoice,
    CascadeChoice,
    DynamicReference,
    /// Tipo desconocido: se renderiza como texto libre.
    Unrecognized,
}

impl DescriptorKind {
    /// Clasifica un type tag. Acepta tags calificados (`hudson.model.X`,
    /// `org.x.Outer$X`) comparando sólo el nombre simple.
    pub fn from_type_tag(type_tag: &str) -> Self {
        let simple = type_tag.rsplit(['.', '$']).next().unwrap_or(type_tag);
        match simple {
            STRING_PARAMETER => DescriptorKind::String,
            TEXT_PARAMETER => DescriptorKind::Text,
            BOOLEAN_PARAMETER => DescriptorKind::Boolean,
            CHOICE_PARAMETER => DescriptorKind::Choice,
            PASSWORD_PARAMETER => DescriptorKind::Password,
            DYNAMIC_CHOICE_PARAMETER => DescriptorKind::DynamicChoice,
            CASCADE_CHOICE_PARAMETER => DescriptorKind::CascadeChoice,
            DYNAMIC_REFERENCE_PARAMETER => DescriptorKind::DynamicReference,
            _ => DescriptorKind::Unrecognized,
        }
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self,
                 DescriptorKind::DynamicChoice | DescriptorKind::CascadeChoice | DescriptorKind::DynamicReference)
    }
}

/// Definición declarativa de un parámetro de job.
///
/// El core nunca la muta; los builders `with_*` sólo se usan al construirla.
#[derive(Clone)]
pub struct ParameterDescriptor {
    type_tag: String,
    name: String,
    description: Option<String>,
    default_value: Option<String>,
    choices: Vec<String>,
    required: bool,
    provider: Option<Arc<dyn DynamicProvider>>,
}

impl ParameterDescriptor {
    pub fn new(type_tag: impl Into<String>, name: impl Into<String>) -> Self {
        Self { type_tag: type_tag.into(),
               name: name.into(),
               description: None,
               default_value: None,
               choices: Vec::new(),
               required: false,
               provider: None }
    }

    pub fn string(name: impl Into<String>, default_value: impl Into<String>) -> Self {
        Self::new(STRING_PARAMETER, name).with_default(default_value)
    }

    pub fn choice<I, S>(name: impl Into<String>, choices: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        Self::new(CHOICE_PARAMETER, name).with_choices(choices)
    }

    pub fn password(name: impl Into<String>) -> Self {
        Self::new(PASSWORD_PARAMETER, name)
    }

    pub fn dynamic(type_tag: impl Into<String>, name: impl Into<String>, provider: Arc<dyn DynamicProvider>) -> Self {
        Self::new(type_tag, name).with_provider(provider)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_default(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    pub fn with_choices<I, S>(mut self, choices: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        self.choices = choices.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_provider(mut self, provider: Arc<dyn DynamicProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    // Getters
    pub fn type_tag(&self) -> &str {
        &self.type_tag
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn provider(&self) -> Option<&Arc<dyn DynamicProvider>> {
        self.provider.as_ref()
    }

    pub fn kind(&self) -> DescriptorKind {
        DescriptorKind::from_type_tag(&self.type_tag)
    }

    pub fn input_kind(&self) -> InputKind {
        input_kind_of(&self.type_tag)
    }
}

impl fmt::Debug for ParameterDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParameterDescriptor")
         .field("type_tag", &self.type_tag)
         .field("name", &self.name)
         .field("default_value", &self.default_value)
         .field("choices", &self.choices)
         .field("required", &self.required)
         .field("provider", &self.provider.as_ref().map(|p| p.provider_name().to_string()))
         .finish()
    }
}
