//! Clasificación del tipo de input a partir del type tag del descriptor.
//!
//! La clasificación es puramente textual: nunca depende del contenido
//! renderizado. El orden de las reglas importa (p.ej. `CascadeChoiceParameter`
//! contiene `Choice` pero debe clasificarse como `cascade-select`).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputKind {
    Text,
    Textarea,
    Select,
    Checkbox,
    Password,
    CascadeSelect,
    DynamicReference,
    File,
    Hidden,
    MultiSelect,
    Radio,
}

impl InputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Textarea => "textarea",
            InputKind::Select => "select",
            InputKind::Checkbox => "checkbox",
            InputKind::Password => "password",
            InputKind::CascadeSelect => "cascade-select",
            InputKind::DynamicReference => "dynamic-reference",
            InputKind::File => "file",
            InputKind::Hidden => "hidden",
            InputKind::MultiSelect => "multi-select",
            InputKind::Radio => "radio",
        }
    }
}

/// Reglas (keywords, kind) evaluadas en orden; gana la primera coincidencia.
const RULES: &[(&[&str], InputKind)] = &[(&["Password"], InputKind::Password),
                                         (&["Boolean"], InputKind::Checkbox),
                                         (&["Cascade"], InputKind::CascadeSelect),
                                         (&["DynamicReference"], InputKind::DynamicReference),
                                         (&["File"], InputKind::File),
                                         (&["Hidden", "Hide"], InputKind::Hidden),
                                         (&["MultiSelect", "ExtendedChoice"], InputKind::MultiSelect),
                                         (&["Radio"], InputKind::Radio),
                                         (&["Choice"], InputKind::Select),
                                         (&["MultiLineString", "Text"], InputKind::Textarea)];

/// Deriva el `InputKind` de un type tag. Cualquier tag no reconocido es `text`.
pub fn input_kind_of(type_tag: &str) -> InputKind {
    RULES.iter()
         .find(|(keywords, _)| keywords.iter().any(|k| type_tag.contains(k)))
         .map(|(_, kind)| *kind)
         .unwrap_or(InputKind::Text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tags_map_to_expected_kinds() {
        assert_eq!(input_kind_of("StringParameterDefinition"), InputKind::Text);
        assert_eq!(input_kind_of("TextParameterDefinition"), InputKind::Textarea);
        assert_eq!(input_kind_of("BooleanParameterDefinition"), InputKind::Checkbox);
        assert_eq!(input_kind_of("ChoiceParameterDefinition"), InputKind::Select);
        assert_eq!(input_kind_of("PasswordParameterDefinition"), InputKind::Password);
    }

    #[test]
    fn extension_tags_map_to_expected_kinds() {
        assert_eq!(input_kind_of("ChoiceParameter"), InputKind::Select);
        assert_eq!(input_kind_of("CascadeChoiceParameter"), InputKind::CascadeSelect);
        assert_eq!(input_kind_of("DynamicReferenceParameter"), InputKind::DynamicReference);
        assert_eq!(input_kind_of("ExtendedChoiceParameterDefinition"), InputKind::MultiSelect);
        assert_eq!(input_kind_of("WHideParameterDefinition"), InputKind::Hidden);
        assert_eq!(input_kind_of("FileParameterDefinition"), InputKind::File);
        assert_eq!(input_kind_of("RadioButtonParameter"), InputKind::Radio);
    }

    #[test]
    fn unknown_tag_is_text() {
        assert_eq!(input_kind_of("RunParameterDefinition"), InputKind::Text);
        assert_eq!(input_kind_of(""), InputKind::Text);
    }

    #[test]
    fn serializes_as_kebab_case() {
        let s = serde_json::to_string(&InputKind::CascadeSelect).unwrap();
        assert_eq!(s, "\"cascade-select\"");
        assert_eq!(InputKind::MultiSelect.as_str(), "multi-select");
    }
}
