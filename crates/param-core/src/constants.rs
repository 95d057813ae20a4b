//! Constantes del motor de renderizado.
//!
//! Agrupa los type tags conocidos (built-in y de la extensión) y el nombre de
//! tipo que el detector resuelve para detectar la extensión.

/// Tipo bien conocido que debe resolver el locator para considerar que la
/// extensión de parámetros dinámicos está instalada.
pub const WELL_KNOWN_EXTENSION_TYPE: &str = "CascadeChoiceParameter";

pub const STRING_PARAMETER: &str = "StringParameterDefinition";
pub const TEXT_PARAMETER: &str = "TextParameterDefinition";
pub const BOOLEAN_PARAMETER: &str = "BooleanParameterDefinition";
pub const CHOICE_PARAMETER: &str = "ChoiceParameterDefinition";
pub const PASSWORD_PARAMETER: &str = "PasswordParameterDefinition";

pub const DYNAMIC_CHOICE_PARAMETER: &str = "ChoiceParameter";
pub const CASCADE_CHOICE_PARAMETER: &str = "CascadeChoiceParameter";
pub const DYNAMIC_REFERENCE_PARAMETER: &str = "DynamicReferenceParameter";

/// Sufijo que se concatena a la URL relativa del job para lanzar un build.
pub const BUILD_WITH_PARAMETERS: &str = "buildWithParameters";
