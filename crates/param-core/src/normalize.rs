//! Normalización de resultados de providers.
//!
//! Los providers devuelven formas heterogéneas; aquí se modelan como una unión
//! cerrada (`RawResult`) con una función de conversión por variante. Todas
//! preservan el orden de origen y ninguna falla: lo irreconocible cae en la
//! rama `Opaque`.

use std::fmt;

use indexmap::IndexMap;
use serde_json::Value;

/// Valor escalar devuelto por un provider.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    /// Forma string del escalar; `Null` es la cadena vacía.
    pub fn to_choice(&self) -> String {
        match self {
            Scalar::Null => String::new(),
            Scalar::Bool(b) => b.to_string(),
            Scalar::Int(i) => i.to_string(),
            Scalar::Float(f) => f.to_string(),
            Scalar::Text(s) => s.clone(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Text(s)
    }
}

impl From<i64> for Scalar {
    fn from(i: i64) -> Self {
        Scalar::Int(i)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

/// Par (etiqueta visible, valor subyacente).
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledOption {
    pub label: String,
    pub value: String,
}

impl LabeledOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self { label: label.into(), value: value.into() }
    }
}

/// Forma cruda del resultado de un provider.
pub enum RawResult {
    Null,
    /// Secuencia ordenada de escalares.
    Sequence(Vec<Scalar>),
    /// Mapeo clave -> valor en orden de inserción; un valor `None` cae a la clave.
    Mapping(IndexMap<String, Option<Scalar>>),
    Labeled(Vec<LabeledOption>),
    /// Arreglo de tamaño fijo.
    Array(Box<[Scalar]>),
    /// Cualquier otra colección finita, en su orden nativo de enumeración.
    Collection(Vec<Scalar>),
    Scalar(Scalar),
    Opaque(Box<dyn fmt::Display + Send + Sync>),
}

impl RawResult {
    /// Toma una colección cualquiera respetando el orden en que la enumera
    /// (sin reordenar, aunque sea un set sin orden definido).
    pub fn from_collection<I, S>(items: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<Scalar>
    {
        RawResult::Collection(items.into_iter().map(Into::into).collect())
    }

    pub fn sequence<I, S>(items: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<Scalar>
    {
        RawResult::Sequence(items.into_iter().map(Into::into).collect())
    }

    pub fn opaque<D>(value: D) -> Self
        where D: fmt::Display + Send + Sync + 'static
    {
        RawResult::Opaque(Box::new(value))
    }

    /// `false` para contenido libre (escalar u objeto opaco).
    pub fn is_choice_list(&self) -> bool {
        !matches!(self, RawResult::Scalar(_) | RawResult::Opaque(_))
    }

    fn shape(&self) -> &'static str {
        match self {
            RawResult::Null => "null",
            RawResult::Sequence(_) => "sequence",
            RawResult::Mapping(_) => "mapping",
            RawResult::Labeled(_) => "labeled",
            RawResult::Array(_) => "array",
            RawResult::Collection(_) => "collection",
            RawResult::Scalar(_) => "scalar",
            RawResult::Opaque(_) => "opaque",
        }
    }
}

impl fmt::Debug for RawResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawResult::Opaque(o) => write!(f, "Opaque({})", display_lossy(o.as_ref())),
            other => write!(f, "{}({:?})", other.shape(), normalize_ref(other)),
        }
    }
}

impl From<Vec<String>> for RawResult {
    fn from(items: Vec<String>) -> Self {
        RawResult::sequence(items)
    }
}

impl From<Value> for RawResult {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => RawResult::Null,
            Value::Array(items) if !items.is_empty() && items.iter().all(is_labeled_object) => {
                RawResult::Labeled(items.iter().map(labeled_from_json).collect())
            }
            Value::Array(items) => RawResult::Sequence(items.into_iter().map(scalar_from_json).collect()),
            Value::Object(map) => RawResult::Mapping(map.into_iter()
                                                        .map(|(k, v)| {
                                                            let v = match v {
                                                                Value::Null => None,
                                                                other => Some(scalar_from_json(other)),
                                                            };
                                                            (k, v)
                                                        })
                                                        .collect()),
            other => RawResult::Scalar(scalar_from_json(other)),
        }
    }
}

fn is_labeled_object(v: &Value) -> bool {
    v.as_object().is_some_and(|o| o.contains_key("label") && o.contains_key("value"))
}

fn labeled_from_json(v: &Value) -> LabeledOption {
    let field = |k: &str| v.get(k).map(|x| scalar_from_json(x.clone()).to_choice()).unwrap_or_default();
    LabeledOption::new(field("label"), field("value"))
}

/// Escalares JSON; arrays u objetos anidados se conservan como texto JSON.
fn scalar_from_json(v: Value) -> Scalar {
    match v {
        Value::Null => Scalar::Null,
        Value::Bool(b) => Scalar::Bool(b),
        // Texto tal como vino: sin pasar por f64 (u64 grandes, `1.0`).
        Value::Number(n) => Scalar::Text(n.to_string()),
        Value::String(s) => Scalar::Text(s),
        nested => Scalar::Text(nested.to_string()),
    }
}

/// Normaliza cualquier forma cruda a una lista ordenada de choices.
pub fn normalize(raw: RawResult) -> Vec<String> {
    normalize_ref(&raw)
}

fn normalize_ref(raw: &RawResult) -> Vec<String> {
    match raw {
        RawResult::Null => Vec::new(),
        RawResult::Sequence(items) | RawResult::Collection(items) => stringify_all(items),
        RawResult::Array(items) => stringify_all(items),
        RawResult::Mapping(map) => map.iter()
                                      .map(|(key, value)| match value {
                                          Some(v) if !v.is_null() => v.to_choice(),
                                          _ => key.clone(),
                                      })
                                      .collect(),
        RawResult::Labeled(options) => options.iter()
                                              .map(|o| if o.value.is_empty() { o.label.clone() } else { o.value.clone() })
                                              .collect(),
        RawResult::Scalar(s) => single(s.to_choice()),
        RawResult::Opaque(o) => single(display_lossy(o.as_ref())),
    }
}

/// `Display` de un objeto opaco; un `fmt::Error` produce la cadena vacía.
pub(crate) fn display_lossy(value: &(dyn fmt::Display + Send + Sync)) -> String {
    let mut out = String::new();
    match fmt::write(&mut out, format_args!("{value}")) {
        Ok(()) => out,
        Err(_) => String::new(),
    }
}

fn stringify_all(items: &[Scalar]) -> Vec<String> {
    items.iter().map(Scalar::to_choice).collect()
}

fn single(s: String) -> Vec<String> {
    if s.is_empty() {
        Vec::new()
    } else {
        vec![s]
    }
}
