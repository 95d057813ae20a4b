use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Valores actuales de los parámetros (nombre -> valor) para una pasada de
/// render. Se preserva el orden de inserción; una clave ausente significa
/// "usar el default".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrentValues(IndexMap<String, String>);

impl CurrentValues {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Inserta o reemplaza. Reemplazar conserva la posición original.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for CurrentValues
    where K: Into<String>,
          V: Into<String>
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order_and_last_write() {
        let mut v: CurrentValues = [("b", "1"), ("a", "2")].into_iter().collect();
        v.insert("b", "3");
        let pairs: Vec<_> = v.iter().collect();
        assert_eq!(pairs, vec![("b", "3"), ("a", "2")]);
        assert_eq!(v.get("missing"), None);
    }
}
