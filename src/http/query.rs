//! Parsing del argumento `params` (`a:1,b:[x,y],c:`).
use param_core::CurrentValues;

/// Convierte la cadena compacta de valores en `CurrentValues`.
///
/// Separa por comas fuera de corchetes y cada entrada en el primer `:`.
/// Un valor `[x, y]` se aplana a `x,y`. Entradas sin `:` o con nombre vacío
/// se ignoran; ante nombres repetidos gana la última.
pub fn parse_params(raw: &str) -> CurrentValues {
    let mut values = CurrentValues::new();
    for entry in split_top_level(raw) {
        let Some((name, value)) = entry.split_once(':') else {
            continue;
        };
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        values.insert(name, normalize_value(value.trim()));
    }
    values
}

fn split_top_level(raw: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in raw.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&raw[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&raw[start..]);
    parts
}

fn normalize_value(value: &str) -> String {
    match value.strip_prefix('[').and_then(|v| v.strip_suffix(']')) {
        Some(inner) => inner.split(',')
                            .map(str::trim)
                            .filter(|s| !s.is_empty())
                            .collect::<Vec<_>>()
                            .join(","),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_scalars_arrays_and_empty_values() {
        let v = parse_params("a:1, b:[x, y] ,c:");
        assert_eq!(v.get("a"), Some("1"));
        assert_eq!(v.get("b"), Some("x,y"));
        assert_eq!(v.get("c"), Some(""));
        assert_eq!(v.len(), 3);
    }

    #[test]
    fn value_keeps_colons_after_the_first() {
        let v = parse_params("url:http://host:8080");
        assert_eq!(v.get("url"), Some("http://host:8080"));
    }

    #[test]
    fn skips_malformed_entries_and_last_wins() {
        let v = parse_params("novalue,:x,env:dev,env:prod,");
        assert_eq!(v.len(), 1);
        assert_eq!(v.get("env"), Some("prod"));
    }

    #[test]
    fn empty_input_is_empty() {
        assert!(parse_params("").is_empty());
        assert!(parse_params("   ").is_empty());
    }
}
