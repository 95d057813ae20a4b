use serde::Serialize;

/// Sobre de respuesta: `{success, data}` o `{success: false, error}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self { success: true, data: Some(data), error: None }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self { success: false, data: None, error: Some(error.into()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn shapes() {
        assert_eq!(serde_json::to_value(Envelope::ok(1)).unwrap(), json!({"success": true, "data": 1}));
        assert_eq!(serde_json::to_value(Envelope::<()>::failure("boom")).unwrap(),
                   json!({"success": false, "error": "boom"}));
    }
}
