use serde::{Deserialize, Serialize};

/// Error body of the external API (`{"detail": ...}`).
///
/// `detail` is usually a string but validation failures carry a structured
/// value, so it is kept as raw JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) if s.trim().is_empty() => None,
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_detail() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail":"Arquivo inválido"}"#).unwrap();
        assert_eq!(body.message().as_deref(), Some("Arquivo inválido"));
    }

    #[test]
    fn test_structured_detail() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail":[{"loc":["body"]}]}"#).unwrap();
        assert_eq!(body.message().as_deref(), Some(r#"[{"loc":["body"]}]"#));
    }

    #[test]
    fn test_no_detail() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.message(), None);
    }
}
