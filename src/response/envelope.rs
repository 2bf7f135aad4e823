use crate::error::DispatchError;
use serde::Serialize;
use serde_json::Value;

/// Exclusion applied to every response: hides type-metadata fields named
/// `class` at any depth.
pub const DEFAULT_EXCLUSION: &str = "*.class";

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBean {
    pub error_message: String,
}

impl ErrorBean {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error_message: message.into(),
        }
    }
}

impl From<&DispatchError> for ErrorBean {
    fn from(err: &DispatchError) -> Self {
        Self::new(err.to_string())
    }
}

/// What gets handed to the serializer: the payload plus the merged
/// exclusion list.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseEnvelope {
    pub payload: Value,
    pub exclusions: Vec<String>,
}

impl ResponseEnvelope {
    /// Wrap a handler result.
    ///
    /// `defaults` always apply; `handler_exclusions` are appended after them.
    #[must_use]
    pub fn success(payload: Value, defaults: &[String], handler_exclusions: Vec<String>) -> Self {
        let mut exclusions = Vec::with_capacity(defaults.len() + handler_exclusions.len());
        exclusions.extend_from_slice(defaults);
        exclusions.extend(handler_exclusions);
        Self {
            payload,
            exclusions,
        }
    }

    /// Wrap an error bean; only the process-wide defaults apply.
    #[must_use]
    pub fn error(bean: ErrorBean, defaults: &[String]) -> Self {
        let payload = serde_json::to_value(&bean).unwrap_or_else(|_| {
            let mut map = serde_json::Map::new();
            map.insert("errorMessage".to_string(), Value::String(bean.error_message));
            Value::Object(map)
        });
        Self {
            payload,
            exclusions: defaults.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_handler_exclusions_appended_to_defaults() {
        let defaults = vec![DEFAULT_EXCLUSION.to_string()];
        let env = ResponseEnvelope::success(
            json!({}),
            &defaults,
            vec!["moons.mass".to_string(), "secret".to_string()],
        );
        assert_eq!(env.exclusions, vec!["*.class", "moons.mass", "secret"]);
    }

    #[test]
    fn test_empty_handler_exclusions_keep_defaults() {
        let defaults = vec![DEFAULT_EXCLUSION.to_string()];
        let env = ResponseEnvelope::success(json!(1), &defaults, Vec::new());
        assert_eq!(env.exclusions, defaults);
    }

    #[test]
    fn test_error_bean_shape() {
        let env = ResponseEnvelope::error(ErrorBean::new("boom"), &[]);
        assert_eq!(env.payload, json!({ "errorMessage": "boom" }));
        assert!(env.exclusions.is_empty());
    }
}
