use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, Result};

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct MoodRequest {
    pub moods: Vec<String>,
    pub story: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MoodResponse {
    pub inferred_moods: Vec<String>,
    pub ai_text: String,
}

impl MoodRequest {
    /// Accepts a JSON object, or a JSON string holding the object as text.
    /// An empty body or `null` yields the defaults.
    pub fn from_body(body: &[u8]) -> Result<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        let value: Value =
            serde_json::from_slice(body).map_err(|e| AppError::InvalidBody(e.to_string()))?;
        let value = match value {
            Value::String(text) if text.trim().is_empty() => Value::Null,
            Value::String(text) => {
                serde_json::from_str(&text).map_err(|e| AppError::InvalidBody(e.to_string()))?
            }
            other => other,
        };
        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(_) => {
                serde_json::from_value(value).map_err(|e| AppError::InvalidBody(e.to_string()))
            }
            _ => Err(AppError::InvalidBody("expected a JSON object".into())),
        }
    }
}
