//! Wire types for the Groq generation endpoint

use serde::{Deserialize, Serialize};

/// Request body sent to the generation endpoint.
///
/// All sampling parameters are fixed by configuration; only `prompt` and
/// `max_tokens` come from the caller. `stop` is always serialized as
/// `null`, matching the upstream contract.
#[derive(Debug, Serialize)]
pub struct GenerateRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub max_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
    pub n: u32,
    pub stop: Option<String>,
}

/// Successful upstream response: `{ "choices": [{ "text": ... }] }`
#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerateResponse {
    /// The first completion's text, or the empty string if absent.
    pub fn first_text(self) -> String {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.text)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_fixed_parameters() {
        let request = GenerateRequest {
            model: "meta-llama/llama-4-maverick-17b-128e-instruct",
            prompt: "Создай викторину",
            max_tokens: 1500,
            temperature: 0.7,
            top_p: 0.9,
            n: 1,
            stop: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value["model"],
            "meta-llama/llama-4-maverick-17b-128e-instruct"
        );
        assert_eq!(value["max_tokens"], 1500);
        assert_eq!(value["temperature"], 0.7);
        assert_eq!(value["top_p"], 0.9);
        assert_eq!(value["n"], 1);
        // stop must be present and null, not omitted
        assert!(value.as_object().unwrap().contains_key("stop"));
        assert!(value["stop"].is_null());
    }

    #[test]
    fn test_first_text_extraction() {
        let response: GenerateResponse =
            serde_json::from_str(r#"{"choices": [{"text": "[]"}, {"text": "ignored"}]}"#).unwrap();
        assert_eq!(response.first_text(), "[]");
    }

    #[test]
    fn test_missing_choices_yield_empty_string() {
        let response: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.first_text(), "");

        let response: GenerateResponse =
            serde_json::from_str(r#"{"choices": [{}]}"#).unwrap();
        assert_eq!(response.first_text(), "");
    }
}
