/// Gemini Client — the single point of entry for all generative-language calls
/// in Souschef.
///
/// ARCHITECTURAL RULE: No other module may call the Gemini API directly.
/// All model interactions MUST go through this module.
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// The flash-tier model. Used for weekly plan generation and default chat.
pub const FLASH_MODEL: &str = "gemini-2.0-flash";
/// The pro-tier model. Used for "chef_brain" chat and recipe card generation.
pub const PRO_MODEL: &str = "gemini-2.0-pro";

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
}

#[derive(Debug, serde::Deserialize)]
struct GeminiApiError {
    error: GeminiApiErrorBody,
}

#[derive(Debug, serde::Deserialize)]
struct GeminiApiErrorBody {
    message: String,
}

/// The single Gemini client used by all generation operations.
/// Wraps `models/{model}:generateContent` and returns the raw response body.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, GEMINI_API_BASE.to_string())
    }

    /// Same as `new` but with an overridden endpoint base. The test suite
    /// points this at an unreachable address to exercise the failure path.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            base_url,
        }
    }

    /// POSTs a single-part text prompt to `{model}:generateContent` and returns
    /// the raw response body, unparsed. `json_response` adds the
    /// `responseMimeType: application/json` generation config directive.
    ///
    /// Any transport or remote-side failure maps to one `GeminiError`; there is
    /// no retry. The API key travels only as a query parameter and is never
    /// logged.
    pub async fn generate_content(
        &self,
        model: &str,
        prompt: &str,
        json_response: bool,
    ) -> Result<String, GeminiError> {
        let request_body = build_request_body(prompt, json_response);
        let url = format!("{}/{}:generateContent", self.base_url, model);

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Try to parse error message
            let message = serde_json::from_str::<GeminiApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;

        debug!("Gemini call succeeded: model={model}, response_bytes={}", body.len());

        Ok(body)
    }
}

fn build_request_body(prompt: &str, json_response: bool) -> GenerateContentRequest<'_> {
    GenerateContentRequest {
        contents: vec![Content {
            parts: vec![Part { text: prompt }],
        }],
        generation_config: json_response.then_some(GenerationConfig {
            response_mime_type: "application/json",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body_wraps_prompt_in_single_part() {
        let body = build_request_body("hello chef", false);
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            json!({
                "contents": [{"parts": [{"text": "hello chef"}]}]
            })
        );
    }

    #[test]
    fn test_request_body_json_flag_adds_generation_config() {
        let body = build_request_body("plan my week", true);
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value["generationConfig"]["responseMimeType"],
            json!("application/json")
        );
        assert_eq!(value["contents"][0]["parts"][0]["text"], json!("plan my week"));
    }

    #[test]
    fn test_request_body_omits_generation_config_without_json_flag() {
        let body = build_request_body("just chat", false);
        let value = serde_json::to_value(&body).unwrap();
        assert!(value.get("generationConfig").is_none());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_surfaces_single_error() {
        // Nothing listens on this address; the call must fail with one
        // GeminiError and no partial body.
        let client = GeminiClient::with_base_url(
            "test-key".to_string(),
            "http://127.0.0.1:9".to_string(),
        );

        let result = client.generate_content(FLASH_MODEL, "prompt", false).await;
        let err = result.expect_err("expected transport failure");
        assert!(matches!(err, GeminiError::Http(_)));
        assert!(!err.to_string().is_empty());
    }
}
