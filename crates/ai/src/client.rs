//! REST client for the Gemini `generateContent` endpoint.

use serde::{Deserialize, Serialize};

use crate::TextGenerator;

/// Default model when `GEMINI_MODEL` is unset.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default API root when `GEMINI_BASE_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

const API_KEY_HEADER: &str = "x-goog-api-key";

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl GeminiConfig {
    /// Load from environment variables.
    ///
    /// | Env var           | Default                                      |
    /// |-------------------|----------------------------------------------|
    /// | `GEMINI_API_KEY`  | **required**                                 |
    /// | `GEMINI_MODEL`    | `gemini-2.5-flash`                           |
    /// | `GEMINI_BASE_URL` | `https://generativelanguage.googleapis.com`  |
    pub fn from_env() -> Result<Self, AiError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| AiError::Config("GEMINI_API_KEY must be set".into()))?;
        if api_key.trim().is_empty() {
            return Err(AiError::Config("GEMINI_API_KEY must not be empty".into()));
        }

        Ok(Self {
            api_key,
            model: std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into()),
            base_url: std::env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.into())
                .trim_end_matches('/')
                .to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("Invalid AI configuration: {0}")]
    Config(String),

    /// Network, DNS, TLS or body decoding failure. The request URL is
    /// stripped before wrapping.
    #[error("HTTP request failed: {0}")]
    Request(reqwest::Error),

    /// The provider answered with a non-2xx status.
    #[error("Gemini API error ({status}): {body}")]
    ApiError { status: u16, body: String },

    /// The provider answered 2xx but produced no text.
    #[error("Gemini returned an empty response")]
    EmptyResponse,
}

impl From<reqwest::Error> for AiError {
    fn from(err: reqwest::Error) -> Self {
        AiError::Request(err.without_url())
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate, `None` if blank.
    pub(crate) fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

pub struct GeminiClient {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }

    // ---- private helpers ----

    /// The key travels in the `x-goog-api-key` header, never the URL.
    fn request(&self, body: &GenerateRequest<'_>) -> reqwest::RequestBuilder {
        self.client
            .post(self.endpoint())
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(body)
    }

    /// Pass 2xx responses through; turn anything else into
    /// [`AiError::ApiError`] with the body text attached.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, AiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(AiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait::async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, AiError> {
        let body = GenerateRequest {
            contents: [Content {
                parts: [RequestPart { text: prompt }],
            }],
        };

        tracing::debug!(model = %self.config.model, prompt_len = prompt.len(), "Calling Gemini");

        let response = self.request(&body).send().await?;

        let parsed: GenerateResponse = Self::ensure_success(response).await?.json().await?;
        parsed.into_text().ok_or(AiError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: serde_json::Value) -> Option<String> {
        serde_json::from_value::<GenerateResponse>(json)
            .unwrap()
            .into_text()
    }

    #[test]
    fn request_body_shape() {
        let body = GenerateRequest {
            contents: [Content {
                parts: [RequestPart { text: "hello" }],
            }],
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"contents": [{"parts": [{"text": "hello"}]}]})
        );
    }

    #[test]
    fn text_parts_of_first_candidate_are_joined() {
        let text = parse(serde_json::json!({
            "candidates": [
                {"content": {"parts": [{"text": "## Summary\n"}, {"text": "Body"}]}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }));
        assert_eq!(text.as_deref(), Some("## Summary\nBody"));
    }

    #[test]
    fn missing_or_blank_text_is_none() {
        assert_eq!(parse(serde_json::json!({})), None);
        assert_eq!(parse(serde_json::json!({"candidates": [{}]})), None);
        assert_eq!(
            parse(serde_json::json!({"candidates": [{"content": {"parts": [{"text": "  "}]}}]})),
            None
        );
    }

    const SECRET: &str = "SECRET-KEY-123";

    fn client_at(base_url: &str) -> GeminiClient {
        GeminiClient::new(GeminiConfig {
            api_key: SECRET.into(),
            model: DEFAULT_MODEL.into(),
            base_url: base_url.into(),
        })
    }

    #[test]
    fn endpoint_includes_model() {
        assert_eq!(
            client_at("http://localhost:9999").endpoint(),
            "http://localhost:9999/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn api_key_is_sent_as_header_not_query() {
        let body = GenerateRequest {
            contents: [Content {
                parts: [RequestPart { text: "hello" }],
            }],
        };
        let request = client_at("http://localhost:9999").request(&body).build().unwrap();

        assert_eq!(request.url().query(), None);
        assert!(!request.url().as_str().contains(SECRET));
        assert_eq!(request.headers()[API_KEY_HEADER], SECRET);
    }

    #[test]
    fn config_debug_redacts_api_key() {
        let debug = format!("{:?}", client_at("http://localhost:9999").config);
        assert!(!debug.contains(SECRET));
        assert!(debug.contains("<redacted>"));
    }

    #[tokio::test]
    async fn transport_error_text_does_not_leak_api_key() {
        let err = client_at("http://127.0.0.1:1").generate("hello").await.unwrap_err();
        assert!(matches!(err, AiError::Request(_)));
        assert!(!err.to_string().contains(SECRET), "leaked: {err}");
        assert!(!format!("{err:?}").contains(SECRET));
    }
}
