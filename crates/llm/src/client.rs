//! HTTP client for an Anthropic-messages-compatible completion endpoint.
//!
//! Invocations go to `POST {base}/model/{model}/invoke` with the request
//! body shape Bedrock uses for Anthropic models. The reply's first content
//! block is stripped of reasoning noise and parsed into a candidate puzzle.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use quadwords_core::context::ModelContext;
use quadwords_core::error::ModelError;
use quadwords_core::model::ModelClient;
use quadwords_core::types::{CandidatePuzzle, PromptTemplate};

use crate::strip::strip_completion_noise;

/// Placeholder in prompt contents replaced by the JSON-serialized context.
const CONTEXT_PLACEHOLDER: &str = "${context}";

/// Connection settings for the completion endpoint.
///
/// | Env Var | Default | Description |
/// |---------|---------|-------------|
/// | `LLM_API_URL` | *(required)* | Base URL of the completion endpoint |
/// | `LLM_API_KEY` | *(none)* | Sent as `x-api-key` when present |
/// | `LLM_REQUEST_TIMEOUT_SECS` | `120` | Per-invocation timeout |
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_url: String,
    pub api_key: Option<String>,
    pub request_timeout_secs: u64,
}

impl LlmConfig {
    pub fn from_env() -> Self {
        Self {
            api_url: std::env::var("LLM_API_URL").expect("LLM_API_URL must be set"),
            api_key: std::env::var("LLM_API_KEY").ok(),
            request_timeout_secs: std::env::var("LLM_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(120),
        }
    }
}

/// Errors from the completion endpoint itself.
#[derive(Debug, thiserror::Error)]
pub enum LlmApiError {
    /// The HTTP request failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint returned a non-2xx status code.
    #[error("completion endpoint error ({status}): {body}")]
    Api { status: u16, body: String },
}

impl From<LlmApiError> for ModelError {
    fn from(err: LlmApiError) -> Self {
        ModelError::Backend(err.into())
    }
}

/// One content block of a messages-API response.
#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    content: Vec<ContentBlock>,
}

/// Production [`ModelClient`].
pub struct HttpModelClient {
    client: reqwest::Client,
    config: LlmConfig,
}

impl HttpModelClient {
    pub fn new(config: LlmConfig) -> Self {
        Self { client: reqwest::Client::new(), config }
    }

    /// Reuses an existing [`reqwest::Client`] for connection pooling.
    pub fn with_client(client: reqwest::Client, config: LlmConfig) -> Self {
        Self { client, config }
    }

    /// Renders the prompt contents, substituting the serialized context
    /// where the template references it.
    fn render_contents(
        template: &PromptTemplate,
        context: Option<&ModelContext>,
    ) -> Result<String, ModelError> {
        match context {
            Some(context) => {
                let json = serde_json::to_string(context).map_err(anyhow::Error::from)?;
                Ok(template.contents.replace(CONTEXT_PLACEHOLDER, &json))
            }
            None => Ok(template.contents.clone()),
        }
    }

    fn request_body(template: &PromptTemplate, contents: &str) -> serde_json::Value {
        serde_json::json!({
            "anthropic_version": template.config.anthropic_version,
            "max_tokens": template.config.max_tokens,
            "messages": [{
                "content": contents,
                "role": "user",
            }],
            "temperature": template.config.temperature,
            "top_k": template.config.top_k,
        })
    }

    async fn invoke(
        &self,
        template: &PromptTemplate,
        body: &serde_json::Value,
    ) -> Result<CompletionResponse, LlmApiError> {
        let url = format!("{}/model/{}/invoke", self.config.api_url, template.config.model);
        let mut request = self
            .client
            .post(&url)
            .timeout(Duration::from_secs(self.config.request_timeout_secs))
            .json(body);
        if let Some(api_key) = &self.config.api_key {
            request = request.header("x-api-key", api_key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(LlmApiError::Api { status: status.as_u16(), body });
        }
        Ok(response.json::<CompletionResponse>().await?)
    }

    fn extract_text(response: CompletionResponse) -> Result<String, ModelError> {
        response
            .content
            .into_iter()
            .next()
            .map(|block| block.text)
            .ok_or_else(|| ModelError::MalformedCompletion {
                detail: "completion contained no content blocks".to_string(),
                snippet: String::new(),
            })
    }

    fn parse_candidate(text: &str) -> Result<CandidatePuzzle, ModelError> {
        let stripped = strip_completion_noise(text);
        serde_json::from_str(&stripped).map_err(|err| ModelError::MalformedCompletion {
            detail: err.to_string(),
            snippet: stripped.chars().take(80).collect(),
        })
    }
}

#[async_trait]
impl ModelClient for HttpModelClient {
    async fn generate(
        &self,
        template: &PromptTemplate,
        context: Option<&ModelContext>,
    ) -> Result<CandidatePuzzle, ModelError> {
        let contents = Self::render_contents(template, context)?;
        let body = Self::request_body(template, &contents);

        let invocation_id = uuid::Uuid::new_v4();
        tracing::debug!(
            %invocation_id,
            model = %template.config.model,
            prompt_chars = contents.len(),
            "Invoking completion model"
        );

        let response = self.invoke(template, &body).await?;
        let text = Self::extract_text(response)?;
        tracing::debug!(%invocation_id, completion_chars = text.len(), "Received completion");

        Self::parse_candidate(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use quadwords_core::types::PromptConfig;

    fn template() -> PromptTemplate {
        PromptTemplate {
            config: PromptConfig {
                anthropic_version: "bedrock-2023-05-31".to_string(),
                max_tokens: 256,
                model: "test-model".to_string(),
                temperature: 0.5,
                top_k: 250,
            },
            contents: "Generate a puzzle.\nContext: ${context}\nRespond with JSON.".to_string(),
        }
    }

    fn context() -> ModelContext {
        ModelContext {
            disallowed_categories: vec!["Boast".to_string()],
            inspiration_adjectives: vec!["balmy".to_string()],
            inspiration_nouns: vec!["anchor".to_string()],
            inspiration_verbs: vec!["shiver".to_string()],
            word_constraints: None,
            category_constraints: None,
        }
    }

    #[test]
    fn renders_the_context_into_the_placeholder() {
        let contents = HttpModelClient::render_contents(&template(), Some(&context())).unwrap();
        assert!(contents.starts_with("Generate a puzzle."));
        assert!(contents.contains(r#""disallowedCategories":["Boast"]"#));
        assert!(!contents.contains("${context}"));
    }

    #[test]
    fn templates_without_context_render_verbatim() {
        let contents = HttpModelClient::render_contents(&template(), None).unwrap();
        assert_eq!(contents, template().contents);
    }

    #[test]
    fn request_body_carries_the_prompt_config() {
        let body = HttpModelClient::request_body(&template(), "hello");
        assert_eq!(body["anthropic_version"], "bedrock-2023-05-31");
        assert_eq!(body["max_tokens"], 256);
        assert_eq!(body["temperature"], 0.5);
        assert_eq!(body["top_k"], 250);
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "hello");
        // The model name routes the request; it is not part of the body.
        assert!(body.get("model").is_none());
    }

    #[test]
    fn parses_a_fenced_candidate() {
        let text = "```json\n{\"categories\": {\"Boast\": {\"hint\": \"Show off\", \"words\": [\"crow\", \"gloat\", \"preen\", \"strut\"]}}}\n```";
        let candidate = HttpModelClient::parse_candidate(text).unwrap();
        assert_eq!(candidate.categories.len(), 1);
        assert_eq!(candidate.categories["Boast"].words.len(), 4);
    }

    #[test]
    fn rejects_text_that_is_not_a_candidate() {
        let result = HttpModelClient::parse_candidate("I could not think of a puzzle today.");
        assert_matches!(
            result,
            Err(ModelError::MalformedCompletion { snippet, .. }) if snippet.starts_with("I could not")
        );
    }

    #[test]
    fn rejects_an_empty_content_list() {
        let response = CompletionResponse { content: Vec::new() };
        assert_matches!(
            HttpModelClient::extract_text(response),
            Err(ModelError::MalformedCompletion { .. })
        );
    }

    #[test]
    fn takes_the_first_content_block() {
        let response = CompletionResponse {
            content: vec![
                ContentBlock { text: "first".to_string() },
                ContentBlock { text: "second".to_string() },
            ],
        };
        assert_eq!(HttpModelClient::extract_text(response).unwrap(), "first");
    }
}
