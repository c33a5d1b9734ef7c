//! Prompt template row model.

use sqlx::types::Json;
use sqlx::FromRow;

use quadwords_core::types::{PromptConfig, PromptTemplate};

/// A row from the `prompts` table. Rows are append-only; the latest
/// `created_at` for a `prompt_id` is the live version.
#[derive(Debug, FromRow)]
pub struct PromptRow {
    pub config: Json<PromptConfig>,
    pub contents: String,
}

impl PromptRow {
    pub fn into_template(self) -> PromptTemplate {
        PromptTemplate { config: self.config.0, contents: self.contents }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_converts_to_template() {
        let row = PromptRow {
            config: Json(PromptConfig {
                anthropic_version: "bedrock-2023-05-31".to_string(),
                max_tokens: 2048,
                model: "test-model".to_string(),
                temperature: 1.0,
                top_k: 250,
            }),
            contents: "Generate ${context}".to_string(),
        };

        let template = row.into_template();
        assert_eq!(template.config.max_tokens, 2048);
        assert_eq!(template.contents, "Generate ${context}");
    }

    #[test]
    fn config_column_uses_camel_case_keys() {
        let json = serde_json::json!({
            "anthropicVersion": "bedrock-2023-05-31",
            "maxTokens": 256,
            "model": "test-model",
            "temperature": 0.5,
            "topK": 250,
        });

        let config: PromptConfig = serde_json::from_value(json).unwrap();
        assert_eq!(config.top_k, 250);
        assert_eq!(config.anthropic_version, "bedrock-2023-05-31");
    }
}
