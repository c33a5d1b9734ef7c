//! Repository for the `prompts` table.

use async_trait::async_trait;
use sqlx::PgPool;

use quadwords_core::error::StoreError;
use quadwords_core::store::PromptStore;
use quadwords_core::types::PromptTemplate;

use crate::models::prompt::PromptRow;

/// Postgres-backed [`PromptStore`]. Versions of a prompt share a
/// `prompt_id`; lookups always take the newest row.
#[derive(Clone)]
pub struct PromptRepo {
    pool: PgPool,
}

impl PromptRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PromptStore for PromptRepo {
    async fn get_prompt(&self, prompt_id: &str) -> Result<PromptTemplate, StoreError> {
        let row = sqlx::query_as::<_, PromptRow>(
            "SELECT config, contents FROM prompts \
             WHERE prompt_id = $1 \
             ORDER BY created_at DESC \
             LIMIT 1",
        )
        .bind(prompt_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(anyhow::Error::from)?;

        row.map(PromptRow::into_template)
            .ok_or_else(|| StoreError::PromptNotFound(prompt_id.to_string()))
    }
}
