use async_trait::async_trait;

use crate::context::ModelContext;
use crate::error::ModelError;
use crate::types::{CandidatePuzzle, PromptTemplate};

/// Model-invocation seam.
///
/// Implementations render the template (substituting the JSON-serialized
/// context where the template references it), call the completion backend
/// and parse the reply into a candidate puzzle. Normalization and
/// validation of the candidate stay with the caller.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn generate(
        &self,
        template: &PromptTemplate,
        context: Option<&ModelContext>,
    ) -> Result<CandidatePuzzle, ModelError>;
}
