use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One group of four related words.
///
/// `embedded_substrings` is only present for hidden-word categories: when
/// set and non-empty, every word must contain at least one of the declared
/// substrings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub hint: String,
    pub words: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedded_substrings: Option<Vec<String>>,
}

/// Categories keyed by display name. Map order is meaningful: it is the
/// order the model produced and the order `word_list` flattens.
pub type CategoryMap = IndexMap<String, Category>;

/// What the model hands back, before normalization and validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidatePuzzle {
    pub categories: CategoryMap,
}

/// A validated, stored puzzle.
///
/// `word_list` is the per-category words flattened in map order, already
/// uppercased. It is persisted alongside the categories rather than
/// recomputed on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleData {
    pub categories: CategoryMap,
    pub word_list: Vec<String>,
}

/// The public projection of a puzzle: category names, hints and words only.
/// The flattened `word_list` and any `embedded_substrings` stay private.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PuzzleView {
    pub categories: IndexMap<String, CategoryView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryView {
    pub hint: String,
    pub words: Vec<String>,
}

impl From<&PuzzleData> for PuzzleView {
    fn from(data: &PuzzleData) -> Self {
        let categories = data
            .categories
            .iter()
            .map(|(name, category)| {
                let view = CategoryView {
                    hint: category.hint.clone(),
                    words: category.words.clone(),
                };
                (name.clone(), view)
            })
            .collect();
        Self { categories }
    }
}

/// The state of one daily slot.
///
/// Storage keeps the `Ready` payload and the `Generating` marker side by
/// side; reads collapse them with `Ready` taking precedence, so a stale
/// marker can never hide a finished puzzle.
#[derive(Debug, Clone, PartialEq)]
pub enum GameSlot {
    Empty,
    Generating { started_at: DateTime<Utc> },
    Ready(PuzzleData),
}

impl GameSlot {
    pub fn is_ready(&self) -> bool {
        matches!(self, GameSlot::Ready(_))
    }

    /// True if this slot holds a generation marker younger than `ttl_secs`.
    /// A marker older than the TTL is treated as a crashed attempt.
    pub fn is_fresh_lock(&self, now: DateTime<Utc>, ttl_secs: u64) -> bool {
        match self {
            GameSlot::Generating { started_at } => {
                now.signed_duration_since(*started_at) < chrono::Duration::seconds(ttl_secs as i64)
            }
            _ => false,
        }
    }
}

/// Decoding parameters attached to a stored prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptConfig {
    pub anthropic_version: String,
    pub max_tokens: u32,
    pub model: String,
    pub temperature: f64,
    pub top_k: u32,
}

/// A versioned prompt. `contents` may reference `${context}`, replaced at
/// invocation time with the JSON-serialized model context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptTemplate {
    pub config: PromptConfig,
    pub contents: String,
}
